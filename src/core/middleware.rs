//! 核心中间件模块

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// 请求日志中间件
///
/// 沿用客户端提供的 `x-request-id`，否则生成一个，并回写到响应头。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let request_id = req
        .headers()
        .get(&REQUEST_ID_HEADER)
        .cloned()
        .unwrap_or_else(|| {
            HeaderValue::from_str(&Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
        });

    let mut response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    info!(
        request_id = request_id.to_str().unwrap_or_default(),
        "{} {} - {} - {}ms",
        method,
        uri,
        status,
        duration.as_millis()
    );

    response
        .headers_mut()
        .insert(REQUEST_ID_HEADER.clone(), request_id);
    response
}
