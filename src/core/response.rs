//! 核心响应处理模块
//!
//! 所有处理器都通过这里输出 JSON 响应，错误统一为 `{"error": "..."}`。

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::Response,
};
use serde::Serialize;
use tracing::error;

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse<'a> {
    pub error: &'a str,
}

/// 序列化任意载荷并以给定状态码输出
///
/// 序列化失败只记录日志，状态码保持不变，响应体为空。
pub fn respond_json<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Response {
    let body = match serde_json::to_vec(payload) {
        Ok(bytes) => Body::from(bytes),
        Err(e) => {
            error!("Failed to marshal response payload to json: {}", e);
            Body::empty()
        }
    };

    let mut response = Response::new(body);
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

/// 将错误消息包装为 `{"error": message}`
pub fn respond_error(status: StatusCode, message: &str) -> Response {
    respond_json(status, &ErrorResponse { error: message })
}
