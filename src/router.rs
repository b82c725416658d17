//! 路由注册

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::app::product::{handler, AppState};
use crate::core::middleware::request_logging_middleware;

/// 创建路由
///
/// `:id` 只接受十进制数字，由 [`crate::core::extract::ProductId`] 负责校验。
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/products",
            get(handler::list_products).post(handler::create_product),
        )
        .route(
            "/products/:id",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
