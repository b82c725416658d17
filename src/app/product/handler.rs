//! 产品处理器

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use super::{
    model::{ListQuery, Page, ProductPayload},
    repository::ProductRepository,
};
use crate::core::{error::AppError, extract::ProductId, response::respond_json};

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}

/// 分页获取产品列表
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let page = Page::from(&ListQuery::from_pairs(&params));
    let products = state.products.list(page).await?;

    Ok(respond_json(StatusCode::OK, &products))
}

pub async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Response, AppError> {
    let product = state
        .products
        .fetch(id)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to get product. {}", e)))?
        .ok_or_else(AppError::product_not_found)?;

    Ok(respond_json(StatusCode::OK, &product))
}

pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let payload = ProductPayload::from_json(&body)?;
    let product = state.products.insert(&payload).await?;

    info!("Created product: {} ({})", product.name, product.id);

    Ok(respond_json(StatusCode::CREATED, &product))
}

pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    body: Bytes,
) -> Result<Response, AppError> {
    let payload = ProductPayload::from_json(&body)?;
    let product = state
        .products
        .update(id, &payload)
        .await?
        .ok_or_else(AppError::product_not_found)?;

    info!("Updated product: {}", id);

    Ok(respond_json(StatusCode::OK, &product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Response, AppError> {
    if !state.products.delete(id).await? {
        return Err(AppError::product_not_found());
    }

    info!("Deleted product: {}", id);

    Ok(respond_json(StatusCode::OK, &json!({ "result": "deleted" })))
}
