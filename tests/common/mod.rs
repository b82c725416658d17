#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use product_api::{app::product::Page, create_routes, AppState, Product, ProductPayload, ProductRepository};
use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};
use tower::ServiceExt;

/// 内存存储，行为与 products 表一致：自增 id，按 id 排序，价格舍入到分
#[derive(Default)]
pub struct MemoryProductRepository {
    rows: Mutex<BTreeMap<i32, Product>>,
    next_id: Mutex<i32>,
    failing: AtomicBool,
}

impl MemoryProductRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// 模拟存储故障
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn seed(&self, count: i32) {
        for i in 1..=count {
            let payload = ProductPayload {
                name: format!("Product {}", i),
                price: f64::from(i * 10),
            };
            self.insert_row(&payload);
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.failing.load(Ordering::SeqCst) {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }

    fn insert_row(&self, payload: &ProductPayload) -> Product {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let product = Product {
            id: *next_id,
            name: payload.name.clone(),
            price: round_to_cents(payload.price),
        };
        self.rows
            .lock()
            .unwrap()
            .insert(product.id, product.clone());
        product
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn fetch(&self, id: i32) -> Result<Option<Product>, sqlx::Error> {
        self.check()?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, payload: &ProductPayload) -> Result<Product, sqlx::Error> {
        self.check()?;
        Ok(self.insert_row(payload))
    }

    async fn update(
        &self,
        id: i32,
        payload: &ProductPayload,
    ) -> Result<Option<Product>, sqlx::Error> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&id).map(|row| {
            row.name = payload.name.clone();
            row.price = round_to_cents(payload.price);
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        self.check()?;
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }

    async fn list(&self, page: Page) -> Result<Vec<Product>, sqlx::Error> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .skip(page.skip as usize)
            .take(page.take as usize)
            .cloned()
            .collect())
    }
}

// numeric(10,2) 的舍入
fn round_to_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

pub fn app_with(repository: Arc<dyn ProductRepository>) -> Router {
    create_routes(AppState::new(repository))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

pub fn check_response_code(expected: StatusCode, response: &Response) {
    assert_eq!(
        response.status(),
        expected,
        "Expected status code to be {}. Got {}",
        expected,
        response.status()
    );
}
