//! 产品模块

pub mod handler;
pub mod model;
pub mod repository;

pub use handler::AppState;
pub use model::{Page, Product, ProductPayload};
pub use repository::{PgProductRepository, ProductRepository};
