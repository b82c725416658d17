//! # 产品 CRUD 服务
//!
//! 基于 Axum + SQLx 的产品管理 HTTP 服务，分层结构：
//! - `app`: 应用层，产品的模型、数据访问与处理器
//! - `core`: 核心层，错误、响应、提取器与中间件
//! - `infrastructure`: 基础设施层，配置、数据库与日志
//! - `router`: 路由注册

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod router;

pub use app::product::{AppState, Product, ProductPayload, ProductRepository};
pub use router::create_routes;
