//! 产品数据模型

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::{error::AppError, extract::decode_json};

pub const DEFAULT_TAKE: i64 = 10;
pub const MAX_TAKE: i64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

/// 创建/更新产品请求
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    // 上限为 numeric(10,2) 能容纳的最大值
    #[serde(default)]
    #[validate(range(
        min = 0.0,
        max = 99_999_999.99,
        message = "Price must be between 0 and 99999999.99"
    ))]
    pub price: f64,
}

impl ProductPayload {
    /// 解码并校验请求体
    pub fn from_json(body: &[u8]) -> Result<Self, AppError> {
        let payload: ProductPayload = decode_json(body)?;
        payload.validate()?;
        Ok(payload)
    }
}

// 查询参数，原样保留字符串以便容忍非法值
#[derive(Debug, Default)]
pub struct ListQuery {
    pub skip: Option<String>,
    pub take: Option<String>,
}

impl ListQuery {
    /// 同名参数重复出现时取第一个
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        };

        Self {
            skip: first("skip"),
            take: first("take"),
        }
    }
}

/// 规范化后的分页窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub take: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            take: DEFAULT_TAKE,
        }
    }
}

impl From<&ListQuery> for Page {
    fn from(query: &ListQuery) -> Self {
        let parse = |value: &Option<String>| value.as_deref().and_then(|v| v.parse::<i64>().ok());

        let skip = parse(&query.skip).unwrap_or(0).max(0);
        let take = match parse(&query.take) {
            Some(take) if (1..=MAX_TAKE).contains(&take) => take,
            _ => DEFAULT_TAKE,
        };

        Self { skip, take }
    }
}
