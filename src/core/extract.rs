//! 请求提取器

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use super::error::AppError;

/// 路径中的数字 id
///
/// 路径段必须全部由十进制数字组成，否则视为路由不匹配，返回默认的 404；
/// 数字过大无法放入 `i32` 时返回 400。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i32);

impl ProductId {
    pub fn parse(segment: &str) -> Result<Self, IdRejection> {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdRejection::NoMatch);
        }

        segment
            .parse::<i32>()
            .map(ProductId)
            .map_err(|_| IdRejection::Invalid(segment.to_string()))
    }
}

/// id 提取失败的原因
#[derive(Debug, PartialEq, Eq)]
pub enum IdRejection {
    NoMatch,
    Invalid(String),
}

impl IntoResponse for IdRejection {
    fn into_response(self) -> Response {
        match self {
            IdRejection::NoMatch => StatusCode::NOT_FOUND.into_response(),
            IdRejection::Invalid(raw) => {
                AppError::Validation(format!("Invalid id: {}", raw)).into_response()
            }
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        ProductId::parse(&segment).map_err(IntoResponse::into_response)
    }
}

/// 解码 JSON 请求体，不检查 Content-Type
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_ids() {
        assert_eq!(ProductId::parse("1"), Ok(ProductId(1)));
        assert_eq!(ProductId::parse("007"), Ok(ProductId(7)));
        assert_eq!(ProductId::parse("2147483647"), Ok(ProductId(i32::MAX)));
    }

    #[test]
    fn non_digit_segments_do_not_match() {
        for segment in ["", "abc", "-1", "+1", "1.5", "12a", " 1"] {
            assert_eq!(ProductId::parse(segment), Err(IdRejection::NoMatch), "{segment:?}");
        }
    }

    #[test]
    fn overflowing_ids_are_invalid() {
        assert_eq!(
            ProductId::parse("2147483648"),
            Err(IdRejection::Invalid("2147483648".to_string()))
        );
    }

    #[test]
    fn malformed_json_is_a_validation_error() {
        let result: Result<serde_json::Value, _> = decode_json(b"{\"name\":");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
