//! # API 统一错误处理
//!
//! 将下层错误归类为有限的错误种类，再通过显式映射表转换为 HTTP 状态码与 JSON 响应体。

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use coffer_core::account::error::StoreError;

use crate::token::TokenError;
use crate::types::ApiErrorResponse;

/// API 层统一错误枚举
#[derive(Error, Debug)]
pub enum ApiError {
    /// 请求体无法解析
    #[error("{0}")]
    Decode(String),

    /// 路径参数不合法
    #[error("{0}")]
    Validation(String),

    /// 存储层故障 (连接、约束冲突等)
    #[error("{0}")]
    Storage(String),

    /// 资源不存在
    #[error("{0}")]
    NotFound(String),

    /// Token 签发失败
    #[error("{0}")]
    Signing(String),

    /// 请求未携带 Bearer Token
    #[error("token not found")]
    MissingToken,

    /// Token 签名、结构或有效期校验失败
    #[error("invalid token")]
    InvalidToken,

    /// 已认证但无权访问目标资源
    #[error("{0}")]
    Forbidden(String),
}

impl ApiError {
    /// 错误种类 → HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::BAD_REQUEST,
            ApiError::Signing(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::InvalidToken => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }
}

/// 将 `ApiError` 转换为 axum 的 HTTP 响应
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            // 存储与签名错误只记录日志，不向客户端透传细节
            ApiError::Storage(detail) => {
                tracing::error!("storage error: {}", detail);
                "storage error".to_string()
            }
            ApiError::Signing(detail) => {
                tracing::error!("token signing error: {}", detail);
                "error generating token".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ApiErrorResponse::from_msg(message))).into_response()
    }
}

/// 从 `StoreError` 转换，保留 NotFound 语义
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound(err.to_string()),
            _ => ApiError::Storage(err.to_string()),
        }
    }
}

/// 从 `TokenError` 转换
impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(msg) => ApiError::Signing(msg),
            TokenError::Invalid => ApiError::InvalidToken,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::Decode("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::Storage("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::Signing("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ApiError::MissingToken, StatusCode::UNAUTHORIZED),
            (ApiError::InvalidToken, StatusCode::UNAUTHORIZED),
            (ApiError::Forbidden("x".into()), StatusCode::FORBIDDEN),
        ];
        for (err, status) in cases {
            assert_eq!(err.status_code(), status, "{:?}", err);
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_store_not_found_stays_distinct() {
        let err: ApiError = StoreError::NotFound(3).into();
        assert!(matches!(err, ApiError::NotFound(ref m) if m == "Account 3 not found"));

        let err: ApiError = StoreError::Database("disk I/O error".into()).into();
        assert!(matches!(err, ApiError::Storage(_)));
    }

    #[test]
    fn test_auth_messages() {
        assert_eq!(ApiError::MissingToken.to_string(), "token not found");
        assert_eq!(ApiError::InvalidToken.to_string(), "invalid token");
        let err: ApiError = TokenError::Invalid.into();
        assert!(matches!(err, ApiError::InvalidToken));
    }
}
