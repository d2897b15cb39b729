//! # 鉴权中间件
//!
//! 提供基于 JWT 的身份验证。除开户接口外的所有账户路由都挂载在此中间件之后。

use axum::extract::{FromRequestParts, Request, State};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use coffer_core::account::entity::AccountId;

use crate::error::ApiError;
use crate::server::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// 通过鉴权的账户 ID，由中间件写入 request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedAccount(pub AccountId);

/// 提取并验证 Authorization: Bearer <token>
///
/// # Logic
/// 1. 缺少头或前缀不是 `Bearer ` → 401 `token not found`。
/// 2. 前缀正确但头部含不可见字符，或 Token 校验失败 → 401 `invalid token`。
/// 3. 成功则注入 `AuthenticatedAccount` 并调用下游 Handler。
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let account_id = {
        let token = bearer_token(req.headers()).map_err(|e| {
            tracing::warn!("Rejected Authorization header on {}: {}", req.uri().path(), e);
            e
        })?;

        state.token_service.verify(token).map_err(|e| {
            tracing::warn!("JWT verification failed on {}: {}", req.uri().path(), e);
            ApiError::from(e)
        })?
    };

    req.extensions_mut().insert(AuthenticatedAccount(account_id));

    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(ApiError::MissingToken)?;

    match value.to_str() {
        Ok(text) => text.strip_prefix(BEARER_PREFIX).ok_or(ApiError::MissingToken),
        Err(_) if value.as_bytes().starts_with(BEARER_PREFIX.as_bytes()) => {
            Err(ApiError::InvalidToken)
        }
        Err(_) => Err(ApiError::MissingToken),
    }
}

// 在提取器中获取当前账户的快捷方式
impl<S> FromRequestParts<S> for AuthenticatedAccount
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedAccount>()
            .copied()
            .ok_or(ApiError::MissingToken)
    }
}
