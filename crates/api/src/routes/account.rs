//! # 账户路由控制器
//!
//! 实现 `/account` 与 `/account/{id}` 路径下的 REST 接口。
//! 开户接口公开访问并签发 Token，其余接口均需要鉴权。

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use coffer_core::account::entity::{AccountId, NewAccount};

use crate::error::ApiError;
use crate::middleware::auth::AuthenticatedAccount;
use crate::routes::decode_json;
use crate::server::AppState;
use crate::types::{
    AccountResponse, ApiErrorResponse, CreateAccountRequest, CreateAccountResponse,
    DeleteAccountResponse,
};

/// 开户
///
/// 创建账户并为其签发有效期 2 小时的 JWT。Token 签发失败不会回滚已创建的账户。
#[utoipa::path(
    post,
    path = "/account",
    tag = "Account",
    request_body = CreateAccountRequest,
    responses(
        (status = 200, description = "开户成功", body = CreateAccountResponse),
        (status = 400, description = "请求体错误、存储或签名失败", body = ApiErrorResponse)
    )
)]
pub async fn create_account(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreateAccountResponse>, ApiError> {
    let req: CreateAccountRequest = decode_json(&body, "create account")?;

    let new_account = NewAccount::new(req.first_name, req.last_name, req.balance);
    let account = state.account_store.create(&new_account).await.map_err(|e| {
        tracing::warn!("Error creating account: {}", e);
        ApiError::from(e)
    })?;

    let token = state.token_service.issue(account.id)?;
    tracing::info!("Account {} created, token issued", account.id);

    Ok(Json(CreateAccountResponse {
        status: "created".to_string(),
        token,
        account: account.into(),
    }))
}

/// 列出全部账户
#[utoipa::path(
    get,
    path = "/account",
    tag = "Account",
    security(("bearer_jwt" = [])),
    responses(
        (status = 200, description = "账户列表", body = Vec<AccountResponse>),
        (status = 400, description = "存储错误", body = ApiErrorResponse),
        (status = 401, description = "未认证", body = ApiErrorResponse)
    )
)]
pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountResponse>>, ApiError> {
    let accounts = state.account_store.list().await.map_err(|e| {
        tracing::warn!("Error listing accounts: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(accounts.into_iter().map(Into::into).collect()))
}

/// 按 ID 获取账户
#[utoipa::path(
    get,
    path = "/account/{id}",
    tag = "Account",
    security(("bearer_jwt" = [])),
    params(
        ("id" = String, Path, description = "账户 ID (整数)")
    ),
    responses(
        (status = 200, description = "账户详情", body = AccountResponse),
        (status = 400, description = "ID 不合法", body = ApiErrorResponse),
        (status = 401, description = "未认证", body = ApiErrorResponse),
        (status = 403, description = "开启所有权校验时访问他人账户", body = ApiErrorResponse),
        (status = 404, description = "账户不存在", body = ApiErrorResponse)
    )
)]
pub async fn get_account(
    State(state): State<AppState>,
    principal: AuthenticatedAccount,
    Path(raw_id): Path<String>,
) -> Result<Json<AccountResponse>, ApiError> {
    let id = parse_account_id(&raw_id)?;
    authorize(&state, principal, id)?;

    let account = state.account_store.get_by_id(id).await?;
    Ok(Json(account.into()))
}

/// 按 ID 删除账户
#[utoipa::path(
    delete,
    path = "/account/{id}",
    tag = "Account",
    security(("bearer_jwt" = [])),
    params(
        ("id" = String, Path, description = "账户 ID (整数)")
    ),
    responses(
        (status = 200, description = "删除成功", body = DeleteAccountResponse),
        (status = 400, description = "ID 不合法", body = ApiErrorResponse),
        (status = 401, description = "未认证", body = ApiErrorResponse),
        (status = 403, description = "开启所有权校验时删除他人账户", body = ApiErrorResponse),
        (status = 404, description = "账户不存在", body = ApiErrorResponse)
    )
)]
pub async fn delete_account(
    State(state): State<AppState>,
    principal: AuthenticatedAccount,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteAccountResponse>, ApiError> {
    let id = parse_account_id(&raw_id)?;
    authorize(&state, principal, id)?;

    state.account_store.delete(id).await.map_err(|e| {
        tracing::warn!("Error deleting account {}: {}", id, e);
        ApiError::from(e)
    })?;

    Ok(Json(DeleteAccountResponse {
        status: "deleted".to_string(),
        id: id.to_string(),
    }))
}

/// 更新账户 (未实现)
///
/// 占位接口：鉴权通过后直接返回 200，不修改任何数据。
#[utoipa::path(
    put,
    path = "/account/{id}",
    tag = "Account",
    security(("bearer_jwt" = [])),
    params(
        ("id" = String, Path, description = "账户 ID")
    ),
    responses(
        (status = 200, description = "未实现，无任何效果"),
        (status = 401, description = "未认证", body = ApiErrorResponse)
    )
)]
pub async fn update_account(Path(raw_id): Path<String>) -> StatusCode {
    tracing::debug!("update account {} is not implemented", raw_id);
    StatusCode::OK
}

fn parse_account_id(raw: &str) -> Result<AccountId, ApiError> {
    raw.parse::<AccountId>().map_err(|_| {
        tracing::warn!("Error converting id to int: {:?}", raw);
        ApiError::Validation(format!("invalid id given: {}", raw))
    })
}

/// 所有权校验，仅在 `auth.enforce_ownership` 开启时生效
fn authorize(state: &AppState, principal: AuthenticatedAccount, id: AccountId) -> Result<(), ApiError> {
    if principal.0 == id {
        return Ok(());
    }
    if state.app_config.auth.enforce_ownership {
        tracing::warn!("Account {} tried to access account {}", principal.0, id);
        return Err(ApiError::Forbidden(format!(
            "account {} does not belong to token holder",
            id
        )));
    }
    tracing::debug!("Account {} accessing account {}", principal.0, id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_account_id() {
        assert_eq!(parse_account_id("42").unwrap(), 42);
        assert_eq!(parse_account_id("-1").unwrap(), -1);
        assert!(matches!(parse_account_id("abc"), Err(ApiError::Validation(_))));
        assert!(matches!(parse_account_id("1.5"), Err(ApiError::Validation(_))));
        assert!(matches!(parse_account_id(""), Err(ApiError::Validation(_))));
    }
}
