//! # 转账路由控制器
//!
//! 当前只解析并回显请求，不做任何余额变动。

use axum::Json;
use axum::body::Bytes;

use crate::error::ApiError;
use crate::middleware::auth::AuthenticatedAccount;
use crate::routes::decode_json;
use crate::types::{ApiErrorResponse, TransferRequest};

/// 转账 (回显)
#[utoipa::path(
    post,
    path = "/transfer",
    tag = "Transfer",
    security(("bearer_jwt" = [])),
    request_body = TransferRequest,
    responses(
        (status = 200, description = "原样返回请求体", body = TransferRequest),
        (status = 400, description = "请求体错误", body = ApiErrorResponse),
        (status = 401, description = "未认证", body = ApiErrorResponse)
    )
)]
pub async fn transfer(
    principal: AuthenticatedAccount,
    body: Bytes,
) -> Result<Json<TransferRequest>, ApiError> {
    let req: TransferRequest = decode_json(&body, "transfer")?;

    tracing::info!(
        "Transfer request from account {} to account {} ({}), not executed",
        principal.0,
        req.to_account,
        req.amount
    );
    Ok(Json(req))
}
