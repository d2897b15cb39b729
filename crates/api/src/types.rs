//! # DTO (Data Transfer Object) 层
//!
//! 将内部领域模型转化为面向客户端 JSON 输出的轻量结构体。
//! 所有 DTO 必须派生 `utoipa::ToSchema` 以自动进入 Swagger 文档。

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use coffer_core::account::entity::{Account, AccountId};

// ============================================================
//  账户相关 DTO
// ============================================================

/// 开户请求体
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    /// 名
    #[schema(example = "Ada")]
    pub first_name: String,
    /// 姓
    #[schema(example = "Lovelace")]
    pub last_name: String,
    /// 初始余额 (允许负数)
    #[schema(example = 100.0)]
    pub balance: Decimal,
}

/// 账户 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    /// 账户 ID
    #[schema(example = 1)]
    pub id: AccountId,
    /// 名
    #[schema(example = "Ada")]
    pub first_name: String,
    /// 姓
    #[schema(example = "Lovelace")]
    pub last_name: String,
    /// 账号 (UUID)
    #[schema(example = "0b6f5a3e-3f0a-4c53-9b1e-6f1f3c1d2a10")]
    pub number: String,
    /// 余额
    #[schema(example = 100.0)]
    pub balance: Decimal,
    /// 创建时间 (ISO 8601)
    #[schema(example = "2026-03-01T00:00:00Z")]
    pub created_at: DateTime<Utc>,
}

/// 开户成功响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAccountResponse {
    /// 固定为 "created"
    #[schema(example = "created")]
    pub status: String,
    /// 绑定新账户的 JWT Bearer Token
    #[schema(example = "eyJhbGciOiJIUzI1NiIs...")]
    pub token: String,
    pub account: AccountResponse,
}

/// 删除成功响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteAccountResponse {
    /// 固定为 "deleted"
    #[schema(example = "deleted")]
    pub status: String,
    /// 被删除的账户 ID (字符串形式)
    #[schema(example = "1")]
    pub id: String,
}

// ============================================================
//  转账 DTO
// ============================================================

/// 转账请求体，服务端只做回显，不移动余额
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransferRequest {
    /// 收款账户 ID
    #[schema(example = 2)]
    pub to_account: AccountId,
    /// 金额
    #[schema(example = 25.5)]
    pub amount: Decimal,
}

// ============================================================
//  通用响应 DTO
// ============================================================

/// 统一错误响应体 `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 错误描述信息
    #[schema(example = "token not found")]
    pub error: String,
}

impl ApiErrorResponse {
    /// 从错误信息构建
    pub fn from_msg(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

// ============================================================
//  鉴权
// ============================================================

/// JWT Claims 内容 (内部使用，不暴露到 Swagger)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 是否已授权，签发时恒为 true
    pub authorized: bool,
    /// Token 绑定的账户 ID
    #[serde(rename = "accountId")]
    pub account_id: AccountId,
    /// 过期时间 (Unix 时间戳，秒)
    pub exp: i64,
}

// ============================================================
//  领域模型 → DTO 惯用转换 (impl From<T>)
// ============================================================

impl From<Account> for AccountResponse {
    fn from(a: Account) -> Self {
        Self {
            id: a.id,
            first_name: a.first_name,
            last_name: a.last_name,
            number: a.number,
            balance: a.balance,
            created_at: a.created_at,
        }
    }
}
