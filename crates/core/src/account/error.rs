use thiserror::Error;

use super::entity::AccountId;

/// # Summary
/// 存储层错误枚举，处理数据库连接、读写失败等问题。
///
/// # Invariants
/// - `NotFound` 必须与其他存储错误区分开，上层据此返回 404。
#[derive(Error, Debug)]
pub enum StoreError {
    /// 数据库操作失败 (连接、约束冲突等)
    #[error("Database error: {0}")]
    Database(String),
    /// 记录未找到
    #[error("Account {0} not found")]
    NotFound(AccountId),
    /// 落库数据无法还原为实体
    #[error("Corrupt record: {0}")]
    Corrupt(String),
}
