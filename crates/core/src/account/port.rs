use async_trait::async_trait;

use super::entity::{Account, AccountId, NewAccount};
use super::error::StoreError;

/// # Summary
/// 账户存储接口 (Port)，与具体存储技术无关。
///
/// # Invariants
/// - 实现者必须可被多个请求并发调用。
/// - 目标记录不存在时，`get_by_id` 与 `delete` 必须返回 `StoreError::NotFound`，
///   而不是空结果或其他错误。
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// # Summary
    /// 持久化新账户。
    ///
    /// # Logic
    /// 1. 写入记录并由存储层分配自增 ID。
    /// 2. 返回落库后的完整实体。
    ///
    /// # Arguments
    /// * `account`: 待创建的账户。
    ///
    /// # Returns
    /// 带有新 ID 的 `Account`，失败返回 `StoreError::Database`。
    async fn create(&self, account: &NewAccount) -> Result<Account, StoreError>;

    /// # Summary
    /// 按 ID 查询账户。
    ///
    /// # Returns
    /// 不存在时返回 `StoreError::NotFound`。
    async fn get_by_id(&self, id: AccountId) -> Result<Account, StoreError>;

    /// # Summary
    /// 列出全部账户，按 ID 升序，不分页。
    async fn list(&self) -> Result<Vec<Account>, StoreError>;

    /// # Summary
    /// 更新账户。
    ///
    /// # Logic
    /// 尚未实现：所有实现都应当是无副作用的空操作并返回 Ok。
    async fn update(&self, account: &Account) -> Result<(), StoreError>;

    /// # Summary
    /// 按 ID 删除账户。
    ///
    /// # Returns
    /// 未删除任何记录时返回 `StoreError::NotFound`。
    async fn delete(&self, id: AccountId) -> Result<(), StoreError>;
}
