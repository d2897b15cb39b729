use async_trait::async_trait;
use coffer_core::account::entity::{Account, AccountId, NewAccount};
use coffer_core::account::error::StoreError;
use coffer_core::account::port::AccountStore;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;

/// # Summary
/// 基于 DashMap 的内存账户存储。
///
/// # Invariants
/// - ID 由原子计数器分配，从 1 开始单调递增，删除后不复用。
/// - 进程退出即丢失数据，仅用于测试与临时运行。
pub struct MemoryAccountStore {
    accounts: DashMap<AccountId, Account>,
    next_id: AtomicI64,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create(&self, account: &NewAccount) -> Result<Account, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = account.clone().into_account(id);
        self.accounts.insert(id, created.clone());
        debug!("Account created in memory: id={}", id);
        Ok(created)
    }

    async fn get_by_id(&self, id: AccountId) -> Result<Account, StoreError> {
        self.accounts
            .get(&id)
            .map(|a| a.value().clone())
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Account>, StoreError> {
        let mut accounts: Vec<Account> = self.accounts.iter().map(|a| a.value().clone()).collect();
        accounts.sort_by_key(|a| a.id);
        Ok(accounts)
    }

    async fn update(&self, account: &Account) -> Result<(), StoreError> {
        debug!("update is not implemented, ignoring account {}", account.id);
        Ok(())
    }

    async fn delete(&self, id: AccountId) -> Result<(), StoreError> {
        self.accounts
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
