use coffer_core::account::entity::NewAccount;
use coffer_core::account::error::StoreError;
use coffer_core::account::port::AccountStore;
use coffer_store::account::SqliteAccountStore;
use coffer_store::memory::MemoryAccountStore;
use rust_decimal_macros::dec;
use std::sync::Arc;
use tempfile::tempdir;

/// 对任意 AccountStore 实现执行同一套端口契约检查
async fn check_store_contract(store: &dyn AccountStore) {
    // 1. 创建: ID 由存储层分配
    let ada = store
        .create(&NewAccount::new("Ada", "Lovelace", dec!(100.0)))
        .await
        .unwrap();
    let alan = store
        .create(&NewAccount::new("Alan", "Turing", dec!(-42.50)))
        .await
        .unwrap();
    assert_ne!(ada.id, alan.id);
    assert_eq!(ada.balance, dec!(100.0));
    // 负余额原样保存
    assert_eq!(alan.balance, dec!(-42.50));

    // 2. 按 ID 查询与创建返回值一致
    let fetched = store.get_by_id(ada.id).await.unwrap();
    assert_eq!(fetched, ada);

    // 3. 列表按 ID 升序，且只有一条匹配
    let accounts = store.list().await.unwrap();
    assert_eq!(accounts.len(), 2);
    assert!(accounts[0].id < accounts[1].id);
    let matches: Vec<_> = accounts.iter().filter(|a| a.id == ada.id).collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].balance, dec!(100.0));

    // 4. update 是空操作
    let mut changed = ada.clone();
    changed.first_name = "Augusta".to_string();
    store.update(&changed).await.unwrap();
    assert_eq!(store.get_by_id(ada.id).await.unwrap().first_name, "Ada");

    // 5. 删除后再次删除与查询均为 NotFound
    store.delete(ada.id).await.unwrap();
    assert!(matches!(
        store.get_by_id(ada.id).await,
        Err(StoreError::NotFound(id)) if id == ada.id
    ));
    assert!(matches!(
        store.delete(ada.id).await,
        Err(StoreError::NotFound(id)) if id == ada.id
    ));
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_memory_store_contract() {
    let store = MemoryAccountStore::new();
    check_store_contract(&store).await;
}

#[tokio::test]
async fn test_sqlite_store_contract() {
    let tmp_dir = tempdir().expect("Failed to create temp dir");
    let store = SqliteAccountStore::new(tmp_dir.path())
        .await
        .expect("Failed to create sqlite store");
    check_store_contract(&store).await;
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let tmp_dir = tempdir().expect("Failed to create temp dir");
    let sqlite = SqliteAccountStore::new(tmp_dir.path()).await.unwrap();
    let memory = MemoryAccountStore::new();
    let stores: [&dyn AccountStore; 2] = [&sqlite, &memory];

    for store in stores {
        assert!(matches!(store.get_by_id(9999).await, Err(StoreError::NotFound(9999))));
        assert!(matches!(store.delete(9999).await, Err(StoreError::NotFound(9999))));
        assert!(store.list().await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_sqlite_store_persists_across_reopen() {
    let tmp_dir = tempdir().expect("Failed to create temp dir");

    let created = {
        let store = SqliteAccountStore::new(tmp_dir.path()).await.unwrap();
        store
            .create(&NewAccount::new("Grace", "Hopper", dec!(12.34)))
            .await
            .unwrap()
    };

    let reopened = SqliteAccountStore::new(tmp_dir.path()).await.unwrap();
    let fetched = reopened.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert!(tmp_dir.path().join("accounts.db").exists());
}

#[tokio::test]
async fn test_concurrent_creates_get_unique_ids() {
    let tmp_dir = tempdir().expect("Failed to create temp dir");
    let sqlite: Arc<dyn AccountStore> = Arc::new(SqliteAccountStore::new(tmp_dir.path()).await.unwrap());
    let memory: Arc<dyn AccountStore> = Arc::new(MemoryAccountStore::new());

    for store in [sqlite, memory] {
        let mut handles = vec![];
        for i in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create(&NewAccount::new(format!("User{}", i), "Concurrent", dec!(1)))
                    .await
                    .unwrap()
                    .id
            }));
        }

        let mut ids = vec![];
        for h in handles {
            ids.push(h.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20);
        assert_eq!(store.list().await.unwrap().len(), 20);
    }
}
