use async_trait::async_trait;
use chrono::{DateTime, Utc};
use coffer_core::account::entity::{Account, AccountId, NewAccount};
use coffer_core::account::error::StoreError;
use coffer_core::account::port::AccountStore;
use rust_decimal::Decimal;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// 默认账户数据库文件名
const DEFAULT_ACCOUNT_DB: &str = "accounts.db";

const SELECT_COLUMNS: &str = "id, first_name, last_name, number, balance, created_at";

type AccountRow = (i64, String, String, String, String, DateTime<Utc>);

/// AccountStore 的 SQLite 实现。
///
/// # Summary
/// 在 `<data_dir>/accounts.db` 中维护 `accounts` 表。余额以十进制文本保存，避免浮点误差。
///
/// # Invariants
/// * 表结构在存储实例创建时初始化。
/// * 所有操作均通过共享的 `SqlitePool` 执行，可被多个请求并发调用。
pub struct SqliteAccountStore {
    pool: SqlitePool,
}

impl SqliteAccountStore {
    /// 打开 (或创建) 数据目录下的账户数据库并初始化表结构。
    ///
    /// # Logic
    /// 1. 确保数据目录存在。
    /// 2. 配置 SQLite 连接选项，开启 `create_if_missing`。
    /// 3. 连接数据库并执行 DDL。
    ///
    /// # Arguments
    /// * `data_dir` - 数据根目录。
    ///
    /// # Returns
    /// * `Result<Self, StoreError>` - 存储实例或数据库错误。
    pub async fn new(data_dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(data_dir).map_err(|e| StoreError::Database(e.to_string()))?;

        let options = SqliteConnectOptions::new()
            .filename(data_dir.join(DEFAULT_ACCOUNT_DB))
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(10));

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Self::with_pool(pool).await
    }

    /// 使用外部已建立的连接池，仅负责初始化表结构
    pub async fn with_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS accounts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                number TEXT NOT NULL UNIQUE,
                balance TEXT NOT NULL,
                created_at DATETIME NOT NULL
            );
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Self { pool })
    }
}

fn row_to_account(row: AccountRow) -> Result<Account, StoreError> {
    let balance = Decimal::from_str(&row.4)
        .map_err(|e| StoreError::Corrupt(format!("account {} balance {:?}: {}", row.0, row.4, e)))?;
    Ok(Account {
        id: row.0,
        first_name: row.1,
        last_name: row.2,
        number: row.3,
        balance,
        created_at: row.5,
    })
}

#[async_trait]
impl AccountStore for SqliteAccountStore {
    /// # Summary
    /// 插入新账户并取回落库后的完整记录。
    ///
    /// # Logic
    /// 使用 `INSERT ... RETURNING` 一次性拿到自增 ID，返回值与后续查询结果完全一致。
    async fn create(&self, account: &NewAccount) -> Result<Account, StoreError> {
        let row: AccountRow = sqlx::query_as(&format!(
            "INSERT INTO accounts (first_name, last_name, number, balance, created_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING {SELECT_COLUMNS}"
        ))
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.number)
        .bind(account.balance.to_string())
        .bind(account.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        let created = row_to_account(row)?;
        info!("Account created: id={} number={}", created.id, created.number);
        Ok(created)
    }

    async fn get_by_id(&self, id: AccountId) -> Result<Account, StoreError> {
        let row: Option<AccountRow> =
            sqlx::query_as(&format!("SELECT {SELECT_COLUMNS} FROM accounts WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| StoreError::Database(e.to_string()))?;

        row.map(row_to_account)
            .transpose()?
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Account>, StoreError> {
        let rows: Vec<AccountRow> =
            sqlx::query_as(&format!("SELECT {SELECT_COLUMNS} FROM accounts ORDER BY id"))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| StoreError::Database(e.to_string()))?;

        rows.into_iter().map(row_to_account).collect()
    }

    async fn update(&self, account: &Account) -> Result<(), StoreError> {
        debug!("update is not implemented, ignoring account {}", account.id);
        Ok(())
    }

    /// # Summary
    /// 删除账户，依据受影响行数判断记录是否存在。
    async fn delete(&self, id: AccountId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        info!("Account {} deleted", id);
        Ok(())
    }
}
