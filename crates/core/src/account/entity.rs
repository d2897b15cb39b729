use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 账户在存储层中的唯一标识
pub type AccountId = i64;

/// # Summary
/// 账户实体，代表一个已持久化的客户账户。
///
/// # Invariants
/// - `id` 由存储层在创建时分配，客户端不可指定。
/// - `created_at` 仅在创建时写入一次。
/// - `balance` 不做非负约束，负数原样保存。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    // 存储层分配的唯一 ID
    pub id: AccountId,
    // 名
    pub first_name: String,
    // 姓
    pub last_name: String,
    // 随机生成的账号 (UUID v4)，不参与业务逻辑
    pub number: String,
    // 账户余额
    pub balance: Decimal,
    // 创建时间 (UTC)
    pub created_at: DateTime<Utc>,
}

/// # Summary
/// 待创建的账户，尚未分配 `id`。
///
/// 由 Handler 根据请求构造，交给 `AccountStore::create` 落库后换回完整的 `Account`。
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub number: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

impl NewAccount {
    /// 生成随机账号并以当前时间作为创建时间
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            number: Uuid::new_v4().to_string(),
            balance,
            created_at: Utc::now(),
        }
    }

    /// 绑定存储层分配的 ID，得到完整实体
    pub fn into_account(self, id: AccountId) -> Account {
        Account {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            number: self.number,
            balance: self.balance,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_account_keeps_negative_balance() {
        let new = NewAccount::new("Ada", "Lovelace", dec!(-12.5));
        assert_eq!(new.balance, dec!(-12.5));
        assert!(Uuid::parse_str(&new.number).is_ok());

        let account = new.clone().into_account(7);
        assert_eq!(account.id, 7);
        assert_eq!(account.number, new.number);
        assert_eq!(account.created_at, new.created_at);
    }

    #[test]
    fn test_account_numbers_are_unique() {
        let a = NewAccount::new("A", "B", dec!(0));
        let b = NewAccount::new("A", "B", dec!(0));
        assert_ne!(a.number, b.number);
    }

    #[test]
    fn test_balance_serializes_as_number() {
        let account = NewAccount::new("Ada", "Lovelace", dec!(100.0)).into_account(1);
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["balance"].as_f64(), Some(100.0));
        assert_eq!(json["first_name"], "Ada");
    }
}
