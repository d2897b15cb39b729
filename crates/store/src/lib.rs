//! # `coffer-store` - 账户存储适配器
//!
//! `AccountStore` 端口的两个实现：
//! - [`account::SqliteAccountStore`]：基于 sqlx 的 SQLite 持久化存储
//! - [`memory::MemoryAccountStore`]：基于 DashMap 的进程内存储，用于测试与临时运行

pub mod account;
pub mod memory;
