//! # `coffer-core` - 领域核心
//!
//! 定义账户实体、存储端口 (Port) 与全局配置结构。
//! 本 crate 不依赖任何具体的存储或传输实现，下游的 `coffer-store` 与
//! `coffer-api` 通过这里的 trait 组装在一起。

pub mod account;
pub mod common;
pub mod config;
