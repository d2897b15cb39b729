//! # `coffer-api` - HTTP API 网关
//!
//! 本 crate 是 Coffer 账户服务的 HTTP/REST 入口。
//! 使用 `axum` 构建路由与控制器，通过 `utoipa` 自动生成 OpenAPI 3.0 Swagger 文档。
//!
//! ## 架构职责
//! - 开户并签发 JWT (开户接口无需鉴权)
//! - 对其余账户接口执行 Bearer JWT 鉴权
//! - 调用下层 `AccountStore` 完成持久化
//! - 将领域模型转换为 DTO 返回给客户端

pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod token;
pub mod types;
