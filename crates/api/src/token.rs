//! # Token 服务
//!
//! 签发与校验绑定账户 ID 的 HS256 JWT。服务端不保存会话，Token 在过期前始终有效。

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use coffer_core::account::entity::AccountId;
use coffer_core::common::time::{RealTimeProvider, TimeProvider};

use crate::types::Claims;

/// Token 有效期: 2 小时
const TOKEN_TTL_SECS: i64 = 2 * 60 * 60;

/// Token 签发/校验错误
///
/// 校验失败不区分具体原因 (签名、结构、过期)，统一为 `Invalid`。
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("error generating token: {0}")]
    Signing(String),
    #[error("invalid token")]
    Invalid,
}

/// # Summary
/// JWT 签发与校验服务。
///
/// # Invariants
/// - 签名密钥在构造时注入，生命周期与进程等同，之后不可修改。
/// - 只接受 HMAC 族算法 (HS256/HS384/HS512) 签名的 Token。
/// - 过期判断以注入的 `TimeProvider` 为准。
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn TimeProvider>,
}

impl TokenService {
    /// 使用真实系统时钟创建
    pub fn new(secret: &str) -> Self {
        Self::with_clock(secret, Arc::new(RealTimeProvider))
    }

    /// 使用指定时钟创建 (测试中注入 `FakeClockProvider`)
    pub fn with_clock(secret: &str, clock: Arc<dyn TimeProvider>) -> Self {
        Self::from_keys(
            EncodingKey::from_secret(secret.as_bytes()),
            DecodingKey::from_secret(secret.as_bytes()),
            clock,
        )
    }

    /// 使用已构造的密钥对创建
    ///
    /// 签名固定为 HS256，传入非 HMAC 族的 `encoding_key` 时 `issue` 会失败。
    pub fn from_keys(
        encoding_key: EncodingKey,
        decoding_key: DecodingKey,
        clock: Arc<dyn TimeProvider>,
    ) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.set_required_spec_claims(&["exp"]);
        // exp 由下方基于注入时钟的比较负责
        validation.validate_exp = false;

        Self {
            encoding_key,
            decoding_key,
            validation,
            clock,
        }
    }

    /// Token 有效期
    pub fn ttl() -> Duration {
        Duration::seconds(TOKEN_TTL_SECS)
    }

    /// # Summary
    /// 为账户签发 Token。
    ///
    /// # Logic
    /// 1. 构造 `{authorized: true, accountId, exp: now + 2h}`。
    /// 2. 以 HS256 签名。
    ///
    /// # Returns
    /// 签名后的 Token 字符串，签名失败返回 `TokenError::Signing`。
    pub fn issue(&self, account_id: AccountId) -> Result<String, TokenError> {
        let claims = Claims {
            authorized: true,
            account_id,
            exp: (self.clock.now() + Self::ttl()).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// # Summary
    /// 校验 Token 并取出绑定的账户 ID。
    ///
    /// # Logic
    /// 1. 解析 Header，拒绝非 HMAC 算法。
    /// 2. 使用同一密钥校验签名，要求 `exp` 与 `accountId` 存在。
    /// 3. `authorized` 必须为 true，且当前时间不晚于 `exp`。
    ///
    /// # Returns
    /// 账户 ID，任何失败均返回 `TokenError::Invalid`。
    pub fn verify(&self, token: &str) -> Result<AccountId, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!("token rejected: {}", e);
            TokenError::Invalid
        })?;

        let claims = data.claims;
        if !claims.authorized {
            return Err(TokenError::Invalid);
        }
        if self.clock.now().timestamp() > claims.exp {
            tracing::debug!("token for account {} expired at {}", claims.account_id, claims.exp);
            return Err(TokenError::Invalid);
        }

        Ok(claims.account_id)
    }
}
