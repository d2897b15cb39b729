pub mod account;
pub mod transfer;

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// 解析 JSON 请求体，不检查 `Content-Type`。
///
/// # Arguments
/// * `body` - 原始请求体。
/// * `what` - 请求名称，仅用于日志。
///
/// # Returns
/// 反序列化结果，语法或字段类型错误返回 `ApiError::Decode`。
pub(crate) fn decode_json<T: DeserializeOwned>(body: &Bytes, what: &str) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Error decoding {} request: {}", what, e);
        ApiError::Decode(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransferRequest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decode_json() {
        let body = Bytes::from_static(br#"{"to_account": 3, "amount": 12.5}"#);
        let req: TransferRequest = decode_json(&body, "transfer").unwrap();
        assert_eq!(req.to_account, 3);
        assert_eq!(req.amount, dec!(12.5));

        let bad: [&[u8]; 3] = [b"", b"not json", br#"{"to_account": "x", "amount": 1}"#];
        for raw in bad {
            let res: Result<TransferRequest, _> =
                decode_json(&Bytes::copy_from_slice(raw), "transfer");
            assert!(matches!(res, Err(ApiError::Decode(_))));
        }
    }
}
