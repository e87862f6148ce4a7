//! Defines the custom error type for the `rsa-hex-seal` crate.

use thiserror::Error;

/// The main error type for the `rsa-hex-seal` crate.
///
/// 字节层（密钥构造、加解密）的失败都以该类型返回；
/// 字符串便利层则把所有失败折叠为 `None`。
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed hex input: {0}")]
    MalformedHex(String),

    #[error("invalid RSA key material: {0}")]
    InvalidKeyMaterial(String),

    #[error("RSA key generation unavailable for {bits}-bit keys: {reason}")]
    KeyGenerationUnavailable { bits: usize, reason: String },

    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("decryption failed: {0}")]
    Decryption(String),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("configuration parse failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// 本 crate 统一使用的结果类型
pub type Result<T> = std::result::Result<T, Error>;
