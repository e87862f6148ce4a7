//! 字节层与字符串层的加解密编解码。
//!
//! 字节层返回带类型的 [`Error`](crate::Error)；字符串层把所有失败折叠为 `None`，
//! 调用方只需要判断“是否成功”。密文在边界上始终是小写十六进制字符串。

use crate::asymmetric::keys::{PrivateKeyHandle, PublicKeyHandle};
use crate::asymmetric::traits::RsaPrimitive;
use crate::common::encoding::{bytes_to_hex, hex_to_bytes};
use crate::common::utils::is_blank;
use crate::error::{Error, Result};

/// 使用公钥加密单个数据块并编码为十六进制
pub fn encrypt_to_hex<P: RsaPrimitive + ?Sized>(
    primitive: &P,
    key: &PublicKeyHandle,
    plaintext: &[u8],
) -> Result<String> {
    let ciphertext = primitive.encrypt(key, plaintext)?;
    Ok(bytes_to_hex(&ciphertext))
}

/// 解码十六进制密文并使用私钥解密
///
/// 十六进制解码失败同样报告为 [`Error::Decryption`]。
pub fn decrypt_from_hex<P: RsaPrimitive + ?Sized>(
    primitive: &P,
    key: &PrivateKeyHandle,
    ciphertext_hex: &str,
) -> Result<Vec<u8>> {
    let ciphertext = hex_to_bytes(ciphertext_hex)
        .map_err(|e| Error::Decryption(format!("invalid ciphertext: {}", e)))?;
    primitive.decrypt(key, &ciphertext)
}

/// 加密字符串，失败时返回 `None`
pub fn encrypt_string<'k, P: RsaPrimitive + ?Sized>(
    primitive: &P,
    key: impl Into<Option<&'k PublicKeyHandle>>,
    plaintext: &str,
) -> Option<String> {
    let Some(key) = key.into() else {
        tracing::debug!("No public key supplied, nothing to encrypt");
        return None;
    };
    encrypt_to_hex(primitive, key, plaintext.as_bytes())
        .inspect_err(|e| tracing::warn!("String encryption failed: {}", e))
        .ok()
}

/// 解密十六进制密文为字符串
///
/// 私钥缺失、密文为空白、解码或解密失败、明文不是合法 UTF-8 时都返回 `None`。
pub fn decrypt_string<'k, 'c, P: RsaPrimitive + ?Sized>(
    primitive: &P,
    key: impl Into<Option<&'k PrivateKeyHandle>>,
    ciphertext_hex: impl Into<Option<&'c str>>,
) -> Option<String> {
    let key = key.into()?;
    let ciphertext_hex = ciphertext_hex.into().filter(|c| !is_blank(c))?;

    let plaintext = decrypt_from_hex(primitive, key, ciphertext_hex)
        .inspect_err(|e| tracing::warn!("\"{}\" Decryption failed. Cause: {}", ciphertext_hex, e))
        .ok()?;

    String::from_utf8(plaintext)
        .inspect_err(|e| tracing::warn!("Decrypted data is not valid UTF-8: {}", e))
        .ok()
}
