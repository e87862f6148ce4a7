//! 与浏览器端 JavaScript RSA 库互通的加解密。
//!
//! 该 JS 库在把文本转换为大整数时使用与本 crate 相反的字节顺序，
//! 因此加密前、解密后都要把整个字符串按字符逆转，两端才能对同一明文得到互相可解的密文。

use crate::asymmetric::cipher::{decrypt_string, encrypt_string};
use crate::asymmetric::keys::{PrivateKeyHandle, PublicKeyHandle};
use crate::asymmetric::traits::RsaPrimitive;
use crate::common::utils::reverse;

/// 生成可由 JS 端按其约定解密的密文：`encrypt_string(key, reverse(plaintext))`
pub fn encrypt_string_js_compatible<'k, P: RsaPrimitive + ?Sized>(
    primitive: &P,
    key: impl Into<Option<&'k PublicKeyHandle>>,
    plaintext: &str,
) -> Option<String> {
    encrypt_string(primitive, key, &reverse(plaintext))
}

/// 解密由 JS 端加密的密文：`reverse(decrypt_string(key, ciphertext_hex))`
///
/// 内层解密失败时直接返回 `None`，不做逆转。
pub fn decrypt_string_js_compatible<'k, 'c, P: RsaPrimitive + ?Sized>(
    primitive: &P,
    key: impl Into<Option<&'k PrivateKeyHandle>>,
    ciphertext_hex: impl Into<Option<&'c str>>,
) -> Option<String> {
    decrypt_string(primitive, key, ciphertext_hex).map(|text| reverse(&text))
}
