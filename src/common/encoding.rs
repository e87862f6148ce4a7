//! 十六进制编解码，密文和密钥参数在边界上的唯一表示形式。

use crate::error::{Error, Result};
use zeroize::Zeroizing;

/// 将字节序列编码为小写十六进制字符串，每个字节固定两位
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// 将十六进制字符串解码为字节序列
///
/// 输入大小写不敏感；长度为奇数或含有非十六进制字符时返回 [`Error::MalformedHex`]。
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    ::hex::decode(hex).map_err(|e| Error::MalformedHex(e.to_string()))
}

/// 与 [`hex_to_bytes`] 相同，但结果在释放时被擦除，用于解码私钥指数
pub fn hex_to_secret_bytes(hex: &str) -> Result<Zeroizing<Vec<u8>>> {
    hex_to_bytes(hex).map(Zeroizing::new)
}
