//! 定义了 RSA 原语的核心 Trait。
use crate::asymmetric::keys::{KeyComponents, KeyPair, PrivateKeyHandle, PublicKeyHandle};
use crate::error::Result;

/// `RsaPrimitive` 定义了底层 RSA 实现必须提供的功能。
///
/// 密钥工厂、默认密钥对缓存和加解密编解码都只通过这个接口访问 RSA，
/// 因此可以注入其他实现（例如测试中统计生成次数的包装器）。
///
/// [`PublicKeyHandle`] 与 [`PrivateKeyHandle`] 只能在本 crate 内构造。
/// crate 外的实现不能自行创建句柄，需要把 `build_public_key`、`build_private_key`
/// 委托给 [`RsaCryptoSystem`](crate::RsaCryptoSystem)，生成的密钥对也必须来自它或来自已有的句柄。
pub trait RsaPrimitive: Send + Sync {
    /// 生成指定模数位数的密钥对
    ///
    /// 实现不支持该位数时必须返回 `Error::KeyGenerationUnavailable`。
    fn generate_key_pair(&self, bits: usize) -> Result<KeyPair>;

    /// 校验 (模数, 公钥指数) 并构造公钥
    fn build_public_key(&self, components: KeyComponents) -> Result<PublicKeyHandle>;

    /// 校验 (模数, 私钥指数) 并构造私钥
    fn build_private_key(&self, components: KeyComponents) -> Result<PrivateKeyHandle>;

    /// 使用公钥加密单个数据块，不做分块
    fn encrypt(&self, key: &PublicKeyHandle, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// 使用私钥解密单个数据块
    fn decrypt(&self, key: &PrivateKeyHandle, ciphertext: &[u8]) -> Result<Vec<u8>>;
}
