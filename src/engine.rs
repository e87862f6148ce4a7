use crate::asymmetric::cache::DefaultKeyPairCache;
use crate::asymmetric::cipher;
use crate::asymmetric::js_compat;
use crate::asymmetric::keys::{self, KeyPair, PrivateKeyHandle, PublicKeyHandle};
use crate::asymmetric::systems::traditional::RsaCryptoSystem;
use crate::asymmetric::traits::RsaPrimitive;
use crate::common::config::RsaConfig;
use crate::common::utils::is_blank;
use crate::error::Result;
use std::sync::Arc;

/// `RsaEngine` 是所有 RSA 操作的统一入口。
///
/// 它持有一个 [`RsaPrimitive`] 实现和一个 [`DefaultKeyPairCache`]，
/// 默认密钥对在第一次需要时生成，并在引擎的生命周期内保持不变。
/// 需要进程级共享的默认身份时，把同一个引擎放进 `Arc` 传给各个调用方即可。
pub struct RsaEngine<P: RsaPrimitive = RsaCryptoSystem> {
    primitive: P,
    cache: DefaultKeyPairCache,
}

impl RsaEngine<RsaCryptoSystem> {
    /// Creates an engine backed by the `rsa` crate with a 1024-bit default key pair.
    /// 创建使用默认配置的引擎。
    pub fn new() -> Self {
        Self::with_config(&RsaConfig::default())
    }

    pub fn with_config(config: &RsaConfig) -> Self {
        Self::with_primitive(RsaCryptoSystem, config)
    }
}

impl Default for RsaEngine<RsaCryptoSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: RsaPrimitive> RsaEngine<P> {
    /// 使用自定义的 RSA 原语创建引擎
    pub fn with_primitive(primitive: P, config: &RsaConfig) -> Self {
        Self {
            primitive,
            cache: DefaultKeyPairCache::new(config.key_bits),
        }
    }

    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    pub fn cache(&self) -> &DefaultKeyPairCache {
        &self.cache
    }

    // --- 密钥工厂 ---

    pub fn public_key_from_components(
        &self,
        modulus: &[u8],
        public_exponent: &[u8],
    ) -> Result<PublicKeyHandle> {
        keys::public_key_from_components(&self.primitive, modulus, public_exponent)
    }

    pub fn private_key_from_components(
        &self,
        modulus: &[u8],
        private_exponent: &[u8],
    ) -> Result<PrivateKeyHandle> {
        keys::private_key_from_components(&self.primitive, modulus, private_exponent)
    }

    pub fn public_key_from_hex<'m, 'e>(
        &self,
        hex_modulus: impl Into<Option<&'m str>>,
        hex_public_exponent: impl Into<Option<&'e str>>,
    ) -> Option<PublicKeyHandle> {
        keys::public_key_from_hex(&self.primitive, hex_modulus, hex_public_exponent)
    }

    pub fn private_key_from_hex<'m, 'e>(
        &self,
        hex_modulus: impl Into<Option<&'m str>>,
        hex_private_exponent: impl Into<Option<&'e str>>,
    ) -> Option<PrivateKeyHandle> {
        keys::private_key_from_hex(&self.primitive, hex_modulus, hex_private_exponent)
    }

    // --- 默认密钥对 ---

    /// 返回默认密钥对，第一次调用时生成
    pub fn default_key_pair(&self) -> Result<Arc<KeyPair>> {
        self.cache.get_or_generate(&self.primitive)
    }

    pub fn default_public_key(&self) -> Result<PublicKeyHandle> {
        Ok(self.default_key_pair()?.public_key().clone())
    }

    pub fn default_private_key(&self) -> Result<PrivateKeyHandle> {
        Ok(self.default_key_pair()?.private_key().clone())
    }

    fn default_pair_or_none(&self) -> Option<Arc<KeyPair>> {
        self.default_key_pair().ok()
    }

    // --- 字节层 ---

    pub fn encrypt_to_hex(&self, key: &PublicKeyHandle, plaintext: &[u8]) -> Result<String> {
        cipher::encrypt_to_hex(&self.primitive, key, plaintext)
    }

    pub fn decrypt_from_hex(&self, key: &PrivateKeyHandle, ciphertext_hex: &str) -> Result<Vec<u8>> {
        cipher::decrypt_from_hex(&self.primitive, key, ciphertext_hex)
    }

    // --- 字符串层 ---

    pub fn encrypt_string<'k>(
        &self,
        key: impl Into<Option<&'k PublicKeyHandle>>,
        plaintext: &str,
    ) -> Option<String> {
        cipher::encrypt_string(&self.primitive, key, plaintext)
    }

    pub fn decrypt_string<'k, 'c>(
        &self,
        key: impl Into<Option<&'k PrivateKeyHandle>>,
        ciphertext_hex: impl Into<Option<&'c str>>,
    ) -> Option<String> {
        cipher::decrypt_string(&self.primitive, key, ciphertext_hex)
    }

    /// 使用默认公钥加密字符串
    pub fn encrypt_string_with_default_key(&self, plaintext: &str) -> Option<String> {
        let pair = self.default_pair_or_none()?;
        self.encrypt_string(pair.public_key(), plaintext)
    }

    /// 使用默认私钥解密字符串；密文为空白时不会触发密钥生成
    pub fn decrypt_string_with_default_key<'c>(
        &self,
        ciphertext_hex: impl Into<Option<&'c str>>,
    ) -> Option<String> {
        let ciphertext_hex = ciphertext_hex.into().filter(|c| !is_blank(c))?;
        let pair = self.default_pair_or_none()?;
        self.decrypt_string(pair.private_key(), ciphertext_hex)
    }

    // --- JS 兼容层 ---

    pub fn encrypt_string_js_compatible<'k>(
        &self,
        key: impl Into<Option<&'k PublicKeyHandle>>,
        plaintext: &str,
    ) -> Option<String> {
        js_compat::encrypt_string_js_compatible(&self.primitive, key, plaintext)
    }

    pub fn decrypt_string_js_compatible<'k, 'c>(
        &self,
        key: impl Into<Option<&'k PrivateKeyHandle>>,
        ciphertext_hex: impl Into<Option<&'c str>>,
    ) -> Option<String> {
        js_compat::decrypt_string_js_compatible(&self.primitive, key, ciphertext_hex)
    }

    pub fn encrypt_string_js_compatible_with_default_key(&self, plaintext: &str) -> Option<String> {
        let pair = self.default_pair_or_none()?;
        self.encrypt_string_js_compatible(pair.public_key(), plaintext)
    }

    pub fn decrypt_string_js_compatible_with_default_key<'c>(
        &self,
        ciphertext_hex: impl Into<Option<&'c str>>,
    ) -> Option<String> {
        let ciphertext_hex = ciphertext_hex.into().filter(|c| !is_blank(c))?;
        let pair = self.default_pair_or_none()?;
        self.decrypt_string_js_compatible(pair.private_key(), ciphertext_hex)
    }
}
