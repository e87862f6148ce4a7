//! `RsaCryptoSystem` 提供了基于 RSA PKCS#1 v1.5 的非对称加解密功能。
//!
//! 私钥只由 (模数, 私钥指数) 组成，不包含素因子，
//! 因此解密直接计算 `c^d mod n` 后去除 PKCS#1 v1.5 填充。

use crate::asymmetric::keys::{KeyComponents, KeyPair, PrivateKeyHandle, PublicKeyHandle};
use crate::asymmetric::traits::RsaPrimitive;
use crate::error::{Error, Result};
use rsa::rand_core::OsRng as RsaOsRng;
use rsa::traits::{PrivateKeyParts, PublicKeyParts};
use rsa::{BigUint, Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

/// 支持的最小模数位数
pub const MIN_KEY_BITS: usize = 512;

/// 支持的最大模数位数
pub const MAX_KEY_BITS: usize = 16384;

/// PKCS#1 v1.5 填充至少占用的字节数
pub const PKCS1_V15_OVERHEAD: usize = 11;

const DECRYPTION_FAILED: &str = "RSA解密失败";

/// RSA加密系统实现
///
/// 提供标准RSA PKCS#1 v1.5加密和解密功能，密钥生成使用操作系统随机源。
#[derive(Clone, Copy, Debug, Default)]
pub struct RsaCryptoSystem;

impl RsaCryptoSystem {
    fn to_rsa_public_key(key: &PublicKeyHandle) -> Result<RsaPublicKey> {
        RsaPublicKey::new_with_max_size(
            key.modulus().clone(),
            key.public_exponent().clone(),
            MAX_KEY_BITS,
        )
        .map_err(|e| Error::InvalidKeyMaterial(format!("解析RSA公钥失败: {}", e)))
    }

    fn check_modulus(modulus: &BigUint) -> Result<()> {
        let bits = modulus.bits();
        if !(MIN_KEY_BITS..=MAX_KEY_BITS).contains(&bits) {
            return Err(Error::InvalidKeyMaterial(format!(
                "模数位数 {} 不在支持范围 {}..={} 内",
                bits, MIN_KEY_BITS, MAX_KEY_BITS
            )));
        }
        if modulus.to_bytes_le()[0] & 1 == 0 {
            return Err(Error::InvalidKeyMaterial("模数不能为偶数".to_string()));
        }
        Ok(())
    }
}

impl RsaPrimitive for RsaCryptoSystem {
    fn generate_key_pair(&self, bits: usize) -> Result<KeyPair> {
        if !(MIN_KEY_BITS..=MAX_KEY_BITS).contains(&bits) {
            return Err(Error::KeyGenerationUnavailable {
                bits,
                reason: format!("supported sizes are {}..={} bits", MIN_KEY_BITS, MAX_KEY_BITS),
            });
        }

        let mut rsa_rng = RsaOsRng;
        let private_key = RsaPrivateKey::new(&mut rsa_rng, bits).map_err(|e| {
            Error::KeyGenerationUnavailable {
                bits,
                reason: format!("生成RSA密钥失败: {}", e),
            }
        })?;

        let public = PublicKeyHandle::new(KeyComponents::new(
            private_key.n().clone(),
            private_key.e().clone(),
        ));
        let private = PrivateKeyHandle::new(KeyComponents::new(
            private_key.n().clone(),
            private_key.d().clone(),
        ));

        Ok(KeyPair::new(public, private))
    }

    fn build_public_key(&self, components: KeyComponents) -> Result<PublicKeyHandle> {
        Self::check_modulus(components.modulus())?;
        let key = PublicKeyHandle::new(components);
        Self::to_rsa_public_key(&key)?;
        Ok(key)
    }

    fn build_private_key(&self, components: KeyComponents) -> Result<PrivateKeyHandle> {
        Self::check_modulus(components.modulus())?;
        let d = components.exponent();
        if d.bits() == 0 || d >= components.modulus() {
            return Err(Error::InvalidKeyMaterial(
                "私钥指数必须满足 0 < d < n".to_string(),
            ));
        }
        Ok(PrivateKeyHandle::new(components))
    }

    fn encrypt(&self, key: &PublicKeyHandle, plaintext: &[u8]) -> Result<Vec<u8>> {
        let public_key = Self::to_rsa_public_key(key)?;

        let mut rng = RsaOsRng;
        public_key
            .encrypt(&mut rng, Pkcs1v15Encrypt, plaintext)
            .map_err(|e| Error::Encryption(format!("RSA加密失败: {}", e)))
    }

    /// 计算 `c^d mod n` 并去除填充
    ///
    /// 私钥不含公钥指数和素因子，无法对 `c` 做盲化，`modpow` 也不是常数时间的。
    /// 长度、范围和填充错误都返回同一条 [`Error::Decryption`] 消息。
    fn decrypt(&self, key: &PrivateKeyHandle, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let k = key.size();
        if ciphertext.len() != k {
            return Err(decryption_failed());
        }

        let c = BigUint::from_bytes_be(ciphertext);
        if &c >= key.modulus() {
            return Err(decryption_failed());
        }

        let m = c.modpow(key.private_exponent(), key.modulus());
        let mut em = Zeroizing::new(vec![0u8; k]);
        let m_bytes = Zeroizing::new(m.to_bytes_be());
        em[k - m_bytes.len()..].copy_from_slice(&m_bytes);

        pkcs1v15_unpad(&em).ok_or_else(decryption_failed)
    }
}

fn decryption_failed() -> Error {
    Error::Decryption(DECRYPTION_FAILED.to_string())
}

/// 去除 PKCS#1 v1.5 加密填充：`00 || 02 || PS(>=8 个非零字节) || 00 || M`
fn pkcs1v15_unpad(em: &[u8]) -> Option<Vec<u8>> {
    if em.len() < PKCS1_V15_OVERHEAD || em[0] != 0x00 || em[1] != 0x02 {
        return None;
    }

    let separator = 2 + em[2..].iter().position(|&byte| byte == 0)?;
    if separator < 2 + 8 {
        return None;
    }
    Some(em[separator + 1..].to_vec())
}
