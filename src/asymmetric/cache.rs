//! 默认密钥对缓存。
//!
//! 第一次访问时生成密钥对，之后在缓存的整个生命周期内复用同一个密钥对。
//! 并发的首次访问只会触发一次生成；生成失败不会写入缓存，下一次访问会重试。

use crate::asymmetric::keys::KeyPair;
use crate::asymmetric::traits::RsaPrimitive;
use crate::common::config::DEFAULT_KEY_BITS;
use crate::error::Result;
use arc_swap::ArcSwapOption;
use std::sync::{Arc, Mutex, PoisonError};

/// 惰性初始化的默认密钥对
pub struct DefaultKeyPairCache {
    key_bits: usize,
    current: ArcSwapOption<KeyPair>,
    init_lock: Mutex<()>,
}

impl DefaultKeyPairCache {
    pub fn new(key_bits: usize) -> Self {
        Self {
            key_bits,
            current: ArcSwapOption::new(None),
            init_lock: Mutex::new(()),
        }
    }

    pub fn key_bits(&self) -> usize {
        self.key_bits
    }

    /// 已缓存的密钥对；尚未生成时返回 `None`
    pub fn cached(&self) -> Option<Arc<KeyPair>> {
        self.current.load_full()
    }

    /// 返回默认密钥对，必要时使用 `primitive` 生成
    ///
    /// 所有调用者得到的都是同一个 `Arc`。
    pub fn get_or_generate<P: RsaPrimitive + ?Sized>(&self, primitive: &P) -> Result<Arc<KeyPair>> {
        if let Some(pair) = self.current.load_full() {
            return Ok(pair);
        }

        let _guard = self
            .init_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // 等锁期间可能已经由其他线程生成
        if let Some(pair) = self.current.load_full() {
            return Ok(pair);
        }

        tracing::debug!("Generating default {}-bit RSA key pair", self.key_bits);
        let pair = primitive
            .generate_key_pair(self.key_bits)
            .inspect_err(|e| tracing::warn!("Default RSA key pair generation failed: {}", e))?;
        let pair = Arc::new(pair);
        self.current.store(Some(Arc::clone(&pair)));
        tracing::debug!("Default RSA key pair cached");

        Ok(pair)
    }
}

impl Default for DefaultKeyPairCache {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_BITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asymmetric::keys::{KeyComponents, PrivateKeyHandle, PublicKeyHandle};
    use crate::asymmetric::systems::traditional::rsa::RsaCryptoSystem;
    use crate::asymmetric::test_keys::sample_key_pair;
    use crate::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// 前 `failures` 次生成失败，之后返回固定的示例密钥对
    struct FlakyPrimitive {
        failures: usize,
        calls: AtomicUsize,
    }

    impl RsaPrimitive for FlakyPrimitive {
        fn generate_key_pair(&self, bits: usize) -> Result<KeyPair> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                return Err(Error::KeyGenerationUnavailable {
                    bits,
                    reason: "unavailable".to_string(),
                });
            }
            Ok(sample_key_pair())
        }

        fn build_public_key(&self, components: KeyComponents) -> Result<PublicKeyHandle> {
            RsaCryptoSystem.build_public_key(components)
        }

        fn build_private_key(&self, components: KeyComponents) -> Result<PrivateKeyHandle> {
            RsaCryptoSystem.build_private_key(components)
        }

        fn encrypt(&self, key: &PublicKeyHandle, plaintext: &[u8]) -> Result<Vec<u8>> {
            RsaCryptoSystem.encrypt(key, plaintext)
        }

        fn decrypt(&self, key: &PrivateKeyHandle, ciphertext: &[u8]) -> Result<Vec<u8>> {
            RsaCryptoSystem.decrypt(key, ciphertext)
        }
    }

    #[test]
    fn test_default_key_bits() {
        assert_eq!(DefaultKeyPairCache::default().key_bits(), 1024);
    }

    #[test]
    fn test_get_or_generate_is_idempotent() {
        let primitive = FlakyPrimitive {
            failures: 0,
            calls: AtomicUsize::new(0),
        };
        let cache = DefaultKeyPairCache::default();
        assert!(cache.cached().is_none());

        let first = cache.get_or_generate(&primitive).unwrap();
        let second = cache.get_or_generate(&primitive).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(primitive.calls.load(Ordering::SeqCst), 1);
        assert!(cache.cached().is_some());
    }

    #[test]
    fn test_failed_generation_is_retried() {
        let primitive = FlakyPrimitive {
            failures: 2,
            calls: AtomicUsize::new(0),
        };
        let cache = DefaultKeyPairCache::default();

        assert!(matches!(
            cache.get_or_generate(&primitive),
            Err(Error::KeyGenerationUnavailable { bits: 1024, .. })
        ));
        assert!(cache.cached().is_none());
        assert!(cache.get_or_generate(&primitive).is_err());

        let pair = cache.get_or_generate(&primitive).unwrap();
        assert_eq!(primitive.calls.load(Ordering::SeqCst), 3);
        assert!(Arc::ptr_eq(&pair, &cache.cached().unwrap()));
    }

    #[test]
    fn test_unsupported_key_size_does_not_poison_cache() {
        let cache = DefaultKeyPairCache::new(128);
        assert!(cache.get_or_generate(&RsaCryptoSystem).is_err());
        assert!(cache.get_or_generate(&RsaCryptoSystem).is_err());
        assert!(cache.cached().is_none());
    }
}
