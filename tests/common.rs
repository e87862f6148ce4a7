//!
//! 集成测试的通用辅助函数
//!
#![allow(dead_code)]

use rsa_hex_seal::asymmetric::keys::{private_key_from_hex, public_key_from_hex};
use rsa_hex_seal::{
    KeyComponents, KeyPair, PrivateKeyHandle, PublicKeyHandle, Result, RsaCryptoSystem,
    RsaPrimitive,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const PUBLIC_EXPONENT: &str = "010001";

pub const MODULUS: &str = "00aaddf90bdd1f2aedb8a16794757ad8ff7fc477d5da9b65c1e85d3a9d41b6dfa3f8e4bbf6a4b190cdc80ed96ef2d8ab84fa8b00ff6931d744b3514d7061cf009962dacd920ae927de9c55a86fde8717bd14d8020cd69efe5a85179ea008d653df0126d201ff30deda0de270264cf5c6dcd11ebfeb578dd547c3d5a26106befa3d";

pub const PRIVATE_EXPONENT: &str = "7ba9fbbda2641465c8e2c85ca24a2f137c1d6dbdd161f6dbc898f0fb2fbc734ff1ab5a7ebfe3e3b18bc1738ce125ffbd56b7941946c153d3dd1452bfab8a6e1b6335c1096d3adc2ea2e830908108386ec37db161299c333d7ac9051aa8095d8348019523e5d8dccac00f8db9447f7d3fc0be14560ea4843d00d34b09db0c64e1";

/// 直接构造固定的示例密钥对，不触发密钥生成
pub fn sample_key_pair() -> KeyPair {
    let public = public_key_from_hex(&RsaCryptoSystem, MODULUS, PUBLIC_EXPONENT).unwrap();
    let private = private_key_from_hex(&RsaCryptoSystem, MODULUS, PRIVATE_EXPONENT).unwrap();
    KeyPair::new(public, private)
}

/// 统计密钥生成次数的 RSA 原语，生成时返回示例密钥对
#[derive(Default)]
pub struct CountingPrimitive {
    generations: AtomicUsize,
}

impl CountingPrimitive {
    pub fn generations(&self) -> usize {
        self.generations.load(Ordering::SeqCst)
    }
}

impl RsaPrimitive for CountingPrimitive {
    fn generate_key_pair(&self, _bits: usize) -> Result<KeyPair> {
        self.generations.fetch_add(1, Ordering::SeqCst);
        // 拉长生成耗时，让并发的首次调用真正发生竞争
        std::thread::sleep(Duration::from_millis(50));
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
