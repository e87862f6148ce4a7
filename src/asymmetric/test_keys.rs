//! 单元测试共用的固定示例密钥（1024 位）。

use crate::asymmetric::keys::{KeyPair, private_key_from_hex, public_key_from_hex};
use crate::asymmetric::systems::traditional::rsa::RsaCryptoSystem;

pub(crate) const SAMPLE_PUBLIC_EXPONENT: &str = "010001";

pub(crate) const SAMPLE_MODULUS: &str = "00aaddf90bdd1f2aedb8a16794757ad8ff7fc477d5da9b65c1e85d3a9d41b6dfa3f8e4bbf6a4b190cdc80ed96ef2d8ab84fa8b00ff6931d744b3514d7061cf009962dacd920ae927de9c55a86fde8717bd14d8020cd69efe5a85179ea008d653df0126d201ff30deda0de270264cf5c6dcd11ebfeb578dd547c3d5a26106befa3d";

pub(crate) const SAMPLE_PRIVATE_EXPONENT: &str = "7ba9fbbda2641465c8e2c85ca24a2f137c1d6dbdd161f6dbc898f0fb2fbc734ff1ab5a7ebfe3e3b18bc1738ce125ffbd56b7941946c153d3dd1452bfab8a6e1b6335c1096d3adc2ea2e830908108386ec37db161299c333d7ac9051aa8095d8348019523e5d8dccac00f8db9447f7d3fc0be14560ea4843d00d34b09db0c64e1";

pub(crate) fn sample_key_pair() -> KeyPair {
    let public =
        public_key_from_hex(&RsaCryptoSystem, SAMPLE_MODULUS, SAMPLE_PUBLIC_EXPONENT).unwrap();
    let private =
        private_key_from_hex(&RsaCryptoSystem, SAMPLE_MODULUS, SAMPLE_PRIVATE_EXPONENT).unwrap();
    KeyPair::new(public, private)
}
