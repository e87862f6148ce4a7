//! 非对称加密模块：RSA 密钥材料、默认密钥对缓存以及十六进制密文的加解密。

pub mod cache;
pub mod cipher;
pub mod js_compat;
pub mod keys;
pub mod systems;
pub mod traits;

pub use self::cache::DefaultKeyPairCache;
pub use self::keys::{KeyComponents, KeyPair, PrivateKeyHandle, PublicKeyHandle};
pub use self::traits::RsaPrimitive;

#[cfg(test)]
pub(crate) mod test_keys;
