//! # Traditional Cryptographic Algorithm Module
//!
//! This module contains the RSA implementation of the `RsaPrimitive` trait.
//!
//! ---
//!
//! # 传统加密算法模块
//!
//! 本模块包含 `RsaPrimitive` 特征的 RSA 实现。

pub mod rsa;

// 重新导出RSA系统，方便其他模块调用。
pub use rsa::RsaCryptoSystem;
