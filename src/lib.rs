//! # RSA-Hex-Seal: RSA helpers that interoperate with browser-side JavaScript RSA
//!
//! `rsa-hex-seal` builds RSA keys from raw (modulus, exponent) pairs, caches a lazily
//! generated default key pair, and encrypts/decrypts strings using lowercase hex as the
//! only wire format. A JS-compatible mode reverses the plaintext around encryption to
//! match the byte order used by a common browser-side RSA library.
//!
//! ## Core Concepts
//!
//! - **`RsaEngine`**: the injectable context owning an [`RsaPrimitive`] and the default key pair cache.
//! - **Byte layer** (`encrypt_to_hex`, `decrypt_from_hex`, key factories): typed [`Error`]s.
//! - **String layer** (`encrypt_string`, `decrypt_string` and the JS-compatible variants):
//!   every failure becomes `None`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rsa_hex_seal::RsaEngine;
//!
//! let engine = RsaEngine::new();
//! let public_key = engine.default_public_key()?;
//!
//! // 把模数和指数交给浏览器端
//! println!("{} {}", public_key.modulus_hex(), public_key.exponent_hex());
//!
//! let ciphertext = engine.encrypt_string_js_compatible(&public_key, "secret").unwrap();
//! let plaintext = engine.decrypt_string_js_compatible_with_default_key(ciphertext.as_str());
//! assert_eq!(plaintext.as_deref(), Some("secret"));
//! # Ok::<(), rsa_hex_seal::Error>(())
//! ```

pub mod asymmetric;
pub mod common;
pub mod engine;
pub mod error;

pub use asymmetric::systems::traditional::RsaCryptoSystem;
pub use asymmetric::{
    DefaultKeyPairCache, KeyComponents, KeyPair, PrivateKeyHandle, PublicKeyHandle, RsaPrimitive,
};
pub use common::RsaConfig;
pub use engine::RsaEngine;
pub use error::{Error, Result};

/// The version of the `rsa-hex-seal` crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
