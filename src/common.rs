//! 通用模块，包含配置、十六进制编解码和共享的工具函数

pub mod config;
pub mod encoding;
pub mod utils;

pub use self::config::RsaConfig;
pub use self::encoding::{bytes_to_hex, hex_to_bytes, hex_to_secret_bytes};
pub use self::utils::{is_blank, reverse};
