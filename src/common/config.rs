//!
//! # 通用配置模块
//!
//! 包含默认密钥对所使用的配置结构。
//! 配置可以来自内存默认值、JSON 文件或环境变量。
//!
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 默认密钥对的模数位数
pub const DEFAULT_KEY_BITS: usize = 1024;

/// 覆盖 `key_bits` 的环境变量
pub const KEY_BITS_ENV: &str = "RSA_SEAL_KEY_BITS";

/// RSA 配置
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RsaConfig {
    /// 默认密钥对的模数位数
    pub key_bits: usize,
}

impl Default for RsaConfig {
    fn default() -> Self {
        Self {
            key_bits: DEFAULT_KEY_BITS,
        }
    }
}

impl RsaConfig {
    /// 从 JSON 文件加载配置，缺失的字段使用默认值
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: RsaConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// 从环境变量加载配置
    ///
    /// 无法解析的值会被忽略并保留默认值。
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 与 [`RsaConfig::from_env`] 相同，但变量值由 `lookup` 提供
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(KEY_BITS_ENV) {
            match value.trim().parse::<usize>() {
                Ok(bits) => config.key_bits = bits,
                Err(e) => {
                    tracing::warn!("Ignoring {}={:?}: {}", KEY_BITS_ENV, value, e);
                }
            }
        }

        config
    }
}
