//! RSA 密钥材料与密钥工厂。
//!
//! 公钥与私钥都只由 (模数, 指数) 两个无符号大整数组成，
//! 可以来自大端字节序列，也可以来自这些字节的十六进制编码。
//! 十六进制编码允许带有一个前导 `00` 字节（补码形式的符号位），解码后会被忽略。

use crate::asymmetric::traits::RsaPrimitive;
use crate::common::encoding::{bytes_to_hex, hex_to_secret_bytes};
use crate::common::utils::is_blank;
use crate::error::Result;
use rsa::BigUint;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// RSA 密钥分量：模数与指数，构造后不可变
///
/// 释放时（包括每一个克隆）会擦除两个分量，私钥指数因此不会残留在内存中。
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyComponents {
    modulus: BigUint,
    exponent: BigUint,
}

impl KeyComponents {
    pub fn new(modulus: BigUint, exponent: BigUint) -> Self {
        Self { modulus, exponent }
    }

    /// 把大端字节序列按无符号整数解释
    pub fn from_be_bytes(modulus: &[u8], exponent: &[u8]) -> Self {
        Self::new(
            BigUint::from_bytes_be(modulus),
            BigUint::from_bytes_be(exponent),
        )
    }

    /// 从十六进制字符串解码，解码用的中间缓冲区在返回前被擦除
    pub fn from_hex(hex_modulus: &str, hex_exponent: &str) -> Result<Self> {
        let modulus = hex_to_secret_bytes(hex_modulus.trim())?;
        let exponent = hex_to_secret_bytes(hex_exponent.trim())?;
        Ok(Self::from_be_bytes(&modulus, &exponent))
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn exponent(&self) -> &BigUint {
        &self.exponent
    }

    /// 模数的字节长度，即单个密文块的长度
    pub fn size(&self) -> usize {
        self.modulus.bits().div_ceil(8)
    }
}

/// RSA 公钥，只能通过密钥工厂或 [`RsaPrimitive`] 获得
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKeyHandle {
    components: KeyComponents,
}

impl PublicKeyHandle {
    pub(crate) fn new(components: KeyComponents) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &KeyComponents {
        &self.components
    }

    pub fn modulus(&self) -> &BigUint {
        self.components.modulus()
    }

    pub fn public_exponent(&self) -> &BigUint {
        self.components.exponent()
    }

    pub fn modulus_bytes(&self) -> Vec<u8> {
        self.components.modulus().to_bytes_be()
    }

    pub fn exponent_bytes(&self) -> Vec<u8> {
        self.components.exponent().to_bytes_be()
    }

    /// 模数的小写十六进制形式，可直接交给浏览器端的 RSA 库
    pub fn modulus_hex(&self) -> String {
        bytes_to_hex(&self.modulus_bytes())
    }

    /// 公钥指数的小写十六进制形式，常见值为 `010001`
    pub fn exponent_hex(&self) -> String {
        bytes_to_hex(&self.exponent_bytes())
    }

    pub fn size(&self) -> usize {
        self.components.size()
    }
}

/// RSA 私钥，只能通过密钥工厂或 [`RsaPrimitive`] 获得
///
/// 私钥指数随 [`KeyComponents`] 一起在释放时被擦除，`Debug` 输出中不包含私钥指数。
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKeyHandle {
    components: KeyComponents,
}

impl PrivateKeyHandle {
    pub(crate) fn new(components: KeyComponents) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &KeyComponents {
        &self.components
    }

    pub fn modulus(&self) -> &BigUint {
        self.components.modulus()
    }

    pub fn private_exponent(&self) -> &BigUint {
        self.components.exponent()
    }

    pub fn size(&self) -> usize {
        self.components.size()
    }
}

impl fmt::Debug for PrivateKeyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKeyHandle")
            .field("modulus_bits", &self.components.modulus().bits())
            .field("private_exponent", &"<redacted>")
            .finish()
    }
}

/// 公钥与私钥组成的密钥对
#[derive(Clone, Debug)]
pub struct KeyPair {
    public: PublicKeyHandle,
    private: PrivateKeyHandle,
}

impl KeyPair {
    pub fn new(public: PublicKeyHandle, private: PrivateKeyHandle) -> Self {
        Self { public, private }
    }

    pub fn public_key(&self) -> &PublicKeyHandle {
        &self.public
    }

    pub fn private_key(&self) -> &PrivateKeyHandle {
        &self.private
    }
}

/// 根据大端字节形式的模数和公钥指数构造公钥
pub fn public_key_from_components<P: RsaPrimitive + ?Sized>(
    primitive: &P,
    modulus: &[u8],
    public_exponent: &[u8],
) -> Result<PublicKeyHandle> {
    primitive.build_public_key(KeyComponents::from_be_bytes(modulus, public_exponent))
}

/// 根据大端字节形式的模数和私钥指数构造私钥
pub fn private_key_from_components<P: RsaPrimitive + ?Sized>(
    primitive: &P,
    modulus: &[u8],
    private_exponent: &[u8],
) -> Result<PrivateKeyHandle> {
    primitive.build_private_key(KeyComponents::from_be_bytes(modulus, private_exponent))
}

/// 根据十六进制的模数和公钥指数构造公钥
///
/// 任一参数缺失、为空白或不是合法的十六进制时返回 `None`；
/// 底层原语拒绝该密钥材料时同样返回 `None`。
pub fn public_key_from_hex<'m, 'e, P: RsaPrimitive + ?Sized>(
    primitive: &P,
    hex_modulus: impl Into<Option<&'m str>>,
    hex_public_exponent: impl Into<Option<&'e str>>,
) -> Option<PublicKeyHandle> {
    let components = components_from_hex(
        hex_modulus.into(),
        hex_public_exponent.into(),
        "public",
    )?;
    primitive
        .build_public_key(components)
        .inspect_err(|e| tracing::warn!("RSA public key construction failed: {}", e))
        .ok()
}

/// 根据十六进制的模数和私钥指数构造私钥，失败语义与 [`public_key_from_hex`] 相同
pub fn private_key_from_hex<'m, 'e, P: RsaPrimitive + ?Sized>(
    primitive: &P,
    hex_modulus: impl Into<Option<&'m str>>,
    hex_private_exponent: impl Into<Option<&'e str>>,
) -> Option<PrivateKeyHandle> {
    let components = components_from_hex(
        hex_modulus.into(),
        hex_private_exponent.into(),
        "private",
    )?;
    primitive
        .build_private_key(components)
        .inspect_err(|e| tracing::warn!("RSA private key construction failed: {}", e))
        .ok()
}

fn components_from_hex(
    hex_modulus: Option<&str>,
    hex_exponent: Option<&str>,
    role: &str,
) -> Option<KeyComponents> {
    let (Some(hex_modulus), Some(hex_exponent)) = (hex_modulus, hex_exponent) else {
        tracing::debug!("hex modulus and {} exponent must both be present", role);
        return None;
    };
    if is_blank(hex_modulus) || is_blank(hex_exponent) {
        tracing::debug!("hex modulus and {} exponent cannot be blank", role);
        return None;
    }
    KeyComponents::from_hex(hex_modulus, hex_exponent)
        .inspect_err(|e| tracing::warn!("hex modulus or {} exponent is invalid: {}", role, e))
        .ok()
}
