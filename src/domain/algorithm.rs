//! 签名算法选择
//!
//! 原多算法密钥系统中算法选择是进程级全局状态，这里重构为显式配置值：
//! 在组装阶段解析一次，通过构造函数逐层传递，任何组件都不读环境全局

use std::fmt;
use std::str::FromStr;

use crate::error::HdError;

/// 支持的签名算法标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigningAlgorithm {
    Secp256k1,
    Ed25519,
    Sr25519,
    Sm2,
    Multisig,
}

impl SigningAlgorithm {
    /// 是否支持单密钥HD派生
    ///
    /// Sr25519/SM2缺少实现后端；Multisig是聚合概念，没有单一可派生私钥
    pub fn supports_derivation(&self) -> bool {
        matches!(self, Self::Secp256k1 | Self::Ed25519)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Secp256k1 => "secp256k1",
            Self::Ed25519 => "ed25519",
            Self::Sr25519 => "sr25519",
            Self::Sm2 => "sm2",
            Self::Multisig => "multisig",
        }
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SigningAlgorithm {
    type Err = HdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "secp256k1" => Ok(Self::Secp256k1),
            "ed25519" => Ok(Self::Ed25519),
            "sr25519" => Ok(Self::Sr25519),
            "sm2" => Ok(Self::Sm2),
            "multisig" => Ok(Self::Multisig),
            other => Err(HdError::UnknownAlgorithm(other.to_string())),
        }
    }
}
