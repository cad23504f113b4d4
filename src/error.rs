//! 错误类型定义
//!
//! 派生路径解析和密钥派生的所有错误都是可恢复的业务错误，
//! 库内部绝不panic——非法输入是预期情况，不是编程错误

use thiserror::Error;

use crate::domain::algorithm::SigningAlgorithm;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HdError {
    // 路径解析错误
    #[error("malformed derivation path {0:?}: expected exactly 5 fields")]
    MalformedPath(String),

    #[error("invalid purpose field {0:?}: BIP44 paths must start with 44'")]
    InvalidPurpose(String),

    #[error("invalid harden flag on field {0:?}")]
    InvalidHardenFlag(String),

    #[error("invalid numeral in field {0:?}")]
    InvalidNumeral(String),

    // 密钥派生错误
    #[error("master key candidate is not a valid curve scalar")]
    InvalidMasterKey,

    #[error("derived child key is not a valid curve scalar")]
    InvalidChildKey,

    // 密钥/签名错误
    #[error("unknown signing algorithm {0:?}")]
    UnknownAlgorithm(String),

    #[error("signing algorithm {0} does not support single-key derivation")]
    AlgorithmNotSupported(SigningAlgorithm),

    #[error("invalid key bytes: {0}")]
    InvalidKeyBytes(String),

    #[error("signature verification failed")]
    InvalidSignature,

    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("bech32 encoding failed: {0}")]
    Bech32Encoding(String),
}
