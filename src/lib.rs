//! IronHD - HD钱包密钥派生核心库
//!
//! BIP32/BIP44分层确定性密钥派生：路径编解码、主密钥/子密钥派生、
//! 多算法密钥（secp256k1/ed25519）签名与地址生成
//!
//! 纯同步、无I/O、无共享可变状态；相同(seed, path)输入永远产出相同字节

pub mod domain;
pub mod error;

// 重新导出常用类型
pub use error::HdError;

// 统一模块导出
pub mod prelude {
    pub use crate::{
        domain::{
            Bip44Params, Keyring, PrivateKey, PublicKey, SigningAlgorithm,
            FULL_FUNDRAISER_PATH,
        },
        error::HdError,
    };
}
