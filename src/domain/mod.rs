//! Domain 模块
//!
//! 包含路径编解码、密钥派生和多算法密钥的核心逻辑

pub mod algorithm;
pub mod bip44;
pub mod derivation;
pub mod keyring;
pub mod keys;

// Re-exports
// 重新导出常用类型
pub use algorithm::SigningAlgorithm;
pub use bip44::{Bip44Params, ChildIndex, BIP44_PURPOSE, COIN_TYPE, FULL_FUNDRAISER_PATH};
pub use derivation::{
    compute_masters_from_seed, derive_child, derive_private_key_for_path, mnemonic_to_seed,
    HARDENED_OFFSET,
};
pub use keyring::Keyring;
pub use keys::{Address, PrivateKey, PublicKey, Signature};
