//! 密钥环
//!
//! 在组装阶段确定一次签名算法，之后所有(seed, path) → 私钥的转换
//! 都经过同一个Keyring实例，算法选择通过构造函数传入而非全局读取

use zeroize::Zeroize;

use crate::domain::algorithm::SigningAlgorithm;
use crate::domain::bip44::{Bip44Params, COIN_TYPE};
use crate::domain::derivation::{compute_masters_from_seed, derive_private_key_for_path};
use crate::domain::keys::PrivateKey;
use crate::error::HdError;

/// 持有已解析签名算法的派生入口
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyring {
    algorithm: SigningAlgorithm,
}

impl Keyring {
    /// 创建密钥环，组装阶段调用一次
    ///
    /// 不支持HD派生的算法在这里被拒绝，而不是等到第一次派生时才失败
    pub fn new(algorithm: SigningAlgorithm) -> Result<Self, HdError> {
        if !algorithm.supports_derivation() {
            tracing::warn!(%algorithm, "signing algorithm has no derivation backend");
            return Err(HdError::AlgorithmNotSupported(algorithm));
        }
        Ok(Self { algorithm })
    }

    pub fn algorithm(&self) -> SigningAlgorithm {
        self.algorithm
    }

    /// 沿规范BIP44路径从seed派生私钥
    pub fn derive_private_key(&self, seed: &[u8], path: &str) -> Result<PrivateKey, HdError> {
        let (mut master, mut chain_code) = compute_masters_from_seed(seed)?;
        let result = derive_private_key_for_path(&master, &chain_code, path);
        master.zeroize();
        chain_code.zeroize();

        let mut raw = result?;
        let key = PrivateKey::from_bytes(self.algorithm, &raw);
        raw.zeroize();
        key
    }

    /// 按募资路径约定派生（coin_type固定118，change=0）
    pub fn derive_fundraiser_key(
        &self,
        seed: &[u8],
        account: u32,
        address_index: u32,
    ) -> Result<PrivateKey, HdError> {
        let params = Bip44Params::new_fundraiser(account, COIN_TYPE, address_index);
        self.derive_private_key(seed, &params.to_string())
    }
}
