//! 多算法密钥类型
//!
//! 原实现中多签名方案藏在鸭子类型接口后面，这里收敛为带标签的和类型，
//! 统一能力面：{sign, verify, serialize, address-from-key}
//!
//! 地址规则：
//! - secp256k1：HASH160(压缩公钥)，即RIPEMD160(SHA256(pk))
//! - ed25519：SHA256(pk)前20字节

use std::fmt;

use bitcoin::hashes::{hash160, Hash};
use ed25519_dalek::{Signer, Verifier};
use secp256k1::{ecdsa, Message, Secp256k1};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::domain::algorithm::SigningAlgorithm;
use crate::error::HdError;

/// 私钥（和类型，32字节秘密材料，drop时清零）
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub enum PrivateKey {
    Secp256k1([u8; 32]),
    Ed25519([u8; 32]),
}

/// 公钥（和类型，压缩编码）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicKey {
    Secp256k1([u8; 33]),
    Ed25519([u8; 32]),
}

/// 签名（和类型，均为64字节紧凑编码）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    Secp256k1([u8; 64]),
    Ed25519([u8; 64]),
}

/// 账户地址（20字节哈希）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl PrivateKey {
    /// 从原始32字节构造，按算法校验合法性
    pub fn from_bytes(algorithm: SigningAlgorithm, bytes: &[u8]) -> Result<Self, HdError> {
        let raw: [u8; 32] = bytes
            .try_into()
            .map_err(|_| HdError::InvalidKeyBytes(format!("expected 32 bytes, got {}", bytes.len())))?;
        match algorithm {
            SigningAlgorithm::Secp256k1 => {
                secp256k1::SecretKey::from_slice(&raw)
                    .map_err(|e| HdError::InvalidKeyBytes(e.to_string()))?;
                Ok(Self::Secp256k1(raw))
            }
            // ed25519-dalek内部做clamping，任意32字节都是合法seed
            SigningAlgorithm::Ed25519 => Ok(Self::Ed25519(raw)),
            other => Err(HdError::AlgorithmNotSupported(other)),
        }
    }

    pub fn algorithm(&self) -> SigningAlgorithm {
        match self {
            Self::Secp256k1(_) => SigningAlgorithm::Secp256k1,
            Self::Ed25519(_) => SigningAlgorithm::Ed25519,
        }
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        match self {
            Self::Secp256k1(raw) | Self::Ed25519(raw) => *raw,
        }
    }

    /// 对消息签名
    ///
    /// secp256k1先做SHA256摘要再ECDSA签名；ed25519直接签原始消息
    pub fn sign(&self, msg: &[u8]) -> Result<Signature, HdError> {
        match self {
            Self::Secp256k1(raw) => {
                let secp = Secp256k1::signing_only();
                let sk = secp256k1::SecretKey::from_slice(raw)
                    .map_err(|e| HdError::InvalidKeyBytes(e.to_string()))?;
                let digest = Sha256::digest(msg);
                let message = Message::from_digest_slice(&digest)
                    .map_err(|e| HdError::InvalidKeyBytes(e.to_string()))?;
                let sig = secp.sign_ecdsa(&message, &sk);
                Ok(Signature::Secp256k1(sig.serialize_compact()))
            }
            Self::Ed25519(raw) => {
                let signing_key = ed25519_dalek::SigningKey::from_bytes(raw);
                let sig = signing_key.sign(msg);
                Ok(Signature::Ed25519(sig.to_bytes()))
            }
        }
    }

    /// 导出对应公钥
    pub fn public_key(&self) -> Result<PublicKey, HdError> {
        match self {
            Self::Secp256k1(raw) => {
                let secp = Secp256k1::signing_only();
                let sk = secp256k1::SecretKey::from_slice(raw)
                    .map_err(|e| HdError::InvalidKeyBytes(e.to_string()))?;
                let pk = secp256k1::PublicKey::from_secret_key(&secp, &sk);
                Ok(PublicKey::Secp256k1(pk.serialize()))
            }
            Self::Ed25519(raw) => {
                let signing_key = ed25519_dalek::SigningKey::from_bytes(raw);
                Ok(PublicKey::Ed25519(signing_key.verifying_key().to_bytes()))
            }
        }
    }
}

// 私钥Debug只打印算法标签，不泄露秘密材料
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivateKey")
            .field(&self.algorithm().as_str())
            .finish()
    }
}

impl PublicKey {
    pub fn from_bytes(algorithm: SigningAlgorithm, bytes: &[u8]) -> Result<Self, HdError> {
        match algorithm {
            SigningAlgorithm::Secp256k1 => {
                let raw: [u8; 33] = bytes.try_into().map_err(|_| {
                    HdError::InvalidKeyBytes(format!("expected 33 bytes, got {}", bytes.len()))
                })?;
                secp256k1::PublicKey::from_slice(&raw)
                    .map_err(|e| HdError::InvalidKeyBytes(e.to_string()))?;
                Ok(Self::Secp256k1(raw))
            }
            SigningAlgorithm::Ed25519 => {
                let raw: [u8; 32] = bytes.try_into().map_err(|_| {
                    HdError::InvalidKeyBytes(format!("expected 32 bytes, got {}", bytes.len()))
                })?;
                ed25519_dalek::VerifyingKey::from_bytes(&raw)
                    .map_err(|e| HdError::InvalidKeyBytes(e.to_string()))?;
                Ok(Self::Ed25519(raw))
            }
            other => Err(HdError::AlgorithmNotSupported(other)),
        }
    }

    pub fn algorithm(&self) -> SigningAlgorithm {
        match self {
            Self::Secp256k1(_) => SigningAlgorithm::Secp256k1,
            Self::Ed25519(_) => SigningAlgorithm::Ed25519,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Secp256k1(raw) => raw.to_vec(),
            Self::Ed25519(raw) => raw.to_vec(),
        }
    }

    /// 校验签名
    ///
    /// 算法不匹配视为校验失败，返回`InvalidSignature`
    pub fn verify(&self, msg: &[u8], signature: &Signature) -> Result<(), HdError> {
        match (self, signature) {
            (Self::Secp256k1(raw), Signature::Secp256k1(sig_bytes)) => {
                let secp = Secp256k1::verification_only();
                let pk = secp256k1::PublicKey::from_slice(raw)
                    .map_err(|e| HdError::InvalidKeyBytes(e.to_string()))?;
                let digest = Sha256::digest(msg);
                let message = Message::from_digest_slice(&digest)
                    .map_err(|e| HdError::InvalidKeyBytes(e.to_string()))?;
                let sig = ecdsa::Signature::from_compact(sig_bytes)
                    .map_err(|_| HdError::InvalidSignature)?;
                secp.verify_ecdsa(&message, &sig, &pk)
                    .map_err(|_| HdError::InvalidSignature)
            }
            (Self::Ed25519(raw), Signature::Ed25519(sig_bytes)) => {
                let vk = ed25519_dalek::VerifyingKey::from_bytes(raw)
                    .map_err(|e| HdError::InvalidKeyBytes(e.to_string()))?;
                let sig = ed25519_dalek::Signature::from_bytes(sig_bytes);
                vk.verify(msg, &sig).map_err(|_| HdError::InvalidSignature)
            }
            _ => Err(HdError::InvalidSignature),
        }
    }

    /// 从公钥计算20字节账户地址
    pub fn address(&self) -> Address {
        match self {
            Self::Secp256k1(raw) => {
                Address(hash160::Hash::hash(raw).to_byte_array())
            }
            Self::Ed25519(raw) => {
                let digest = Sha256::digest(raw);
                let mut out = [0u8; 20];
                out.copy_from_slice(&digest[..20]);
                Address(out)
            }
        }
    }
}

impl Signature {
    pub fn to_bytes(&self) -> [u8; 64] {
        match self {
            Self::Secp256k1(raw) | Self::Ed25519(raw) => *raw,
        }
    }
}

impl Address {
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// 渲染为bech32字符串，前缀由调用方决定（如"cosmos"）
    pub fn to_bech32(&self, hrp: &str) -> Result<String, HdError> {
        let hrp = bech32::Hrp::parse(hrp)
            .map_err(|e| HdError::Bech32Encoding(format!("invalid hrp: {:?}", e)))?;
        bech32::encode::<bech32::Bech32>(hrp, &self.0)
            .map_err(|e| HdError::Bech32Encoding(e.to_string()))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_key(algorithm: SigningAlgorithm) -> PrivateKey {
        let raw = [0x42u8; 32];
        PrivateKey::from_bytes(algorithm, &raw).unwrap()
    }

    #[test]
    fn test_sign_verify_round_trip() {
        for algorithm in [SigningAlgorithm::Secp256k1, SigningAlgorithm::Ed25519] {
            let sk = sample_key(algorithm);
            let pk = sk.public_key().unwrap();
            let msg = b"test message";
            let sig = sk.sign(msg).unwrap();
            pk.verify(msg, &sig).unwrap();
            // 篡改消息必须失败
            assert!(pk.verify(b"other message", &sig).is_err());
        }
    }

    #[test]
    fn test_algorithm_mismatch_rejected() {
        let secp_key = sample_key(SigningAlgorithm::Secp256k1);
        let ed_key = sample_key(SigningAlgorithm::Ed25519);
        let msg = b"cross check";

        let ed_sig = ed_key.sign(msg).unwrap();
        let secp_pub = secp_key.public_key().unwrap();
        assert_eq!(
            secp_pub.verify(msg, &ed_sig),
            Err(HdError::InvalidSignature)
        );
    }

    #[test]
    fn test_invalid_private_key_bytes() {
        // 零标量对secp256k1非法
        assert!(PrivateKey::from_bytes(SigningAlgorithm::Secp256k1, &[0u8; 32]).is_err());
        // 长度错误
        assert!(PrivateKey::from_bytes(SigningAlgorithm::Secp256k1, &[1u8; 31]).is_err());
        // 不支持的算法
        assert!(matches!(
            PrivateKey::from_bytes(SigningAlgorithm::Multisig, &[1u8; 32]),
            Err(HdError::AlgorithmNotSupported(_))
        ));
    }

    #[test]
    fn test_public_key_serialization_round_trip() {
        for algorithm in [SigningAlgorithm::Secp256k1, SigningAlgorithm::Ed25519] {
            let pk = sample_key(algorithm).public_key().unwrap();
            let decoded = PublicKey::from_bytes(algorithm, &pk.to_bytes()).unwrap();
            assert_eq!(decoded, pk);
        }
    }

    #[test]
    fn test_address_rendering() {
        let pk = sample_key(SigningAlgorithm::Secp256k1).public_key().unwrap();
        let address = pk.address();
        assert_eq!(address.as_bytes().len(), 20);

        let rendered = address.to_bech32("cosmos").unwrap();
        assert!(rendered.starts_with("cosmos1"));

        // 同一公钥地址必须稳定
        assert_eq!(pk.address(), address);
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let sk = sample_key(SigningAlgorithm::Secp256k1);
        let rendered = format!("{:?}", sk);
        assert!(!rendered.contains("42"));
        assert!(rendered.contains("secp256k1"));
    }
}
