//! BIP32分层确定性密钥派生
//!
//! seed → HMAC-SHA512("Bitcoin seed") → (master, chain_code)
//! → 沿BIP44五级路径逐级CKDpriv → 最终32字节私钥
//!
//! 与标准BIP32的差异：非硬化派生的HMAC输入使用父私钥在SM2曲线
//! （sm2p256v1）上的压缩公钥点，而不是secp256k1压缩公钥；
//! 标量加法仍在secp256k1曲线阶下进行。链上历史密钥均按此规则
//! 派生，不可更改
//!
//! 派生出的标量非法（零或≥曲线阶）时硬失败，不做重哈希重试，
//! 也不自动跳到下一个index；任何一级失败立即中止整条派生

use bip39::{Language, Mnemonic};
use hmac::{Hmac, Mac};
use secp256k1::{Scalar, SecretKey};
use sha2::Sha512;
use sm2::elliptic_curve::sec1::ToEncodedPoint;
use zeroize::Zeroize;

use crate::domain::bip44::Bip44Params;
use crate::error::HdError;

type HmacSha512 = Hmac<Sha512>;

/// 硬化派生索引偏移（2^31）
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// BIP32主密钥域分隔常量
const MASTER_SEED_KEY: &[u8] = b"Bitcoin seed";

/// 从seed计算主私钥和链码
///
/// HMAC-SHA512输出左32字节为主私钥候选，右32字节为链码。
/// 候选不是合法曲线标量（零或≥曲线阶）时返回`InvalidMasterKey`。
pub fn compute_masters_from_seed(seed: &[u8]) -> Result<([u8; 32], [u8; 32]), HdError> {
    let (secret, chain_code) = hmac_sha512_halves(MASTER_SEED_KEY, seed);

    // 标量合法性校验（不重试，见错误策略）
    if SecretKey::from_slice(&secret).is_err() {
        return Err(HdError::InvalidMasterKey);
    }

    Ok((secret, chain_code))
}

/// 单级CKDpriv子密钥派生
///
/// - 硬化：HMAC输入 = 0x00 ‖ parent_key ‖ ser32(index | 2^31)
/// - 非硬化：HMAC输入 = SM2压缩父公钥点 ‖ ser32(index)
///
/// HMAC以父链码为key；左32字节与父私钥在secp256k1曲线阶下相加
/// 得到子私钥候选，右32字节为子链码。候选非法时返回`InvalidChildKey`。
pub fn derive_child(
    parent_key: &[u8; 32],
    parent_chain_code: &[u8; 32],
    index: u32,
    hardened: bool,
) -> Result<([u8; 32], [u8; 32]), HdError> {
    let parent_sk = SecretKey::from_slice(parent_key).map_err(|_| HdError::InvalidChildKey)?;

    let mut mac = HmacSha512::new_from_slice(parent_chain_code)
        .expect("HMAC accepts keys of any length");
    if hardened {
        mac.update(&[0x00]);
        mac.update(parent_key);
        mac.update(&(index | HARDENED_OFFSET).to_be_bytes());
    } else {
        mac.update(&sm2_compressed_point(parent_key)?);
        mac.update(&index.to_be_bytes());
    }
    let digest = mac.finalize().into_bytes();

    let mut il = [0u8; 32];
    il.copy_from_slice(&digest[..32]);
    let mut chain_code = [0u8; 32];
    chain_code.copy_from_slice(&digest[32..]);

    // child = (IL + parent) mod n；IL非法（零或≥n）时硬失败
    let tweak_sk = SecretKey::from_slice(&il).map_err(|_| HdError::InvalidChildKey);
    il.zeroize();
    let tweak: Scalar = tweak_sk?.into();
    let child_sk = parent_sk
        .add_tweak(&tweak)
        .map_err(|_| HdError::InvalidChildKey)?;

    Ok((child_sk.secret_bytes(), chain_code))
}

/// 父私钥标量对应的SM2曲线压缩公钥点（33字节SEC1编码）
///
/// 标量超出SM2曲线阶时无法表示为SM2私钥，按非法子密钥处理
fn sm2_compressed_point(scalar: &[u8; 32]) -> Result<[u8; 33], HdError> {
    let sk = sm2::SecretKey::from_slice(scalar).map_err(|_| HdError::InvalidChildKey)?;
    let point = sk.public_key().to_encoded_point(true);
    let mut out = [0u8; 33];
    out.copy_from_slice(point.as_bytes());
    Ok(out)
}

/// 沿规范BIP44路径派生最终私钥
///
/// 路径解析失败原样向上传播；逐级派生中任何失败立即中止，
/// 不产生部分派生结果。
pub fn derive_private_key_for_path(
    master: &[u8; 32],
    chain_code: &[u8; 32],
    path: &str,
) -> Result<[u8; 32], HdError> {
    let params = Bip44Params::from_path(path)?;

    let mut key = *master;
    let mut chain = *chain_code;
    for level in params.derivation_path() {
        let (child_key, child_chain) = match derive_child(&key, &chain, level.index, level.hardened)
        {
            Ok(pair) => pair,
            Err(e) => {
                key.zeroize();
                chain.zeroize();
                return Err(e);
            }
        };
        key.zeroize();
        chain.zeroize();
        key = child_key;
        chain = child_chain;
    }
    chain.zeroize();

    Ok(key)
}

/// 从BIP39助记词生成64字节seed（PBKDF2，固定2048轮）
///
/// 助记词校验失败返回`InvalidMnemonic`
pub fn mnemonic_to_seed(mnemonic: &str, passphrase: &str) -> Result<[u8; 64], HdError> {
    let mnemonic = Mnemonic::parse_in(Language::English, mnemonic)
        .map_err(|e| HdError::InvalidMnemonic(e.to_string()))?;
    Ok(mnemonic.to_seed(passphrase))
}

fn hmac_sha512_halves(key: &[u8], data: &[u8]) -> ([u8; 32], [u8; 32]) {
    let mut mac = HmacSha512::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(data);
    let digest = mac.finalize().into_bytes();

    let mut left = [0u8; 32];
    left.copy_from_slice(&digest[..32]);
    let mut right = [0u8; 32];
    right.copy_from_slice(&digest[32..]);
    (left, right)
}
