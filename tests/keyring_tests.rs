//! 密钥环端到端测试
//!
//! 覆盖：算法配置显式传递、派生→签名→验签→地址的完整链路

use ironhd::prelude::*;

const TEST_MNEMONIC: &str =
    "barrel original fuel morning among eternal filter ball stove pluck matrix mechanic";

fn test_seed() -> [u8; 64] {
    ironhd::domain::mnemonic_to_seed(TEST_MNEMONIC, "").expect("fixture mnemonic must be valid")
}

/// 测试用例：secp256k1完整链路（派生→签名→验签→bech32地址）
#[test]
fn test_secp256k1_end_to_end() {
    let keyring = Keyring::new(SigningAlgorithm::Secp256k1).unwrap();
    let sk = keyring
        .derive_private_key(&test_seed(), FULL_FUNDRAISER_PATH)
        .unwrap();

    // 与固定向量一致
    assert_eq!(
        hex::encode(sk.to_bytes()),
        "4c2e449eb56b471cbd920b5c12b88367bded6660178082d91bafc5714e67da97"
    );

    let pk = sk.public_key().unwrap();
    let msg = b"transfer 1000uatom";
    let sig = sk.sign(msg).unwrap();
    pk.verify(msg, &sig).unwrap();
    assert!(pk.verify(b"transfer 9000uatom", &sig).is_err());

    let address = pk.address().to_bech32("cosmos").unwrap();
    assert!(address.starts_with("cosmos1"), "address: {}", address);
}

/// 测试用例：ed25519完整链路
#[test]
fn test_ed25519_end_to_end() {
    let keyring = Keyring::new(SigningAlgorithm::Ed25519).unwrap();
    let sk = keyring
        .derive_private_key(&test_seed(), FULL_FUNDRAISER_PATH)
        .unwrap();
    assert_eq!(sk.algorithm(), SigningAlgorithm::Ed25519);

    let pk = sk.public_key().unwrap();
    let sig = sk.sign(b"vote yes").unwrap();
    pk.verify(b"vote yes", &sig).unwrap();
    assert!(pk.verify(b"vote no", &sig).is_err());

    assert_eq!(pk.address().as_bytes().len(), 20);
}

/// 测试用例：算法从配置字符串解析后显式传入，未知/不支持的算法拒绝
#[test]
fn test_algorithm_resolved_from_config_string() {
    let algorithm: SigningAlgorithm = "secp256k1".parse().unwrap();
    assert!(Keyring::new(algorithm).is_ok());

    assert!("keccak".parse::<SigningAlgorithm>().is_err());

    let multisig: SigningAlgorithm = "multisig".parse().unwrap();
    assert_eq!(
        Keyring::new(multisig),
        Err(HdError::AlgorithmNotSupported(SigningAlgorithm::Multisig))
    );
}

/// 测试用例：不同密钥环实例互不影响（无全局状态）
#[test]
fn test_keyrings_are_independent() {
    let secp = Keyring::new(SigningAlgorithm::Secp256k1).unwrap();
    let ed = Keyring::new(SigningAlgorithm::Ed25519).unwrap();

    let seed = test_seed();
    let secp_key = secp.derive_private_key(&seed, FULL_FUNDRAISER_PATH).unwrap();
    let ed_key = ed.derive_private_key(&seed, FULL_FUNDRAISER_PATH).unwrap();

    // 同一路径、同一seed，算法标签跟随各自密钥环
    assert_eq!(secp_key.algorithm(), SigningAlgorithm::Secp256k1);
    assert_eq!(ed_key.algorithm(), SigningAlgorithm::Ed25519);

    // 再次派生仍然一致
    let secp_again = secp.derive_private_key(&seed, FULL_FUNDRAISER_PATH).unwrap();
    assert_eq!(secp_key.to_bytes(), secp_again.to_bytes());
}

/// 测试用例：公钥序列化往返
#[test]
fn test_public_key_round_trip() {
    let keyring = Keyring::new(SigningAlgorithm::Secp256k1).unwrap();
    let pk = keyring
        .derive_private_key(&test_seed(), FULL_FUNDRAISER_PATH)
        .unwrap()
        .public_key()
        .unwrap();

    let decoded = PublicKey::from_bytes(SigningAlgorithm::Secp256k1, &pk.to_bytes()).unwrap();
    assert_eq!(decoded, pk);
    assert_eq!(decoded.address(), pk.address());
}
