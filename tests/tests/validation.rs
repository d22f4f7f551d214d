//! Rejection of malformed and out-of-range keys

use ecdh_p256::prelude::*;
use ecdh_p256_ffi::{
    ecdh_p256_wrap_create_secret, ECDH_P256_INVALID_PRIVKEY, ECDH_P256_INVALID_PUBKEY,
    ECDH_P256_MEMORY_FAIL,
};
use ecdh_p256_params::traditional::ecdh::NIST_P256;
use ecdh_p256_tests::vectors::{decode, order_minus_one, ECDH_VECTOR};

fn valid_private() -> Vec<u8> {
    decode(ECDH_VECTOR.private_a)
}

fn valid_public() -> Vec<u8> {
    decode(ECDH_VECTOR.public_b)
}

#[test]
fn test_rejects_invalid_private_keys() {
    let public_key = valid_public();
    let mut above_order = NIST_P256.n;
    above_order[31] += 1;

    let cases: Vec<Vec<u8>> = vec![
        vec![0u8; 32],
        NIST_P256.n.to_vec(),
        above_order.to_vec(),
        vec![0xFF; 32],
        vec![1u8; 31],
        vec![1u8; 33],
        Vec::new(),
    ];
    for private_key in cases {
        let err = create_secret(&private_key, &public_key).unwrap_err();
        assert_eq!(err.status(), Status::InvalidPrivateKey, "{}", hex::encode(&private_key));
    }

    // n - 1 is the largest valid key
    assert!(create_secret(&order_minus_one(), &public_key).is_ok());
}

#[test]
fn test_rejects_invalid_public_keys() {
    let private_key = valid_private();
    let good = valid_public();

    let mut off_curve = good.clone();
    off_curve[63] ^= 0x01;

    let mut x_is_p = good.clone();
    x_is_p[..32].copy_from_slice(&NIST_P256.p);

    let mut y_is_p = good.clone();
    y_is_p[32..].copy_from_slice(&NIST_P256.p);

    let cases: Vec<Vec<u8>> = vec![
        vec![0u8; 64],
        off_curve,
        x_is_p,
        y_is_p,
        good[..63].to_vec(),
        [good.clone(), vec![0]].concat(),
        Vec::new(),
    ];
    for public_key in cases {
        let err = create_secret(&private_key, &public_key).unwrap_err();
        assert_eq!(err.status(), Status::InvalidPublicKey, "{}", hex::encode(&public_key));
    }
}

#[test]
fn test_private_key_checked_before_public_key() {
    let err = create_secret(&[0u8; 32], &[0u8; 64]).unwrap_err();
    assert_eq!(err.status(), Status::InvalidPrivateKey);
}

#[test]
fn test_failed_secret_leaves_output_untouched() {
    let private_key = valid_private();
    let bad_public = [0u8; 64];
    let mut secret = [0x5Au8; 32];
    let mut secret_len = 32u32;

    let status = unsafe {
        ecdh_p256_wrap_create_secret(
            private_key.as_ptr(),
            private_key.len() as u32,
            bad_public.as_ptr(),
            64,
            secret.as_mut_ptr(),
            &mut secret_len,
        )
    };
    assert_eq!(status, ECDH_P256_INVALID_PUBKEY);
    assert_eq!(secret, [0x5Au8; 32]);
    assert_eq!(secret_len, 0);

    secret_len = 32;
    let status = unsafe {
        ecdh_p256_wrap_create_secret(
            NIST_P256.n.as_ptr(),
            32,
            bad_public.as_ptr(),
            64,
            secret.as_mut_ptr(),
            &mut secret_len,
        )
    };
    assert_eq!(status, ECDH_P256_INVALID_PRIVKEY);
    assert_eq!(secret, [0x5Au8; 32]);
    assert_eq!(secret_len, 0);
}

#[test]
fn test_adapter_checks_capacity_then_private_then_public() {
    let good_private = valid_private();
    let bad_public = [0u8; 64];

    let derive = |private_key: &[u8], capacity: u32| {
        let mut secret = [0u8; 32];
        let mut secret_len = capacity;
        let status = unsafe {
            ecdh_p256_wrap_create_secret(
                private_key.as_ptr(),
                private_key.len() as u32,
                bad_public.as_ptr(),
                bad_public.len() as u32,
                secret.as_mut_ptr(),
                &mut secret_len,
            )
        };
        (status, secret_len)
    };

    // Every input is bad: the short output buffer is reported first
    assert_eq!(derive(&NIST_P256.n[..], 31), (ECDH_P256_MEMORY_FAIL, 0));
    // Enough room: the private key is checked before the public key
    assert_eq!(derive(&NIST_P256.n[..], 32), (ECDH_P256_INVALID_PRIVKEY, 0));
    // Only the public key is left to fail
    assert_eq!(derive(&good_private[..], 32), (ECDH_P256_INVALID_PUBKEY, 0));
}

#[test]
fn test_sec1_rejections() {
    let good = PublicKey::from_bytes(&valid_public()).unwrap();
    let mut sec1 = good.to_sec1_uncompressed();

    sec1[0] = 0x02;
    assert_eq!(
        PublicKey::from_sec1_uncompressed(&sec1).unwrap_err().status(),
        Status::InvalidPublicKey
    );
    assert!(PublicKey::from_sec1_uncompressed(&[0x04; 33]).is_err());
    assert!(PublicKey::from_sec1_uncompressed(&[0u8; 65]).is_err());
}
