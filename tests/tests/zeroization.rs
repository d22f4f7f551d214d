//! Wiping of secret material

use ecdh_p256::prelude::*;
use ecdh_p256_ffi::{ecdh_p256_wrap_zeroize, ecdh_p256_zeroize};
use zeroize_check::{fill_pattern, is_zero};

mod zeroize_check {
    pub fn fill_pattern(buffer: &mut [u8]) {
        for (i, byte) in buffer.iter_mut().enumerate() {
            *byte = (i as u8) | 0x80;
        }
    }

    pub fn is_zero(buffer: &[u8]) -> bool {
        buffer.iter().all(|&b| b == 0)
    }
}

#[test]
fn test_zeroize_every_length() {
    for len in 0..=96 {
        let mut buffer = vec![0u8; len];
        fill_pattern(&mut buffer);
        zeroize(&mut buffer);
        assert!(is_zero(&buffer), "length {}", len);
    }
}

#[test]
fn test_zeroize_only_touches_requested_range() {
    let mut buffer = [0xEEu8; 64];
    zeroize(&mut buffer[16..48]);
    assert_eq!(&buffer[..16], &[0xEE; 16]);
    assert!(is_zero(&buffer[16..48]));
    assert_eq!(&buffer[48..], &[0xEE; 16]);
}

#[test]
fn test_ffi_zeroize() {
    let mut buffer = [0u8; 100];
    fill_pattern(&mut buffer);
    unsafe { ecdh_p256_zeroize(buffer.as_mut_ptr().cast(), buffer.len()) };
    assert!(is_zero(&buffer));

    fill_pattern(&mut buffer);
    unsafe { ecdh_p256_wrap_zeroize(buffer.as_mut_ptr().cast(), 50) };
    assert!(is_zero(&buffer[..50]));
    assert!(!is_zero(&buffer[50..]));
}

#[test]
fn test_exported_key_bytes_can_be_wiped() {
    let (private_key, _) = create_keypair(None).unwrap();
    let mut exported = private_key.to_bytes();
    assert!(!is_zero(&exported));

    zeroize(&mut exported);
    assert!(is_zero(&exported));
    // The key itself is unaffected
    assert!(!is_zero(&private_key.to_bytes()));
}

#[test]
fn test_secret_buffer_debug_is_redacted() {
    let (private_key, public_key) = create_keypair(None).unwrap();
    let secret = EcdhP256::shared_secret(&private_key, &public_key).unwrap();

    let exported = hex::encode(&private_key.to_bytes()[..]);
    assert!(!format!("{:?}", private_key).contains(&exported));
    assert!(!format!("{:?}", secret).contains(&hex::encode(secret.as_bytes())));
}
