//! Two-party exchanges through each public surface

use ecdh_p256::prelude::*;
use ecdh_p256_ffi::{ecdh_p256_create_keypair, ecdh_p256_create_secret, ByteArray, ECDH_P256_SUCCESS};
use std::ptr;

#[test]
fn test_alice_bob_with_os_rng() -> Result<()> {
    let (alice_sk, alice_pk) = create_keypair(None)?;
    let (bob_sk, bob_pk) = create_keypair(None)?;

    let alice = create_secret(&alice_sk.to_bytes(), bob_pk.as_bytes())?;
    let bob = create_secret(&bob_sk.to_bytes(), alice_pk.as_bytes())?;

    assert_eq!(alice.as_bytes().len(), 32);
    assert_eq!(alice, bob);
    Ok(())
}

#[test]
fn test_many_exchanges_are_distinct() -> Result<()> {
    let mut os = OsEntropy::new();
    let mut secrets = Vec::new();

    for _ in 0..16 {
        let (alice_sk, alice_pk) = EcdhP256::keypair(&mut os)?;
        let (bob_sk, bob_pk) = EcdhP256::keypair(&mut os)?;
        let alice = EcdhP256::shared_secret(&alice_sk, &bob_pk)?;
        let bob = EcdhP256::shared_secret(&bob_sk, &alice_pk)?;
        assert_eq!(alice, bob);
        secrets.push(alice.to_zeroizing_bytes());
    }

    for i in 0..secrets.len() {
        for j in i + 1..secrets.len() {
            assert_ne!(secrets[i], secrets[j], "secrets {} and {} collide", i, j);
        }
    }
    Ok(())
}

#[test]
fn test_sessions_exchange_repeatedly() -> Result<()> {
    let mut alice = EcdhSession::new("alice");
    let mut bob = EcdhSession::new("bob");

    let mut previous = None;
    for _ in 0..3 {
        let alice_pk = alice.create_keypair()?;
        let bob_pk = bob.create_keypair()?;
        assert_ne!(Some(alice_pk), previous);
        previous = Some(alice_pk);

        let a = alice.shared_secret(bob_pk.as_bytes())?;
        let b = bob.shared_secret(alice_pk.as_bytes())?;
        assert_eq!(a, b);
        assert!(!alice.has_keypair() && !bob.has_keypair());
    }
    Ok(())
}

#[test]
fn test_typed_and_ffi_surfaces_agree() -> Result<()> {
    let (alice_sk, alice_pk) = create_keypair(None)?;

    let mut bob_sk = [0u8; 32];
    let mut bob_pk = [0u8; 64];
    let mut bob_sk_arr = ByteArray::new(bob_sk.as_mut_ptr(), bob_sk.len());
    let mut bob_pk_arr = ByteArray::new(bob_pk.as_mut_ptr(), bob_pk.len());
    let status =
        unsafe { ecdh_p256_create_keypair(&mut bob_sk_arr, &mut bob_pk_arr, None, ptr::null_mut()) };
    assert_eq!(status, ECDH_P256_SUCCESS);

    let mut alice_sk_bytes = alice_sk.to_bytes();
    let mut alice_pk_bytes = *alice_pk.as_bytes();
    let mut secret = [0u8; 32];
    let mut secret_arr = ByteArray::new(secret.as_mut_ptr(), secret.len());
    let status = unsafe {
        ecdh_p256_create_secret(
            ByteArray::new(bob_sk.as_mut_ptr(), 32),
            ByteArray::new(alice_pk_bytes.as_mut_ptr(), 64),
            &mut secret_arr,
        )
    };
    assert_eq!(status, ECDH_P256_SUCCESS);

    let alice = create_secret(&alice_sk_bytes, &bob_pk)?;
    assert_eq!(alice.as_bytes(), &secret[..]);

    zeroize(&mut alice_sk_bytes);
    zeroize(&mut bob_sk);
    Ok(())
}
