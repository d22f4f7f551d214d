//! Entropy handling during keypair generation

use ecdh_p256::prelude::*;
use ecdh_p256_params::traditional::ecdh::{MAX_KEYGEN_ATTEMPTS, NIST_P256};
use ecdh_p256_tests::sources::{ConstantSource, FailingSource, ScriptedSource};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_failure_propagates_without_retry() {
    let mut source = FailingSource::default();
    let err = create_keypair(Some(&mut source)).unwrap_err();
    assert_eq!(err.status(), Status::RandomFailure);
    assert_eq!(source.calls, 1);

    let mut source = FailingSource::default();
    let mut session = EcdhSession::new("failing");
    session.set_entropy_callback(EntropyCallback::new(move |dest: &mut [u8]| source.fill(dest)));
    assert_eq!(
        session.create_keypair().unwrap_err().status(),
        Status::RandomFailure
    );
}

#[test]
fn test_failure_after_rejected_draw() {
    // A zero draw is rejected, then the source fails
    let mut source = ScriptedSource::new([vec![0u8; 32]]);
    let err = create_keypair(Some(&mut source)).unwrap_err();
    assert_eq!(err.status(), Status::RandomFailure);
    assert_eq!(source.calls, 2);
}

#[test]
fn test_out_of_range_draws_are_redrawn() {
    let mut valid = [0u8; 32];
    valid[31] = 5;
    let mut source = ScriptedSource::new([
        vec![0u8; 32],
        NIST_P256.n.to_vec(),
        vec![0xFF; 32],
        valid.to_vec(),
    ]);

    let (private_key, _) = create_keypair(Some(&mut source)).unwrap();
    assert_eq!(&private_key.to_bytes()[..], &valid[..]);
    assert_eq!(source.calls, 4);
}

#[test]
fn test_stuck_source_is_bounded() {
    for byte in [0x00, 0xFF] {
        let mut source = ConstantSource::new(byte);
        let err = create_keypair(Some(&mut source)).unwrap_err();
        assert_eq!(err.status(), Status::RandomFailure);
        assert_eq!(source.calls, MAX_KEYGEN_ATTEMPTS);
    }
}

#[test]
fn test_deterministic_under_fixed_entropy() {
    let keypair = |byte: u8| {
        let mut source = ConstantSource::new(byte);
        create_keypair(Some(&mut source)).unwrap()
    };
    let (sk_a, pk_a) = keypair(0x42);
    let (sk_b, pk_b) = keypair(0x42);
    assert_eq!(sk_a.to_bytes(), sk_b.to_bytes());
    assert_eq!(pk_a, pk_b);

    let mut rng_a = RngEntropy::new(ChaCha20Rng::from_seed([9u8; 32]));
    let mut rng_b = RngEntropy::new(ChaCha20Rng::from_seed([9u8; 32]));
    for _ in 0..4 {
        let (_, pk_a) = create_keypair(Some(&mut rng_a)).unwrap();
        let (_, pk_b) = create_keypair(Some(&mut rng_b)).unwrap();
        assert_eq!(pk_a, pk_b);
    }
}

#[test]
fn test_fixed_entropy_is_one_shot() {
    let seed = [0x42u8; 32];
    let mut source = FixedEntropy::new(&seed).unwrap();
    let (sk, _) = create_keypair(Some(&mut source)).unwrap();
    assert_eq!(&sk.to_bytes()[..], &seed[..]);
    assert!(source.is_spent());

    let err = create_keypair(Some(&mut source)).unwrap_err();
    assert_eq!(err.status(), Status::RandomFailure);

    assert_eq!(
        FixedEntropy::new(&seed[..16]).unwrap_err().status(),
        Status::MemoryFailure
    );
}

#[test]
fn test_random_output() {
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    random(&mut a).unwrap();
    random(&mut b).unwrap();
    assert_ne!(a, b);

    let mut large = vec![0u8; 4096];
    random(&mut large).unwrap();
    assert!(large.iter().any(|&byte| byte != 0));
}
