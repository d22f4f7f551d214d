//! Property-based tests for ECDH-P256

use ecdh_p256::prelude::*;
use ecdh_p256_params::traditional::ecdh::NIST_P256;
use ecdh_p256_tests::vectors::{decode, ECDH_VECTOR};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Is `bytes` a big-endian integer in [1, n-1]?
fn in_scalar_range(bytes: &[u8]) -> bool {
    bytes.iter().any(|&b| b != 0) && bytes < &NIST_P256.n[..]
}

fn keypair(seed: [u8; 32]) -> (PrivateKey, PublicKey) {
    let mut rng = RngEntropy::new(ChaCha20Rng::from_seed(seed));
    create_keypair(Some(&mut rng)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn keypairs_are_valid(seed in any::<[u8; 32]>()) {
        let (private_key, public_key) = keypair(seed);

        prop_assert!(in_scalar_range(&private_key.to_bytes()));
        // Re-parsing runs the full on-curve and non-identity checks
        prop_assert_eq!(PublicKey::from_bytes(public_key.as_bytes()).unwrap(), public_key);
        prop_assert_eq!(private_key.public_key().unwrap(), public_key);
    }

    #[test]
    fn shared_secrets_agree(seed_a in any::<[u8; 32]>(), seed_b in any::<[u8; 32]>()) {
        let (sk_a, pk_a) = keypair(seed_a);
        let (sk_b, pk_b) = keypair(seed_b);

        let z_a = create_secret(&sk_a.to_bytes(), pk_b.as_bytes()).unwrap();
        let z_b = create_secret(&sk_b.to_bytes(), pk_a.as_bytes()).unwrap();
        prop_assert_eq!(z_a.as_bytes(), z_b.as_bytes());
    }

    #[test]
    fn private_key_bytes_accepted_iff_in_range(bytes in any::<[u8; 32]>()) {
        let public_key = decode(ECDH_VECTOR.public_b);
        let result = create_secret(&bytes, &public_key);
        if in_scalar_range(&bytes) {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err().status(), Status::InvalidPrivateKey);
        }
    }

    #[test]
    fn random_public_keys_are_rejected(bytes in any::<[u8; 32]>(), y in any::<[u8; 32]>()) {
        // A random (x, y) is on the curve with negligible probability
        let mut public_key = bytes.to_vec();
        public_key.extend_from_slice(&y);
        let private_key = decode(ECDH_VECTOR.private_a);

        let err = create_secret(&private_key, &public_key).unwrap_err();
        prop_assert_eq!(err.status(), Status::InvalidPublicKey);
    }

    #[test]
    fn zeroize_clears_any_buffer(buffer in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut buffer = buffer;
        zeroize(&mut buffer);
        prop_assert!(buffer.iter().all(|&b| b == 0));
    }
}
