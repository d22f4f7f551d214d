//! Known-answer tests

use ecdh_p256::prelude::*;
use ecdh_p256_tests::sources::ScriptedSource;
use ecdh_p256_tests::vectors::{decode, generator_multiples, ECDH_VECTOR};

#[test]
fn test_generator_multiples() {
    for vector in generator_multiples() {
        let mut source = ScriptedSource::new([vector.private_key.to_vec()]);
        let (private_key, public_key) = create_keypair(Some(&mut source)).unwrap();

        assert_eq!(&private_key.to_bytes()[..], &vector.private_key[..]);
        assert_eq!(public_key.as_bytes().to_vec(), vector.public_key());
        assert_eq!(source.calls, 1);

        // Deriving from the stored key gives the same public key
        assert_eq!(
            PrivateKey::from_bytes(&vector.private_key)
                .unwrap()
                .public_key()
                .unwrap(),
            public_key
        );
    }
}

#[test]
fn test_ecdh_vector() {
    let private_a = decode(ECDH_VECTOR.private_a);
    let private_b = decode(ECDH_VECTOR.private_b);
    let public_a = decode(ECDH_VECTOR.public_a);
    let public_b = decode(ECDH_VECTOR.public_b);
    let expected = decode(ECDH_VECTOR.secret);

    assert_eq!(
        PrivateKey::from_bytes(&private_a).unwrap().public_key().unwrap().as_bytes().to_vec(),
        public_a
    );
    assert_eq!(
        PrivateKey::from_bytes(&private_b).unwrap().public_key().unwrap().as_bytes().to_vec(),
        public_b
    );

    let z_a = create_secret(&private_a, &public_b).unwrap();
    let z_b = create_secret(&private_b, &public_a).unwrap();
    assert_eq!(z_a.as_bytes(), &expected[..]);
    assert_eq!(z_b.as_bytes(), &expected[..]);
}

#[test]
fn test_ecdh_vector_through_sec1() {
    let public_b = PublicKey::from_bytes(&decode(ECDH_VECTOR.public_b)).unwrap();
    let sec1 = public_b.to_sec1_uncompressed();
    assert_eq!(sec1[0], 0x04);
    assert_eq!(PublicKey::from_sec1_uncompressed(&sec1).unwrap(), public_b);

    let private_a = PrivateKey::from_bytes(&decode(ECDH_VECTOR.private_a)).unwrap();
    let secret = EcdhP256::shared_secret(&private_a, &public_b).unwrap();
    assert_eq!(secret.as_bytes(), &decode(ECDH_VECTOR.secret)[..]);
}
