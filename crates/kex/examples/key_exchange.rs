use ecdh_p256_kex::{create_keypair, create_secret, zeroize, EcdhSession};

fn main() {
    // Stateless exchange with the OS RNG
    let (alice_sk, alice_pk) = create_keypair(None).unwrap();
    let (bob_sk, bob_pk) = create_keypair(None).unwrap();

    let alice = create_secret(&alice_sk.to_bytes(), bob_pk.as_bytes()).unwrap();
    let bob = create_secret(&bob_sk.to_bytes(), alice_pk.as_bytes()).unwrap();
    assert_eq!(alice, bob);
    println!("Shared secret: {} bytes, agreed", alice.as_bytes().len());

    // Per-party sessions; keys are discarded after each derivation
    let mut client = EcdhSession::new("client");
    let mut server = EcdhSession::new("server");
    let client_pk = client.create_keypair().unwrap();
    let server_pk = server.create_keypair().unwrap();

    let mut client_secret = client.shared_secret(server_pk.as_bytes()).unwrap().to_zeroizing_bytes();
    let server_secret = server.shared_secret(client_pk.as_bytes()).unwrap();
    assert_eq!(&client_secret[..], server_secret.as_bytes());
    println!("Session keys discarded: {}", !client.has_keypair());

    zeroize(&mut client_secret);
}
