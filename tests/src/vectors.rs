//! Known-answer vectors for P-256

use ecdh_p256_params::traditional::ecdh::NIST_P256;

/// A private key with its expected raw public key `x ‖ y`
pub struct KeyVector {
    pub private_key: [u8; 32],
    pub public_x: &'static str,
    pub public_y: &'static str,
}

impl KeyVector {
    pub fn public_key(&self) -> Vec<u8> {
        decode(&format!("{}{}", self.public_x, self.public_y))
    }
}

/// An ECDH exchange with its expected shared secret
pub struct ExchangeVector {
    pub private_a: &'static str,
    pub public_a: &'static str,
    pub private_b: &'static str,
    pub public_b: &'static str,
    pub secret: &'static str,
}

pub const ECDH_VECTOR: ExchangeVector = ExchangeVector {
    private_a: "c88f01f510d9ac3f70a292daa2316de544e9aab8afe84049c62a9c57862d1433",
    public_a: "dad0b65394221cf9b051e1feca5787d098dfe637fc90b9ef945d0c3772581180\
               5271a0461cdb8252d61f1c456fa3e59ab1f45b33accf5f58389e0577b8990bb3",
    private_b: "0f56db78ca460b055c500064824bed999a25aaf48ebb519ac201537b85479813",
    public_b: "e266ddfdc12668db30d4ca3e8f7749432c416044f2d2b8c10bf3d4012aeffa8a\
               bfa86404a2e9ffe67d47c587ef7a97a7f456b863b4d02cfc6928973ab5b1cb39",
    secret: "2b5e2c6ad2a9426ff078b5ac94b5f4bedc8b2bd0f8ad4ae448790209fbf99b21",
};

fn small(k: u8) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[31] = k;
    bytes
}

/// n - 1
pub fn order_minus_one() -> [u8; 32] {
    let mut bytes = NIST_P256.n;
    bytes[31] -= 1;
    bytes
}

/// 1G, 2G, 3G and (n-1)G
pub fn generator_multiples() -> Vec<KeyVector> {
    vec![
        KeyVector {
            private_key: small(1),
            public_x: "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
            public_y: "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
        },
        KeyVector {
            private_key: small(2),
            public_x: "7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978",
            public_y: "07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1",
        },
        KeyVector {
            private_key: small(3),
            public_x: "5ecbe4d1a6330a44c8f7ef951d4bf165e6c6b721efada985fb41661bc6e7fd6c",
            public_y: "8734640c4998ff7e374b06ce1a64a2ecd82ab036384fb83d9a79b127a27d5032",
        },
        KeyVector {
            private_key: order_minus_one(),
            public_x: "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
            public_y: "b01cbd1c01e58065711814b583f061e9d431cca994cea1313449bf97c840ae0a",
        },
    ]
}

/// Decode hex, ignoring whitespace
pub fn decode(s: &str) -> Vec<u8> {
    let compact: String = s.split_whitespace().collect();
    hex::decode(compact).unwrap_or_else(|err| panic!("bad test vector {s:?}: {err}"))
}
