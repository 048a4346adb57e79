//! ML-KEM (FIPS 203) round-trip walkthrough: generate a keypair, encapsulate
//! a shared secret against the public key, decapsulate it with the secret
//! key, and confirm the two sides agree. Also demonstrates implicit
//! rejection by tampering with a ciphertext byte and decapsulating again.

use hex;
use kyber_ml_kem::{decapsulate, encapsulate, keypair};
use rand::rngs::OsRng;

fn main() {
    println!("ML-KEM (FIPS 203) key encapsulation");
    println!("====================================");

    let mut rng = OsRng;

    let (ek, dk) = keypair(&mut rng).expect("OS entropy source unavailable");
    println!("Generated keypair");
    println!("  ek: {}...", hex::encode(&ek.0[..16]));

    let (c, ss_enc) = encapsulate(&ek, &mut rng).expect("OS entropy source unavailable");
    println!("Encapsulated shared secret");
    println!("  c:  {}...", hex::encode(&c.0[..16]));
    println!("  ss: {}", hex::encode(&ss_enc.0));

    let ss_dec = decapsulate(&dk, &c);
    println!("Decapsulated shared secret");
    println!("  ss: {}", hex::encode(&ss_dec.0));

    if ss_enc.0 == ss_dec.0 {
        println!("Shared secrets match!");
    } else {
        println!("Shared secrets do not match - this should never happen.");
    }

    println!("\nTampering with the ciphertext:");
    println!("-------------------------------");
    let mut tampered = c;
    tampered.0[0] ^= 1;
    let ss_tampered = decapsulate(&dk, &tampered);
    println!("  ss: {}", hex::encode(&ss_tampered.0));

    if ss_tampered.0 == ss_enc.0 {
        println!("Tampered ciphertext produced the same shared secret (unexpected).");
    } else {
        println!("Tampered ciphertext produced a different shared secret.");
        println!("This is implicit rejection at work - no decryption failure is ever observable.");
    }
}
