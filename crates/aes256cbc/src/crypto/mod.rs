//! AES-256-CBC primitives and key material.
//!
//! This module is free of argument-parsing and logging concerns. It provides
//! the encrypt/decrypt operations used by the invoker.
//!
//! # Ciphertext format
//!
//! ```text
//! lowercase-hex(AES-256-CBC(key, iv, PKCS#7(plaintext)))
//! ```
//!
//! There is no version prefix, embedded IV or authentication tag; the caller
//! must supply the same key and IV to decrypt.

pub mod cipher;
pub mod material;

pub use cipher::{decrypt_hex, encrypt_text, Aes256Cbc, CbcCipher};
pub use material::KeyMaterial;
