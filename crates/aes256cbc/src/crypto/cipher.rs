//! AES-256-CBC encryption and decryption of a single text value.
//!
//! **No integrity protection.** CBC with PKCS#7 padding only provides
//! confidentiality. Decrypting with the wrong key or IV, or decrypting
//! tampered ciphertext, *usually* fails the padding check but can succeed
//! and return garbage. Do not rely on a decryption error as tamper detection.
//!
//! **Deterministic.** A fixed key and IV always map the same plaintext to the
//! same ciphertext.

use aes::Aes256;
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use thiserror::Error;

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of a CBC initialisation vector (one AES block).
pub const IV_LEN: usize = 16;

/// AES block size in bytes.
pub const BLOCK_LEN: usize = 16;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Errors produced by the cipher layer.
#[derive(Debug, Error, PartialEq)]
pub enum CipherError {
    /// The ciphertext text is not valid hexadecimal.
    #[error("invalid hex ciphertext: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The ciphertext is not a whole number of cipher blocks.
    #[error("ciphertext length {len} is not a multiple of the {BLOCK_LEN}-byte block size")]
    Misaligned {
        /// Ciphertext length in bytes.
        len: usize,
    },

    /// PKCS#7 padding removal failed (corrupt ciphertext, or wrong key or IV).
    #[error("bad decrypt: padding check failed")]
    BadPadding,

    /// The recovered plaintext is not valid UTF-8.
    #[error("decrypted data is not valid UTF-8")]
    InvalidUtf8,
}

/// Narrow interface over a CBC block-cipher implementation.
#[cfg_attr(test, mockall::automock)]
pub trait CbcCipher {
    /// Encrypt `plaintext`, applying PKCS#7 padding.
    fn encrypt(&self, plaintext: &[u8], key: &[u8; KEY_LEN], iv: &[u8; IV_LEN]) -> Vec<u8>;

    /// Decrypt `ciphertext` and strip its PKCS#7 padding.
    fn decrypt(
        &self,
        ciphertext: &[u8],
        key: &[u8; KEY_LEN],
        iv: &[u8; IV_LEN],
    ) -> Result<Vec<u8>, CipherError>;
}

/// AES-256 in CBC mode, backed by the RustCrypto `aes` and `cbc` crates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aes256Cbc;

impl CbcCipher for Aes256Cbc {
    fn encrypt(&self, plaintext: &[u8], key: &[u8; KEY_LEN], iv: &[u8; IV_LEN]) -> Vec<u8> {
        Aes256CbcEnc::new(&(*key).into(), &(*iv).into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
    }

    fn decrypt(
        &self,
        ciphertext: &[u8],
        key: &[u8; KEY_LEN],
        iv: &[u8; IV_LEN],
    ) -> Result<Vec<u8>, CipherError> {
        if ciphertext.len() % BLOCK_LEN != 0 {
            return Err(CipherError::Misaligned {
                len: ciphertext.len(),
            });
        }
        Aes256CbcDec::new(&(*key).into(), &(*iv).into())
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| CipherError::BadPadding)
    }
}

/// Encrypt UTF-8 text and return the ciphertext as lowercase hex.
pub fn encrypt_text<C: CbcCipher + ?Sized>(
    cipher: &C,
    plaintext: &str,
    key: &[u8; KEY_LEN],
    iv: &[u8; IV_LEN],
) -> String {
    hex::encode(cipher.encrypt(plaintext.as_bytes(), key, iv))
}

/// Decrypt hex ciphertext (any letter case) back to UTF-8 text.
///
/// # Errors
///
/// Returns [`CipherError::InvalidHex`] for malformed hex, and otherwise any
/// error from [`CbcCipher::decrypt`] or [`CipherError::InvalidUtf8`].
pub fn decrypt_hex<C: CbcCipher + ?Sized>(
    cipher: &C,
    ciphertext_hex: &str,
    key: &[u8; KEY_LEN],
    iv: &[u8; IV_LEN],
) -> Result<String, CipherError> {
    let ciphertext = hex::decode(ciphertext_hex)?;
    let plaintext = cipher.decrypt(&ciphertext, key, iv)?;
    String::from_utf8(plaintext).map_err(|_| CipherError::InvalidUtf8)
}
