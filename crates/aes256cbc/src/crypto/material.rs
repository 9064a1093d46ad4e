//! Key and IV material built directly from command-line text.
//!
//! The key and IV strings *are* the cipher material: their UTF-8 bytes are
//! used as-is, with no hashing, salting or stretching. This is weak (a
//! 32-character printable key has far less than 256 bits of entropy) and is
//! kept only for output compatibility with existing ciphertexts.

use std::fmt;

use thiserror::Error;
use zeroize::Zeroizing;

use super::cipher::{IV_LEN, KEY_LEN};

/// Errors produced while turning key/IV text into bytes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaterialError {
    /// The key text does not encode to exactly [`KEY_LEN`] bytes.
    #[error("key encodes to {0} bytes, expected {KEY_LEN}")]
    KeyLength(usize),

    /// The IV text does not encode to exactly [`IV_LEN`] bytes.
    #[error("IV encodes to {0} bytes, expected {IV_LEN}")]
    IvLength(usize),
}

/// Raw key and IV bytes, wiped from memory on drop.
pub struct KeyMaterial {
    key: Zeroizing<[u8; KEY_LEN]>,
    iv: Zeroizing<[u8; IV_LEN]>,
}

impl KeyMaterial {
    /// Encode `key` and `iv` as UTF-8 and take the bytes verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError`] if either encoding has the wrong byte length,
    /// which happens when a correctly sized string contains non-ASCII
    /// characters.
    pub fn from_text(key: &str, iv: &str) -> Result<Self, MaterialError> {
        Ok(Self {
            key: Zeroizing::new(fixed_bytes(key).ok_or(MaterialError::KeyLength(key.len()))?),
            iv: Zeroizing::new(fixed_bytes(iv).ok_or(MaterialError::IvLength(iv.len()))?),
        })
    }

    pub fn key(&self) -> &[u8; KEY_LEN] {
        &self.key
    }

    pub fn iv(&self) -> &[u8; IV_LEN] {
        &self.iv
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("key", &"<redacted>")
            .field("iv", &"<redacted>")
            .finish()
    }
}

fn fixed_bytes<const N: usize>(text: &str) -> Option<[u8; N]> {
    text.as_bytes().try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_text_used_verbatim() {
        let m = KeyMaterial::from_text("01234567890123456789012345678901", "0123456789012345")
            .unwrap();
        assert_eq!(m.key(), b"01234567890123456789012345678901");
        assert_eq!(m.iv(), b"0123456789012345");
    }

    #[test]
    fn multibyte_key_rejected() {
        // 32 characters, 33 bytes.
        let key = "é1234567890123456789012345678901";
        assert_eq!(key.chars().count(), 32);
        assert_eq!(
            KeyMaterial::from_text(key, "0123456789012345").unwrap_err(),
            MaterialError::KeyLength(33)
        );
    }

    #[test]
    fn multibyte_iv_rejected() {
        let iv = "ü123456789012345";
        assert_eq!(
            KeyMaterial::from_text("01234567890123456789012345678901", iv).unwrap_err(),
            MaterialError::IvLength(17)
        );
    }

    #[test]
    fn debug_is_redacted() {
        let m = KeyMaterial::from_text("01234567890123456789012345678901", "0123456789012345")
            .unwrap();
        let dbg = format!("{m:?}");
        assert!(!dbg.contains("0123"));
        assert!(dbg.contains("redacted"));
    }
}
