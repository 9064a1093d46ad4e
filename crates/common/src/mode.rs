//! Cipher direction selected by the first positional argument.

use std::fmt;

/// Direction of the single cipher operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `-e`: UTF-8 plaintext in, lowercase hex out.
    Encrypt,
    /// `-d`: hex ciphertext in, UTF-8 plaintext out.
    Decrypt,
}

impl Mode {
    /// Parse a mode token. Only the exact literals `-e` and `-d` are accepted.
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "-e" => Some(Mode::Encrypt),
            "-d" => Some(Mode::Decrypt),
            _ => None,
        }
    }

    /// Noun used in diagnostics (`"encryption"` / `"decryption"`).
    pub fn operation(self) -> &'static str {
        match self {
            Mode::Encrypt => "encryption",
            Mode::Decrypt => "decryption",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Encrypt => "encrypt",
            Mode::Decrypt => "decrypt",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognised_flags() {
        assert_eq!(Mode::from_flag("-e"), Some(Mode::Encrypt));
        assert_eq!(Mode::from_flag("-d"), Some(Mode::Decrypt));
    }

    #[test]
    fn other_tokens_rejected() {
        for token in ["", "-x", "e", "--e", "-E", "-e ", "-ed"] {
            assert_eq!(Mode::from_flag(token), None, "{token:?}");
        }
    }

    #[test]
    fn operation_nouns() {
        assert_eq!(Mode::Encrypt.operation(), "encryption");
        assert_eq!(Mode::Decrypt.operation(), "decryption");
        assert_eq!(Mode::Decrypt.to_string(), "decrypt");
    }
}
