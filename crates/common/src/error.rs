//! Error taxonomy shared by the `aes256cbc` binary.

use thiserror::Error;

use crate::MAX_INPUT_CHARS;

/// Process exit status reported for every failure.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Top-level error type for a single invocation.
///
/// Every variant is terminal. [`CliError::exit_code`] gives the process exit
/// status and the `Display` output is the one-line diagnostic written to
/// standard error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// Missing or malformed arguments, unknown mode token, wrong key/IV length.
    ///
    /// The payload says which check failed; it is logged but not shown to the
    /// user, who only sees the usage line.
    #[error("Usage: aes256cbc <-e|-d> <input> <32 character key> <16 character iv>")]
    Usage(String),

    /// The input is longer than [`MAX_INPUT_CHARS`] characters.
    #[error("Input string exceeds maximum length of {MAX_INPUT_CHARS} characters.")]
    InputTooLong {
        /// Character count of the rejected input.
        len: usize,
    },

    /// The key or IV text could not be turned into cipher material.
    #[error("Error creating buffers for key or IV: {0}")]
    KeyMaterial(String),

    /// Encryption or decryption failed in the cipher layer.
    #[error("Error during {operation}: {cause}")]
    Cipher {
        /// `"encryption"` or `"decryption"`.
        operation: &'static str,
        /// Message of the underlying cipher error.
        cause: String,
    },
}

impl CliError {
    /// Exit status the process should terminate with.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_)
            | CliError::InputTooLong { .. }
            | CliError::KeyMaterial(_)
            | CliError::Cipher { .. } => FAILURE_EXIT_CODE,
        }
    }

    /// Short machine-readable kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Usage(_) => "usage",
            CliError::InputTooLong { .. } => "input_too_long",
            CliError::KeyMaterial(_) => "key_material",
            CliError::Cipher { .. } => "cipher",
        }
    }
}
