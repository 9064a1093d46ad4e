//! Common types and errors shared across `aes256cbc` crates.

pub mod error;
pub mod mode;

pub use error::CliError;
pub use mode::Mode;

/// Longest accepted input, counted in characters.
pub const MAX_INPUT_CHARS: usize = 256;

/// Required key length in characters (one byte each for a 256-bit key).
pub const KEY_CHARS: usize = 32;

/// Required IV length in characters (one byte each for a 128-bit IV).
pub const IV_CHARS: usize = 16;
