//! One-shot orchestration: key material, then exactly one cipher call.

use common::{CliError, Mode};
use tracing::{debug, instrument};

use crate::cli::Request;
use crate::crypto::{decrypt_hex, encrypt_text, CbcCipher, KeyMaterial};

/// Build key material from a validated [`Request`] and run the single
/// encrypt or decrypt operation it asks for.
///
/// Key, IV and input text are never recorded in the span or in log fields.
///
/// # Errors
///
/// - [`CliError::KeyMaterial`] if the key or IV text has the wrong byte length.
/// - [`CliError::Cipher`] if the cipher layer rejects the input.
#[instrument(skip_all, fields(mode = %request.mode, input_chars = request.input.chars().count()))]
pub fn run<C: CbcCipher + ?Sized>(cipher: &C, request: &Request<'_>) -> Result<String, CliError> {
    let material = KeyMaterial::from_text(request.key, request.iv)
        .map_err(|e| CliError::KeyMaterial(e.to_string()))?;
    debug!("key material ready");

    let result = match request.mode {
        Mode::Encrypt => Ok(encrypt_text(cipher, request.input, material.key(), material.iv())),
        Mode::Decrypt => decrypt_hex(cipher, request.input, material.key(), material.iv()),
    };

    result.map_err(|e| CliError::Cipher {
        operation: request.mode.operation(),
        cause: e.to_string(),
    })
}
