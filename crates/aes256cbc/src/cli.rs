//! Positional argument extraction and shape validation.

use std::ffi::OsString;

use clap::Parser;
use common::{CliError, Mode, IV_CHARS, KEY_CHARS, MAX_INPUT_CHARS};

/// Raw positional arguments, before any validation.
///
/// The surface has no named flags. Help and version flags are disabled and
/// [`Args::from_argv`] places an escape `--` in front of the user arguments,
/// so tokens such as `-e`, `-h`, `--version` or `--` always land in a
/// positional slot and reach [`Args::validate`].
#[derive(Debug, Parser)]
#[command(
    name = "aes256cbc",
    about = "Encrypt or decrypt one string with AES-256-CBC.",
    override_usage = "aes256cbc <-e|-d> <input> <32 character key> <16 character iv>",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// `-e` to encrypt, `-d` to decrypt
    pub mode: Option<String>,

    /// Plaintext (encrypt) or hex ciphertext (decrypt), at most 256 characters
    pub input: Option<String>,

    /// Key, exactly 32 characters
    pub key: Option<String>,

    /// Initialisation vector, exactly 16 characters
    pub iv: Option<String>,
}

/// Arguments that passed every shape check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request<'a> {
    pub mode: Mode,
    pub input: &'a str,
    pub key: &'a str,
    pub iv: &'a str,
}

impl Args {
    /// Parse `argv` (program name first), mapping parser failures such as a
    /// surplus or non-UTF-8 argument to [`CliError::Usage`].
    pub fn from_argv<I, T>(argv: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::<OsString>::into);
        let program = argv.next().unwrap_or_else(|| OsString::from("aes256cbc"));
        let escaped = [program, OsString::from("--")].into_iter().chain(argv);

        Self::try_parse_from(escaped)
            .map_err(|e| CliError::Usage(format!("argument parsing failed: {:?}", e.kind())))
    }

    /// Run the shape checks in order: mode, presence, key/IV length, input
    /// length. The first failure wins.
    pub fn validate(&self) -> Result<Request<'_>, CliError> {
        let mode = self
            .mode
            .as_deref()
            .and_then(Mode::from_flag)
            .ok_or_else(|| CliError::Usage("mode must be -e or -d".into()))?;

        let input = present(&self.input, "input")?;
        let key = present(&self.key, "key")?;
        let iv = present(&self.iv, "iv")?;

        let key_chars = key.chars().count();
        if key_chars != KEY_CHARS {
            return Err(CliError::Usage(format!(
                "key must be {KEY_CHARS} characters, got {key_chars}"
            )));
        }
        let iv_chars = iv.chars().count();
        if iv_chars != IV_CHARS {
            return Err(CliError::Usage(format!(
                "iv must be {IV_CHARS} characters, got {iv_chars}"
            )));
        }

        let input_chars = input.chars().count();
        if input_chars > MAX_INPUT_CHARS {
            return Err(CliError::InputTooLong { len: input_chars });
        }

        Ok(Request {
            mode,
            input,
            key,
            iv,
        })
    }
}

fn present<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, CliError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CliError::Usage(format!("{name} is required"))),
    }
}
