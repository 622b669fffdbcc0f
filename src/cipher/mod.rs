//! Cipher strategies and the shared input/output mode contract
//!
//! This module supports three interchangeable cipher strategies:
//! - Caesar: classical fixed-shift rotation over letters
//! - Vigenere: running-key polyalphabetic cipher driven by a keyword
//! - AES: AES-CBC with PKCS#7 padding, Base64-framed ciphertext
//!
//! Every strategy carries a [`CipherConfig`] describing how caller text is
//! decoded before ciphering and how results are encoded afterwards.

pub mod aes;
pub mod caesar;
pub mod vigenere;

use crate::cipher::aes::AesCipher;
use crate::cipher::caesar::CaesarCipher;
use crate::cipher::vigenere::VigenereCipher;
use crate::encoding;
use crate::errors::{CipherError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Display;

/// Core encryption/decryption trait
///
/// All cipher implementations must implement this trait to provide
/// consistent encryption and decryption interfaces. Both operations take
/// `&self`: scratch state stays local to the call, so a single instance may
/// be shared freely across threads.
pub trait Cipher: Send + Sync {
    /// Encrypts the given text
    ///
    /// The text is first decoded according to the configured input mode and
    /// the result is encoded according to the configured output mode (the
    /// AES strategy always frames its binary ciphertext as Base64 instead,
    /// see [`AesCipher`]).
    ///
    /// # Returns
    /// * `Ok(String)` with the complete ciphertext
    /// * `Err` on malformed call-time text or an engine fault; never a
    ///   partial result
    fn encrypt(&self, text: &str) -> Result<String>;

    /// Decrypts the given text
    ///
    /// # Returns
    /// * `Ok(String)` with the complete plaintext
    /// * `Err` on malformed call-time text or an engine fault; never a
    ///   partial result
    fn decrypt(&self, text: &str) -> Result<String>;
}

/// Factory function to create cipher strategies from configuration
///
/// # Arguments
/// * `spec` - Cipher configuration specifying the strategy and its secret material
///
/// # Returns
/// * Boxed trait object implementing the [`Cipher`] trait
///
/// # Examples
/// ```
/// use textcipher::cipher::{new_cipher, CipherSpec};
/// let spec = CipherSpec::Caesar { rotations: 13, input_mode: 0, output_mode: 0 };
/// let cipher = new_cipher(&spec).unwrap();
/// assert_eq!(cipher.encrypt("Hello").unwrap(), "Uryyb");
/// ```
pub fn new_cipher(spec: &CipherSpec) -> Result<Box<dyn Cipher>> {
    match spec {
        CipherSpec::Caesar {
            rotations,
            input_mode,
            output_mode,
        } => Ok(Box::new(CaesarCipher::from_codes(
            *input_mode,
            *output_mode,
            *rotations,
        )?)),
        CipherSpec::Vigenere {
            key,
            input_mode,
            output_mode,
        } => Ok(Box::new(VigenereCipher::from_codes(
            *input_mode,
            *output_mode,
            key,
        )?)),
        CipherSpec::Aes {
            key,
            iv,
            input_mode,
            output_mode,
        } => {
            let key = encoding::base64_decode_bytes(key)
                .map_err(|_| CipherError::Argument("AES key must be valid base64".to_string()))?;
            let iv = encoding::base64_decode_bytes(iv)
                .map_err(|_| CipherError::Argument("AES IV must be valid base64".to_string()))?;
            Ok(Box::new(AesCipher::from_codes(
                *input_mode,
                *output_mode,
                &key,
                &iv,
            )?))
        }
    }
}

/// Cipher strategy configuration enum
///
/// Defines the available cipher strategies and their parameters.
/// Serialized to lowercase format for TOML/JSON compatibility; input and
/// output modes default to 0 (plaintext) when omitted.
///
/// # Variants
/// * `Caesar` - fixed rotation over letters
/// * `Vigenere` - alphabetic keyword, cycled across the text
/// * `Aes` - base64-encoded key (16/24/32 bytes) and IV (16 bytes)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherSpec {
    /// Caesar rotation cipher
    Caesar {
        rotations: i32,
        #[serde(default)]
        input_mode: i32,
        #[serde(default)]
        output_mode: i32,
    },

    /// Vigenere running-key cipher
    /// Parameter: alphabetic keyword ([a-zA-Z]+)
    Vigenere {
        key: String,
        #[serde(default)]
        input_mode: i32,
        #[serde(default)]
        output_mode: i32,
    },

    /// AES-CBC with PKCS#7 padding
    /// Parameters: key and IV as base64 strings
    Aes {
        key: String,
        iv: String,
        #[serde(default)]
        input_mode: i32,
        #[serde(default)]
        output_mode: i32,
    },
}

/// Text representation modes shared by every cipher strategy
///
/// Governs how raw caller text is converted to and from the text a cipher
/// operates on. Any integer outside {0, 1, 2} is rejected at the boundary
/// by [`Mode::from_code`], never silently coerced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Text is used as-is (code 0)
    #[default]
    Plaintext,
    /// Text is Base64 with the standard alphabet and padding (code 1)
    Base64,
    /// Text is lowercase hexadecimal, two digits per character (code 2)
    Hex,
}

impl Mode {
    /// Converts an integer code to a mode.
    ///
    /// # Returns
    /// * `Ok(Mode)` for 0, 1 or 2
    /// * `Err(CipherError::Argument)` naming the valid set otherwise
    pub fn from_code(code: i32) -> Result<Mode> {
        match code {
            0 => Ok(Mode::Plaintext),
            1 => Ok(Mode::Base64),
            2 => Ok(Mode::Hex),
            _ => Err(CipherError::Argument(format!(
                "invalid mode {}: valid modes are 0 = plaintext, 1 = base64, 2 = hex",
                code
            ))),
        }
    }

    /// Returns the integer code of this mode.
    pub fn code(self) -> i32 {
        match self {
            Mode::Plaintext => 0,
            Mode::Base64 => 1,
            Mode::Hex => 2,
        }
    }

    /// Returns the lowercase name of this mode.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Plaintext => "plaintext",
            Mode::Base64 => "base64",
            Mode::Hex => "hex",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        self.name().fmt(fmt)
    }
}

/// Maps a mode name to its integer code.
///
/// Case-insensitive. Unknown names map to the sentinel value `-1`, which
/// every constructor rejects when passed as a mode code. This is the
/// mapping consumed by the CLI and other external collaborators.
pub fn mode_code(name: &str) -> i32 {
    match name.to_ascii_lowercase().as_str() {
        "plaintext" => 0,
        "base64" => 1,
        "hex" => 2,
        _ => -1,
    }
}

/// Input/output mode pair shared by every cipher strategy
///
/// Holds a validated `(input mode, output mode)` pair and performs the
/// decode-before-cipher and encode-after-cipher steps. A config can only be
/// changed through [`CipherConfig::set_all`], which validates both values
/// before committing either.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CipherConfig {
    input_mode: Mode,
    output_mode: Mode,
}

impl CipherConfig {
    /// Creates a config from already-validated modes.
    pub fn new(input_mode: Mode, output_mode: Mode) -> Self {
        CipherConfig {
            input_mode,
            output_mode,
        }
    }

    /// Creates a config from integer mode codes.
    ///
    /// # Returns
    /// * `Err(CipherError::Argument)` if either code is outside {0, 1, 2};
    ///   the message names the valid set
    pub fn from_codes(input_code: i32, output_code: i32) -> Result<Self> {
        Ok(CipherConfig {
            input_mode: Mode::from_code(input_code)?,
            output_mode: Mode::from_code(output_code)?,
        })
    }

    /// Sets both modes from integer codes, all-or-nothing.
    ///
    /// Both codes are validated before either is applied: if one is
    /// invalid, the config is left exactly as it was.
    pub fn set_all(&mut self, input_code: i32, output_code: i32) -> Result<()> {
        let input_mode = Mode::from_code(input_code)?;
        let output_mode = Mode::from_code(output_code)?;
        self.input_mode = input_mode;
        self.output_mode = output_mode;
        Ok(())
    }

    /// Returns the input mode.
    pub fn input_mode(&self) -> Mode {
        self.input_mode
    }

    /// Returns the output mode.
    pub fn output_mode(&self) -> Mode {
        self.output_mode
    }

    /// Decodes caller text according to the input mode.
    ///
    /// Plaintext is identity; Base64 and hex decode through the text codecs
    /// and surface their `Argument` errors unchanged.
    pub fn decode_input(&self, input: &str) -> Result<String> {
        match self.input_mode {
            Mode::Plaintext => Ok(input.to_string()),
            Mode::Base64 => encoding::base64_decode(input),
            Mode::Hex => encoding::hex_decode(input),
        }
    }

    /// Encodes cipher output according to the output mode.
    ///
    /// Encoding directions cannot fail, so this is infallible.
    pub fn encode_output(&self, output: &str) -> String {
        match self.output_mode {
            Mode::Plaintext => output.to_string(),
            Mode::Base64 => encoding::base64_encode(output),
            Mode::Hex => encoding::hex_encode(output),
        }
    }
}

impl Display for CipherConfig {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "mode: {} -> {}", self.input_mode, self.output_mode)
    }
}
