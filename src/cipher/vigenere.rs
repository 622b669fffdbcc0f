//! Vigenere running-key cipher
//!
//! A polyalphabetic cipher driven by a repeating alphabetic keyword. Each
//! letter of the text is rotated by an amount derived from the next keyword
//! letter; non-alphabetic characters pass through and do not consume a
//! keyword position. Single-character work is delegated to the Caesar
//! shift logic.

use crate::cipher::caesar::CaesarCipher;
use crate::cipher::{Cipher, CipherConfig};
use crate::errors::{CipherError, Result};
use std::fmt;
use std::fmt::Display;

/// Keyword used when none is given.
pub const DEFAULT_KEY: &str = "password";

/// Vigenere running-key cipher
///
/// Only the keyword is durable state. The effective key that spans a text
/// (with pass-through sentinels at non-alphabetic positions) is rebuilt
/// locally on every call, so `encrypt`/`decrypt` never mutate the cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereCipher {
    config: CipherConfig,
    key: String,
}

impl VigenereCipher {
    /// Creates a Vigenere cipher with the given config and keyword.
    ///
    /// # Returns
    /// * `Err(CipherError::Argument)` if the keyword is empty or contains
    ///   anything outside a-z / A-Z
    pub fn new(config: CipherConfig, key: &str) -> Result<Self> {
        VigenereCipher::validate_key(key)?;
        Ok(VigenereCipher {
            config,
            key: key.to_string(),
        })
    }

    /// Creates a Vigenere cipher with the given keyword and a
    /// plaintext-to-plaintext config.
    pub fn with_key(key: &str) -> Result<Self> {
        VigenereCipher::new(CipherConfig::default(), key)
    }

    /// Creates a Vigenere cipher from integer mode codes.
    pub fn from_codes(input_code: i32, output_code: i32, key: &str) -> Result<Self> {
        VigenereCipher::new(CipherConfig::from_codes(input_code, output_code)?, key)
    }

    /// Replaces the keyword, re-validating it.
    pub fn set_key(&mut self, key: &str) -> Result<()> {
        VigenereCipher::validate_key(key)?;
        self.key = key.to_string();
        Ok(())
    }

    /// Returns the keyword.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the shared input/output mode config.
    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    fn validate_key(key: &str) -> Result<()> {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CipherError::Argument(
                "key must only contain alphabetical characters".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds the effective key for one text: one entry per character,
    /// `None` marking pass-through positions. The keyword only advances on
    /// alphabetic characters.
    fn running_key(&self, text: &str) -> Vec<Option<char>> {
        let key_chars: Vec<char> = self.key.chars().collect();
        let mut j = 0;
        text.chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    let k = key_chars[j % key_chars.len()];
                    j += 1;
                    Some(k)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Rotation amount for a keyword character: 'a'/'A'-relative, 0-25.
    /// The keyword character's case never affects output case.
    fn rotation_from_char(key_char: char) -> u8 {
        if key_char.is_ascii_lowercase() {
            key_char as u8 - b'a'
        } else {
            key_char as u8 - b'A'
        }
    }

    fn transform(&self, text: &str, decrypting: bool) -> Result<String> {
        let text = self.config.decode_input(text)?;
        let running_key = self.running_key(&text);

        let mut result = String::with_capacity(text.len());
        for (c, key_char) in text.chars().zip(running_key) {
            match key_char {
                None => result.push(c),
                Some(k) => {
                    let rotation = VigenereCipher::rotation_from_char(k);
                    if decrypting {
                        result.push(CaesarCipher::unshift_char(c, rotation));
                    } else {
                        result.push(CaesarCipher::shift_char(c, rotation));
                    }
                }
            }
        }
        Ok(self.config.encode_output(&result))
    }
}

impl Default for VigenereCipher {
    fn default() -> Self {
        VigenereCipher {
            config: CipherConfig::default(),
            key: DEFAULT_KEY.to_string(),
        }
    }
}

impl Cipher for VigenereCipher {
    fn encrypt(&self, text: &str) -> Result<String> {
        self.transform(text, false)
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        self.transform(text, true)
    }
}

impl Display for VigenereCipher {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "vigenere cipher ({}, key: {})", self.config, self.key)
    }
}
