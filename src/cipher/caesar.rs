//! Caesar rotation cipher
//!
//! A classical fixed-shift substitution over letters. Uppercase and
//! lowercase letters are shifted within their own ranges; every other
//! character passes through unchanged.
//!
//! ⚠️ SECURITY WARNING: rotation ciphers are trivially breakable and exist
//! here for teaching purposes only.

use crate::cipher::{Cipher, CipherConfig};
use crate::errors::Result;
use std::fmt;
use std::fmt::Display;

/// Rotation used when none is given.
pub const DEFAULT_ROTATIONS: i32 = 13;

/// Caesar rotation cipher
///
/// Stores any signed rotation; the value is normalized into [0, 26) at use
/// time, so negative rotations and rotations past a full alphabet behave as
/// their wrapped equivalents. Rotation 0 and any multiple of 26 are the
/// identity for letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaesarCipher {
    config: CipherConfig,
    rotations: i32,
}

impl CaesarCipher {
    /// Creates a Caesar cipher with the given config and rotation.
    pub fn new(config: CipherConfig, rotations: i32) -> Self {
        CaesarCipher { config, rotations }
    }

    /// Creates a Caesar cipher with the given rotation and a
    /// plaintext-to-plaintext config.
    pub fn with_rotations(rotations: i32) -> Self {
        CaesarCipher::new(CipherConfig::default(), rotations)
    }

    /// Creates a Caesar cipher from integer mode codes.
    ///
    /// # Returns
    /// * `Err(CipherError::Argument)` if either code is outside {0, 1, 2}
    pub fn from_codes(input_code: i32, output_code: i32, rotations: i32) -> Result<Self> {
        Ok(CaesarCipher::new(
            CipherConfig::from_codes(input_code, output_code)?,
            rotations,
        ))
    }

    /// Sets the rotation. Any signed value is accepted; normalization
    /// happens at use time.
    pub fn set_rotations(&mut self, rotations: i32) {
        self.rotations = rotations;
    }

    /// Returns the stored (un-normalized) rotation.
    pub fn rotations(&self) -> i32 {
        self.rotations
    }

    /// Returns the shared input/output mode config.
    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// Sets both modes and the rotation in one call.
    ///
    /// The mode pair is validated all-or-nothing; the rotation is always
    /// applied since every signed value is valid.
    pub fn set_all(&mut self, input_code: i32, output_code: i32, rotations: i32) -> Result<()> {
        self.set_rotations(rotations);
        self.config.set_all(input_code, output_code)
    }

    /// Wraps a signed rotation into [0, 26).
    pub(crate) fn normalize(rotations: i32) -> u8 {
        (((rotations % 26) + 26) % 26) as u8
    }

    /// Shifts one character forward by `rotation` (already in [0, 26)).
    ///
    /// Uppercase letters stay in 'A'..='Z', lowercase in 'a'..='z',
    /// anything else passes through.
    pub(crate) fn shift_char(c: char, rotation: u8) -> char {
        if c.is_ascii_uppercase() {
            (((c as u8 - b'A' + rotation) % 26) + b'A') as char
        } else if c.is_ascii_lowercase() {
            (((c as u8 - b'a' + rotation) % 26) + b'a') as char
        } else {
            c
        }
    }

    /// Shifts one character backward by `rotation` (already in [0, 26)).
    pub(crate) fn unshift_char(c: char, rotation: u8) -> char {
        CaesarCipher::shift_char(c, (26 - rotation) % 26)
    }
}

impl Default for CaesarCipher {
    fn default() -> Self {
        CaesarCipher::with_rotations(DEFAULT_ROTATIONS)
    }
}

impl Cipher for CaesarCipher {
    fn encrypt(&self, text: &str) -> Result<String> {
        let plaintext = self.config.decode_input(text)?;
        let rotation = CaesarCipher::normalize(self.rotations);
        let ciphertext: String = plaintext
            .chars()
            .map(|c| CaesarCipher::shift_char(c, rotation))
            .collect();
        Ok(self.config.encode_output(&ciphertext))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        // Complementary rotation is a local value; the stored rotation is
        // never touched.
        let ciphertext = self.config.decode_input(text)?;
        let rotation = CaesarCipher::normalize(self.rotations);
        let plaintext: String = ciphertext
            .chars()
            .map(|c| CaesarCipher::unshift_char(c, rotation))
            .collect();
        Ok(self.config.encode_output(&plaintext))
    }
}

impl Display for CaesarCipher {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "caesar cipher ({}, shift: {})", self.config, self.rotations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::Mode;

    #[test]
    fn test_rot13_vectors() {
        let cipher = CaesarCipher::with_rotations(13);
        assert_eq!(cipher.encrypt("Hello, World!").unwrap(), "Uryyb, Jbeyq!");
        assert_eq!(cipher.decrypt("Uryyb, Jbeyq!").unwrap(), "Hello, World!");
    }

    #[test]
    fn test_round_trip_over_rotation_range() {
        for rotations in -100..=100 {
            let cipher = CaesarCipher::with_rotations(rotations);
            let ct = cipher.encrypt("TheQuickBrownFox").unwrap();
            assert_eq!(
                cipher.decrypt(&ct).unwrap(),
                "TheQuickBrownFox",
                "rotation {}",
                rotations
            );
        }
    }

    #[test]
    fn test_zero_and_full_rotation_are_identity() {
        for rotations in [0, 26, 52, -26] {
            let cipher = CaesarCipher::with_rotations(rotations);
            assert_eq!(cipher.encrypt("AbcXyz").unwrap(), "AbcXyz");
        }
    }

    #[test]
    fn test_negative_rotation_wraps() {
        let backward = CaesarCipher::with_rotations(-3);
        let forward = CaesarCipher::with_rotations(23);
        assert_eq!(
            backward.encrypt("Attack").unwrap(),
            forward.encrypt("Attack").unwrap()
        );
    }

    #[test]
    fn test_non_alphabetic_pass_through() {
        let cipher = CaesarCipher::with_rotations(7);
        assert_eq!(cipher.encrypt("123 !?").unwrap(), "123 !?");
        assert_eq!(cipher.decrypt("123 !?").unwrap(), "123 !?");
    }

    #[test]
    fn test_decrypt_does_not_mutate_rotation() {
        let cipher = CaesarCipher::with_rotations(13);
        cipher.decrypt("Uryyb").unwrap();
        assert_eq!(cipher.rotations(), 13);
    }

    #[test]
    fn test_modes_wrap_the_cipher() {
        let config = CipherConfig::new(Mode::Plaintext, Mode::Base64);
        let cipher = CaesarCipher::new(config, 13);
        let ct = cipher.encrypt("Hello").unwrap();
        assert_eq!(ct, "VXJ5eWI=");

        let back = CaesarCipher::new(CipherConfig::new(Mode::Base64, Mode::Plaintext), 13);
        assert_eq!(back.decrypt(&ct).unwrap(), "Hello");
    }

    #[test]
    fn test_set_all_keeps_modes_atomic() {
        let mut cipher = CaesarCipher::with_rotations(3);
        assert!(cipher.set_all(1, 9, 5).is_err());
        // Rotation applied, modes untouched.
        assert_eq!(cipher.rotations(), 5);
        assert_eq!(cipher.config().input_mode(), Mode::Plaintext);
    }

    #[test]
    fn test_equality_covers_rotation_and_config() {
        assert_eq!(CaesarCipher::with_rotations(13), CaesarCipher::default());
        assert_ne!(
            CaesarCipher::with_rotations(13),
            CaesarCipher::with_rotations(14)
        );
        assert_ne!(
            CaesarCipher::new(CipherConfig::new(Mode::Hex, Mode::Plaintext), 13),
            CaesarCipher::with_rotations(13)
        );
    }
}
