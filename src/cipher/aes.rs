//! AES-CBC cipher wrapper
//!
//! Wraps AES in cipher-block-chaining mode with PKCS#7 padding for
//! AES-128/192/256 keys. Because the block-cipher output is binary, the
//! ciphertext is always framed as Base64 text on the wire: `encrypt`
//! ignores the configured output mode and `decrypt` ignores the configured
//! input mode. This is an intentional exception to the generic mode
//! contract; `encrypt` still honors the input mode and `decrypt` still
//! honors the output mode.

use crate::cipher::{Cipher, CipherConfig};
use crate::encoding;
use crate::errors::{CipherError, Result};
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::{Aes128, Aes192, Aes256};
use rand::RngCore;
use std::fmt;
use std::fmt::Display;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes192CbcEnc = cbc::Encryptor<Aes192>;
type Aes192CbcDec = cbc::Decryptor<Aes192>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Valid AES key lengths in bytes (AES-128/192/256).
const VALID_KEY_LENGTHS: [usize; 3] = [16, 24, 32];

/// IV length in bytes (one AES block).
const IV_LENGTH: usize = 16;

/// AES-CBC cipher with PKCS#7 padding
///
/// Key and IV are validated at construction and on every setter call, so a
/// constructed instance always holds a 16/24/32-byte key and a 16-byte IV.
/// Secret material is not zeroized on drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AesCipher {
    config: CipherConfig,
    key: Vec<u8>,
    iv: [u8; IV_LENGTH],
}

impl AesCipher {
    /// Creates an AES cipher with the given config, key and IV.
    ///
    /// # Returns
    /// * `Err(CipherError::KeyLength)` if the key is not 16, 24 or 32 bytes
    /// * `Err(CipherError::Argument)` if the IV is not 16 bytes
    pub fn new(config: CipherConfig, key: &[u8], iv: &[u8]) -> Result<Self> {
        let mut cipher = AesCipher {
            config,
            key: Vec::new(),
            iv: [0u8; IV_LENGTH],
        };
        cipher.set_key(key)?;
        cipher.set_iv(iv)?;
        Ok(cipher)
    }

    /// Creates an AES cipher with the given key, a random IV, and a
    /// plaintext-to-plaintext config.
    pub fn with_key(key: &[u8]) -> Result<Self> {
        AesCipher::new(CipherConfig::default(), key, &AesCipher::generate_iv())
    }

    /// Creates an AES cipher from integer mode codes.
    pub fn from_codes(input_code: i32, output_code: i32, key: &[u8], iv: &[u8]) -> Result<Self> {
        AesCipher::new(CipherConfig::from_codes(input_code, output_code)?, key, iv)
    }

    /// Creates an AES cipher with a random 128-bit key and a random IV.
    pub fn new_random() -> Result<Self> {
        let key = AesCipher::generate_key(128)?;
        AesCipher::with_key(&key)
    }

    /// Replaces the key, re-validating its length.
    pub fn set_key(&mut self, key: &[u8]) -> Result<()> {
        if !VALID_KEY_LENGTHS.contains(&key.len()) {
            return Err(CipherError::KeyLength(key.len() * 8));
        }
        self.key = key.to_vec();
        Ok(())
    }

    /// Replaces the IV, re-validating its length.
    pub fn set_iv(&mut self, iv: &[u8]) -> Result<()> {
        if iv.len() != IV_LENGTH {
            return Err(CipherError::Argument(format!(
                "invalid IV length: {}; IV must be {} bytes long",
                iv.len(),
                IV_LENGTH
            )));
        }
        self.iv.copy_from_slice(iv);
        Ok(())
    }

    /// Returns the key bytes.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Returns the IV bytes.
    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    /// Returns the shared input/output mode config.
    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// Generates a cryptographically random key of the requested bit length.
    ///
    /// # Returns
    /// * `Err(CipherError::KeyLength)` for anything but 128, 192 or 256
    pub fn generate_key(bits: usize) -> Result<Vec<u8>> {
        if !VALID_KEY_LENGTHS.contains(&(bits / 8)) || bits % 8 != 0 {
            return Err(CipherError::KeyLength(bits));
        }
        let mut key = vec![0u8; bits / 8];
        rand::rng().fill_bytes(&mut key);
        Ok(key)
    }

    /// Generates a cryptographically random 16-byte IV.
    pub fn generate_iv() -> [u8; IV_LENGTH] {
        let mut iv = [0u8; IV_LENGTH];
        rand::rng().fill_bytes(&mut iv);
        iv
    }

    fn encrypt_bytes(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let engine = |_| CipherError::Engine("encryption failed".to_string());
        let ciphertext = match self.key.len() {
            16 => Aes128CbcEnc::new_from_slices(&self.key, &self.iv)
                .map_err(engine)?
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
            24 => Aes192CbcEnc::new_from_slices(&self.key, &self.iv)
                .map_err(engine)?
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
            32 => Aes256CbcEnc::new_from_slices(&self.key, &self.iv)
                .map_err(engine)?
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
            len => return Err(CipherError::KeyLength(len * 8)),
        };
        Ok(ciphertext)
    }

    fn decrypt_bytes(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let engine = |_| CipherError::Engine("decryption failed".to_string());
        let plaintext = match self.key.len() {
            16 => Aes128CbcDec::new_from_slices(&self.key, &self.iv)
                .map_err(engine)?
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
            24 => Aes192CbcDec::new_from_slices(&self.key, &self.iv)
                .map_err(engine)?
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
            32 => Aes256CbcDec::new_from_slices(&self.key, &self.iv)
                .map_err(engine)?
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
            len => return Err(CipherError::KeyLength(len * 8)),
        };
        plaintext.map_err(|_| {
            tracing::error!("AES-CBC decryption failed: bad padding or corrupt ciphertext");
            CipherError::Engine("decryption failed".to_string())
        })
    }
}

impl Cipher for AesCipher {
    fn encrypt(&self, text: &str) -> Result<String> {
        let plaintext = self.config.decode_input(text)?;
        let ciphertext = self.encrypt_bytes(plaintext.as_bytes())?;
        // Always Base64-framed: the output mode is bypassed for binary
        // ciphertext.
        Ok(encoding::base64_encode_bytes(&ciphertext))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        // Input is always Base64-framed ciphertext; the input mode is
        // bypassed on this path.
        let ciphertext = encoding::base64_decode_bytes(text)?;
        let plaintext = self.decrypt_bytes(&ciphertext)?;
        let plaintext = String::from_utf8(plaintext)
            .map_err(|_| CipherError::Engine("decryption failed".to_string()))?;
        Ok(self.config.encode_output(&plaintext))
    }
}

impl Display for AesCipher {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "aes cipher ({}, key: {} bits, iv: {} bytes)",
            self.config,
            self.key.len() * 8,
            self.iv.len()
        )
    }
}
