//! Pluggable text-encryption toolkit
//!
//! A common input/output mode contract (plaintext, Base64, hex) layered
//! over three interchangeable cipher strategies: Caesar rotation, Vigenere
//! running-key, and AES-CBC. Teaching-grade; not a general-purpose
//! cryptographic library.

pub mod cipher;
pub mod encoding;
pub mod errors;

pub use cipher::aes::AesCipher;
pub use cipher::caesar::CaesarCipher;
pub use cipher::vigenere::VigenereCipher;
pub use cipher::{Cipher, CipherConfig, CipherSpec, Mode, mode_code, new_cipher};
pub use errors::{CipherError, Result};
