//! Text codecs shared by all cipher strategies
//!
//! Stateless conversions between raw text and its Base64 / hexadecimal
//! representations. The cipher strategies never call the `base64` crate
//! directly for mode handling; they go through these functions so that
//! malformed input is always reported the same way.
//!
//! The hex codec is code-point-wise, not byte-wise: each character's numeric
//! code point is rendered as lowercase hex digits with no separators and no
//! zero padding. Only characters in U+0000..U+00FF round-trip through
//! [`hex_decode`], which walks the string in two-digit groups.

use crate::errors::{CipherError, Result};
use base64::{Engine as _, engine::general_purpose};

/// Encodes the given message to Base64 using the standard alphabet with padding.
pub fn base64_encode(message: &str) -> String {
    general_purpose::STANDARD.encode(message.as_bytes())
}

/// Decodes a Base64-encoded message back to text.
///
/// # Returns
/// * `Ok(String)` with the decoded text
/// * `Err(CipherError::Argument)` on non-alphabet characters, incorrect
///   padding, or decoded bytes that are not valid UTF-8
pub fn base64_decode(encoded: &str) -> Result<String> {
    let bytes = general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| CipherError::Argument(format!("invalid base64 input: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|_| CipherError::Argument("base64 input does not decode to valid text".to_string()))
}

/// Encodes raw bytes to Base64, for binary material such as keys and IVs.
pub fn base64_encode_bytes(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decodes Base64 to raw bytes, for binary material such as keys and IVs.
pub fn base64_decode_bytes(encoded: &str) -> Result<Vec<u8>> {
    general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| CipherError::Argument(format!("invalid base64 input: {}", e)))
}

/// Encodes each character's code point as lowercase hexadecimal digits.
///
/// No separators, no zero padding: `'h'` becomes `"68"`, a tab becomes `"9"`.
/// Characters above U+00FF emit more than two digits and will not survive a
/// round trip through [`hex_decode`].
pub fn hex_encode(message: &str) -> String {
    let mut out = String::with_capacity(message.len() * 2);
    for c in message.chars() {
        out.push_str(&format!("{:x}", c as u32));
    }
    out
}

/// Decodes a hexadecimal-encoded message, two digits per character.
///
/// # Returns
/// * `Ok(String)` with one character per two-digit group
/// * `Err(CipherError::Argument)` if the length is odd or a group is not
///   valid base-16
pub fn hex_decode(encoded: &str) -> Result<String> {
    let digits: Vec<char> = encoded.chars().collect();
    if digits.len() % 2 != 0 {
        return Err(CipherError::Argument(
            "hexadecimal string length must be even".to_string(),
        ));
    }

    let mut result = String::with_capacity(digits.len() / 2);
    for pair in digits.chunks(2) {
        let group: String = pair.iter().collect();
        let value = u32::from_str_radix(&group, 16).map_err(|_| {
            CipherError::Argument(format!("invalid hexadecimal character: {}", group))
        })?;
        // Two hex digits stay below 0x100, always a valid scalar value.
        let c = char::from_u32(value).ok_or_else(|| {
            CipherError::Argument(format!("invalid hexadecimal character: {}", group))
        })?;
        result.push(c);
    }
    Ok(result)
}
