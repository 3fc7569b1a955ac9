//! Hexadecimal formatting for identifier bytes.

/// Lookup table for converting nibbles (0-15) to ASCII hex characters (0-9, A-F)
const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Append the uppercase hex form of `bytes` to `output`.
///
/// # Examples
///
/// ```
/// use pro6_export::common::hex::hex_encode_to_string;
///
/// let mut out = String::new();
/// hex_encode_to_string(b"\xDE\xAD\xBE\xEF", &mut out);
/// assert_eq!(out, "DEADBEEF");
/// ```
#[inline]
pub fn hex_encode_to_string(bytes: &[u8], output: &mut String) {
    output.reserve(bytes.len() * 2);
    for &byte in bytes {
        output.push(HEX_CHARS[(byte >> 4) as usize] as char);
        output.push(HEX_CHARS[(byte & 0x0F) as usize] as char);
    }
}
