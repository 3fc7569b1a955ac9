//! Identifier generation.
//!
//! Every document, slide, text element, group and playlist item in an export
//! carries a random version-4 token in the canonical 8-4-4-4-12 layout with
//! uppercase hex digits. Uniqueness rests on per-call randomness; there is no
//! registry.

use crate::common::hex::hex_encode_to_string;

/// Length of a formatted identifier.
pub const UUID_LEN: usize = 36;

/// Generate a random RFC4122 v4 GUID as raw 16 bytes
pub fn generate_guid_bytes() -> [u8; 16] {
    let mut bytes: [u8; 16] = rand::random();
    // RFC4122 v4
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    bytes
}

/// Generate a random identifier in the form `XXXXXXXX-XXXX-4XXX-YXXX-XXXXXXXXXXXX`,
/// where `Y` is one of `8`, `9`, `A`, `B`.
pub fn generate_uuid() -> String {
    format_guid(&generate_guid_bytes())
}

/// Format raw GUID bytes as `XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX`.
pub fn format_guid(bytes: &[u8; 16]) -> String {
    let mut out = String::with_capacity(UUID_LEN);
    hex_encode_to_string(&bytes[0..4], &mut out);
    out.push('-');
    hex_encode_to_string(&bytes[4..6], &mut out);
    out.push('-');
    hex_encode_to_string(&bytes[6..8], &mut out);
    out.push('-');
    hex_encode_to_string(&bytes[8..10], &mut out);
    out.push('-');
    hex_encode_to_string(&bytes[10..16], &mut out);
    out
}

/// Check that `s` has the layout produced by [`generate_uuid`].
pub fn is_valid_uuid(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != UUID_LEN {
        return false;
    }
    for (i, &b) in bytes.iter().enumerate() {
        match i {
            8 | 13 | 18 | 23 => {
                if b != b'-' {
                    return false;
                }
            },
            14 => {
                if b != b'4' {
                    return false;
                }
            },
            19 => {
                if !matches!(b, b'8' | b'9' | b'A' | b'B') {
                    return false;
                }
            },
            _ => {
                if !(b.is_ascii_digit() || (b'A'..=b'F').contains(&b)) {
                    return false;
                }
            },
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_uuid_format() {
        let s = generate_uuid();
        assert_eq!(s.len(), UUID_LEN);
        assert_eq!(&s[8..9], "-");
        assert_eq!(&s[13..14], "-");
        assert_eq!(&s[14..15], "4");
        assert_eq!(&s[18..19], "-");
        assert_eq!(&s[23..24], "-");
        assert!(is_valid_uuid(&s), "{s}");
    }

    #[test]
    fn test_format_guid_known_bytes() {
        let bytes = [
            0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0x4d, 0xef, 0x80, 0x01, 0x02, 0x03, 0x04, 0x05,
            0x06, 0x07,
        ];
        assert_eq!(format_guid(&bytes), "12345678-9ABC-4DEF-8001-020304050607");
    }

    #[test]
    fn test_uuids_are_unique_and_well_formed() {
        let mut seen = HashSet::with_capacity(10_000);
        for _ in 0..10_000 {
            let id = generate_uuid();
            assert!(is_valid_uuid(&id), "{id}");
            assert!(seen.insert(id), "duplicate identifier generated");
        }
    }

    #[test]
    fn test_is_valid_uuid_rejects_bad_layouts() {
        assert!(!is_valid_uuid(""));
        assert!(!is_valid_uuid("12345678-9abc-4def-8001-020304050607"));
        assert!(!is_valid_uuid("12345678-9ABC-5DEF-8001-020304050607"));
        assert!(!is_valid_uuid("12345678-9ABC-4DEF-C001-020304050607"));
        assert!(!is_valid_uuid("{12345678-9ABC-4DEF-8001-02030405060}"));
    }
}
