//! Byte → text decodings tried by the recovery scanner.
//!
//! PDFs interleave binary structure with text operands, and which decoding leaves the
//! most legible substrings depends on the producer. Each decoder is a plain function;
//! adding an encoding means adding an entry to `default_decoders`.

use encoding_rs::WINDOWS_1252;

/// One decode attempt. `None` means the encoding does not apply to this buffer.
#[derive(Clone, Copy)]
pub struct Decoder {
    pub name: &'static str,
    pub decode: fn(&[u8]) -> Option<String>,
}

impl std::fmt::Debug for Decoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decoder").field("name", &self.name).finish()
    }
}

/// UTF-8 first, then the two single-byte interpretations.
pub fn default_decoders() -> Vec<Decoder> {
    vec![
        Decoder {
            name: "utf-8",
            decode: decode_utf8_lossy,
        },
        Decoder {
            name: "binary",
            decode: decode_binary,
        },
        Decoder {
            name: "windows-1252",
            decode: decode_windows_1252,
        },
    ]
}

/// Invalid sequences become U+FFFD.
pub fn decode_utf8_lossy(bytes: &[u8]) -> Option<String> {
    Some(String::from_utf8_lossy(bytes).into_owned())
}

/// Every byte maps to the code point with the same value (ISO-8859-1).
pub fn decode_binary(bytes: &[u8]) -> Option<String> {
    Some(bytes.iter().map(|&b| b as char).collect())
}

/// WHATWG `latin1`, which differs from raw bytes in the 0x80..0x9F range.
pub fn decode_windows_1252(bytes: &[u8]) -> Option<String> {
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    Some(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_decoder_order() {
        let names: Vec<&str> = default_decoders().iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["utf-8", "binary", "windows-1252"]);
    }

    #[test]
    fn test_utf8_keeps_hebrew() {
        let text = decode_utf8_lossy("שלום (hi)".as_bytes()).unwrap();
        assert_eq!(text, "שלום (hi)");
    }

    #[test]
    fn test_utf8_replaces_invalid_bytes() {
        let text = decode_utf8_lossy(&[b'a', 0xFF, b'b']).unwrap();
        assert_eq!(text, "a\u{FFFD}b");
    }

    #[test]
    fn test_binary_is_one_char_per_byte() {
        let bytes = [b'(', 0x80, 0xE9, b')'];
        let text = decode_binary(&bytes).unwrap();
        assert_eq!(text.chars().count(), 4);
        assert_eq!(text.chars().nth(1), Some('\u{80}'));
        assert_eq!(text.chars().nth(2), Some('é'));
    }

    #[test]
    fn test_windows_1252_maps_c1_range() {
        // 0x80 is the euro sign in windows-1252, not U+0080.
        let text = decode_windows_1252(&[0x80]).unwrap();
        assert_eq!(text, "€");
    }
}
