//! Text decoding for files read by a host.
//!
//! A byte-order mark wins, valid UTF-8 is taken as is, and anything else is
//! guessed with `chardet`. Unknown guesses fall back to Windows-1252, which
//! decodes every byte.

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

/// Decoded file contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    /// Text with any byte-order mark removed
    pub text: String,
    /// Name of the encoding used (WHATWG name, e.g. `UTF-8`)
    pub encoding: &'static str,
}

/// Detect the encoding of raw bytes.
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }

    let charset = chardet::detect(bytes).0;
    Encoding::for_label(charset.trim().as_bytes()).unwrap_or(WINDOWS_1252)
}

/// Decode raw bytes to text using the detected encoding.
///
/// Never fails: undecodable sequences become U+FFFD.
pub fn decode_text(bytes: &[u8]) -> DecodedText {
    let encoding = detect_encoding(bytes);
    let (text, used, _) = encoding.decode(bytes);

    DecodedText {
        text: text.into_owned(),
        encoding: used.name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8() {
        let decoded = decode_text("name,ville\nZoé,Orléans\n".as_bytes());

        assert_eq!(decoded.encoding, "UTF-8");
        assert_eq!(decoded.text, "name,ville\nZoé,Orléans\n");
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let decoded = decode_text(b"\xEF\xBB\xBFa,b\n1,2");

        assert_eq!(decoded.encoding, "UTF-8");
        assert_eq!(decoded.text, "a,b\n1,2");
    }

    #[test]
    fn test_utf16_bom() {
        let decoded = decode_text(&[0xFF, 0xFE, b'a', 0x00, b',', 0x00, b'b', 0x00]);

        assert_eq!(decoded.encoding, "UTF-16LE");
        assert_eq!(decoded.text, "a,b");
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_text(bytes);

        assert!(decoded.text.starts_with("Soci"));
    }

    #[test]
    fn test_empty_input() {
        let decoded = decode_text(b"");

        assert_eq!(decoded.encoding, "UTF-8");
        assert!(decoded.text.is_empty());
    }
}
