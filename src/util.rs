//! Utility functions.

use std::borrow::Cow;

/// Decode bytes to a string, handling various encodings.
///
/// Tries UTF-8 first (BOM handled automatically by encoding_rs), then falls
/// back to Windows-1252, which is common in content exported from older
/// authoring tools. Uses `Cow<str>` to avoid allocation when the input is
/// already valid UTF-8.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_utf8() {
        assert_eq!(decode_text("héllo".as_bytes()), "héllo");
    }

    #[test]
    fn test_decode_windows_1252_fallback() {
        // 0xE9 is 'é' in Windows-1252 but malformed as UTF-8.
        assert_eq!(decode_text(b"caf\xe9"), "café");
    }

    #[test]
    fn test_decode_strips_bom() {
        assert_eq!(decode_text(b"\xef\xbb\xbfhello"), "hello");
    }
}
