//! Conversion between raw bytes and hexadecimal text.

use super::FormatError;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Encodes bytes as lowercase hex, two digits per byte, with no separators.
///
/// # Examples
///
/// ```
/// assert_eq!(baidkit::codec::hex::encode(&[0x05, 0xab]), "05ab");
/// ```
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        text.push(char::from(DIGITS[usize::from(byte >> 4)]));
        text.push(char::from(DIGITS[usize::from(byte & 0x0f)]));
    }
    text
}

/// Decodes hex text into bytes.
///
/// A leading `0x` or `0X` is accepted and whitespace anywhere in the text is
/// ignored. Digits may be upper or lower case.
///
/// # Errors
///
/// Returns [`FormatError::InvalidCharacter`] for a character outside
/// `[0-9a-fA-F]` (positions are counted from the first non-whitespace
/// character after any `0x` prefix), and
/// [`FormatError::OddLength`] if the number of digits is odd.
pub fn decode(text: &str) -> Result<Vec<u8>, FormatError> {
    let text = text.trim();
    let body = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    let mut nibbles = Vec::with_capacity(body.len());
    for (position, character) in body.chars().enumerate() {
        if character.is_whitespace() {
            continue;
        }
        let value = u8::try_from(character)
            .ok()
            .and_then(nibble)
            .ok_or_else(|| FormatError::invalid_character("hex", character, position))?;
        nibbles.push(value);
    }

    if nibbles.len() % 2 != 0 {
        return Err(FormatError::OddLength(nibbles.len()));
    }

    Ok(nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

const fn nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(&[], ""; "empty")]
    #[test_case(&[5], "05"; "zero padded")]
    #[test_case(&[0x00, 0xff, 0x10], "00ff10"; "mixed")]
    #[test_case(&[0xde, 0xad, 0xbe, 0xef], "deadbeef"; "lowercase")]
    fn encode_vectors(bytes: &[u8], expected: &str) {
        assert_eq!(encode(bytes), expected);
        assert_eq!(encode(bytes).len(), bytes.len() * 2);
    }

    #[test_case("deadbeef", &[0xde, 0xad, 0xbe, 0xef]; "lowercase")]
    #[test_case("DEADBEEF", &[0xde, 0xad, 0xbe, 0xef]; "uppercase")]
    #[test_case("0xDeAd", &[0xde, 0xad]; "prefixed mixed case")]
    #[test_case("0X01", &[0x01]; "uppercase prefix")]
    #[test_case("de ad\n be\tef", &[0xde, 0xad, 0xbe, 0xef]; "internal whitespace")]
    #[test_case("", &[]; "empty")]
    #[test_case("0x", &[]; "bare prefix")]
    fn decode_vectors(text: &str, expected: &[u8]) {
        assert_eq!(decode(text).unwrap(), expected);
    }

    #[test]
    fn odd_length_fails() {
        assert_eq!(decode("abc"), Err(FormatError::OddLength(3)));
        assert_eq!(decode("0x1"), Err(FormatError::OddLength(1)));
    }

    #[test]
    fn invalid_character_fails() {
        assert_eq!(
            decode("0g"),
            Err(FormatError::invalid_character("hex", 'g', 1))
        );
        assert_eq!(
            decode("  0x0g"),
            Err(FormatError::invalid_character("hex", 'g', 1))
        );
        assert!(matches!(
            decode("ßß"),
            Err(FormatError::InvalidCharacter { character: 'ß', .. })
        ));
    }

    #[test]
    fn roundtrip() {
        let bytes: Vec<u8> = (0..=255).collect();
        assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
    }
}
