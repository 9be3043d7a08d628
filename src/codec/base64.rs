//! Standard Base64 (RFC 4648) with `=` padding.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::FormatError;

/// The standard 64-symbol alphabet.
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const PAD: char = '=';

/// How strictly [`decode_with`] treats text that is not canonical Base64.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Drop every character outside the alphabet, including `=` and
    /// whitespace, and decode whatever remains.
    ///
    /// This accepts text pasted by hand with line breaks or missing padding.
    #[default]
    Permissive,

    /// Require complete 4-character blocks, padding only at the very end, and
    /// no characters outside the alphabet.
    Strict,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Permissive => f.write_str("permissive"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

/// Encodes bytes as padded Base64 text.
///
/// # Examples
///
/// ```
/// assert_eq!(baidkit::codec::base64::encode(b"foob"), "Zm9vYg==");
/// ```
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len().div_ceil(3) * 4);
    for block in bytes.chunks(3) {
        let b0 = block[0];
        let b1 = block.get(1).copied().unwrap_or(0);
        let b2 = block.get(2).copied().unwrap_or(0);

        text.push(symbol(b0 >> 2));
        text.push(symbol(((b0 & 0x03) << 4) | (b1 >> 4)));
        if block.len() > 1 {
            text.push(symbol(((b1 & 0x0f) << 2) | (b2 >> 6)));
        } else {
            text.push(PAD);
        }
        if block.len() > 2 {
            text.push(symbol(b2 & 0x3f));
        } else {
            text.push(PAD);
        }
    }
    text
}

fn symbol(sextet: u8) -> char {
    char::from(ALPHABET[usize::from(sextet & 0x3f)])
}

fn sextet(character: char) -> Option<u8> {
    let byte = u8::try_from(character).ok()?;
    match byte {
        b'A'..=b'Z' => Some(byte - b'A'),
        b'a'..=b'z' => Some(byte - b'a' + 26),
        b'0'..=b'9' => Some(byte - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

/// Decodes Base64 text in [`Mode::Permissive`] mode.
///
/// # Errors
///
/// Permissive decoding does not fail; the `Result` keeps the signature in
/// line with [`decode_with`].
pub fn decode(text: &str) -> Result<Vec<u8>, FormatError> {
    decode_with(text, Mode::Permissive)
}

/// Decodes Base64 text using the given [`Mode`].
///
/// # Errors
///
/// In [`Mode::Strict`], returns [`FormatError::InvalidCharacter`] for any
/// character outside the alphabet and [`FormatError::Padding`] for incomplete
/// blocks or misplaced padding.
pub fn decode_with(text: &str, mode: Mode) -> Result<Vec<u8>, FormatError> {
    let sextets = match mode {
        Mode::Permissive => text.chars().filter_map(sextet).collect(),
        Mode::Strict => strict_sextets(text)?,
    };
    Ok(pack(&sextets))
}

fn strict_sextets(text: &str) -> Result<Vec<u8>, FormatError> {
    let length = text.chars().count();
    if length % 4 != 0 {
        return Err(FormatError::Padding("text is not a whole number of 4-character blocks"));
    }

    let data = text.trim_end_matches(PAD);
    let padding = text.len() - data.len();
    if padding > 2 {
        return Err(FormatError::Padding("more than two '=' characters"));
    }

    let mut sextets = Vec::with_capacity(length);
    for (position, character) in data.chars().enumerate() {
        if character == PAD {
            return Err(FormatError::Padding("'=' before the end of the text"));
        }
        let value = sextet(character)
            .ok_or_else(|| FormatError::invalid_character("base64", character, position))?;
        sextets.push(value);
    }
    Ok(sextets)
}

/// Packs 6-bit groups into bytes, 4 groups per 3 bytes.
///
/// A final group of 2 or 3 sextets yields 1 or 2 bytes; a lone trailing sextet
/// carries fewer than 8 bits and is dropped.
fn pack(sextets: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(sextets.len() / 4 * 3 + 2);
    for block in sextets.chunks(4) {
        if block.len() < 2 {
            break;
        }
        bytes.push((block[0] << 2) | (block[1] >> 4));
        if let Some(&s2) = block.get(2) {
            bytes.push((block[1] << 4) | (s2 >> 2));
            if let Some(&s3) = block.get(3) {
                bytes.push((s2 << 6) | s3);
            }
        }
    }
    bytes
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(b"", ""; "empty")]
    #[test_case(b"f", "Zg=="; "one byte")]
    #[test_case(b"fo", "Zm8="; "two bytes")]
    #[test_case(b"foo", "Zm9v"; "three bytes")]
    #[test_case(b"foob", "Zm9vYg=="; "four bytes")]
    #[test_case(b"fooba", "Zm9vYmE="; "five bytes")]
    #[test_case(b"foobar", "Zm9vYmFy"; "six bytes")]
    fn rfc4648_vectors(bytes: &[u8], text: &str) {
        assert_eq!(encode(bytes), text);
        assert_eq!(decode(text).unwrap(), bytes);
        assert_eq!(decode_with(text, Mode::Strict).unwrap(), bytes);
    }

    #[test]
    fn full_alphabet_roundtrip() {
        let bytes: Vec<u8> = (0..=255).collect();
        let text = encode(&bytes);
        assert!(text.bytes().all(|b| ALPHABET.contains(&b) || b == b'='));
        assert_eq!(decode(&text).unwrap(), bytes);
        assert_eq!(decode_with(&text, Mode::Strict).unwrap(), bytes);
    }

    #[test_case("Zm9v\nYmFy", b"foobar"; "line break")]
    #[test_case(" Zm9v YmE= ", b"fooba"; "spaces")]
    #[test_case("Zm9vYg", b"foob"; "missing padding")]
    #[test_case("Zm9vYg=====", b"foob"; "excess padding")]
    #[test_case("Zm*9v", b"foo"; "garbage character")]
    #[test_case("Zm9vY", b"foo"; "dangling sextet")]
    fn permissive_tolerates_formatting(text: &str, expected: &[u8]) {
        assert_eq!(decode(text).unwrap(), expected);
    }

    #[test_case("Zm9vYg"; "missing padding")]
    #[test_case("Zm9vY"; "dangling sextet")]
    #[test_case("Zm9v===="; "four pads")]
    #[test_case("Zm=v"; "pad in middle")]
    fn strict_rejects_bad_padding(text: &str) {
        assert!(matches!(
            decode_with(text, Mode::Strict),
            Err(FormatError::Padding(_))
        ));
    }

    #[test]
    fn strict_rejects_garbage() {
        assert_eq!(
            decode_with("Zm9v Ym=", Mode::Strict),
            Err(FormatError::invalid_character("base64", ' ', 4))
        );
    }

    #[test]
    fn mode_defaults_to_permissive() {
        assert_eq!(Mode::default(), Mode::Permissive);
    }
}
