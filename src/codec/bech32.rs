//! Bit regrouping and the segmented-word encoding built on it.
//!
//! This is the simplified variant used by the documentation: bytes are
//! regrouped into 5-bit words and mapped to the Bech32 alphabet, with no
//! checksum appended.

use super::FormatError;

/// The 32-symbol alphabet for 5-bit words.
pub const ALPHABET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Separates the human-readable prefix from the data words.
pub const SEPARATOR: char = '1';

/// What [`convert_bits`] does with bits left over after the last full word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// Shift leftover bits up with zeros to fill one final word.
    Padded,

    /// Reject leftover bits unless they are fewer than one input word and all
    /// zero.
    Strict,
}

/// Repacks `from_bits`-wide words into `to_bits`-wide words, most significant
/// bit first.
///
/// # Examples
///
/// ```
/// use baidkit::codec::bech32::{convert_bits, Padding};
///
/// assert_eq!(convert_bits(&[0xff], 8, 5, Padding::Padded).unwrap(), vec![31, 28]);
/// assert_eq!(convert_bits(&[31, 28], 5, 8, Padding::Strict).unwrap(), vec![0xff]);
/// ```
///
/// # Errors
///
/// - [`FormatError::BitWidth`] if either width is outside `1..=8`.
/// - [`FormatError::ValueOutOfRange`] if an input word is wider than
///   `from_bits`.
/// - [`FormatError::IllegalPadding`] in [`Padding::Strict`] mode, if the
///   leftover bits are a whole input word or more, or are not all zero.
pub fn convert_bits(
    data: &[u8],
    from_bits: u32,
    to_bits: u32,
    padding: Padding,
) -> Result<Vec<u8>, FormatError> {
    for width in [from_bits, to_bits] {
        if !(1..=8).contains(&width) {
            return Err(FormatError::BitWidth(width));
        }
    }
    if let Some(&value) = data.iter().find(|&&value| u32::from(value) >> from_bits != 0) {
        return Err(FormatError::ValueOutOfRange {
            value,
            bits: from_bits,
        });
    }

    let mut regrouped = regroup(data, from_bits, to_bits);
    match padding {
        Padding::Padded => {
            if let Some(word) = regrouped.padding_word() {
                regrouped.words.push(word);
            }
        }
        Padding::Strict => {
            if regrouped.bits >= from_bits || regrouped.padding_word().is_some_and(|w| w != 0) {
                return Err(FormatError::IllegalPadding);
            }
        }
    }
    Ok(regrouped.words)
}

struct Regrouped {
    words: Vec<u8>,
    accumulator: u32,
    bits: u32,
    to_bits: u32,
}

impl Regrouped {
    /// The leftover bits shifted up into one final word, if there are any.
    #[allow(clippy::cast_possible_truncation)]
    fn padding_word(&self) -> Option<u8> {
        (self.bits > 0).then(|| {
            let max_value: u32 = (1 << self.to_bits) - 1;
            ((self.accumulator << (self.to_bits - self.bits)) & max_value) as u8
        })
    }
}

/// Widths must be in `1..=8` and every value must fit in `from_bits`.
#[allow(clippy::cast_possible_truncation)]
fn regroup(data: &[u8], from_bits: u32, to_bits: u32) -> Regrouped {
    let max_value: u32 = (1 << to_bits) - 1;
    let max_accumulator: u32 = (1 << (from_bits + to_bits - 1)) - 1;
    let mut accumulator: u32 = 0;
    let mut bits: u32 = 0;
    let mut words = Vec::with_capacity(data.len() * 8 / 5 + 1);

    for &value in data {
        accumulator = ((accumulator << from_bits) | u32::from(value)) & max_accumulator;
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            // masked below 256
            words.push(((accumulator >> bits) & max_value) as u8);
        }
    }

    Regrouped {
        words,
        accumulator,
        bits,
        to_bits,
    }
}

/// Encodes bytes as `prefix`, the separator `1`, and 5-bit words.
///
/// No checksum is appended.
///
/// # Examples
///
/// ```
/// assert_eq!(baidkit::codec::bech32::encode("bc", &[0xff]), "bc1lu");
/// ```
#[must_use]
pub fn encode(prefix: &str, bytes: &[u8]) -> String {
    let mut regrouped = regroup(bytes, 8, 5);
    if let Some(word) = regrouped.padding_word() {
        regrouped.words.push(word);
    }
    let words = regrouped.words;

    let mut text = String::with_capacity(prefix.len() + 1 + words.len());
    text.push_str(prefix);
    text.push(SEPARATOR);
    text.extend(
        words
            .iter()
            .map(|&word| char::from(ALPHABET[usize::from(word)])),
    );
    text
}

/// Splits text produced by [`encode`] back into its prefix and bytes.
///
/// The prefix is everything before the last `1`. No checksum is verified.
///
/// # Errors
///
/// Returns [`FormatError::MissingSeparator`] if there is no `1`,
/// [`FormatError::InvalidCharacter`] for a data character outside
/// [`ALPHABET`], and [`FormatError::IllegalPadding`] if the words do not end
/// on a byte boundary with zero padding.
pub fn decode(text: &str) -> Result<(String, Vec<u8>), FormatError> {
    let (prefix, data) = text
        .rsplit_once(SEPARATOR)
        .ok_or_else(|| FormatError::MissingSeparator(text.to_string()))?;

    let offset = prefix.chars().count() + 1;
    let words = data
        .chars()
        .enumerate()
        .map(|(index, character)| {
            word_value(character)
                .ok_or_else(|| FormatError::invalid_character("bech32", character, offset + index))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let bytes = convert_bits(&words, 5, 8, Padding::Strict)?;
    Ok((prefix.to_string(), bytes))
}

fn word_value(character: char) -> Option<u8> {
    ALPHABET
        .iter()
        .position(|&symbol| char::from(symbol) == character)
        .and_then(|index| u8::try_from(index).ok())
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(&[0xff], 8, 5, &[31, 28]; "byte to words")]
    #[test_case(&[0x00], 8, 5, &[0, 0]; "zero byte")]
    #[test_case(&[0xff, 0xff], 8, 5, &[31, 31, 31, 16]; "two bytes")]
    #[test_case(&[0b1010_1010], 8, 1, &[1, 0, 1, 0, 1, 0, 1, 0]; "to single bits")]
    #[test_case(&[], 8, 5, &[]; "empty")]
    fn padded_regrouping(data: &[u8], from_bits: u32, to_bits: u32, expected: &[u8]) {
        assert_eq!(
            convert_bits(data, from_bits, to_bits, Padding::Padded).unwrap(),
            expected
        );
    }

    #[test]
    fn strict_accepts_zero_padding() {
        assert_eq!(
            convert_bits(&[31, 28], 5, 8, Padding::Strict).unwrap(),
            vec![0xff]
        );
        assert_eq!(
            convert_bits(&[31, 31, 31, 16], 5, 8, Padding::Strict).unwrap(),
            vec![0xff, 0xff]
        );
    }

    #[test_case(&[31, 29], 5, 8; "non-zero padding bits")]
    #[test_case(&[0xff], 8, 5; "non-zero leftover")]
    #[test_case(&[0, 0, 0], 5, 8; "leftover of a whole word")]
    fn strict_rejects_leftover(data: &[u8], from_bits: u32, to_bits: u32) {
        assert_eq!(
            convert_bits(data, from_bits, to_bits, Padding::Strict),
            Err(FormatError::IllegalPadding)
        );
    }

    #[test]
    fn rejects_wide_values() {
        assert_eq!(
            convert_bits(&[1, 32], 5, 8, Padding::Padded),
            Err(FormatError::ValueOutOfRange { value: 32, bits: 5 })
        );
    }

    #[test_case(0, 5; "zero source width")]
    #[test_case(8, 9; "wide target width")]
    fn rejects_bit_widths(from_bits: u32, to_bits: u32) {
        assert!(matches!(
            convert_bits(&[1], from_bits, to_bits, Padding::Padded),
            Err(FormatError::BitWidth(_))
        ));
    }

    #[test_case("bc", &[0x00], "bc1qq"; "zero byte")]
    #[test_case("bc", &[0xff], "bc1lu"; "full byte")]
    #[test_case("rgb", &[], "rgb1"; "empty data")]
    fn encode_vectors(prefix: &str, bytes: &[u8], expected: &str) {
        assert_eq!(encode(prefix, bytes), expected);
    }

    #[test]
    fn decode_inverts_encode() {
        let samples: [&[u8]; 4] = [&[], &[0], &[1, 2, 3, 4, 5], &[0xaa; 33]];
        for bytes in samples {
            let (prefix, decoded) = decode(&encode("tb", bytes)).unwrap();
            assert_eq!(prefix, "tb");
            assert_eq!(decoded, bytes);
        }
    }

    #[test]
    fn decode_splits_at_last_separator() {
        let (prefix, bytes) = decode("a1b1lu").unwrap();
        assert_eq!(prefix, "a1b");
        assert_eq!(bytes, vec![0xff]);
    }

    #[test]
    fn decode_rejects_malformed_text() {
        assert_eq!(
            decode("nosep"),
            Err(FormatError::MissingSeparator("nosep".to_string()))
        );
        assert_eq!(
            decode("bc1qb"),
            Err(FormatError::invalid_character("bech32", 'b', 4))
        );
    }
}
