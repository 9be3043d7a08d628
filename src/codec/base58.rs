//! Base58 encoding of big-endian byte strings.
//!
//! The input is treated as one unsigned big-endian integer and converted with
//! digit-wise long division, so buffers of any length are supported without a
//! big-integer type. Leading zero bytes are kept explicitly: each one becomes a
//! leading `'1'`, the zero symbol of the alphabet.

use std::iter;

use super::FormatError;

/// The 58-symbol alphabet, without `0`, `O`, `I` and `l`.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const RADIX: u16 = 58;

const INVALID: u8 = u8::MAX;

const DECODE_TABLE: [u8; 128] = decode_table();

#[allow(clippy::cast_possible_truncation)]
const fn decode_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut index = 0;
    while index < ALPHABET.len() {
        // index < 58
        table[ALPHABET[index] as usize] = index as u8;
        index += 1;
    }
    table
}

/// Encodes bytes as Base58 text.
///
/// The output is the unique minimal representation: one `'1'` per leading
/// zero byte followed by the base-58 digits of the remaining number. Empty
/// input encodes to the empty string.
///
/// # Examples
///
/// ```
/// use baidkit::codec::base58;
///
/// assert_eq!(base58::encode(b"Hello World!"), "2NEpo7TZRRrLZSi2U");
/// assert_eq!(base58::encode(&[0, 0, 1]), "112");
/// ```
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|&&byte| byte == 0).count();
    let mut number = bytes[zeros..].to_vec();

    // log(256) / log(58) is just under 1.37
    let mut digits = Vec::with_capacity(number.len() * 137 / 100 + 1);
    let mut start = 0;
    while start < number.len() {
        digits.push(divide(&mut number[start..]));
        while number.get(start) == Some(&0) {
            start += 1;
        }
    }
    while digits.last() == Some(&0) {
        digits.pop();
    }

    let mut text = String::with_capacity(zeros + digits.len());
    text.extend(iter::repeat_n('1', zeros));
    text.extend(
        digits
            .iter()
            .rev()
            .map(|&digit| char::from(ALPHABET[usize::from(digit)])),
    );
    text
}

/// Divides a big-endian number in place by 58, returning the remainder.
#[allow(clippy::cast_possible_truncation)]
fn divide(number: &mut [u8]) -> u8 {
    let mut remainder: u16 = 0;
    for byte in number {
        let accumulator = (remainder << 8) | u16::from(*byte);
        // remainder < 58, so the quotient always fits in a byte
        *byte = (accumulator / RADIX) as u8;
        remainder = accumulator % RADIX;
    }
    remainder as u8
}

/// Decodes Base58 text into bytes.
///
/// Every leading `'1'` becomes a leading zero byte. The empty string decodes
/// to an empty buffer.
///
/// # Errors
///
/// Returns [`FormatError::InvalidCharacter`] for any character outside
/// [`ALPHABET`].
#[allow(clippy::cast_possible_truncation)]
pub fn decode(text: &str) -> Result<Vec<u8>, FormatError> {
    // little-endian while accumulating
    let mut number: Vec<u8> = Vec::with_capacity(text.len());
    for (position, character) in text.chars().enumerate() {
        let digit = digit_value(character)
            .ok_or_else(|| FormatError::invalid_character("base58", character, position))?;

        let mut carry = u32::from(digit);
        for byte in &mut number {
            carry += u32::from(*byte) * u32::from(RADIX);
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            number.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }
    while number.last() == Some(&0) {
        number.pop();
    }

    let zeros = text.chars().take_while(|&character| character == '1').count();
    let mut bytes = vec![0; zeros];
    bytes.extend(number.iter().rev());
    Ok(bytes)
}

fn digit_value(character: char) -> Option<u8> {
    let byte = u8::try_from(character).ok()?;
    DECODE_TABLE
        .get(usize::from(byte))
        .copied()
        .filter(|&value| value != INVALID)
}
