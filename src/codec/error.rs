/// Errors raised when input text or data does not match the expected format.
///
/// Every decoder in this crate reports malformed input through this one type.
/// Decoding either succeeds or fails deterministically; there is no partial
/// output.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FormatError {
    /// Hex text with an odd number of digits.
    #[error("Invalid hex length: expected an even number of digits, got {0}")]
    OddLength(usize),

    /// A character that is not part of the encoding's alphabet.
    #[error("Invalid {encoding} character {character:?} at position {position}")]
    InvalidCharacter {
        /// Name of the encoding being decoded.
        encoding: &'static str,
        /// The offending character.
        character: char,
        /// Character offset of the offending character.
        position: usize,
    },

    /// An identifier without the `<prefix>:` scheme.
    #[error("Invalid identifier '{0}': expected '<prefix>:<payload>'")]
    MalformedIdentifier(String),

    /// Non-zero or excess leftover bits when regrouping without padding.
    #[error("Invalid padding: leftover bits cannot be dropped without losing data")]
    IllegalPadding,

    /// An input word does not fit in the declared source bit width.
    #[error("Invalid value {value}: does not fit in {bits} bits")]
    ValueOutOfRange {
        /// The offending input word.
        value: u8,
        /// The declared bit width of input words.
        bits: u32,
    },

    /// A bit width outside the supported `1..=8` range.
    #[error("Invalid bit width {0}: must be between 1 and 8")]
    BitWidth(u32),

    /// Base64 text with missing, misplaced or excess `=` padding.
    #[error("Invalid base64 padding: {0}")]
    Padding(&'static str),

    /// Bech32-style text without the `1` separator between prefix and data.
    #[error("Invalid bech32 text '{0}': missing '1' separator")]
    MissingSeparator(String),
}

impl FormatError {
    pub(crate) const fn invalid_character(
        encoding: &'static str,
        character: char,
        position: usize,
    ) -> Self {
        Self::InvalidCharacter {
            encoding,
            character,
            position,
        }
    }
}
