//! Binary-to-text codecs.
//!
//! Every function in this module is pure: inputs are borrowed, outputs are
//! freshly allocated, and malformed input is reported as a [`FormatError`].

mod error;
pub use error::FormatError;

/// Raw bytes to and from hexadecimal text.
pub mod hex;

/// Base58 text for arbitrary byte strings.
pub mod base58;

/// Standard Base64 text.
pub mod base64;

/// Bit regrouping and the checksum-free Bech32-style encoding.
pub mod bech32;

/// Grouped Base58 identifiers (`rgb:2NF8qs-mP3jxY`).
pub mod baid64;
pub use baid64::{Identifier, Prefix, format_identifier, parse_identifier};

/// SHA-256 digests and commitment hashes.
pub mod commitment;
pub use commitment::{Digest32, commitment_hash, digest};

use std::{fmt, str::FromStr};

use crate::Config;

/// The text encodings a playground can convert bytes to and from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Lowercase hexadecimal.
    Hex,
    /// Base58.
    Base58,
    /// Padded standard Base64.
    Base64,
    /// Checksum-free Bech32-style words behind a prefix.
    Bech32,
    /// Grouped Base58.
    Baid64,
}

impl Encoding {
    /// All encodings, in display order.
    pub const ALL: [Self; 5] = [
        Self::Hex,
        Self::Base58,
        Self::Base64,
        Self::Bech32,
        Self::Baid64,
    ];

    /// Returns the lowercase name of the encoding.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base58 => "base58",
            Self::Base64 => "base64",
            Self::Bech32 => "bech32",
            Self::Baid64 => "baid64",
        }
    }

    /// Encodes `bytes`, using `config` for the group size and Bech32 prefix.
    #[must_use]
    pub fn encode(self, bytes: &[u8], config: &Config) -> String {
        match self {
            Self::Hex => hex::encode(bytes),
            Self::Base58 => base58::encode(bytes),
            Self::Base64 => base64::encode(bytes),
            Self::Bech32 => bech32::encode(config.bech32_prefix(), bytes),
            Self::Baid64 => baid64::encode(bytes, config.group_size()),
        }
    }

    /// Decodes `text`, using `config` for the Base64 mode.
    ///
    /// Bech32 text keeps whatever prefix it carries; only the data is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns the [`FormatError`] raised by the underlying decoder.
    pub fn decode(self, text: &str, config: &Config) -> Result<Vec<u8>, FormatError> {
        let result = match self {
            Self::Hex => hex::decode(text),
            Self::Base58 => base58::decode(text),
            Self::Base64 => base64::decode_with(text, config.base64_mode()),
            Self::Bech32 => bech32::decode(text).map(|(_, bytes)| bytes),
            Self::Baid64 => baid64::decode(text),
        };
        if let Err(e) = &result {
            tracing::debug!("Failed to decode {self} text: {e}");
        }
        result
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = UnknownEncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|encoding| encoding.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownEncodingError(s.to_string()))
    }
}

/// Error returned when an encoding name is not recognised.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown encoding '{0}': expected one of hex, base58, base64, bech32, baid64")]
pub struct UnknownEncodingError(String);
