//! Grouped Base58 payloads and `<prefix>:<payload>` identifiers.

use std::{fmt, ops::Deref, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{FormatError, base58};

/// Number of characters per dash-separated group.
pub const DEFAULT_GROUP_SIZE: usize = 6;

/// Scheme prefix used by [`format_identifier`].
pub const DEFAULT_PREFIX: &str = "rgb";

/// Separates groups of Base58 characters.
pub const GROUP_SEPARATOR: char = '-';

static IDENTIFIER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+[0-9]*):(.+)$").expect("identifier pattern is a valid regex")
});

/// A validated identifier scheme prefix (`[A-Za-z]+[0-9]*`).
///
/// For example `rgb`, `bc`, or `utxob1`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Prefix(String);

impl Prefix {
    /// Creates a new `Prefix` from a string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPrefixError` unless the string is one or more ASCII
    /// letters optionally followed by ASCII digits.
    pub fn new(s: String) -> Result<Self, InvalidPrefixError> {
        let letters = s.bytes().take_while(u8::is_ascii_alphabetic).count();
        if letters == 0 || !s.bytes().skip(letters).all(|b| b.is_ascii_digit()) {
            return Err(InvalidPrefixError(s));
        }
        Ok(Self(s))
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Prefix {
    fn default() -> Self {
        Self(DEFAULT_PREFIX.to_string())
    }
}

impl TryFrom<String> for Prefix {
    type Error = InvalidPrefixError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Prefix {
    type Error = InvalidPrefixError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl From<Prefix> for String {
    fn from(prefix: Prefix) -> Self {
        prefix.0
    }
}

impl AsRef<str> for Prefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for Prefix {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Prefix {
    type Err = InvalidPrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

/// Error returned when a string doesn't match the prefix pattern
/// `[A-Za-z]+[0-9]*`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid prefix '{0}': must be letters (A-Z, a-z) optionally followed by digits")]
pub struct InvalidPrefixError(String);

/// Encodes bytes as Base58 split into dash-separated groups.
///
/// The final group may be shorter than `group_size`. A `group_size` of 0
/// returns the plain Base58 text.
///
/// # Examples
///
/// ```
/// use baidkit::codec::baid64;
///
/// assert_eq!(baid64::encode(b"Hello World!", 6), "2NEpo7-TZRRrL-ZSi2U");
/// assert_eq!(baid64::encode(b"Hello World!", 0), "2NEpo7TZRRrLZSi2U");
/// ```
#[must_use]
pub fn encode(bytes: &[u8], group_size: usize) -> String {
    let text = base58::encode(bytes);
    if group_size == 0 {
        return text;
    }

    let mut grouped = String::with_capacity(text.len() + text.len() / group_size);
    for (index, character) in text.chars().enumerate() {
        if index > 0 && index % group_size == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(character);
    }
    grouped
}

/// Decodes grouped (or ungrouped) Base58 text.
///
/// Every `-` is removed before decoding, wherever it appears.
///
/// # Errors
///
/// Returns the [`FormatError`] raised by [`base58::decode`]. Character
/// positions refer to the text with dashes removed.
pub fn decode(text: &str) -> Result<Vec<u8>, FormatError> {
    let ungrouped: String = text.chars().filter(|&c| c != GROUP_SEPARATOR).collect();
    base58::decode(&ungrouped)
}

/// A parsed `<prefix>:<payload>` identifier.
///
/// Format: `{PREFIX}:{PAYLOAD}`, where:
/// - `PREFIX` is one or more ASCII letters optionally followed by digits (e.g.
///   `rgb`, `utxob1`)
/// - `PAYLOAD` is Base58 text, usually split into groups of six by `-`
///
/// Examples: `rgb:15T`, `rgb:2NF8qs-mP3jxY`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    prefix: Prefix,
    payload: String,
    bytes: Vec<u8>,
}

impl Identifier {
    /// Creates an identifier for `bytes`, with the payload grouped by
    /// [`DEFAULT_GROUP_SIZE`].
    #[must_use]
    pub fn new(prefix: Prefix, bytes: Vec<u8>) -> Self {
        let payload = encode(&bytes, DEFAULT_GROUP_SIZE);
        Self {
            prefix,
            payload,
            bytes,
        }
    }

    /// Returns the scheme prefix, without the colon.
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.prefix.as_str()
    }

    /// Returns the payload text exactly as it appeared after the colon.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Returns the decoded payload.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the identifier, returning the decoded payload.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Returns a displayable representation with the payload regrouped.
    ///
    /// # Examples
    ///
    /// ```
    /// use baidkit::codec::baid64::Identifier;
    ///
    /// let id: Identifier = "rgb:2NF8qs-mP3jxY".parse().unwrap();
    ///
    /// assert_eq!(id.display(4).to_string(), "rgb:2NF8-qsmP-3jxY");
    /// assert_eq!(id.display(0).to_string(), "rgb:2NF8qsmP3jxY");
    /// ```
    #[must_use]
    pub const fn display(&self, group_size: usize) -> FormattedIdentifier<'_> {
        FormattedIdentifier {
            identifier: self,
            group_size,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.payload)
    }
}

/// A wrapper type that formats an identifier with a specified group size.
///
/// This type is returned by [`Identifier::display`].
#[derive(Debug, Clone, Copy)]
pub struct FormattedIdentifier<'a> {
    identifier: &'a Identifier,
    group_size: usize,
}

impl fmt::Display for FormattedIdentifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            self.identifier.prefix,
            encode(&self.identifier.bytes, self.group_size)
        )
    }
}

impl FromStr for Identifier {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_identifier(s)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = FormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_identifier(value)
    }
}

/// Parses a `<prefix>:<payload>` identifier and decodes its payload.
///
/// # Errors
///
/// Returns [`FormatError::MalformedIdentifier`] if the text has no
/// `<prefix>:` scheme or an empty payload, and the Base58 [`FormatError`] if
/// the payload does not decode.
pub fn parse_identifier(id: &str) -> Result<Identifier, FormatError> {
    let Some(captures) = IDENTIFIER_PATTERN.captures(id) else {
        tracing::debug!("No '<prefix>:' scheme in identifier '{id}'");
        return Err(FormatError::MalformedIdentifier(id.to_string()));
    };
    let (_, [prefix, payload]) = captures.extract();

    let bytes = decode(payload)?;
    tracing::trace!("Parsed identifier with prefix '{prefix}' ({} bytes)", bytes.len());

    Ok(Identifier {
        prefix: Prefix(prefix.to_string()),
        payload: payload.to_string(),
        bytes,
    })
}

/// Formats bytes as an identifier with [`DEFAULT_PREFIX`] and
/// [`DEFAULT_GROUP_SIZE`].
///
/// # Examples
///
/// ```
/// assert_eq!(baidkit::codec::baid64::format_identifier(&[0, 1, 2]), "rgb:15T");
/// ```
#[must_use]
pub fn format_identifier(bytes: &[u8]) -> String {
    format!("{DEFAULT_PREFIX}:{}", encode(bytes, DEFAULT_GROUP_SIZE))
}
