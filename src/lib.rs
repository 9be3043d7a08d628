//! Binary-to-text codecs for the protocol documentation playground.
//!
//! Converts raw bytes to and from hex, Base58, Base64, a checksum-free
//! Bech32-style encoding, and grouped Base58 identifiers such as
//! `rgb:2NF8qs-mP3jxY`, and derives commitment hashes.

pub mod codec;
pub use codec::{Encoding, FormatError, Identifier, Prefix};

mod config;
pub use config::Config;
