use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codec::{
    Prefix,
    baid64::{self, DEFAULT_GROUP_SIZE},
    base64,
};

/// Configuration for the codec playground.
///
/// This struct holds the choices a playground makes on behalf of its user:
/// how identifiers are grouped and prefixed, and how forgiving Base64
/// decoding is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The number of Base58 characters per dash-separated group.
    ///
    /// 0 disables grouping.
    group_size: usize,

    /// The scheme prefix for formatted identifiers.
    ///
    /// For example, 'rgb' in `rgb:2NF8qs-mP3jxY`.
    prefix: Prefix,

    /// The prefix for Bech32-style text.
    ///
    /// For example, 'bc' in `bc1lu`.
    bech32_prefix: Prefix,

    /// Whether Base64 decoding ignores stray characters and missing padding.
    base64_mode: base64::Mode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
            prefix: Prefix::default(),
            bech32_prefix: default_bech32_prefix(),
            base64_mode: base64::Mode::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        let config =
            toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the number of characters per identifier group.
    #[must_use]
    pub const fn group_size(&self) -> usize {
        self.group_size
    }

    /// Returns the identifier scheme prefix.
    #[must_use]
    pub const fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    /// Returns the Bech32-style prefix.
    #[must_use]
    pub fn bech32_prefix(&self) -> &str {
        self.bech32_prefix.as_str()
    }

    /// Returns the Base64 decoding mode.
    #[must_use]
    pub const fn base64_mode(&self) -> base64::Mode {
        self.base64_mode
    }

    /// Sets the number of characters per identifier group.
    pub const fn set_group_size(&mut self, group_size: usize) {
        self.group_size = group_size;
    }

    /// Sets the identifier scheme prefix.
    pub fn set_prefix(&mut self, prefix: Prefix) {
        self.prefix = prefix;
    }

    /// Sets the Bech32-style prefix.
    pub fn set_bech32_prefix(&mut self, prefix: Prefix) {
        self.bech32_prefix = prefix;
    }

    /// Sets the Base64 decoding mode.
    pub const fn set_base64_mode(&mut self, mode: base64::Mode) {
        self.base64_mode = mode;
    }

    /// Formats `bytes` as an identifier with the configured prefix and group
    /// size.
    #[must_use]
    pub fn format_identifier(&self, bytes: &[u8]) -> String {
        format!(
            "{}:{}",
            self.prefix,
            baid64::encode(bytes, self.group_size)
        )
    }
}

const fn default_group_size() -> usize {
    DEFAULT_GROUP_SIZE
}

fn default_bech32_prefix() -> Prefix {
    Prefix::new("bc".to_string()).unwrap_or_default()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        /// The number of Base58 characters per group.
        #[serde(default = "default_group_size")]
        group_size: usize,

        #[serde(default)]
        prefix: Prefix,

        #[serde(default = "default_bech32_prefix")]
        bech32_prefix: Prefix,

        #[serde(default)]
        base64_mode: base64::Mode,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                group_size,
                prefix,
                bech32_prefix,
                base64_mode,
            } => Self {
                group_size,
                prefix,
                bech32_prefix,
                base64_mode,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            group_size: config.group_size,
            prefix: config.prefix,
            bech32_prefix: config.bech32_prefix,
            base64_mode: config.base64_mode,
        }
    }
}
