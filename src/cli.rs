use std::path::{Path, PathBuf};

mod config;
mod decode;
mod encode;
mod hash;
mod id;
mod terminal;

use anyhow::Context;
use baidkit::{Config, codec::hex};
use clap::ArgAction;

/// Configuration file used when `--config` is not given.
const DEFAULT_CONFIG: &str = ".baid.toml";

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the configuration file [default: .baid.toml, if present]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let explicit = self.config.is_some();
        let config_path = self
            .config
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
        let config = || load_config(&config_path, explicit);

        match self.command {
            Command::Encode(command) => command.run(&config()?),
            Command::Decode(command) => command.run(&config()?),
            Command::Id(command) => command.run(&config()?),
            Command::Hash(command) => command.run(&config()?),
            Command::Config(command) => command.run(&config_path),
        }
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Encode bytes as text
    Encode(encode::Command),

    /// Decode text into bytes (printed as hex)
    Decode(decode::Command),

    /// Format and parse `<prefix>:<payload>` identifiers
    #[command(subcommand)]
    Id(id::Command),

    /// Compute a SHA-256 digest or commitment hash
    Hash(hash::Command),

    /// Show or initialise the configuration file
    #[command(subcommand)]
    Config(config::Command),
}

/// Loads the configuration, falling back to defaults when the default file is
/// absent. An explicitly requested file must exist.
fn load_config(path: &Path, explicit: bool) -> anyhow::Result<Config> {
    if path.exists() {
        Config::load(path).map_err(|e| anyhow::anyhow!("{e}"))
    } else if explicit {
        anyhow::bail!("Configuration file {} not found", path.display());
    } else {
        tracing::debug!("No configuration at {}, using defaults", path.display());
        Ok(Config::default())
    }
}

/// Reads command-line input as hex, or as UTF-8 text when `text` is set.
fn input_bytes(input: &str, text: bool) -> anyhow::Result<Vec<u8>> {
    if text {
        Ok(input.as_bytes().to_vec())
    } else {
        hex::decode(input)
            .with_context(|| format!("'{input}' is not valid hex (use --text for UTF-8 input)"))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn load_config_reads_existing_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("baid.toml");
        std::fs::write(&path, "_version = \"1\"\ngroup_size = 3\nprefix = \"utxob\"\n").unwrap();

        let config = load_config(&path, false).unwrap();
        assert_eq!(config.group_size(), 3);
        assert_eq!(config.prefix().as_str(), "utxob");

        let config = load_config(&path, true).unwrap();
        assert_eq!(config.group_size(), 3);
    }

    #[test]
    fn load_config_requires_explicit_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("missing.toml");

        let error = load_config(&path, true).unwrap_err();
        assert!(error.to_string().contains("not found"));
    }

    #[test]
    fn load_config_falls_back_to_defaults() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG);

        assert_eq!(load_config(&path, false).unwrap(), Config::default());
    }

    #[test]
    fn load_config_reports_invalid_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("baid.toml");
        std::fs::write(&path, "_version = \"1\"\ngroup_size = \"six\"\n").unwrap();

        let error = load_config(&path, false).unwrap_err();
        assert!(error.to_string().starts_with("Failed to parse config file:"));
    }

    #[test]
    fn input_bytes_parses_hex() {
        assert_eq!(input_bytes("0x00ff", false).unwrap(), vec![0x00, 0xff]);

        let error = input_bytes("hello", false).unwrap_err();
        assert!(error.to_string().contains("use --text"));
    }

    #[test]
    fn input_bytes_takes_text_verbatim() {
        assert_eq!(input_bytes("hello", true).unwrap(), b"hello".to_vec());
        assert_eq!(input_bytes("00ff", true).unwrap(), b"00ff".to_vec());
    }
}
