use std::path::Path;

use baidkit::Config;
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Parser)]
/// Show or initialise the playground configuration
///
/// Available configuration keys:
///   `group_size`     Characters per identifier group, 0 for none (default: 6)
///   `prefix`         Identifier scheme prefix (default: rgb)
///   `bech32_prefix`  Prefix for bech32-style text (default: bc)
///   `base64_mode`    permissive or strict Base64 decoding (default: permissive)
pub enum Command {
    /// Show the effective configuration
    Show,

    /// Write a default configuration file
    Init,
}

impl Command {
    #[instrument]
    pub fn run(self, config_path: &Path) -> anyhow::Result<()> {
        match self {
            Self::Show => Self::show_config(config_path),
            Self::Init => Self::init_config(config_path),
        }
    }

    fn show_config(config_path: &Path) -> anyhow::Result<()> {
        let config = if config_path.exists() {
            Config::load(config_path).map_err(|e| anyhow::anyhow!("{e}"))?
        } else {
            Config::default()
        };

        let source = if config_path.exists() {
            config_path.display().to_string()
        } else {
            "defaults".to_string()
        };

        println!("Configuration ({}):", source.dim());
        println!("  group_size: {}", config.group_size());
        println!("  prefix: {}", config.prefix());
        println!("  bech32_prefix: {}", config.bech32_prefix());
        println!("  base64_mode: {}", config.base64_mode());
        Ok(())
    }

    fn init_config(config_path: &Path) -> anyhow::Result<()> {
        if config_path.exists() {
            anyhow::bail!(
                "Configuration already exists at {}",
                config_path.display()
            );
        }

        Config::default()
            .save(config_path)
            .map_err(|e| anyhow::anyhow!("{e}"))?;

        println!(
            "{}",
            format!("✅ Created {}", config_path.display()).success()
        );
        Ok(())
    }
}
