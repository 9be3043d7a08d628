use baidkit::{
    Config, Identifier, Prefix,
    codec::{hex, parse_identifier},
};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Format bytes as an identifier
    ///
    /// Examples:
    ///   baid id format 000102            -> rgb:15T
    ///   baid id format --prefix bc 000102 -> bc:15T
    Format {
        /// The bytes to format, as hex
        input: String,

        /// Treat the input as UTF-8 text instead of hex
        #[arg(long)]
        text: bool,

        /// The scheme prefix (defaults to the configured prefix)
        #[arg(long, short)]
        prefix: Option<Prefix>,

        /// Characters per group (defaults to the configured group size)
        #[arg(long, short)]
        group_size: Option<usize>,
    },

    /// Parse an identifier and decode its payload
    Parse {
        /// The identifier, e.g. rgb:2NF8qs-mP3jxY
        id: String,

        /// Output format
        #[arg(long, value_name = "FORMAT", default_value = "pretty")]
        output: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Command {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Format {
                input,
                text,
                prefix,
                group_size,
            } => {
                let bytes = super::input_bytes(&input, text)?;
                let mut config = config.clone();
                if let Some(prefix) = prefix {
                    config.set_prefix(prefix);
                }
                if let Some(group_size) = group_size {
                    config.set_group_size(group_size);
                }
                println!("{}", config.format_identifier(&bytes));
            }
            Self::Parse { id, output } => {
                let identifier = parse_identifier(&id)?;
                match output {
                    OutputFormat::Pretty => output_pretty(&identifier, config),
                    OutputFormat::Json => output_json(&identifier)?,
                }
            }
        }
        Ok(())
    }
}

fn output_pretty(identifier: &Identifier, config: &Config) {
    println!("{} {}", "prefix: ".info(), identifier.prefix());
    println!("{} {}", "payload:".info(), identifier.payload());
    println!(
        "{} {} {}",
        "bytes:  ".info(),
        hex::encode(identifier.bytes()),
        format!("({} bytes)", identifier.bytes().len()).dim()
    );

    let canonical = identifier.display(config.group_size()).to_string();
    if canonical != identifier.to_string() {
        println!("{} {}", "canonical:".dim(), canonical.dim());
    }
}

fn output_json(identifier: &Identifier) -> anyhow::Result<()> {
    let value = serde_json::json!({
        "prefix": identifier.prefix(),
        "payload": identifier.payload(),
        "bytes": hex::encode(identifier.bytes()),
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
