use anyhow::Context;
use baidkit::{
    Config, Encoding,
    codec::{base64::Mode, hex},
};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The encoding of the input text (hex, base58, base64, bech32, baid64)
    encoding: Encoding,

    /// The text to decode
    input: String,

    /// Reject Base64 text with stray characters or missing padding
    #[arg(long)]
    strict: bool,

    /// Also print the bytes as UTF-8 text
    #[arg(long)]
    text: bool,
}

impl Command {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let mut config = config.clone();
        if self.strict {
            config.set_base64_mode(Mode::Strict);
        }

        let bytes = self
            .encoding
            .decode(&self.input, &config)
            .with_context(|| format!("Failed to decode '{}' as {}", self.input, self.encoding))?;

        println!("{}", hex::encode(&bytes));
        if self.text {
            println!("{}", String::from_utf8_lossy(&bytes).dim());
        }
        Ok(())
    }
}
