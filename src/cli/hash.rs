use baidkit::{
    Config,
    codec::{
        commitment::{commitment_hash, commitment_id, digest},
        hex,
    },
};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The bytes to hash, as hex
    input: String,

    /// Treat the input as UTF-8 text instead of hex
    #[arg(long)]
    text: bool,

    /// Compute the commitment hash (SHA-256 applied twice)
    #[arg(long)]
    commitment: bool,
}

impl Command {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let bytes = super::input_bytes(&self.input, self.text)?;

        if self.commitment {
            println!("{}", hex::encode(&commitment_hash(&bytes)));
            println!("{}", commitment_id(config.prefix(), &bytes).dim());
        } else {
            println!("{}", hex::encode(&digest(&bytes)));
        }
        Ok(())
    }
}
