use baidkit::{Config, Encoding};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The encoding to produce (hex, base58, base64, bech32, baid64)
    encoding: Encoding,

    /// The bytes to encode, as hex (e.g. 000102 or 0x000102)
    input: String,

    /// Treat the input as UTF-8 text instead of hex
    #[arg(long)]
    text: bool,

    /// Characters per group for baid64 output (0 disables grouping)
    #[arg(long, short)]
    group_size: Option<usize>,
}

impl Command {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let bytes = super::input_bytes(&self.input, self.text)?;

        let mut config = config.clone();
        if let Some(group_size) = self.group_size {
            config.set_group_size(group_size);
        }

        println!("{}", self.encoding.encode(&bytes, &config));
        Ok(())
    }
}
