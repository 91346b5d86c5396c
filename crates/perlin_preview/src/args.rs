//! # Command Line
//!
//! `noise_preview [config.toml] [--seed N] [--ascii] [--width-chars N]`

use std::path::PathBuf;

use anyhow::{bail, Context};

/// Usage text printed on `--help` or bad input.
pub const USAGE: &str = "\
Usage: noise_preview [config.toml] [options]

Options:
  --seed <n>          Override the lattice seed
  --ascii             Print an ASCII preview of the field
  --width-chars <n>   Maximum preview width in characters (default 64)
  --help              Show this message";

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewArgs {
    /// Config file; defaults apply when absent.
    pub config: Option<PathBuf>,
    /// Seed overriding the config file.
    pub seed: Option<u64>,
    /// Print the ASCII preview.
    pub ascii: bool,
    /// Maximum preview width, in characters.
    pub width_chars: u32,
    /// Print usage and exit.
    pub help: bool,
}

impl Default for PreviewArgs {
    fn default() -> Self {
        Self {
            config: None,
            seed: None,
            ascii: false,
            width_chars: 64,
            help: false,
        }
    }
}

impl PreviewArgs {
    /// Parses arguments, excluding the program name.
    ///
    /// # Errors
    ///
    /// Fails on unknown flags, missing or malformed flag values, and more
    /// than one config path.
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = args.next().context("--seed needs a value")?;
                    parsed.seed = Some(
                        value
                            .parse()
                            .with_context(|| format!("invalid seed: {value}"))?,
                    );
                }
                "--width-chars" => {
                    let value = args.next().context("--width-chars needs a value")?;
                    parsed.width_chars = value
                        .parse()
                        .with_context(|| format!("invalid width: {value}"))?;
                }
                "--ascii" => parsed.ascii = true,
                "--help" | "-h" => parsed.help = true,
                flag if flag.starts_with("--") => bail!("unknown option: {flag}"),
                path => {
                    if parsed.config.is_some() {
                        bail!("more than one config file given");
                    }
                    parsed.config = Some(PathBuf::from(path));
                }
            }
        }

        Ok(parsed)
    }
}
