use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context as _, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// `_PFNGL<NAME>PROC <name> = nullptr;` declarations.
    Header,
    /// `<name> = static_cast<...>(GetProc("<name>"));` assignments.
    Body,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Body => "body",
        }
    }

    pub fn from_flags(header: bool, body: bool) -> anyhow::Result<Self> {
        match (header, body) {
            (true, false) => Ok(Self::Header),
            (false, true) => Ok(Self::Body),
            (false, false) => bail!("no generation mode selected (pass --header or --body)"),
            (true, true) => bail!("--header and --body are mutually exclusive"),
        }
    }
}

#[derive(Debug)]
pub struct Config {
    pub file: PathBuf,
    pub output: PathBuf,
    pub mode: GenerationMode,
}

impl Config {
    /// Consumes every recognized flag. Anything left over is an error.
    pub fn from_args(mut args: pico_args::Arguments) -> anyhow::Result<Self> {
        let header = args.contains("--header");
        let body = args.contains("--body");
        let file: PathBuf = args
            .opt_value_from_str("--file")?
            .context("--file is missing")?;
        let output: PathBuf = args
            .opt_value_from_str("--output")?
            .context("--output is missing")?;

        let remaining = args.finish();
        if !remaining.is_empty() {
            bail!("unexpected arguments: {remaining:?}");
        }

        Ok(Self {
            file,
            output,
            mode: GenerationMode::from_flags(header, body)?,
        })
    }

    pub fn from_vec(args: Vec<OsString>) -> anyhow::Result<Self> {
        Self::from_args(pico_args::Arguments::from_vec(args))
    }
}
