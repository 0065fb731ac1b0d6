#![allow(clippy::write_with_newline)]

mod config;

use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::io;

use anyhow::Context as _;

pub use config::{Config, GenerationMode};

pub const BANNER: &str = "/*
Autogenerated file - DO NOT EDIT
This file was generated by the //gpu/gles2/build_gles2_command_buffer.py.
*/
\n\n";

const PROC_TYPE_PREFIX: &str = "_PFNGL";
const PROC_TYPE_SUFFIX: &str = "PROC";

pub const USAGE: &str = "\
usage: gles2-generator --file <path> --output <path> (--header | --body) [--verbose]

  --file <path>     list of gl function names, one per line
  --output <path>   generated file, created or truncated
  --header          emit `_PFNGL<NAME>PROC <name> = nullptr;` declarations
  --body            emit `<name> = static_cast<...>(GetProc(\"<name>\"));` assignments
  --verbose         log every emitted function
";

/// Trimmed, non-empty line of the function list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FunctionName<'a>(&'a str);

impl<'a> FunctionName<'a> {
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// `glDrawArrays` -> `_PFNGLDRAWARRAYSPROC`
    pub fn proc_type(&self) -> String {
        format!(
            "{PROC_TYPE_PREFIX}{}{PROC_TYPE_SUFFIX}",
            self.0.to_uppercase()
        )
    }
}

/// Lines end at `\n`, `\r\n` or a lone `\r`.
pub fn parse_function_names<'a>(input: &'a str) -> Vec<FunctionName<'a>> {
    input
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(FunctionName)
        .collect()
}

pub fn emit_banner<W: io::Write>(w: &mut W) -> io::Result<()> {
    w.write_all(BANNER.as_bytes())
}

pub fn emit_header<W: io::Write>(w: &mut W, names: &[FunctionName]) -> io::Result<()> {
    for name in names.iter() {
        log::debug!("declaring {}", name.as_str());
        write!(w, "{} {} = nullptr;\n\n", name.proc_type(), name.as_str())?;
    }
    Ok(())
}

pub fn emit_body<W: io::Write>(w: &mut W, names: &[FunctionName]) -> io::Result<()> {
    for name in names.iter() {
        log::debug!("resolving {}", name.as_str());
        write!(
            w,
            "{name} = static_cast<{proc_type}>(GetProc(\"{name}\"));\n\n",
            name = name.as_str(),
            proc_type = name.proc_type(),
        )?;
    }
    Ok(())
}

pub fn emit<W: io::Write>(
    w: &mut W,
    names: &[FunctionName],
    mode: GenerationMode,
) -> io::Result<()> {
    emit_banner(w)?;
    match mode {
        GenerationMode::Header => emit_header(w, names),
        GenerationMode::Body => emit_body(w, names),
    }
}

fn log_duplicates(names: &[FunctionName]) {
    let mut seen: HashSet<&str> = HashSet::new();
    for name in names.iter() {
        if !seen.insert(name.as_str()) {
            log::debug!("duplicate function name: {}", name.as_str());
        }
    }
}

/// Reads the function list, renders it and overwrites the output file.
/// Returns the number of emitted blocks.
pub fn generate(config: &Config) -> anyhow::Result<usize> {
    log::debug!("{config:?}");

    let input = fs::read_to_string(&config.file)
        .with_context(|| format!("could not read {}", config.file.display()))?;
    let names = parse_function_names(&input);
    log_duplicates(&names);

    let mut document: Vec<u8> = Vec::new();
    emit(&mut document, &names, config.mode)?;

    fs::write(&config.output, &document)
        .with_context(|| format!("could not write {}", config.output.display()))?;

    log::info!(
        "wrote {} {} entries to {}",
        names.len(),
        config.mode.as_str(),
        config.output.display()
    );

    Ok(names.len())
}

/// Handles `--help` and `--verbose`, then runs [`generate`]. Usage text goes to `out`.
/// Nothing is read or written unless the whole command line is valid.
pub fn run<W: io::Write>(args: Vec<OsString>, out: &mut W) -> anyhow::Result<()> {
    let mut args = pico_args::Arguments::from_vec(args);
    if args.contains(["-h", "--help"]) {
        out.write_all(USAGE.as_bytes())?;
        return Ok(());
    }
    if args.contains("--verbose") {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let config = Config::from_args(args)?;
    generate(&config)?;

    Ok(())
}
