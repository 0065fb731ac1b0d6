use std::{env, io};

use anyhow::anyhow;

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        eprintln!(
            "{level:<5} {target} > {text}",
            level = record.level(),
            target = record.target(),
            text = record.args(),
        );
    }

    fn flush(&self) {}
}

impl Logger {
    fn init(level: log::LevelFilter) -> anyhow::Result<()> {
        log::set_logger(&Logger).map_err(|err| anyhow!("could not set logger: {err}"))?;
        log::set_max_level(level);
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    Logger::init(log::LevelFilter::Info)?;
    gles2_generator::run(env::args_os().skip(1).collect(), &mut io::stdout())
}
