//! Logger setup.
//!
//! All user-facing output goes through the `log` macros. Normal runs print
//! bare messages to stdout; `--verbose` adds timestamps and debug records.
//! `--logfile` copies every line to a file with ANSI colour codes removed.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Env, Target, WriteStyle};
use log::LevelFilter;

use crate::error::CliError;

/// Writes to stdout and to a log file with escape codes stripped.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(&strip_ansi_escapes::strip(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}

pub(crate) fn level_filter(quiet: bool, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Level filter and line format, without touching the output target.
pub(crate) fn configure(builder: &mut Builder, quiet: bool, verbose: bool) {
    builder.filter_level(level_filter(quiet, verbose));

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5} {}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
}

/// Send records to `writer` with colour codes intact.
///
/// env_logger strips escapes for pipes by default. owo-colors has already
/// decided per stream whether to colour, and the writer handles any
/// stripping itself.
pub(crate) fn pipe_to(builder: &mut Builder, writer: impl Write + Send + 'static) {
    builder.target(Target::Pipe(Box::new(writer)));
    builder.write_style(WriteStyle::Always);
}

pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let mut builder = Builder::new();
    configure(&mut builder, quiet, verbose);
    // RUST_LOG still wins when set.
    builder.parse_env(Env::default());

    match logfile {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                CliError::logging(format!("cannot create {}: {e}", path.display()))
            })?;
            pipe_to(&mut builder, TeeWriter { file });
        }
        None => {
            builder.target(Target::Stdout);
        }
    }

    builder
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}

#[cfg(test)]
#[path = "tests/logging_tests.rs"]
mod tests;
