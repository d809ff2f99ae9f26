//! File-backed logger for rendering diagnostics.
//!
//! The markup crates log through the `log` facade only: ignored attributes and
//! unmatched close tags at `trace`, sink construction at `debug`. Installing a
//! logger is up to the application. [`init_logger`] provides one that appends
//! to a file, since logging to the terminal would interleave with the styled
//! output itself.

use log::{Level, LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;

use crate::error::{Result, TermError};

struct FileLogger {
    file_path: String,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Install a logger that appends debug-level records to the file at `path`.
///
/// Terminal output and log output must not share a stream, so logs go to a
/// file. Fails if a global logger is already installed.
pub fn init_logger(path: &str) -> Result<()> {
    let logger = FileLogger {
        file_path: path.to_string(),
    };
    log::set_boxed_logger(Box::new(logger)).map_err(|e| TermError::Logger(e.to_string()))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}
