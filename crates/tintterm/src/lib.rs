//! Terminal output for tintmark styles.
//!
//! [`AnsiSink`] implements [`tintmark::Sink`] by writing SGR escape sequences
//! through crossterm; [`Console`] wraps it with direct-call and markup APIs.
//! All output settings live in a [`SinkConfig`] handed to the constructor.
//!
//! ```no_run
//! use tintterm::{Console, SinkConfig};
//!
//! let mut console = Console::stdout(SinkConfig::default());
//! console.markup_line("[green]ok[/] [b:red allcaps]failed[/]")?;
//! console.flush()?;
//! # Ok::<(), tintterm::TermError>(())
//! ```

pub mod ansi;
pub mod config;
pub mod console;
pub mod error;
mod log_init;

pub use ansi::AnsiSink;
pub use config::{ColorMode, OutputEncoding, SinkConfig};
pub use console::Console;
pub use error::{Result, TermError};
pub use log_init::init_logger;
