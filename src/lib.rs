//! Colored, styled terminal text from inline markup.
//!
//! This crate bundles [`tintmark`] (the markup language and style model) with
//! [`tintterm`] (the ANSI terminal sink) and adds one-call helpers for
//! standard output.
//!
//! ```no_run
//! tinted::println_markup("[green]ok[/] [b:(90,0,0) allcaps]failed[/]")?;
//! # Ok::<(), tinted::Error>(())
//! ```

pub mod error;

pub use error::{Error, Result};
pub use tintmark::{
    Alignment, Color, ColorParseError, Effects, Sink, Style, StyledRun, StyledText, Underline,
    escape_markup, merge, render, strip_markup,
};
pub use tintterm::{AnsiSink, ColorMode, Console, OutputEncoding, SinkConfig, TermError};

/// Render markup to standard output with the default configuration.
pub fn print_markup(input: &str) -> Result<()> {
    let mut console = Console::stdout(SinkConfig::default());
    console.markup(input)?;
    console.flush()?;
    Ok(())
}

/// Render markup to standard output followed by a newline.
pub fn println_markup(input: &str) -> Result<()> {
    let mut console = Console::stdout(SinkConfig::default());
    console.markup_line(input)?;
    console.flush()?;
    Ok(())
}

/// Parse a color from a name, `(R,G,B)` literal, or hex string.
pub fn color(spec: &str) -> Result<Color> {
    Ok(Color::parse(spec)?)
}
