//! Direct-call console API.
//!
//! [`Console`] offers two ways to produce styled output: explicit
//! [`Style`]s, or inline markup rendered through [`tintmark::render`].
//! Both go through the same [`AnsiSink`], so effects behave identically.
//! Every call completes its own output: aligned runs are placed before the
//! call returns.

use std::io::{Stdout, Write};

use tintmark::{Color, Effects, Sink, Style};

use crate::ansi::AnsiSink;
use crate::config::SinkConfig;
use crate::error::Result;

/// A styled text writer.
///
/// # Examples
///
/// ```
/// use tintterm::{ColorMode, Console, SinkConfig};
/// use tintmark::Style;
///
/// let config = SinkConfig::default().with_color_mode(ColorMode::NoColor);
/// let mut console = Console::new(Vec::new(), config);
///
/// console.markup("[red]Hello[/], ").unwrap();
/// console.write_line("World", &Style::new()).unwrap();
///
/// assert_eq!(console.into_inner(), b"Hello, World\n");
/// ```
#[derive(Debug)]
pub struct Console<W: Write> {
    sink: AnsiSink<W>,
}

impl Console<Stdout> {
    /// A console writing to standard output.
    pub fn stdout(config: SinkConfig) -> Self {
        Self::new(std::io::stdout(), config)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, config: SinkConfig) -> Self {
        Self {
            sink: AnsiSink::new(out, config),
        }
    }

    /// Write `text` with `style`. Markup characters are not interpreted.
    pub fn write(&mut self, text: &str, style: &Style) -> Result<()> {
        self.sink.emit_styled(text, style)?;
        self.sink.finish()
    }

    /// Write `text` with `style`, then a newline.
    pub fn write_line(&mut self, text: &str, style: &Style) -> Result<()> {
        self.write(text, style)?;
        self.newline()
    }

    /// Write `text` with explicit colors and effects.
    pub fn write_colored(
        &mut self,
        text: &str,
        fg: Option<Color>,
        bg: Option<Color>,
        effects: Effects,
    ) -> Result<()> {
        self.sink.emit(text, fg, bg, effects)?;
        self.sink.finish()
    }

    /// Render inline markup. `None` writes nothing.
    pub fn markup<'a>(&mut self, input: impl Into<Option<&'a str>>) -> Result<()> {
        match input.into() {
            Some(input) => {
                tintmark::render(input, &mut self.sink)?;
                self.sink.finish()
            }
            None => Ok(()),
        }
    }

    /// Render inline markup, then a newline. `None` writes nothing at all.
    pub fn markup_line<'a>(&mut self, input: impl Into<Option<&'a str>>) -> Result<()> {
        match input.into() {
            Some(input) => {
                self.markup(input)?;
                self.newline()
            }
            None => Ok(()),
        }
    }

    pub fn newline(&mut self) -> Result<()> {
        self.sink.write_raw("\n")
    }

    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()
    }

    /// Access the underlying sink, e.g. to render with [`tintmark::render`].
    pub fn sink_mut(&mut self) -> &mut AnsiSink<W> {
        &mut self.sink
    }

    /// Consume the console, returning the writer. Output rendered directly
    /// through [`sink_mut`](Console::sink_mut) must be finished first.
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }
}
