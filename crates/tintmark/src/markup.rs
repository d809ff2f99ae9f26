//! Collected render results.

use std::convert::Infallible;

use crate::sink::Sink;
use crate::style::Style;

/// One run of text and the style it was emitted with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub style: Style,
}

impl StyledRun {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// A run under the default style.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::new())
    }
}

/// The runs produced by rendering one markup string.
///
/// Each literal text token becomes its own run; adjacent runs that happen to
/// share a style are not merged.
///
/// # Examples
///
/// ```
/// use tintmark::{Color, StyledText};
///
/// let text = StyledText::parse("[red]Hello[/] World");
/// assert_eq!(text.plain_text(), "Hello World");
/// assert_eq!(text.runs().len(), 2);
/// assert_eq!(text.runs()[0].style.fg, Some(Color::RED));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledText {
    runs: Vec<StyledRun>,
}

impl StyledText {
    pub fn new(runs: Vec<StyledRun>) -> Self {
        Self { runs }
    }

    /// Render markup into a list of runs.
    pub fn parse(input: &str) -> Self {
        let mut runs = Vec::new();
        let result: Result<(), Infallible> = crate::parser::render(input, &mut runs);
        match result {
            Ok(()) => Self { runs },
            Err(never) => match never {},
        }
    }

    /// Get all runs.
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// The text of every run concatenated, without styling.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Total length of the text in bytes.
    pub fn len(&self) -> usize {
        self.runs.iter().map(|run| run.text.len()).sum()
    }

    /// Returns true if there is no text.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Replay the runs into another sink.
    pub fn write_to<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), S::Error> {
        for run in &self.runs {
            sink.emit_styled(&run.text, &run.style)?;
        }
        Ok(())
    }

    /// Iterate over runs.
    pub fn iter(&self) -> std::slice::Iter<'_, StyledRun> {
        self.runs.iter()
    }
}

impl IntoIterator for StyledText {
    type Item = StyledRun;
    type IntoIter = std::vec::IntoIter<StyledRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.into_iter()
    }
}

impl<'a> IntoIterator for &'a StyledText {
    type Item = &'a StyledRun;
    type IntoIter = std::slice::Iter<'a, StyledRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

/// Remove all markup, keeping only the literal text.
///
/// ```
/// use tintmark::strip_markup;
///
/// assert_eq!(strip_markup(r"[red]a\[b[/] \\ [oops"), r"a[b \ [oops");
/// ```
pub fn strip_markup(input: &str) -> String {
    let mut text = String::with_capacity(input.len());
    let result: Result<(), Infallible> = crate::parser::render(input, &mut text);
    match result {
        Ok(()) => text,
        Err(never) => match never {},
    }
}

/// Escape text so that it renders literally.
///
/// ```
/// use tintmark::{escape_markup, strip_markup};
///
/// let raw = r"[red] \ [/]";
/// assert_eq!(escape_markup(raw), r"\[red] \\ \[/]");
/// assert_eq!(strip_markup(&escape_markup(raw)), raw);
/// ```
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '[' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
