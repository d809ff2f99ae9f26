//! Inline markup for styled terminal text.
//!
//! This crate parses a small bracket-tag language, such as
//! `[red italics]Hello[/] World`, into runs of text, each tagged with the
//! foreground color, background color and effects in force at that point.
//!
//! # Overview
//!
//! - `[red]text[/]` - Named foreground color
//! - `[b:navy]text[/]` - Background color (`f:` selects the foreground explicitly)
//! - `[(10,20,30)]text[/]` - RGB literal
//! - `[underline blink]text[/]` - Several attributes in one tag
//! - `[/]` - Close the most recent tag
//! - `\[` and `\\` - Literal `[` and `\`
//!
//! Tags nest. An inner tag inherits everything from the enclosing scope:
//! its colors replace the inherited ones, its effects add to them.
//!
//! Malformed markup is never an error. Unclosed or empty tags render as
//! literal text, unknown attributes are ignored, and a stray `[/]` is a no-op.
//!
//! Effects: `italics`, `underline`, `doubleunderline`, `strikethrough`,
//! `overline`, `allcaps`, `left`, `center`, `right`, `blink`. Names and
//! colors are case-insensitive.
//!
//! # Usage
//!
//! ```
//! use tintmark::{Color, Effects, StyledText};
//!
//! let text = StyledText::parse("[red]a[italics]b[/][/]");
//! let runs = text.runs();
//! assert_eq!(runs[0].style.fg, Some(Color::RED));
//! assert_eq!(runs[1].style.effects, Effects::ITALICS);
//! ```
//!
//! To send runs somewhere else, implement [`Sink`] and call
//! [`parser::render`].

pub mod color;
pub mod effects;
pub mod error;
pub mod markup;
pub mod palette;
pub mod parser;
pub mod sink;
pub mod span;
pub mod style;

// Re-export main types at crate root
pub use color::Color;
pub use effects::{Alignment, Effects, Underline};
pub use error::ColorParseError;
pub use markup::{StyledRun, StyledText, escape_markup, strip_markup};
pub use parser::render;
pub use sink::Sink;
pub use span::Span;
pub use style::{Style, merge};
