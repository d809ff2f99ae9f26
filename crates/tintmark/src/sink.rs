//! The output side of rendering.

use std::convert::Infallible;

use crate::color::Color;
use crate::effects::Effects;
use crate::markup::StyledRun;
use crate::style::Style;

/// Receives styled text runs from the renderer.
///
/// Implementations turn runs into terminal output, collect them, or anything
/// else. The renderer surfaces a sink error unchanged and stops; markup
/// problems never produce errors.
pub trait Sink {
    type Error;

    /// Output one run of text with resolved colors and effects.
    fn emit(
        &mut self,
        text: &str,
        fg: Option<Color>,
        bg: Option<Color>,
        effects: Effects,
    ) -> Result<(), Self::Error>;

    /// Output one run of text with a [`Style`].
    fn emit_styled(&mut self, text: &str, style: &Style) -> Result<(), Self::Error> {
        self.emit(text, style.fg, style.bg, style.effects)
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    type Error = S::Error;

    fn emit(
        &mut self,
        text: &str,
        fg: Option<Color>,
        bg: Option<Color>,
        effects: Effects,
    ) -> Result<(), Self::Error> {
        (**self).emit(text, fg, bg, effects)
    }
}

/// Collects every run in order.
impl Sink for Vec<StyledRun> {
    type Error = Infallible;

    fn emit(
        &mut self,
        text: &str,
        fg: Option<Color>,
        bg: Option<Color>,
        effects: Effects,
    ) -> Result<(), Self::Error> {
        self.push(StyledRun::new(text, Style { fg, bg, effects }));
        Ok(())
    }
}

/// Keeps only the text, discarding styling.
impl Sink for String {
    type Error = Infallible;

    fn emit(
        &mut self,
        text: &str,
        _fg: Option<Color>,
        _bg: Option<Color>,
        _effects: Effects,
    ) -> Result<(), Self::Error> {
        self.push_str(text);
        Ok(())
    }
}
