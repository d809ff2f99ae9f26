//! Style type and the overlay merge.
//!
//! A Style combines optional colors and an effect set into a single
//! specification. Styles are immutable values; combining them yields a new
//! style.

use crate::color::Color;
use crate::effects::Effects;

/// Resolved styling for a run of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground (text) color.
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    /// Text effects.
    pub effects: Effects,
}

impl Style {
    /// Create a new default style.
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            effects: Effects::empty(),
        }
    }

    pub fn with_fg(mut self, fg: Color) -> Self {
        self.fg = Some(fg);
        self
    }

    pub fn with_bg(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    pub fn with_effects(mut self, effects: Effects) -> Self {
        self.effects |= effects;
        self
    }

    /// Returns true for the default style: no colors and no effects.
    pub fn is_default(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.effects.is_empty()
    }

    /// Apply `overlay` on top of this style. See [`merge`].
    pub fn apply(&self, overlay: &Style) -> Style {
        merge(self, overlay)
    }
}

/// Merge an overlay style on top of a base style.
///
/// Overlay colors win where present, otherwise the base colors carry
/// through. Effects are OR'd together. The merge never clears anything the
/// base had set.
///
/// ```
/// use tintmark::{merge, Color, Effects, Style};
///
/// let base = Style::new().with_fg(Color::RED).with_effects(Effects::ITALICS);
/// let overlay = Style::new().with_bg(Color::BLUE);
///
/// let merged = merge(&base, &overlay);
/// assert_eq!(merged.fg, Some(Color::RED));
/// assert_eq!(merged.bg, Some(Color::BLUE));
/// assert!(merged.effects.contains(Effects::ITALICS));
/// ```
pub fn merge(base: &Style, overlay: &Style) -> Style {
    Style {
        fg: overlay.fg.or(base.fg),
        bg: overlay.bg.or(base.bg),
        effects: base.effects | overlay.effects,
    }
}
