//! Text effect flags.
//!
//! Effects accumulate through nested markup scopes by set union. Some flags
//! describe mutually exclusive visuals; [`Effects::underline`] and
//! [`Effects::alignment`] resolve those conflicts at emission time.

use std::borrow::Cow;

use bitflags::bitflags;
use phf::phf_map;

bitflags! {
    /// A set of text effects applied to a run.
    ///
    /// # Example
    ///
    /// ```
    /// use tintmark::Effects;
    ///
    /// let mut effects = Effects::empty();
    /// effects |= Effects::ITALICS;
    /// effects |= Effects::BLINK;
    ///
    /// assert!(effects.contains(Effects::ITALICS | Effects::BLINK));
    /// assert!(!effects.contains(Effects::UNDERLINE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Effects: u16 {
        const ITALICS          = 1 << 0;
        const UNDERLINE        = 1 << 1;
        const DOUBLE_UNDERLINE = 1 << 2;
        const STRIKETHROUGH    = 1 << 3;
        const OVERLINE         = 1 << 4;
        /// Uppercase the run's text. A text transform, not a terminal attribute.
        const ALL_CAPS         = 1 << 5;
        const LEFT             = 1 << 6;
        const CENTER           = 1 << 7;
        const RIGHT            = 1 << 8;
        const BLINK            = 1 << 9;
    }
}

/// Markup names of each effect, lowercase.
static EFFECT_NAMES: phf::Map<&'static str, Effects> = phf_map! {
    "italics" => Effects::ITALICS,
    "underline" => Effects::UNDERLINE,
    "doubleunderline" => Effects::DOUBLE_UNDERLINE,
    "strikethrough" => Effects::STRIKETHROUGH,
    "overline" => Effects::OVERLINE,
    "allcaps" => Effects::ALL_CAPS,
    "left" => Effects::LEFT,
    "center" => Effects::CENTER,
    "right" => Effects::RIGHT,
    "blink" => Effects::BLINK,
};

/// The underline visual a run is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Underline {
    Single,
    Double,
}

/// Horizontal placement of a run within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Effects {
    /// Look up an effect by its markup name, ignoring ASCII case.
    ///
    /// ```
    /// use tintmark::Effects;
    ///
    /// assert_eq!(Effects::from_markup_name("Italics"), Some(Effects::ITALICS));
    /// assert_eq!(Effects::from_markup_name("DOUBLEUNDERLINE"), Some(Effects::DOUBLE_UNDERLINE));
    /// assert_eq!(Effects::from_markup_name("bold"), None);
    /// ```
    pub fn from_markup_name(name: &str) -> Option<Effects> {
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            EFFECT_NAMES.get(name.to_ascii_lowercase().as_str()).copied()
        } else {
            EFFECT_NAMES.get(name).copied()
        }
    }

    /// The underline to draw. Double underline wins when both flags are set.
    pub fn underline(self) -> Option<Underline> {
        if self.contains(Effects::DOUBLE_UNDERLINE) {
            Some(Underline::Double)
        } else if self.contains(Effects::UNDERLINE) {
            Some(Underline::Single)
        } else {
            None
        }
    }

    /// The alignment to apply. Checked in the order right, center, left.
    pub fn alignment(self) -> Option<Alignment> {
        if self.contains(Effects::RIGHT) {
            Some(Alignment::Right)
        } else if self.contains(Effects::CENTER) {
            Some(Alignment::Center)
        } else if self.contains(Effects::LEFT) {
            Some(Alignment::Left)
        } else {
            None
        }
    }

    /// Apply the all-caps transform to `text` when it is set.
    pub fn transform_case(self, text: &str) -> Cow<'_, str> {
        if self.contains(Effects::ALL_CAPS) {
            Cow::Owned(text.to_uppercase())
        } else {
            Cow::Borrowed(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_flag_has_a_name() {
        for flag in Effects::all().iter() {
            assert!(
                EFFECT_NAMES.values().any(|named| *named == flag),
                "unnamed flag {flag:?}"
            );
        }
    }

    #[test]
    fn markup_names_are_not_flag_names() {
        assert_eq!(
            Effects::from_markup_name("doubleunderline"),
            Some(Effects::DOUBLE_UNDERLINE)
        );
        assert_eq!(
            Effects::from_markup_name("DOUBLEUNDERLINE"),
            Some(Effects::DOUBLE_UNDERLINE)
        );
        assert_eq!(Effects::from_markup_name("DOUBLE_UNDERLINE"), None);

        // The bitflags-generated lookup still matches constant names exactly.
        assert_eq!(
            Effects::from_name("DOUBLE_UNDERLINE"),
            Some(Effects::DOUBLE_UNDERLINE)
        );
        assert_eq!(Effects::from_name("doubleunderline"), None);
        assert_eq!(Effects::from_name("ALL_CAPS"), Some(Effects::ALL_CAPS));
    }

    #[test]
    fn double_underline_wins() {
        let both = Effects::UNDERLINE | Effects::DOUBLE_UNDERLINE;
        assert_eq!(both.underline(), Some(Underline::Double));
        assert_eq!(Effects::UNDERLINE.underline(), Some(Underline::Single));
        assert_eq!(Effects::ITALICS.underline(), None);
    }

    #[test]
    fn alignment_precedence() {
        assert_eq!(
            (Effects::LEFT | Effects::CENTER | Effects::RIGHT).alignment(),
            Some(Alignment::Right)
        );
        assert_eq!(
            (Effects::LEFT | Effects::CENTER).alignment(),
            Some(Alignment::Center)
        );
        assert_eq!(Effects::LEFT.alignment(), Some(Alignment::Left));
        assert_eq!(Effects::empty().alignment(), None);
    }

    #[test]
    fn all_caps_uppercases() {
        assert_eq!(Effects::ALL_CAPS.transform_case("straße"), "STRASSE");
        assert!(matches!(
            Effects::ITALICS.transform_case("plain"),
            Cow::Borrowed("plain")
        ));
    }
}
