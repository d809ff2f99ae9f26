//! Attribute resolver for open tags.
//!
//! Turns the attribute list of one `[...]` tag into a [`Style`]. Each
//! attribute may carry a slot prefix (`f:` foreground, `b:` background) and is
//! then checked against the effect names, the color palette, and the
//! `(R,G,B)` literal form. The effect check and the color checks are
//! independent, so a name present in both tables would contribute to both.
//! Attributes that match nothing are dropped.

use log::trace;

use crate::color::Color;
use crate::effects::Effects;
use crate::palette;
use crate::style::{Style, merge};

/// Which color slot an attribute assigns to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Target {
    #[default]
    Foreground,
    Background,
}

impl Target {
    /// Split a slot prefix off `attribute`.
    ///
    /// ```
    /// use tintmark::parser::Target;
    ///
    /// assert_eq!(Target::split("B:red"), (Target::Background, "red"));
    /// assert_eq!(Target::split("f:red"), (Target::Foreground, "red"));
    /// assert_eq!(Target::split("red"), (Target::Foreground, "red"));
    /// ```
    pub fn split(attribute: &str) -> (Target, &str) {
        if let Some(rest) = strip_prefix_ignore_case(attribute, "b:") {
            (Target::Background, rest)
        } else if let Some(rest) = strip_prefix_ignore_case(attribute, "f:") {
            (Target::Foreground, rest)
        } else {
            (Target::Foreground, attribute)
        }
    }
}

fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &input[prefix.len()..])
}

/// Build the style described by a tag's attributes alone.
///
/// ```
/// use tintmark::parser::resolve_attributes;
/// use tintmark::{Color, Effects};
///
/// let style = resolve_attributes(&["red", "b:(0,0,64)", "Italics"]);
/// assert_eq!(style.fg, Some(Color::RED));
/// assert_eq!(style.bg, Some(Color::new(0, 0, 64)));
/// assert_eq!(style.effects, Effects::ITALICS);
/// ```
pub fn resolve_attributes(attributes: &[&str]) -> Style {
    let mut style = Style::new();
    for attribute in attributes {
        apply_attribute(&mut style, attribute);
    }
    style
}

/// Resolve a tag's attributes and merge the result over `base`.
pub fn resolve_tag(attributes: &[&str], base: &Style) -> Style {
    merge(base, &resolve_attributes(attributes))
}

fn apply_attribute(style: &mut Style, attribute: &str) {
    let (target, name) = Target::split(attribute);
    let mut matched = false;

    if let Some(effect) = Effects::from_markup_name(name) {
        style.effects |= effect;
        matched = true;
    }

    if let Some(color) = palette::lookup(name).or_else(|| Color::parse_literal(name)) {
        match target {
            Target::Foreground => style.fg = Some(color),
            Target::Background => style.bg = Some(color),
        }
        matched = true;
    }

    if !matched {
        trace!("ignoring markup attribute {attribute:?}");
    }
}
