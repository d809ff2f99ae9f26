//! Style-stack renderer.
//!
//! Drives the scanner and the attribute resolver, forwarding each text run
//! to a [`Sink`] under the style on top of the stack.

use log::trace;

use crate::sink::Sink;
use crate::style::Style;

use super::lexer::{Scanner, Token};
use super::tag::resolve_tag;

/// Render markup into `sink`.
///
/// Malformed markup never fails; the only error this returns is one raised
/// by the sink itself.
///
/// # Examples
///
/// ```
/// use tintmark::parser::render;
/// use tintmark::{Color, StyledRun, Style};
///
/// let mut runs: Vec<StyledRun> = Vec::new();
/// render("[red]Hello[/] World", &mut runs).unwrap();
///
/// assert_eq!(runs.len(), 2);
/// assert_eq!(runs[0].style, Style::new().with_fg(Color::RED));
/// assert!(runs[1].style.is_default());
/// ```
pub fn render<S: Sink + ?Sized>(input: &str, sink: &mut S) -> Result<(), S::Error> {
    let mut stack = StyleStack::new();

    for (token, _) in Scanner::new(input) {
        match token {
            Token::EndOfInput => break,
            Token::CloseTag => {
                if stack.pop().is_none() {
                    trace!("ignoring unmatched close tag");
                }
            }
            Token::OpenTag(attributes) => {
                let style = resolve_tag(&attributes, stack.top());
                stack.push(style);
            }
            Token::Text(text) => {
                sink.emit_styled(text, stack.top())?;
            }
        }
    }

    Ok(())
}

/// Stack of resolved styles for nested markup scopes.
///
/// The bottom entry is the default style and can never be popped, so the
/// stack is never empty.
#[derive(Clone, Debug)]
pub struct StyleStack {
    styles: Vec<Style>,
}

impl StyleStack {
    pub fn new() -> Self {
        Self {
            styles: vec![Style::new()],
        }
    }

    /// The style in effect for text at this point.
    pub fn top(&self) -> &Style {
        // Invariant: the default entry is never removed.
        &self.styles[self.styles.len() - 1]
    }

    /// Push an already resolved style.
    pub fn push(&mut self, style: Style) {
        self.styles.push(style);
    }

    /// Merge `overlay` over the current top and push the result.
    pub fn push_overlay(&mut self, overlay: &Style) {
        let merged = self.top().apply(overlay);
        self.styles.push(merged);
    }

    /// Pop the innermost scope. Returns `None` and leaves the stack
    /// untouched when only the default entry remains.
    pub fn pop(&mut self) -> Option<Style> {
        if self.styles.len() > 1 {
            self.styles.pop()
        } else {
            None
        }
    }

    /// Number of open scopes above the default entry.
    pub fn depth(&self) -> usize {
        self.styles.len() - 1
    }
}

impl Default for StyleStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::effects::Effects;
    use crate::markup::StyledRun;

    fn runs(input: &str) -> Vec<StyledRun> {
        let mut runs = Vec::new();
        render(input, &mut runs).unwrap();
        runs
    }

    #[test]
    fn render_plain_text() {
        assert_eq!(runs("Hello World"), vec![StyledRun::plain("Hello World")]);
    }

    #[test]
    fn render_empty_input() {
        assert!(runs("").is_empty());
    }

    #[test]
    fn render_restores_enclosing_style() {
        let red = Style::new().with_fg(Color::RED);
        assert_eq!(
            runs("[red]a[italics]b[/]c[/]d"),
            vec![
                StyledRun::new("a", red),
                StyledRun::new("b", red.with_effects(Effects::ITALICS)),
                StyledRun::new("c", red),
                StyledRun::plain("d"),
            ]
        );
    }

    #[test]
    fn render_ignores_unmatched_close() {
        assert_eq!(runs("[/][/][/]text"), vec![StyledRun::plain("text")]);
    }

    #[test]
    fn render_unclosed_scope_applies_to_end() {
        let blink = Style::new().with_effects(Effects::BLINK);
        assert_eq!(
            runs("[blink]a\\[b"),
            vec![
                StyledRun::new("a", blink),
                StyledRun::new("[", blink),
                StyledRun::new("b", blink),
            ]
        );
    }

    #[test]
    fn stack_floor_holds() {
        let mut stack = StyleStack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.depth(), 0);

        stack.push_overlay(&Style::new().with_fg(Color::RED));
        stack.push_overlay(&Style::new().with_effects(Effects::OVERLINE));
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top().fg, Some(Color::RED));
        assert_eq!(stack.top().effects, Effects::OVERLINE);

        assert!(stack.pop().is_some());
        assert!(stack.pop().is_some());
        assert_eq!(stack.pop(), None);
        assert!(stack.top().is_default());
    }
}
