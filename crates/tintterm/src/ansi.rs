//! ANSI terminal sink.
//!
//! Writes styled runs as SGR escape sequences through crossterm. Effect
//! conflicts are settled here: double underline suppresses the single
//! underline, and only one alignment applies (right, then center, then left).
//!
//! Alignment is measured against the whole output line. The sink tracks the
//! column it has written up to, and consecutive runs sharing a right or center
//! alignment on one line are held back and placed as a single block. The block
//! is written when the line ends, a differently aligned run arrives, or
//! [`AnsiSink::finish`] is called.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use log::debug;
use tintmark::{Alignment, Color, Effects, Sink, Underline};
use unicode_display_width::width as display_width_impl;

use crate::config::{ColorMode, SinkConfig};
use crate::error::TermError;

/// Fallback line width when the terminal size cannot be queried.
const DEFAULT_WIDTH: u16 = 80;

/// Effects that produce an SGR attribute. The others are transforms.
const ATTRIBUTE_EFFECTS: Effects = Effects::ITALICS
    .union(Effects::UNDERLINE)
    .union(Effects::DOUBLE_UNDERLINE)
    .union(Effects::STRIKETHROUGH)
    .union(Effects::OVERLINE)
    .union(Effects::BLINK);

/// A line fragment waiting for its aligned block to be placed.
#[derive(Debug)]
struct PendingRun {
    text: String,
    fg: Option<Color>,
    bg: Option<Color>,
    effects: Effects,
}

/// A [`Sink`] that writes ANSI-styled text to any writer.
///
/// Right- and center-aligned runs are buffered until their line is complete.
/// Call [`finish`](AnsiSink::finish) (or [`flush`](AnsiSink::flush)) before
/// taking the writer back with [`into_inner`](AnsiSink::into_inner); buffered
/// runs are discarded otherwise.
#[derive(Debug)]
pub struct AnsiSink<W: Write> {
    out: W,
    config: SinkConfig,
    /// Display column of the next character on the current line.
    column: usize,
    pending: Vec<PendingRun>,
    pending_alignment: Option<Alignment>,
}

impl<W: Write> AnsiSink<W> {
    pub fn new(out: W, config: SinkConfig) -> Self {
        debug!("creating ANSI sink with {config:?}");
        Self {
            out,
            config,
            column: 0,
            pending: Vec::new(),
            pending_alignment: None,
        }
    }

    pub fn config(&self) -> &SinkConfig {
        &self.config
    }

    /// The display column the next character will land on.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Write text with no styling or transforms.
    pub fn write_raw(&mut self, text: &str) -> Result<(), TermError> {
        self.finish()?;
        let text = self.config.encoding.encode(text);
        self.out.write_all(text.as_bytes())?;
        self.advance(&text);
        Ok(())
    }

    /// Place any buffered aligned runs on the current line.
    pub fn finish(&mut self) -> Result<(), TermError> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let pending = std::mem::take(&mut self.pending);
        let alignment = self.pending_alignment.take();
        let total: usize = pending.iter().map(|run| display_width(&run.text)).sum();

        let width = self.line_width();
        let pad = match alignment {
            Some(Alignment::Right) => width.saturating_sub(self.column + total),
            Some(Alignment::Center) => (width.saturating_sub(total) / 2).saturating_sub(self.column),
            Some(Alignment::Left) | None => 0,
        };
        if pad > 0 {
            queue!(self.out, Print(" ".repeat(pad)))?;
            self.column += pad;
        }

        for run in &pending {
            self.write_run(&run.text, run.fg, run.bg, run.effects)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), TermError> {
        self.finish()?;
        self.out.flush()?;
        Ok(())
    }

    /// Consume the sink, returning the writer. Runs still buffered for
    /// alignment are dropped.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line_width(&self) -> usize {
        let width = self.config.width.unwrap_or_else(|| {
            crossterm::terminal::size()
                .map(|(cols, _)| cols)
                .unwrap_or(DEFAULT_WIDTH)
        });
        usize::from(width)
    }

    fn advance(&mut self, text: &str) {
        match text.rsplit_once('\n') {
            Some((_, last)) => self.column = display_width(last),
            None => self.column += display_width(text),
        }
    }

    /// Write one single-line fragment with its style and advance the column.
    fn write_run(
        &mut self,
        text: &str,
        fg: Option<Color>,
        bg: Option<Color>,
        effects: Effects,
    ) -> Result<(), TermError> {
        let styled = self.config.color_mode != ColorMode::NoColor
            && (fg.is_some() || bg.is_some() || effects.intersects(ATTRIBUTE_EFFECTS));

        if styled {
            self.set_style(fg, bg, effects)?;
        }
        queue!(self.out, Print(text))?;
        if styled && self.config.reset_after_run {
            queue!(self.out, SetAttribute(Attribute::Reset))?;
        }
        self.column += display_width(text);
        Ok(())
    }

    fn set_style(
        &mut self,
        fg: Option<Color>,
        bg: Option<Color>,
        effects: Effects,
    ) -> Result<(), TermError> {
        if let Some(fg) = fg {
            let fg = self.term_color(fg);
            queue!(self.out, SetForegroundColor(fg))?;
        }
        if let Some(bg) = bg {
            let bg = self.term_color(bg);
            queue!(self.out, SetBackgroundColor(bg))?;
        }

        if effects.contains(Effects::ITALICS) {
            queue!(self.out, SetAttribute(Attribute::Italic))?;
        }
        match effects.underline() {
            Some(Underline::Double) => queue!(self.out, SetAttribute(Attribute::DoubleUnderlined))?,
            Some(Underline::Single) => queue!(self.out, SetAttribute(Attribute::Underlined))?,
            None => {}
        }
        if effects.contains(Effects::STRIKETHROUGH) {
            queue!(self.out, SetAttribute(Attribute::CrossedOut))?;
        }
        if effects.contains(Effects::OVERLINE) {
            queue!(self.out, SetAttribute(Attribute::OverLined))?;
        }
        if effects.contains(Effects::BLINK) {
            queue!(self.out, SetAttribute(Attribute::SlowBlink))?;
        }
        Ok(())
    }

    fn term_color(&self, color: Color) -> TermColor {
        let (r, g, b) = color.to_rgb();
        match self.config.color_mode {
            ColorMode::Ansi256 => TermColor::AnsiValue(ansi256(color)),
            ColorMode::TrueColor | ColorMode::NoColor => TermColor::Rgb { r, g, b },
        }
    }
}

impl<W: Write> Sink for AnsiSink<W> {
    type Error = TermError;

    fn emit(
        &mut self,
        text: &str,
        fg: Option<Color>,
        bg: Option<Color>,
        effects: Effects,
    ) -> Result<(), TermError> {
        let text = effects.transform_case(text);
        let text = self.config.encoding.encode(&text);
        let alignment = match effects.alignment() {
            Some(Alignment::Left) | None => None,
            aligned => aligned,
        };

        for (index, line) in text.split('\n').enumerate() {
            if index > 0 {
                self.finish()?;
                queue!(self.out, Print('\n'))?;
                self.column = 0;
            }
            if line.is_empty() {
                continue;
            }

            if alignment.is_some() {
                if self.pending_alignment != alignment {
                    self.finish()?;
                    self.pending_alignment = alignment;
                }
                self.pending.push(PendingRun {
                    text: line.to_string(),
                    fg,
                    bg,
                    effects,
                });
            } else {
                self.finish()?;
                self.write_run(line, fg, bg, effects)?;
            }
        }

        Ok(())
    }
}

pub(crate) fn display_width(text: &str) -> usize {
    display_width_impl(text) as usize
}

/// Channel levels of the xterm 6x6x6 color cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Nearest xterm 256-color index, choosing between the color cube and the
/// grayscale ramp.
pub(crate) fn ansi256(color: Color) -> u8 {
    let (r, g, b) = color.to_rgb();

    let cube_index = |c: u8| -> usize {
        CUBE_LEVELS
            .iter()
            .enumerate()
            .min_by_key(|(_, level)| (i32::from(**level) - i32::from(c)).abs())
            .map_or(0, |(i, _)| i)
    };
    let (ri, gi, bi) = (cube_index(r), cube_index(g), cube_index(b));
    let cube = (CUBE_LEVELS[ri], CUBE_LEVELS[gi], CUBE_LEVELS[bi]);

    // Gray ramp: 232..=255 covers levels 8, 18, ..., 238.
    let average = (u32::from(r) + u32::from(g) + u32::from(b)) / 3;
    let gray_step = (average.saturating_sub(3) / 10).min(23) as u8;
    let gray_level = 8 + gray_step * 10;

    let distance = |(cr, cg, cb): (u8, u8, u8)| {
        let d = |a: u8, b: u8| (i32::from(a) - i32::from(b)).pow(2);
        d(cr, r) + d(cg, g) + d(cb, b)
    };

    if distance((gray_level, gray_level, gray_level)) < distance(cube) {
        232 + gray_step
    } else {
        (16 + 36 * ri + 6 * gi + bi) as u8
    }
}
