//! Output configuration for the terminal sink.
//!
//! Configuration is handed to [`AnsiSink::new`] explicitly; nothing here is
//! global. It can be built in code or loaded from TOML:
//!
//! ```toml
//! # true-color, ansi256, or no-color
//! color_mode = "ansi256"
//!
//! # utf8 or ascii
//! encoding = "utf8"
//!
//! # Line width used for center/right alignment (optional;
//! # defaults to the terminal width)
//! width = 100
//!
//! reset_after_run = true
//! ```
//!
//! [`AnsiSink::new`]: crate::AnsiSink::new

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TermError};

/// How colors are written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// 24-bit SGR colors.
    #[default]
    TrueColor,
    /// Colors quantized to the xterm 256-color palette.
    #[serde(rename = "ansi256")]
    Ansi256,
    /// No escape sequences at all. Text transforms and padding still apply.
    NoColor,
}

/// Character set the terminal accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputEncoding {
    #[default]
    Utf8,
    /// Non-ASCII characters are replaced with `?`.
    Ascii,
}

impl OutputEncoding {
    /// Convert `text` into something the terminal can display.
    pub fn encode<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            OutputEncoding::Ascii if !text.is_ascii() => Cow::Owned(
                text.chars()
                    .map(|c| if c.is_ascii() { c } else { '?' })
                    .collect(),
            ),
            _ => Cow::Borrowed(text),
        }
    }
}

/// Sink configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Color output mode
    pub color_mode: ColorMode,
    /// Output character set
    pub encoding: OutputEncoding,
    /// Line width for alignment; `None` asks the terminal
    pub width: Option<u16>,
    /// Reset attributes after each styled run
    pub reset_after_run: bool,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::default(),
            encoding: OutputEncoding::default(),
            width: None,
            reset_after_run: true,
        }
    }
}

impl SinkConfig {
    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    pub fn with_encoding(mut self, encoding: OutputEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Parse configuration from a TOML document. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TermError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("loaded sink config from {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SinkConfig::default();
        assert_eq!(config.color_mode, ColorMode::TrueColor);
        assert_eq!(config.encoding, OutputEncoding::Utf8);
        assert_eq!(config.width, None);
        assert!(config.reset_after_run);
    }

    #[test]
    fn parse_full_toml() {
        let config = SinkConfig::from_toml_str(
            r#"
            color_mode = "ansi256"
            encoding = "ascii"
            width = 40
            reset_after_run = false
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            SinkConfig {
                color_mode: ColorMode::Ansi256,
                encoding: OutputEncoding::Ascii,
                width: Some(40),
                reset_after_run: false,
            }
        );
    }

    #[test]
    fn parse_partial_toml() {
        let config = SinkConfig::from_toml_str(r#"color_mode = "no-color""#).unwrap();
        assert_eq!(config.color_mode, ColorMode::NoColor);
        assert!(config.reset_after_run);
        assert_eq!(SinkConfig::from_toml_str("").unwrap(), SinkConfig::default());
    }

    #[test]
    fn parse_invalid_toml() {
        assert!(matches!(
            SinkConfig::from_toml_str(r#"color_mode = "sepia""#),
            Err(TermError::Config(_))
        ));
    }

    #[test]
    fn ascii_encoding_replaces() {
        assert_eq!(OutputEncoding::Ascii.encode("naïve ✓"), "na?ve ?");
        assert_eq!(OutputEncoding::Utf8.encode("naïve ✓"), "naïve ✓");
        assert!(matches!(OutputEncoding::Ascii.encode("plain"), Cow::Borrowed(_)));
    }
}
