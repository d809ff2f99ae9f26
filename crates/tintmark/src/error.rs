//! Error types for standalone color parsing.
//!
//! Markup rendering itself never fails on malformed input; these errors are
//! only returned by the explicit parsing APIs such as [`Color::parse`].
//!
//! [`Color::parse`]: crate::Color::parse

use thiserror::Error;

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Nothing to parse.
    #[error("empty color specification")]
    Empty,

    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Invalid `(R,G,B)` literal.
    #[error("invalid RGB color: {0}")]
    InvalidRgb(String),

    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}
