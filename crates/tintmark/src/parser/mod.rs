//! Parser for tint markup.
//!
//! This module contains the scanner, the attribute resolver, and the
//! style-stack renderer.

mod lexer;
mod markup;
mod tag;

pub use lexer::{Scanner, Token};
pub use markup::{StyleStack, render};
pub use tag::{Target, resolve_attributes, resolve_tag};
