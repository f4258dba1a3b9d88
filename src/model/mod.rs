//! Block sequence model for Markdown to PDF conversion.
//!
//! This module defines the intermediate representation (IR) that bridges
//! line classification and PDF rendering. A conversion produces an ordered
//! `Vec<Block>` which is handed to the layout engine exactly once and then
//! discarded.

mod block;
mod style;

pub use block::{Block, HeadingLevel};
pub use style::{Alignment, BlockStyle, StyleSheet};
