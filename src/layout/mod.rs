//! Generic text layout utilities: measuring strings, centring them, and
//! wrapping words into lines of bounded width.
//!
//! These helpers know nothing about badges; the badge layout engine in
//! [`crate::badge`] builds its field heuristics on top of them.

mod margins;
mod text;

pub use margins::*;
pub use text::*;
