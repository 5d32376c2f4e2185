//! Placeholder icon generator for the Sanketa browser extension.
//!
//! Each icon is a vertical purple gradient with a white "S" and a soft shadow.

pub mod glyph;
pub mod icon_gen;
