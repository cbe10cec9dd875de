//! View layer
//!
//! Coordinate translation and scrolling live in `viewport`; drawing a
//! session onto a ratatui frame lives in `render` and `status_bar`, with
//! `display` deciding what each buffer character looks like in its cell.

pub mod display;
pub mod render;
pub mod status_bar;
pub mod viewport;
