//! Shared CLI utilities

pub mod formatting;
