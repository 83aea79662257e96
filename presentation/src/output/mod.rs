//! Final report formatting

pub mod console;
