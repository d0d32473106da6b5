//! Library portion of the deckface CLI: spec parsing and command
//! implementations, kept out of main.rs so they are testable.

pub mod commands;
pub mod spec;
