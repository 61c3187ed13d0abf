//! Core utilities for the glyphforge icon generator.
//!
//! This crate provides the fundamental pieces shared across the glyphforge
//! workspace: string-case conversion, the [`GeneratedFile`] write trait, and
//! the [`Console`] sink used for operational output.

mod console;
mod file;
mod naming;

pub use console::{Console, TerminalConsole};
pub use file::{GeneratedFile, write_file};
pub use naming::to_pascal_case;
