//! SVG to React component generation pipeline for glyphforge.
//!
//! This crate turns a directory of SVG source files into a set of typed,
//! accessible React components plus two batch artifacts: a barrel export
//! module and a machine-readable metadata index.
//!
//! # Usage
//!
//! This crate is used internally by the `glyphforge` CLI tool. You typically
//! don't need to use it directly.
//!
//! ```ignore
//! use glyphforge_codegen::{GenerationOptions, Generator};
//! use glyphforge_core::TerminalConsole;
//!
//! let options = GenerationOptions {
//!     source_dir: "icons".into(),
//!     output_dir: "src/icons".into(),
//!     prefix: None,
//!     size: 24.0,
//!     stroke_width: 2.0,
//!     filled: false,
//! };
//! let manifest = Generator::new(options).generate(&mut TerminalConsole::new())?;
//! ```
//!
//! # Generated Output
//!
//! For a source tree containing `arrow-left.svg` and `circle.svg`:
//!
//! - `ArrowLeft.tsx`, `Circle.tsx` - one component per surviving input
//! - `index.ts` - barrel re-exports, in enumeration order
//! - `icons.json` - `{ count, icons: [{ name, file, tags }] }`

pub mod adapters;

mod enumerate;
mod error;
mod extract;
mod files;
mod generator;
mod manifest;
mod naming;
mod options;
mod validate;

pub use enumerate::enumerate_sources;
pub use error::{Error, Result};
pub use extract::{extract_body, sanitize_body};
pub use files::{ComponentTsx, IconsJson, IndexTs};
pub use generator::Generator;
pub use manifest::{IconRecord, Manifest};
pub use naming::{DerivedNames, base_name};
pub use options::GenerationOptions;
pub use validate::is_vector_document;
