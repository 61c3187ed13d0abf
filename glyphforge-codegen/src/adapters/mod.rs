//! External-engine adapter contracts.
//!
//! The pipeline delegates markup optimization, markup-to-component
//! transformation, and source formatting to swappable adapters. The core
//! depends only on the traits here; the default implementations satisfy
//! exactly the contracted behavior and nothing more.

mod formatter;
mod optimizer;
mod transformer;

use thiserror::Error;

pub use formatter::{Formatter, TrailingNewlineFormatter};
pub use optimizer::{MarkupOptimizer, Optimizer};
pub use transformer::{ExpressionTransformer, Transformer};

/// Error raised by an adapter implementation.
///
/// Adapter failures are fatal for the whole run: adapters only ever see
/// documents that already passed validation, so a failure means the adapter
/// itself is broken, not the input.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct AdapterError(pub String);

pub type AdapterResult<T> = std::result::Result<T, AdapterError>;
