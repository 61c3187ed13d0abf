//! Vector document validation.

/// Marker every processable vector document must contain.
pub const SVG_ROOT_MARKER: &str = "<svg";

/// Check whether `content` looks like vector markup.
///
/// Files failing this check are skipped with a warning; they never abort
/// the batch.
pub fn is_vector_document(content: &str) -> bool {
    content.contains(SVG_ROOT_MARKER)
}
