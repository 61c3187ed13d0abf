//! Shared string-case utilities.

/// Convert a string to PascalCase (e.g., "arrow-left" -> "ArrowLeft").
///
/// Splits on every non-alphanumeric character; each segment's first character
/// is uppercased and the rest is preserved as written.
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}
