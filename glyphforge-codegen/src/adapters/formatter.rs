//! Source formatting adapter.

use super::AdapterResult;

/// Pretty-prints generated source text.
///
/// The component template produces already-indented output, so the default
/// stays out of layout decisions; swap in a real formatter to enforce a
/// house style.
pub trait Formatter {
    fn format(&self, source: &str) -> AdapterResult<String>;
}

/// Default formatter: normalizes trailing whitespace to a single newline.
pub struct TrailingNewlineFormatter;

impl Formatter for TrailingNewlineFormatter {
    fn format(&self, source: &str) -> AdapterResult<String> {
        let mut formatted = source.trim_end().to_string();
        formatted.push('\n');
        Ok(formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_trailing_whitespace() {
        assert_eq!(TrailingNewlineFormatter.format("let x = 1;\n\n\n").unwrap(), "let x = 1;\n");
        assert_eq!(TrailingNewlineFormatter.format("let x = 1;").unwrap(), "let x = 1;\n");
    }
}
