//! Markup optimization adapter.

use super::AdapterResult;
use crate::extract::strip_attribute;

/// Normalizes raw vector markup before transformation.
///
/// Contract (fixed configuration): strip width/height attributes from the
/// root element, convert inline `style="…"` attributes to presentation
/// attributes, and strip namespace declarations.
pub trait Optimizer {
    fn optimize(&self, markup: &str) -> AdapterResult<String>;
}

/// Default optimizer implementing the contracted rule set.
pub struct MarkupOptimizer;

impl MarkupOptimizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkupOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Optimizer for MarkupOptimizer {
    fn optimize(&self, markup: &str) -> AdapterResult<String> {
        let markup = strip_root_dimensions(markup);
        let markup = inline_style_to_attributes(&markup);
        Ok(strip_namespace_declarations(&markup))
    }
}

/// Remove width/height attributes from the root `<svg>` tag only.
fn strip_root_dimensions(markup: &str) -> String {
    let Some(start) = markup.find("<svg") else {
        return markup.to_string();
    };
    let Some(len) = markup[start..].find('>') else {
        return markup.to_string();
    };
    let end = start + len + 1;

    let mut root = markup[start..end].to_string();
    root = strip_attribute(&root, "width");
    root = strip_attribute(&root, "height");
    format!("{}{}{}", &markup[..start], root, &markup[end..])
}

/// Rewrite every `style="a: b; c: d"` attribute as `a="b" c="d"`.
fn inline_style_to_attributes(markup: &str) -> String {
    const NEEDLE: &str = "style=\"";

    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(idx) = rest.find(NEEDLE) {
        let value_start = idx + NEEDLE.len();
        let whole_name = rest[..idx]
            .chars()
            .next_back()
            .is_none_or(|c| c.is_whitespace());
        let Some(len) = rest[value_start..].find('"') else {
            break;
        };
        if !whole_name {
            out.push_str(&rest[..value_start]);
            rest = &rest[value_start..];
            continue;
        }

        let declarations = &rest[value_start..value_start + len];
        let attributes = declarations
            .split(';')
            .filter_map(|decl| decl.split_once(':'))
            .map(|(property, value)| format!("{}=\"{}\"", property.trim(), value.trim()))
            .collect::<Vec<_>>()
            .join(" ");

        if attributes.is_empty() {
            // drop the attribute and its leading whitespace entirely
            out.push_str(rest[..idx].trim_end());
        } else {
            out.push_str(&rest[..idx]);
            out.push_str(&attributes);
        }
        rest = &rest[value_start + len + 1..];
    }
    out.push_str(rest);
    out
}

/// Remove `xmlns="…"` and `xmlns:prefix="…"` declarations everywhere.
fn strip_namespace_declarations(markup: &str) -> String {
    const NEEDLE: &str = " xmlns";

    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(idx) = rest.find(NEEDLE) {
        let after_name = &rest[idx + NEEDLE.len()..];
        let declaration = after_name.find("=\"").and_then(|eq| {
            let suffix = &after_name[..eq];
            let name_ok = suffix.is_empty()
                || (suffix.starts_with(':')
                    && suffix[1..].chars().all(|c| c.is_ascii_alphanumeric()));
            if !name_ok {
                return None;
            }
            let value_start = eq + 2;
            let value_len = after_name[value_start..].find('"')?;
            Some(NEEDLE.len() + value_start + value_len + 1)
        });

        match declaration {
            Some(len) => {
                out.push_str(&rest[..idx]);
                rest = &rest[idx + len..];
            }
            None => {
                out.push_str(&rest[..idx + NEEDLE.len()]);
                rest = &rest[idx + NEEDLE.len()..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_root_dimensions_only() {
        let markup = r#"<svg width="24" height="24"><rect width="10" height="10"/></svg>"#;
        let result = MarkupOptimizer.optimize(markup).unwrap();
        assert_eq!(result, r#"<svg><rect width="10" height="10"/></svg>"#);
    }

    #[test]
    fn test_converts_inline_style_to_attributes() {
        let markup = r#"<svg><path style="fill: red; opacity: 0.5" d="M0 0"/></svg>"#;
        let result = MarkupOptimizer.optimize(markup).unwrap();
        assert_eq!(result, r#"<svg><path fill="red" opacity="0.5" d="M0 0"/></svg>"#);
    }

    #[test]
    fn test_empty_style_leaves_no_leftover_whitespace() {
        let markup = r#"<svg><path style="" d="M0 0"/><rect style=" ; "/></svg>"#;
        let result = MarkupOptimizer.optimize(markup).unwrap();
        assert_eq!(result, r#"<svg><path d="M0 0"/><rect/></svg>"#);
    }

    #[test]
    fn test_strips_namespace_declarations() {
        let markup = r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 24 24"></svg>"#;
        let result = MarkupOptimizer.optimize(markup).unwrap();
        assert_eq!(result, r#"<svg viewBox="0 0 24 24"></svg>"#);
    }

    #[test]
    fn test_optimize_is_idempotent() {
        let markup = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16"><path style="fill: red" d="M0 0"/></svg>"#;
        let once = MarkupOptimizer.optimize(markup).unwrap();
        let twice = MarkupOptimizer.optimize(&once).unwrap();
        assert_eq!(once, twice);
    }
}
