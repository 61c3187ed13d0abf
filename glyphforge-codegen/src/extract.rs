//! Body extraction and sanitization.
//!
//! Extraction relies on the transformer contract: exactly one top-level
//! `<svg>` element, no nested same-named elements, so first-open/first-close
//! matching finds the right pair.

/// Extract the sanitized inner fragment from a transformed component
/// expression of the shape `export default () => (<svg …>…</svg>);`.
///
/// Returns `None` when no balanced `<svg>` pair is present, which means the
/// transformer broke its contract.
pub fn extract_body(component_expr: &str) -> Option<String> {
    let open = component_expr.find("<svg")?;
    let after_open = &component_expr[open..];
    let open_len = after_open.find('>')? + 1;
    let inner = &after_open[open_len..];
    let close = inner.find("</svg>")?;
    Some(sanitize_body(&inner[..close]))
}

/// Strip every `fill="…"` and `stroke="…"` attribute from a raw body
/// fragment and trim surrounding whitespace.
///
/// Per-element color overrides are removed so the generated component's
/// top-level fill/stroke is the only color authority.
pub fn sanitize_body(raw: &str) -> String {
    let without_fill = strip_attribute(raw, "fill");
    let without_stroke = strip_attribute(&without_fill, "stroke");
    without_stroke.trim().to_string()
}

/// Remove every double-quoted `name="value"` attribute occurrence.
///
/// A match must be a whole attribute name: `stroke="…"` is removed while
/// `data-stroke="…"` and `stroke-width="…"` are left alone.
pub(crate) fn strip_attribute(fragment: &str, name: &str) -> String {
    let needle = format!("{}=\"", name);

    let mut out = String::with_capacity(fragment.len());
    let mut rest = fragment;
    while let Some(idx) = rest.find(&needle) {
        let value_start = idx + needle.len();
        let whole_name = rest[..idx]
            .chars()
            .next_back()
            .is_none_or(char::is_whitespace);
        let Some(value_len) = rest[value_start..].find('"') else {
            break;
        };
        if whole_name {
            out.push_str(rest[..idx].trim_end());
            rest = &rest[value_start + value_len + 1..];
            // keep the tag well-formed when another attribute follows directly
            if !rest.is_empty()
                && !rest.starts_with(|c: char| c.is_whitespace() || c == '>' || c == '/')
            {
                out.push(' ');
            }
        } else {
            out.push_str(&rest[..value_start]);
            rest = &rest[value_start..];
        }
    }
    out.push_str(rest);
    out
}
