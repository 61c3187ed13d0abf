//! Markup-to-component transformation adapter.

use super::AdapterResult;

/// Turns optimized markup into a component expression of the shape
/// `export default () => (<svg …>…</svg>);`.
///
/// Contract the body extractor relies on: the output contains exactly one
/// top-level `<svg>` element with an explicit closing tag, and no nested
/// `<svg>` elements inside it. Implementations that break this invariant
/// break extraction.
pub trait Transformer {
    fn transform(&self, markup: &str) -> AdapterResult<String>;
}

/// Default transformer: wraps the markup in a default-export arrow
/// expression, matching the fixed rendering template the pipeline expects.
///
/// A self-closing root (`<svg …/>`) is expanded to an explicit open/close
/// pair first, upholding the balanced-pair contract above for childless
/// documents.
pub struct ExpressionTransformer;

impl Transformer for ExpressionTransformer {
    fn transform(&self, markup: &str) -> AdapterResult<String> {
        let markup = expand_self_closing_root(markup.trim());
        Ok(format!("export default () => ({});", markup))
    }
}

/// Rewrite a self-closing root tag as `<svg …></svg>`.
fn expand_self_closing_root(markup: &str) -> String {
    let Some(start) = markup.find("<svg") else {
        return markup.to_string();
    };
    let Some(len) = markup[start..].find('>') else {
        return markup.to_string();
    };
    let close = start + len;
    if !markup[..close].ends_with('/') {
        return markup.to_string();
    }
    format!(
        "{}></svg>{}",
        markup[..close - 1].trim_end(),
        &markup[close + 1..]
    )
}
