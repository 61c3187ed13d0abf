//! Deterministic name derivation.

use glyphforge_core::to_pascal_case;

/// Identifiers derived from one source file's base name.
#[derive(Debug, Clone)]
pub struct DerivedNames {
    /// Exported component name, PascalCase, optionally prefixed.
    pub component_ident: String,
    /// Output file stem and barrel import specifier, never prefixed.
    pub file_ident: String,
    /// Lowercase tokens from splitting the base name on `-`. Empty tokens
    /// from consecutive hyphens are preserved as-is.
    pub tags: Vec<String>,
}

impl DerivedNames {
    pub fn derive(relative_path: &str, prefix: Option<&str>) -> Self {
        let base = base_name(relative_path);
        let file_ident = to_pascal_case(base);
        let component_ident = match prefix {
            // prefix and base name merge into a single casing pass
            Some(prefix) => to_pascal_case(&format!("{prefix}{base}")),
            None => file_ident.clone(),
        };
        let tags = base.split('-').map(str::to_lowercase).collect();

        Self {
            component_ident,
            file_ident,
            tags,
        }
    }
}

/// Base name of a relative source path: final segment without the `.svg`
/// extension.
pub fn base_name(relative_path: &str) -> &str {
    let file = relative_path
        .rsplit('/')
        .next()
        .unwrap_or(relative_path);
    file.strip_suffix(".svg").unwrap_or(file)
}
