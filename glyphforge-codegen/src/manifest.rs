//! Batch manifest types.

use serde::Serialize;

/// One successfully processed icon.
#[derive(Debug, Clone, Serialize)]
pub struct IconRecord {
    /// Component identifier (exported name).
    pub name: String,
    /// File identifier (output file stem and barrel import specifier).
    pub file: String,
    /// Lowercase tags derived from the base name.
    pub tags: Vec<String>,
}

/// Batch summary for one run, in enumeration order.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub count: usize,
    pub icons: Vec<IconRecord>,
}

impl Manifest {
    pub fn new(icons: Vec<IconRecord>) -> Self {
        Self {
            count: icons.len(),
            icons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_matches_records() {
        let manifest = Manifest::new(vec![IconRecord {
            name: "Arrow".to_string(),
            file: "Arrow".to_string(),
            tags: vec!["arrow".to_string()],
        }]);
        assert_eq!(manifest.count, 1);
        assert_eq!(manifest.icons.len(), manifest.count);
    }

    #[test]
    fn test_empty_manifest_is_valid() {
        let manifest = Manifest::new(Vec::new());
        assert_eq!(manifest.count, 0);
    }
}
