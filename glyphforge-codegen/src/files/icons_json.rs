//! Metadata index template.

use std::path::{Path, PathBuf};

use glyphforge_core::GeneratedFile;

use crate::manifest::Manifest;

/// The `icons.json` metadata document: `{ count, icons: [...] }`, serialized
/// with two-space indentation for human-diffable output.
pub struct IconsJson<'a> {
    manifest: &'a Manifest,
}

impl<'a> IconsJson<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self { manifest }
    }
}

impl GeneratedFile for IconsJson<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("icons.json")
    }

    fn render(&self) -> String {
        let mut json = serde_json::to_string_pretty(self.manifest)
            .expect("manifest serialization never fails");
        json.push('\n');
        json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::IconRecord;

    #[test]
    fn test_render_metadata_document() {
        let manifest = Manifest::new(vec![IconRecord {
            name: "ArrowLeft".to_string(),
            file: "ArrowLeft".to_string(),
            tags: vec!["arrow".to_string(), "left".to_string()],
        }]);

        let expected = r#"{
  "count": 1,
  "icons": [
    {
      "name": "ArrowLeft",
      "file": "ArrowLeft",
      "tags": [
        "arrow",
        "left"
      ]
    }
  ]
}
"#;
        assert_eq!(IconsJson::new(&manifest).render(), expected);
    }

    #[test]
    fn test_render_empty_manifest() {
        let manifest = Manifest::new(Vec::new());
        assert_eq!(
            IconsJson::new(&manifest).render(),
            "{\n  \"count\": 0,\n  \"icons\": []\n}\n"
        );
    }
}
