//! Barrel export module template.

use std::path::{Path, PathBuf};

use glyphforge_core::GeneratedFile;

use crate::manifest::IconRecord;

/// The `index.ts` barrel: one re-export per icon, in manifest order.
pub struct IndexTs<'a> {
    icons: &'a [IconRecord],
}

impl<'a> IndexTs<'a> {
    pub fn new(icons: &'a [IconRecord]) -> Self {
        Self { icons }
    }
}

impl GeneratedFile for IndexTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("index.ts")
    }

    fn render(&self) -> String {
        self.icons
            .iter()
            .map(|icon| {
                format!(
                    "export {{ default as {} }} from \"./{}\";",
                    icon.name, icon.file
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
