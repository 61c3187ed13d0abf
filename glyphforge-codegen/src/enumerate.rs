//! Source file enumeration.

use std::path::Path;

use ignore::WalkBuilder;

use crate::error::{Error, Result};

/// List the relative paths of all `.svg` files under `source_dir`, at any
/// depth, sorted by file name within each directory for run-to-run stability.
///
/// Paths are slash-separated regardless of platform. A missing source
/// directory yields an empty set, not an error; an unreadable entry inside
/// an existing tree is an error, so files never silently vanish from the
/// batch.
pub fn enumerate_sources(source_dir: &Path) -> Result<Vec<String>> {
    if !source_dir.exists() {
        return Ok(Vec::new());
    }

    let mut walker = WalkBuilder::new(source_dir);
    walker
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut paths = Vec::new();
    for entry in walker.build() {
        let entry = entry.map_err(|err| {
            let message = err.to_string();
            let source = err
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other(message));
            Error::io("enumerate", source_dir, source)
        })?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "svg") {
            continue;
        }
        if let Ok(relative) = path.strip_prefix(source_dir) {
            let slash_separated = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            paths.push(slash_separated);
        }
    }
    Ok(paths)
}
