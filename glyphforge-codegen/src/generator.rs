//! Generation orchestrator.

use std::collections::HashSet;

use glyphforge_core::{Console, GeneratedFile, write_file};

use crate::{
    adapters::{
        ExpressionTransformer, Formatter, MarkupOptimizer, Optimizer, TrailingNewlineFormatter,
        Transformer,
    },
    enumerate::enumerate_sources,
    error::{Error, Result},
    extract::extract_body,
    files::{ComponentTsx, IconsJson, IndexTs},
    manifest::{IconRecord, Manifest},
    naming::{DerivedNames, base_name},
    options::GenerationOptions,
    validate::is_vector_document,
};

/// Sequences the pipeline per file, tolerates per-file skips, and emits the
/// batch artifacts.
pub struct Generator {
    options: GenerationOptions,
    optimizer: Box<dyn Optimizer>,
    transformer: Box<dyn Transformer>,
    formatter: Box<dyn Formatter>,
}

impl Generator {
    pub fn new(options: GenerationOptions) -> Self {
        Self {
            options,
            optimizer: Box::new(MarkupOptimizer::new()),
            transformer: Box::new(ExpressionTransformer),
            formatter: Box::new(TrailingNewlineFormatter),
        }
    }

    pub fn with_optimizer(mut self, optimizer: impl Optimizer + 'static) -> Self {
        self.optimizer = Box::new(optimizer);
        self
    }

    pub fn with_transformer(mut self, transformer: impl Transformer + 'static) -> Self {
        self.transformer = Box::new(transformer);
        self
    }

    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Run the whole batch: one component file per surviving input, then the
    /// barrel export and metadata artifacts.
    ///
    /// Fails with [`Error::NoInputFiles`] when the source directory holds no
    /// `.svg` files; the output directory is created before that check, so
    /// the side effect happens even on that failure. Invalid documents are
    /// skipped with a warning and never abort the batch. Files already
    /// written stay on disk when a later file fails.
    pub fn generate(&self, console: &mut dyn Console) -> Result<Manifest> {
        self.options.validate()?;

        std::fs::create_dir_all(&self.options.output_dir)
            .map_err(|e| Error::io("create", &self.options.output_dir, e))?;

        let sources = enumerate_sources(&self.options.source_dir)?;
        if sources.is_empty() {
            return Err(Error::no_input_files(&self.options.source_dir));
        }

        console.info(&format!(
            "Found {} SVG files in '{}'",
            sources.len(),
            self.options.source_dir.display()
        ));

        let mut icons = Vec::new();
        let mut seen = HashSet::new();
        for relative in &sources {
            if let Some(record) = self.generate_component(relative, &mut seen, console)? {
                icons.push(record);
            }
        }

        let manifest = Manifest::new(icons);

        let barrel = IndexTs::new(&manifest.icons);
        let barrel_path = barrel.path(&self.options.output_dir);
        let barrel_text = self
            .formatter
            .format(&barrel.render())
            .map_err(|e| Error::format("index.ts", e))?;
        write_file(&barrel_path, &barrel_text).map_err(|e| Error::io("write", &barrel_path, e))?;

        let metadata = IconsJson::new(&manifest);
        metadata
            .write(&self.options.output_dir)
            .map_err(|e| Error::io("write", &metadata.path(&self.options.output_dir), e))?;

        console.info(&format!("Generated {} icon exports", manifest.count));

        Ok(manifest)
    }

    /// Process one source file. Returns `Ok(None)` for the recoverable
    /// skips (invalid document, empty identifier); everything else is fatal.
    fn generate_component(
        &self,
        relative: &str,
        seen: &mut HashSet<String>,
        console: &mut dyn Console,
    ) -> Result<Option<IconRecord>> {
        let absolute = self.options.source_dir.join(relative);
        let content =
            std::fs::read_to_string(&absolute).map_err(|e| Error::io("read", &absolute, e))?;

        if !is_vector_document(&content) {
            console.warn(&format!("skipping '{}': no <svg> root found", relative));
            return Ok(None);
        }

        let names = DerivedNames::derive(relative, self.options.prefix.as_deref());
        if names.file_ident.is_empty() {
            console.warn(&format!(
                "skipping '{}': base name yields no identifier",
                relative
            ));
            return Ok(None);
        }
        if !seen.insert(names.file_ident.clone()) {
            console.warn(&format!(
                "'{}' overwrites an earlier '{}.tsx'",
                relative, names.file_ident
            ));
        }

        let optimized = self
            .optimizer
            .optimize(&content)
            .map_err(|e| Error::optimize(relative, e))?;
        let transformed = self
            .transformer
            .transform(&optimized)
            .map_err(|e| Error::transform(relative, e))?;
        let body = extract_body(&transformed).ok_or_else(|| Error::extract(relative))?;

        let component = ComponentTsx {
            component_name: names.component_ident.clone(),
            file_name: names.file_ident.clone(),
            body,
            size: self.options.size,
            stroke_width: self.options.stroke_width,
            filled: self.options.filled,
        };
        let component_path = component.path(&self.options.output_dir);
        let component_text = self
            .formatter
            .format(&component.render())
            .map_err(|e| Error::format(relative, e))?;
        write_file(&component_path, &component_text)
            .map_err(|e| Error::io("write", &component_path, e))?;

        console.info(&format!(
            "{} -> {}",
            base_name(relative),
            names.component_ident
        ));

        Ok(Some(IconRecord {
            name: names.component_ident,
            file: names.file_ident,
            tags: names.tags,
        }))
    }
}
