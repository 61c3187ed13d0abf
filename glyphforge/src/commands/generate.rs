use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use glyphforge_codegen::{GenerationOptions, Generator};
use glyphforge_core::TerminalConsole;

use crate::config::ForgeConfig;

const DEFAULT_SOURCE: &str = "icons";
const DEFAULT_OUTPUT: &str = "src/icons";
const DEFAULT_SIZE: f64 = 24.0;
const DEFAULT_STROKE_WIDTH: f64 = 2.0;

#[derive(Args)]
pub struct GenerateCommand {
    /// Directory containing .svg source files (defaults to ./icons)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Output directory for generated files (defaults to ./src/icons)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Prefix merged into every component name
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Default rendered size in pixels
    #[arg(long)]
    pub size: Option<f64>,

    /// Default stroke width
    #[arg(long)]
    pub stroke_width: Option<f64>,

    /// Generate filled icons (fill="currentColor", no stroke)
    #[arg(long)]
    pub filled: bool,

    /// Path to a config file (defaults to ./glyphforge.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = ForgeConfig::load(self.config.as_deref())?;
        let options = self.resolve_options(config);

        let mut console = TerminalConsole::new();
        match Generator::new(options).generate(&mut console) {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }

    /// Merge option sources: explicit flag, then config file, then default.
    fn resolve_options(&self, config: ForgeConfig) -> GenerationOptions {
        GenerationOptions {
            source_dir: self
                .source
                .clone()
                .or(config.source)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE)),
            output_dir: self
                .output
                .clone()
                .or(config.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            prefix: self.prefix.clone().or(config.prefix),
            size: self.size.or(config.size).unwrap_or(DEFAULT_SIZE),
            stroke_width: self
                .stroke_width
                .or(config.stroke_width)
                .unwrap_or(DEFAULT_STROKE_WIDTH),
            filled: self.filled || config.filled.unwrap_or(false),
        }
    }
}
