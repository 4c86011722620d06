//! CLI definitions and command dispatch.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use fontprobe_metadata::{FontHandle, FontMetadata, read_metadata};
use rayon::prelude::*;

#[derive(Parser)]
#[command(name = "fontprobe")]
#[command(about = "Print English naming metadata from font files")]
pub struct Cli {
    /// Font files to inspect.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Fail on files that cannot be opened instead of printing empty fields.
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        if self.strict {
            for path in &self.paths {
                let handle = FontHandle::open(path)?;
                print_metadata(path, &handle.metadata());
            }
            return Ok(());
        }

        // Best effort: broken files just come out with empty fields.
        let results: Vec<_> = self
            .paths
            .par_iter()
            .map(|path| (path, read_metadata(path)))
            .collect();
        for (path, metadata) in &results {
            print_metadata(path, metadata);
        }
        Ok(())
    }
}

fn print_metadata(path: &Path, metadata: &FontMetadata) {
    println!("{}", path.display());
    println!("  family:          {}", field(&metadata.family));
    println!("  subfamily:       {}", field(&metadata.subfamily));
    println!("  version:         {}", field(&metadata.version));
    println!("  postscript name: {}", field(&metadata.postscript_name));
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}
