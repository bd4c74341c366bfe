use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Where lookup results land and where the user sees notices
pub trait Host {
    /// Insert rendered text at the insertion point
    fn insert(&mut self, text: &str) -> anyhow::Result<()>;

    /// Show a transient notice to the user
    fn notify(&mut self, message: &str);
}

/// Insertion point of a terminal session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertionPoint {
    Stdout,
    /// End of a markdown document
    Document(PathBuf),
}

pub struct TerminalHost {
    target: InsertionPoint,
}

impl TerminalHost {
    pub fn new(target: InsertionPoint) -> Self {
        Self { target }
    }
}

impl Host for TerminalHost {
    fn insert(&mut self, text: &str) -> anyhow::Result<()> {
        match &self.target {
            InsertionPoint::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                if !text.ends_with('\n') {
                    stdout.write_all(b"\n")?;
                }
                stdout.flush()?;
            }
            InsertionPoint::Document(path) => {
                append_to_document(path, text)
                    .with_context(|| format!("Failed to insert into {}", path.display()))?;
                tracing::info!("Inserted {} bytes into {}", text.len(), path.display());
            }
        }
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

/// Append `text` on its own line at the end of the document, creating it if needed
pub fn append_to_document(path: &Path, text: &str) -> io::Result<()> {
    let needs_break = match fs::read(path) {
        Ok(existing) => !existing.is_empty() && !existing.ends_with(b"\n"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        Err(e) => return Err(e),
    };

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if needs_break {
        file.write_all(b"\n")?;
    }
    file.write_all(text.as_bytes())?;
    Ok(())
}
