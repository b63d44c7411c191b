use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::parser::article::NOT_FOUND_SENTINEL;
use crate::parser::headlines::HeadlineEntry;
use crate::pipeline::ArticleOutcome;

pub const HEADLINES_FILE: &str = "scraped_headlines.txt";
pub const CONTENT_FILE: &str = "scraped_content.txt";

/// Write every headline as a `Title:` / `URL:` block. Overwrites any previous report.
pub fn write_headlines(dir: &Path, entries: &[HeadlineEntry]) -> Result<PathBuf> {
    let path = dir.join(HEADLINES_FILE);
    let file = File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for entry in entries {
        write_headline_block(&mut writer, entry)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

fn write_headline_block(w: &mut impl Write, entry: &HeadlineEntry) -> std::io::Result<()> {
    write!(w, "Title: {}\nURL: {}\n\n", entry.title, entry.url)
}

/// Text written in place of an article body.
pub fn render_outcome(outcome: &ArticleOutcome) -> String {
    match outcome {
        ArticleOutcome::Body(text) => text.clone(),
        ArticleOutcome::NotFound => NOT_FOUND_SENTINEL.to_string(),
        ArticleOutcome::Failed(e) => format!("Error fetching article content: {}", e),
    }
}

fn write_article_block(w: &mut impl Write, title: &str, outcome: &ArticleOutcome) -> std::io::Result<()> {
    write!(w, "--- Article: {} ---\n{}\n\n", title, render_outcome(outcome))
}

/// Content report, appended to one article at a time while the batch runs.
pub struct ContentReport {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl ContentReport {
    pub fn create(dir: &Path) -> Result<Self> {
        let path = dir.join(CONTENT_FILE);
        let file = File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn write_article(&mut self, title: &str, outcome: &ArticleOutcome) -> Result<()> {
        write_article_block(&mut self.writer, title, outcome)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer
            .flush()
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(self.path)
    }
}
