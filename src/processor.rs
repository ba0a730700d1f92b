//! Per-file slug insertion and run orchestration

use crate::core::{FrontMatterRewriter, Rewrite};
use crate::error::Result;
use crate::io;
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

/// Options controlling how rewritten files are persisted
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    /// Report what would change without touching any file
    pub dry_run: bool,
    /// Copy each file to `<file><suffix>` before overwriting it
    pub backup_suffix: Option<String>,
}

/// What happened to a single document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The rewrite produced identical text
    Unchanged,
    /// A slug was inserted or refreshed
    Slugged(String),
    /// The front matter would change but no slug could be derived; the file is left alone
    NoSlug,
}

impl Outcome {
    /// Classify a rewrite against the original text
    pub fn classify(original: &str, rewrite: &Rewrite) -> Self {
        if rewrite.text == original {
            Self::Unchanged
        } else if let Some(slug) = &rewrite.slug {
            Self::Slugged(slug.clone())
        } else {
            Self::NoSlug
        }
    }

    pub fn needs_write(&self) -> bool {
        matches!(self, Self::Slugged(_))
    }
}

/// Outcome for one file, displayed as its console report line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Outcome,
}

impl FileReport {
    pub fn file_name(&self) -> Cow<'_, str> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_else(|| self.path.to_string_lossy())
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.file_name();
        match &self.outcome {
            Outcome::Unchanged => write!(f, "No Change for: {name}"),
            Outcome::Slugged(slug) => write!(f, "Slug for {name}: {slug}"),
            Outcome::NoSlug => write!(f, "No Slug for {name}"),
        }
    }
}

/// Counts over a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub no_slug: usize,
}

impl Summary {
    fn record(&mut self, outcome: &Outcome) {
        self.files += 1;
        match outcome {
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::Slugged(_) => self.updated += 1,
            Outcome::NoSlug => self.no_slug += 1,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files: {} updated, {} unchanged, {} without slug",
            self.files, self.updated, self.unchanged, self.no_slug
        )
    }
}

/// Walks a blog directory and keeps every post's `slug:` in sync with its title
pub struct SlugInserter {
    rewriter: FrontMatterRewriter,
    options: ProcessOptions,
}

impl SlugInserter {
    pub fn new(options: ProcessOptions) -> Result<Self> {
        Ok(Self::with_rewriter(FrontMatterRewriter::new()?, options))
    }

    pub fn with_rewriter(rewriter: FrontMatterRewriter, options: ProcessOptions) -> Self {
        Self { rewriter, options }
    }

    pub fn options(&self) -> &ProcessOptions {
        &self.options
    }

    /// Rewrite one document held in memory
    pub fn process_text(&self, text: &str) -> (Outcome, Rewrite) {
        let rewrite = self.rewriter.rewrite_document(text);
        (Outcome::classify(text, &rewrite), rewrite)
    }

    /// Read, rewrite and (when a slug was produced) write back one file
    pub fn process_file(&self, path: &Path) -> Result<FileReport> {
        let content = io::read_to_string(path)?;
        let (outcome, rewrite) = self.process_text(&content);

        if outcome.needs_write() {
            if self.options.dry_run {
                log::debug!("dry run, not writing {}", path.display());
            } else {
                if let Some(suffix) = &self.options.backup_suffix {
                    let backup_path = io::backup(path, suffix)?;
                    log::debug!("backed up {} to {}", path.display(), backup_path.display());
                }
                io::write_atomic(path, &rewrite.text)?;
            }
        }

        let report = FileReport {
            path: path.to_path_buf(),
            outcome,
        };
        match report.outcome {
            Outcome::NoSlug => log::warn!("{report}"),
            _ => log::info!("{report}"),
        }
        Ok(report)
    }

    /// Process every markdown file below `dir` in discovery order.
    ///
    /// The first I/O failure aborts the run.
    pub fn run(&self, dir: &Path) -> Result<Summary> {
        let mut summary = Summary::default();
        for file in io::resolve_files(dir)? {
            let report = self.process_file(&file)?;
            summary.record(&report.outcome);
        }
        Ok(summary)
    }
}
