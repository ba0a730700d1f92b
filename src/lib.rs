//! hugo-slug: keep the `slug:` field of markdown posts in sync with their titles
//!
//! Every markdown file below a blog directory is scanned for a front matter
//! block at its very start. When the block has a `title:` line, a slug is
//! derived from it and written as `slug: '<slug>'`, replacing a stale slug
//! line or inserting a new one right after the title.
//!
//! # Quick Start
//!
//! ```rust
//! use hugo_slug::{FrontMatterRewriter, Result};
//!
//! fn main() -> Result<()> {
//!     let rewriter = FrontMatterRewriter::new()?;
//!     let rewrite = rewriter.rewrite_document("---\ntitle: What is C++/C#?\n---\nBody");
//!
//!     assert_eq!(rewrite.slug.as_deref(), Some("WhatisC++,CSharp,"));
//!     assert_eq!(
//!         rewrite.text,
//!         "---\ntitle: What is C++/C#?\nslug: 'WhatisC++,CSharp,'\n---\nBody"
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Batch Operations
//!
//! ```rust,no_run
//! use hugo_slug::{ProcessOptions, Result, SlugInserter};
//!
//! fn main() -> Result<()> {
//!     let inserter = SlugInserter::new(ProcessOptions::default())?;
//!     let summary = inserter.run("content/posts".as_ref())?;
//!     println!("{summary}");
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`]: slug generation, title extraction and front matter rewriting
//! - [`io`]: file discovery, atomic writes and validated interactive input
//! - [`processor`]: per-file decisions and run orchestration
//! - [`error`]: error type shared by the library

pub use error::{Result, SlugError};

pub use self::core::{
    FrontMatterRewriter, LineEnding, Rewrite, SlugGenerator, TitleExtractor, TokenRule,
    LANGUAGE_TOKENS,
};

pub use self::io::{input_until, InputSource, LinePrompt};

pub use processor::{FileReport, Outcome, ProcessOptions, SlugInserter, Summary};

pub mod args;
pub mod core;
pub mod error;
pub mod io;
pub mod processor;
