//! Front matter location and slug rewriting
//!
//! The block is located with a plain delimiter regex: it must open with `---`
//! at the very start of the document and closes at the next line starting
//! with `---`. The content is never parsed as YAML; only `title:` and `slug:`
//! lines are looked at, so formatting of every other field survives.

use crate::core::slug::SlugGenerator;
use crate::core::title::TitleExtractor;
use crate::error::Result;
use regex::Regex;

const BLOCK_PATTERN: &str = r"(?ms)\A---.*?^---";
const BOM: char = '\u{feff}';
const SLUG_PATTERN: &str = r"(?m)^slug: .*(?:[\r\n]+|\z)";

/// Line ending style used when emitting new lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Unix,
    Windows,
}

impl LineEnding {
    /// Windows if the text contains any CRLF, Unix otherwise
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unix => "\n",
            Self::Windows => "\r\n",
        }
    }
}

/// Result of rewriting a document or a single block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    pub slug: Option<String>,
}

impl Rewrite {
    fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            slug: None,
        }
    }
}

/// Inserts or refreshes the `slug:` field of a markdown document
#[derive(Debug, Clone)]
pub struct FrontMatterRewriter {
    block: Regex,
    slug_line: Regex,
    title: TitleExtractor,
    generator: SlugGenerator,
}

impl FrontMatterRewriter {
    /// Create a rewriter using the default language token table
    pub fn new() -> Result<Self> {
        Self::with_generator(SlugGenerator::new()?)
    }

    pub fn with_generator(generator: SlugGenerator) -> Result<Self> {
        Ok(Self {
            block: Regex::new(BLOCK_PATTERN)?,
            slug_line: Regex::new(SLUG_PATTERN)?,
            title: TitleExtractor::new()?,
            generator,
        })
    }

    /// The front matter block of `text`, delimiters included
    pub fn locate<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.block.find(text).map(|m| m.as_str())
    }

    /// Slug derived from the title of a front matter content, if any
    pub fn slug_for(&self, content: &str) -> Option<String> {
        self.title
            .extract(content)
            .map(|title| self.generator.slugify(title))
    }

    /// Rewrite the front matter of a whole document.
    ///
    /// Text outside the block is copied untouched, a leading UTF-8 BOM
    /// included. Documents without a closed block at their start come back
    /// unchanged with no slug.
    pub fn rewrite_document(&self, text: &str) -> Rewrite {
        let body = text.strip_prefix(BOM).unwrap_or(text);
        let Some(m) = self.block.find(body) else {
            return Rewrite::unchanged(text);
        };

        let block = self.rewrite_block(m.as_str());
        let mut out = String::with_capacity(text.len() + 64);
        out.push_str(&text[..text.len() - body.len()]);
        out.push_str(&block.text);
        out.push_str(&body[m.end()..]);

        Rewrite {
            text: out,
            slug: block.slug,
        }
    }

    /// Rewrite a single `---` delimited block.
    ///
    /// Without a title the block is only normalised (outer dashes and
    /// whitespace) and no slug is reported.
    pub fn rewrite_block(&self, block: &str) -> Rewrite {
        let newline = LineEnding::detect(block).as_str();
        let mut content = block.trim_matches('-').trim().to_string();

        let slug = self.slug_for(&content);
        if let Some(slug) = &slug {
            let slug_line = format!("slug: '{slug}'{newline}");

            if let Some(existing) = self.slug_line.find(&content).map(|m| m.range()) {
                content.replace_range(existing, &slug_line);
            } else if let Some(title) = self.title.find(&content) {
                let replacement = format!("{}{newline}{slug_line}", title.as_str().trim());
                let range = title.range();
                content.replace_range(range, &replacement);
            }
        }

        Rewrite {
            text: format!("---{newline}{}{newline}---", content.trim_end()),
            slug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rewriter() -> FrontMatterRewriter {
        FrontMatterRewriter::new().unwrap()
    }

    #[test]
    fn test_locate_first_block_only() {
        let text = "---\ntitle: A\n---\nbody\n\n---\n\nmore\n---\n";
        assert_eq!(rewriter().locate(text), Some("---\ntitle: A\n---"));
    }

    #[test]
    fn test_locate_requires_block_at_start() {
        assert_eq!(rewriter().locate("intro\n---\ntitle: A\n---\n"), None);
        assert_eq!(rewriter().locate("---\ntitle: unclosed\n"), None);
    }

    #[test]
    fn test_closing_delimiter_must_start_a_line() {
        let text = "---\ntitle: a---b\n---\nbody";
        assert_eq!(rewriter().locate(text), Some("---\ntitle: a---b\n---"));
    }

    #[test]
    fn test_insert_slug_after_title() {
        let result = rewriter().rewrite_document("---\ntitle: Hello World\ndate: 2024-01-01\n---\nBody\n");
        assert_eq!(
            result.text,
            "---\ntitle: Hello World\nslug: 'HelloWorld'\ndate: 2024-01-01\n---\nBody\n"
        );
        assert_eq!(result.slug.as_deref(), Some("HelloWorld"));
    }

    #[test]
    fn test_insert_slug_when_title_is_last_line() {
        let result = rewriter().rewrite_document("---\ndate: 2024-01-01\ntitle: 'Last One'\n---\n");
        assert_eq!(
            result.text,
            "---\ndate: 2024-01-01\ntitle: 'Last One'\nslug: 'LastOne'\n---\n"
        );
    }

    #[test]
    fn test_replace_stale_slug() {
        let input = "---\ntitle: C# 12\nslug: 'old'\ntags: [a]\n---\n";
        let result = rewriter().rewrite_document(input);
        assert_eq!(result.text, "---\ntitle: C# 12\nslug: 'CSharp12'\ntags: [a]\n---\n");
        assert_eq!(result.text.lines().count(), input.lines().count());
    }

    #[test]
    fn test_replace_stale_slug_crlf() {
        let input = "---\r\ntitle: C# 12\r\nslug: 'old'\r\ntags: [a]\r\n---\r\nBody\r\n";
        let result = rewriter().rewrite_document(input);
        assert_eq!(
            result.text,
            "---\r\ntitle: C# 12\r\nslug: 'CSharp12'\r\ntags: [a]\r\n---\r\nBody\r\n"
        );
        assert_eq!(result.text.lines().count(), input.lines().count());
    }

    #[test]
    fn test_bom_is_skipped_and_kept() {
        let rewriter = rewriter();
        let result = rewriter.rewrite_document("\u{feff}---\ntitle: Hello World\n---\nBody\n");
        assert_eq!(result.slug.as_deref(), Some("HelloWorld"));
        assert_eq!(
            result.text,
            "\u{feff}---\ntitle: Hello World\nslug: 'HelloWorld'\n---\nBody\n"
        );

        let again = rewriter.rewrite_document(&result.text);
        assert_eq!(again.text, result.text);
    }

    #[test]
    fn test_replace_only_first_slug_line() {
        let result = rewriter().rewrite_document("---\ntitle: A\nslug: x\nslug: y\n---");
        assert_eq!(result.text, "---\ntitle: A\nslug: 'A'\nslug: y\n---");
    }

    #[test]
    fn test_no_title_only_normalises() {
        let result = rewriter().rewrite_document("---\n\ndate: 2024-01-01\n\n---\nBody");
        assert_eq!(result.text, "---\ndate: 2024-01-01\n---\nBody");
        assert_eq!(result.slug, None);
    }

    #[test]
    fn test_without_front_matter_is_unchanged() {
        let text = "# Heading\n\n---\n\ntitle: not front matter\n---\n";
        let result = rewriter().rewrite_document(text);
        assert_eq!(result.text, text);
        assert_eq!(result.slug, None);
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let rewriter = rewriter();
        let first = rewriter.rewrite_document("---\ntitle: \"What is C++/C#?\"\n---\n\nText\n");
        let second = rewriter.rewrite_document(&first.text);
        assert_eq!(second.text, first.text);
        assert_eq!(second.slug.as_deref(), Some("WhatisC++,CSharp,"));
    }

    #[test]
    fn test_crlf_line_endings_are_kept() {
        let result = rewriter().rewrite_document("---\r\ntitle: Hi There\r\n---\r\nBody\r\n");
        assert_eq!(
            result.text,
            "---\r\ntitle: Hi There\r\nslug: 'HiThere'\r\n---\r\nBody\r\n"
        );
    }

    #[test]
    fn test_line_ending_detection() {
        assert_eq!(LineEnding::detect("a\nb"), LineEnding::Unix);
        assert_eq!(LineEnding::detect("a\r\nb"), LineEnding::Windows);
        assert_eq!(LineEnding::default().as_str(), "\n");
    }
}
