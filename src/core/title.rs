//! Title extraction from front matter content

use crate::error::Result;
use regex::Regex;

/// Matches a `title: ` line and the line terminators that follow it
const TITLE_PATTERN: &str = r"(?m)^title: (?P<content>.*)(?:[\r\n]+|\z)";

/// Finds the `title:` field of a front matter block
#[derive(Debug, Clone)]
pub struct TitleExtractor {
    pattern: Regex,
}

impl TitleExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(TITLE_PATTERN)?,
        })
    }

    /// The whole first title line, terminators included
    pub fn find<'a>(&self, content: &'a str) -> Option<regex::Match<'a>> {
        self.pattern.find(content)
    }

    /// Extract the unquoted title value, or `None` if there is no title line
    pub fn extract<'a>(&self, content: &'a str) -> Option<&'a str> {
        let captures = self.pattern.captures(content)?;
        let raw = captures.name("content")?.as_str();

        Some(raw.trim().trim_matches('"').trim_matches('\''))
    }
}
