//! Slug generation from post titles
//!
//! A slug is built in three passes: whitespace removal, language token
//! substitution and special character substitution.

use crate::error::Result;
use regex::Regex;

/// A single entry of the token substitution table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenRule {
    pub token: &'static str,
    pub replacement: &'static str,
}

impl TokenRule {
    pub const fn new(token: &'static str, replacement: &'static str) -> Self {
        Self { token, replacement }
    }
}

/// Programming language names that do not survive in a URL as-is.
/// Order matters: later rules see text already rewritten by earlier ones.
pub const LANGUAGE_TOKENS: &[TokenRule] = &[
    TokenRule::new("C#", "CSharp"),
    TokenRule::new("c#", "CSharp"),
    TokenRule::new("C++", "CPP"),
    TokenRule::new("c++", "CPP"),
    TokenRule::new(".NET", "DotNet"),
    TokenRule::new(".net", "dotnet"),
];

#[derive(Debug, Clone)]
struct CompiledRule {
    pattern: Regex,
    replacement: &'static str,
}

/// Turns titles into slugs using an ordered token table
#[derive(Debug, Clone)]
pub struct SlugGenerator {
    rules: Vec<CompiledRule>,
}

impl SlugGenerator {
    /// Create a generator with the default language token table
    pub fn new() -> Result<Self> {
        Self::with_rules(LANGUAGE_TOKENS)
    }

    /// Create a generator with a custom token table
    pub fn with_rules(rules: &[TokenRule]) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|rule| -> Result<CompiledRule> {
                Ok(CompiledRule {
                    pattern: Regex::new(&regex::escape(rule.token))?,
                    replacement: rule.replacement,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Derive the slug for an already trimmed title
    pub fn slugify(&self, title: &str) -> String {
        let compact = remove_whitespace(title);
        let substituted = self.substitute_tokens(compact);
        substituted.chars().map(substitute_char).collect()
    }

    fn substitute_tokens(&self, mut text: String) -> String {
        for rule in &self.rules {
            text = replace_token(&text, rule);
        }
        text
    }
}

fn remove_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Replace every occurrence of the rule's token that is not glued to an
/// ASCII letter on either side.
fn replace_token(text: &str, rule: &CompiledRule) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in rule.pattern.find_iter(text) {
        let letter_before = m.start() > 0 && bytes[m.start() - 1].is_ascii_alphabetic();
        let letter_after = m.end() < bytes.len() && bytes[m.end()].is_ascii_alphabetic();
        if letter_before || letter_after {
            continue;
        }

        out.push_str(&text[last..m.start()]);
        out.push_str(rule.replacement);
        last = m.end();
    }

    out.push_str(&text[last..]);
    out
}

fn substitute_char(c: char) -> char {
    match c {
        '\\' | '/' | '?' | '!' => ',',
        ':' | '*' | '"' | '\'' | '|' => ' ',
        '<' => '(',
        '>' => ')',
        other => other,
    }
}
