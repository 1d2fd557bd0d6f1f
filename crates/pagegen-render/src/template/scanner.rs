//! Placeholder scanning.
//!
//! A placeholder is `{{`, optional whitespace, a key made of
//! `[A-Za-z0-9_.]`, optional whitespace, then `}}`. Anything else between
//! double braces is not a placeholder and stays in the output as written.
//!
//! Whether a placeholder sits inside a JSON string is decided only from the
//! two characters touching it: if both are `"`, it is [`Quoting::Quoted`].
//! No attempt is made to tokenize the surrounding JSON; templates are written
//! to match this rule.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{CaptureMatches, Regex};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_.]+)\s*\}\}").expect("placeholder pattern is valid")
});

/// Position of a placeholder relative to JSON string delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quoting {
    /// Immediately preceded and followed by `"`.
    Quoted,
    /// Anything else, including template boundaries.
    Bare,
}

/// One placeholder occurrence in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'t> {
    /// Byte range of the whole token, braces included.
    pub span: Range<usize>,
    /// The dotted key path, whitespace trimmed.
    pub key: &'t str,
    /// Character just before the token, `None` at the start of the template.
    pub before: Option<char>,
    /// Character just after the token, `None` at the end of the template.
    pub after: Option<char>,
}

impl Placeholder<'_> {
    pub fn quoting(&self) -> Quoting {
        if self.before == Some('"') && self.after == Some('"') {
            Quoting::Quoted
        } else {
            Quoting::Bare
        }
    }

    pub fn is_quoted(&self) -> bool {
        self.quoting() == Quoting::Quoted
    }
}

/// Lazy left-to-right iterator over the placeholders of a template.
pub struct Placeholders<'t> {
    template: &'t str,
    matches: CaptureMatches<'static, 't>,
}

impl<'t> Iterator for Placeholders<'t> {
    type Item = Placeholder<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.matches.next()?;
        let token = caps.get(0)?;
        let key = caps.get(1)?.as_str();

        Some(Placeholder {
            span: token.range(),
            key,
            before: self.template[..token.start()].chars().next_back(),
            after: self.template[token.end()..].chars().next(),
        })
    }
}

/// Scans `template` for placeholders, in order and without overlap.
pub fn scan(template: &str) -> Placeholders<'_> {
    Placeholders {
        template,
        matches: PLACEHOLDER.captures_iter(template),
    }
}

/// Returns the distinct keys a template references, in first-seen order.
pub fn placeholder_keys(template: &str) -> Vec<&str> {
    let mut keys: Vec<&str> = Vec::new();
    for placeholder in scan(template) {
        if !keys.contains(&placeholder.key) {
            keys.push(placeholder.key);
        }
    }
    keys
}
