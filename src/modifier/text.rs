//! Small text and token modifiers.
//!
//! These operate on raw texts (`String`) or token lists (`Vec<String>`). They
//! are deliberately generic: tokenizers, lemmatizers and stopword lists are
//! supplied by the caller, already constructed.

use std::{collections::HashSet, fmt, rc::Rc};

use regex::Regex;

use crate::{error::Result, modifier::Modifier};

/// Lowercases every token.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lower;

impl Modifier<Vec<String>> for Lower {
    type Output = Vec<String>;

    fn apply(&self, tokens: Vec<String>) -> Option<Vec<String>> {
        Some(tokens.into_iter().map(|t| t.to_lowercase()).collect())
    }
}

/// Appends a fixed suffix to every token, e.g. a language marker.
#[derive(Debug, Clone)]
pub struct Append {
    suffix: String,
}

impl Append {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl Modifier<Vec<String>> for Append {
    type Output = Vec<String>;

    fn apply(&self, tokens: Vec<String>) -> Option<Vec<String>> {
        Some(tokens.into_iter().map(|t| t + &self.suffix).collect())
    }
}

/// Splits a text into tokens on whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct Whitespace;

impl Modifier<String> for Whitespace {
    type Output = Vec<String>;

    fn apply(&self, text: String) -> Option<Vec<String>> {
        Some(text.split_whitespace().map(str::to_string).collect())
    }
}

/// Applies a list of regex substitutions to a text, in order.
#[derive(Debug, Clone)]
pub struct ReSub {
    patterns: Vec<Regex>,
    replacement: String,
}

impl ReSub {
    pub fn new(patterns: &[&str], replacement: impl Into<String>) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            patterns,
            replacement: replacement.into(),
        })
    }
}

impl Modifier<String> for ReSub {
    type Output = String;

    fn apply(&self, text: String) -> Option<String> {
        let out = self.patterns.iter().fold(text, |acc, re| {
            re.replace_all(&acc, self.replacement.as_str()).into_owned()
        });
        Some(out)
    }
}

/// Splits a text into tokens at every match of a regex. Empty pieces are dropped.
#[derive(Debug, Clone)]
pub struct ReSplit {
    re: Regex,
}

impl ReSplit {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            re: Regex::new(pattern)?,
        })
    }
}

impl Modifier<String> for ReSplit {
    type Output = Vec<String>;

    fn apply(&self, text: String) -> Option<Vec<String>> {
        Some(
            self.re
                .split(&text)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

/// Drops tokens that match a regex at their start.
#[derive(Debug, Clone)]
pub struct ReFilter {
    re: Regex,
}

impl ReFilter {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            re: Regex::new(pattern)?,
        })
    }

    fn matches(&self, token: &str) -> bool {
        self.re.find(token).is_some_and(|m| m.start() == 0)
    }
}

impl Modifier<Vec<String>> for ReFilter {
    type Output = Vec<String>;

    fn apply(&self, tokens: Vec<String>) -> Option<Vec<String>> {
        Some(tokens.into_iter().filter(|t| !self.matches(t)).collect())
    }
}

/// Drops stopwords and filter symbols (case-insensitive), plus any token
/// rejected by an optional predicate.
#[derive(Clone, Default)]
pub struct Remove {
    words: HashSet<String>,
    keep: Option<Rc<dyn Fn(&str) -> bool>>,
}

impl fmt::Debug for Remove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Remove")
            .field("words", &self.words.len())
            .field("keep", &self.keep.is_some())
            .finish()
    }
}

impl Remove {
    pub fn new<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::default().add_words(stopwords)
    }

    /// Adds stopwords or filter symbols.
    pub fn add_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Only tokens for which `keep` returns `true` survive.
    pub fn with_predicate<F>(mut self, keep: F) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        self.keep = Some(Rc::new(keep));
        self
    }

    fn keeps(&self, token: &str) -> bool {
        let allowed = self.keep.as_ref().map_or(true, |keep| keep(token));
        allowed && !self.words.contains(&token.to_lowercase())
    }
}

impl Modifier<Vec<String>> for Remove {
    type Output = Vec<String>;

    fn apply(&self, tokens: Vec<String>) -> Option<Vec<String>> {
        Some(tokens.into_iter().filter(|t| self.keeps(t)).collect())
    }
}
