//! Token grid storage for expression buffers.
//!
//! A [`Buffer`] is a non-empty sequence of [`Line`]s and each line is a
//! sequence of [`Token`]s. Both levels are `im::Vector`s, so cloning a buffer
//! is O(1) and history snapshots share structure with the live buffer.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};

// =============================================================================
// Token
// =============================================================================

/// An atomic symbol placed in an expression ("2", "sin", "∫").
///
/// Tokens are immutable once created. Cloning shares the backing string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Token(Arc<str>);

impl Token {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(Arc::from(text.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Token {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0.to_string()
    }
}

// =============================================================================
// Line
// =============================================================================

/// One visual row of an expression. May hold zero tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Line {
    tokens: Vector<Token>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a line from raw strings, dropping empty ones.
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(Into::into)
                .filter(|t: &Token| !t.is_empty())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> + '_ {
        self.tokens.iter()
    }

    /// Owned copies of the token strings, in order
    pub fn to_strings(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.to_string()).collect()
    }

    pub(crate) fn insert(&mut self, index: usize, token: Token) {
        self.tokens.insert(index, token);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Token {
        self.tokens.remove(index)
    }

    /// Splits the line at `index`, keeping `[0, index)` and returning the rest
    pub(crate) fn split_off(&mut self, index: usize) -> Line {
        Line {
            tokens: self.tokens.split_off(index),
        }
    }

    pub(crate) fn append(&mut self, other: Line) {
        self.tokens.append(other.tokens);
    }

    /// Inserts every token of `run` starting at `index`
    pub(crate) fn splice(&mut self, index: usize, run: &Line) {
        let tail = self.tokens.split_off(index);
        self.tokens.append(run.tokens.clone());
        self.tokens.append(tail);
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl<T: Into<Token>> FromIterator<T> for Line {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Line::from_tokens(iter)
    }
}

// =============================================================================
// Buffer
// =============================================================================

/// A tab's full expression: an ordered, never-empty sequence of lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Buffer {
    lines: Vector<Line>,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// A buffer holding a single empty line
    pub fn new() -> Self {
        Self {
            lines: Vector::unit(Line::new()),
        }
    }

    /// Build a buffer from rows of raw token strings.
    ///
    /// Empty strings are dropped, so the legacy `[[""]]` shape becomes one
    /// empty line. Zero rows also yield one empty line.
    pub fn from_rows<R, I, T>(rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        let lines: Vector<Line> = rows.into_iter().map(Line::from_tokens).collect();
        if lines.is_empty() {
            Self::new()
        } else {
            Self { lines }
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn last_line_index(&self) -> usize {
        self.lines.len() - 1
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Token count of a line, 0 for out-of-range lines
    pub fn line_len(&self, index: usize) -> usize {
        self.lines.get(index).map(Line::len).unwrap_or(0)
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> + '_ {
        self.lines.iter()
    }

    /// Total token count across all lines
    pub fn token_count(&self) -> usize {
        self.lines.iter().map(Line::len).sum()
    }

    /// True when the buffer is a single empty line
    pub fn is_blank(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Plain-data rows for serialization and assertions
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.lines.iter().map(Line::to_strings).collect()
    }

    pub(crate) fn line_mut(&mut self, index: usize) -> &mut Line {
        &mut self.lines[index]
    }

    pub(crate) fn insert_line(&mut self, index: usize, line: Line) {
        self.lines.insert(index, line);
    }

    pub(crate) fn push_line(&mut self, line: Line) {
        self.lines.push_back(line);
    }

    /// Removes a line. The caller must keep at least one line in the buffer.
    pub(crate) fn remove_line(&mut self, index: usize) -> Line {
        debug_assert!(self.lines.len() > 1, "buffer must keep one line");
        self.lines.remove(index)
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl Serialize for Buffer {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_rows().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Buffer {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<String>>::deserialize(deserializer)?;
        Ok(Buffer::from_rows(rows))
    }
}
