//! Token and whitespace source.
//!
//! A [`TokenSource`] scans one file at a time into a fully buffered table of
//! lexemes. Next to each lexeme it keeps the raw whitespace skipped right
//! before it, so `whitespace(id)` always precedes `lexeme(id)`. The trailing
//! end-of-input lexeme carries whatever whitespace ends the file.
//!
//! Unrecognized characters are reported as [`LexError`]s and dropped; they
//! show up neither as lexemes nor as whitespace.

mod line_index;

pub use line_index::LineIndex;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use smol_str::SmolStr;
use text_size::TextSize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::lexer::{Lexer, TokenKind};
use crate::syntax::{Coordinate, LexemeId, Symbol};

/// A file could not be read.
#[derive(Debug, Error)]
#[error("cannot read {}: {source}", path.display())]
pub struct SourceError {
    /// The path that failed.
    pub path: PathBuf,
    /// The underlying I/O error.
    #[source]
    pub source: std::io::Error,
}

/// Unrecognized input. The scan continues past it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected character sequence \"{text}\"")]
pub struct LexError {
    /// Where the unrecognized text starts.
    pub coordinate: Coordinate,
    /// The unrecognized text.
    pub text: SmolStr,
}

/// One scanned token instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    /// The terminal symbol.
    pub symbol: Symbol,
    /// Literal text; empty for end of input.
    pub text: SmolStr,
    /// 1-based sequence id.
    pub id: LexemeId,
    /// Where the lexeme starts.
    pub coordinate: Coordinate,
}

/// Buffered lexemes and inter-lexeme whitespace of one file.
#[derive(Debug)]
pub struct TokenSource {
    path: Arc<Path>,
    text: String,
    line_index: LineIndex,
    lexemes: Vec<Lexeme>,
    whitespace: Vec<SmolStr>,
    errors: Vec<LexError>,
}

impl Default for TokenSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSource {
    /// Creates an empty source with no file loaded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: Arc::from(Path::new("")),
            text: String::new(),
            line_index: LineIndex::default(),
            lexemes: Vec::new(),
            whitespace: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Reads and scans `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the file cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let mut source = Self::new();
        source.reset(path)?;
        Ok(source)
    }

    /// Drops the buffers of the current file, then reads and scans `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the file cannot be read. The source is left
    /// empty in that case. Bytes that are not UTF-8 become U+FFFD.
    pub fn reset(&mut self, path: impl AsRef<Path>) -> Result<(), SourceError> {
        let path = path.as_ref();
        self.clear();
        let bytes = std::fs::read(path).map_err(|source| SourceError {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).unwrap_or_else(|err| {
            warn!(path = %path.display(), "file is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        });
        self.load_str(path, text);
        Ok(())
    }

    /// Scans in-memory `text` as if it were the content of `path`.
    pub fn load_str(&mut self, path: impl AsRef<Path>, text: impl Into<String>) {
        self.clear();
        self.path = Arc::from(path.as_ref());
        self.text = text.into();
        self.line_index = LineIndex::new(&self.text);
        self.scan();
    }

    fn clear(&mut self) {
        self.path = Arc::from(Path::new(""));
        self.text.clear();
        self.line_index = LineIndex::default();
        self.lexemes.clear();
        self.whitespace.clear();
        self.errors.clear();
    }

    fn scan(&mut self) {
        let mut pending = String::new();
        for token in Lexer::new(&self.text) {
            let start = usize::from(token.range.start());
            let end = usize::from(token.range.end());
            let text = &self.text[start..end];
            match token.kind.symbol() {
                None if token.kind == TokenKind::Whitespace => pending.push_str(text),
                None => {
                    let error = LexError {
                        coordinate: self.coordinate_at(token.range.start()),
                        text: SmolStr::new(text),
                    };
                    warn!(coordinate = %error.coordinate, "{error}");
                    self.errors.push(error);
                }
                Some(symbol) => {
                    let lexeme = Lexeme {
                        symbol,
                        text: SmolStr::new(text),
                        id: LexemeId::from_index(self.lexemes.len()),
                        coordinate: self.coordinate_at(token.range.start()),
                    };
                    self.lexemes.push(lexeme);
                    self.whitespace.push(SmolStr::new(&pending));
                    pending.clear();
                }
            }
        }

        let end = TextSize::of(self.text.as_str());
        self.lexemes.push(Lexeme {
            symbol: Symbol::Eoi,
            text: SmolStr::default(),
            id: LexemeId::from_index(self.lexemes.len()),
            coordinate: self.coordinate_at(end),
        });
        self.whitespace.push(SmolStr::new(&pending));

        debug!(
            path = %self.path.display(),
            lexemes = self.lexemes.len(),
            errors = self.errors.len(),
            "scanned file"
        );
    }

    fn coordinate_at(&self, offset: TextSize) -> Coordinate {
        let (line, column) = self.line_index.line_col(&self.text, offset);
        Coordinate::new(Arc::clone(&self.path), line, column)
    }

    /// The path of the loaded file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full text of the loaded file.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of lexemes, end of input included.
    #[must_use]
    pub fn lexeme_count(&self) -> usize {
        self.lexemes.len()
    }

    /// All lexemes in scan order.
    #[must_use]
    pub fn lexemes(&self) -> &[Lexeme] {
        &self.lexemes
    }

    /// The lexeme with the given id.
    #[must_use]
    pub fn lexeme(&self, id: LexemeId) -> Option<&Lexeme> {
        self.lexemes.get(id.index())
    }

    /// The coordinate of the lexeme with the given id.
    #[must_use]
    pub fn coordinate(&self, id: LexemeId) -> Option<&Coordinate> {
        self.lexeme(id).map(|lexeme| &lexeme.coordinate)
    }

    /// Whitespace skipped right before the lexeme with the given id.
    #[must_use]
    pub fn whitespace(&self, id: LexemeId) -> Option<&str> {
        self.whitespace.get(id.index()).map(SmolStr::as_str)
    }

    /// Text of a 1-based line, for diagnostics.
    #[must_use]
    pub fn line_text(&self, line: u32) -> Option<&str> {
        self.line_index.line_text(&self.text, line)
    }

    /// Lexical errors found by the last scan.
    #[must_use]
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }
}
