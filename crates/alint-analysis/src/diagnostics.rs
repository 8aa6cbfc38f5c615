//! Diagnostic types shared by every pass.
//!
//! All diagnostics render the same way: the coordinate, the severity and the
//! message on one line, then the offending source line and a caret under the
//! column.

use std::fmt;

use alint_syntax::{Coordinate, LexError, ParseError, TokenSource};

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticSeverity {
    /// The file could not be fully processed.
    Error,
    /// Advisory layout or consistency issue.
    Warning,
}

impl DiagnosticSeverity {
    /// The lower-case label used in rendered output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// A diagnostic code identifying the type of diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    // Errors (E001-E099)
    /// Unrecognized input.
    LexError,
    /// Unexpected lexeme.
    SyntaxError,

    // Guard warnings (W001-W009)
    /// `DO("x")` closed by `ENDDO("y")`.
    DoGuardMismatch,
    /// `MACRO Mx.mac` closed by `ENDMACRO My.mac`.
    MacroGuardMismatch,

    // Layout warnings (W010-W099)
    /// Statement following a keyword on the same line.
    KeywordBodyNotOnNewLine,
    /// Whitespace inside a for-loop bound.
    ForBoundSpacing,
    /// Comment or shell escape not at the start of a line.
    CommentNotOnNewLine,
    /// Comment or shell escape preceded by indentation.
    CommentIndented,
    /// Whitespace just inside the parentheses of an assignment.
    ParenthesisSpacing,
}

impl DiagnosticCode {
    /// Returns the string code (e.g., "W001").
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::LexError => "E001",
            Self::SyntaxError => "E002",
            Self::DoGuardMismatch => "W001",
            Self::MacroGuardMismatch => "W002",
            Self::KeywordBodyNotOnNewLine => "W010",
            Self::ForBoundSpacing => "W011",
            Self::CommentNotOnNewLine => "W012",
            Self::CommentIndented => "W013",
            Self::ParenthesisSpacing => "W014",
        }
    }

    /// Returns the default severity for this diagnostic code.
    #[must_use]
    pub fn severity(&self) -> DiagnosticSeverity {
        match self {
            Self::LexError | Self::SyntaxError => DiagnosticSeverity::Error,
            Self::DoGuardMismatch
            | Self::MacroGuardMismatch
            | Self::KeywordBodyNotOnNewLine
            | Self::ForBoundSpacing
            | Self::CommentNotOnNewLine
            | Self::CommentIndented
            | Self::ParenthesisSpacing => DiagnosticSeverity::Warning,
        }
    }
}

/// A diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The diagnostic code.
    pub code: DiagnosticCode,
    /// The severity level.
    pub severity: DiagnosticSeverity,
    /// Where the diagnostic points.
    pub coordinate: Coordinate,
    /// The diagnostic message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic with the code's default severity.
    pub fn new(code: DiagnosticCode, coordinate: Coordinate, message: impl Into<String>) -> Self {
        Self {
            severity: code.severity(),
            code,
            coordinate,
            message: message.into(),
        }
    }

    /// Returns true if this is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }

    /// Renders the diagnostic with the source line and caret taken from
    /// `source`. The line is left out when `source` does not hold it.
    #[must_use]
    pub fn render(&self, source: &TokenSource) -> String {
        let mut out = format!("{self}\n");
        if let Some(line) = source.line_text(self.coordinate.line) {
            out.push_str(line);
            out.push('\n');
            let column = self.coordinate.column.saturating_sub(1) as usize;
            out.push_str(&" ".repeat(column));
            out.push_str("^ here\n");
        }
        out
    }
}

impl From<&LexError> for Diagnostic {
    fn from(error: &LexError) -> Self {
        Self::new(
            DiagnosticCode::LexError,
            error.coordinate.clone(),
            error.to_string(),
        )
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(error: &ParseError) -> Self {
        Self::new(
            DiagnosticCode::SyntaxError,
            error.coordinate.clone(),
            error.to_string(),
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.coordinate,
            self.severity.label(),
            self.message
        )
    }
}

/// Collects the diagnostics of one pass.
#[derive(Debug, Default)]
pub struct DiagnosticBuilder {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a diagnostic with the code's default severity.
    pub fn add(&mut self, code: DiagnosticCode, coordinate: &Coordinate, message: impl Into<String>) {
        self.diagnostics
            .push(Diagnostic::new(code, coordinate.clone(), message));
    }

    /// Returns the collected diagnostics in emission order.
    #[must_use]
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
