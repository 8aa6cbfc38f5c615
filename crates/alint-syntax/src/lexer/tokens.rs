//! Token definitions for the alint macro scripting language.
//!
//! Every terminal of the grammar has one `TokenKind`. Whitespace is lexed as
//! its own kind so the token source can keep the skipped text; it never
//! reaches the parser.

use logos::Logos;

use crate::syntax::Symbol;

/// All token kinds of the macro scripting language.
///
/// The three macro-name classes overlap lexically with identifiers; they are
/// told apart purely by pattern and priority, never by context.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[derive(Default)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    /// Whitespace (spaces, tabs, newlines)
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    /// `IF`
    #[token("IF")]
    KwIf,

    /// `IFDEFINED` and its siblings
    #[token("IFDEFINED")]
    #[token("IFMMDEFINED")]
    #[token("IFDBDEFINED")]
    #[token("IFNOTDEFINED")]
    #[token("IFASCIIFILE")]
    KwIfDefined,

    /// `THEN`
    #[token("THEN")]
    KwThen,

    /// `ELSE`
    #[token("ELSE")]
    KwElse,

    /// `ENDIF`
    #[token("ENDIF")]
    KwEndIf,

    /// `FOR`
    #[token("FOR")]
    KwFor,

    /// `TO`
    #[token("TO")]
    KwTo,

    /// `STEP`
    #[token("STEP")]
    KwStep,

    /// `DO("guard")`, the guard string is part of the token
    #[regex(r#"DO\("[^"]*"\)"#)]
    KwDo,

    /// `ENDDO("guard")`
    #[regex(r#"ENDDO\("[^"]*"\)"#)]
    KwEndDo,

    /// Lower-case `endmacro`, terminates a file or a macro body
    #[token("endmacro")]
    KwEndmacro,

    /// `MACRO`
    #[token("MACRO")]
    KwMacroDef,

    /// `ENDMACRO`
    #[token("ENDMACRO")]
    KwEndMacroDef,

    // =========================================================================
    // MACRO NAMES
    // =========================================================================
    /// Inline macro defined in the same file: `Mname.mac`
    #[regex(r"M[_a-zA-Z0-9]+\.mac")]
    InlineMacroName,

    /// Project-relative macro: `_dir/name.mac`
    #[regex(r"_[_/a-zA-Z0-9]+\.mac")]
    LocalMacroName,

    /// Shared-repository macro: `dir/name.mac` (never starting with `M`)
    #[regex(r"[a-zA-LN-Z][-_/a-zA-Z0-9]*\.mac")]
    GlobalMacroName,

    // =========================================================================
    // COMMENTS
    // =========================================================================
    /// `## ...`
    #[regex(r"##[^\r\n]*", allow_greedy = true)]
    VisualComment,

    /// `# ...`
    #[regex(r"#[^\r\n]*", allow_greedy = true)]
    Comment,

    /// `! ...`, passed to the shell by the host application
    #[regex(r"![^\r\n]*", allow_greedy = true)]
    ShellEscape,

    // =========================================================================
    // LITERALS AND IDENTIFIERS
    // =========================================================================
    /// Floating point number: `1`, `1.`, `.5`, `1.5e-3`
    #[regex(r"((\.[0-9]+)|([0-9]+\.)|([0-9]+\.[0-9]+)|([0-9]+))([eE][+-]?[0-9]+)?", priority = 3)]
    Number,

    /// Identifier, may embed `#{...}` substitutions
    #[regex(r"[_a-zA-Z\.']([a-zA-Z0-9_\./']|(#\{[^}]*\}))*", priority = 1)]
    Ident,

    /// `"..."`
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    // =========================================================================
    // OPERATORS AND PUNCTUATION
    // =========================================================================
    /// `+`
    #[token("+")]
    Plus,

    /// `-`
    #[token("-")]
    Minus,

    /// `*`
    #[token("*")]
    Star,

    /// `/`
    #[token("/")]
    Slash,

    /// `=`, `=$`, `=%`, `=*`
    #[token("=")]
    #[token("=$")]
    #[token("=%")]
    #[token("=*")]
    Equal,

    /// `>`, `<`, `>=`, `<=`, `==`, `<>`
    #[token(">")]
    #[token("<")]
    #[token(">=")]
    #[token("<=")]
    #[token("==")]
    #[token("<>")]
    Comparison,

    /// `%`
    #[token("%")]
    Percent,

    /// `@`
    #[token("@")]
    At,

    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// `{`
    #[token("{")]
    LBrace,

    /// `}`
    #[token("}")]
    RBrace,

    /// `,`
    #[token(",")]
    Comma,

    /// `;`
    #[token(";")]
    Semicolon,

    // =========================================================================
    // SPECIAL TOKENS
    // =========================================================================
    /// Lexer error - unrecognized character
    #[default]
    Error,

    /// End of input marker (not produced by logos, appended by the token source)
    Eoi,
}

impl TokenKind {
    /// Returns `true` if this token is skipped text.
    #[inline]
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace)
    }

    /// Returns the grammar terminal for this token, `None` for trivia and errors.
    #[must_use]
    pub fn symbol(self) -> Option<Symbol> {
        Some(match self {
            Self::Whitespace | Self::Error => return None,
            Self::KwIf => Symbol::IfKw,
            Self::KwIfDefined => Symbol::IfDefKw,
            Self::KwThen => Symbol::ThenKw,
            Self::KwElse => Symbol::ElseKw,
            Self::KwEndIf => Symbol::EndifKw,
            Self::KwFor => Symbol::ForKw,
            Self::KwTo => Symbol::ToKw,
            Self::KwStep => Symbol::StepKw,
            Self::KwDo => Symbol::DoKw,
            Self::KwEndDo => Symbol::EnddoKw,
            Self::KwEndmacro => Symbol::EndmacroKw,
            Self::KwMacroDef => Symbol::DefmacroKw,
            Self::KwEndMacroDef => Symbol::EnddefmacroKw,
            Self::InlineMacroName => Symbol::InlineMacroName,
            Self::LocalMacroName => Symbol::LocalMacroName,
            Self::GlobalMacroName => Symbol::GlobalMacroName,
            Self::VisualComment => Symbol::VisualComment,
            Self::Comment => Symbol::Comment,
            Self::ShellEscape => Symbol::ShellEscape,
            Self::Number => Symbol::FpNumber,
            Self::Ident => Symbol::Identifier,
            Self::StringLiteral => Symbol::LiteralString,
            Self::Plus => Symbol::Plus,
            Self::Minus => Symbol::Minus,
            Self::Star => Symbol::Mult,
            Self::Slash => Symbol::Div,
            Self::Equal => Symbol::Equal,
            Self::Comparison => Symbol::Comparison,
            Self::Percent => Symbol::Percent,
            Self::At => Symbol::At,
            Self::LParen => Symbol::Lp,
            Self::RParen => Symbol::Rp,
            Self::LBrace => Symbol::Lb,
            Self::RBrace => Symbol::Rb,
            Self::Comma => Symbol::Comma,
            Self::Semicolon => Symbol::Semicolon,
            Self::Eoi => Symbol::Eoi,
        })
    }
}
