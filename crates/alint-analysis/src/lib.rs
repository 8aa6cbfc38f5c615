//! `alint-analysis` - Passes over parsed macro files.
//!
//! Every pass takes a parse tree together with the [`TokenSource`] it was
//! parsed from:
//!
//! - [`check_guards`]: `DO`/`ENDDO` and `MACRO`/`ENDMACRO` pairing
//! - [`check_style`]: layout conventions
//! - [`direct_dependencies`] and [`walk_dependencies`]: referenced files
//! - [`reformat`]: canonical indentation
//! - [`highlight`]: HTML rendering
//!
//! [`TokenSource`]: alint_syntax::TokenSource

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod dependencies;
pub mod diagnostics;
pub mod guards;
pub mod highlight;
pub mod reformat;
pub mod style;

pub use config::{Config, ConfigError, ConfigFile, MacroDirs, Passes};
pub use dependencies::{
    direct_dependencies, load_and_parse, transitive_dependencies, walk_dependencies,
    DependencyWalk, FileError, WalkVisitor,
};
pub use diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSeverity};
pub use guards::check_guards;
pub use highlight::{highlight, highlight_document};
pub use reformat::reformat;
pub use style::check_style;
