//! Per-file pass execution.
//!
//! Output of one input file is collected into a string so the caller decides
//! where it goes. A failing file is reported and never aborts the run.

use std::collections::BTreeSet;
use std::path::Path;

use alint_analysis::{
    check_guards, check_style, direct_dependencies, highlight_document, load_and_parse, reformat,
    walk_dependencies, Config, Diagnostic, FileError, WalkVisitor,
};
use alint_syntax::{Node, Symbol, TokenSource};
use tracing::{debug, info};

use crate::style;

/// Runs the configured passes, reusing one token source for every file.
pub struct Driver<'c> {
    config: &'c Config,
    source: TokenSource,
}

impl<'c> Driver<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self {
            config,
            source: TokenSource::new(),
        }
    }

    /// Analyses `path` and returns everything to print for it.
    pub fn analyse(&mut self, path: &Path) -> String {
        let mut report = Report {
            config: self.config,
            out: String::new(),
        };
        let name = path.to_string_lossy();
        let passes = &self.config.passes;
        debug!(path = %name, ?passes, "analysing file");

        if passes.lex_only {
            report.lex(&name, &mut self.source);
        } else if passes.recursive {
            let walk = walk_dependencies(
                &name,
                &self.config.macro_dirs,
                &mut self.source,
                &mut report,
            );
            info!(
                root = %name,
                files = walk.visited.len(),
                failures = walk.failures.len(),
                "recursive analysis finished"
            );
            report.reached(&name, &walk.visited);
        } else {
            match load_and_parse(&mut self.source, &name) {
                Ok(tree) => report.parsed(&name, &self.source, &tree),
                Err(error) => report.failed(&name, &self.source, &error),
            }
        }
        report.out
    }
}

struct Report<'c> {
    config: &'c Config,
    out: String,
}

impl Report<'_> {
    fn line(&mut self, text: impl AsRef<str>) {
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    fn diagnostic(&mut self, diagnostic: &Diagnostic, source: &TokenSource) {
        let rendered = diagnostic.render(source);
        let (head, rest) = rendered.split_once('\n').unwrap_or((rendered.as_str(), ""));
        let head = if diagnostic.is_error() {
            style::error(head)
        } else {
            style::warning(head)
        };
        self.line(head);
        self.out.push_str(rest);
    }

    fn lexical_errors(&mut self, source: &TokenSource) {
        for error in source.errors() {
            self.diagnostic(&Diagnostic::from(error), source);
        }
    }

    /// The files reached by a recursive walk, in path order.
    fn reached(&mut self, root: &str, visited: &BTreeSet<String>) {
        if !self.config.passes.silent {
            let count = visited.len();
            self.line(style::success(format!("{root}: {count} files reached")));
        }
        for path in visited {
            self.line(path);
        }
    }

    fn lex(&mut self, path: &str, source: &mut TokenSource) {
        if let Err(error) = source.reset(path) {
            self.line(style::error(format!("error: {error}")));
            return;
        }
        self.lexical_errors(source);
        if self.config.passes.verbose {
            for lexeme in source.lexemes() {
                if lexeme.symbol != Symbol::Eoi {
                    self.line(format!("{} {}", lexeme.symbol, lexeme.text));
                }
            }
        }
        if !self.config.passes.silent {
            self.line(style::success(format!("{path}: lexing succeed")));
        }
    }
}

impl WalkVisitor for Report<'_> {
    fn parsed(&mut self, path: &str, source: &TokenSource, tree: &Node) {
        let passes = self.config.passes;
        self.lexical_errors(source);
        if !passes.silent {
            self.line(style::success(format!("{path}: parsing succeed")));
        }
        if passes.verbose {
            self.out.push_str(&tree.show());
        }
        if passes.check {
            let mut diagnostics = check_guards(tree);
            diagnostics.extend(check_style(tree, source));
            for diagnostic in &diagnostics {
                self.diagnostic(diagnostic, source);
            }
        }
        if passes.dependencies {
            for dependency in direct_dependencies(tree, &self.config.macro_dirs) {
                self.line(dependency);
            }
        }
        if passes.reformat {
            self.out.push_str(&reformat(tree, source));
        }
        if passes.highlight {
            self.out
                .push_str(&highlight_document(tree, source, &self.config.macro_dirs));
        }
    }

    fn failed(&mut self, _path: &str, source: &TokenSource, error: &FileError) {
        self.lexical_errors(source);
        match error {
            FileError::Parse(error) => self.diagnostic(&Diagnostic::from(error), source),
            FileError::Source(error) => self.line(style::error(format!("error: {error}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alint_analysis::{MacroDirs, Passes};
    use expect_test::expect;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(name: &str) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let path = std::env::temp_dir().join(format!("alint-cli-{name}-{stamp}"));
        fs::create_dir_all(&path).expect("create temp dir");
        path
    }

    fn run(passes: Passes, dir: &Path, file: &str) -> String {
        let config = Config {
            macro_dirs: MacroDirs::new(format!("{}/", dir.display()), ""),
            passes,
        };
        let mut driver = Driver::new(&config);
        driver
            .analyse(&dir.join(file))
            .replace(&format!("{}/", dir.display()), "")
    }

    #[test]
    fn test_check_pass_output() {
        let dir = temp_dir("check");
        fs::write(
            dir.join("main.mac"),
            "FOR i=0 TO 10 DO(\"L1\")\n x\n ENDDO(\"L2\")\nendmacro\n",
        )
        .unwrap();
        let passes = Passes {
            check: true,
            ..Passes::default()
        };
        expect![[r#"
main.mac: parsing succeed
main.mac:3:2 warning: DO "L1" doesn't match ENDDO "L2" guard value
 ENDDO("L2")
 ^ here
"#]]
        .assert_eq(&run(passes, &dir, "main.mac"));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_syntax_error_output() {
        let dir = temp_dir("syntax");
        fs::write(dir.join("bad.mac"), "(x = 1 y)\nendmacro\n").unwrap();
        let passes = Passes {
            silent: true,
            ..Passes::default()
        };
        expect![[r#"
bad.mac:1:8 error: unexpected identifier (y).
(x = 1 y)
       ^ here
"#]]
        .assert_eq(&run(passes, &dir, "bad.mac"));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_lex_only_verbose() {
        let dir = temp_dir("lex");
        fs::write(dir.join("a.mac"), "x $\nendmacro").unwrap();
        let passes = Passes {
            lex_only: true,
            verbose: true,
            ..Passes::default()
        };
        expect![[r#"
a.mac:1:3 error: unexpected character sequence "$"
x $
  ^ here
identifier x
endmacro_kw endmacro
a.mac: lexing succeed
"#]]
        .assert_eq(&run(passes, &dir, "a.mac"));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_recursive_dependencies() {
        let dir = temp_dir("recursive");
        fs::write(dir.join("a.mac"), "b.mac()\nendmacro\n").unwrap();
        fs::write(dir.join("b.mac"), "a.mac()\nc.mac()\nendmacro\n").unwrap();
        let passes = Passes {
            recursive: true,
            dependencies: true,
            ..Passes::default()
        };
        let output = run(passes, &dir, "a.mac");
        assert!(output.starts_with("a.mac: parsing succeed\nb.mac\nb.mac: parsing succeed\n"));
        assert!(output.contains("error: cannot read c.mac"));
        assert_eq!(output.matches("parsing succeed").count(), 2);
        assert!(output.ends_with("a.mac: 3 files reached\na.mac\nb.mac\nc.mac\n"));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = temp_dir("missing");
        let output = run(Passes::default(), &dir, "nope.mac");
        assert!(output.starts_with("error: cannot read nope.mac"));
        fs::remove_dir_all(dir).ok();
    }
}
