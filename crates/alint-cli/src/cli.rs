//! CLI definitions for alint.

use std::path::PathBuf;

use alint_analysis::Passes;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "alint",
    version,
    about = "Lint, check and reformat macro scripts",
    after_help = "Examples:\n  alint main.mac                 # parse only\n  alint -c -r main.mac           # check main.mac and every macro it reaches\n  alint -f main.mac > fixed.mac  # reformat\n  alint --highlight main.mac > main.html"
)]
pub struct Cli {
    /// Only tokenize the input files.
    #[arg(short = 'l', long = "lex")]
    pub lex_only: bool,
    /// Dump tokens (with --lex) or the parse tree.
    #[arg(short, long)]
    pub verbose: bool,
    /// Run the guard and layout checkers.
    #[arg(short, long)]
    pub check: bool,
    /// Print the files each input depends on directly.
    #[arg(short, long)]
    pub dependencies: bool,
    /// Follow dependencies transitively, running the other passes on each file.
    #[arg(short, long)]
    pub recursive: bool,
    /// Print the reformatted source.
    #[arg(short = 'f', long = "format")]
    pub reformat: bool,
    /// Print the source as an HTML page.
    #[arg(long)]
    pub highlight: bool,
    /// Do not print success messages.
    #[arg(short, long)]
    pub silent: bool,
    /// Print the grammar productions.
    #[arg(short = 'g', long = "grammar")]
    pub show_grammar: bool,
    /// TOML file overriding the macro directories.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Macro files to analyse.
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    pub fn passes(&self) -> Passes {
        Passes {
            lex_only: self.lex_only,
            verbose: self.verbose,
            check: self.check,
            dependencies: self.dependencies,
            recursive: self.recursive,
            reformat: self.reformat,
            highlight: self.highlight,
            silent: self.silent,
            show_grammar: self.show_grammar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags_map_to_passes() {
        let cli = Cli::try_parse_from(["alint", "-c", "-r", "-s", "a.mac", "b.mac"]).unwrap();
        let passes = cli.passes();
        assert!(passes.check && passes.recursive && passes.silent);
        assert!(!passes.lex_only && !passes.reformat);
        assert_eq!(cli.files.len(), 2);
    }

    #[test]
    fn test_files_are_required() {
        assert!(Cli::try_parse_from(["alint", "-c"]).is_err());
        assert!(Cli::try_parse_from(["alint", "-g"]).is_err());
    }
}
