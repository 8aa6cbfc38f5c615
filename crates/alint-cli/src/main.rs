//! CLI entrypoint for alint.

mod cli;
mod driver;
mod style;

use clap::Parser;

use alint_analysis::{Config, ConfigFile, MacroDirs};
use alint_syntax::grammar_listing;
use cli::Cli;
use driver::Driver;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{}", style::error(format!("Error: {err:#}")));
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (macro_dirs, missing) = MacroDirs::from_env();
    for name in missing {
        println!(
            "{}",
            style::warning(format!("warning: environment variable {name} is not set."))
        );
    }
    let macro_dirs = match &cli.config {
        Some(path) => {
            let file = ConfigFile::load(path)?;
            macro_dirs.with_file(&file)
        }
        None => macro_dirs,
    };
    let config = Config {
        macro_dirs,
        passes: cli.passes(),
    };
    tracing::debug!(?config, "configuration ready");

    if config.passes.show_grammar {
        print!("{}", grammar_listing());
    }

    let mut driver = Driver::new(&config);
    for file in &cli.files {
        print!("{}", driver.analyse(file));
    }
    Ok(())
}
