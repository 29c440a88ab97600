//! cssdoc CLI - styleguide generator for documented stylesheets.
//!
//! Provides commands for:
//! - `build`: Generate the styleguide page from a stylesheet directory
//! - `themes`: List the bundled highlight themes

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::BuildArgs;
use output::Output;

/// cssdoc - styleguide generator.
#[derive(Parser)]
#[command(name = "cssdoc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the styleguide.
    Build(BuildArgs),
    /// List bundled highlight themes.
    Themes,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Build(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Themes => {
            commands::themes::execute();
            Ok(())
        }
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_verbose_flag() {
        let cli = Cli::try_parse_from(["cssdoc", "build", "-v", "--base", "/ui/"]).unwrap();
        assert!(matches!(cli.command, Commands::Build(args) if args.verbose));
    }

    #[test]
    fn test_themes_takes_no_arguments() {
        assert!(Cli::try_parse_from(["cssdoc", "themes", "extra"]).is_err());
    }
}
