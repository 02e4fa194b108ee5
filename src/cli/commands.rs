use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tl", about = concat!("[x] tally v", env!("CARGO_PKG_VERSION"), " - a checklist with progress"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: ./tally.toml if present)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a command script headlessly and print the resulting list
    Run(RunArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Script file, or `-` for stdin
    pub script: String,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
    /// Exit non-zero if any line failed
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["tl"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn run_with_flags() {
        let cli = Cli::try_parse_from(["tl", "-v", "run", "list.txt", "--json", "-c", "x.toml"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        match cli.command {
            Some(Commands::Run(args)) => {
                assert_eq!(args.script, "list.txt");
                assert!(args.json);
                assert!(!args.strict);
            }
            None => panic!("expected run"),
        }
    }

    #[test]
    fn run_needs_script() {
        assert!(Cli::try_parse_from(["tl", "run"]).is_err());
    }

    #[test]
    fn clap_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
