//! CLI command implementations

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod align;
pub mod generate_config;
pub mod stats;

/// Windowed line alignment of parallel corpora
#[derive(Debug, Parser)]
#[command(name = "linealign", version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Align two corpora line by line
    Align(align::AlignArgs),

    /// Print word, line and vocabulary counts of corpus files
    Stats(stats::StatsArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Align(args) => args.execute(),
            Commands::Stats(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_align_command() {
        let cli = Cli::try_parse_from([
            "linealign",
            "align",
            "-a",
            "english.txt",
            "-b",
            "russian.txt",
            "--window",
            "6",
            "-f",
            "json",
            "-vv",
        ])
        .unwrap();

        match cli.command {
            Commands::Align(args) => {
                assert_eq!(args.corpus_a.to_str(), Some("english.txt"));
                assert_eq!(args.corpus_b.to_str(), Some("russian.txt"));
                assert_eq!(args.window, Some(6));
                assert_eq!(args.limit, None);
                assert_eq!(args.format, Some(OutputFormat::Json));
                assert_eq!(args.verbose, 2);
            }
            other => panic!("Should be Align, got {:?}", other),
        }
    }

    #[test]
    fn test_align_requires_both_corpora() {
        assert!(Cli::try_parse_from(["linealign", "align", "-a", "english.txt"]).is_err());
    }

    #[test]
    fn test_parse_stats_command() {
        let cli =
            Cli::try_parse_from(["linealign", "stats", "-i", "a.txt", "-i", "b.txt"]).unwrap();
        match cli.command {
            Commands::Stats(args) => assert_eq!(args.input.len(), 2),
            other => panic!("Should be Stats, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_generate_config_command() {
        let cli =
            Cli::try_parse_from(["linealign", "generate-config", "-o", "linealign.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::GenerateConfig(_)));
    }
}
