use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// alpine-answers - load and validate setup-alpine answer files
#[derive(Parser)]
#[command(name = "alpine-answers")]
#[command(about = "Loader and validator for setup-alpine answer files")]
#[command(version)]
pub struct Cli {
    /// Treat validation warnings (unknown or duplicate options) as errors.
    ///
    /// Without this flag unknown options only warn, so answer files written
    /// for a newer installer keep validating.
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse an answer file and report warnings
    Validate {
        /// Path to the answer file
        file: PathBuf,
    },
    /// Print the parsed option mapping
    Show {
        /// Path to the answer file
        file: PathBuf,

        /// Emit the mapping as a JSON object instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the mapping as shell assignments for the installer environment
    Env {
        /// Path to the answer file
        file: PathBuf,
    },
    /// Write a fully commented starter answer file
    Template {
        /// Output path (prints to stdout when omitted)
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_requires_subcommand() {
        let result = Cli::try_parse_from(["alpine-answers"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_validate_command() {
        let result = Cli::try_parse_from(["alpine-answers", "validate", "/tmp/answers.txt"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        match cli.command {
            Commands::Validate { file } => {
                assert_eq!(file.to_str().unwrap(), "/tmp/answers.txt");
            }
            _ => panic!("Expected Validate command"),
        }
        assert!(!cli.strict);
    }

    #[test]
    fn test_cli_strict_is_global() {
        let result = Cli::try_parse_from([
            "alpine-answers",
            "validate",
            "/tmp/answers.txt",
            "--strict",
        ]);
        assert!(result.is_ok());
        assert!(result.unwrap().strict);
    }

    #[test]
    fn test_cli_show_json() {
        let result = Cli::try_parse_from(["alpine-answers", "show", "/tmp/answers.txt", "--json"]);
        assert!(result.is_ok());
        match result.unwrap().command {
            Commands::Show { json, .. } => assert!(json),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_env_command() {
        let result = Cli::try_parse_from(["alpine-answers", "env", "answers.txt"]);
        assert!(result.is_ok());
        assert!(matches!(result.unwrap().command, Commands::Env { .. }));
    }

    #[test]
    fn test_cli_template_to_stdout() {
        let result = Cli::try_parse_from(["alpine-answers", "template"]);
        assert!(result.is_ok());
        match result.unwrap().command {
            Commands::Template { output } => assert!(output.is_none()),
            _ => panic!("Expected Template command"),
        }
    }

    #[test]
    fn test_cli_template_to_file() {
        let result = Cli::try_parse_from(["alpine-answers", "template", "answers.txt"]);
        assert!(result.is_ok());
        match result.unwrap().command {
            Commands::Template { output } => {
                assert_eq!(output.unwrap().to_str().unwrap(), "answers.txt");
            }
            _ => panic!("Expected Template command"),
        }
    }
}
