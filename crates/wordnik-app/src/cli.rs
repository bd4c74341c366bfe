use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Insert Wordnik definitions and related words into markdown notes
#[derive(Parser, Debug)]
#[command(name = "wordnik", version)]
pub struct Cli {
    /// Settings file (defaults to $WORDNIK_CONFIG or the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up the note's title and insert the result into the note
    Note {
        path: PathBuf,
        /// Print the result instead of inserting it
        #[arg(long)]
        print: bool,
    },
    /// Look up a search term, prompting for it when omitted
    Search {
        term: Option<String>,
        /// Append the result to this document instead of printing it
        #[arg(long)]
        into: Option<PathBuf>,
    },
    /// Read or change settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show every setting with its description
    Show,
    /// Print one setting
    Get { key: String },
    /// Change one setting and save it
    Set { key: String, value: String },
    /// Print the settings file location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_with_target() {
        let cli = Cli::parse_from(["wordnik", "search", "run", "--into", "notes/run.md", "-v"]);
        assert!(cli.verbose);
        match cli.command {
            Command::Search { term, into } => {
                assert_eq!(term.as_deref(), Some("run"));
                assert_eq!(into, Some(PathBuf::from("notes/run.md")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_config_set() {
        let cli = Cli::parse_from(["wordnik", "--config", "s.json", "config", "set", "max_definitions", "3"]);
        assert_eq!(cli.config, Some(PathBuf::from("s.json")));
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Set { ref key, ref value }) if key == "max_definitions" && value == "3"
        ));
    }

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
