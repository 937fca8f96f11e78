use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::dirtree::SortOrder;

/// printtree - Render trees as indented ASCII diagrams
#[derive(Parser, Debug)]
#[command(name = "printtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH", env = "PRINTTREE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the built-in example tree
    Demo,

    /// Render a directory hierarchy
    Dir(DirArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct DirArgs {
    /// Directory to render
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Include hidden files
    #[arg(short, long)]
    pub all: bool,

    /// Deepest level to expand
    #[arg(short = 'd', long, value_name = "N", value_parser = parse_depth)]
    pub max_depth: Option<usize>,

    /// Entry order within a directory
    #[arg(long, value_enum, value_name = "BY")]
    pub sort: Option<SortOrder>,

    /// Show file sizes
    #[arg(short, long)]
    pub sizes: bool,

    /// Follow symbolic links
    #[arg(short = 'L', long)]
    pub follow_links: bool,
}

fn parse_depth(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("depth must be at least 1".to_string()),
        Ok(depth) => Ok(depth),
        Err(err) => Err(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Validates the CLI definition is correct
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_demo_command() {
        let cli = Cli::parse_from(["printtree", "demo"]);
        assert!(matches!(cli.command, Command::Demo));
    }

    #[test]
    fn parse_dir_with_options() {
        let cli = Cli::parse_from([
            "printtree",
            "dir",
            "--all",
            "--max-depth",
            "2",
            "--sort",
            "dirs-first",
            "-s",
            "/projects",
        ]);
        match cli.command {
            Command::Dir(args) => {
                assert_eq!(args.path, PathBuf::from("/projects"));
                assert!(args.all);
                assert_eq!(args.max_depth, Some(2));
                assert_eq!(args.sort, Some(SortOrder::DirsFirst));
                assert!(args.sizes);
                assert!(!args.follow_links);
            }
            _ => panic!("Expected Dir command"),
        }
    }

    #[test]
    fn dir_defaults_to_current_directory() {
        let cli = Cli::parse_from(["printtree", "dir"]);
        match cli.command {
            Command::Dir(args) => {
                assert_eq!(args.path, PathBuf::from("."));
                assert_eq!(args.max_depth, None);
                assert_eq!(args.sort, None);
            }
            _ => panic!("Expected Dir command"),
        }
    }

    #[test]
    fn zero_depth_is_rejected() {
        let result = Cli::try_parse_from(["printtree", "dir", "-d", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_verbose_flag() {
        let cli = Cli::parse_from(["printtree", "-vvv", "demo"]);
        assert_eq!(cli.verbose, 3);
    }
}
