//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// userctl - manage users on a REST backend
///
/// Lists, creates, updates and deletes users against a `/users`
/// collection, keeping its view of the server consistent after writes.
#[derive(Parser, Debug)]
#[command(name = "userctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "USERCTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// API base URL (overrides configuration)
    #[arg(long, global = true, env = "USERCTL_API_URL")]
    pub api_url: Option<String>,

    /// Skip local .userctl.toml discovery
    #[arg(long, global = true)]
    pub no_local: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all users
    List(ListArgs),

    /// Show one user's profile
    Show(ShowArgs),

    /// Add a new user
    Add(AddArgs),

    /// Edit a user's name and email
    Edit(EditArgs),

    /// Delete users
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Show or edit configuration
    Config(ConfigArgs),

    /// Initialize a project-local .userctl.toml config
    Init(InitArgs),
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// User id
    pub id: u64,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// User name (prompted for when omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// User email (prompted for when omitted)
    #[arg(short, long)]
    pub email: Option<String>,
}

/// Arguments for the edit command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// User id
    pub id: u64,

    /// New name (current one is kept when omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// New email (current one is kept when omitted)
    #[arg(short, long)]
    pub email: Option<String>,
}

/// Arguments for the delete command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// User ids to delete
    #[arg(required = true)]
    pub ids: Vec<u64>,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., api.base_url)
        key: String,
        /// Value to set
        value: String,
        /// Write to project-local .userctl.toml instead of global config
        #[arg(long)]
        local: bool,
    },
}

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite existing .userctl.toml
    #[arg(short, long)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}

/// Output format for list and show commands
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_list() {
        let cli = Cli::parse_from(["userctl", "list"]);
        match cli.command {
            Commands::List(args) => assert!(matches!(args.format, OutputFormat::Table)),
            _ => panic!("expected List command"),
        }
    }

    #[test]
    fn cli_parses_list_json() {
        let cli = Cli::parse_from(["userctl", "list", "--format", "json"]);
        match cli.command {
            Commands::List(args) => assert!(matches!(args.format, OutputFormat::Json)),
            _ => panic!("expected List command"),
        }
    }

    #[test]
    fn cli_parses_show() {
        let cli = Cli::parse_from(["userctl", "show", "3"]);
        match cli.command {
            Commands::Show(args) => assert_eq!(args.id, 3),
            _ => panic!("expected Show command"),
        }
    }

    #[test]
    fn cli_parses_add_with_flags() {
        let cli = Cli::parse_from(["userctl", "add", "--name", "Ana", "--email", "a@b.com"]);
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.name.as_deref(), Some("Ana"));
                assert_eq!(args.email.as_deref(), Some("a@b.com"));
            }
            _ => panic!("expected Add command"),
        }
    }

    #[test]
    fn cli_parses_edit() {
        let cli = Cli::parse_from(["userctl", "edit", "2", "--email", "new@b.com"]);
        match cli.command {
            Commands::Edit(args) => {
                assert_eq!(args.id, 2);
                assert!(args.name.is_none());
                assert_eq!(args.email.as_deref(), Some("new@b.com"));
            }
            _ => panic!("expected Edit command"),
        }
    }

    #[test]
    fn cli_parses_delete_many() {
        let cli = Cli::parse_from(["userctl", "delete", "3", "4", "--yes"]);
        match cli.command {
            Commands::Delete(args) => {
                assert_eq!(args.ids, vec![3, 4]);
                assert!(args.yes);
            }
            _ => panic!("expected Delete command"),
        }
    }

    #[test]
    fn cli_delete_requires_an_id() {
        assert!(Cli::try_parse_from(["userctl", "delete"]).is_err());
    }

    #[test]
    fn cli_rm_alias() {
        let cli = Cli::parse_from(["userctl", "rm", "7"]);
        assert!(matches!(cli.command, Commands::Delete(_)));
    }

    #[test]
    fn cli_parses_api_url_override() {
        let cli = Cli::parse_from(["userctl", "--api-url", "http://localhost:8080", "list"]);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn cli_no_local_flag() {
        let cli = Cli::parse_from(["userctl", "--no-local", "list"]);
        assert!(cli.no_local);
    }

    #[test]
    fn cli_verbose_levels() {
        let cli = Cli::parse_from(["userctl", "list"]);
        assert_eq!(cli.verbose, 0);

        let cli = Cli::parse_from(["userctl", "-vv", "list"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["userctl", "config", "set", "api.base_url", "http://x", "--local"]);
        match cli.command {
            Commands::Config(args) => match args.action {
                Some(ConfigAction::Set { key, value, local }) => {
                    assert_eq!(key, "api.base_url");
                    assert_eq!(value, "http://x");
                    assert!(local);
                }
                _ => panic!("expected Set action"),
            },
            _ => panic!("expected Config command"),
        }
    }

    #[test]
    fn cli_parses_init() {
        let cli = Cli::parse_from(["userctl", "init", "--force"]);
        match cli.command {
            Commands::Init(args) => assert!(args.force),
            _ => panic!("expected Init command"),
        }
    }
}
