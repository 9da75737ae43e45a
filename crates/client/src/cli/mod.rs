//! CLI command definitions.

pub mod environments;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_SERVER_URL;

/// CLI client for the Chef Server environments API.
#[derive(Debug, Parser)]
#[command(name = "chefenv-client")]
#[command(about = "CLI client for the Chef Server environments API", long_about = None)]
pub struct Cli {
    /// Organization base URL (e.g. https://chef.example.com/organizations/acme).
    #[arg(long, env = "CHEF_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Environment management.
    Environments(environments::EnvironmentsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use environments::EnvironmentsAction;

    #[test]
    fn test_parse_list_with_json_format() {
        let cli = Cli::try_parse_from([
            "chefenv-client",
            "--server-url",
            "http://chef.local",
            "--format",
            "json",
            "environments",
            "list",
        ])
        .unwrap();

        assert_eq!(cli.server_url, "http://chef.local");
        assert_eq!(cli.format, OutputFormat::Json);
        let Commands::Environments(cmd) = cli.command;
        assert!(matches!(cmd.action, EnvironmentsAction::List));
    }

    #[test]
    fn test_parse_cookbooks_num_versions() {
        let cli = Cli::try_parse_from([
            "chefenv-client",
            "environments",
            "cookbooks",
            "production",
            "--num-versions",
            "all",
        ])
        .unwrap();

        let Commands::Environments(cmd) = cli.command;
        match cmd.action {
            EnvironmentsAction::Cookbooks { name, num_versions } => {
                assert_eq!(name, "production");
                assert_eq!(num_versions.as_deref(), Some("all"));
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_create_requires_name_or_file() {
        let result = Cli::try_parse_from(["chefenv-client", "environments", "create"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cookbook_versions_collects_run_list() {
        let cli = Cli::try_parse_from([
            "chefenv-client",
            "environments",
            "cookbook-versions",
            "production",
            "recipe[nginx]",
            "role[web]",
        ])
        .unwrap();

        let Commands::Environments(cmd) = cli.command;
        match cmd.action {
            EnvironmentsAction::CookbookVersions { name, run_list } => {
                assert_eq!(name, "production");
                assert_eq!(run_list, vec!["recipe[nginx]", "role[web]"]);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }
}
