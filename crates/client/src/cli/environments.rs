//! Environment CLI commands.

use std::path::{Path, PathBuf};

use chefenv_core::environment::Environment;
use clap::{Parser, Subcommand};

use crate::error::{ClientError, Result};

/// Environment management commands.
#[derive(Debug, Parser)]
pub struct EnvironmentsCommand {
    #[command(subcommand)]
    pub action: EnvironmentsAction,
}

/// Available environment actions.
#[derive(Debug, Subcommand)]
pub enum EnvironmentsAction {
    /// List all environments.
    List,
    /// Create a new environment.
    Create {
        /// Environment name.
        #[arg(long, required_unless_present = "from_file")]
        name: Option<String>,
        /// Environment description.
        #[arg(long)]
        description: Option<String>,
        /// Read the full environment document from a JSON file.
        #[arg(long, conflicts_with = "name")]
        from_file: Option<PathBuf>,
    },
    /// Get environment by name.
    Get {
        /// Environment name.
        name: String,
    },
    /// Replace an environment with a JSON document.
    Put {
        /// JSON file holding the environment; its `name` selects the target.
        #[arg(long)]
        from_file: PathBuf,
    },
    /// Delete environment by name.
    Delete {
        /// Environment name.
        name: String,
    },
    /// List cookbooks available to an environment.
    Cookbooks {
        /// Environment name.
        name: String,
        /// Versions per cookbook ("0" or "all" for every version).
        #[arg(long)]
        num_versions: Option<String>,
    },
    /// Show the versions of one cookbook available to an environment.
    Cookbook {
        /// Environment name.
        name: String,
        /// Cookbook name.
        cookbook: String,
        /// Versions to return ("0" or "all" for every version).
        #[arg(long)]
        num_versions: Option<String>,
    },
    /// Resolve a run list against an environment's cookbook pins.
    CookbookVersions {
        /// Environment name.
        name: String,
        /// Run list items (e.g. "recipe[nginx@1.2.0]").
        #[arg(required = true)]
        run_list: Vec<String>,
    },
}

/// Load an environment document from a JSON file.
pub fn read_environment_file(path: &Path) -> Result<Environment> {
    let contents = std::fs::read_to_string(path)?;
    let environment: Environment = serde_json::from_str(&contents)?;
    if environment.name.is_empty() {
        return Err(ClientError::InvalidInput(format!(
            "{} has no environment name",
            path.display()
        )));
    }
    Ok(environment)
}
