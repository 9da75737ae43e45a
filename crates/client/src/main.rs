//! chefenv-client CLI entry point.

use chefenv_client::cli::environments::{read_environment_file, EnvironmentsAction};
use chefenv_client::cli::{Cli, Commands, OutputFormat};
use chefenv_client::client::ChefClient;
use chefenv_client::config::ClientConfig;
use chefenv_client::error::ClientError;
use chefenv_client::output::{format_output, pretty};
use chefenv_core::environment::{Environment, RunListRequest};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays parseable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chefenv_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env().with_base_url(&cli.server_url);
    let client = ChefClient::with_config(config)?;
    tracing::debug!(base_url = client.base_url(), "Using Chef server");

    match cli.command {
        Commands::Environments(environments_cmd) => {
            let environments = client.environments();
            match environments_cmd.action {
                EnvironmentsAction::List => {
                    let result = environments.list().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&result, cli.format)),
                        OutputFormat::Pretty => {
                            print!("{}", pretty::format_environment_result(&result))
                        }
                    }
                }
                EnvironmentsAction::Create {
                    name,
                    description,
                    from_file,
                } => {
                    let environment = match (from_file, name) {
                        (Some(path), _) => read_environment_file(&path)?,
                        (None, Some(name)) => {
                            let environment = Environment::new(name);
                            match description {
                                Some(description) => environment.with_description(description),
                                None => environment,
                            }
                        }
                        (None, None) => {
                            return Err(ClientError::InvalidInput(
                                "either --name or --from-file is required".to_string(),
                            )
                            .into())
                        }
                    };
                    let result = environments.create(&environment).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&result, cli.format)),
                        OutputFormat::Pretty => {
                            if !cli.quiet {
                                println!("Created environment {}", environment.name);
                            }
                            print!("{}", pretty::format_str_map(&result))
                        }
                    }
                }
                EnvironmentsAction::Get { name } => {
                    let environment = environments.get(&name).await?;
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&environment, cli.format))
                        }
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_environment(&environment))
                        }
                    }
                }
                EnvironmentsAction::Put { from_file } => {
                    let environment = read_environment_file(&from_file)?;
                    let updated = environments.put(&environment).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&updated, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Updated:\n{}", pretty::format_environment(&updated))
                        }
                    }
                }
                EnvironmentsAction::Delete { name } => {
                    let deleted = environments.delete(&name).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&deleted, cli.format)),
                        OutputFormat::Pretty => {
                            if !cli.quiet {
                                println!("Deleted environment {}", deleted.name);
                            }
                        }
                    }
                }
                EnvironmentsAction::Cookbooks { name, num_versions } => {
                    let cookbooks = environments
                        .list_cookbooks(&name, num_versions.as_deref().unwrap_or_default())
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&cookbooks, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_cookbooks(&cookbooks)),
                    }
                }
                EnvironmentsAction::Cookbook {
                    name,
                    cookbook,
                    num_versions,
                } => {
                    let cookbooks = environments
                        .get_cookbook(
                            &name,
                            &cookbook,
                            num_versions.as_deref().unwrap_or_default(),
                        )
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&cookbooks, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_cookbooks(&cookbooks)),
                    }
                }
                EnvironmentsAction::CookbookVersions { name, run_list } => {
                    let resolved = environments
                        .cookbook_versions(&name, &RunListRequest::new(run_list))
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&resolved, cli.format)),
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_resolved_cookbooks(&resolved))
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
