//! chefenv_client - client and CLI for the Chef Server environments API.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;

pub use client::environments::EnvironmentService;
pub use client::{ApiClient, ChefClient};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
