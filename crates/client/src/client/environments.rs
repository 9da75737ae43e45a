//! Environment API operations.
//!
//! Chef API docs: <https://docs.chef.io/server/api_chef_server/#environments>

use chefenv_core::environment::{
    environment_cookbook_path, environment_cookbook_versions_path, environment_cookbooks_path,
    environment_path, CookbookVersionsResult, Environment, EnvironmentCookbookResult,
    EnvironmentResult, RunListRequest, ENVIRONMENTS_PATH,
};
use reqwest::Method;

use super::{json_reader, ApiClient};
use crate::error::Result;

/// Accessor for the `environments` endpoints.
///
/// Every method is a single round trip through the injected client; errors
/// are returned exactly as the client produced them.
#[derive(Debug)]
pub struct EnvironmentService<'a, C> {
    client: &'a C,
}

impl<'a, C: ApiClient> EnvironmentService<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// List the environments on the Chef server.
    pub async fn list(&self) -> Result<EnvironmentResult> {
        self.client
            .magic_request_decoder(Method::GET, ENVIRONMENTS_PATH, None)
            .await
    }

    /// Create an environment.
    pub async fn create(&self, environment: &Environment) -> Result<EnvironmentResult> {
        let body = json_reader(environment)?;
        self.client
            .magic_request_decoder(Method::POST, ENVIRONMENTS_PATH, Some(body))
            .await
    }

    /// Get an environment by name.
    pub async fn get(&self, name: &str) -> Result<Environment> {
        self.client
            .magic_request_decoder(Method::GET, &environment_path(name), None)
            .await
    }

    /// Write an environment, keyed by its name.
    pub async fn put(&self, environment: &Environment) -> Result<Environment> {
        let path = environment_path(&environment.name);
        let body = json_reader(environment)?;
        self.client
            .magic_request_decoder(Method::PUT, &path, Some(body))
            .await
    }

    /// Delete an environment. The server answers with the deleted document.
    pub async fn delete(&self, name: &str) -> Result<Environment> {
        self.client
            .magic_request_decoder(Method::DELETE, &environment_path(name), None)
            .await
    }

    /// List the cookbooks and versions available to an environment.
    ///
    /// `num_versions` limits versions per cookbook: `""` keeps the server
    /// default, `"0"` or `"all"` returns every version.
    pub async fn list_cookbooks(
        &self,
        name: &str,
        num_versions: &str,
    ) -> Result<EnvironmentCookbookResult> {
        self.client
            .magic_request_decoder(
                Method::GET,
                &environment_cookbooks_path(name, num_versions),
                None,
            )
            .await
    }

    /// Get the versions of one cookbook available to an environment.
    pub async fn get_cookbook(
        &self,
        name: &str,
        cookbook: &str,
        num_versions: &str,
    ) -> Result<EnvironmentCookbookResult> {
        self.client
            .magic_request_decoder(
                Method::GET,
                &environment_cookbook_path(name, cookbook, num_versions),
                None,
            )
            .await
    }

    /// Resolve a run list to the cookbook versions, dependencies included,
    /// that the environment's pins allow. Run list items may carry an
    /// `@version` constraint.
    pub async fn cookbook_versions(
        &self,
        name: &str,
        run_list: &RunListRequest,
    ) -> Result<CookbookVersionsResult> {
        let body = json_reader(run_list)?;
        self.client
            .magic_request_decoder(
                Method::POST,
                &environment_cookbook_versions_path(name),
                Some(body),
            )
            .await
    }
}
