mod paths;
mod types;

pub use paths::{
    environment_cookbook_path, environment_cookbook_versions_path, environment_cookbooks_path,
    environment_path, version_params, ENVIRONMENTS_PATH,
};
pub use types::{
    CookbookVersion, CookbookVersions, CookbookVersionsResult, Environment,
    EnvironmentCookbookResult, EnvironmentResult, ResolvedCookbook, RunListRequest,
    ENVIRONMENT_CHEF_TYPE, ENVIRONMENT_JSON_CLASS,
};
