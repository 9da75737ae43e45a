//! Pure functions that build the relative request paths for environment endpoints.
//!
//! Paths are relative to the organization base URL and carry no leading slash,
//! matching the Chef Server API layout.

/// Path of the environments collection.
pub const ENVIRONMENTS_PATH: &str = "environments";

/// Path of a single environment.
///
/// The name is percent-encoded, so characters Chef never allows in names
/// (spaces, `/`) cannot alter the path. Valid names pass through unchanged.
///
/// # Examples
///
/// ```
/// use chefenv_core::environment::environment_path;
///
/// assert_eq!(environment_path("production"), "environments/production");
/// ```
pub fn environment_path(name: &str) -> String {
    format!("{}/{}", ENVIRONMENTS_PATH, urlencoding::encode(name))
}

/// Path listing the cookbooks available to an environment.
pub fn environment_cookbooks_path(name: &str, num_versions: &str) -> String {
    version_params(
        &format!("{}/cookbooks", environment_path(name)),
        num_versions,
    )
}

/// Path listing the versions of one cookbook available to an environment.
///
/// Both the environment and cookbook names are percent-encoded.
pub fn environment_cookbook_path(name: &str, cookbook: &str, num_versions: &str) -> String {
    version_params(
        &format!(
            "{}/cookbooks/{}",
            environment_path(name),
            urlencoding::encode(cookbook)
        ),
        num_versions,
    )
}

/// Path resolving a run list against an environment's cookbook pins.
pub fn environment_cookbook_versions_path(name: &str) -> String {
    format!("{}/cookbook_versions", environment_path(name))
}

/// Appends the `num_versions` query parameter to `path`.
///
/// `"0"` asks for every version and is sent as `all`; an empty value leaves
/// the path untouched so the server applies its own default.
///
/// # Examples
///
/// ```
/// use chefenv_core::environment::version_params;
///
/// assert_eq!(version_params("environments/dev/cookbooks", "0"), "environments/dev/cookbooks?num_versions=all");
/// assert_eq!(version_params("environments/dev/cookbooks", ""), "environments/dev/cookbooks");
/// ```
pub fn version_params(path: &str, num_versions: &str) -> String {
    let num_versions = if num_versions == "0" {
        "all"
    } else {
        num_versions
    };

    if num_versions.is_empty() {
        path.to_string()
    } else {
        format!("{}?num_versions={}", path, urlencoding::encode(num_versions))
    }
}
