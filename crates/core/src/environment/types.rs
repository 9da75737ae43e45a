use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value Chef stores in `chef_type` for environments.
pub const ENVIRONMENT_CHEF_TYPE: &str = "environment";

/// Value Chef stores in `json_class` for environments.
pub const ENVIRONMENT_JSON_CLASS: &str = "Chef::Environment";

/// A named configuration profile on the Chef server.
///
/// Attribute trees are free-form JSON. Missing fields decode to their
/// defaults, and nothing here is validated locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    pub name: String,
    pub description: String,
    pub chef_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_attributes: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_attributes: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_class: Option<String>,
    /// Cookbook name to version constraint (e.g. `"= 1.2.0"`, `"~> 2.0"`).
    pub cookbook_versions: BTreeMap<String, String>,
}

impl Environment {
    /// Creates an environment with the type tags Chef expects.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            chef_type: ENVIRONMENT_CHEF_TYPE.to_string(),
            json_class: Some(ENVIRONMENT_JSON_CLASS.to_string()),
            ..Self::default()
        }
    }

    /// Sets the description for this environment.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Pins a cookbook to a version constraint.
    pub fn with_cookbook_version(
        mut self,
        cookbook: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        self.cookbook_versions
            .insert(cookbook.into(), constraint.into());
        self
    }

    /// Sets the default attribute tree.
    pub fn with_default_attributes(mut self, attributes: Value) -> Self {
        self.default_attributes = Some(attributes);
        self
    }

    /// Sets the override attribute tree.
    pub fn with_override_attributes(mut self, attributes: Value) -> Self {
        self.override_attributes = Some(attributes);
        self
    }
}

/// Environment name to URL, as returned by list and create calls.
pub type EnvironmentResult = BTreeMap<String, String>;

/// Cookbook name to the versions available in an environment.
pub type EnvironmentCookbookResult = BTreeMap<String, CookbookVersions>;

/// The versions of one cookbook visible to an environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookbookVersions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<CookbookVersion>,
}

/// A single cookbook version reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookbookVersion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Request body for resolving a run list against an environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunListRequest {
    pub run_list: Vec<String>,
}

impl RunListRequest {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            run_list: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// A cookbook version picked by the server's dependency solver.
///
/// Only the identifying fields are typed; the rest of the manifest
/// (recipes, files, metadata) is kept as-is in `manifest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolvedCookbook {
    pub cookbook_name: String,
    pub version: String,
    pub name: String,
    #[serde(flatten)]
    pub manifest: serde_json::Map<String, Value>,
}

/// Cookbook name to the resolved cookbook, as returned by `cookbook_versions`.
pub type CookbookVersionsResult = BTreeMap<String, ResolvedCookbook>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_sets_type_tags() {
        let env = Environment::new("production");
        assert_eq!(env.name, "production");
        assert_eq!(env.chef_type, "environment");
        assert_eq!(env.json_class.as_deref(), Some("Chef::Environment"));
        assert!(env.cookbook_versions.is_empty());
    }

    #[test]
    fn test_serialize_omits_absent_attributes() {
        let env = Environment {
            name: "dev".to_string(),
            ..Environment::default()
        };
        let value = serde_json::to_value(&env).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "dev",
                "description": "",
                "chef_type": "",
                "cookbook_versions": {}
            })
        );
    }

    #[test]
    fn test_serialize_full_environment() {
        let env = Environment::new("production")
            .with_description("Production servers")
            .with_cookbook_version("nginx", "= 1.2.0")
            .with_default_attributes(json!({"port": 80}))
            .with_override_attributes(json!({"workers": 4}));
        let value = serde_json::to_value(&env).unwrap();

        assert_eq!(value["name"], "production");
        assert_eq!(value["description"], "Production servers");
        assert_eq!(value["chef_type"], "environment");
        assert_eq!(value["json_class"], "Chef::Environment");
        assert_eq!(value["cookbook_versions"]["nginx"], "= 1.2.0");
        assert_eq!(value["default_attributes"]["port"], 80);
        assert_eq!(value["override_attributes"]["workers"], 4);
        assert!(value.get("attributes").is_none());
    }

    #[test]
    fn test_deserialize_tolerates_missing_fields() {
        let env: Environment = serde_json::from_str(r#"{"name": "_default"}"#).unwrap();
        assert_eq!(env.name, "_default");
        assert_eq!(env.description, "");
        assert!(env.default_attributes.is_none());
        assert!(env.cookbook_versions.is_empty());
    }

    #[test]
    fn test_deserialize_server_document() {
        let body = r#"{
            "name": "staging",
            "description": "Staging",
            "chef_type": "environment",
            "json_class": "Chef::Environment",
            "default_attributes": {"app": {"debug": true}},
            "override_attributes": {},
            "cookbook_versions": {"apache2": "~> 3.0", "mysql": ">= 8.0.0"}
        }"#;
        let env: Environment = serde_json::from_str(body).unwrap();

        assert_eq!(env.name, "staging");
        assert_eq!(env.default_attributes, Some(json!({"app": {"debug": true}})));
        assert_eq!(env.override_attributes, Some(json!({})));
        assert_eq!(env.cookbook_versions.len(), 2);
        assert_eq!(env.cookbook_versions["mysql"], ">= 8.0.0");
    }

    #[test]
    fn test_cookbook_versions_decoding() {
        let body = r#"{
            "apache2": {
                "url": "http://chef/cookbooks/apache2",
                "versions": [
                    {"url": "http://chef/cookbooks/apache2/5.0.1", "version": "5.0.1"},
                    {"url": "http://chef/cookbooks/apache2/5.0.0", "version": "5.0.0"}
                ]
            },
            "empty": {"url": "http://chef/cookbooks/empty", "versions": []}
        }"#;
        let result: EnvironmentCookbookResult = serde_json::from_str(body).unwrap();

        assert_eq!(result["apache2"].versions.len(), 2);
        assert_eq!(result["apache2"].versions[0].version.as_deref(), Some("5.0.1"));
        assert!(result["empty"].versions.is_empty());
    }

    #[test]
    fn test_cookbook_versions_omit_empty_fields() {
        let value = serde_json::to_value(CookbookVersions::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_run_list_request_body() {
        let req = RunListRequest::new(["recipe[nginx]", "role[web]"]);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"run_list": ["recipe[nginx]", "role[web]"]})
        );
    }

    #[test]
    fn test_resolved_cookbook_keeps_manifest() {
        let body = r#"{
            "nginx": {
                "cookbook_name": "nginx",
                "version": "1.2.0",
                "name": "nginx-1.2.0",
                "recipes": [{"name": "default.rb"}]
            }
        }"#;
        let result: CookbookVersionsResult = serde_json::from_str(body).unwrap();
        let nginx = &result["nginx"];

        assert_eq!(nginx.version, "1.2.0");
        assert_eq!(nginx.name, "nginx-1.2.0");
        assert!(nginx.manifest.contains_key("recipes"));
        assert!(!nginx.manifest.contains_key("version"));
    }
}
