//! Pretty output formatting.

use std::collections::BTreeMap;

use chefenv_core::environment::{
    CookbookVersionsResult, Environment, EnvironmentCookbookResult, EnvironmentResult,
};

/// Format a string map as `key => value` lines, sorted by key.
///
/// Entries with an empty key are skipped.
pub fn format_str_map(map: &BTreeMap<String, String>) -> String {
    map.iter()
        .filter(|(k, _)| !k.is_empty())
        .map(|(k, v)| format!("{} => {}\n", k, v))
        .collect()
}

/// Format a list/create result for display.
pub fn format_environment_result(result: &EnvironmentResult) -> String {
    if result.is_empty() {
        return "No environments found.".to_string();
    }
    format_str_map(result)
}

/// Format an environment for display.
pub fn format_environment(env: &Environment) -> String {
    let mut output = env.name.clone();
    if !env.description.is_empty() {
        output.push_str(&format!("\n  Description: {}", env.description));
    }
    if env.cookbook_versions.is_empty() {
        output.push_str("\n  Cookbook versions: none");
    } else {
        output.push_str("\n  Cookbook versions:");
        for (cookbook, constraint) in &env.cookbook_versions {
            output.push_str(&format!("\n    {} {}", cookbook, constraint));
        }
    }
    if let Some(attrs) = &env.default_attributes {
        output.push_str(&format!("\n  Default attributes: {}", attrs));
    }
    if let Some(attrs) = &env.override_attributes {
        output.push_str(&format!("\n  Override attributes: {}", attrs));
    }
    output
}

/// Format the cookbooks available to an environment.
pub fn format_cookbooks(cookbooks: &EnvironmentCookbookResult) -> String {
    if cookbooks.is_empty() {
        return "No cookbooks found.".to_string();
    }
    let mut output = format!("COOKBOOKS ({})\n", cookbooks.len());
    output.push_str(&"-".repeat(40));
    for (name, versions) in cookbooks {
        let list: Vec<&str> = versions
            .versions
            .iter()
            .filter_map(|v| v.version.as_deref())
            .collect();
        if list.is_empty() {
            output.push_str(&format!("\n{}", name));
        } else {
            output.push_str(&format!("\n{}  {}", name, list.join(", ")));
        }
    }
    output
}

/// Format a resolved run list for display.
pub fn format_resolved_cookbooks(cookbooks: &CookbookVersionsResult) -> String {
    if cookbooks.is_empty() {
        return "No cookbooks resolved.".to_string();
    }
    let mut output = format!("RESOLVED ({})\n", cookbooks.len());
    output.push_str(&"-".repeat(40));
    for (name, cookbook) in cookbooks {
        output.push_str(&format!("\n{} {}", name, cookbook.version));
    }
    output
}
