//! Output formatting functions.

pub mod pretty;

use crate::cli::OutputFormat;

/// Format a value for output.
///
/// `Json` is compact so the output can be piped into other tools; `Pretty`
/// falls back to indented JSON for values without a dedicated formatter.
pub fn format_output<T: serde::Serialize>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(value).unwrap_or_default(),
        OutputFormat::Pretty => serde_json::to_string_pretty(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chefenv_core::environment::EnvironmentResult;

    #[test]
    fn test_json_is_compact() {
        let mut result = EnvironmentResult::new();
        result.insert("dev".to_string(), "http://chef/environments/dev".to_string());

        assert_eq!(
            format_output(&result, OutputFormat::Json),
            r#"{"dev":"http://chef/environments/dev"}"#
        );
    }

    #[test]
    fn test_pretty_is_indented() {
        let value = serde_json::json!({"name": "dev"});
        assert_eq!(
            format_output(&value, OutputFormat::Pretty),
            "{\n  \"name\": \"dev\"\n}"
        );
    }
}
