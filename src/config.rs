use serde::Deserialize;

/// Grammar options for [`VersionParser`](crate::VersionParser)
///
/// The defaults accept exactly the full `SELECT version()` format.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GrammarConfig {
    /// Require the ` on <host>, compiled by <compiler>, <n>-bit` suffix.
    /// When disabled, each of the three parts becomes optional on its own,
    /// in that order, mirroring how versions are rendered.
    pub require_build_info: bool,
    /// Accept the version text embedded in a longer string, such as a
    /// psql result row or a log line.
    pub allow_surrounding_text: bool,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            require_build_info: true,
            allow_surrounding_text: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn grammar_config_from_empty_object_uses_defaults() {
        let result = serde_json::from_value::<GrammarConfig>(json!({})).unwrap();

        assert_eq!(result, GrammarConfig::default());
        assert!(result.require_build_info);
        assert!(!result.allow_surrounding_text);
    }

    #[test]
    fn grammar_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<GrammarConfig>(json!({
            "allowSurroundingText": true
        }))
        .unwrap();

        assert_eq!(
            result,
            GrammarConfig {
                require_build_info: true,
                allow_surrounding_text: true,
            }
        );
    }

    #[test]
    fn grammar_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<GrammarConfig>(json!({
            "requireBuildInfo": false,
            "allowSurroundingText": false
        }))
        .unwrap();

        assert_eq!(
            result,
            GrammarConfig {
                require_build_info: false,
                allow_surrounding_text: false,
            }
        );
    }
}
