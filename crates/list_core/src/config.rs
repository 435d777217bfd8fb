//! Deployment configuration

use serde::{Deserialize, Serialize};

/// When a current list may be archived into the history.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ArchivePolicy {
    /// The user completes the list explicitly; allowed whenever the
    /// current list is non-empty, regardless of completion state.
    #[default]
    Manual,

    /// The list archives itself once every item is checked off. The
    /// predicate is re-evaluated after every toggle; an explicit
    /// completion request that does not meet it is a no-op.
    AutoOnAllComplete,
}

/// Per-deployment configuration.
///
/// Each deployment manages exactly one logical document, addressed by a
/// fixed key.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListConfig {
    #[serde(default)]
    pub policy: ArchivePolicy,
    pub document_key: String,
}

const DEFAULT_DOCUMENT_KEY: &str = "shopping-list";

fn parse_policy(value: &str) -> Option<ArchivePolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "manual" => Some(ArchivePolicy::Manual),
        "auto" | "auto_on_all_complete" => Some(ArchivePolicy::AutoOnAllComplete),
        _ => None,
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ListConfig {
    /// Build the configuration from defaults plus environment overrides
    /// (`SHOPPING_LIST_POLICY`, `SHOPPING_LIST_DOCUMENT_KEY`).
    pub fn new() -> Self {
        let mut config = ListConfig {
            policy: ArchivePolicy::default(),
            document_key: DEFAULT_DOCUMENT_KEY.to_string(),
        };

        if let Ok(value) = std::env::var("SHOPPING_LIST_POLICY") {
            if let Some(policy) = parse_policy(&value) {
                config.policy = policy;
            }
        }
        if let Ok(value) = std::env::var("SHOPPING_LIST_DOCUMENT_KEY") {
            if !value.trim().is_empty() {
                config.document_key = value.trim().to_string();
            }
        }
        config
    }

    pub fn with_policy(policy: ArchivePolicy) -> Self {
        ListConfig {
            policy,
            document_key: DEFAULT_DOCUMENT_KEY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_policy_known_values() {
        assert_eq!(parse_policy("manual"), Some(ArchivePolicy::Manual));
        assert_eq!(parse_policy(" AUTO "), Some(ArchivePolicy::AutoOnAllComplete));
        assert_eq!(
            parse_policy("auto_on_all_complete"),
            Some(ArchivePolicy::AutoOnAllComplete)
        );
    }

    #[test]
    fn parse_policy_unknown_values() {
        assert_eq!(parse_policy(""), None);
        assert_eq!(parse_policy("eager"), None);
    }

    #[test]
    fn policy_serializes_snake_case() {
        let raw = serde_json::to_string(&ArchivePolicy::AutoOnAllComplete).unwrap();
        assert_eq!(raw, "\"auto_on_all_complete\"");
    }
}
