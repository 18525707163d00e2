//! Stream engine audio track descriptors

use serde::{Deserialize, Serialize};

/// An entry of the stream engine's audio catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamTrackDescriptor {
    /// Language code (e.g., "en", "fr")
    pub language: String,
    /// Role from the manifest (e.g., "main", "dub", "commentary")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl StreamTrackDescriptor {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            role: None,
        }
    }

    pub fn with_role(language: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            role: Some(role.into()),
        }
    }

    /// Label shown in the player, also the key used to map a player track back
    pub fn label(&self) -> String {
        derive_label(&self.language, self.role.as_deref())
    }
}

/// Build a track label: the language, with the role in parentheses when present
pub fn derive_label(language: &str, role: Option<&str>) -> String {
    match role {
        Some(role) => format!("{} ({})", language, role),
        None => language.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_label_without_role() {
        assert_eq!(StreamTrackDescriptor::new("en").label(), "en");
    }

    #[test]
    fn test_label_with_role() {
        assert_eq!(
            StreamTrackDescriptor::with_role("fr", "dub").label(),
            "fr (dub)"
        );
    }

    #[test]
    fn test_empty_role_still_appended() {
        // An engine reporting an empty role string is distinct from no role.
        assert_eq!(derive_label("en", Some("")), "en ()");
    }

    #[test]
    fn test_distinct_pairs_give_distinct_labels() {
        let catalog = vec![
            StreamTrackDescriptor::new("en"),
            StreamTrackDescriptor::with_role("en", "main"),
            StreamTrackDescriptor::with_role("en", "commentary"),
            StreamTrackDescriptor::new("fr"),
            StreamTrackDescriptor::with_role("fr", "dub"),
            StreamTrackDescriptor::with_role("pt-BR", "dub"),
        ];
        let labels: HashSet<String> = catalog.iter().map(|d| d.label()).collect();
        assert_eq!(labels.len(), catalog.len());
    }

    #[test]
    fn test_label_is_deterministic() {
        let d = StreamTrackDescriptor::with_role("es", "alternate");
        assert_eq!(d.label(), d.clone().label());
    }

    #[test]
    fn test_deserialize_without_role() {
        let d: StreamTrackDescriptor = toml::from_str("language = \"de\"").unwrap();
        assert_eq!(d, StreamTrackDescriptor::new("de"));
    }
}
