//! Autocomplete hints for tag and item search controls.

use std::collections::HashMap;

use async_trait::async_trait;
use reporting_core::FilterItem;
use serde::{Deserialize, Serialize};

use crate::error::RemoteError;

/// A candidate the user can pick for a search control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hint {
    pub key: serde_json::Value,
    pub display: String,
}

impl Hint {
    pub fn new(key: impl Into<serde_json::Value>, display: &str) -> Self {
        Hint {
            key: key.into(),
            display: display.to_string(),
        }
    }
}

impl From<Hint> for FilterItem {
    fn from(hint: Hint) -> Self {
        FilterItem {
            value: hint.key,
            display: hint.display,
            hex_color: None,
        }
    }
}

/// Looks up hint candidates for a partially typed search string.
///
/// Implementations do not retry, cache or deduplicate; see
/// [`HintTracker`](crate::HintTracker) for discarding superseded responses.
#[async_trait]
pub trait HintSource: Send + Sync {
    async fn get_hints(&self, field: &str, partial: &str) -> Result<Vec<Hint>, RemoteError>;

    /// Identifier used in log output (e.g. "http", "static").
    fn source_id(&self) -> &str;
}

/// Hint source backed by fixed per-field candidate lists.
///
/// Matches candidates whose display contains `partial`, ignoring case.
/// Unknown fields yield no candidates.
#[derive(Debug, Clone, Default)]
pub struct StaticHintSource {
    hints: HashMap<String, Vec<Hint>>,
}

impl StaticHintSource {
    pub fn with_hints(hints: HashMap<String, Vec<Hint>>) -> Self {
        StaticHintSource { hints }
    }

    pub fn insert(&mut self, field: &str, hints: Vec<Hint>) {
        self.hints.insert(field.to_string(), hints);
    }
}

#[async_trait]
impl HintSource for StaticHintSource {
    async fn get_hints(&self, field: &str, partial: &str) -> Result<Vec<Hint>, RemoteError> {
        let needle = partial.to_lowercase();
        Ok(self
            .hints
            .get(field)
            .map(|candidates| {
                candidates
                    .iter()
                    .filter(|h| h.display.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn source_id(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partners() -> StaticHintSource {
        let mut source = StaticHintSource::default();
        source.insert(
            "partner",
            vec![
                Hint::new(1, "Acme Staffing"),
                Hint::new(2, "Blue Ridge Veterans"),
                Hint::new(3, "ACME Logistics"),
            ],
        );
        source
    }

    #[tokio::test]
    async fn matches_case_insensitively() {
        let hints = partners().get_hints("partner", "acme").await.unwrap();
        let keys: Vec<_> = hints.iter().map(|h| h.key.clone()).collect();
        assert_eq!(keys, vec![serde_json::json!(1), serde_json::json!(3)]);
    }

    #[tokio::test]
    async fn empty_partial_returns_everything() {
        assert_eq!(partners().get_hints("partner", "").await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn unknown_field_has_no_hints() {
        assert!(partners().get_hints("contact", "a").await.unwrap().is_empty());
    }

    #[test]
    fn hint_converts_to_filter_item() {
        let item: FilterItem = Hint::new("IL", "Illinois").into();
        assert_eq!(item, FilterItem::new("IL", "Illinois"));
    }
}
