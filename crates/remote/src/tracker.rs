//! Discarding hint responses that a later keystroke has superseded.
//!
//! Every lookup for a field takes a fresh token from a per-field counter.
//! A response is only handed back if its token is still the newest one
//! issued for that field when the response arrives.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

use crate::error::RemoteError;
use crate::hint::{Hint, HintSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestToken {
    field: String,
    sequence: u64,
}

impl RequestToken {
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

#[derive(Debug, Default)]
pub struct HintTracker {
    latest: Mutex<HashMap<String, u64>>,
}

impl HintTracker {
    pub fn new() -> Self {
        HintTracker::default()
    }

    /// Issue the next token for `field`, superseding all earlier ones.
    pub fn issue(&self, field: &str) -> RequestToken {
        let mut latest = self.latest.lock().unwrap_or_else(|e| e.into_inner());
        let sequence = latest.get(field).map_or(1, |s| s + 1);
        latest.insert(field.to_string(), sequence);
        RequestToken {
            field: field.to_string(),
            sequence,
        }
    }

    pub fn is_latest(&self, token: &RequestToken) -> bool {
        self.latest
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&token.field)
            == Some(&token.sequence)
    }

    /// Fetch hints, returning `Ok(None)` if a newer lookup for the same
    /// field was issued while this one was in flight.
    ///
    /// Errors are returned as-is, superseded or not.
    pub async fn fetch_latest(
        &self,
        source: &dyn HintSource,
        field: &str,
        partial: &str,
    ) -> Result<Option<Vec<Hint>>, RemoteError> {
        let token = self.issue(field);
        let hints = source.get_hints(field, partial).await?;

        if self.is_latest(&token) {
            Ok(Some(hints))
        } else {
            debug!(
                source = source.source_id(),
                field,
                sequence = token.sequence,
                "discarding superseded hint response"
            );
            Ok(None)
        }
    }
}
