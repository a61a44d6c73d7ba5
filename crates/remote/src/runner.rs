//! Report submission.

use async_trait::async_trait;
use reporting_core::{CurrentFilter, ReportFilterState, ReportHandle};
use serde::{Deserialize, Serialize};

use crate::error::RemoteError;

/// What gets submitted when the user runs a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub filter: CurrentFilter,
}

impl ReportConfig {
    pub fn from_state(state: &ReportFilterState) -> Self {
        ReportConfig {
            name: state.report_name.clone(),
            filter: state.current_filter.clone(),
        }
    }
}

/// Submits a report configuration and returns a handle to the result.
#[async_trait]
pub trait ReportRunner: Send + Sync {
    async fn run_report(&self, config: &ReportConfig) -> Result<ReportHandle, RemoteError>;
}
