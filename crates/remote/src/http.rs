//! HTTP implementations of the hint and report collaborators.
//!
//! Uses `ureq` (sync) inside `tokio::task::spawn_blocking`. Endpoints, for
//! a report type `contacts` under `base_url`:
//!
//! - `GET  {base_url}/contacts/hints/{field}?partial=...` → `[{"key", "display"}]`
//! - `POST {base_url}/contacts/run` with a [`ReportConfig`] body → `{"id", "name"?}`

use std::time::Duration;

use async_trait::async_trait;
use reporting_core::ReportHandle;
use tracing::debug;

use crate::error::RemoteError;
use crate::hint::{Hint, HintSource};
use crate::runner::{ReportConfig, ReportRunner};

/// Where the reporting endpoints live and how to authenticate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpEndpoint {
    pub base_url: String,
    pub report_type: String,
    pub auth_token: Option<String>,
    pub timeout: Option<Duration>,
}

impl HttpEndpoint {
    pub fn new(base_url: &str, report_type: &str) -> Result<Self, RemoteError> {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(RemoteError::Config {
                message: format!("base_url must start with http:// or https://, got '{}'", base_url),
            });
        }
        if !is_path_segment(report_type) {
            return Err(RemoteError::Config {
                message: format!("invalid report type '{}'", report_type),
            });
        }
        Ok(HttpEndpoint {
            base_url: base_url.trim_end_matches('/').to_string(),
            report_type: report_type.to_string(),
            auth_token: None,
            timeout: None,
        })
    }

    pub fn with_auth_token(mut self, token: Option<String>) -> Self {
        self.auth_token = token;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn hints_url(&self, field: &str) -> String {
        format!("{}/{}/hints/{}", self.base_url, self.report_type, field)
    }

    pub fn run_url(&self) -> String {
        format!("{}/{}/run", self.base_url, self.report_type)
    }

    fn agent(&self) -> ureq::Agent {
        ureq::Agent::config_builder()
            .timeout_global(self.timeout)
            .build()
            .into()
    }

    fn bearer(&self) -> Option<String> {
        self.auth_token.as_ref().map(|t| format!("Bearer {}", t))
    }
}

/// Field keys and report types are interpolated into the URL path unescaped,
/// so only `[A-Za-z0-9_.-]` is accepted and `.`/`..` are refused.
fn is_path_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

async fn run_blocking<T, F>(task: F) -> Result<T, RemoteError>
where
    F: FnOnce() -> Result<T, RemoteError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| RemoteError::Join {
            message: e.to_string(),
        })?
}

// ──────────────────────────────────────────────
// Hints
// ──────────────────────────────────────────────

pub struct HttpHintSource {
    endpoint: HttpEndpoint,
}

impl HttpHintSource {
    pub fn new(endpoint: HttpEndpoint) -> Self {
        HttpHintSource { endpoint }
    }
}

#[async_trait]
impl HintSource for HttpHintSource {
    async fn get_hints(&self, field: &str, partial: &str) -> Result<Vec<Hint>, RemoteError> {
        if !is_path_segment(field) {
            return Err(RemoteError::Config {
                message: format!("invalid field key '{}'", field),
            });
        }

        let url = self.endpoint.hints_url(field);
        let agent = self.endpoint.agent();
        let bearer = self.endpoint.bearer();
        let partial = partial.to_string();
        debug!(url = %url, partial = %partial, "fetching hints");

        run_blocking(move || {
            let mut request = agent.get(&url).query("partial", &partial);
            if let Some(ref value) = bearer {
                request = request.header("Authorization", value);
            }

            let response = request.call().map_err(|e| RemoteError::Http {
                url: url.clone(),
                message: e.to_string(),
            })?;

            response
                .into_body()
                .read_json::<Vec<Hint>>()
                .map_err(|e| RemoteError::Decode {
                    message: format!("hints from {}: {}", url, e),
                })
        })
        .await
    }

    fn source_id(&self) -> &str {
        "http"
    }
}

// ──────────────────────────────────────────────
// Reports
// ──────────────────────────────────────────────

pub struct HttpReportRunner {
    endpoint: HttpEndpoint,
}

impl HttpReportRunner {
    pub fn new(endpoint: HttpEndpoint) -> Self {
        HttpReportRunner { endpoint }
    }
}

#[async_trait]
impl ReportRunner for HttpReportRunner {
    async fn run_report(&self, config: &ReportConfig) -> Result<ReportHandle, RemoteError> {
        let url = self.endpoint.run_url();
        let agent = self.endpoint.agent();
        let bearer = self.endpoint.bearer();
        let body = serde_json::to_value(config).map_err(|e| RemoteError::Decode {
            message: format!("report config: {}", e),
        })?;
        debug!(url = %url, "submitting report");

        run_blocking(move || {
            let mut request = agent.post(&url);
            if let Some(ref value) = bearer {
                request = request.header("Authorization", value);
            }

            let response = request.send_json(&body).map_err(|e| RemoteError::Http {
                url: url.clone(),
                message: e.to_string(),
            })?;

            response
                .into_body()
                .read_json::<ReportHandle>()
                .map_err(|e| RemoteError::Decode {
                    message: format!("report handle from {}: {}", url, e),
                })
        })
        .await
    }
}
