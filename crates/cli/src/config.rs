//! Connection settings for `reporting hints` and `reporting run`.
//!
//! # Example
//!
//! ```toml
//! [server]
//! base_url = "https://reports.example.org/api"
//! report_type = "contacts"
//! auth_token = "..."        # optional; REPORTING_AUTH_TOKEN overrides
//! timeout_secs = 10         # optional
//! ```

use std::path::Path;
use std::time::Duration;

use reporting_remote::{HttpEndpoint, RemoteError};
use serde::{Deserialize, Serialize};

/// Environment variable that takes precedence over `server.auth_token`.
pub(crate) const AUTH_TOKEN_ENV: &str = "REPORTING_AUTH_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ReportingConfig {
    pub server: ServerSettings,
}

/// `[server]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ServerSettings {
    pub base_url: String,
    pub report_type: String,
    pub auth_token: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ReportingConfig {
    /// Build the HTTP endpoint, letting `env_token` replace the configured token.
    pub fn endpoint(&self, env_token: Option<String>) -> Result<HttpEndpoint, RemoteError> {
        let token = env_token
            .filter(|t| !t.is_empty())
            .or_else(|| self.server.auth_token.clone());
        Ok(
            HttpEndpoint::new(&self.server.base_url, &self.server.report_type)?
                .with_auth_token(token)
                .with_timeout(self.server.timeout_secs.map(Duration::from_secs)),
        )
    }
}

/// Read and parse a config TOML file from `path`.
///
/// Returns a human-readable error string on failure.
pub(crate) fn read_config(path: &Path) -> Result<ReportingConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read '{}': {}", path.display(), e))?;

    toml::from_str(&content).map_err(|e| format!("could not parse '{}': {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> ReportingConfig {
        toml::from_str(content).expect("valid config")
    }

    #[test]
    fn minimal_config_parses() {
        let config = parse(
            r#"
            [server]
            base_url = "https://reports.example.org/api"
            report_type = "contacts"
            "#,
        );
        let endpoint = config.endpoint(None).unwrap();
        assert_eq!(endpoint.base_url, "https://reports.example.org/api");
        assert_eq!(endpoint.auth_token, None);
        assert_eq!(endpoint.timeout, None);
    }

    #[test]
    fn env_token_overrides_file_token() {
        let config = parse(
            r#"
            [server]
            base_url = "http://localhost:8000"
            report_type = "partners"
            auth_token = "from-file"
            timeout_secs = 5
            "#,
        );
        assert_eq!(
            config.endpoint(None).unwrap().auth_token.as_deref(),
            Some("from-file")
        );
        assert_eq!(
            config
                .endpoint(Some("from-env".to_string()))
                .unwrap()
                .auth_token
                .as_deref(),
            Some("from-env")
        );
        assert_eq!(
            config.endpoint(Some(String::new())).unwrap().auth_token.as_deref(),
            Some("from-file")
        );
        assert_eq!(
            config.endpoint(None).unwrap().timeout,
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn missing_server_section_is_an_error() {
        let result: Result<ReportingConfig, _> = toml::from_str("[other]\nx = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn bad_base_url_surfaces_as_config_error() {
        let config = parse(
            r#"
            [server]
            base_url = "localhost"
            report_type = "contacts"
            "#,
        );
        assert!(matches!(
            config.endpoint(None),
            Err(RemoteError::Config { .. })
        ));
    }
}
