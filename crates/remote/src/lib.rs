//! reporting-remote: the asynchronous collaborators around the report
//! wizard engine.
//!
//! The reducer never performs I/O. Its callers look up autocomplete
//! [`Hint`]s through a [`HintSource`] and submit finished filters through a
//! [`ReportRunner`]. [`HintTracker`] drops hint responses that a newer
//! lookup for the same field has superseded.

pub mod error;
pub mod hint;
pub mod http;
pub mod runner;
pub mod tracker;

pub use error::RemoteError;
pub use hint::{Hint, HintSource, StaticHintSource};
pub use http::{HttpEndpoint, HttpHintSource, HttpReportRunner};
pub use runner::{ReportConfig, ReportRunner};
pub use tracker::{HintTracker, RequestToken};
