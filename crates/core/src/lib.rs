//! reporting-core: the report wizard's filter-construction engine.
//!
//! Two pure pieces make up the engine:
//!
//! - [`reduce()`] -- folds user actions into a [`ReportFilterState`]:
//!   simple fields, OR-groups and AND-OR matrices of selected items.
//! - [`blend_controls()`] -- collapses filter interface descriptors that
//!   share a display label into composite controls.
//!
//! [`Store`] wraps both reducers for callers that want a stateful handle.
//! Hint lookup and report submission live in `reporting-remote`.

pub mod action;
pub mod blend;
pub mod document;
pub mod error;
pub mod group;
pub mod reducer;
pub mod run;
pub mod store;
pub mod types;

pub use action::Action;
pub use blend::blend_controls;
pub use document::{parse_actions, parse_filter_interface, parse_state};
pub use error::CoreError;
pub use reducer::reduce;
pub use run::{reduce_run, ReportHandle, ReportRunState, RunAction, RunningReport};
pub use store::{Store, SubscriptionId};
pub use types::{
    CurrentFilter, FilterInterfaceDescriptor, FilterItem, FilterValue, InterfaceType,
    ReportFilterState,
};
