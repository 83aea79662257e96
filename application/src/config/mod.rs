//! Application-level configuration.
//!
//! - [`WorkflowParams`]: titles, filter policy and load-time minimums

pub mod workflow_params;

pub use workflow_params::{DEFAULT_MIN_QUESTIONS, DEFAULT_MIN_RECIPIENTS, WorkflowParams};
