//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod create_collector;
pub mod create_survey;
pub mod load_inputs;
pub mod run_workflow;
pub mod send_invitations;

#[cfg(test)]
pub(crate) mod test_support;
