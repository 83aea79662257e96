//! Workflow domain module

pub mod stage;

pub use stage::WorkflowStage;
