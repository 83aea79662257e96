//! Progress reporting for the survey workflow

pub mod reporter;
