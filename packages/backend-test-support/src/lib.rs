//! Shared helpers for the backend's integration tests: one-time logging
//! setup and Problem Details assertions that do not depend on backend types.

pub mod logging;
pub mod problem_details;

pub use problem_details::{assert_problem_details, ProblemDetailsLike};
