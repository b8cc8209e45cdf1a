//! Shared data model for Flowsmith.
//!
//! Everything the pipeline passes between phases lives here: the collected
//! [`Problem`], the closed [`SolutionType`] catalogue, the synthesized
//! [`Architecture`] with its typed configuration, and the terminal
//! [`Implementation`] and [`SessionRecord`] values.

mod implementation;
mod problem;
mod solution;

pub use implementation::{Implementation, SessionRecord};
pub use problem::{Complexity, Frequency, IntegrationLevel, Problem, TechnicalContext};
pub use solution::{
    Alternative, Architecture, Component, Solution, SolutionConfig, SolutionType,
};
