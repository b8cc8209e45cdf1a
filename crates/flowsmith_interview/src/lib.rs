//! Interview phase for Flowsmith.
//!
//! Turns a sequence of question/answer exchanges into a
//! [`flowsmith_model::Problem`]. The answer stream and the capability probes
//! are injected, so the interview runs the same against a console, a test
//! script, or a mocked environment.

mod answers;
mod collector;
mod error;
mod probes;

pub use answers::{AnswerSource, ConsoleAnswers, ScriptedAnswers};
pub use collector::{select_option, InterviewCollector};
pub use error::{InterviewError, InterviewResult, ProbeError, ProbeResult};
pub use probes::{CapabilityProbe, ProbeId, SystemProbe};
