//! Bootstrap orchestration.
//!
//! - [`orchestrator`] runs the probe, cache, search, dialog and launch steps
//! - [`report`] answers "what would a run find?" without side effects
//! - [`state`] holds the states a run moves through and its outcome

pub mod orchestrator;
pub mod report;
pub mod state;

pub use orchestrator::Orchestrator;
pub use report::{inspect, CapabilityStatus, StatusReport};
pub use state::{BootOutcome, BootState};
