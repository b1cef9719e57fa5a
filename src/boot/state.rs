//! Bootstrap states.

use std::fmt;

use serde::Serialize;

/// Where a bootstrap run is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BootState {
    Init,
    ProbeDone,
    /// Everything is available; launch without touching the store.
    DirectStart,
    NeedsResolution,
    Resolving,
    ReadyToLaunch,
    AwaitingUserInput,
    Launching,
    /// The user dismissed the dialog. Terminal.
    Cancelled,
}

impl fmt::Display for BootState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BootState::Init => "init",
            BootState::ProbeDone => "probe-done",
            BootState::DirectStart => "direct-start",
            BootState::NeedsResolution => "needs-resolution",
            BootState::Resolving => "resolving",
            BootState::ReadyToLaunch => "ready-to-launch",
            BootState::AwaitingUserInput => "awaiting-user-input",
            BootState::Launching => "launching",
            BootState::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// How a bootstrap run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootOutcome {
    /// The application ran. `direct` is set when nothing had to be resolved.
    Launched { exit_code: i32, direct: bool },
    /// The user cancelled; nothing was launched.
    Cancelled,
}

impl BootOutcome {
    /// Process exit code for this outcome. Cancellation is not an error.
    pub fn exit_code(self) -> i32 {
        match self {
            BootOutcome::Launched { exit_code, .. } => exit_code,
            BootOutcome::Cancelled => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_outcome_exits_zero() {
        assert_eq!(BootOutcome::Cancelled.exit_code(), 0);
        assert_eq!(
            BootOutcome::Launched {
                exit_code: 3,
                direct: false
            }
            .exit_code(),
            3
        );
    }

    #[test]
    fn display_uses_kebab_case() {
        assert_eq!(BootState::AwaitingUserInput.to_string(), "awaiting-user-input");
    }
}
