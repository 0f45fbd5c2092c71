//! Error types shared across the app.

use std::{io, path::PathBuf};
use thiserror::Error;

use crate::catalog::PracticeKind;
use crate::timer::{TimerOp, TimerStatus};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("cannot {action} while the timer is {from}")]
    InvalidStateTransition { from: TimerStatus, action: TimerOp },

    #[error("session duration must be at least one second")]
    InvalidDuration,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("{} is disabled; enable it before changing its time", .0.info().name)]
    Disabled(PracticeKind),

    #[error("invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    #[error("no guided session is playing")]
    NothingPlaying,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("notification permission denied")]
    PermissionDenied,

    #[error("notification delivery failed: {0}")]
    Delivery(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level error returned from `main`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_error_names_state_and_action() {
        let err = TimerError::InvalidStateTransition {
            from: TimerStatus::Running,
            action: TimerOp::Configure,
        };
        assert_eq!(err.to_string(), "cannot configure while the timer is running");
    }

    #[test]
    fn disabled_error_uses_display_name() {
        let err = ScheduleError::Disabled(PracticeKind::Prayer);
        assert!(err.to_string().starts_with("9 PM Prayer is disabled"));
    }
}
