//! Error types for collector lifecycle transitions
//!
//! Nothing in this crate is fatal. Invalid measurements (NaN) and unusable
//! timestamps are skipped silently and never surface here. The only failures
//! are lifecycle misuse and a collector's own setup or teardown hook
//! reporting a problem.
//!
//! Every error leaves the collector in a well-defined, usable state:
//!
//! | error                | state afterwards | measurements        |
//! |----------------------|------------------|---------------------|
//! | `AlreadyStarted`     | started          | untouched           |
//! | `NotStarted`         | stopped          | untouched           |
//! | `SetupFailed`        | started          | untouched           |
//! | `TeardownFailed`     | stopped          | cleared             |

use thiserror::Error;

/// Result type for lifecycle transitions
pub type LifecycleResult = Result<(), LifecycleError>;

/// Failure reported by a collector's setup or teardown hook
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{reason}")]
pub struct HookError {
    /// Human-readable cause
    pub reason: &'static str,
}

impl HookError {
    /// Create a hook error with the given reason
    pub const fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Lifecycle transition errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleError {
    /// `start` called on a collector that is already started
    #[error("collector is already started")]
    AlreadyStarted,

    /// `stop` called on a collector that is not started
    #[error("collector is not started")]
    NotStarted,

    /// The collector is started but its setup hook failed
    #[error("setup hook failed: {0}")]
    SetupFailed(#[source] HookError),

    /// The collector is stopped but its teardown hook failed
    #[error("teardown hook failed: {0}")]
    TeardownFailed(#[source] HookError),
}

impl LifecycleError {
    /// True if the call was rejected without changing any state
    pub fn is_misuse(&self) -> bool {
        matches!(self, Self::AlreadyStarted | Self::NotStarted)
    }
}
