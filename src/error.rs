//! Error types used by the controller, engine, and external adapters.
//!
//! One enum per failure class:
//!
//! - [`StartError`] — synchronous rejection of [`Controller::start`](crate::Controller::start);
//!   no run began, no terminal event is emitted.
//! - [`ActionError`] — the [`ActionSink`](crate::ActionSink) backend failed mid-run;
//!   the run ends in `Outcome::Failed`.
//! - [`SettingsError`] — settings store IO or (de)serialization failure.
//! - [`MediaError`] — volume/playback adapter failure; logged as a warning,
//!   never escalated to the engine.
//!
//! All variants provide `as_label()` returning a short stable snake_case
//! label for logs.

use thiserror::Error;

/// Rejection of a start request before any engine is spawned.
///
/// These are configuration-level failures: the controller performs no state
/// change and the event stream stays silent.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StartError {
    /// The payload was empty; there is nothing to paste.
    #[error("payload is empty")]
    EmptyPayload,

    /// The iteration delay was zero; the run would spin without pause.
    #[error("iteration delay must be greater than zero")]
    ZeroIterationDelay,

    /// A run is already active for this controller.
    #[error("a run is already active")]
    AlreadyActive,
}

impl StartError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            StartError::EmptyPayload => "start_empty_payload",
            StartError::ZeroIterationDelay => "start_zero_delay",
            StartError::AlreadyActive => "start_already_active",
        }
    }
}

/// Failure of a single repetition reported by the action backend.
///
/// The engine does not retry: the run transitions to `Failed`, a `Status`
/// event carries the detail, and `Done(Failed)` follows.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The backend reported a failure delivering the action.
    #[error("{reason}")]
    Failed {
        /// Backend-provided failure detail.
        reason: String,
    },
}

impl ActionError {
    /// Creates a failure with the given detail.
    pub fn failed(reason: impl Into<String>) -> Self {
        ActionError::Failed {
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            ActionError::Failed { .. } => "action_failed",
        }
    }
}

/// Failure loading or persisting user settings.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Filesystem error reading or writing the settings file.
    #[error("settings io: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file exists but could not be parsed.
    #[error("settings parse: {0}")]
    Parse(#[from] toml::de::Error),

    /// The settings could not be serialized.
    #[error("settings encode: {0}")]
    Encode(#[from] toml::ser::Error),
}

impl SettingsError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            SettingsError::Io(_) => "settings_io",
            SettingsError::Parse(_) => "settings_parse",
            SettingsError::Encode(_) => "settings_encode",
        }
    }
}

/// Failure in the media utility adapters.
///
/// These are warnings by contract: callers log them and continue. They never
/// affect a running engine.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// The system volume backend is unavailable or rejected the change.
    #[error("volume control unavailable: {reason}")]
    Volume {
        /// Backend-provided detail.
        reason: String,
    },

    /// Playback did not complete normally.
    #[error("playback failed: {reason}")]
    Playback {
        /// Backend-provided detail.
        reason: String,
    },
}

impl MediaError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            MediaError::Volume { .. } => "media_volume",
            MediaError::Playback { .. } => "media_playback",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_error_labels_are_stable() {
        assert_eq!(StartError::EmptyPayload.as_label(), "start_empty_payload");
        assert_eq!(StartError::ZeroIterationDelay.as_label(), "start_zero_delay");
        assert_eq!(StartError::AlreadyActive.as_label(), "start_already_active");
    }

    #[test]
    fn test_action_error_displays_reason() {
        let err = ActionError::failed("clipboard unavailable");
        assert_eq!(err.to_string(), "clipboard unavailable");
        assert_eq!(err.as_label(), "action_failed");
    }
}
