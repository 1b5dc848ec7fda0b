//! # Fullscreen playback utility.
//!
//! A self-contained helper unrelated to the repeat engine: crank the system
//! volume to maximum, then play a clip fullscreen and block until it ends.
//! Both backends are adapter traits; the concrete volume/media
//! implementations live outside this crate.
//!
//! ## Rules
//! - Volume failure is a warning: playback proceeds at the current level.
//! - Playback failure is returned for the caller to log.
//! - Nothing here touches engine or controller state.

use tracing::warn;

use crate::error::MediaError;

/// Sets the system master volume.
pub trait VolumeSetter: Send + Sync {
    /// Raises the master volume to 100%. Best effort.
    fn set_full(&self) -> Result<(), MediaError>;
}

/// Plays a video source fullscreen.
pub trait VideoPlayer: Send + Sync {
    /// Plays `source` (path or URL) fullscreen, blocking until playback ends
    /// or errors.
    fn play_fullscreen(&self, source: &str) -> Result<(), MediaError>;
}

/// Plays `source` fullscreen at maximum volume.
///
/// A failed volume change is logged and ignored; a playback failure is
/// returned. Neither outcome affects a running engine.
pub fn play_at_full_volume(
    volume: &dyn VolumeSetter,
    player: &dyn VideoPlayer,
    source: &str,
) -> Result<(), MediaError> {
    if let Err(err) = volume.set_full() {
        warn!(
            error = %err,
            label = err.as_label(),
            "could not set system volume; playing at the current level"
        );
    }
    player.play_fullscreen(source)
}
