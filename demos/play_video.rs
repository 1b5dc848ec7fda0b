//! # Demo: play_video
//!
//! Exercises the fullscreen playback utility with stub backends. The volume
//! backend deliberately fails to show that playback still proceeds.
//!
//! ## Run
//! ```bash
//! cargo run --example play_video
//! ```

use autopaste::{MediaError, VideoPlayer, VolumeSetter, play_at_full_volume};

struct NoAudioEndpoint;

impl VolumeSetter for NoAudioEndpoint {
    fn set_full(&self) -> Result<(), MediaError> {
        Err(MediaError::Volume {
            reason: "no audio endpoint on this machine".into(),
        })
    }
}

struct PrintingPlayer;

impl VideoPlayer for PrintingPlayer {
    fn play_fullscreen(&self, source: &str) -> Result<(), MediaError> {
        println!("[player] playing {source} fullscreen (stub)");
        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    match play_at_full_volume(&NoAudioEndpoint, &PrintingPlayer, "clip.mp4") {
        Ok(()) => println!("[demo] playback finished normally"),
        Err(err) => eprintln!("[demo] playback ended with error: {err}"),
    }
}
