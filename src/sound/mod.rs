//! UI sound cues.
//!
//! Cues are procedurally generated tones (see `synth`). Where they end up is
//! decided by a [`SoundSink`]: nowhere, the terminal bell, or the speaker
//! (`audio` feature).

mod synth;
#[cfg(feature = "audio")]
mod speaker;

pub use synth::{mix, ScheduledTone, Tone, Waveform};
#[cfg(feature = "audio")]
pub use speaker::Speaker;

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use crate::config::SoundBackend;

/// Named UI sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Key press while typing
    Typing,
    /// Command submitted
    Command,
    /// Command produced output
    Success,
    /// Unknown command
    Error,
    /// Moving through history
    Hover,
    /// Buttons, Tab, toggles
    Click,
    /// Typewriter character (silent)
    Typewriter,
    /// Typewriter line end (silent)
    TypewriterBell,
}

const SUCCESS_CHORD: [f32; 3] = [523.0, 659.0, 784.0];
const SUCCESS_STAGGER: Duration = Duration::from_millis(50);

impl Cue {
    /// Tones making up this cue, relative to when it fires.
    pub fn schedule(&self) -> Vec<ScheduledTone> {
        let at_once = |tone: Tone| {
            vec![ScheduledTone {
                offset: Duration::ZERO,
                tone,
            }]
        };
        match self {
            Cue::Typing => at_once(Tone::sine(1200.0, 50, 0.05)),
            Cue::Command => at_once(Tone::sine(1000.0, 80, 0.08)),
            Cue::Success => SUCCESS_CHORD
                .iter()
                .enumerate()
                .map(|(i, freq)| ScheduledTone {
                    offset: SUCCESS_STAGGER * i as u32,
                    tone: Tone::sine(*freq, 200, 0.06),
                })
                .collect(),
            Cue::Error => at_once(Tone::sine(300.0, 200, 0.1).with_waveform(Waveform::Sawtooth)),
            Cue::Hover => at_once(Tone::sine(1500.0, 30, 0.03)),
            Cue::Click => at_once(Tone::sine(800.0, 60, 0.05)),
            Cue::Typewriter | Cue::TypewriterBell => Vec::new(),
        }
    }
}

/// Destination for cues.
pub trait SoundSink: Send + Sync {
    fn play(&self, cue: Cue);
}

/// Drops every cue.
pub struct Silent;

impl SoundSink for Silent {
    fn play(&self, _cue: Cue) {}
}

/// Rings the terminal bell on errors; everything else is too chatty for a bell.
pub struct Bell;

impl SoundSink for Bell {
    fn play(&self, cue: Cue) {
        if cue == Cue::Error {
            let mut stdout = std::io::stdout();
            let _ = stdout.write_all(b"\x07");
            let _ = stdout.flush();
        }
    }
}

/// Build the sink for a configured backend. Falls back to the bell when the
/// speaker is requested without the `audio` feature.
pub fn build_sink(backend: SoundBackend) -> Arc<dyn SoundSink> {
    match backend {
        SoundBackend::Off => Arc::new(Silent),
        SoundBackend::Bell => Arc::new(Bell),
        #[cfg(feature = "audio")]
        SoundBackend::Speaker => Arc::new(Speaker::spawn()),
        #[cfg(not(feature = "audio"))]
        SoundBackend::Speaker => {
            tracing::warn!("speaker output requested but built without the `audio` feature, using the terminal bell");
            Arc::new(Bell)
        }
    }
}

/// Sink plus the runtime on/off switch.
#[derive(Clone)]
pub struct SoundBoard {
    sink: Arc<dyn SoundSink>,
    enabled: bool,
}

impl SoundBoard {
    pub fn new(sink: Arc<dyn SoundSink>, enabled: bool) -> Self {
        Self { sink, enabled }
    }

    pub fn silent() -> Self {
        Self::new(Arc::new(Silent), false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip sound on/off. Turning it on plays a click.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        if self.enabled {
            self.play(Cue::Click);
        }
        self.enabled
    }

    pub fn play(&self, cue: Cue) {
        if self.enabled {
            self.sink.play(cue);
        }
    }

    /// Play a cue after `delay`. Needs a tokio runtime; without one it plays immediately.
    pub fn play_after(&self, cue: Cue, delay: Duration) {
        if !self.enabled {
            return;
        }
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let sink = Arc::clone(&self.sink);
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    sink.play(cue);
                });
            }
            Err(_) => self.sink.play(cue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::RecordingSink;

    #[test]
    fn success_is_a_staggered_chord() {
        let schedule = Cue::Success.schedule();
        let freqs: Vec<_> = schedule.iter().map(|s| s.tone.frequency).collect();
        let offsets: Vec<_> = schedule.iter().map(|s| s.offset.as_millis()).collect();
        assert_eq!(freqs, vec![523.0, 659.0, 784.0]);
        assert_eq!(offsets, vec![0, 50, 100]);
    }

    #[test]
    fn error_uses_sawtooth() {
        let schedule = Cue::Error.schedule();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].tone.waveform, Waveform::Sawtooth);
        assert_eq!(schedule[0].tone.frequency, 300.0);
    }

    #[test]
    fn typewriter_cues_are_silent() {
        assert!(Cue::Typewriter.schedule().is_empty());
        assert!(Cue::TypewriterBell.schedule().is_empty());
        assert!(!Cue::Typing.schedule().is_empty());
    }

    #[test]
    fn disabled_board_plays_nothing() {
        let sink = Arc::new(RecordingSink::default());
        let board = SoundBoard::new(sink.clone(), false);
        board.play(Cue::Click);
        board.play_after(Cue::Success, Duration::ZERO);
        assert!(sink.cues().is_empty());
    }

    #[test]
    fn toggle_on_plays_click() {
        let sink = Arc::new(RecordingSink::default());
        let mut board = SoundBoard::new(sink.clone(), false);
        assert!(board.toggle());
        assert!(!board.toggle());
        assert_eq!(sink.cues(), vec![Cue::Click]);
    }

    #[test]
    fn play_after_without_runtime_plays_now() {
        let sink = Arc::new(RecordingSink::default());
        let board = SoundBoard::new(sink.clone(), true);
        board.play_after(Cue::Success, Duration::from_millis(200));
        assert_eq!(sink.cues(), vec![Cue::Success]);
    }

    #[tokio::test]
    async fn play_after_waits_for_delay() {
        let sink = Arc::new(RecordingSink::default());
        let board = SoundBoard::new(sink.clone(), true);
        board.play_after(Cue::Success, Duration::from_millis(100));
        tokio::task::yield_now().await;
        assert!(sink.cues().is_empty());

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(sink.cues(), vec![Cue::Success]);
    }
}
