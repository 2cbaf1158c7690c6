//! Oscillator tones with an attack/decay envelope, rendered to PCM.

use std::f32::consts::TAU;
use std::time::Duration;

/// Attack time of every tone's envelope.
const ATTACK: f32 = 0.01;
/// Gain the envelope decays to at the end of a tone.
const FLOOR: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl Waveform {
    /// Sample the waveform at `phase` in `[0, 1)`, range `[-1, 1]`.
    pub fn sample(&self, phase: f32) -> f32 {
        match self {
            Waveform::Sine => (phase * TAU).sin(),
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Sawtooth => 2.0 * phase - 1.0,
            Waveform::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    pub duration: Duration,
    pub waveform: Waveform,
    pub volume: f32,
}

impl Tone {
    pub const fn sine(frequency: f32, duration_ms: u64, volume: f32) -> Self {
        Self {
            frequency,
            duration: Duration::from_millis(duration_ms),
            waveform: Waveform::Sine,
            volume,
        }
    }

    pub const fn with_waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    /// Envelope gain `t` seconds into the tone: silent start, linear attack to
    /// `volume` over 10 ms, then exponential decay to 0.001 at the end.
    pub fn gain_at(&self, t: f32) -> f32 {
        let end = self.duration.as_secs_f32();
        if t < 0.0 || t >= end || self.volume <= 0.0 {
            return 0.0;
        }
        if t < ATTACK {
            return self.volume * t / ATTACK;
        }
        if end <= ATTACK {
            return self.volume;
        }
        let progress = (t - ATTACK) / (end - ATTACK);
        self.volume * (FLOOR / self.volume).powf(progress)
    }

    pub fn sample_count(&self, sample_rate: u32) -> usize {
        (self.duration.as_secs_f32() * sample_rate as f32).round() as usize
    }

    /// Mono samples for this tone.
    pub fn render(&self, sample_rate: u32) -> Vec<f32> {
        let rate = sample_rate as f32;
        (0..self.sample_count(sample_rate))
            .map(|i| {
                let t = i as f32 / rate;
                let phase = (t * self.frequency).fract();
                self.waveform.sample(phase) * self.gain_at(t)
            })
            .collect()
    }
}

/// A tone starting `offset` after the cue fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledTone {
    pub offset: Duration,
    pub tone: Tone,
}

/// Render a schedule into one mono buffer, summing overlapping tones.
pub fn mix(schedule: &[ScheduledTone], sample_rate: u32) -> Vec<f32> {
    let offset_samples =
        |d: Duration| (d.as_secs_f32() * sample_rate as f32).round() as usize;

    let len = schedule
        .iter()
        .map(|s| offset_samples(s.offset) + s.tone.sample_count(sample_rate))
        .max()
        .unwrap_or(0);

    let mut buffer = vec![0.0f32; len];
    for scheduled in schedule {
        let start = offset_samples(scheduled.offset);
        for (i, sample) in scheduled.tone.render(sample_rate).into_iter().enumerate() {
            buffer[start + i] += sample;
        }
    }
    for sample in &mut buffer {
        *sample = sample.clamp(-1.0, 1.0);
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: u32 = 48_000;

    #[test]
    fn envelope_starts_silent_and_peaks_after_attack() {
        let tone = Tone::sine(440.0, 100, 0.1);
        assert_eq!(tone.gain_at(0.0), 0.0);
        assert!((tone.gain_at(0.005) - 0.05).abs() < 1e-4);
        assert!((tone.gain_at(0.01) - 0.1).abs() < 1e-4);
    }

    #[test]
    fn envelope_decays_toward_floor() {
        let tone = Tone::sine(440.0, 100, 0.1);
        let late = tone.gain_at(0.0999);
        assert!(late < 0.002, "gain {late}");
        assert_eq!(tone.gain_at(0.1), 0.0);
        assert!(tone.gain_at(0.05) < tone.gain_at(0.02));
    }

    #[test]
    fn render_length_matches_duration() {
        let tone = Tone::sine(1200.0, 50, 0.05);
        assert_eq!(tone.render(RATE).len(), 2400);
    }

    #[test]
    fn samples_never_exceed_volume() {
        let tone = Tone::sine(300.0, 200, 0.1).with_waveform(Waveform::Sawtooth);
        assert!(tone.render(RATE).iter().all(|s| s.abs() <= 0.1 + 1e-6));
    }

    #[test]
    fn waveforms_stay_in_range() {
        for wave in [Waveform::Sine, Waveform::Square, Waveform::Sawtooth, Waveform::Triangle] {
            for i in 0..100 {
                let v = wave.sample(i as f32 / 100.0);
                assert!((-1.0..=1.0).contains(&v), "{wave:?} at {i}: {v}");
            }
        }
    }

    #[test]
    fn mix_places_tones_at_offsets() {
        let schedule = [
            ScheduledTone {
                offset: Duration::ZERO,
                tone: Tone::sine(523.0, 200, 0.06),
            },
            ScheduledTone {
                offset: Duration::from_millis(100),
                tone: Tone::sine(784.0, 200, 0.06),
            },
        ];
        let buffer = mix(&schedule, RATE);
        assert_eq!(buffer.len(), RATE as usize * 300 / 1000);
    }

    #[test]
    fn mix_of_nothing_is_empty() {
        assert!(mix(&[], RATE).is_empty());
    }
}
