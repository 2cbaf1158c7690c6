//! Speaker output through `cpal`.
//!
//! The stream lives on its own thread because `cpal::Stream` is not `Send`.
//! Cues arrive over a channel, are rendered at the device rate and mixed into
//! a shared sample queue that the stream callback drains.

use std::collections::VecDeque;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use cpal::traits::{DeviceTrait as _, HostTrait as _, StreamTrait as _};

use super::{mix, Cue, SoundSink};

type SampleQueue = Arc<Mutex<VecDeque<f32>>>;

pub struct Speaker {
    tx: Mutex<mpsc::Sender<Cue>>,
}

impl Speaker {
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel::<Cue>();
        thread::spawn(move || audio_thread(rx));
        Self { tx: Mutex::new(tx) }
    }
}

impl SoundSink for Speaker {
    fn play(&self, cue: Cue) {
        if let Ok(tx) = self.tx.lock() {
            let _ = tx.send(cue);
        }
    }
}

fn audio_thread(rx: mpsc::Receiver<Cue>) {
    let queue: SampleQueue = Arc::new(Mutex::new(VecDeque::new()));
    let mut stream: Option<(cpal::Stream, u32)> = None;
    let mut init_failed = false;

    while let Ok(cue) = rx.recv() {
        if stream.is_none() && !init_failed {
            match try_init_stream(queue.clone()) {
                Ok((s, rate)) => match s.play() {
                    Ok(()) => {
                        tracing::debug!(sample_rate = rate, "audio stream started");
                        stream = Some((s, rate));
                    }
                    Err(err) => {
                        init_failed = true;
                        tracing::warn!("audio: failed to play stream: {err}");
                    }
                },
                Err(err) => {
                    init_failed = true;
                    tracing::warn!("audio: unavailable ({err})");
                }
            }
        }

        let Some((_, rate)) = &stream else {
            continue;
        };
        let samples = mix(&cue.schedule(), *rate);
        if samples.is_empty() {
            continue;
        }
        if let Ok(mut queue) = queue.lock() {
            for (i, sample) in samples.into_iter().enumerate() {
                match queue.get_mut(i) {
                    Some(existing) => *existing = (*existing + sample).clamp(-1.0, 1.0),
                    None => queue.push_back(sample),
                }
            }
        }
    }
}

fn try_init_stream(queue: SampleQueue) -> Result<(cpal::Stream, u32), String> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| "no default output device".to_string())?;

    let supported = device
        .default_output_config()
        .map_err(|err| format!("default_output_config: {err}"))?;
    let config = supported.config();

    let channels = config.channels as usize;
    let sample_rate = config.sample_rate.0;

    let err_fn = |err: cpal::StreamError| tracing::warn!("audio: stream error: {err}");

    let stream = match supported.sample_format() {
        cpal::SampleFormat::F32 => device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _| drain_into(data, channels, &queue),
                err_fn,
                None,
            )
            .map_err(|err| format!("build_output_stream(f32): {err}"))?,
        cpal::SampleFormat::I16 => device
            .build_output_stream(
                &config,
                move |data: &mut [i16], _| drain_into(data, channels, &queue),
                err_fn,
                None,
            )
            .map_err(|err| format!("build_output_stream(i16): {err}"))?,
        cpal::SampleFormat::U16 => device
            .build_output_stream(
                &config,
                move |data: &mut [u16], _| drain_into(data, channels, &queue),
                err_fn,
                None,
            )
            .map_err(|err| format!("build_output_stream(u16): {err}"))?,
        other => return Err(format!("unsupported sample format: {other:?}")),
    };

    Ok((stream, sample_rate))
}

/// Fill one callback buffer from the queue, padding with silence.
fn drain_into<T: cpal::Sample + cpal::FromSample<f32>>(
    output: &mut [T],
    channels: usize,
    queue: &Mutex<VecDeque<f32>>,
) {
    let mut queue = queue.lock().ok();
    for frame in output.chunks_mut(channels.max(1)) {
        let value = queue
            .as_mut()
            .and_then(|q| q.pop_front())
            .unwrap_or(0.0);
        let sample = T::from_sample(value);
        for out in frame.iter_mut() {
            *out = sample;
        }
    }
}
