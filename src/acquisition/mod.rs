// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-fourier project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Sample acquisition module
//!
//! This module reads sample sequences from WAV files and cuts them into
//! frames the transform engine accepts.

use anyhow::{bail, Context, Result};
use hound::{SampleFormat, WavReader};
use log::{debug, warn};
use std::path::Path;

/// One channel of a WAV file, scaled to `[-1.0, 1.0)`
#[derive(Debug, Clone)]
pub struct WavSamples {
    /// Samples of the selected channel
    pub samples: Vec<f64>,
    /// Sample rate of the file in Hz
    pub sample_rate: u32,
    /// Number of channels present in the file
    pub channels: u16,
}

/// Read one channel of a WAV file
///
/// Integer samples are divided by `2^(bits_per_sample - 1)`; float samples are
/// returned as stored.
///
/// # Errors
///
/// Fails when the file cannot be opened or decoded, or when `channel` does not
/// exist in the file.
pub fn read_wav_samples<P: AsRef<Path>>(path: P, channel: u16) -> Result<WavSamples> {
    let path = path.as_ref();
    debug!("Reading WAV file: {}", path.display());

    let mut reader = WavReader::open(path)
        .with_context(|| format!("Failed to open WAV file {}", path.display()))?;
    let spec = reader.spec();

    if channel >= spec.channels {
        bail!(
            "Channel {} requested but {} only has {} channel(s)",
            channel,
            path.display(),
            spec.channels
        );
    }
    if spec.channels > 1 {
        warn!(
            "{} has {} channels, keeping channel {}",
            path.display(),
            spec.channels,
            channel
        );
    }

    let interleaved: Vec<f64> = match spec.sample_format {
        SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / scale))
                .collect::<Result<Vec<f64>, _>>()
                .with_context(|| format!("Failed to decode samples of {}", path.display()))?
        }
        SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<Vec<f64>, _>>()
            .with_context(|| format!("Failed to decode samples of {}", path.display()))?,
    };

    let samples: Vec<f64> = interleaved
        .into_iter()
        .skip(channel as usize)
        .step_by(spec.channels as usize)
        .collect();

    debug!(
        "Read {} samples at {} Hz from {}",
        samples.len(),
        spec.sample_rate,
        path.display()
    );

    Ok(WavSamples {
        samples,
        sample_rate: spec.sample_rate,
        channels: spec.channels,
    })
}

/// Frame of at most `len` samples starting at `offset`
///
/// The frame is shorter than `len` when the signal ends first and empty when
/// `offset` lies past the end.
pub fn take_frame(samples: &[f64], offset: usize, len: usize) -> &[f64] {
    let start = offset.min(samples.len());
    let end = start.saturating_add(len).min(samples.len());
    &samples[start..end]
}

/// Frame of at most `len` samples taken from the middle of the signal
pub fn centered_frame(samples: &[f64], len: usize) -> &[f64] {
    let offset = samples.len().saturating_sub(len) / 2;
    take_frame(samples, offset, len)
}
