// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-fourier project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Helpers for reading a power spectrum
//!
//! Power spectra of real signals are mirrored around the Nyquist bin `N/2`,
//! so the searches below only look at bins `0..=N/2`.

use std::ops::RangeInclusive;

/// Centre frequency in Hz of each of the `n` bins for a signal sampled at `sample_rate`
pub fn bin_frequencies(n: usize, sample_rate: u32) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let resolution = sample_rate as f64 / n as f64;
    (0..n).map(|k| k as f64 * resolution).collect()
}

/// Index of the Nyquist bin for a spectrum of `n` bins
pub fn nyquist_bin(n: usize) -> usize {
    n / 2
}

/// Bin holding the largest power between DC and Nyquist
///
/// Ties resolve to the lowest bin. Returns `None` for an empty spectrum.
pub fn peak_bin(power: &[f64]) -> Option<usize> {
    if power.is_empty() {
        return None;
    }
    let mut best = 0;
    for (k, &value) in power.iter().enumerate().take(nyquist_bin(power.len()) + 1) {
        if value > power[best] {
            best = k;
        }
    }
    Some(best)
}

/// Mean power of the bins between DC and Nyquist lying outside `exclude`
///
/// Returns `None` when every bin is excluded.
pub fn noise_floor(power: &[f64], exclude: RangeInclusive<usize>) -> Option<f64> {
    let (sum, count) = power
        .iter()
        .enumerate()
        .take(nyquist_bin(power.len()) + 1)
        .filter(|(k, _)| !exclude.contains(k))
        .fold((0.0, 0usize), |(sum, count), (_, &value)| (sum + value, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Bins within `half_width` of `center`, clamped to `0..=nyquist`
///
/// Saturates instead of overflowing for very large half widths.
pub fn bin_window(center: usize, half_width: usize, nyquist: usize) -> RangeInclusive<usize> {
    let center = center.min(nyquist);
    center.saturating_sub(half_width)..=center.saturating_add(half_width).min(nyquist)
}

/// Ratio between two powers in decibels
pub fn snr_db(peak: f64, floor: f64) -> f64 {
    10.0 * (peak / floor).log10()
}
