// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-fourier project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Test Signal Generator
//!
//! This module builds deterministic and pseudo-random sample sequences used to
//! exercise the transform engine:
//!
//! - Cosine tones landing exactly on a frequency bin
//! - Unit impulses and constant (DC) signals
//! - Uniform and Gaussian white noise from a seeded generator
//!
//! ## Examples
//!
//! ```rust
//! use rust_fourier::utility::signal_generator::SignalGenerator;
//!
//! // 16 samples of a tone completing 3 periods over 16 samples
//! let tone = SignalGenerator::tone(16, 3, 16, 1.0);
//! assert_eq!(tone.len(), 16);
//!
//! // Reproducible noise
//! let mut generator = SignalGenerator::new(12345);
//! let noise = generator.uniform_noise(1024, 0.5);
//! assert!(noise.iter().all(|x| x.abs() <= 0.5));
//! ```

use std::f64::consts::PI;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Generator of test signals
///
/// Deterministic shapes are associated functions; noise draws from the
/// generator's internal seeded random number generator.
pub struct SignalGenerator {
    rng: StdRng,
}

impl SignalGenerator {
    /// Creates a generator whose noise sequence is fully determined by `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Cosine of the given `amplitude` completing `bin` periods every `period` samples
    ///
    /// When `period` equals the transform length, all the tone's energy lands
    /// in bins `bin` and `period - bin`.
    pub fn tone(len: usize, bin: usize, period: usize, amplitude: f64) -> Vec<f64> {
        if period == 0 {
            return vec![0.0; len];
        }
        (0..len)
            .map(|i| amplitude * (2.0 * PI * (bin * i) as f64 / period as f64).cos())
            .collect()
    }

    /// Unit impulse at `position`; all zeros when `position` lies past the end
    pub fn impulse(len: usize, position: usize) -> Vec<f64> {
        let mut signal = vec![0.0; len];
        if let Some(sample) = signal.get_mut(position) {
            *sample = 1.0;
        }
        signal
    }

    /// Constant signal
    pub fn constant(len: usize, value: f64) -> Vec<f64> {
        vec![value; len]
    }

    /// Uniform white noise in `[-amplitude, amplitude]`
    pub fn uniform_noise(&mut self, len: usize, amplitude: f64) -> Vec<f64> {
        let amplitude = amplitude.abs();
        (0..len)
            .map(|_| self.rng.random_range(-amplitude..=amplitude))
            .collect()
    }

    /// Gaussian white noise with standard deviation `sigma`
    ///
    /// Uses the Box-Muller transform on two uniform draws in `(0, 1]`.
    pub fn gaussian_noise(&mut self, len: usize, sigma: f64) -> Vec<f64> {
        (0..len)
            .map(|_| {
                let u1: f64 = 1.0 - self.rng.random::<f64>();
                let u2: f64 = self.rng.random::<f64>();
                sigma * (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
            })
            .collect()
    }
}
