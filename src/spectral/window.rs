// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-fourier project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Window functions applied to a frame before it is transformed

use std::f64::consts::PI;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Available window functions for spectral analysis
///
/// `Rectangular` leaves the samples untouched, which keeps the raw power
/// spectrum of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WindowFunction {
    #[default]
    Rectangular,
    Hann,
    Blackman,
}

impl WindowFunction {
    /// Weight of sample `i` in a frame of `len` samples
    pub fn factor(&self, i: usize, len: usize) -> f64 {
        if len < 2 {
            return 1.0;
        }
        let x = i as f64 / (len - 1) as f64;
        match self {
            WindowFunction::Rectangular => 1.0,
            WindowFunction::Hann => 0.5 * (1.0 - (2.0 * PI * x).cos()),
            WindowFunction::Blackman => {
                let a0 = 0.42;
                let a1 = 0.5;
                let a2 = 0.08;
                a0 - a1 * (2.0 * PI * x).cos() + a2 * (4.0 * PI * x).cos()
            }
        }
    }

    /// Apply the window to `signal`
    pub fn apply(&self, signal: &[f64]) -> Vec<f64> {
        if *self == WindowFunction::Rectangular {
            return signal.to_vec();
        }
        signal
            .iter()
            .enumerate()
            .map(|(i, &sample)| sample * self.factor(i, signal.len()))
            .collect()
    }
}

impl std::fmt::Display for WindowFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WindowFunction::Rectangular => "rectangular",
            WindowFunction::Hann => "hann",
            WindowFunction::Blackman => "blackman",
        };
        write!(f, "{}", name)
    }
}
