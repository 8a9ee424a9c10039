// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-fourier project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Rust Fourier library
//!
//! This library provides a fixed-size radix-2 FFT engine computing power
//! spectra of real signals, along with the configuration, acquisition and
//! signal generation pieces used by its command line tools.

pub mod acquisition;
pub mod config;
pub mod spectral;
pub mod utility;

use serde::{Deserialize, Serialize};

use spectral::{helpers, FourierTransform, WindowFunction};

/// Result of a power spectrum computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectrumReport {
    /// Exponent of the engine length
    pub sample_size: u32,
    /// Number of bins, `2^sample_size`
    pub max_input_length: usize,
    /// Number of samples actually transformed before zero-padding
    pub input_length: usize,
    /// Window applied before the transform
    pub window: WindowFunction,
    /// Sample rate in Hz used to label the bins
    pub sample_rate: u32,
    /// Centre frequency of each bin in Hz
    pub frequencies: Vec<f64>,
    /// Power of each bin
    pub power: Vec<f64>,
    /// Strongest bin between DC and Nyquist
    pub peak_bin: Option<usize>,
    /// Frequency of `peak_bin` in Hz
    pub peak_frequency: Option<f64>,
    /// Timestamp of the computation
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl SpectrumReport {
    /// Build a report for `power`, the output of `engine` on `input_length` samples
    pub fn new(
        engine: &FourierTransform,
        input_length: usize,
        window: WindowFunction,
        sample_rate: u32,
        power: Vec<f64>,
    ) -> Self {
        let frequencies = helpers::bin_frequencies(power.len(), sample_rate);
        let peak_bin = helpers::peak_bin(&power);
        let peak_frequency = peak_bin.map(|k| frequencies[k]);

        Self {
            sample_size: engine.sample_size(),
            max_input_length: engine.max_input_length(),
            input_length,
            window,
            sample_rate,
            frequencies,
            power,
            peak_bin,
            peak_frequency,
            timestamp: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_labels_bins() {
        let engine = FourierTransform::with_sample_size(3).unwrap();
        let power = engine.transform_1d(&[1.0, 0.0, -1.0, 0.0]).unwrap();
        let report = SpectrumReport::new(&engine, 4, WindowFunction::Rectangular, 800, power);

        assert_eq!(report.max_input_length, 8);
        assert_eq!(report.frequencies.len(), 8);
        assert_eq!(report.frequencies[1], 100.0);
        assert_eq!(report.peak_bin, Some(2));
        assert_eq!(report.peak_frequency, Some(200.0));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["window"], "rectangular");
        assert_eq!(json["power"].as_array().unwrap().len(), 8);
    }
}
