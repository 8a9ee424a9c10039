// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-fourier project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Fixed-size radix-2 Fast Fourier Transform
//!
//! This module provides the [`FourierTransform`] engine, an iterative
//! decimation-in-time Cooley–Tukey FFT for real-valued sample sequences whose
//! length is bounded by a power of two chosen at construction.
//!
//! # Example
//!
//! ```
//! use rust_fourier::spectral::fft::FourierTransform;
//!
//! // 2^2 = 4 samples at most
//! let fft = FourierTransform::with_sample_size(2).unwrap();
//!
//! let power = fft.transform_1d(&[1.0, 1.0, 1.0, 1.0]).unwrap();
//! assert_eq!(power, vec![16.0, 0.0, 0.0, 0.0]);
//!
//! // Shorter inputs are zero-padded on the right
//! let power = fft.transform_1d(&[1.0]).unwrap();
//! assert_eq!(power, vec![1.0, 1.0, 1.0, 1.0]);
//! ```
//!
//! # Transform Process
//!
//! 1. Validate the input length against `2^sample_size`
//! 2. Copy the samples into a complex buffer, zero-padded to `2^sample_size`
//! 3. Reorder the buffer with the precomputed bit-reversal permutation
//! 4. Run `sample_size` butterfly stages using the precomputed twiddle factors
//! 5. Return the squared magnitude of every coefficient (no normalization)

use std::f64::consts::PI;

use log::{debug, trace};
use num_complex::Complex64;

use super::error::FourierTransformError;

/// Sample size used by [`FourierTransform::new`] (`2^2 = 4` samples)
pub const DEFAULT_SAMPLE_SIZE: u32 = 2;

/// Largest accepted sample size (`2^24` samples)
pub const MAX_SAMPLE_SIZE: u32 = 24;

/// Trait for engines turning a real signal into a power spectrum
///
/// Implementations must be usable from several threads at once, so every
/// method takes `&self` and keeps per-call state local to the call.
pub trait PowerSpectrumAnalyzer: Send + Sync {
    /// Compute the power spectrum of `input`
    ///
    /// The returned vector always holds [`max_input_length`](Self::max_input_length)
    /// values.
    fn transform_1d(&self, input: &[f64]) -> Result<Vec<f64>, FourierTransformError>;

    /// Maximum number of samples accepted by [`transform_1d`](Self::transform_1d)
    fn max_input_length(&self) -> usize;
}

/// Radix-2 FFT engine with a fixed maximum input length
///
/// The bit-reversal permutation and the twiddle factors
/// `W_N^k = exp(-2πi·k/N)` for `k` in `0..N/2` are computed once when the
/// engine is built and are only read afterwards.
#[derive(Debug, Clone)]
pub struct FourierTransform {
    sample_size: u32,
    max_input_length: usize,
    bit_reversal: Vec<usize>,
    twiddles: Vec<Complex64>,
}

impl FourierTransform {
    /// Create an engine with the default sample size of 2 (4 samples)
    pub fn new() -> Self {
        Self::build(DEFAULT_SAMPLE_SIZE)
    }

    /// Create an engine accepting at most `2^sample_size` samples
    ///
    /// ### Errors
    ///
    /// Returns [`FourierTransformError::InvalidSampleSize`] when `sample_size`
    /// exceeds [`MAX_SAMPLE_SIZE`].
    pub fn with_sample_size(sample_size: u32) -> Result<Self, FourierTransformError> {
        if sample_size > MAX_SAMPLE_SIZE {
            return Err(FourierTransformError::InvalidSampleSize {
                sample_size,
                max: MAX_SAMPLE_SIZE,
            });
        }
        Ok(Self::build(sample_size))
    }

    fn build(sample_size: u32) -> Self {
        let max_input_length = 1usize << sample_size;
        debug!(
            "Building FFT engine: sample size 2^{} ({} points)",
            sample_size, max_input_length
        );

        Self {
            sample_size,
            max_input_length,
            bit_reversal: bit_reversal_table(sample_size),
            twiddles: twiddle_table(max_input_length),
        }
    }

    /// The configured exponent
    pub fn sample_size(&self) -> u32 {
        self.sample_size
    }

    /// `2^sample_size`, the length of every power spectrum produced
    pub fn max_input_length(&self) -> usize {
        self.max_input_length
    }

    /// Compute the complex DFT coefficients of `input`, zero-padded to
    /// [`max_input_length`](Self::max_input_length)
    pub fn spectrum(&self, input: &[f64]) -> Result<Vec<Complex64>, FourierTransformError> {
        self.check_input(input)?;
        trace!(
            "Transforming {} samples into {} bins",
            input.len(),
            self.max_input_length
        );

        let n = self.max_input_length;
        let mut buffer: Vec<Complex64> = input
            .iter()
            .map(|&sample| Complex64::new(sample, 0.0))
            .chain(std::iter::repeat(Complex64::new(0.0, 0.0)))
            .take(n)
            .collect();

        for (i, &j) in self.bit_reversal.iter().enumerate() {
            if i < j {
                buffer.swap(i, j);
            }
        }

        let mut size = 2;
        while size <= n {
            let half = size / 2;
            let stride = n / size;
            for group in buffer.chunks_exact_mut(size) {
                let (lower, upper) = group.split_at_mut(half);
                for (k, (a, b)) in lower.iter_mut().zip(upper.iter_mut()).enumerate() {
                    let t = *b * self.twiddles[k * stride];
                    *b = *a - t;
                    *a += t;
                }
            }
            size <<= 1;
        }

        Ok(buffer)
    }

    /// Compute the power spectrum `|X[k]|²` of `input`
    ///
    /// ### Errors
    ///
    /// Returns [`FourierTransformError::SampleTooBig`] when `input` holds more
    /// than [`max_input_length`](Self::max_input_length) samples.
    pub fn transform_1d(&self, input: &[f64]) -> Result<Vec<f64>, FourierTransformError> {
        let coefficients = self.spectrum(input)?;
        Ok(coefficients.iter().map(|c| c.norm_sqr()).collect())
    }

    /// Compute the power spectrum of `input` and store it in `output`
    ///
    /// The input length is checked first, then the destination. On failure
    /// `output` is left untouched; on success its previous content is replaced
    /// by exactly [`max_input_length`](Self::max_input_length) values.
    pub fn transform_1d_into(
        &self,
        input: &[f64],
        output: Option<&mut Vec<f64>>,
    ) -> Result<(), FourierTransformError> {
        self.check_input(input)?;
        let output = output.ok_or(FourierTransformError::NoOutputDestination)?;
        *output = self.transform_1d(input)?;
        Ok(())
    }

    fn check_input(&self, input: &[f64]) -> Result<(), FourierTransformError> {
        if input.len() > self.max_input_length {
            return Err(FourierTransformError::SampleTooBig {
                len: input.len(),
                max: self.max_input_length,
            });
        }
        Ok(())
    }
}

impl Default for FourierTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerSpectrumAnalyzer for FourierTransform {
    fn transform_1d(&self, input: &[f64]) -> Result<Vec<f64>, FourierTransformError> {
        FourierTransform::transform_1d(self, input)
    }

    fn max_input_length(&self) -> usize {
        self.max_input_length
    }
}

/// Index permutation reversing the low `bits` bits of every index in `0..2^bits`
fn bit_reversal_table(bits: u32) -> Vec<usize> {
    let n = 1usize << bits;
    if bits == 0 {
        return vec![0];
    }
    (0..n)
        .map(|i| i.reverse_bits() >> (usize::BITS - bits))
        .collect()
}

/// `exp(-2πi·k/n)` for `k` in `0..n/2`
fn twiddle_table(n: usize) -> Vec<Complex64> {
    (0..n / 2)
        .map(|k| Complex64::from_polar(1.0, -2.0 * PI * k as f64 / n as f64))
        .collect()
}
