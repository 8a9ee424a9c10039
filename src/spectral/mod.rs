// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-fourier project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).
//!
//! # Spectral Analysis Module
//!
//! This module turns real time-domain signals into power spectra using a
//! fixed-size radix-2 Fast Fourier Transform.
//!
//! ## Features
//!
//! - [`FourierTransform`] engine bounded to `2^sample_size` samples
//! - Trait-based API ([`PowerSpectrumAnalyzer`]) so callers can hold any engine
//! - Window functions to reduce spectral leakage
//! - Helpers for bin frequencies, peak search and signal-to-noise ratio
//!
//! ## Usage
//!
//! ```
//! use rust_fourier::spectral;
//!
//! // Engine accepting up to 2^3 = 8 samples
//! let analyzer = spectral::create_fourier_transform(3).unwrap();
//!
//! let power = analyzer.transform_1d(&[1.0, 0.0, -1.0, 0.0]).unwrap();
//! assert_eq!(power.len(), 8);
//! ```

pub mod error;
pub mod fft;
pub mod helpers;
pub mod window;

pub use error::FourierTransformError;
pub use fft::{FourierTransform, PowerSpectrumAnalyzer, DEFAULT_SAMPLE_SIZE, MAX_SAMPLE_SIZE};
pub use window::WindowFunction;

/// Create a new power spectrum analyzer accepting up to `2^sample_size` samples
///
/// This factory hides the concrete engine behind the [`PowerSpectrumAnalyzer`]
/// trait.
///
/// # Errors
///
/// Fails with [`FourierTransformError::InvalidSampleSize`] when `sample_size`
/// exceeds [`MAX_SAMPLE_SIZE`].
pub fn create_fourier_transform(
    sample_size: u32,
) -> Result<Box<dyn PowerSpectrumAnalyzer>, FourierTransformError> {
    Ok(Box::new(FourierTransform::with_sample_size(sample_size)?))
}
