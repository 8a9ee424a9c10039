// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-fourier project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Transform engine configuration

use serde::{Deserialize, Serialize};

use crate::spectral::{WindowFunction, DEFAULT_SAMPLE_SIZE};

/// Configuration of the transform engine.
///
/// # Example
///
/// ```
/// use rust_fourier::config::TransformConfig;
/// use rust_fourier::spectral::WindowFunction;
///
/// let transform = TransformConfig {
///     sample_size: 10,
///     window: WindowFunction::Hann,
/// };
/// assert_eq!(transform.max_input_length(), 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Exponent of the maximum input length (`2^sample_size` samples)
    pub sample_size: u32,

    /// Window applied to the frame before it is transformed
    pub window: WindowFunction,
}

impl TransformConfig {
    /// Number of samples the configured engine accepts
    ///
    /// Saturates to `usize::MAX` for exponents that do not fit.
    pub fn max_input_length(&self) -> usize {
        1usize.checked_shl(self.sample_size).unwrap_or(usize::MAX)
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            window: WindowFunction::Rectangular,
        }
    }
}
