// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-fourier project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Errors reported by the Fourier transform engine

use thiserror::Error;

/// Code reported when the engine refuses a sample size at construction
pub const INVALID_SAMPLE_SIZE_CODE: i32 = 400;
/// Code reported when the input holds more than `2^sample_size` samples
pub const SAMPLE_TOO_BIG_CODE: i32 = 401;
/// Code reported when no destination was given for the power spectrum
pub const NO_OUTPUT_DESTINATION_CODE: i32 = 402;

/// Errors produced while building or running a [`FourierTransform`](super::FourierTransform)
///
/// Every variant is detected before any computation happens, so a failed call
/// never produces a partial power spectrum.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FourierTransformError {
    #[error("Invalid sample size 2^{sample_size}: the largest supported size is 2^{max}")]
    InvalidSampleSize { sample_size: u32, max: u32 },

    #[error("Sample too big: {len} samples given, at most {max} allowed")]
    SampleTooBig { len: usize, max: usize },

    #[error("No output destination for the power spectrum")]
    NoOutputDestination,
}

impl FourierTransformError {
    /// Stable numeric identifier of the error kind
    pub fn code(&self) -> i32 {
        match self {
            FourierTransformError::InvalidSampleSize { .. } => INVALID_SAMPLE_SIZE_CODE,
            FourierTransformError::SampleTooBig { .. } => SAMPLE_TOO_BIG_CODE,
            FourierTransformError::NoOutputDestination => NO_OUTPUT_DESTINATION_CODE,
        }
    }

    /// Process exit status for this error: `code() - 390`
    ///
    /// Keeps 400/401/402 distinct (10/11/12) within an 8-bit exit status and
    /// clear of the generic failure status 1.
    pub fn exit_status(&self) -> i32 {
        self.code() - 390
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            FourierTransformError::SampleTooBig { len: 5, max: 4 }.code(),
            401
        );
        assert_eq!(FourierTransformError::NoOutputDestination.code(), 402);
        assert_eq!(
            FourierTransformError::InvalidSampleSize {
                sample_size: 40,
                max: 24
            }
            .code(),
            400
        );
    }

    #[test]
    fn test_exit_status_fits_in_a_byte() {
        assert_eq!(
            FourierTransformError::InvalidSampleSize {
                sample_size: 40,
                max: 24
            }
            .exit_status(),
            10
        );
        assert_eq!(
            FourierTransformError::SampleTooBig { len: 5, max: 4 }.exit_status(),
            11
        );
        assert_eq!(FourierTransformError::NoOutputDestination.exit_status(), 12);
    }

    #[test]
    fn test_error_messages_name_the_limits() {
        let message = FourierTransformError::SampleTooBig { len: 5, max: 4 }.to_string();
        assert!(message.contains('5'));
        assert!(message.contains('4'));
    }
}
