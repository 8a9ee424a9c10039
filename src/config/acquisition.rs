// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-fourier project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Acquisition configuration
//!
//! Where the analyzed samples come from.

use serde::{Deserialize, Serialize};

/// Configuration of the sample source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcquisitionConfig {
    /// WAV file to read samples from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_file: Option<String>,

    /// Channel of the WAV file to analyze
    pub channel: u16,

    /// Index of the first sample of the analyzed frame
    pub offset: usize,

    /// Sample rate in Hz assumed when samples do not come from a WAV file
    pub sample_rate: u32,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            input_file: None,
            channel: 0,
            offset: 0,
            sample_rate: 48000,
        }
    }
}
