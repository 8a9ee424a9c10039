// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-fourier project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

use serde::{Deserialize, Serialize};

/// Where and how the spectrum report is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// JSON file receiving the report; printed to stdout when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Pretty-print the JSON report
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: None,
            pretty: true,
        }
    }
}
