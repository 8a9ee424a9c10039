// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-fourier project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Configuration utilities
//!
//! This module provides utility functions for working with configuration
//! settings, including validation and schema management.

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use super::{Config, CONFIG_SCHEMA};
use crate::spectral::MAX_SAMPLE_SIZE;

/// Output the embedded JSON schema to the console.
///
/// This function is called when the `--show-config-schema` flag is provided
/// on the command line.
///
/// # Example
///
/// ```bash
/// ./rust_fourier --show-config-schema > config_schema.json
/// ```
pub fn output_config_schema() -> Result<()> {
    let schema: serde_json::Value =
        serde_json::from_str(CONFIG_SCHEMA).context("Failed to parse JSON schema")?;

    let formatted_schema =
        serde_json::to_string_pretty(&schema).context("Failed to format JSON schema")?;

    println!("{}", formatted_schema);

    Ok(())
}

/// Validates the configuration against rules the JSON schema does not express.
///
/// # Validation Rules
///
/// - **Sample size**: at most [`MAX_SAMPLE_SIZE`], so the engine can be built
/// - **Input file**: when set, must point to an existing file
/// - **Sample rate**: must be positive
pub fn validate_specific_rules(config: &Config) -> Result<()> {
    debug!("Performing additional validation checks");

    if config.transform.sample_size > MAX_SAMPLE_SIZE {
        anyhow::bail!(
            "Invalid sample size: {} (at most {})",
            config.transform.sample_size,
            MAX_SAMPLE_SIZE
        );
    }

    if let Some(input_file) = &config.acquisition.input_file {
        if !Path::new(input_file).is_file() {
            anyhow::bail!("Input file not found: {}", input_file);
        }
    }

    if config.acquisition.sample_rate == 0 {
        anyhow::bail!("Sample rate must be positive");
    }

    Ok(())
}
