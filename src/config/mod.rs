// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-fourier project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Configuration management for the FFT power spectrum tools
//!
//! This module provides functionality for loading, validating, and applying
//! configuration settings. The configuration is backed by a YAML file and
//! validated against an embedded JSON schema.
//!
//! ## Configuration Structure
//!
//! The configuration is organized as a nested structure with sections:
//! - `transform`: Sample size of the engine and window function
//! - `acquisition`: Source of the analyzed samples
//! - `output`: Destination of the spectrum report
//!
//! ## Usage
//!
//! ```no_run
//! use rust_fourier::config::Config;
//! use std::path::Path;
//!
//! // Load config from file, creates a default if not found
//! let mut config = Config::from_file(Path::new("config.yaml")).unwrap();
//!
//! // Apply command line overrides if needed
//! config.apply_args(
//!     Some(10),                          // Sample size
//!     None,                              // Window
//!     Some("signal.wav".into()),         // Input file
//!     Some(1),                           // Channel
//!     None,                              // Offset
//!     Some("spectrum.json".into()),      // Output file
//! );
//!
//! println!("Engine length: {}", config.transform.max_input_length());
//! ```

pub mod acquisition;
pub mod output;
pub mod transform;
pub mod utils;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::spectral::WindowFunction;

pub use acquisition::AcquisitionConfig;
pub use output::OutputConfig;
pub use transform::TransformConfig;
pub use utils::{output_config_schema, validate_specific_rules};

/// JSON schema every configuration file is validated against
pub const CONFIG_SCHEMA: &str = include_str!("../../resources/config.schema.json");

/// Root configuration structure.
///
/// Each section falls back to its default values when missing from the
/// configuration file, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Transform engine settings.
    #[serde(default)]
    pub transform: TransformConfig,

    /// Sample source settings.
    #[serde(default)]
    pub acquisition: AcquisitionConfig,

    /// Spectrum report settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Helper method to create a sample config file when validation fails
    fn create_sample_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let sample_path = path.with_extension("sample.yaml");
        debug!("Original path: {:?}, Sample path: {:?}", path, sample_path);

        if let Some(parent) = sample_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!("Creating parent directory: {:?}", parent);
                fs::create_dir_all(parent).with_context(|| {
                    format!(
                        "Failed to create parent directory for sample config at {:?}",
                        parent
                    )
                })?;
            }
        }

        Self::default()
            .save_to_file(&sample_path)
            .with_context(|| format!("Failed to save sample config to {:?}", sample_path))?;

        error!(
            "Sample configuration file created at {:?}\nPlease edit and rename it",
            sample_path
        );
        Ok(())
    }

    /// Load configuration from a file
    ///
    /// A missing file is created with default values. A file failing schema
    /// validation, deserialization or [`validate_specific_rules`] is rejected,
    /// and a `*.sample.yaml` file with default values is written next to it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(
                "Configuration file not found at {:?}, creating default",
                path
            );
            let default_config = Self::default();
            default_config.save_to_file(path)?;
            return Ok(default_config);
        }

        debug!("Loading configuration from {:?}", path);
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file at {:?}", path))?;

        let yaml_value: serde_yml::Value = if contents.trim().is_empty() {
            serde_yml::Value::Null
        } else {
            serde_yml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML configuration from {:?}", path))?
        };

        // An empty document parses to null and means "all defaults"
        let json_value = match serde_json::to_value(&yaml_value).with_context(|| {
            format!("Failed to convert YAML to JSON for validation: {:?}", path)
        })? {
            serde_json::Value::Null => serde_json::Value::Object(Default::default()),
            value => value,
        };

        let schema: serde_json::Value =
            serde_json::from_str(CONFIG_SCHEMA).context("Failed to parse JSON schema")?;
        let validator = jsonschema::draft202012::options()
            .should_validate_formats(true)
            .build(&schema)?;

        debug!("Validating {} configuration against schema", path.display());
        if let Err(error) = validator.validate(&json_value) {
            error!("Configuration validation error before deserialization");
            Self::create_sample_config(path)?;
            anyhow::bail!("Configuration validation failed: {}", error);
        }

        debug!("Schema validation passed, deserializing into Config structure");
        let config: Config = match serde_json::from_value(json_value) {
            Ok(config) => config,
            Err(err) => {
                error!("Configuration deserialization error: {}", err);
                if let Err(e) = Self::create_sample_config(path) {
                    error!("Failed to create sample config: {}", e);
                }
                return Err(anyhow::anyhow!(
                    "Failed to deserialize configuration from {}: {}",
                    path.display(),
                    err
                ));
            }
        };

        if let Err(err) = validate_specific_rules(&config) {
            error!("Configuration specific validation error: {}", err);
            Self::create_sample_config(path)?;
            return Err(err);
        }

        Ok(config)
    }

    /// Save the configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml =
            serde_yml::to_string(self).context("Failed to serialize configuration to YAML")?;

        let mut file = File::create(path.as_ref())
            .with_context(|| format!("Failed to create config file at {:?}", path.as_ref()))?;

        file.write_all(yaml.as_bytes())
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Apply command line arguments to override configuration values.
    ///
    /// Only arguments that were provided override the loaded values.
    ///
    /// # Parameters
    ///
    /// * `sample_size` - Exponent of the engine length
    /// * `window` - Window function applied before the transform
    /// * `input_file` - WAV file to analyze
    /// * `channel` - Channel of the WAV file
    /// * `offset` - First sample of the analyzed frame
    /// * `output_file` - JSON file receiving the report
    pub fn apply_args(
        &mut self,
        sample_size: Option<u32>,
        window: Option<WindowFunction>,
        input_file: Option<PathBuf>,
        channel: Option<u16>,
        offset: Option<usize>,
        output_file: Option<PathBuf>,
    ) {
        if let Some(size) = sample_size {
            debug!("Overriding sample size from command line: {}", size);
            self.transform.sample_size = size;
        }
        if let Some(window) = window {
            debug!("Overriding window from command line: {}", window);
            self.transform.window = window;
        }
        if let Some(file) = input_file {
            debug!("Overriding input file from command line: {:?}", file);
            self.acquisition.input_file = Some(file.to_string_lossy().to_string());
        }
        if let Some(channel) = channel {
            debug!("Overriding channel from command line: {}", channel);
            self.acquisition.channel = channel;
        }
        if let Some(offset) = offset {
            debug!("Overriding offset from command line: {}", offset);
            self.acquisition.offset = offset;
        }
        if let Some(file) = output_file {
            debug!("Overriding output file from command line: {:?}", file);
            self.output.file = Some(file.to_string_lossy().to_string());
        }
    }
}
