// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-fourier project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

// Main entry point for the FFT power spectrum tool
use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, error, info};
use std::path::PathBuf;

use rust_fourier::acquisition;
use rust_fourier::config::{output_config_schema, Config};
use rust_fourier::spectral::{FourierTransform, FourierTransformError, WindowFunction};
use rust_fourier::utility::SignalGenerator;
use rust_fourier::SpectrumReport;

/// Built-in test signals
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Signal {
    /// Cosine landing on `--tone-bin`
    Tone,
    /// Unit impulse at sample 0
    Impulse,
    /// Uniform white noise seeded by `--seed`
    Noise,
}

/// Power spectrum of a real signal using a fixed-size radix-2 FFT
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (YAML), created with defaults when missing
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the configuration JSON schema and exit
    #[arg(long)]
    show_config_schema: bool,

    /// Sample size exponent: the engine accepts up to 2^n samples
    #[arg(short = 'n', long)]
    sample_size: Option<u32>,

    /// Window applied before the transform
    #[arg(short, long, value_enum)]
    window: Option<WindowFunction>,

    /// Input WAV file
    #[arg(short, long)]
    input_file: Option<PathBuf>,

    /// WAV channel to analyze
    #[arg(long)]
    channel: Option<u16>,

    /// Index of the first analyzed sample in the WAV file
    #[arg(long)]
    offset: Option<usize>,

    /// Comma separated samples, used instead of a WAV file
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    samples: Option<Vec<f64>>,

    /// Generate a test signal instead of reading samples
    #[arg(short, long, value_enum)]
    generate: Option<Signal>,

    /// Bin of the generated tone
    #[arg(long, default_value_t = 1)]
    tone_bin: usize,

    /// Seed of the generated noise
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Output file for the report (JSON)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.show_config_schema {
        return output_config_schema();
    }

    if let Err(err) = run(args) {
        if let Some(fft_error) = err.downcast_ref::<FourierTransformError>() {
            error!("Transform failed with code {}: {}", fft_error.code(), fft_error);
            eprintln!("Error: {}", fft_error);
            std::process::exit(fft_error.exit_status());
        }
        return Err(err);
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.apply_args(
        args.sample_size,
        args.window,
        args.input_file.clone(),
        args.channel,
        args.offset,
        args.output.clone(),
    );
    debug!("Effective configuration: {:?}", config);

    let engine = FourierTransform::with_sample_size(config.transform.sample_size)?;
    let frame_len = engine.max_input_length();

    let (samples, sample_rate) = if let Some(samples) = args.samples {
        info!("Using {} samples from the command line", samples.len());
        (samples, config.acquisition.sample_rate)
    } else if let Some(signal) = args.generate {
        info!("Generating {:?} signal of {} samples", signal, frame_len);
        let samples = match signal {
            Signal::Tone => SignalGenerator::tone(frame_len, args.tone_bin, frame_len, 1.0),
            Signal::Impulse => SignalGenerator::impulse(frame_len, 0),
            Signal::Noise => SignalGenerator::new(args.seed).uniform_noise(frame_len, 1.0),
        };
        (samples, config.acquisition.sample_rate)
    } else if let Some(input_file) = &config.acquisition.input_file {
        info!("Using audio file: {}", input_file);
        let wav = acquisition::read_wav_samples(input_file, config.acquisition.channel)?;
        let frame =
            acquisition::take_frame(&wav.samples, config.acquisition.offset, frame_len).to_vec();
        (frame, wav.sample_rate)
    } else {
        bail!("No input: use --samples, --generate or --input-file");
    };

    let windowed = config.transform.window.apply(&samples);
    let power = engine.transform_1d(&windowed)?;
    let report = SpectrumReport::new(
        &engine,
        samples.len(),
        config.transform.window,
        sample_rate,
        power,
    );

    if let Some(output_path) = &config.output.file {
        info!("Saving results to: {}", output_path);
        let json = if config.output.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        std::fs::write(output_path, json)
            .with_context(|| format!("Failed to write report to {}", output_path))?;
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &SpectrumReport) {
    println!("Power spectrum");
    println!("--------------");
    println!(
        "- Sample size: 2^{} = {} bins",
        report.sample_size, report.max_input_length
    );
    println!("- Input length: {}", report.input_length);
    println!("- Window: {}", report.window);
    if let (Some(bin), Some(frequency)) = (report.peak_bin, report.peak_frequency) {
        println!("- Peak: bin {} ({:.1} Hz)", bin, frequency);
    }
    println!();
    println!("   Bin | Frequency (Hz) | Power");
    println!("{}", "-".repeat(40));
    for (k, (frequency, power)) in report
        .frequencies
        .iter()
        .zip(report.power.iter())
        .enumerate()
    {
        println!("{:6} | {:14.1} | {:.6e}", k, frequency, power);
    }
}
