// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-fourier project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Spectrum Analyzer
//!
//! A command-line tool to analyze the frequency spectrum of WAV files and
//! check for the presence of a specific frequency component.

use anyhow::Result;
use clap::Parser;
use rust_fourier::acquisition::{centered_frame, read_wav_samples};
use rust_fourier::spectral::{helpers, FourierTransform, WindowFunction};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "analyze_spectrum")]
#[command(about = "Analyze the frequency spectrum of a WAV file")]
struct Args {
    /// Input WAV file to analyze
    #[arg(value_name = "INPUT_FILE")]
    input: PathBuf,

    /// Target frequency to check (in Hz)
    #[arg(short, long, default_value_t = 2000.0)]
    target_frequency: f64,

    /// Frequency range around target to analyze (±Hz)
    #[arg(short, long, default_value_t = 100.0)]
    range: f64,

    /// FFT size exponent (2^n points)
    #[arg(short = 'n', long, default_value_t = 13)]
    sample_size: u32,

    /// Channel to analyze
    #[arg(short, long, default_value_t = 0)]
    channel: u16,

    /// Window applied before the transform
    #[arg(short, long, value_enum, default_value_t = WindowFunction::Hann)]
    window: WindowFunction,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let engine = FourierTransform::with_sample_size(args.sample_size)?;
    let fft_size = engine.max_input_length();

    println!("Analyzing spectrum of: {}", args.input.display());
    println!("Target frequency: {} Hz", args.target_frequency);
    println!("Analysis range: ±{} Hz", args.range);
    println!("FFT size: {}", fft_size);
    println!();

    let wav = read_wav_samples(&args.input, args.channel)?;
    let duration = wav.samples.len() as f64 / wav.sample_rate as f64;
    println!("WAV file information:");
    println!("  Sample rate: {} Hz", wav.sample_rate);
    println!("  Channels: {}", wav.channels);
    println!("  Duration: {:.2} seconds", duration);
    println!("  Total samples: {}", wav.samples.len());
    println!();

    // Use the middle portion of the signal
    let frame = centered_frame(&wav.samples, fft_size);
    let power = engine.transform_1d(&args.window.apply(frame))?;

    let freq_resolution = wav.sample_rate as f64 / fft_size as f64;
    println!("Frequency resolution: {:.2} Hz", freq_resolution);

    let nyquist = helpers::nyquist_bin(fft_size);
    let target_bin = (args.target_frequency / freq_resolution).round() as usize;
    // Float to usize casts saturate, so huge ranges become usize::MAX
    let range_bins = (args.range / freq_resolution) as usize;
    let (start_bin, end_bin) = helpers::bin_window(target_bin, range_bins, nyquist).into_inner();

    println!(
        "Analyzing frequency range: {:.1} - {:.1} Hz",
        start_bin as f64 * freq_resolution,
        end_bin as f64 * freq_resolution
    );

    let max_bin = (start_bin..=end_bin).fold(start_bin, |best, k| {
        if power[k] > power[best] {
            k
        } else {
            best
        }
    });
    let max_power = power[max_bin];
    let noise_floor = helpers::noise_floor(&power, start_bin..=end_bin).unwrap_or(f64::MIN_POSITIVE);
    let snr_db = helpers::snr_db(max_power, noise_floor);
    let peak_frequency = max_bin as f64 * freq_resolution;

    println!();
    println!("Analysis Results:");
    println!("  Peak frequency: {:.1} Hz", peak_frequency);
    println!("  Peak power: {:.2e}", max_power);
    println!("  Noise floor: {:.2e}", noise_floor);
    println!("  SNR: {:.1} dB", snr_db);
    println!(
        "  Frequency error: {:.1} Hz",
        (peak_frequency - args.target_frequency).abs()
    );

    if snr_db > 6.0 {
        println!("  Status: ✓ Signal clearly detectable!");
    } else if snr_db > 3.0 {
        println!("  Status: ⚠ Signal weakly detectable");
    } else {
        println!("  Status: ✗ Signal not detectable above noise floor");
    }

    if let Some(global_peak) = helpers::peak_bin(&power) {
        println!(
            "  Strongest bin overall: {} ({:.1} Hz)",
            global_peak,
            global_peak as f64 * freq_resolution
        );
    }

    println!();
    println!("Spectrum around target frequency:");
    println!("Frequency (Hz) | Power | Power (dB)");
    println!("{}", "-".repeat(40));
    for k in start_bin..=end_bin.min(start_bin + 20) {
        let marker = if k == max_bin { " ←PEAK" } else { "" };
        println!(
            "{:10.1} | {:8.2e} | {:7.1} dB{}",
            k as f64 * freq_resolution,
            power[k],
            helpers::snr_db(power[k], noise_floor),
            marker
        );
    }

    Ok(())
}
