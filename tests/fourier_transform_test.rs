// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-fourier project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

use std::sync::Arc;
use std::thread;

use anyhow::Result;
use approx::assert_relative_eq;
use rust_fourier::spectral::{
    create_fourier_transform, FourierTransform, FourierTransformError, MAX_SAMPLE_SIZE,
};
use rust_fourier::utility::SignalGenerator;
use rustfft::{num_complex::Complex, FftPlanner};

fn reference_power(input: &[f64], n: usize) -> Vec<f64> {
    let mut buffer: Vec<Complex<f64>> = (0..n)
        .map(|i| Complex::new(input.get(i).copied().unwrap_or(0.0), 0.0))
        .collect();
    FftPlanner::<f64>::new()
        .plan_fft_forward(n)
        .process(&mut buffer);
    buffer.iter().map(|c| c.norm_sqr()).collect()
}

#[test]
fn test_impulse_gives_flat_spectrum() -> Result<()> {
    let fft = FourierTransform::with_sample_size(2)?;
    assert_eq!(fft.transform_1d(&[1.0, 0.0, 0.0, 0.0])?, vec![1.0, 1.0, 1.0, 1.0]);
    Ok(())
}

#[test]
fn test_constant_concentrates_in_dc() -> Result<()> {
    let fft = FourierTransform::with_sample_size(2)?;
    assert_eq!(fft.transform_1d(&[1.0, 1.0, 1.0, 1.0])?, vec![16.0, 0.0, 0.0, 0.0]);
    Ok(())
}

#[test]
fn test_sample_too_big_is_rejected() -> Result<()> {
    let fft = FourierTransform::with_sample_size(2)?;
    let err = fft.transform_1d(&[1.0, 1.0, 1.0, 1.0, 1.0]).unwrap_err();
    assert_eq!(err, FourierTransformError::SampleTooBig { len: 5, max: 4 });
    assert_eq!(err.code(), 401);
    Ok(())
}

#[test]
fn test_single_point_engine() -> Result<()> {
    let fft = FourierTransform::with_sample_size(0)?;
    assert_eq!(fft.max_input_length(), 1);
    assert_eq!(fft.transform_1d(&[3.0])?, vec![9.0]);
    assert_eq!(fft.transform_1d(&[])?, vec![0.0]);
    Ok(())
}

#[test]
fn test_default_engine_has_four_points() {
    let fft = FourierTransform::new();
    assert_eq!(fft.sample_size(), 2);
    assert_eq!(fft.max_input_length(), 4);
}

#[test]
fn test_max_input_length_is_power_of_two() -> Result<()> {
    for sample_size in 0..=12 {
        let fft = FourierTransform::with_sample_size(sample_size)?;
        assert_eq!(fft.max_input_length(), 1usize << sample_size);

        let too_long = vec![0.5; fft.max_input_length() + 1];
        assert!(matches!(
            fft.transform_1d(&too_long),
            Err(FourierTransformError::SampleTooBig { .. })
        ));
    }
    Ok(())
}

#[test]
fn test_oversized_sample_size_fails_construction() {
    let err = FourierTransform::with_sample_size(MAX_SAMPLE_SIZE + 1).unwrap_err();
    assert_eq!(err.code(), 400);
    assert!(create_fourier_transform(MAX_SAMPLE_SIZE + 1).is_err());
}

#[test]
fn test_output_length_and_non_negative_power() -> Result<()> {
    let mut generator = SignalGenerator::new(1);
    for sample_size in 0..=10 {
        let fft = FourierTransform::with_sample_size(sample_size)?;
        for len in [0, 1, fft.max_input_length() / 2, fft.max_input_length()] {
            let power = fft.transform_1d(&generator.uniform_noise(len, 3.0))?;
            assert_eq!(power.len(), fft.max_input_length());
            assert!(power.iter().all(|&p| p >= 0.0));
        }
    }
    Ok(())
}

#[test]
fn test_parseval_energy_conservation() -> Result<()> {
    let mut generator = SignalGenerator::new(2024);
    for sample_size in [0, 1, 3, 6, 9, 12] {
        let fft = FourierTransform::with_sample_size(sample_size)?;
        let n = fft.max_input_length();
        for len in [1, (n / 3).max(1), n] {
            let input = generator.gaussian_noise(len, 1.0);
            let power = fft.transform_1d(&input)?;

            let spectral_energy: f64 = power.iter().sum();
            let signal_energy: f64 = input.iter().map(|x| x * x).sum();
            assert_relative_eq!(
                spectral_energy,
                n as f64 * signal_energy,
                max_relative = 1e-9
            );
        }
    }
    Ok(())
}

#[test]
fn test_zero_input_gives_zero_power() -> Result<()> {
    let fft = FourierTransform::with_sample_size(5)?;
    for len in [0, 1, 7, 32] {
        let power = fft.transform_1d(&vec![0.0; len])?;
        assert!(power.iter().all(|&p| p == 0.0));
    }
    Ok(())
}

#[test]
fn test_repeated_calls_are_bit_identical() -> Result<()> {
    let fft = FourierTransform::with_sample_size(8)?;
    let input = SignalGenerator::new(99).uniform_noise(200, 1.0);

    let first = fft.transform_1d(&input)?;
    let second = fft.transform_1d(&input)?;
    let first_bits: Vec<u64> = first.iter().map(|p| p.to_bits()).collect();
    let second_bits: Vec<u64> = second.iter().map(|p| p.to_bits()).collect();
    assert_eq!(first_bits, second_bits);
    Ok(())
}

#[test]
fn test_matches_rustfft_reference() -> Result<()> {
    let mut generator = SignalGenerator::new(7);
    for sample_size in [1, 2, 5, 10] {
        let fft = FourierTransform::with_sample_size(sample_size)?;
        let n = fft.max_input_length();
        let input = generator.uniform_noise(n - n / 4, 2.0);

        let power = fft.transform_1d(&input)?;
        let expected = reference_power(&input, n);
        let scale: f64 = expected.iter().cloned().fold(1.0, f64::max);
        for (got, want) in power.iter().zip(expected.iter()) {
            assert_relative_eq!(*got, *want, epsilon = 1e-10 * scale);
        }
    }
    Ok(())
}

#[test]
fn test_real_input_spectrum_is_symmetric() -> Result<()> {
    let fft = FourierTransform::with_sample_size(7)?;
    let n = fft.max_input_length();
    let power = fft.transform_1d(&SignalGenerator::new(3).uniform_noise(n, 1.0))?;
    for k in 1..n / 2 {
        assert_relative_eq!(power[k], power[n - k], max_relative = 1e-9, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn test_tone_lands_on_its_bin() -> Result<()> {
    let fft = FourierTransform::with_sample_size(6)?;
    let n = fft.max_input_length();
    let bin = 5;
    let power = fft.transform_1d(&SignalGenerator::tone(n, bin, n, 1.0))?;

    // A unit cosine splits its energy between bin k and its mirror: (N/2)^2 each
    let expected = (n as f64 / 2.0).powi(2);
    assert_relative_eq!(power[bin], expected, max_relative = 1e-9);
    assert_relative_eq!(power[n - bin], expected, max_relative = 1e-9);
    for (k, &p) in power.iter().enumerate() {
        if k != bin && k != n - bin {
            assert!(p < 1e-12 * expected, "leakage {} at bin {}", p, k);
        }
    }
    Ok(())
}

#[test]
fn test_concurrent_calls_on_shared_engine() -> Result<()> {
    let fft = Arc::new(FourierTransform::with_sample_size(9)?);
    let inputs: Vec<Vec<f64>> = (0..8)
        .map(|seed| SignalGenerator::new(seed).uniform_noise(300 + seed as usize, 1.0))
        .collect();
    let expected: Vec<Vec<f64>> = inputs
        .iter()
        .map(|input| fft.transform_1d(input))
        .collect::<Result<_, _>>()?;

    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| {
            let fft = Arc::clone(&fft);
            thread::spawn(move || fft.transform_1d(&input))
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        let power = handle.join().expect("transform thread panicked")?;
        assert_eq!(power, expected);
    }
    Ok(())
}

#[test]
fn test_missing_output_destination() -> Result<()> {
    let fft = FourierTransform::new();
    let err = fft.transform_1d_into(&[1.0, 0.0], None).unwrap_err();
    assert_eq!(err, FourierTransformError::NoOutputDestination);
    assert_eq!(err.code(), 402);
    Ok(())
}

#[test]
fn test_failed_call_leaves_destination_untouched() -> Result<()> {
    let fft = FourierTransform::new();
    let mut output = vec![7.0, 7.0];
    let err = fft
        .transform_1d_into(&[1.0; 5], Some(&mut output))
        .unwrap_err();
    assert_eq!(err.code(), 401);
    assert_eq!(output, vec![7.0, 7.0]);

    fft.transform_1d_into(&[1.0], Some(&mut output))?;
    assert_eq!(output, vec![1.0, 1.0, 1.0, 1.0]);
    Ok(())
}

#[test]
fn test_factory_returns_trait_object() -> Result<()> {
    let analyzer = create_fourier_transform(2)?;
    assert_eq!(analyzer.max_input_length(), 4);
    assert_eq!(analyzer.transform_1d(&[1.0, 1.0, 1.0, 1.0])?, vec![16.0, 0.0, 0.0, 0.0]);
    Ok(())
}
