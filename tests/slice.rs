//! Whole-buffer kernels: agreement with scalar code, tails, and the parallel
//! path.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use vec128::slice::{
    any_gt, exp_into, ln_into, max_i16, max_u8, par_exp_into, par_ln_into, shift_left_into,
    shift_right_into, sum, PARALLEL_CHUNK_SIZE, PARALLEL_THRESHOLD,
};
use vec128::{logf_vec, F32x4, Vec128Error};

/// Every length from 0 to 13 covers empty input, full chunks and each tail.
#[test]
fn test_ln_into_matches_per_register_results() {
    for len in 0..14 {
        let input: Vec<f32> = (0..len).map(|i| 0.5 + i as f32 * 1.75).collect();
        let mut output = vec![f32::NAN; len];
        ln_into(&input, &mut output).unwrap();

        for (i, (&x, &y)) in input.iter().zip(output.iter()).enumerate() {
            let lane = logf_vec(F32x4::splat(x)).to_array()[0];
            assert_eq!(y.to_bits(), lane.to_bits(), "len {len}, index {i}");
        }
    }
}

#[test]
fn test_exp_into_tail_lanes() {
    let input = [0.0f32, 1.0, -1.0, 2.0, 10.0, -10.0];
    let mut output = [0.0; 6];
    exp_into(&input, &mut output).unwrap();

    for (&x, &y) in input.iter().zip(output.iter()) {
        let expected = x.exp();
        assert!(((y - expected) / expected).abs() < 1e-6, "exp({x}) = {y}");
    }
}

#[test]
fn test_parallel_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(42);
    let len = PARALLEL_THRESHOLD + 3 * PARALLEL_CHUNK_SIZE + 7;

    let input: Vec<f32> = (0..len).map(|_| rng.random_range(1e-3..1e3)).collect();

    let mut sequential = vec![0.0; len];
    let mut parallel = vec![0.0; len];
    ln_into(&input, &mut sequential).unwrap();
    par_ln_into(&input, &mut parallel).unwrap();
    assert!(sequential
        .iter()
        .zip(&parallel)
        .all(|(s, p)| s.to_bits() == p.to_bits()));

    let exponents: Vec<f32> = (0..len).map(|_| rng.random_range(-80.0..80.0)).collect();
    exp_into(&exponents, &mut sequential).unwrap();
    par_exp_into(&exponents, &mut parallel).unwrap();
    assert!(sequential
        .iter()
        .zip(&parallel)
        .all(|(s, p)| s.to_bits() == p.to_bits()));
}

#[test]
fn test_parallel_small_input_takes_sequential_path() {
    let input = [1.0f32, 2.0, 3.0];
    let mut output = [0.0; 3];
    par_exp_into(&input, &mut output).unwrap();
    for (&x, &y) in input.iter().zip(output.iter()) {
        assert!(((y - x.exp()) / x.exp()).abs() < 1e-6);
    }
}

#[test]
fn test_length_mismatch_is_reported() {
    let mut short = vec![0.0; 3];
    let expected = Vec128Error::LengthMismatch {
        expected: 4,
        actual: 3,
    };

    assert_eq!(ln_into(&[1.0; 4], &mut short), Err(expected.clone()));
    assert_eq!(exp_into(&[1.0; 4], &mut short), Err(expected.clone()));
    assert_eq!(par_ln_into(&[1.0; 4], &mut short), Err(expected.clone()));
    assert_eq!(par_exp_into(&[1.0; 4], &mut short), Err(expected.clone()));
    assert_eq!(shift_right_into(&[1.0; 4], 0.0, &mut short), Err(expected.clone()));
    assert_eq!(shift_left_into(&[1.0; 4], 0.0, &mut short), Err(expected.clone()));
    assert_eq!(any_gt(&[1.0; 4], &short), Err(expected));
}

#[test]
fn test_sum_random() {
    let mut rng = StdRng::seed_from_u64(8);
    for len in [0, 1, 4, 7, 64, 1001] {
        let input: Vec<f32> = (0..len).map(|_| rng.random_range(-1.0..1.0)).collect();
        let expected: f64 = input.iter().map(|&x| x as f64).sum();
        let got = sum(&input) as f64;
        assert!(
            (got - expected).abs() < 1e-3,
            "len {len}: got {got}, expected {expected}"
        );
    }
}

#[test]
fn test_max_matches_iterator_max() {
    let mut rng = StdRng::seed_from_u64(9);
    for len in [1, 15, 16, 17, 100, 257] {
        let bytes: Vec<u8> = (0..len).map(|_| rng.random()).collect();
        assert_eq!(max_u8(&bytes), bytes.iter().copied().max());

        let shorts: Vec<i16> = (0..len).map(|_| rng.random()).collect();
        assert_eq!(max_i16(&shorts), shorts.iter().copied().max());
    }

    assert_eq!(max_i16(&[i16::MIN; 9]), Some(i16::MIN));
    assert_eq!(max_u8(&[0; 33]), Some(0));
}

#[test]
fn test_any_gt() {
    let a = vec![0.0f32; 9];
    let mut b = vec![0.0f32; 9];
    assert_eq!(any_gt(&a, &b), Ok(false));

    // tail element only
    b[8] = -1.0;
    assert_eq!(any_gt(&a, &b), Ok(true));

    b[8] = 0.0;
    b[5] = -1.0;
    assert_eq!(any_gt(&a, &b), Ok(true));

    assert_eq!(any_gt(&[], &[]), Ok(false));
    assert_eq!(any_gt(&[f32::NAN; 5], &[0.0; 5]), Ok(false));
}

#[test]
fn test_shift_right_into() {
    for len in 0..12 {
        let input: Vec<f32> = (0..len).map(|i| i as f32 + 1.0).collect();
        let mut output = vec![0.0; len];
        shift_right_into(&input, -1.0, &mut output).unwrap();

        let expected: Vec<f32> = std::iter::once(-1.0)
            .chain(input.iter().copied())
            .take(len)
            .collect();
        assert_eq!(output, expected, "len {len}");
    }
}

#[test]
fn test_shift_left_into() {
    for len in 0..12 {
        let input: Vec<f32> = (0..len).map(|i| i as f32 + 1.0).collect();
        let mut output = vec![0.0; len];
        shift_left_into(&input, -1.0, &mut output).unwrap();

        let expected: Vec<f32> = input
            .iter()
            .copied()
            .skip(1)
            .chain(std::iter::once(-1.0))
            .take(len)
            .collect();
        assert_eq!(output, expected, "len {len}");
    }
}

#[test]
fn test_shifts_are_inverse() {
    let input: Vec<f32> = (0..10).map(|i| (i * i) as f32).collect();
    let mut right = vec![0.0; 10];
    let mut back = vec![0.0; 10];
    shift_right_into(&input, 0.0, &mut right).unwrap();
    shift_left_into(&right, input[9], &mut back).unwrap();
    assert_eq!(back, input);
}
