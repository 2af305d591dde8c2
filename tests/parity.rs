//! The compiled backend against the portable reference, bit for bit.
//!
//! On targets without a native backend both sides are the portable code and
//! these tests are trivially true; on x86 and AArch64 they pin SSE2 and NEON
//! to the reference semantics.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use vec128::math::{expf, logf};
use vec128::simd::portable;
use vec128::{Backend, F32x4, I16x8, U8x16, BACKEND};

fn assert_same(native: [f32; 4], reference: [f32; 4], what: &str) {
    for (lane, (n, r)) in native.iter().zip(reference).enumerate() {
        if r.is_nan() {
            assert!(n.is_nan(), "{what}: lane {lane} expected NaN, got {n}");
        } else {
            assert_eq!(
                n.to_bits(),
                r.to_bits(),
                "{what}: lane {lane} native {n:e} reference {r:e}"
            );
        }
    }
}

fn random_lanes(rng: &mut StdRng) -> [f32; 4] {
    std::array::from_fn(|_| match rng.random_range(0..8) {
        0 => f32::from_bits(rng.random()),
        1 => rng.random_range(-100.0..100.0),
        2 => rng.random_range(-1.0..1.0),
        _ => rng.random_range(0.0..1e6),
    })
}

#[test]
fn test_logf_parity() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..5000 {
        let lanes = random_lanes(&mut rng);
        assert_same(
            logf(F32x4::from_array(lanes)).to_array(),
            logf(portable::F32x4::from_array(lanes)).to_array(),
            "logf",
        );
    }
}

#[test]
fn test_expf_parity() {
    let mut rng = StdRng::seed_from_u64(2025);
    for _ in 0..5000 {
        let lanes = random_lanes(&mut rng);
        assert_same(
            expf(F32x4::from_array(lanes)).to_array(),
            expf(portable::F32x4::from_array(lanes)).to_array(),
            "expf",
        );
    }
}

#[test]
fn test_special_value_parity() {
    let specials = [
        [0.0, -0.0, f32::INFINITY, f32::NEG_INFINITY],
        [f32::NAN, -f32::NAN, f32::MIN_POSITIVE, f32::MAX],
        [f32::from_bits(1), -f32::from_bits(1), 88.72284, -87.33655],
        [88.722_85, -87.336_56, 1.0, -1.0],
    ];
    for lanes in specials {
        assert_same(
            logf(F32x4::from_array(lanes)).to_array(),
            logf(portable::F32x4::from_array(lanes)).to_array(),
            "logf special",
        );
        assert_same(
            expf(F32x4::from_array(lanes)).to_array(),
            expf(portable::F32x4::from_array(lanes)).to_array(),
            "expf special",
        );
    }
}

#[test]
fn test_floor_parity() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..5000 {
        let lanes: [f32; 4] = std::array::from_fn(|_| match rng.random_range(0..3) {
            0 => rng.random_range(-1e9..1e9),
            1 => rng.random_range(-4.0..4.0),
            _ => f32::from_bits(rng.random()),
        });
        assert_same(
            F32x4::from_array(lanes).floor().to_array(),
            portable::F32x4::from_array(lanes).floor().to_array(),
            "floor",
        );
    }
}

#[test]
fn test_lane_primitive_parity() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..1000 {
        let a = random_lanes(&mut rng);
        let b = random_lanes(&mut rng);
        let mask: [u32; 4] = std::array::from_fn(|_| rng.random());

        let (na, nb) = (F32x4::from_array(a), F32x4::from_array(b));
        let (pa, pb) = (portable::F32x4::from_array(a), portable::F32x4::from_array(b));
        let nm = vec128::U32x4::from_array(mask).as_f32x4();
        let pm = portable::U32x4::from_array(mask).as_f32x4();

        assert_eq!(
            vec128::select(na, nb, nm).as_u32x4().to_array(),
            portable::lanes::select(pa, pb, pm).as_u32x4().to_array()
        );
        assert_eq!(
            vec128::any_gt_float(na, nb),
            portable::lanes::any_gt_float(pa, pb)
        );
        assert_same(
            vec128::rightshift_float(na, nb).to_array(),
            portable::lanes::rightshift_float(pa, pb).to_array(),
            "rightshift",
        );
        assert_same(
            vec128::leftshift_float(na, nb).to_array(),
            portable::lanes::leftshift_float(pa, pb).to_array(),
            "leftshift",
        );

        let h = vec128::hsum_float(na);
        let r = portable::lanes::hsum_float(pa);
        assert!(h.to_bits() == r.to_bits() || (h.is_nan() && r.is_nan()));

        let bytes: [u8; 16] = std::array::from_fn(|_| rng.random());
        assert_eq!(
            vec128::hmax_u8(U8x16::from_array(bytes)),
            portable::lanes::hmax_u8(portable::U8x16::from_array(bytes))
        );

        let shorts: [i16; 8] = std::array::from_fn(|_| rng.random());
        let other: [i16; 8] = std::array::from_fn(|_| rng.random());
        assert_eq!(
            vec128::hmax_s16(I16x8::from_array(shorts)),
            portable::lanes::hmax_s16(portable::I16x8::from_array(shorts))
        );
        assert_eq!(
            vec128::any_gt_s16(I16x8::from_array(shorts), I16x8::from_array(other)),
            portable::lanes::any_gt_s16(
                portable::I16x8::from_array(shorts),
                portable::I16x8::from_array(other)
            )
        );
    }
}

#[test]
fn test_backend_is_reported() {
    let name = BACKEND.to_string();
    assert!(["sse", "neon", "portable"].contains(&name.as_str()));
    assert_eq!(name, BACKEND.name());

    if cfg!(feature = "portable") {
        assert_eq!(BACKEND, Backend::Portable);
    }
}
