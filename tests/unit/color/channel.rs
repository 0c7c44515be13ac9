use super::*;

#[test]
fn multiply_identities_u8_exhaustive() {
    for x in 0..=255u8 {
        assert_eq!(u8::multiply(x, 255), x);
        assert_eq!(u8::multiply(255, x), x);
        assert_eq!(u8::multiply(x, 0), 0);
    }
}

#[test]
fn multiply_identities_u16_exhaustive() {
    for x in 0..=u16::MAX {
        assert_eq!(u16::multiply(x, u16::MAX), x);
        assert_eq!(u16::multiply(x, 0), 0);
    }
}

#[test]
fn multiply_identities_f32() {
    for x in [0.0f32, 0.1, 0.25, 0.5, 0.77, 1.0] {
        assert_eq!(f32::multiply(x, 1.0), x);
        assert_eq!(f32::multiply(x, 0.0), 0.0);
    }
}

#[test]
fn multiply_u8_matches_rounded_division() {
    for a in 0..=255u32 {
        for b in 0..=255u32 {
            let exact = (a * b) as f64 / 255.0;
            let got = f64::from(u8::multiply(a as u8, b as u8));
            assert!((got - exact).abs() <= 0.5 + 1e-9, "{a}*{b}: {got} vs {exact}");
        }
    }
}

#[test]
fn lerp_endpoints_u8_exhaustive() {
    for p in 0..=255u8 {
        for q in 0..=255u8 {
            assert_eq!(u8::lerp(p, q, 0), p, "lerp({p},{q},0)");
            assert_eq!(u8::lerp(p, q, 255), q, "lerp({p},{q},255)");
        }
    }
}

#[test]
fn lerp_endpoints_u16_sampled() {
    let samples = [0u16, 1, 2, 127, 128, 255, 256, 32767, 32768, 32769, 65534, 65535];
    for &p in &samples {
        for &q in &samples {
            assert_eq!(u16::lerp(p, q, 0), p);
            assert_eq!(u16::lerp(p, q, u16::MAX), q);
        }
    }
}

#[test]
fn lerp_endpoints_f32() {
    let samples = [0.0f32, 0.1, 0.3, 0.5, 0.7, 1.0];
    for &p in &samples {
        for &q in &samples {
            assert_eq!(f32::lerp(p, q, 0.0), p);
            assert_eq!(f32::lerp(p, q, 1.0), q);
        }
    }
}

#[test]
fn lerp_is_monotonic_in_alpha() {
    for (p, q) in [(10u8, 200u8), (200, 10), (0, 255), (255, 0), (77, 78)] {
        let mut prev = u8::lerp(p, q, 0);
        for a in 1..=255u8 {
            let cur = u8::lerp(p, q, a);
            if q >= p {
                assert!(cur >= prev, "lerp({p},{q}) decreased at a={a}");
            } else {
                assert!(cur <= prev, "lerp({p},{q}) increased at a={a}");
            }
            prev = cur;
        }
    }
}

#[test]
fn lerp_rounding_is_symmetric() {
    // Walking up and walking down by the same weight land on mirrored values.
    for a in 0..=255u8 {
        let up = u8::lerp(0, 255, a);
        let down = u8::lerp(255, 0, a);
        assert_eq!(u16::from(up) + u16::from(down), 255, "a={a}");
    }
}

#[test]
fn prelerp_at_max_replaces_u8_exhaustive() {
    for p in 0..=255u8 {
        for q in 0..=255u8 {
            assert_eq!(u8::prelerp(p, q, 255), q);
        }
    }
}

#[test]
fn prelerp_at_max_replaces_u16_and_f32() {
    for &p in &[0u16, 1, 1000, 40000, 65535] {
        for &q in &[0u16, 7, 30000, 65535] {
            assert_eq!(u16::prelerp(p, q, u16::MAX), q);
        }
    }
    for &p in &[0.0f32, 0.1, 0.6, 1.0] {
        for &q in &[0.0f32, 0.3, 0.7, 1.0] {
            assert_eq!(f32::prelerp(p, q, 1.0), q);
        }
    }
}

#[test]
fn prelerp_differs_from_lerp_for_unscaled_source() {
    // q = 200 is not premultiplied by a = 128; the two identities disagree.
    assert_ne!(u8::prelerp(100, 200, 128), u8::lerp(100, 200, 128));
    // With q premultiplied by a they agree up to rounding.
    let q = u8::multiply(200, 128);
    let pre = i32::from(u8::prelerp(100, q, 128));
    let lin = i32::from(u8::lerp(100, 200, 128));
    assert!((pre - lin).abs() <= 1);
}

#[test]
fn demultiply_guards_zero_alpha() {
    assert_eq!(u8::demultiply(123, 0), 0);
    assert_eq!(u16::demultiply(123, 0), 0);
    assert_eq!(f32::demultiply(0.5, 0.0), 0.0);
    assert_eq!(u8::demultiply(128, 128), 255);
    assert_eq!(u8::demultiply(64, 128), 128);
    assert_eq!(u8::demultiply(200, 100), 255);
}

#[test]
fn cover_expansion() {
    assert_eq!(u8::from_cover(200), 200);
    assert_eq!(u16::from_cover(255), u16::MAX);
    assert_eq!(u16::from_cover(0x12), 0x1212);
    assert_eq!(f32::from_cover(255), 1.0);
    assert_eq!(u8::mult_cover(200, 255), 200);
    assert_eq!(u8::mult_cover(200, 0), 0);
    assert_eq!(u16::mult_cover(u16::MAX, 128), 128 * 257);
}

#[test]
fn normalized_round_trip_is_exact() {
    for x in 0..=255u8 {
        assert_eq!(u8::from_f32(x.to_f32()), x);
    }
    for x in (0..=u16::MAX).step_by(97) {
        assert_eq!(u16::from_f32(x.to_f32()), x);
    }
    assert_eq!(u16::from_f32(1.0), u16::MAX);
}

#[test]
fn from_f32_clamps_and_rounds_half_up() {
    assert_eq!(u8::from_f32(-0.5), 0);
    assert_eq!(u8::from_f32(2.0), 255);
    assert_eq!(u8::from_f32(0.5), 128);
    assert_eq!(f32::from_f32(1.5), 1.0);
}

#[test]
fn invert_mirrors_range() {
    assert_eq!(0u8.invert(), 255);
    assert_eq!(u16::MAX.invert(), 0);
    assert_eq!(0.25f32.invert(), 0.75);
}

#[test]
fn luma_uses_integer_weights_for_u8() {
    assert_eq!(u8::luma(255, 0, 0), 76);
    assert_eq!(u8::luma(0, 255, 0), 149);
    assert_eq!(u8::luma(0, 0, 255), 28);
    assert_eq!(u8::luma(255, 255, 255), 255);
    assert_eq!(u16::luma(u16::MAX, u16::MAX, u16::MAX), u16::MAX);
    assert!((f32::luma(1.0, 0.0, 0.0) - 77.0 / 256.0).abs() < 1e-6);
}

#[test]
fn bit_depths() {
    assert_eq!(<u8 as Channel>::BITS, 8);
    assert_eq!(<u16 as Channel>::BITS, 16);
    assert_eq!(<f32 as Channel>::BITS, 32);
}
