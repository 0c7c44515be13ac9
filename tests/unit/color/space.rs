use super::*;
use crate::color::rgba::{Rgba8, Rgba16, Srgba8};

#[test]
fn transfer_curve_known_points() {
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    assert!((srgb_to_linear(0.5) - 0.214_04).abs() < 1e-4);
    assert!((linear_to_srgb(0.214_04) - 0.5).abs() < 1e-4);
    assert!((srgb_to_linear(0.02) - 0.02 / 12.92).abs() < 1e-7);
}

#[test]
fn transfer_round_trips_in_float() {
    for i in 0..=100 {
        let v = i as f32 / 100.0;
        assert!((linear_to_srgb(srgb_to_linear(v)) - v).abs() < 1e-5, "v={v}");
    }
}

#[test]
fn srgb8_to_linear_keeps_alpha() {
    let lin = Srgba8::new(128, 0, 255, 77).to_linear();
    assert_eq!(lin.to_array(), [55, 0, 255, 77]);
}

#[test]
fn sixteen_bit_linear_round_trips_every_srgb8_value() {
    for v in 0..=255u8 {
        let wide: Rgba<u16, Srgb, Straight> = Srgba8::opaque(v, v, v).convert();
        let back: Srgba8 = wide.to_linear().to_srgb().convert();
        assert_eq!(back.r, v);
    }
}

#[test]
fn linear_to_srgb_brightens_midtones() {
    let s = Rgba8::opaque(55, 55, 55).to_srgb();
    assert!(s.r > 120);
    let _: Rgba16 = Rgba16::opaque(0, 0, 0);
    assert_eq!(Linear::NAME, "linear");
    assert_eq!(Srgb::NAME, "srgb");
}

#[test]
fn gray_transfer() {
    let g = Gray::<u8, Srgb, Straight>::new(128, 10).to_linear();
    assert_eq!((g.v, g.a), (55, 10));
    assert_eq!(g.to_srgb().v, 128);
}
