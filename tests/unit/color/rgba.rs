use super::*;

#[test]
fn constructors_set_alpha() {
    let c = Rgba8::opaque(1, 2, 3);
    assert_eq!(c.to_array(), [1, 2, 3, 255]);
    assert!(c.is_opaque());
    assert!(Rgba8Pre::transparent().is_transparent());
    assert_eq!(Rgba32F::opaque(0.5, 0.5, 0.5).a, 1.0);
}

#[test]
fn premultiply_scales_color_by_alpha() {
    let c = Rgba8::new(255, 128, 0, 128).premultiply();
    assert_eq!(c.to_array(), [128, 64, 0, 128]);
    let opaque = Rgba8::opaque(9, 8, 7).premultiply();
    assert_eq!(opaque.to_array(), [9, 8, 7, 255]);
}

#[test]
fn demultiply_zero_alpha_is_black() {
    let c = Rgba8Pre::new(10, 20, 30, 0).demultiply();
    assert_eq!(c.to_array(), [0, 0, 0, 0]);
}

#[test]
fn premultiply_demultiply_round_trips_within_rounding() {
    for a in [1u8, 17, 64, 128, 200, 254, 255] {
        for v in [0u8, 1, 63, 128, 250, 255] {
            let back = Rgba8::new(v, v, v, a).premultiply().demultiply();
            // Low alpha quantizes harder; the error bound is 255 / (2 * a) rounded up.
            let bound = (255 + 2 * i32::from(a) - 1) / (2 * i32::from(a));
            assert!(
                (i32::from(back.r) - i32::from(v)).abs() <= bound,
                "v={v} a={a} back={}",
                back.r
            );
            assert_eq!(back.a, a);
        }
    }
}

#[test]
fn convert_changes_depth() {
    let c = Rgba8::new(0, 128, 255, 51);
    let wide: Rgba16 = c.convert();
    assert_eq!(wide.to_array(), [0, 128 * 257, u16::MAX, 51 * 257]);
    let back: Rgba8 = wide.convert();
    assert_eq!(back, c);
    let f: Rgba32F = c.convert();
    assert!((f.a - 0.2).abs() < 1e-6);
}

#[test]
fn array_conversions() {
    let c: Rgba8Pre = [4, 3, 2, 1].into();
    let arr: [u8; 4] = c.into();
    assert_eq!(arr, [4, 3, 2, 1]);
}

#[test]
fn alpha_state_flags() {
    assert!(Premultiplied::PREMULTIPLIED);
    assert!(!Straight::PREMULTIPLIED);
}
