use super::*;
use crate::buffer::{PixelBuffer, RowSource};

#[test]
fn rgb565_round_trip_error_bounds() {
    for v in 0..=255u8 {
        let [r, g, b] = Rgb565::unpack(Rgb565::pack([v, v, v]));
        assert!(v.abs_diff(r) <= 7, "r {v} -> {r}");
        assert!(v.abs_diff(g) <= 3, "g {v} -> {g}");
        assert!(v.abs_diff(b) <= 7, "b {v} -> {b}");
    }
}

#[test]
fn rgb555_round_trip_error_bounds() {
    for v in 0..=255u8 {
        let [r, g, b] = Rgb555::unpack(Rgb555::pack([v, v, v]));
        for c in [r, g, b] {
            assert!(v.abs_diff(c) <= 7, "{v} -> {c}");
        }
    }
}

#[test]
fn extremes_unpack_exactly() {
    assert_eq!(Rgb565::unpack(Rgb565::pack([255, 255, 255])), [255, 255, 255]);
    assert_eq!(Rgb565::unpack(Rgb565::pack([0, 0, 0])), [0, 0, 0]);
    assert_eq!(Rgb565::pack([255, 0, 0]), 0xf800);
    assert_eq!(Rgb565::pack([0, 255, 0]), 0x07e0);
    assert_eq!(Rgb555::pack([0, 0, 255]), 0x801f);
    assert_eq!(Rgb555::unpack(0xffff), [255, 255, 255]);
}

#[test]
fn packed_format_copies_and_blends() {
    let mut buf = PixelBuffer::<u16>::new(2, 1, 1).unwrap();
    let mut pf = PixfmtRgb565::new(&mut buf).unwrap();
    pf.copy_hline(0, 0, 2, &Rgba8::opaque(255, 0, 0));
    assert_eq!(pf.pixel(0, 0), Rgba8::opaque(255, 0, 0));
    pf.blend_pixel(1, 0, &Rgba8::new(0, 0, 255, 255), 128);
    let p = pf.pixel(1, 0);
    assert!(p.r.abs_diff(127) <= 7 && p.b.abs_diff(128) <= 7, "{p:?}");
    assert_eq!(p.a, 255);
    pf.blend_pixel(0, 0, &Rgba8::new(0, 0, 255, 0), 255);
    drop(pf);
    assert_eq!(buf.row(0)[0], 0xf800);
}

#[test]
fn packed_555_format_sets_top_bit() {
    let mut buf = PixelBuffer::<u16>::new(1, 1, 1).unwrap();
    let mut pf = PixfmtRgb555::new(&mut buf).unwrap();
    pf.clear();
    drop(pf);
    assert_eq!(buf.row(0)[0], 0x8000);
}
