use super::*;
use crate::color::rgba::Rgba8;

#[test]
fn from_rgba_primaries() {
    assert_eq!(Gray8::from_rgba(Rgba8::opaque(255, 0, 0)).v, 76);
    assert_eq!(Gray8::from_rgba(Rgba8::opaque(0, 255, 0)).v, 149);
    assert_eq!(Gray8::from_rgba(Rgba8::opaque(0, 0, 255)).v, 28);
    let g = Gray8::from_rgba(Rgba8::new(255, 255, 255, 40));
    assert_eq!((g.v, g.a), (255, 40));
}

#[test]
fn to_rgba_replicates_intensity() {
    assert_eq!(Gray8::new(7, 9).to_rgba().to_array(), [7, 7, 7, 9]);
}

#[test]
fn premultiply_and_back() {
    let p = Gray8::new(200, 128).premultiply();
    assert_eq!(p.v, 100);
    assert_eq!(p.demultiply().v, 199);
    assert_eq!(Gray8::new(200, 0).premultiply().demultiply().v, 0);
}

#[test]
fn convert_to_wide() {
    let g: Gray16 = Gray8::opaque(1).convert();
    assert_eq!((g.v, g.a), (257, u16::MAX));
}
