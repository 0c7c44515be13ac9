use super::*;
use crate::buffer::PixelBuffer;
use crate::color::{Channel, Gray8, Rgba8Pre};
use crate::mask::{AlphaMaskU8, OneComponentMask, combine_cover};
use crate::pixfmt::{PixfmtGray8, PixfmtRgba32Pre};

const W: u32 = 4;

/// Row mask `[255, 128, 0, 255]` repeated on both rows.
fn mask_buf() -> PixelBuffer<u8> {
    PixelBuffer::from_vec(vec![255, 128, 0, 255, 255, 128, 0, 255], W, 2, 1).unwrap()
}

fn gray_buf() -> PixelBuffer<u8> {
    PixelBuffer::new(W, 2, 1).unwrap()
}

#[test]
fn copy_hline_blends_by_mask() {
    let mbuf = mask_buf();
    let mut buf = gray_buf();
    {
        let pf = PixfmtGray8::new(&mut buf).unwrap();
        let mask = AlphaMaskU8::new(&mbuf, 1, 0, OneComponentMask).unwrap();
        let mut ad = PixfmtAmaskAdaptor::new(pf, mask);
        ad.copy_hline(-2, 0, 10, &Gray8::opaque(255));
    }
    assert_eq!(&buf.as_slice()[..4], &[255, 128, 0, 255]);
    assert_eq!(&buf.as_slice()[4..], &[0, 0, 0, 0]);
}

#[test]
fn blend_hline_scales_cover_by_mask() {
    let mbuf = mask_buf();
    let mut buf = gray_buf();
    {
        let pf = PixfmtGray8::new(&mut buf).unwrap();
        let mask = AlphaMaskU8::new(&mbuf, 1, 0, OneComponentMask).unwrap();
        let mut ad = PixfmtAmaskAdaptor::new(pf, mask);
        ad.blend_hline(0, 1, 4, &Gray8::opaque(255), 128);
    }
    let want = [128, combine_cover(128, 128), 0, 128];
    assert_eq!(&buf.as_slice()[4..], &want);
}

#[test]
fn solid_hspan_combines_caller_covers() {
    let mbuf = mask_buf();
    let mut buf = gray_buf();
    {
        let pf = PixfmtGray8::new(&mut buf).unwrap();
        let mask = AlphaMaskU8::new(&mbuf, 1, 0, OneComponentMask).unwrap();
        let mut ad = PixfmtAmaskAdaptor::new(pf, mask);
        // covers[0] belongs to x = -1 and is clipped away.
        ad.blend_solid_hspan(-1, 0, 5, &Gray8::opaque(255), Some(&[9, 255, 255, 255, 0]));
        ad.blend_solid_hspan(0, 1, 4, &Gray8::opaque(255), None);
    }
    assert_eq!(&buf.as_slice()[..4], &[255, 128, 0, 0]);
    assert_eq!(&buf.as_slice()[4..], &[255, 128, 0, 255]);
}

#[test]
fn vertical_operations_use_mask_columns() {
    let mbuf = mask_buf();
    let mut buf = gray_buf();
    {
        let pf = PixfmtGray8::new(&mut buf).unwrap();
        let mask = AlphaMaskU8::new(&mbuf, 1, 0, OneComponentMask).unwrap();
        let mut ad = PixfmtAmaskAdaptor::new(pf, mask);
        ad.copy_vline(1, -3, 10, &Gray8::opaque(255));
        ad.blend_vline(2, 0, 2, &Gray8::opaque(255), 255);
        ad.blend_solid_vspan(3, 0, 2, &Gray8::opaque(255), Some(&[255, 128]));
    }
    assert_eq!(&buf.as_slice()[..4], &[0, 128, 0, 255]);
    assert_eq!(&buf.as_slice()[4..], &[0, 128, 0, 128]);
}

#[test]
fn pixel_level_calls_go_through_mask() {
    let mbuf = mask_buf();
    let mut buf = gray_buf();
    {
        let pf = PixfmtGray8::new(&mut buf).unwrap();
        let mask = AlphaMaskU8::new(&mbuf, 1, 0, OneComponentMask).unwrap();
        let mut ad = PixfmtAmaskAdaptor::new(pf, mask);
        ad.copy_pixel(0, 0, &Gray8::opaque(200));
        ad.copy_pixel(2, 0, &Gray8::opaque(200));
        ad.blend_pixel(1, 0, &Gray8::opaque(255), 255);
        ad.copy_color_hspan(0, 1, 4, &[Gray8::opaque(255), Gray8::opaque(100)]);
        assert_eq!(ad.pixel(0, 0), Gray8::opaque(200));
    }
    assert_eq!(&buf.as_slice()[..4], &[200, 128, 0, 0]);
    assert_eq!(&buf.as_slice()[4..], &[255, u8::lerp(0, 100, 128), 0, 100]);
}

#[test]
fn masked_bar_on_rgba() {
    let mbuf = mask_buf();
    let mut buf = PixelBuffer::<u8>::new(W, 2, 4).unwrap();
    {
        let pf = PixfmtRgba32Pre::new(&mut buf).unwrap();
        let mask = AlphaMaskU8::new(&mbuf, 1, 0, OneComponentMask).unwrap();
        let mut ad = PixfmtAmaskAdaptor::new(pf, mask);
        ad.copy_bar(3, 1, 0, 0, &Rgba8Pre::new(255, 0, 0, 255));
        assert_eq!(ad.pixel(1, 1).to_array(), [128, 0, 0, 128]);
        assert_eq!(ad.pixel(2, 1), Rgba8Pre::transparent());
    }
    assert_eq!(&buf.as_slice()[..4], &[255, 0, 0, 255]);
}

#[test]
fn scratch_span_grows_and_never_shrinks() {
    let mbuf = mask_buf();
    let mut buf = gray_buf();
    let pf = PixfmtGray8::new(&mut buf).unwrap();
    let mask = AlphaMaskU8::new(&mbuf, 1, 0, OneComponentMask).unwrap();
    let mut ad = PixfmtAmaskAdaptor::new(pf, &mask);
    assert_eq!(ad.span_capacity(), 0);
    ad.copy_hline(0, 0, 4, &Gray8::opaque(1));
    let grown = ad.span_capacity();
    assert!(grown >= 4);
    ad.copy_hline(0, 0, 1, &Gray8::opaque(1));
    assert_eq!(ad.span_capacity(), grown);
}

#[test]
fn transparent_copy_through_mask_is_a_noop() {
    let mbuf = mask_buf();
    let mut buf = PixelBuffer::<u8>::new(W, 2, 4).unwrap();
    buf.as_mut_slice().fill(7);
    {
        let pf = PixfmtRgba32Pre::new(&mut buf).unwrap();
        let mask = AlphaMaskU8::new(&mbuf, 1, 0, OneComponentMask).unwrap();
        let mut ad = PixfmtAmaskAdaptor::new(pf, mask);
        ad.clear();
        let (_, mask) = ad.into_inner();
        assert_eq!(mask.pixel(0, 0), 255);
    }
    assert!(buf.as_slice().iter().all(|&v| v == 7));
}
