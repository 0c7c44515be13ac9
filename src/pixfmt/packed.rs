//! 16-bit packed RGB formats.

use std::fmt::Debug;
use std::marker::PhantomData;

use super::accessor::PixelAccessor;
use super::span::PixelFormat;
use crate::buffer::{RowAccessor, check_rows};
use crate::color::{Channel, Rgba8};
use crate::foundation::core::Cover;
use crate::foundation::error::PixmixResult;

/// Bit layout of one packed pixel.
pub trait PackedLayout: Copy + Default + Debug + Send + Sync + 'static {
    /// Quantize 8-bit `[r, g, b]`.
    fn pack(rgb: [u8; 3]) -> u16;

    /// Expand to 8-bit `[r, g, b]`, replicating high bits into the low ones.
    fn unpack(v: u16) -> [u8; 3];
}

/// `rrrrrggg gggbbbbb`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb565;

/// `1rrrrrgg gggbbbbb`; the top bit is written set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb555;

#[inline]
fn expand5(v: u16) -> u8 {
    let v = (v & 0x1f) as u8;
    (v << 3) | (v >> 2)
}

#[inline]
fn expand6(v: u16) -> u8 {
    let v = (v & 0x3f) as u8;
    (v << 2) | (v >> 4)
}

impl PackedLayout for Rgb565 {
    #[inline]
    fn pack([r, g, b]: [u8; 3]) -> u16 {
        (u16::from(r >> 3) << 11) | (u16::from(g >> 2) << 5) | u16::from(b >> 3)
    }

    #[inline]
    fn unpack(v: u16) -> [u8; 3] {
        [expand5(v >> 11), expand6(v >> 5), expand5(v)]
    }
}

impl PackedLayout for Rgb555 {
    #[inline]
    fn pack([r, g, b]: [u8; 3]) -> u16 {
        0x8000 | (u16::from(r >> 3) << 10) | (u16::from(g >> 3) << 5) | u16::from(b >> 3)
    }

    #[inline]
    fn unpack(v: u16) -> [u8; 3] {
        [expand5(v >> 10), expand5(v >> 5), expand5(v)]
    }
}

/// Packed 16-bit RGB over a `u16` row buffer; alpha only weights blends.
#[derive(Debug)]
pub struct AlphaBlendPacked<R, L> {
    rbuf: R,
    _layout: PhantomData<L>,
}

impl<R: RowAccessor<Element = u16>, L: PackedLayout> AlphaBlendPacked<R, L> {
    /// Attach to `rbuf`.
    pub fn new(rbuf: R) -> PixmixResult<Self> {
        check_rows(&rbuf, 1)?;
        Ok(Self {
            rbuf,
            _layout: PhantomData,
        })
    }

    /// Detach and return the buffer.
    pub fn into_inner(self) -> R {
        self.rbuf
    }
}

impl<R: RowAccessor<Element = u16>, L: PackedLayout> PixelAccessor for AlphaBlendPacked<R, L> {
    type Color = Rgba8;

    fn width(&self) -> u32 {
        self.rbuf.width()
    }

    fn height(&self) -> u32 {
        self.rbuf.height()
    }

    #[inline]
    fn read_pixel(&self, x: u32, y: u32) -> Rgba8 {
        let [r, g, b] = L::unpack(self.rbuf.row(y)[x as usize]);
        Rgba8::opaque(r, g, b)
    }

    #[inline]
    fn write_pixel(&mut self, x: u32, y: u32, c: &Rgba8) {
        self.rbuf.row_mut(y)[x as usize] = L::pack([c.r, c.g, c.b]);
    }

    #[inline]
    fn blend_into(&mut self, x: u32, y: u32, c: &Rgba8, cover: Cover) {
        let alpha = u8::mult_cover(c.a, cover);
        let p = &mut self.rbuf.row_mut(y)[x as usize];
        if alpha.is_max() {
            *p = L::pack([c.r, c.g, c.b]);
            return;
        }
        let [r, g, b] = L::unpack(*p);
        *p = L::pack([
            u8::lerp(r, c.r, alpha),
            u8::lerp(g, c.g, alpha),
            u8::lerp(b, c.b, alpha),
        ]);
    }

    #[inline]
    fn skips_source(&self, c: &Rgba8) -> bool {
        c.a == 0
    }

    fn write_run(&mut self, x: u32, y: u32, len: usize, c: &Rgba8) {
        let x = x as usize;
        let v = L::pack([c.r, c.g, c.b]);
        self.rbuf.row_mut(y)[x..x + len].fill(v);
    }
}

impl<R: RowAccessor<Element = u16>, L: PackedLayout> PixelFormat for AlphaBlendPacked<R, L> {}

/// RGB 5-6-5.
pub type PixfmtRgb565<R> = AlphaBlendPacked<R, Rgb565>;
/// RGB 5-5-5.
pub type PixfmtRgb555<R> = AlphaBlendPacked<R, Rgb555>;

#[cfg(test)]
#[path = "../../tests/unit/pixfmt/packed.rs"]
mod tests;
