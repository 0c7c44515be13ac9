use std::marker::PhantomData;

use super::accessor::PixelAccessor;
use super::span::PixelFormat;
use crate::buffer::{RowAccessor, RowBuffer, check_rows};
use crate::color::{Channel, ColorSpace, Gray, Linear, Srgb, Straight};
use crate::foundation::core::Cover;
use crate::foundation::error::PixmixResult;

/// One intensity per pixel; source alpha weights the interpolation.
#[derive(Debug)]
pub struct AlphaBlendGray<R, S = Linear> {
    rbuf: R,
    _space: PhantomData<S>,
}

impl<R: RowAccessor, S: ColorSpace> AlphaBlendGray<R, S> {
    /// Attach to `rbuf`.
    pub fn new(rbuf: R) -> PixmixResult<Self> {
        check_rows(&rbuf, 1)?;
        tracing::debug!(
            width = rbuf.width(),
            height = rbuf.height(),
            bits = <R::Element as Channel>::BITS,
            space = S::NAME,
            "attached gray pixel format"
        );
        Ok(Self {
            rbuf,
            _space: PhantomData,
        })
    }

    /// Detach and return the buffer.
    pub fn into_inner(self) -> R {
        self.rbuf
    }
}

impl<R: RowAccessor, S: ColorSpace> PixelAccessor for AlphaBlendGray<R, S> {
    type Color = Gray<R::Element, S, Straight>;

    fn width(&self) -> u32 {
        self.rbuf.width()
    }

    fn height(&self) -> u32 {
        self.rbuf.height()
    }

    #[inline]
    fn read_pixel(&self, x: u32, y: u32) -> Self::Color {
        Gray::opaque(self.rbuf.row(y)[x as usize])
    }

    #[inline]
    fn write_pixel(&mut self, x: u32, y: u32, c: &Self::Color) {
        self.rbuf.row_mut(y)[x as usize] = c.v;
    }

    #[inline]
    fn blend_into(&mut self, x: u32, y: u32, c: &Self::Color, cover: Cover) {
        let alpha = Channel::mult_cover(c.a, cover);
        let p = &mut self.rbuf.row_mut(y)[x as usize];
        *p = if alpha.is_max() {
            c.v
        } else {
            Channel::lerp(*p, c.v, alpha)
        };
    }

    #[inline]
    fn skips_source(&self, c: &Self::Color) -> bool {
        c.a.is_zero()
    }

    fn write_run(&mut self, x: u32, y: u32, len: usize, c: &Self::Color) {
        let x = x as usize;
        self.rbuf.row_mut(y)[x..x + len].fill(c.v);
    }
}

impl<R: RowAccessor, S: ColorSpace> PixelFormat for AlphaBlendGray<R, S> {}

/// 8-bit linear gray. The channel type follows `R::Element`.
pub type PixfmtGray8<R> = AlphaBlendGray<R>;
/// 8-bit sRGB gray.
pub type PixfmtSgray8<R> = AlphaBlendGray<R, Srgb>;
/// 16-bit linear gray rows.
pub type PixfmtGray16<'a> = AlphaBlendGray<RowBuffer<'a, u16>>;

#[cfg(test)]
#[path = "../../tests/unit/pixfmt/gray.rs"]
mod tests;
