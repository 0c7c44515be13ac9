//! RGB and RGBA pixel formats over any channel order and blend policy.

use std::marker::PhantomData;

use super::accessor::PixelAccessor;
use super::blender::{Blender, Composite, NoAlpha, Plain, Premul, PremulFromStraight};
use super::span::PixelFormat;
use crate::buffer::{RowAccessor, check_rows};
use crate::buffer::RowBuffer;
use crate::color::{
    AlphaOrder, AlphaState, Channel, ChannelOrder, ColorSpace, Linear, OrderBgra, OrderRgb,
    OrderRgba, Rgba, Srgb,
};
use crate::composite::CompOp;
use crate::foundation::core::Cover;
use crate::foundation::error::PixmixResult;

/// Binds a row buffer, a channel order, a blend policy and a color space.
///
/// The format borrows whatever `R` is (usually `&mut PixelBuffer<_>` or a
/// [`RowBuffer`](crate::buffer::RowBuffer)) and never allocates.
#[derive(Debug)]
pub struct AlphaBlendRgba<R, O, B, S = Linear> {
    rbuf: R,
    blender: B,
    _layout: PhantomData<(O, S)>,
}

impl<R, O, B, S> AlphaBlendRgba<R, O, B, S>
where
    R: RowAccessor,
    O: ChannelOrder,
    B: Blender<R::Element, O>,
    S: ColorSpace,
{
    /// Attach to `rbuf` with the policy's default state.
    pub fn new(rbuf: R) -> PixmixResult<Self>
    where
        B: Default,
    {
        Self::with_blender(rbuf, B::default())
    }

    /// Attach to `rbuf` with an explicit policy value.
    ///
    /// Fails when a row is too short for `width * O::ELEMENTS` elements.
    pub fn with_blender(rbuf: R, blender: B) -> PixmixResult<Self> {
        check_rows(&rbuf, O::ELEMENTS)?;
        tracing::debug!(
            width = rbuf.width(),
            height = rbuf.height(),
            bits = <R::Element as Channel>::BITS,
            elements = O::ELEMENTS,
            premultiplied = <B::Alpha as AlphaState>::PREMULTIPLIED,
            space = S::NAME,
            "attached rgba pixel format"
        );
        Ok(Self {
            rbuf,
            blender,
            _layout: PhantomData,
        })
    }

    /// Swap in another buffer, returning the previous one.
    pub fn attach(&mut self, rbuf: R) -> PixmixResult<R> {
        check_rows(&rbuf, O::ELEMENTS)?;
        Ok(std::mem::replace(&mut self.rbuf, rbuf))
    }

    /// Attached buffer.
    pub fn buffer(&self) -> &R {
        &self.rbuf
    }

    /// Blend policy.
    pub fn blender(&self) -> &B {
        &self.blender
    }

    /// Detach and return the buffer.
    pub fn into_inner(self) -> R {
        self.rbuf
    }

    #[inline]
    fn pix(&self, x: u32, y: u32) -> &[R::Element] {
        let off = x as usize * O::ELEMENTS;
        &self.rbuf.row(y)[off..off + O::ELEMENTS]
    }

    #[inline]
    fn run_mut(&mut self, x: u32, y: u32, len: usize) -> &mut [R::Element] {
        let off = x as usize * O::ELEMENTS;
        &mut self.rbuf.row_mut(y)[off..off + len * O::ELEMENTS]
    }
}

impl<R, O, S> AlphaBlendRgba<R, O, Composite, S>
where
    R: RowAccessor,
    O: AlphaOrder,
    S: ColorSpace,
{
    /// Active compositing operator.
    pub fn comp_op(&self) -> CompOp {
        self.blender.op
    }

    /// Switch the compositing operator. The buffer is untouched.
    pub fn set_comp_op(&mut self, op: CompOp) {
        tracing::debug!(
            from = %self.blender.op,
            to = %op,
            space = S::NAME,
            "switching composite operator"
        );
        self.blender.op = op;
    }
}

impl<R, O, B, S> PixelAccessor for AlphaBlendRgba<R, O, B, S>
where
    R: RowAccessor,
    O: ChannelOrder,
    B: Blender<R::Element, O>,
    S: ColorSpace,
{
    type Color = Rgba<R::Element, S, B::Alpha>;

    fn width(&self) -> u32 {
        self.rbuf.width()
    }

    fn height(&self) -> u32 {
        self.rbuf.height()
    }

    #[inline]
    fn read_pixel(&self, x: u32, y: u32) -> Self::Color {
        Rgba::from_array(self.blender.decode(O::read(self.pix(x, y))))
    }

    #[inline]
    fn write_pixel(&mut self, x: u32, y: u32, c: &Self::Color) {
        let v = self.blender.encode(c.to_array());
        O::write(self.run_mut(x, y, 1), v);
    }

    #[inline]
    fn blend_into(&mut self, x: u32, y: u32, c: &Self::Color, cover: Cover) {
        let blender = &self.blender;
        let off = x as usize * O::ELEMENTS;
        let p = &mut self.rbuf.row_mut(y)[off..off + O::ELEMENTS];
        blender.blend_pix(p, c.to_array(), cover);
    }

    #[inline]
    fn skips_source(&self, c: &Self::Color) -> bool {
        self.blender.is_noop(&c.to_array())
    }

    fn write_run(&mut self, x: u32, y: u32, len: usize, c: &Self::Color) {
        let v = self.blender.encode(c.to_array());
        for p in self.run_mut(x, y, len).chunks_exact_mut(O::ELEMENTS) {
            O::write(p, v);
        }
    }

    fn blend_run(&mut self, x: u32, y: u32, len: usize, c: &Self::Color, cover: Cover) {
        let blender = &self.blender;
        let off = x as usize * O::ELEMENTS;
        let run = &mut self.rbuf.row_mut(y)[off..off + len * O::ELEMENTS];
        let c = c.to_array();
        for p in run.chunks_exact_mut(O::ELEMENTS) {
            blender.blend_pix(p, c, cover);
        }
    }
}

impl<R, O, B, S> PixelFormat for AlphaBlendRgba<R, O, B, S>
where
    R: RowAccessor,
    O: ChannelOrder,
    B: Blender<R::Element, O>,
    S: ColorSpace,
{
}

// The 8-bit aliases stay generic over `R`; their channel type is whatever
// `R::Element` is. The wider aliases pin the element type.

/// 8-bit RGBA, premultiplied storage fed straight colors.
pub type PixfmtRgba32<R> = AlphaBlendRgba<R, OrderRgba, PremulFromStraight>;
/// 8-bit RGBA, premultiplied storage and colors.
pub type PixfmtRgba32Pre<R> = AlphaBlendRgba<R, OrderRgba, Premul>;
/// 8-bit RGBA, straight storage and colors.
pub type PixfmtRgba32Plain<R> = AlphaBlendRgba<R, OrderRgba, Plain>;
/// 8-bit RGBA with a runtime compositing operator.
pub type PixfmtRgba32Comp<R> = AlphaBlendRgba<R, OrderRgba, Composite>;
/// 8-bit BGRA, premultiplied storage fed straight colors.
pub type PixfmtBgra32<R> = AlphaBlendRgba<R, OrderBgra, PremulFromStraight>;
/// 8-bit BGRA, premultiplied storage and colors.
pub type PixfmtBgra32Pre<R> = AlphaBlendRgba<R, OrderBgra, Premul>;
/// 8-bit RGB without alpha.
pub type PixfmtRgb24<R> = AlphaBlendRgba<R, OrderRgb, NoAlpha>;
/// 8-bit sRGB-tagged RGBA, premultiplied storage fed straight colors.
pub type PixfmtSrgba32<R> = AlphaBlendRgba<R, OrderRgba, PremulFromStraight, Srgb>;
/// 16-bit RGBA rows, premultiplied storage fed straight colors.
pub type PixfmtRgba64<'a> = AlphaBlendRgba<RowBuffer<'a, u16>, OrderRgba, PremulFromStraight>;
/// 16-bit RGBA rows, premultiplied storage and colors.
pub type PixfmtRgba64Pre<'a> = AlphaBlendRgba<RowBuffer<'a, u16>, OrderRgba, Premul>;
/// `f32` RGBA rows, premultiplied storage fed straight colors.
pub type PixfmtRgba128F<'a> = AlphaBlendRgba<RowBuffer<'a, f32>, OrderRgba, PremulFromStraight>;
/// `f32` RGBA rows, premultiplied storage and colors.
pub type PixfmtRgba128FPre<'a> = AlphaBlendRgba<RowBuffer<'a, f32>, OrderRgba, Premul>;

#[cfg(test)]
#[path = "../../tests/unit/pixfmt/rgba.rs"]
mod tests;
