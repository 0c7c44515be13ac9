//! Blend policies: how a source color lands on a stored pixel.
//!
//! Each policy fixes the storage convention of the buffer and the alpha state
//! of the colors it accepts. Policies that store alpha are only implemented
//! for orders with an alpha slot.

use crate::color::{AlphaOrder, AlphaState, Channel, ChannelOrder, Premultiplied, Straight};
use crate::composite::CompOp;
use crate::foundation::core::{COVER_FULL, Cover};

/// A storage convention plus its blend formula.
pub trait Blender<T: Channel, O: ChannelOrder> {
    /// Alpha state of the colors this policy reads and writes.
    type Alpha: AlphaState;

    /// Blend `c = [r, g, b, a]` into pixel `p` with coverage `cover`.
    fn blend_pix(&self, p: &mut [T], c: [T; 4], cover: Cover);

    /// Stored form of a color.
    #[inline]
    fn encode(&self, c: [T; 4]) -> [T; 4] {
        c
    }

    /// Color form of a stored pixel.
    #[inline]
    fn decode(&self, p: [T; 4]) -> [T; 4] {
        p
    }

    /// `true` when blending `c` can never change a pixel.
    #[inline]
    fn is_noop(&self, c: &[T; 4]) -> bool {
        c[3].is_zero()
    }
}

/// Opaque storage; source alpha only weights the interpolation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoAlpha;

/// Straight (non-premultiplied) storage with alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Plain;

/// Premultiplied storage fed premultiplied colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Premul;

/// Premultiplied storage fed straight colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PremulFromStraight;

/// Premultiplied storage blended through a runtime [`CompOp`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Composite {
    /// Active operator.
    pub op: CompOp,
}

impl Composite {
    /// Policy using `op`.
    pub const fn new(op: CompOp) -> Self {
        Self { op }
    }
}

impl<T: Channel, O: ChannelOrder> Blender<T, O> for NoAlpha {
    type Alpha = Straight;

    #[inline]
    fn blend_pix(&self, p: &mut [T], c: [T; 4], cover: Cover) {
        let alpha = T::mult_cover(c[3], cover);
        if alpha.is_max() {
            O::write(p, [c[0], c[1], c[2], T::MAX]);
            return;
        }
        p[O::R] = T::lerp(p[O::R], c[0], alpha);
        p[O::G] = T::lerp(p[O::G], c[1], alpha);
        p[O::B] = T::lerp(p[O::B], c[2], alpha);
    }

    #[inline]
    fn encode(&self, c: [T; 4]) -> [T; 4] {
        [c[0], c[1], c[2], T::MAX]
    }

    #[inline]
    fn decode(&self, p: [T; 4]) -> [T; 4] {
        [p[0], p[1], p[2], T::MAX]
    }
}

impl<T: Channel, O: AlphaOrder> Blender<T, O> for Plain {
    type Alpha = Straight;

    #[inline]
    fn blend_pix(&self, p: &mut [T], c: [T; 4], cover: Cover) {
        let alpha = T::mult_cover(c[3], cover);
        if alpha.is_zero() {
            return;
        }
        let [r, g, b, a] = O::read(p);
        let r = T::lerp(T::multiply(r, a), c[0], alpha);
        let g = T::lerp(T::multiply(g, a), c[1], alpha);
        let b = T::lerp(T::multiply(b, a), c[2], alpha);
        let a = T::prelerp(a, alpha, alpha);
        O::write(
            p,
            [
                T::demultiply(r, a),
                T::demultiply(g, a),
                T::demultiply(b, a),
                a,
            ],
        );
    }
}

impl<T: Channel, O: AlphaOrder> Blender<T, O> for Premul {
    type Alpha = Premultiplied;

    #[inline]
    fn blend_pix(&self, p: &mut [T], c: [T; 4], cover: Cover) {
        let [cr, cg, cb, alpha] = c.map(|v| T::mult_cover(v, cover));
        if alpha.is_zero() {
            return;
        }
        let [r, g, b, a] = O::read(p);
        O::write(
            p,
            [
                T::prelerp(r, cr, alpha),
                T::prelerp(g, cg, alpha),
                T::prelerp(b, cb, alpha),
                T::prelerp(a, alpha, alpha),
            ],
        );
    }
}

impl<T: Channel, O: AlphaOrder> Blender<T, O> for PremulFromStraight {
    type Alpha = Straight;

    #[inline]
    fn blend_pix(&self, p: &mut [T], c: [T; 4], cover: Cover) {
        let alpha = T::mult_cover(c[3], cover);
        if alpha.is_zero() {
            return;
        }
        let [r, g, b, a] = O::read(p);
        O::write(
            p,
            [
                T::lerp(r, c[0], alpha),
                T::lerp(g, c[1], alpha),
                T::lerp(b, c[2], alpha),
                T::prelerp(a, alpha, alpha),
            ],
        );
    }

    #[inline]
    fn encode(&self, c: [T; 4]) -> [T; 4] {
        if c[3].is_max() {
            return c;
        }
        [
            T::multiply(c[0], c[3]),
            T::multiply(c[1], c[3]),
            T::multiply(c[2], c[3]),
            c[3],
        ]
    }

    #[inline]
    fn decode(&self, p: [T; 4]) -> [T; 4] {
        if p[3].is_max() {
            return p;
        }
        [
            T::demultiply(p[0], p[3]),
            T::demultiply(p[1], p[3]),
            T::demultiply(p[2], p[3]),
            p[3],
        ]
    }
}

impl<T: Channel, O: AlphaOrder> Blender<T, O> for Composite {
    type Alpha = Premultiplied;

    #[inline]
    fn blend_pix(&self, p: &mut [T], c: [T; 4], cover: Cover) {
        if self.op == CompOp::SrcOver && cover == COVER_FULL && c[3].is_max() {
            O::write(p, c);
            return;
        }
        let d = O::read(p).map(Channel::to_f32);
        let s = c.map(Channel::to_f32);
        let out = self.op.composite_raw(d, s, cover);
        O::write(p, out.map(T::from_f32));
    }

    #[inline]
    fn is_noop(&self, c: &[T; 4]) -> bool {
        c[3].is_zero() && self.op.keeps_dst_for_transparent()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pixfmt/blender.rs"]
mod tests;
