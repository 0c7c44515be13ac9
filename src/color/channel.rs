//! Channel arithmetic for the 8-bit, 16-bit and float domains.
//!
//! Integer domains use the classic double-shift rounding so that `multiply`
//! and `lerp` are exact at both ends of the range. The float domain works on
//! `[0, 1]` and has no rounding bias.

use std::fmt::Debug;

use crate::foundation::core::{COVER_FULL, Cover};

/// A single color or alpha intensity in `[ZERO, MAX]`.
pub trait Channel: Copy + Default + PartialEq + PartialOrd + Debug + Send + Sync + 'static {
    /// Lowest intensity.
    const ZERO: Self;
    /// Highest intensity (255, 65535 or 1.0).
    const MAX: Self;
    /// Storage width in bits.
    const BITS: u32;

    /// Fixed-point product scaled back into channel range.
    ///
    /// `multiply(x, MAX) == x` and `multiply(x, ZERO) == ZERO` hold exactly.
    fn multiply(a: Self, b: Self) -> Self;

    /// Interpolate from `p` to `q` by `a`: `p + (q - p) * a / MAX`, rounded.
    ///
    /// Monotonic in `a`, exact at `a == ZERO` (gives `p`) and `a == MAX` (gives `q`).
    fn lerp(p: Self, q: Self, a: Self) -> Self;

    /// Interpolate from `p` toward a `q` that is already scaled by `a`.
    ///
    /// `p + q - multiply(p, a)`. Only equivalent to [`Channel::lerp`] when `q`
    /// has been premultiplied by `a`.
    fn prelerp(p: Self, q: Self, a: Self) -> Self;

    /// Undo a premultiplication by `a`; zero alpha yields zero.
    fn demultiply(v: Self, a: Self) -> Self;

    /// Expand an 8-bit coverage into this channel domain.
    fn from_cover(cover: Cover) -> Self;

    /// Normalize into `[0, 1]`.
    fn to_f32(self) -> f32;

    /// Quantize a normalized value, clamping to `[0, 1]` and rounding half up.
    fn from_f32(v: f32) -> Self;

    /// `MAX - self`.
    fn invert(self) -> Self;

    /// Scale by a coverage value.
    #[inline]
    fn mult_cover(v: Self, cover: Cover) -> Self {
        if cover == COVER_FULL {
            v
        } else {
            Self::multiply(v, Self::from_cover(cover))
        }
    }

    /// Luminance with the 77/150/29 weights, normalized to this domain.
    #[inline]
    fn luma(r: Self, g: Self, b: Self) -> Self {
        let y = (77.0 * r.to_f32() + 150.0 * g.to_f32() + 29.0 * b.to_f32()) / 256.0;
        Self::from_f32(y)
    }

    /// `true` for [`Channel::ZERO`].
    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// `true` for [`Channel::MAX`].
    #[inline]
    fn is_max(self) -> bool {
        self == Self::MAX
    }
}

impl Channel for u8 {
    const ZERO: Self = 0;
    const MAX: Self = u8::MAX;
    const BITS: u32 = 8;

    #[inline]
    fn multiply(a: Self, b: Self) -> Self {
        let t = u32::from(a) * u32::from(b) + 0x80;
        (((t >> 8) + t) >> 8) as u8
    }

    #[inline]
    fn lerp(p: Self, q: Self, a: Self) -> Self {
        let t = (i32::from(q) - i32::from(p)) * i32::from(a) + 0x80 - i32::from(p > q);
        (i32::from(p) + (((t >> 8) + t) >> 8)) as u8
    }

    #[inline]
    fn prelerp(p: Self, q: Self, a: Self) -> Self {
        p.wrapping_add(q).wrapping_sub(Self::multiply(p, a))
    }

    #[inline]
    fn demultiply(v: Self, a: Self) -> Self {
        if a == 0 {
            return 0;
        }
        let a = u32::from(a);
        let r = (u32::from(v) * 255 + (a >> 1)) / a;
        r.min(255) as u8
    }

    #[inline]
    fn from_cover(cover: Cover) -> Self {
        cover
    }

    #[inline]
    fn to_f32(self) -> f32 {
        f32::from(self) / 255.0
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
    }

    #[inline]
    fn invert(self) -> Self {
        u8::MAX - self
    }

    #[inline]
    fn luma(r: Self, g: Self, b: Self) -> Self {
        ((u32::from(r) * 77 + u32::from(g) * 150 + u32::from(b) * 29) >> 8) as u8
    }
}

impl Channel for u16 {
    const ZERO: Self = 0;
    const MAX: Self = u16::MAX;
    const BITS: u32 = 16;

    #[inline]
    fn multiply(a: Self, b: Self) -> Self {
        let t = u32::from(a) * u32::from(b) + 0x8000;
        (((t >> 16) + t) >> 16) as u16
    }

    #[inline]
    fn lerp(p: Self, q: Self, a: Self) -> Self {
        // (q - p) * a needs 33 bits with sign.
        let t = (i64::from(q) - i64::from(p)) * i64::from(a) + 0x8000 - i64::from(p > q);
        (i64::from(p) + (((t >> 16) + t) >> 16)) as u16
    }

    #[inline]
    fn prelerp(p: Self, q: Self, a: Self) -> Self {
        p.wrapping_add(q).wrapping_sub(Self::multiply(p, a))
    }

    #[inline]
    fn demultiply(v: Self, a: Self) -> Self {
        if a == 0 {
            return 0;
        }
        let a = u64::from(a);
        let r = (u64::from(v) * 65535 + (a >> 1)) / a;
        r.min(65535) as u16
    }

    #[inline]
    fn from_cover(cover: Cover) -> Self {
        (u16::from(cover) << 8) | u16::from(cover)
    }

    #[inline]
    fn to_f32(self) -> f32 {
        f32::from(self) / 65535.0
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        (v.clamp(0.0, 1.0) * 65535.0 + 0.5) as u16
    }

    #[inline]
    fn invert(self) -> Self {
        u16::MAX - self
    }
}

impl Channel for f32 {
    const ZERO: Self = 0.0;
    const MAX: Self = 1.0;
    const BITS: u32 = 32;

    #[inline]
    fn multiply(a: Self, b: Self) -> Self {
        a * b
    }

    #[inline]
    fn lerp(p: Self, q: Self, a: Self) -> Self {
        // Weighted form keeps both endpoints exact.
        p * (1.0 - a) + q * a
    }

    #[inline]
    fn prelerp(p: Self, q: Self, a: Self) -> Self {
        q + p * (1.0 - a)
    }

    #[inline]
    fn demultiply(v: Self, a: Self) -> Self {
        if a <= 0.0 {
            return 0.0;
        }
        (v / a).min(1.0)
    }

    #[inline]
    fn from_cover(cover: Cover) -> Self {
        f32::from(cover) / f32::from(COVER_FULL)
    }

    #[inline]
    fn to_f32(self) -> f32 {
        self
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        v.clamp(0.0, 1.0)
    }

    #[inline]
    fn invert(self) -> Self {
        1.0 - self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/channel.rs"]
mod tests;
