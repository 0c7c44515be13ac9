//! Single-intensity colors.

use std::marker::PhantomData;

use super::channel::Channel;
use super::rgba::{AlphaState, Premultiplied, Rgba, Straight};
use super::space::{ColorSpace, Linear};

/// A gray value with alpha, tagged like [`Rgba`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Gray<T, S = Linear, A = Straight> {
    /// Intensity.
    pub v: T,
    /// Alpha.
    pub a: T,
    _tag: PhantomData<(S, A)>,
}

/// 8-bit linear straight gray.
pub type Gray8 = Gray<u8, Linear, Straight>;
/// 16-bit linear straight gray.
pub type Gray16 = Gray<u16, Linear, Straight>;
/// Float linear straight gray.
pub type Gray32F = Gray<f32, Linear, Straight>;

impl<T, S, A> Gray<T, S, A> {
    /// Build from raw values.
    pub const fn new(v: T, a: T) -> Self {
        Self {
            v,
            a,
            _tag: PhantomData,
        }
    }
}

impl<T: Channel, S: ColorSpace, A: AlphaState> Gray<T, S, A> {
    /// Fully opaque gray.
    pub fn opaque(v: T) -> Self {
        Self::new(v, T::MAX)
    }

    /// Zero intensity and alpha.
    pub fn transparent() -> Self {
        Self::new(T::ZERO, T::ZERO)
    }

    /// Alpha is zero.
    pub fn is_transparent(&self) -> bool {
        self.a.is_zero()
    }

    /// Luminance of an RGBA color, keeping its alpha.
    ///
    /// 8-bit colors use `(r*77 + g*150 + b*29) >> 8`.
    pub fn from_rgba(c: Rgba<T, S, A>) -> Self {
        Self::new(T::luma(c.r, c.g, c.b), c.a)
    }

    /// Expand to RGBA with equal color channels.
    pub fn to_rgba(self) -> Rgba<T, S, A> {
        Rgba::new(self.v, self.v, self.v, self.a)
    }

    /// Change channel depth.
    pub fn convert<U: Channel>(self) -> Gray<U, S, A> {
        Gray::new(U::from_f32(self.v.to_f32()), U::from_f32(self.a.to_f32()))
    }
}

impl<T: Channel, S: ColorSpace> Gray<T, S, Straight> {
    /// Scale intensity by alpha.
    pub fn premultiply(self) -> Gray<T, S, Premultiplied> {
        Gray::new(T::multiply(self.v, self.a), self.a)
    }
}

impl<T: Channel, S: ColorSpace> Gray<T, S, Premultiplied> {
    /// Divide intensity by alpha; zero alpha gives zero.
    pub fn demultiply(self) -> Gray<T, S, Straight> {
        Gray::new(T::demultiply(self.v, self.a), self.a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/gray.rs"]
mod tests;
