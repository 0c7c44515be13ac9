//! RGBA color values tagged with a color space and an alpha state.

use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use super::channel::Channel;
use super::space::{ColorSpace, Linear, Srgb};

/// Type-level tag telling whether color channels are scaled by alpha.
pub trait AlphaState: Copy + Default + Debug + PartialEq + Eq + Hash + Send + Sync + 'static {
    /// `true` when channels are stored multiplied by alpha.
    const PREMULTIPLIED: bool;
}

/// Channels independent of alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Straight;

/// Channels already multiplied by alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Premultiplied;

impl AlphaState for Straight {
    const PREMULTIPLIED: bool = false;
}

impl AlphaState for Premultiplied {
    const PREMULTIPLIED: bool = true;
}

/// An RGBA color.
///
/// `S` is the color space and `A` the alpha state. Neither is ever converted
/// implicitly; use [`Rgba::premultiply`], [`Rgba::demultiply`],
/// `to_linear` or `to_srgb`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba<T, S = Linear, A = Straight> {
    /// Red.
    pub r: T,
    /// Green.
    pub g: T,
    /// Blue.
    pub b: T,
    /// Alpha.
    pub a: T,
    _tag: PhantomData<(S, A)>,
}

/// 8-bit linear straight RGBA.
pub type Rgba8 = Rgba<u8, Linear, Straight>;
/// 8-bit linear premultiplied RGBA.
pub type Rgba8Pre = Rgba<u8, Linear, Premultiplied>;
/// 8-bit sRGB straight RGBA.
pub type Srgba8 = Rgba<u8, Srgb, Straight>;
/// 8-bit sRGB premultiplied RGBA.
pub type Srgba8Pre = Rgba<u8, Srgb, Premultiplied>;
/// 16-bit linear straight RGBA.
pub type Rgba16 = Rgba<u16, Linear, Straight>;
/// 16-bit linear premultiplied RGBA.
pub type Rgba16Pre = Rgba<u16, Linear, Premultiplied>;
/// Float linear straight RGBA.
pub type Rgba32F = Rgba<f32, Linear, Straight>;
/// Float linear premultiplied RGBA.
pub type Rgba32FPre = Rgba<f32, Linear, Premultiplied>;

impl<T, S, A> Rgba<T, S, A> {
    /// Build from raw channel values in the tagged space and alpha state.
    pub const fn new(r: T, g: T, b: T, a: T) -> Self {
        Self {
            r,
            g,
            b,
            a,
            _tag: PhantomData,
        }
    }

    /// `[r, g, b, a]`.
    pub fn to_array(self) -> [T; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// From `[r, g, b, a]`.
    pub fn from_array([r, g, b, a]: [T; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl<T: Channel, S: ColorSpace, A: AlphaState> Rgba<T, S, A> {
    /// Fully opaque color.
    pub fn opaque(r: T, g: T, b: T) -> Self {
        Self::new(r, g, b, T::MAX)
    }

    /// All channels zero.
    pub fn transparent() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO)
    }

    /// Alpha is zero.
    pub fn is_transparent(&self) -> bool {
        self.a.is_zero()
    }

    /// Alpha is at its maximum.
    pub fn is_opaque(&self) -> bool {
        self.a.is_max()
    }

    /// Change channel depth, keeping space and alpha state.
    pub fn convert<U: Channel>(self) -> Rgba<U, S, A> {
        Rgba::new(
            U::from_f32(self.r.to_f32()),
            U::from_f32(self.g.to_f32()),
            U::from_f32(self.b.to_f32()),
            U::from_f32(self.a.to_f32()),
        )
    }
}

impl<T: Channel, S: ColorSpace> Rgba<T, S, Straight> {
    /// Scale color channels by alpha.
    pub fn premultiply(self) -> Rgba<T, S, Premultiplied> {
        if self.a.is_max() {
            return Rgba::new(self.r, self.g, self.b, self.a);
        }
        Rgba::new(
            T::multiply(self.r, self.a),
            T::multiply(self.g, self.a),
            T::multiply(self.b, self.a),
            self.a,
        )
    }
}

impl<T: Channel, S: ColorSpace> Rgba<T, S, Premultiplied> {
    /// Divide color channels by alpha; zero alpha gives a zero color.
    pub fn demultiply(self) -> Rgba<T, S, Straight> {
        if self.a.is_max() {
            return Rgba::new(self.r, self.g, self.b, self.a);
        }
        Rgba::new(
            T::demultiply(self.r, self.a),
            T::demultiply(self.g, self.a),
            T::demultiply(self.b, self.a),
            self.a,
        )
    }
}

impl<T, S, A> From<Rgba<T, S, A>> for [T; 4] {
    fn from(c: Rgba<T, S, A>) -> Self {
        c.to_array()
    }
}

impl<T, S, A> From<[T; 4]> for Rgba<T, S, A> {
    fn from(v: [T; 4]) -> Self {
        Self::from_array(v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/rgba.rs"]
mod tests;
