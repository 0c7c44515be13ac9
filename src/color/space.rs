//! Color space tags and the sRGB transfer curve.

use std::fmt::Debug;
use std::hash::Hash;

use super::channel::Channel;
use super::gray::Gray;
use super::rgba::{Rgba, Straight};

/// Type-level tag telling how stored intensities are encoded.
pub trait ColorSpace: Copy + Default + Debug + PartialEq + Eq + Hash + Send + Sync + 'static {
    /// Short name used in diagnostics.
    const NAME: &'static str;
}

/// Linear light.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Linear;

/// sRGB gamma-encoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Srgb;

impl ColorSpace for Linear {
    const NAME: &'static str = "linear";
}

impl ColorSpace for Srgb {
    const NAME: &'static str = "srgb";
}

/// Decode one normalized sRGB value to linear light.
#[inline]
pub fn srgb_to_linear(v: f32) -> f32 {
    let v = v.clamp(0.0, 1.0);
    if v <= 0.040_45 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode one normalized linear value as sRGB.
#[inline]
pub fn linear_to_srgb(v: f32) -> f32 {
    let v = v.clamp(0.0, 1.0);
    if v <= 0.003_130_8 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

#[inline]
fn map<T: Channel>(v: T, f: fn(f32) -> f32) -> T {
    T::from_f32(f(v.to_f32()))
}

impl<T: Channel> Rgba<T, Srgb, Straight> {
    /// Decode to linear light. Alpha is carried over unchanged.
    pub fn to_linear(self) -> Rgba<T, Linear, Straight> {
        Rgba::new(
            map(self.r, srgb_to_linear),
            map(self.g, srgb_to_linear),
            map(self.b, srgb_to_linear),
            self.a,
        )
    }
}

impl<T: Channel> Rgba<T, Linear, Straight> {
    /// Encode as sRGB. Alpha is carried over unchanged.
    pub fn to_srgb(self) -> Rgba<T, Srgb, Straight> {
        Rgba::new(
            map(self.r, linear_to_srgb),
            map(self.g, linear_to_srgb),
            map(self.b, linear_to_srgb),
            self.a,
        )
    }
}

impl<T: Channel> Gray<T, Srgb, Straight> {
    /// Decode to linear light.
    pub fn to_linear(self) -> Gray<T, Linear, Straight> {
        Gray::new(map(self.v, srgb_to_linear), self.a)
    }
}

impl<T: Channel> Gray<T, Linear, Straight> {
    /// Encode as sRGB.
    pub fn to_srgb(self) -> Gray<T, Srgb, Straight> {
        Gray::new(map(self.v, linear_to_srgb), self.a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/space.rs"]
mod tests;
