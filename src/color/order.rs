//! Channel orders: where each color role lives inside a stored pixel.

use std::fmt::Debug;

use super::channel::Channel;

/// Zero-sized tag mapping color roles to element offsets within one pixel.
///
/// Role offsets are pairwise distinct and smaller than `ELEMENTS`.
pub trait ChannelOrder: Copy + Default + Debug + Send + Sync + 'static {
    /// Offset of red.
    const R: usize;
    /// Offset of green.
    const G: usize;
    /// Offset of blue.
    const B: usize;
    /// Offset of alpha, if the layout stores it.
    const A: Option<usize>;
    /// Offset of an unused padding element, if any.
    const PAD: Option<usize>;
    /// Elements per pixel.
    const ELEMENTS: usize;

    /// Read `[r, g, b, a]` from one pixel. Layouts without alpha read as opaque.
    #[inline]
    fn read<T: Channel>(p: &[T]) -> [T; 4] {
        let a = match Self::A {
            Some(i) => p[i],
            None => T::MAX,
        };
        [p[Self::R], p[Self::G], p[Self::B], a]
    }

    /// Write `[r, g, b, a]` into one pixel. Alpha is dropped when the layout
    /// has no slot for it; padding is set to `MAX`.
    #[inline]
    fn write<T: Channel>(p: &mut [T], c: [T; 4]) {
        p[Self::R] = c[0];
        p[Self::G] = c[1];
        p[Self::B] = c[2];
        if let Some(i) = Self::A {
            p[i] = c[3];
        }
        if let Some(i) = Self::PAD {
            p[i] = T::MAX;
        }
    }
}

/// Orders that store an alpha element.
pub trait AlphaOrder: ChannelOrder {}

macro_rules! order {
    ($(#[$m:meta])* $name:ident, r = $r:expr, g = $g:expr, b = $b:expr, a = $a:expr, pad = $pad:expr, n = $n:expr) => {
        $(#[$m])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl ChannelOrder for $name {
            const R: usize = $r;
            const G: usize = $g;
            const B: usize = $b;
            const A: Option<usize> = $a;
            const PAD: Option<usize> = $pad;
            const ELEMENTS: usize = $n;
        }
    };
}

order!(/// `R G B`.
    OrderRgb, r = 0, g = 1, b = 2, a = None, pad = None, n = 3);
order!(/// `B G R`.
    OrderBgr, r = 2, g = 1, b = 0, a = None, pad = None, n = 3);
order!(/// `R G B A`.
    OrderRgba, r = 0, g = 1, b = 2, a = Some(3), pad = None, n = 4);
order!(/// `A R G B`.
    OrderArgb, r = 1, g = 2, b = 3, a = Some(0), pad = None, n = 4);
order!(/// `A B G R`.
    OrderAbgr, r = 3, g = 2, b = 1, a = Some(0), pad = None, n = 4);
order!(/// `B G R A`.
    OrderBgra, r = 2, g = 1, b = 0, a = Some(3), pad = None, n = 4);
order!(/// `R G B x`, padded to four elements.
    OrderRgbx, r = 0, g = 1, b = 2, a = None, pad = Some(3), n = 4);
order!(/// `x R G B`.
    OrderXrgb, r = 1, g = 2, b = 3, a = None, pad = Some(0), n = 4);
order!(/// `B G R x`.
    OrderBgrx, r = 2, g = 1, b = 0, a = None, pad = Some(3), n = 4);
order!(/// `x B G R`.
    OrderXbgr, r = 3, g = 2, b = 1, a = None, pad = Some(0), n = 4);

impl AlphaOrder for OrderRgba {}
impl AlphaOrder for OrderArgb {}
impl AlphaOrder for OrderAbgr {}
impl AlphaOrder for OrderBgra {}

#[cfg(test)]
#[path = "../../tests/unit/color/order.rs"]
mod tests;
