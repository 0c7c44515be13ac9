//! Alpha masks: an auxiliary 8-bit coverage image that gates painting.
//!
//! A mask reads one value per pixel from a [`RowSource`](crate::buffer::RowSource)
//! through a [`MaskFunction`]. [`PixfmtAmaskAdaptor`] wraps any
//! [`PixelFormat`](crate::pixfmt::PixelFormat) so every paint call goes through
//! the mask first.

mod adaptor;
mod alpha_mask;
mod function;

pub use adaptor::PixfmtAmaskAdaptor;
pub use alpha_mask::{AlphaMask, AlphaMaskU8, AmaskNoClipU8, combine_cover};
pub use function::{MaskFunction, OneComponentMask, RgbToGrayMask};

/// Clipped mask over a gray buffer.
pub type AlphaMaskGray8<R> = AlphaMaskU8<R, OneComponentMask>;
/// Clipped mask over the luminance of an RGB buffer.
pub type AlphaMaskRgb24Gray<R> = AlphaMaskU8<R, RgbToGrayMask>;
