//! Pixel formats: a row buffer bound to a channel layout and a blend policy.
//!
//! [`PixelAccessor`] is the small per-format surface (read, write, blend one
//! in-bounds pixel). [`PixelFormat`] layers the clipped line, bar and span
//! operators on top and is what renderers call.

mod accessor;
mod blender;
mod gray;
mod packed;
mod rgba;
mod span;

pub use accessor::PixelAccessor;
pub use blender::{Blender, Composite, NoAlpha, Plain, Premul, PremulFromStraight};
pub use gray::{AlphaBlendGray, PixfmtGray8, PixfmtGray16, PixfmtSgray8};
pub use packed::{AlphaBlendPacked, PackedLayout, PixfmtRgb555, PixfmtRgb565, Rgb555, Rgb565};
pub use rgba::{
    AlphaBlendRgba, PixfmtBgra32, PixfmtBgra32Pre, PixfmtRgb24, PixfmtRgba32, PixfmtRgba32Comp,
    PixfmtRgba32Plain, PixfmtRgba32Pre, PixfmtRgba64, PixfmtRgba64Pre, PixfmtRgba128F,
    PixfmtRgba128FPre, PixfmtSrgba32,
};
pub use span::PixelFormat;
