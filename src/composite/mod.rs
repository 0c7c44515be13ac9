//! Porter-Duff operators and separable blend modes.
//!
//! Every operator works on premultiplied colors normalized to `[0, 1]`.
//! Integer pixel formats convert in and out at the accessor boundary.

mod ops;

use std::fmt;
use std::str::FromStr;

use crate::color::{ColorSpace, Premultiplied, Rgba};
use crate::foundation::core::{COVER_FULL, Cover};
use crate::foundation::error::{PixmixError, PixmixResult};

/// Compositing operator, selectable at runtime.
///
/// Names follow the SVG compositing vocabulary in kebab-case (`"src-over"`,
/// `"color-dodge"`, ...), for `Display`, `FromStr` and serde alike.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum CompOp {
    /// Result is fully transparent.
    Clear,
    /// Source replaces destination.
    Src,
    /// Destination is kept.
    Dst,
    /// Source over destination.
    #[default]
    SrcOver,
    /// Destination over source.
    DstOver,
    /// Source where destination is opaque.
    SrcIn,
    /// Destination where source is opaque.
    DstIn,
    /// Source where destination is transparent.
    SrcOut,
    /// Destination where source is transparent.
    DstOut,
    /// Source atop destination; destination alpha kept.
    SrcAtop,
    /// Destination atop source; source alpha kept.
    DstAtop,
    /// Non-overlapping regions of both.
    Xor,
    /// Clamped sum.
    Plus,
    /// Clamped difference of color, union of alpha.
    Minus,
    /// Product of colors.
    Multiply,
    /// Complement of the product of complements.
    Screen,
    /// Multiply or screen depending on the destination.
    Overlay,
    /// Per-channel minimum.
    Darken,
    /// Per-channel maximum.
    Lighten,
    /// Brighten destination toward source.
    ColorDodge,
    /// Darken destination toward source.
    ColorBurn,
    /// Multiply or screen depending on the source.
    HardLight,
    /// Soft version of hard light.
    SoftLight,
    /// Absolute difference.
    Difference,
    /// Low-contrast difference.
    Exclusion,
}

impl CompOp {
    /// Every operator, in declaration order.
    pub const ALL: [CompOp; 25] = [
        CompOp::Clear,
        CompOp::Src,
        CompOp::Dst,
        CompOp::SrcOver,
        CompOp::DstOver,
        CompOp::SrcIn,
        CompOp::DstIn,
        CompOp::SrcOut,
        CompOp::DstOut,
        CompOp::SrcAtop,
        CompOp::DstAtop,
        CompOp::Xor,
        CompOp::Plus,
        CompOp::Minus,
        CompOp::Multiply,
        CompOp::Screen,
        CompOp::Overlay,
        CompOp::Darken,
        CompOp::Lighten,
        CompOp::ColorDodge,
        CompOp::ColorBurn,
        CompOp::HardLight,
        CompOp::SoftLight,
        CompOp::Difference,
        CompOp::Exclusion,
    ];

    /// Kebab-case name.
    pub const fn name(self) -> &'static str {
        match self {
            CompOp::Clear => "clear",
            CompOp::Src => "src",
            CompOp::Dst => "dst",
            CompOp::SrcOver => "src-over",
            CompOp::DstOver => "dst-over",
            CompOp::SrcIn => "src-in",
            CompOp::DstIn => "dst-in",
            CompOp::SrcOut => "src-out",
            CompOp::DstOut => "dst-out",
            CompOp::SrcAtop => "src-atop",
            CompOp::DstAtop => "dst-atop",
            CompOp::Xor => "xor",
            CompOp::Plus => "plus",
            CompOp::Minus => "minus",
            CompOp::Multiply => "multiply",
            CompOp::Screen => "screen",
            CompOp::Overlay => "overlay",
            CompOp::Darken => "darken",
            CompOp::Lighten => "lighten",
            CompOp::ColorDodge => "color-dodge",
            CompOp::ColorBurn => "color-burn",
            CompOp::HardLight => "hard-light",
            CompOp::SoftLight => "soft-light",
            CompOp::Difference => "difference",
            CompOp::Exclusion => "exclusion",
        }
    }

    /// `true` when a fully transparent source leaves the destination as is.
    ///
    /// Only `clear` and `dst-atop` change the destination in that case.
    pub const fn keeps_dst_for_transparent(self) -> bool {
        !matches!(self, CompOp::Clear | CompOp::DstAtop)
    }

    /// Result at full coverage.
    pub fn apply<S: ColorSpace>(
        self,
        dst: Rgba<f32, S, Premultiplied>,
        src: Rgba<f32, S, Premultiplied>,
    ) -> Rgba<f32, S, Premultiplied> {
        Rgba::from_array(ops::apply(self, dst.to_array(), src.to_array()))
    }

    /// Result at partial coverage: `lerp(dst, apply(dst, src), cover)` per channel.
    pub fn composite<S: ColorSpace>(
        self,
        dst: Rgba<f32, S, Premultiplied>,
        src: Rgba<f32, S, Premultiplied>,
        cover: Cover,
    ) -> Rgba<f32, S, Premultiplied> {
        Rgba::from_array(self.composite_raw(dst.to_array(), src.to_array(), cover))
    }

    #[inline]
    pub(crate) fn composite_raw(self, dst: [f32; 4], src: [f32; 4], cover: Cover) -> [f32; 4] {
        if cover == 0 {
            return dst;
        }
        ops::composite(self, dst, src, f32::from(cover) / f32::from(COVER_FULL))
    }
}

impl fmt::Display for CompOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompOp {
    type Err = PixmixError;

    fn from_str(s: &str) -> PixmixResult<Self> {
        let wanted = s.trim();
        CompOp::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                tracing::debug!(name = wanted, "unknown composite operator");
                PixmixError::format(format!("unknown composite operator \"{wanted}\""))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/comp_op.rs"]
mod tests;
