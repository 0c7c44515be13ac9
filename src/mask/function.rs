use crate::foundation::core::Cover;

/// Turns the elements of one mask pixel into a coverage value.
///
/// `p` starts at the mask's addressed element and runs to the end of that
/// pixel. Implementations return 0 when `p` is too short.
pub trait MaskFunction {
    /// Coverage for one mask pixel.
    fn calculate(&self, p: &[u8]) -> Cover;
}

/// Uses the first addressed element as is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneComponentMask;

impl MaskFunction for OneComponentMask {
    #[inline]
    fn calculate(&self, p: &[u8]) -> Cover {
        p.first().copied().unwrap_or(0)
    }
}

/// Luminance of three elements at offsets `r`, `g`, `b`:
/// `(R*77 + G*150 + B*29) >> 8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RgbToGrayMask {
    /// Offset of red.
    pub r: usize,
    /// Offset of green.
    pub g: usize,
    /// Offset of blue.
    pub b: usize,
}

impl RgbToGrayMask {
    /// `R G B` element order.
    pub const RGB: Self = Self::new(0, 1, 2);
    /// `B G R` element order.
    pub const BGR: Self = Self::new(2, 1, 0);

    /// Mask reading the given offsets.
    pub const fn new(r: usize, g: usize, b: usize) -> Self {
        Self { r, g, b }
    }
}

impl Default for RgbToGrayMask {
    fn default() -> Self {
        Self::RGB
    }
}

impl MaskFunction for RgbToGrayMask {
    #[inline]
    fn calculate(&self, p: &[u8]) -> Cover {
        match (p.get(self.r), p.get(self.g), p.get(self.b)) {
            (Some(&r), Some(&g), Some(&b)) => {
                ((u32::from(r) * 77 + u32::from(g) * 150 + u32::from(b) * 29) >> 8) as Cover
            }
            _ => 0,
        }
    }
}

impl<F: Fn(&[u8]) -> Cover> MaskFunction for F {
    #[inline]
    fn calculate(&self, p: &[u8]) -> Cover {
        self(p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/function.rs"]
mod tests;
