use crate::foundation::core::Cover;

/// In-bounds pixel primitives of a pixel format.
///
/// Coordinates here are already clipped: callers guarantee `x < width()` and
/// `y < height()`, and runs stay inside the row. The clipping, coverage and
/// span logic lives in [`PixelFormat`](super::PixelFormat), built on top.
pub trait PixelAccessor {
    /// Color type exchanged with callers. Its `Default` is the zero color.
    type Color: Copy + Default;

    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Read one pixel.
    fn read_pixel(&self, x: u32, y: u32) -> Self::Color;

    /// Overwrite one pixel.
    fn write_pixel(&mut self, x: u32, y: u32, c: &Self::Color);

    /// Blend one pixel with coverage. `cover` is never zero here.
    fn blend_into(&mut self, x: u32, y: u32, c: &Self::Color, cover: Cover);

    /// `true` when blending `c` can never change a pixel.
    fn skips_source(&self, c: &Self::Color) -> bool;

    /// Overwrite `len` pixels starting at `x`.
    #[inline]
    fn write_run(&mut self, x: u32, y: u32, len: usize, c: &Self::Color) {
        for i in 0..len as u32 {
            self.write_pixel(x + i, y, c);
        }
    }

    /// Blend `len` pixels starting at `x` with one coverage value.
    #[inline]
    fn blend_run(&mut self, x: u32, y: u32, len: usize, c: &Self::Color, cover: Cover) {
        for i in 0..len as u32 {
            self.blend_into(x + i, y, c, cover);
        }
    }
}
