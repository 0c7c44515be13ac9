//! Row-addressable pixel storage.
//!
//! Pixel formats and masks never own memory. They borrow rows through
//! [`RowSource`] / [`RowAccessor`], which any caller allocator can implement.
//! [`PixelBuffer`], [`RowBuffer`] and [`RowView`] are the stock implementations.

mod interop;
mod pixel_buffer;

pub use pixel_buffer::{PixelBuffer, RowBuffer, RowView};

use crate::color::Channel;
use crate::foundation::error::{PixmixError, PixmixResult};

/// Read access to a 2D grid of rows.
///
/// `row(y)` must hold at least `width * elements_per_pixel` elements for
/// every `y < height`, for whatever element count the consumer expects.
pub trait RowSource {
    /// Stored element type.
    type Element: Channel;

    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in rows.
    fn height(&self) -> u32;

    /// Row `y`. Callers only pass `y < height`.
    fn row(&self, y: u32) -> &[Self::Element];
}

/// Write access on top of [`RowSource`].
pub trait RowAccessor: RowSource {
    /// Mutable row `y`. Callers only pass `y < height`.
    fn row_mut(&mut self, y: u32) -> &mut [Self::Element];
}

impl<R: RowSource + ?Sized> RowSource for &R {
    type Element = R::Element;

    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn row(&self, y: u32) -> &[Self::Element] {
        (**self).row(y)
    }
}

impl<R: RowSource + ?Sized> RowSource for &mut R {
    type Element = R::Element;

    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn row(&self, y: u32) -> &[Self::Element] {
        (**self).row(y)
    }
}

impl<R: RowAccessor + ?Sized> RowAccessor for &mut R {
    fn row_mut(&mut self, y: u32) -> &mut [Self::Element] {
        (**self).row_mut(y)
    }
}

/// Check that every row of `rows` holds `width * elements` elements.
pub(crate) fn check_rows<R: RowSource + ?Sized>(rows: &R, elements: usize) -> PixmixResult<()> {
    let need = (rows.width() as usize)
        .checked_mul(elements)
        .ok_or_else(|| PixmixError::validation("row length overflow"))?;
    for y in 0..rows.height() {
        let got = rows.row(y).len();
        if got < need {
            tracing::debug!(y, got, need, "row too short for pixel layout");
            return Err(PixmixError::validation(format!(
                "row {y} holds {got} elements, layout needs {need}"
            )));
        }
    }
    Ok(())
}
