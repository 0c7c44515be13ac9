use super::{RowAccessor, RowSource};
use crate::color::Channel;
use crate::foundation::error::{PixmixError, PixmixResult};

/// Validate geometry and return the backing length (`stride * height`).
fn backing_len(width: u32, height: u32, elements: usize, stride: usize) -> PixmixResult<usize> {
    if elements == 0 {
        return Err(PixmixError::validation("elements per pixel must be > 0"));
    }
    let row = (width as usize)
        .checked_mul(elements)
        .ok_or_else(|| PixmixError::validation("row length overflow"))?;
    if stride < row {
        return Err(PixmixError::validation(format!(
            "stride {stride} shorter than row length {row}"
        )));
    }
    stride
        .checked_mul(height as usize)
        .ok_or_else(|| PixmixError::validation("buffer size overflow"))
}

#[inline]
fn row_range(y: u32, stride: usize, row_len: usize) -> std::ops::Range<usize> {
    let start = y as usize * stride;
    start..start + row_len
}

/// Owned row-major storage.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer<T> {
    data: Vec<T>,
    width: u32,
    height: u32,
    elements: usize,
    stride: usize,
}

impl<T: Channel> PixelBuffer<T> {
    /// Zeroed buffer with tightly packed rows.
    #[tracing::instrument]
    pub fn new(width: u32, height: u32, elements: usize) -> PixmixResult<Self> {
        let stride = (width as usize)
            .checked_mul(elements)
            .ok_or_else(|| PixmixError::validation("row length overflow"))?;
        Self::with_stride(width, height, elements, stride)
    }

    /// Zeroed buffer whose rows are `stride` elements apart.
    #[tracing::instrument]
    pub fn with_stride(
        width: u32,
        height: u32,
        elements: usize,
        stride: usize,
    ) -> PixmixResult<Self> {
        let len = backing_len(width, height, elements, stride)?;
        Ok(Self {
            data: vec![T::ZERO; len],
            width,
            height,
            elements,
            stride,
        })
    }

    /// Adopt tightly packed data; `data.len()` must equal `width * height * elements`.
    #[tracing::instrument(skip(data), fields(len = data.len()))]
    pub fn from_vec(data: Vec<T>, width: u32, height: u32, elements: usize) -> PixmixResult<Self> {
        let stride = (width as usize)
            .checked_mul(elements)
            .ok_or_else(|| PixmixError::validation("row length overflow"))?;
        let len = backing_len(width, height, elements, stride)?;
        if data.len() != len {
            return Err(PixmixError::validation(format!(
                "expected {len} elements for {width}x{height}x{elements}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
            elements,
            stride,
        })
    }
}

impl<T> PixelBuffer<T> {
    /// Elements per pixel.
    pub fn elements_per_pixel(&self) -> usize {
        self.elements
    }

    /// Distance between row starts, in elements.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Whole backing store, stride padding included.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Whole backing store, mutable.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Give back the backing store.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Borrow the same memory as a [`RowBuffer`].
    pub fn as_row_buffer(&mut self) -> RowBuffer<'_, T> {
        RowBuffer {
            data: &mut self.data,
            width: self.width,
            height: self.height,
            elements: self.elements,
            stride: self.stride,
        }
    }
}

impl<T: Channel> RowSource for PixelBuffer<T> {
    type Element = T;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn row(&self, y: u32) -> &[T] {
        &self.data[row_range(y, self.stride, self.width as usize * self.elements)]
    }
}

impl<T: Channel> RowAccessor for PixelBuffer<T> {
    fn row_mut(&mut self, y: u32) -> &mut [T] {
        let r = row_range(y, self.stride, self.width as usize * self.elements);
        &mut self.data[r]
    }
}

/// Mutable rows over caller-owned memory.
///
/// Splitting a slice with `chunks_mut(stride * rows)` and attaching one
/// `RowBuffer` per chunk gives independent bands that can be painted on
/// separate threads.
#[derive(Debug)]
pub struct RowBuffer<'a, T> {
    data: &'a mut [T],
    width: u32,
    height: u32,
    elements: usize,
    stride: usize,
}

impl<'a, T: Channel> RowBuffer<'a, T> {
    /// Attach with tightly packed rows.
    pub fn new(data: &'a mut [T], width: u32, height: u32, elements: usize) -> PixmixResult<Self> {
        let stride = (width as usize)
            .checked_mul(elements)
            .ok_or_else(|| PixmixError::validation("row length overflow"))?;
        Self::with_stride(data, width, height, elements, stride)
    }

    /// Attach with rows `stride` elements apart. The slice may be longer than
    /// needed but never shorter.
    pub fn with_stride(
        data: &'a mut [T],
        width: u32,
        height: u32,
        elements: usize,
        stride: usize,
    ) -> PixmixResult<Self> {
        let len = backing_len(width, height, elements, stride)?;
        // The last row only needs its pixels, not the trailing stride padding.
        let need = if height == 0 {
            0
        } else {
            len - stride + width as usize * elements
        };
        if data.len() < need {
            tracing::debug!(got = data.len(), need, "row buffer slice too short");
            return Err(PixmixError::validation(format!(
                "slice holds {} elements, {width}x{height} rows need {need}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
            elements,
            stride,
        })
    }
}

impl<T> RowBuffer<'_, T> {
    /// Elements per pixel.
    pub fn elements_per_pixel(&self) -> usize {
        self.elements
    }

    /// Distance between row starts, in elements.
    pub fn stride(&self) -> usize {
        self.stride
    }
}

impl<T: Channel> RowSource for RowBuffer<'_, T> {
    type Element = T;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn row(&self, y: u32) -> &[T] {
        &self.data[row_range(y, self.stride, self.width as usize * self.elements)]
    }
}

impl<T: Channel> RowAccessor for RowBuffer<'_, T> {
    fn row_mut(&mut self, y: u32) -> &mut [T] {
        let r = row_range(y, self.stride, self.width as usize * self.elements);
        &mut self.data[r]
    }
}

/// Read-only rows over caller-owned memory, typically a mask image.
#[derive(Clone, Copy, Debug)]
pub struct RowView<'a, T> {
    data: &'a [T],
    width: u32,
    height: u32,
    elements: usize,
    stride: usize,
}

impl<'a, T: Channel> RowView<'a, T> {
    /// Attach with tightly packed rows.
    pub fn new(data: &'a [T], width: u32, height: u32, elements: usize) -> PixmixResult<Self> {
        let stride = (width as usize)
            .checked_mul(elements)
            .ok_or_else(|| PixmixError::validation("row length overflow"))?;
        let len = backing_len(width, height, elements, stride)?;
        if data.len() < len {
            return Err(PixmixError::validation(format!(
                "slice holds {} elements, {width}x{height} rows need {len}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
            elements,
            stride,
        })
    }
}

impl<T: Channel> RowSource for RowView<'_, T> {
    type Element = T;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn row(&self, y: u32) -> &[T] {
        &self.data[row_range(y, self.stride, self.width as usize * self.elements)]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/buffer/pixel_buffer.rs"]
mod tests;
