use super::function::{MaskFunction, OneComponentMask};
use crate::buffer::{RowSource, check_rows};
use crate::foundation::core::{COVER_FULL, COVER_SHIFT, Cover, clip_span, in_range};
use crate::foundation::error::{PixmixError, PixmixResult};

/// Per-pixel coverage source.
///
/// `fill_*` writes mask values into `dst`; `combine_*` scales the coverage
/// already in `dst` by the mask. Spans run right (`hspan`) or down (`vspan`)
/// from `(x, y)` for `dst.len()` pixels.
pub trait AlphaMask {
    /// Mask value at `(x, y)`.
    fn pixel(&self, x: i32, y: i32) -> Cover;

    /// `cover` scaled by the mask value at `(x, y)`.
    fn combine_pixel(&self, x: i32, y: i32, cover: Cover) -> Cover;

    /// Write mask values along a row.
    fn fill_hspan(&self, x: i32, y: i32, dst: &mut [Cover]);

    /// Scale the coverage in `dst` along a row.
    fn combine_hspan(&self, x: i32, y: i32, dst: &mut [Cover]);

    /// Write mask values down a column.
    fn fill_vspan(&self, x: i32, y: i32, dst: &mut [Cover]);

    /// Scale the coverage in `dst` down a column.
    fn combine_vspan(&self, x: i32, y: i32, dst: &mut [Cover]);
}

impl<M: AlphaMask + ?Sized> AlphaMask for &M {
    fn pixel(&self, x: i32, y: i32) -> Cover {
        (**self).pixel(x, y)
    }

    fn combine_pixel(&self, x: i32, y: i32, cover: Cover) -> Cover {
        (**self).combine_pixel(x, y, cover)
    }

    fn fill_hspan(&self, x: i32, y: i32, dst: &mut [Cover]) {
        (**self).fill_hspan(x, y, dst)
    }

    fn combine_hspan(&self, x: i32, y: i32, dst: &mut [Cover]) {
        (**self).combine_hspan(x, y, dst)
    }

    fn fill_vspan(&self, x: i32, y: i32, dst: &mut [Cover]) {
        (**self).fill_vspan(x, y, dst)
    }

    fn combine_vspan(&self, x: i32, y: i32, dst: &mut [Cover]) {
        (**self).combine_vspan(x, y, dst)
    }
}

/// `(COVER_FULL + cover * mask) >> COVER_SHIFT`.
#[inline]
pub fn combine_cover(cover: Cover, mask: Cover) -> Cover {
    ((u32::from(COVER_FULL) + u32::from(cover) * u32::from(mask)) >> COVER_SHIFT) as Cover
}

/// Rows plus the addressing shared by both mask flavors.
#[derive(Debug)]
struct MaskRows<R, F> {
    rbuf: R,
    step: usize,
    offset: usize,
    func: F,
}

impl<R: RowSource<Element = u8>, F: MaskFunction> MaskRows<R, F> {
    fn new(rbuf: R, step: usize, offset: usize, func: F) -> PixmixResult<Self> {
        if step == 0 {
            return Err(PixmixError::validation("mask step must be positive"));
        }
        if offset >= step {
            return Err(PixmixError::validation(format!(
                "mask offset {offset} must be below step {step}"
            )));
        }
        check_rows(&rbuf, step)?;
        Ok(Self {
            rbuf,
            step,
            offset,
            func,
        })
    }

    /// Panics when `(x, y)` lies outside the buffer.
    #[inline]
    fn value(&self, x: u32, y: u32) -> Cover {
        let start = x as usize * self.step;
        let px = &self.rbuf.row(y)[start..start + self.step];
        self.func.calculate(&px[self.offset..])
    }
}

/// Mask over an 8-bit row buffer that reads as 0 outside its extent.
///
/// Each mask pixel spans `step` elements; the mask function sees the elements
/// from `offset` to the end of that pixel.
#[derive(Debug)]
pub struct AlphaMaskU8<R, F = OneComponentMask> {
    rows: MaskRows<R, F>,
}

impl<R: RowSource<Element = u8>, F: MaskFunction> AlphaMaskU8<R, F> {
    /// Attach to `rbuf`. Fails unless `0 <= offset < step` and every row holds
    /// `width * step` elements.
    #[tracing::instrument(level = "debug", skip(rbuf, func), fields(width = rbuf.width(), height = rbuf.height()))]
    pub fn new(rbuf: R, step: usize, offset: usize, func: F) -> PixmixResult<Self> {
        Ok(Self {
            rows: MaskRows::new(rbuf, step, offset, func)?,
        })
    }

    /// Elements per mask pixel.
    pub fn step(&self) -> usize {
        self.rows.step
    }

    /// Element offset inside a mask pixel.
    pub fn offset(&self) -> usize {
        self.rows.offset
    }

    /// Mask width in pixels.
    pub fn width(&self) -> u32 {
        self.rows.rbuf.width()
    }

    /// Mask height in pixels.
    pub fn height(&self) -> u32 {
        self.rows.rbuf.height()
    }

    /// Detach and return the buffer.
    pub fn into_inner(self) -> R {
        self.rows.rbuf
    }

    fn run<G>(&self, pos: i32, len: usize, limit: u32, dst: &mut [Cover], mut each: G)
    where
        G: FnMut(u32, &mut Cover),
    {
        let Some(s) = clip_span(pos, len, limit) else {
            dst.fill(0);
            return;
        };
        dst[..s.skip].fill(0);
        for (i, d) in dst[s.skip..s.skip + s.len].iter_mut().enumerate() {
            each(s.start + i as u32, d);
        }
        dst[s.skip + s.len..].fill(0);
    }
}

impl<R: RowSource<Element = u8>, F: MaskFunction> AlphaMask for AlphaMaskU8<R, F> {
    fn pixel(&self, x: i32, y: i32) -> Cover {
        match (in_range(x, self.width()), in_range(y, self.height())) {
            (Some(x), Some(y)) => self.rows.value(x, y),
            _ => 0,
        }
    }

    fn combine_pixel(&self, x: i32, y: i32, cover: Cover) -> Cover {
        combine_cover(cover, self.pixel(x, y))
    }

    fn fill_hspan(&self, x: i32, y: i32, dst: &mut [Cover]) {
        let Some(y) = in_range(y, self.height()) else {
            dst.fill(0);
            return;
        };
        self.run(x, dst.len(), self.width(), dst, |x, d| *d = self.rows.value(x, y));
    }

    fn combine_hspan(&self, x: i32, y: i32, dst: &mut [Cover]) {
        let Some(y) = in_range(y, self.height()) else {
            dst.fill(0);
            return;
        };
        self.run(x, dst.len(), self.width(), dst, |x, d| {
            *d = combine_cover(*d, self.rows.value(x, y));
        });
    }

    fn fill_vspan(&self, x: i32, y: i32, dst: &mut [Cover]) {
        let Some(x) = in_range(x, self.width()) else {
            dst.fill(0);
            return;
        };
        self.run(y, dst.len(), self.height(), dst, |y, d| *d = self.rows.value(x, y));
    }

    fn combine_vspan(&self, x: i32, y: i32, dst: &mut [Cover]) {
        let Some(x) = in_range(x, self.width()) else {
            dst.fill(0);
            return;
        };
        self.run(y, dst.len(), self.height(), dst, |y, d| {
            *d = combine_cover(*d, self.rows.value(x, y));
        });
    }
}

/// Mask without bounds handling.
///
/// Every queried position must lie inside the mask; anything else panics on
/// slice indexing. Use it when the caller already clips to the mask.
#[derive(Debug)]
pub struct AmaskNoClipU8<R, F = OneComponentMask> {
    rows: MaskRows<R, F>,
}

impl<R: RowSource<Element = u8>, F: MaskFunction> AmaskNoClipU8<R, F> {
    /// Attach to `rbuf`, with the same checks as [`AlphaMaskU8::new`].
    #[tracing::instrument(level = "debug", skip(rbuf, func), fields(width = rbuf.width(), height = rbuf.height()))]
    pub fn new(rbuf: R, step: usize, offset: usize, func: F) -> PixmixResult<Self> {
        Ok(Self {
            rows: MaskRows::new(rbuf, step, offset, func)?,
        })
    }

    /// Detach and return the buffer.
    pub fn into_inner(self) -> R {
        self.rows.rbuf
    }

    #[inline]
    fn at(&self, x: i32, y: i32) -> Cover {
        let (w, h) = (self.rows.rbuf.width(), self.rows.rbuf.height());
        match (in_range(x, w), in_range(y, h)) {
            (Some(x), Some(y)) => self.rows.value(x, y),
            _ => panic!("mask position ({x}, {y}) outside {w}x{h}"),
        }
    }
}

impl<R: RowSource<Element = u8>, F: MaskFunction> AlphaMask for AmaskNoClipU8<R, F> {
    fn pixel(&self, x: i32, y: i32) -> Cover {
        self.at(x, y)
    }

    fn combine_pixel(&self, x: i32, y: i32, cover: Cover) -> Cover {
        combine_cover(cover, self.at(x, y))
    }

    fn fill_hspan(&self, x: i32, y: i32, dst: &mut [Cover]) {
        for (i, d) in dst.iter_mut().enumerate() {
            *d = self.at(x + i as i32, y);
        }
    }

    fn combine_hspan(&self, x: i32, y: i32, dst: &mut [Cover]) {
        for (i, d) in dst.iter_mut().enumerate() {
            *d = combine_cover(*d, self.at(x + i as i32, y));
        }
    }

    fn fill_vspan(&self, x: i32, y: i32, dst: &mut [Cover]) {
        for (i, d) in dst.iter_mut().enumerate() {
            *d = self.at(x, y + i as i32);
        }
    }

    fn combine_vspan(&self, x: i32, y: i32, dst: &mut [Cover]) {
        for (i, d) in dst.iter_mut().enumerate() {
            *d = combine_cover(*d, self.at(x, y + i as i32));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/alpha_mask.rs"]
mod tests;
