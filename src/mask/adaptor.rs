use super::alpha_mask::AlphaMask;
use crate::foundation::core::{COVER_NONE, Cover, clip_span, in_range};
use crate::pixfmt::{PixelAccessor, PixelFormat};

const SPAN_EXTRA_TAIL: usize = 256;

/// Where span coverage comes from before the mask is applied.
#[derive(Clone, Copy)]
enum Covers<'a> {
    /// Raw mask values.
    Mask,
    /// One caller coverage scaled by the mask.
    Uniform(Cover),
    /// Caller coverage per pixel scaled by the mask.
    Each(&'a [Cover]),
}

#[derive(Clone, Copy)]
enum Axis {
    Row,
    Column,
}

/// Fill the first `len` covers of `span`, growing it when needed. Never shrinks.
fn masked_covers<'s, M: AlphaMask>(
    mask: &M,
    span: &'s mut Vec<Cover>,
    axis: Axis,
    x: i32,
    y: i32,
    len: usize,
    covers: Covers<'_>,
) -> &'s [Cover] {
    if span.len() < len {
        span.resize(len + SPAN_EXTRA_TAIL, COVER_NONE);
    }
    let span = &mut span[..len];
    match covers {
        Covers::Mask => match axis {
            Axis::Row => mask.fill_hspan(x, y, span),
            Axis::Column => mask.fill_vspan(x, y, span),
        },
        Covers::Uniform(c) => {
            span.fill(c);
            combine(mask, axis, x, y, span);
        }
        Covers::Each(cv) => {
            span.copy_from_slice(cv);
            combine(mask, axis, x, y, span);
        }
    }
    span
}

fn combine<M: AlphaMask>(mask: &M, axis: Axis, x: i32, y: i32, span: &mut [Cover]) {
    match axis {
        Axis::Row => mask.combine_hspan(x, y, span),
        Axis::Column => mask.combine_vspan(x, y, span),
    }
}

/// In-bounds coordinates fit in `i32`; they were clipped from one.
#[inline]
fn signed(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// A pixel format whose every paint operation is gated by an alpha mask.
///
/// Copy-style calls turn into blends weighted by the mask value, and
/// blend-style calls have their coverage scaled by it. Since a copy becomes a
/// blend, copying a fully transparent color through the adaptor leaves the
/// buffer untouched. Mask and format share one coordinate system.
#[derive(Debug)]
pub struct PixfmtAmaskAdaptor<P, M> {
    pixf: P,
    mask: M,
    span: Vec<Cover>,
}

impl<P: PixelFormat, M: AlphaMask> PixfmtAmaskAdaptor<P, M> {
    /// Wrap `pixf` with `mask`.
    pub fn new(pixf: P, mask: M) -> Self {
        Self {
            pixf,
            mask,
            span: Vec::new(),
        }
    }

    /// Wrapped pixel format.
    pub fn pixf(&self) -> &P {
        &self.pixf
    }

    /// Wrapped pixel format, mutably. Writes through it bypass the mask.
    pub fn pixf_mut(&mut self) -> &mut P {
        &mut self.pixf
    }

    /// Active mask.
    pub fn mask(&self) -> &M {
        &self.mask
    }

    /// Swap the mask, returning the previous one.
    pub fn replace_mask(&mut self, mask: M) -> M {
        std::mem::replace(&mut self.mask, mask)
    }

    /// Current scratch capacity in covers.
    pub fn span_capacity(&self) -> usize {
        self.span.len()
    }

    /// Unwrap into the format and the mask.
    pub fn into_inner(self) -> (P, M) {
        (self.pixf, self.mask)
    }

    /// Blend `c` along an in-bounds row run.
    fn row_run(&mut self, x: i32, y: i32, len: usize, c: &P::Color, covers: Covers<'_>) {
        let span = masked_covers(&self.mask, &mut self.span, Axis::Row, x, y, len, covers);
        self.pixf.blend_solid_hspan(x, y, len, c, Some(span));
    }

    /// Blend `c` down an in-bounds column run.
    fn column_run(&mut self, x: i32, y: i32, len: usize, c: &P::Color, covers: Covers<'_>) {
        let span = masked_covers(&self.mask, &mut self.span, Axis::Column, x, y, len, covers);
        self.pixf.blend_solid_vspan(x, y, len, c, Some(span));
    }

    /// Clip a column request, returning in-bounds `(x, y, skip, len)`.
    fn clip_column(&self, x: i32, y: i32, len: usize) -> Option<(i32, i32, usize, usize)> {
        in_range(x, self.pixf.width())?;
        let s = clip_span(y, len, self.pixf.height())?;
        Some((x, signed(s.start), s.skip, s.len))
    }

    /// Clip a row request, returning in-bounds `(x, y, skip, len)`.
    fn clip_row(&self, x: i32, y: i32, len: usize) -> Option<(i32, i32, usize, usize)> {
        in_range(y, self.pixf.height())?;
        let s = clip_span(x, len, self.pixf.width())?;
        Some((signed(s.start), y, s.skip, s.len))
    }
}

impl<P: PixelFormat, M: AlphaMask> PixelAccessor for PixfmtAmaskAdaptor<P, M> {
    type Color = P::Color;

    fn width(&self) -> u32 {
        self.pixf.width()
    }

    fn height(&self) -> u32 {
        self.pixf.height()
    }

    #[inline]
    fn read_pixel(&self, x: u32, y: u32) -> Self::Color {
        self.pixf.read_pixel(x, y)
    }

    #[inline]
    fn write_pixel(&mut self, x: u32, y: u32, c: &Self::Color) {
        let (sx, sy) = (signed(x), signed(y));
        let cover = self.mask.pixel(sx, sy);
        self.pixf.blend_pixel(sx, sy, c, cover);
    }

    #[inline]
    fn blend_into(&mut self, x: u32, y: u32, c: &Self::Color, cover: Cover) {
        let (sx, sy) = (signed(x), signed(y));
        let cover = self.mask.combine_pixel(sx, sy, cover);
        self.pixf.blend_pixel(sx, sy, c, cover);
    }

    #[inline]
    fn skips_source(&self, c: &Self::Color) -> bool {
        self.pixf.skips_source(c)
    }

    fn write_run(&mut self, x: u32, y: u32, len: usize, c: &Self::Color) {
        self.row_run(signed(x), signed(y), len, c, Covers::Mask);
    }

    fn blend_run(&mut self, x: u32, y: u32, len: usize, c: &Self::Color, cover: Cover) {
        self.row_run(signed(x), signed(y), len, c, Covers::Uniform(cover));
    }
}

impl<P: PixelFormat, M: AlphaMask> PixelFormat for PixfmtAmaskAdaptor<P, M> {
    fn copy_vline(&mut self, x: i32, y: i32, len: usize, c: &Self::Color) {
        if let Some((x, y, _, len)) = self.clip_column(x, y, len) {
            self.column_run(x, y, len, c, Covers::Mask);
        }
    }

    fn blend_vline(&mut self, x: i32, y: i32, len: usize, c: &Self::Color, cover: Cover) {
        if cover == COVER_NONE || self.skips_source(c) {
            return;
        }
        if let Some((x, y, _, len)) = self.clip_column(x, y, len) {
            self.column_run(x, y, len, c, Covers::Uniform(cover));
        }
    }

    fn blend_solid_hspan(
        &mut self,
        x: i32,
        y: i32,
        len: usize,
        c: &Self::Color,
        covers: Option<&[Cover]>,
    ) {
        if len == 0 || covers.is_some_and(|cv| cv.len() < len) || self.skips_source(c) {
            return;
        }
        let Some((x, y, skip, len)) = self.clip_row(x, y, len) else {
            return;
        };
        let covers = covers.map_or(Covers::Mask, |cv| Covers::Each(&cv[skip..skip + len]));
        self.row_run(x, y, len, c, covers);
    }

    fn blend_solid_vspan(
        &mut self,
        x: i32,
        y: i32,
        len: usize,
        c: &Self::Color,
        covers: Option<&[Cover]>,
    ) {
        if len == 0 || covers.is_some_and(|cv| cv.len() < len) || self.skips_source(c) {
            return;
        }
        let Some((x, y, skip, len)) = self.clip_column(x, y, len) else {
            return;
        };
        let covers = covers.map_or(Covers::Mask, |cv| Covers::Each(&cv[skip..skip + len]));
        self.column_run(x, y, len, c, covers);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/adaptor.rs"]
mod tests;
