//! Clipped line, bar and span operators.
//!
//! Every method clips against the buffer before touching it, so callers may
//! pass spans that start left of, or run past, the visible area. Empty spans,
//! empty color lists and coverage arrays shorter than `len` do nothing.

use super::accessor::PixelAccessor;
use crate::foundation::core::{COVER_FULL, COVER_NONE, ClippedSpan, Cover, clip_copy, clip_span, in_range};

/// Normalize inclusive corners and return `(lo, inclusive length)`.
fn inclusive(a: i32, b: i32) -> (i32, usize) {
    let (lo, hi) = (a.min(b), a.max(b));
    (lo, (i64::from(hi) - i64::from(lo) + 1) as usize)
}

/// Positions `start..start + len` of a clipped span.
fn positions(s: ClippedSpan) -> impl Iterator<Item = (usize, u32)> {
    (0..s.len).map(move |i| (s.skip + i, s.start + i as u32))
}

/// Painting operations shared by every pixel format.
///
/// Formats implement [`PixelAccessor`] and get these for free; a format may
/// override any of them, as the mask adaptor does.
pub trait PixelFormat: PixelAccessor {
    /// Pixel at `(x, y)`, or the zero color outside the buffer.
    fn pixel(&self, x: i32, y: i32) -> Self::Color {
        match (in_range(x, self.width()), in_range(y, self.height())) {
            (Some(x), Some(y)) => self.read_pixel(x, y),
            _ => Self::Color::default(),
        }
    }

    /// Overwrite one pixel; ignored outside the buffer.
    fn copy_pixel(&mut self, x: i32, y: i32, c: &Self::Color) {
        if let (Some(x), Some(y)) = (in_range(x, self.width()), in_range(y, self.height())) {
            self.write_pixel(x, y, c);
        }
    }

    /// Blend one pixel.
    ///
    /// No-op for zero coverage, a source that cannot change anything, or a
    /// position outside the buffer.
    fn blend_pixel(&mut self, x: i32, y: i32, c: &Self::Color, cover: Cover) {
        if cover == COVER_NONE || self.skips_source(c) {
            return;
        }
        if let (Some(x), Some(y)) = (in_range(x, self.width()), in_range(y, self.height())) {
            self.blend_into(x, y, c, cover);
        }
    }

    /// Overwrite `len` pixels to the right of `(x, y)`.
    fn copy_hline(&mut self, x: i32, y: i32, len: usize, c: &Self::Color) {
        let Some(y) = in_range(y, self.height()) else {
            return;
        };
        if let Some(s) = clip_span(x, len, self.width()) {
            self.write_run(s.start, y, s.len, c);
        }
    }

    /// Overwrite `len` pixels below `(x, y)`.
    fn copy_vline(&mut self, x: i32, y: i32, len: usize, c: &Self::Color) {
        let Some(x) = in_range(x, self.width()) else {
            return;
        };
        if let Some(s) = clip_span(y, len, self.height()) {
            for (_, y) in positions(s) {
                self.write_pixel(x, y, c);
            }
        }
    }

    /// Blend `len` pixels to the right of `(x, y)` with uniform coverage.
    fn blend_hline(&mut self, x: i32, y: i32, len: usize, c: &Self::Color, cover: Cover) {
        if cover == COVER_NONE || self.skips_source(c) {
            return;
        }
        let Some(y) = in_range(y, self.height()) else {
            return;
        };
        if let Some(s) = clip_span(x, len, self.width()) {
            self.blend_run(s.start, y, s.len, c, cover);
        }
    }

    /// Blend `len` pixels below `(x, y)` with uniform coverage.
    fn blend_vline(&mut self, x: i32, y: i32, len: usize, c: &Self::Color, cover: Cover) {
        if cover == COVER_NONE || self.skips_source(c) {
            return;
        }
        let Some(x) = in_range(x, self.width()) else {
            return;
        };
        if let Some(s) = clip_span(y, len, self.height()) {
            for (_, y) in positions(s) {
                self.blend_into(x, y, c, cover);
            }
        }
    }

    /// Fill the rectangle with inclusive corners `(x1, y1)` and `(x2, y2)`.
    fn copy_bar(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, c: &Self::Color) {
        let (x, w) = inclusive(x1, x2);
        let (y, h) = inclusive(y1, y2);
        let (Some(cols), Some(rows)) = (clip_span(x, w, self.width()), clip_span(y, h, self.height()))
        else {
            return;
        };
        for (_, y) in positions(rows) {
            self.write_run(cols.start, y, cols.len, c);
        }
    }

    /// Blend the rectangle with inclusive corners `(x1, y1)` and `(x2, y2)`.
    fn blend_bar(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, c: &Self::Color, cover: Cover) {
        if cover == COVER_NONE || self.skips_source(c) {
            return;
        }
        let (x, w) = inclusive(x1, x2);
        let (y, h) = inclusive(y1, y2);
        let (Some(cols), Some(rows)) = (clip_span(x, w, self.width()), clip_span(y, h, self.height()))
        else {
            return;
        };
        for (_, y) in positions(rows) {
            self.blend_run(cols.start, y, cols.len, c, cover);
        }
    }

    /// Blend one color along a row with per-pixel coverage.
    ///
    /// `None` means full coverage everywhere. `covers[i]` belongs to `x + i`
    /// and a zero entry leaves that pixel untouched.
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
        let Some(y) = in_range(y, self.height()) else {
            return;
        };
        let Some(s) = clip_span(x, len, self.width()) else {
            return;
        };
        match covers {
            None => self.blend_run(s.start, y, s.len, c, COVER_FULL),
            Some(cv) => {
                for (i, x) in positions(s) {
                    if cv[i] != COVER_NONE {
                        self.blend_into(x, y, c, cv[i]);
                    }
                }
            }
        }
    }

    /// Column counterpart of [`PixelFormat::blend_solid_hspan`].
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
        let Some(x) = in_range(x, self.width()) else {
            return;
        };
        let Some(s) = clip_span(y, len, self.height()) else {
            return;
        };
        for (i, y) in positions(s) {
            let cover = covers.map_or(COVER_FULL, |cv| cv[i]);
            if cover != COVER_NONE {
                self.blend_into(x, y, c, cover);
            }
        }
    }

    /// Overwrite a row with one color per pixel; `colors` wraps when short.
    fn copy_color_hspan(&mut self, x: i32, y: i32, len: usize, colors: &[Self::Color]) {
        if len == 0 || colors.is_empty() {
            return;
        }
        let Some(y) = in_range(y, self.height()) else {
            return;
        };
        let Some(s) = clip_span(x, len, self.width()) else {
            return;
        };
        for (i, x) in positions(s) {
            self.write_pixel(x, y, &colors[i % colors.len()]);
        }
    }

    /// Column counterpart of [`PixelFormat::copy_color_hspan`].
    fn copy_color_vspan(&mut self, x: i32, y: i32, len: usize, colors: &[Self::Color]) {
        if len == 0 || colors.is_empty() {
            return;
        }
        let Some(x) = in_range(x, self.width()) else {
            return;
        };
        let Some(s) = clip_span(y, len, self.height()) else {
            return;
        };
        for (i, y) in positions(s) {
            self.write_pixel(x, y, &colors[i % colors.len()]);
        }
    }

    /// Blend one color per pixel along a row.
    ///
    /// Coverage comes from `covers[i]` when given, otherwise from `cover`.
    fn blend_color_hspan(
        &mut self,
        x: i32,
        y: i32,
        len: usize,
        colors: &[Self::Color],
        covers: Option<&[Cover]>,
        cover: Cover,
    ) {
        if len == 0 || colors.is_empty() || covers.is_some_and(|cv| cv.len() < len) {
            return;
        }
        let Some(y) = in_range(y, self.height()) else {
            return;
        };
        let Some(s) = clip_span(x, len, self.width()) else {
            return;
        };
        for (i, x) in positions(s) {
            let c = &colors[i % colors.len()];
            let cover = covers.map_or(cover, |cv| cv[i]);
            if cover != COVER_NONE && !self.skips_source(c) {
                self.blend_into(x, y, c, cover);
            }
        }
    }

    /// Column counterpart of [`PixelFormat::blend_color_hspan`].
    fn blend_color_vspan(
        &mut self,
        x: i32,
        y: i32,
        len: usize,
        colors: &[Self::Color],
        covers: Option<&[Cover]>,
        cover: Cover,
    ) {
        if len == 0 || colors.is_empty() || covers.is_some_and(|cv| cv.len() < len) {
            return;
        }
        let Some(x) = in_range(x, self.width()) else {
            return;
        };
        let Some(s) = clip_span(y, len, self.height()) else {
            return;
        };
        for (i, y) in positions(s) {
            let c = &colors[i % colors.len()];
            let cover = covers.map_or(cover, |cv| cv[i]);
            if cover != COVER_NONE && !self.skips_source(c) {
                self.blend_into(x, y, c, cover);
            }
        }
    }

    /// Overwrite every pixel with `c`.
    #[tracing::instrument(level = "debug", skip_all, fields(width = self.width(), height = self.height()))]
    fn fill(&mut self, c: &Self::Color) {
        let w = self.width() as usize;
        for y in 0..self.height() {
            self.write_run(0, y, w, c);
        }
    }

    /// Overwrite every pixel with the zero color.
    fn clear(&mut self) {
        self.fill(&Self::Color::default());
    }

    /// Copy `len` pixels of row `ysrc` in `src` to row `ydst` here.
    ///
    /// All four coordinates are clipped jointly; a negative start on either
    /// side trims the same count from both.
    fn copy_from<S>(&mut self, src: &S, xdst: i32, ydst: i32, xsrc: i32, ysrc: i32, len: usize)
    where
        S: PixelFormat<Color = Self::Color> + ?Sized,
    {
        let (Some(yd), Some(ys)) = (in_range(ydst, self.height()), in_range(ysrc, src.height()))
        else {
            return;
        };
        let Some(cc) = clip_copy(xdst, xsrc, len, self.width(), src.width()) else {
            return;
        };
        for i in 0..cc.len as u32 {
            let c = src.read_pixel(cc.src + i, ys);
            self.write_pixel(cc.dst + i, yd, &c);
        }
    }

    /// Blend `len` pixels of row `ysrc` in `src` onto row `ydst` here.
    #[allow(clippy::too_many_arguments)]
    fn blend_from<S>(
        &mut self,
        src: &S,
        xdst: i32,
        ydst: i32,
        xsrc: i32,
        ysrc: i32,
        len: usize,
        cover: Cover,
    ) where
        S: PixelFormat<Color = Self::Color> + ?Sized,
    {
        if cover == COVER_NONE {
            return;
        }
        let (Some(yd), Some(ys)) = (in_range(ydst, self.height()), in_range(ysrc, src.height()))
        else {
            return;
        };
        let Some(cc) = clip_copy(xdst, xsrc, len, self.width(), src.width()) else {
            return;
        };
        for i in 0..cc.len as u32 {
            let c = src.read_pixel(cc.src + i, ys);
            if !self.skips_source(&c) {
                self.blend_into(cc.dst + i, yd, &c, cover);
            }
        }
    }

    /// Copy a run within this buffer. Overlapping runs on the same row are
    /// walked right to left when moving right, so sources are read before
    /// they are overwritten.
    fn copy_within(&mut self, xdst: i32, ydst: i32, xsrc: i32, ysrc: i32, len: usize) {
        let (w, h) = (self.width(), self.height());
        let (Some(yd), Some(ys)) = (in_range(ydst, h), in_range(ysrc, h)) else {
            return;
        };
        let Some(cc) = clip_copy(xdst, xsrc, len, w, w) else {
            return;
        };
        let mut step = |i: u32| {
            let c = self.read_pixel(cc.src + i, ys);
            self.write_pixel(cc.dst + i, yd, &c);
        };
        if yd == ys && cc.dst > cc.src {
            (0..cc.len as u32).rev().for_each(&mut step);
        } else {
            (0..cc.len as u32).for_each(&mut step);
        }
    }

    /// Blend a run within this buffer, with the same ordering as
    /// [`PixelFormat::copy_within`].
    fn blend_within(
        &mut self,
        xdst: i32,
        ydst: i32,
        xsrc: i32,
        ysrc: i32,
        len: usize,
        cover: Cover,
    ) {
        if cover == COVER_NONE {
            return;
        }
        let (w, h) = (self.width(), self.height());
        let (Some(yd), Some(ys)) = (in_range(ydst, h), in_range(ysrc, h)) else {
            return;
        };
        let Some(cc) = clip_copy(xdst, xsrc, len, w, w) else {
            return;
        };
        let mut step = |i: u32| {
            let c = self.read_pixel(cc.src + i, ys);
            if !self.skips_source(&c) {
                self.blend_into(cc.dst + i, yd, &c, cover);
            }
        };
        if yd == ys && cc.dst > cc.src {
            (0..cc.len as u32).rev().for_each(&mut step);
        } else {
            (0..cc.len as u32).for_each(&mut step);
        }
    }
}
