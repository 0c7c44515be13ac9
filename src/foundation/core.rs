/// Anti-aliasing coverage of a pixel, `0..=COVER_FULL`.
///
/// Coverage lives in its own 8-bit domain regardless of the channel depth of
/// the target buffer.
pub type Cover = u8;

/// Bits of coverage precision.
pub const COVER_SHIFT: u32 = 8;
/// Number of distinct coverage steps.
pub const COVER_SIZE: u32 = 1 << COVER_SHIFT;
/// Full coverage.
pub const COVER_FULL: Cover = 255;
/// No coverage.
pub const COVER_NONE: Cover = 0;

/// A run of positions clipped against `[0, limit)`.
///
/// `start` is the first in-range position, `skip` is how many leading entries
/// of the caller's span fell before `0`, `len` is the in-range count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ClippedSpan {
    pub(crate) start: u32,
    pub(crate) skip: usize,
    pub(crate) len: usize,
}

/// Clip `[pos, pos + len)` against `[0, limit)`; `None` when nothing is left.
pub(crate) fn clip_span(pos: i32, len: usize, limit: u32) -> Option<ClippedSpan> {
    let pos = i64::from(pos);
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let end = pos.saturating_add(len);
    let lo = pos.max(0);
    let hi = end.min(i64::from(limit));
    if lo >= hi {
        return None;
    }
    Some(ClippedSpan {
        start: lo as u32,
        skip: (lo - pos) as usize,
        len: (hi - lo) as usize,
    })
}

/// Return the coordinate as `u32` when it lies in `[0, limit)`.
#[inline]
pub(crate) fn in_range(v: i32, limit: u32) -> Option<u32> {
    u32::try_from(v).ok().filter(|&v| v < limit)
}

/// A copy between two runs clipped jointly against both extents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ClippedCopy {
    pub(crate) dst: u32,
    pub(crate) src: u32,
    pub(crate) len: usize,
}

/// Clip a copy of `len` positions from `src` to `dst`.
///
/// A negative start on either side trims the same number of positions from
/// both sides so source and destination stay aligned.
pub(crate) fn clip_copy(
    dst: i32,
    src: i32,
    len: usize,
    dst_limit: u32,
    src_limit: u32,
) -> Option<ClippedCopy> {
    let mut d = i64::from(dst);
    let mut s = i64::from(src);
    let mut n = i64::try_from(len).unwrap_or(i64::MAX);
    if s < 0 {
        d -= s;
        n += s;
        s = 0;
    }
    if d < 0 {
        s -= d;
        n += d;
        d = 0;
    }
    n = n
        .min(i64::from(src_limit) - s)
        .min(i64::from(dst_limit) - d);
    if n <= 0 {
        return None;
    }
    Some(ClippedCopy {
        dst: d as u32,
        src: s as u32,
        len: n as usize,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
