use super::*;

#[test]
fn clip_span_inside_is_identity() {
    assert_eq!(
        clip_span(2, 3, 10),
        Some(ClippedSpan {
            start: 2,
            skip: 0,
            len: 3
        })
    );
}

#[test]
fn clip_span_trims_both_edges() {
    assert_eq!(
        clip_span(-2, 5, 10),
        Some(ClippedSpan {
            start: 0,
            skip: 2,
            len: 3
        })
    );
    assert_eq!(
        clip_span(8, 5, 10),
        Some(ClippedSpan {
            start: 8,
            skip: 0,
            len: 2
        })
    );
    assert_eq!(
        clip_span(-1, 12, 10),
        Some(ClippedSpan {
            start: 0,
            skip: 1,
            len: 10
        })
    );
}

#[test]
fn clip_span_empty_cases() {
    assert_eq!(clip_span(0, 0, 10), None);
    assert_eq!(clip_span(-5, 5, 10), None);
    assert_eq!(clip_span(10, 3, 10), None);
    assert_eq!(clip_span(0, 3, 0), None);
    assert_eq!(clip_span(i32::MAX, usize::MAX, 10), None);
}

#[test]
fn in_range_rejects_negative_and_limit() {
    assert_eq!(in_range(-1, 4), None);
    assert_eq!(in_range(4, 4), None);
    assert_eq!(in_range(3, 4), Some(3));
}

#[test]
fn clip_copy_negative_offsets_trim_both_sides() {
    assert_eq!(
        clip_copy(-2, 0, 5, 10, 10),
        Some(ClippedCopy {
            dst: 0,
            src: 2,
            len: 3
        })
    );
    assert_eq!(
        clip_copy(0, -3, 5, 10, 10),
        Some(ClippedCopy {
            dst: 3,
            src: 0,
            len: 2
        })
    );
}

#[test]
fn clip_copy_respects_both_limits() {
    assert_eq!(
        clip_copy(6, 1, 10, 8, 4),
        Some(ClippedCopy {
            dst: 6,
            src: 1,
            len: 2
        })
    );
    assert_eq!(clip_copy(8, 0, 3, 8, 8), None);
    assert_eq!(clip_copy(0, -4, 4, 8, 8), None);
}
