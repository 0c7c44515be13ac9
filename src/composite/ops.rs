//! Operator formulas on premultiplied `[r, g, b, a]` in `[0, 1]`.
//!
//! `d` is the destination, `s` the source. Separable blend modes share the
//! `Sca.(1 - Da) + Dca.(1 - Sa)` tail and the `Sa + Da - Sa.Da` alpha.

use super::CompOp;

type Px = [f32; 4];

#[inline]
#[allow(clippy::manual_clamp)]
fn clip(mut p: Px) -> Px {
    for v in &mut p {
        // `max` first so a NaN collapses to 0.
        *v = v.max(0.0).min(1.0);
    }
    p
}

#[inline]
fn union_alpha(sa: f32, da: f32) -> f32 {
    sa + da - sa * da
}

/// Apply a separable blend `f(dca, sca, da, sa)` to the color channels.
#[inline]
fn separable(d: Px, s: Px, f: impl Fn(f32, f32, f32, f32) -> f32) -> Px {
    let (da, sa) = (d[3], s[3]);
    clip([
        f(d[0], s[0], da, sa),
        f(d[1], s[1], da, sa),
        f(d[2], s[2], da, sa),
        union_alpha(sa, da),
    ])
}

#[inline]
fn tail(dca: f32, sca: f32, da: f32, sa: f32) -> f32 {
    sca * (1.0 - da) + dca * (1.0 - sa)
}

fn overlay(dca: f32, sca: f32, da: f32, sa: f32) -> f32 {
    let core = if 2.0 * dca <= da {
        2.0 * sca * dca
    } else {
        sa * da - 2.0 * (da - dca) * (sa - sca)
    };
    core + tail(dca, sca, da, sa)
}

fn hard_light(dca: f32, sca: f32, da: f32, sa: f32) -> f32 {
    let core = if 2.0 * sca <= sa {
        2.0 * sca * dca
    } else {
        sa * da - 2.0 * (da - dca) * (sa - sca)
    };
    core + tail(dca, sca, da, sa)
}

// Callers guarantee da > 0.
fn color_dodge(dca: f32, sca: f32, da: f32, sa: f32) -> f32 {
    if sca < sa {
        sa * da * (dca / da * sa / (sa - sca)).min(1.0) + tail(dca, sca, da, sa)
    } else if dca > 0.0 {
        sa * da + tail(dca, sca, da, sa)
    } else {
        sca * (1.0 - da)
    }
}

// Callers guarantee da > 0.
fn color_burn(dca: f32, sca: f32, da: f32, sa: f32) -> f32 {
    if sca > 0.0 {
        sa * da * (1.0 - ((1.0 - dca / da) * sa / sca).min(1.0)) + tail(dca, sca, da, sa)
    } else if dca >= da {
        sa * da + dca * (1.0 - sa)
    } else {
        dca * (1.0 - sa)
    }
}

// Callers guarantee da > 0.
fn soft_light(dca: f32, sca: f32, da: f32, sa: f32) -> f32 {
    let m = (dca / da).clamp(0.0, 1.0);
    let core = if 2.0 * sca <= sa {
        dca * (sa + (2.0 * sca - sa) * (1.0 - m))
    } else if 4.0 * dca <= da {
        dca * sa + da * (2.0 * sca - sa) * (m * (16.0 * m * m - 12.0 * m + 3.0))
    } else {
        dca * sa + da * (2.0 * sca - sa) * (m.sqrt() - m)
    };
    core + tail(dca, sca, da, sa)
}

/// Full-coverage result of `op` for destination `d` and source `s`.
pub(crate) fn apply(op: CompOp, d: Px, s: Px) -> Px {
    let (da, sa) = (d[3], s[3]);
    if sa <= 0.0 && op.keeps_dst_for_transparent() {
        return d;
    }
    match op {
        CompOp::Clear => [0.0; 4],
        CompOp::Src => s,
        CompOp::Dst => d,
        CompOp::SrcOver => clip(std::array::from_fn(|i| s[i] + d[i] * (1.0 - sa))),
        CompOp::DstOver => clip(std::array::from_fn(|i| d[i] + s[i] * (1.0 - da))),
        CompOp::SrcIn => clip(s.map(|v| v * da)),
        CompOp::DstIn => clip(d.map(|v| v * sa)),
        CompOp::SrcOut => clip(s.map(|v| v * (1.0 - da))),
        CompOp::DstOut => clip(d.map(|v| v * (1.0 - sa))),
        CompOp::SrcAtop => {
            let mut out: Px = std::array::from_fn(|i| s[i] * da + d[i] * (1.0 - sa));
            out[3] = da;
            clip(out)
        }
        CompOp::DstAtop => {
            let mut out: Px = std::array::from_fn(|i| d[i] * sa + s[i] * (1.0 - da));
            out[3] = sa;
            clip(out)
        }
        CompOp::Xor => {
            let mut out: Px = std::array::from_fn(|i| s[i] * (1.0 - da) + d[i] * (1.0 - sa));
            out[3] = sa + da - 2.0 * sa * da;
            clip(out)
        }
        CompOp::Plus => {
            let a = (da + sa).min(1.0);
            clip([
                (d[0] + s[0]).min(a),
                (d[1] + s[1]).min(a),
                (d[2] + s[2]).min(a),
                a,
            ])
        }
        CompOp::Minus => clip([
            d[0] - s[0],
            d[1] - s[1],
            d[2] - s[2],
            union_alpha(sa, da),
        ]),
        CompOp::Multiply => separable(d, s, |dca, sca, da, sa| {
            sca * dca + tail(dca, sca, da, sa)
        }),
        CompOp::Screen => separable(d, s, |dca, sca, _, _| sca + dca - sca * dca),
        CompOp::Overlay => separable(d, s, overlay),
        CompOp::Darken => separable(d, s, |dca, sca, da, sa| {
            (sca * da).min(dca * sa) + tail(dca, sca, da, sa)
        }),
        CompOp::Lighten => separable(d, s, |dca, sca, da, sa| {
            (sca * da).max(dca * sa) + tail(dca, sca, da, sa)
        }),
        CompOp::ColorDodge if da <= 0.0 => s,
        CompOp::ColorDodge => separable(d, s, color_dodge),
        CompOp::ColorBurn if da <= 0.0 => s,
        CompOp::ColorBurn => separable(d, s, color_burn),
        CompOp::HardLight => separable(d, s, hard_light),
        CompOp::SoftLight if da <= 0.0 => s,
        CompOp::SoftLight => separable(d, s, soft_light),
        CompOp::Difference => separable(d, s, |dca, sca, da, sa| {
            sca + dca - 2.0 * (sca * da).min(dca * sa)
        }),
        CompOp::Exclusion => separable(d, s, |dca, sca, da, sa| {
            sca * da + dca * sa - 2.0 * sca * dca + tail(dca, sca, da, sa)
        }),
    }
}

/// `apply` scaled by coverage: per-channel `lerp(d, apply(d, s), cover)`.
pub(crate) fn composite(op: CompOp, d: Px, s: Px, cover: f32) -> Px {
    let r = apply(op, d, s);
    if cover >= 1.0 {
        return r;
    }
    std::array::from_fn(|i| d[i] * (1.0 - cover) + r[i] * cover)
}

#[cfg(test)]
#[path = "../../tests/unit/composite/ops.rs"]
mod tests;
