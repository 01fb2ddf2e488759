use crate::color::{Hsv, Rgb};

const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Convert a `[0, 1]` channel intensity to an 8-bit value
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(value: f32) -> u8 {
    libm::roundf(value * 255.0).clamp(0.0, 255.0) as u8
}

/// Convert HSV to RGB using the 6-sector method.
///
/// Input outside of `h: [0, 360]`, `s: [0, 1]`, `v: [0, 1]` yields black.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsv2rgb(hsv: Hsv) -> Rgb {
    if !hsv.in_range() {
        return BLACK;
    }

    let chroma = hsv.v * hsv.s;
    let position = hsv.h / 60.0;
    let sector = libm::floorf(position);
    let ff = position - sector;

    let (mut r, mut g, mut b) = (hsv.v, hsv.v, hsv.v);

    // h == 360 lands in sector 6 with ff == 0, which is the same color as sector 0
    match (sector as u8) % 6 {
        0 => {
            g -= chroma * (1.0 - ff);
            b -= chroma;
        }
        1 => {
            r -= chroma * ff;
            b -= chroma;
        }
        2 => {
            r -= chroma;
            b -= chroma * (1.0 - ff);
        }
        3 => {
            r -= chroma;
            g -= chroma * ff;
        }
        4 => {
            r -= chroma * (1.0 - ff);
            g -= chroma;
        }
        _ => {
            g -= chroma;
            b -= chroma * ff;
        }
    }

    Rgb {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

/// Convert RGB to HSV using the max/min chroma method.
///
/// Hue is in degrees `[0, 360)`, saturation and value are reported on a
/// `[0, 100]` scale. Zero chroma yields hue 0.
#[allow(clippy::float_cmp)]
pub fn rgb2hsv(rgb: Rgb) -> Hsv {
    let r = f32::from(rgb.r) / 255.0;
    let g = f32::from(rgb.g) / 255.0;
    let b = f32::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        let h = 60.0 * ((g - b) / delta);
        if h < 0.0 { h + 360.0 } else { h }
    } else if max == g {
        60.0 * ((b - r) / delta) + 120.0
    } else {
        60.0 * ((r - g) / delta) + 240.0
    };

    let s = if max == 0.0 { 0.0 } else { (delta / max) * 100.0 };

    Hsv { h, s, v: max * 100.0 }
}
