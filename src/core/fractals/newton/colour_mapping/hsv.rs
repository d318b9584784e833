//! HSV to RGB conversion shared by the colour maps.

use crate::core::data::colour::Colour;

#[inline]
pub(crate) fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Round-half-up conversion of a unit value to a byte.
#[inline]
pub(crate) fn unit_to_byte(x: f32) -> u8 {
    (clamp01(x) * 255.0 + 0.5) as u8
}

/// Truncating conversion of a unit value to a byte.
#[inline]
pub(crate) fn unit_to_byte_truncated(x: f32) -> u8 {
    (clamp01(x) * 255.0) as u8
}

/// Six-sector HSV conversion returning unit channels. The hue wraps into
/// [0, 1), so any real hue is accepted.
pub(crate) fn hsv_to_rgb_unit(hue: f32, saturation: f32, value: f32) -> [f32; 3] {
    if saturation <= 0.0 {
        let grey = clamp01(value);
        return [grey, grey, grey];
    }

    let h = (hue - hue.floor()) * 6.0;
    let sector = h.floor() as i32;
    let f = h - sector as f32;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    let [r, g, b] = match sector % 6 {
        0 => [value, t, p],
        1 => [q, value, p],
        2 => [p, value, t],
        3 => [p, q, value],
        4 => [t, p, value],
        5 => [value, p, q],
        _ => [0.0, 0.0, 0.0],
    };

    [clamp01(r), clamp01(g), clamp01(b)]
}

/// HSV conversion straight to bytes, truncating each channel.
pub(crate) fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Colour {
    if saturation <= 0.0 {
        let grey = unit_to_byte_truncated(value);
        return Colour {
            r: grey,
            g: grey,
            b: grey,
        };
    }

    let [r, g, b] = hsv_to_rgb_unit(hue, saturation, value);

    Colour {
        r: unit_to_byte_truncated(r),
        g: unit_to_byte_truncated(g),
        b: unit_to_byte_truncated(b),
    }
}
