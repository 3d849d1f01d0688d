//! Minimal Oklch support for perceptual color crossfades.

use std::f32::consts::PI;

/// Oklch color: perceptually uniform lightness, chroma, and hue (radians).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f32,
    pub c: f32,
    pub h: f32,
}

// Row-major matrices of the Oklab transform: linear sRGB ↔ LMS and
// cube-rooted LMS ↔ Lab.
const LMS_FROM_RGB: [[f32; 3]; 3] = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

const LAB_FROM_LMS: [[f32; 3]; 3] = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

const LMS_FROM_LAB: [[f32; 3]; 3] = [
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
];

const RGB_FROM_LMS: [[f32; 3]; 3] = [
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
];

fn apply(m: &[[f32; 3]; 3], v: [f32; 3]) -> [f32; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

fn gamma_decode(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn gamma_encode(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

impl Oklch {
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        let lin = rgb.map(|ch| gamma_decode(ch as f32 / 255.0));
        let lms = apply(&LMS_FROM_RGB, lin).map(f32::cbrt);
        let [l, a, b] = apply(&LAB_FROM_LMS, lms);

        let c = (a * a + b * b).sqrt();
        let h = if c < 1e-8 { 0.0 } else { b.atan2(a) };

        Self { l, c, h }
    }

    pub fn to_rgb(self) -> [u8; 3] {
        let lab = [self.l, self.c * self.h.cos(), self.c * self.h.sin()];
        let lms = apply(&LMS_FROM_LAB, lab).map(|v| v * v * v);
        let lin = apply(&RGB_FROM_LMS, lms);

        lin.map(|ch| (gamma_encode(ch.clamp(0.0, 1.0)) * 255.0 + 0.5) as u8)
    }

    /// Interpolate toward `other`, hue along the shortest arc.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let dh = (other.h - self.h + PI).rem_euclid(2.0 * PI) - PI;

        Self {
            l: self.l + (other.l - self.l) * t,
            c: self.c + (other.c - self.c) * t,
            h: self.h + dh * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Round-trip sRGB → Oklch → sRGB must be within ±1 per channel.
    fn assert_round_trip(rgb: [u8; 3]) {
        let back = Oklch::from_rgb(rgb).to_rgb();

        for ch in 0..3 {
            assert!(
                (rgb[ch] as i16 - back[ch] as i16).unsigned_abs() <= 1,
                "round-trip failed: {rgb:?} came back as {back:?}"
            );
        }
    }

    #[test]
    fn round_trip_primaries() {
        assert_round_trip([255, 0, 0]);
        assert_round_trip([0, 255, 0]);
        assert_round_trip([0, 0, 255]);
    }

    #[test]
    fn round_trip_assorted() {
        let samples = [
            [128, 64, 32],
            [10, 200, 150],
            [255, 128, 0],
            [100, 100, 100],
            [1, 1, 1],
            [254, 254, 254],
        ];

        for rgb in samples {
            assert_round_trip(rgb);
        }
    }

    #[test]
    fn black_has_zero_lightness() {
        assert!(Oklch::from_rgb([0, 0, 0]).l.abs() < 1e-6);
    }

    #[test]
    fn white_has_unit_lightness() {
        assert!((Oklch::from_rgb([255, 255, 255]).l - 1.0).abs() < 0.01);
    }

    #[test]
    fn grays_have_zero_chroma() {
        for v in (0..=255).step_by(51) {
            let lch = Oklch::from_rgb([v, v, v]);
            assert!(lch.c < 1e-4, "gray {v} had chroma {}", lch.c);
        }
    }

    #[test]
    fn lerp_endpoints() {
        let a = Oklch::from_rgb([255, 0, 0]);
        let b = Oklch::from_rgb([0, 0, 255]);

        let at_zero = a.lerp(b, 0.0);
        let at_one = a.lerp(b, 1.0);

        assert!((at_zero.l - a.l).abs() < 1e-6);
        assert!((at_zero.c - a.c).abs() < 1e-6);
        assert!((at_one.l - b.l).abs() < 1e-6);
        assert!((at_one.c - b.c).abs() < 1e-6);
    }

    #[test]
    fn lerp_meets_lightness_midway() {
        let a = Oklch::from_rgb([0, 0, 0]);
        let b = Oklch::from_rgb([255, 255, 255]);

        let mid = a.lerp(b, 0.5);

        assert!((mid.l - (a.l + b.l) / 2.0).abs() < 1e-6);
    }

    #[test]
    fn hue_wraps_along_the_short_arc() {
        // Two hues straddling the ±π seam must interpolate across it,
        // never the long way around through zero.
        let a = Oklch { l: 0.5, c: 0.1, h: PI - 0.1 };
        let b = Oklch { l: 0.5, c: 0.1, h: -PI + 0.1 };

        let mid = a.lerp(b, 0.5);
        let from_seam = (mid.h.abs() - PI).abs();

        assert!(from_seam < 1e-5, "midpoint hue was {}", mid.h);
    }
}
