//! Test color generation
//!
//! Structured and seeded sets of 8-bit colors for sweeping the conversions.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tricolor_core::{Lab, Rgb8, Xyz};

/// Color set types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Hue ramp at full saturation
    HueRamp,
    /// Grayscale ramp 0-255
    Grayscale,
    /// Random colors with seed
    Random(u64),
    /// Channels right around the linear/power split of the sRGB curve
    GammaKnee,
    /// Saturated colors near gamut boundary
    GamutBoundary,
}

/// Generate `count` colors for a pattern
pub fn generate_pattern(pattern: TestPattern, count: usize) -> Vec<Rgb8> {
    match pattern {
        TestPattern::ColorCube => {
            let corners: [[u8; 3]; 8] = [
                [0, 0, 0],
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 255, 255],
            ];
            cycle(&corners, count)
        }
        TestPattern::HueRamp => (0..count)
            .map(|i| {
                let hue = (i as f32 / count.max(1) as f32) * 360.0;
                hsl_to_rgb(hue, 1.0, 0.5)
            })
            .collect(),
        TestPattern::Grayscale => (0..count)
            .map(|i| {
                let v = ((i as f32 / count.max(1) as f32) * 256.0) as u8;
                Rgb8::new(v, v, v)
            })
            .collect(),
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| Rgb8::from_array(rng.r#gen()))
                .collect()
        }
        TestPattern::GammaKnee => {
            // 0.04045 * 255 ≈ 10.3
            let knee: [[u8; 3]; 6] = [
                [9, 10, 11],
                [10, 11, 9],
                [11, 9, 10],
                [10, 10, 10],
                [11, 11, 11],
                [0, 10, 255],
            ];
            cycle(&knee, count)
        }
        TestPattern::GamutBoundary => {
            let colors: [[u8; 3]; 8] = [
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 128, 0],
                [128, 0, 255],
            ];
            cycle(&colors, count)
        }
    }
}

fn cycle(colors: &[[u8; 3]], count: usize) -> Vec<Rgb8> {
    colors
        .iter()
        .cycle()
        .take(count)
        .map(|&c| Rgb8::from_array(c))
        .collect()
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb8 {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb8::new(
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}

/// Random XYZ values spread over [min, max) per channel
pub fn random_xyz(seed: u64, count: usize, min: f64, max: f64) -> Vec<Xyz> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Xyz::new(
                rng.gen_range(min..max),
                rng.gen_range(min..max),
                rng.gen_range(min..max),
            )
        })
        .collect()
}

/// Random Lab values over the usual display ranges
pub fn random_lab(seed: u64, count: usize) -> Vec<Lab> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Lab::new(
                rng.gen_range(0.0..100.0),
                rng.gen_range(-128.0..127.0),
                rng.gen_range(-128.0..127.0),
            )
        })
        .collect()
}
