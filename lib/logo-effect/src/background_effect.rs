//! Gradient background removal for the cherry logo
//!
//! The thresholds below are hand-tuned against one pink-to-yellow gradient
//! and must stay exactly as they are. Foreground classes are checked first,
//! so a cherry, leaf or stem pixel is never cleared even when it is also warm
//! and bright.

use crate::PixelEffect;
use image::Rgba;

/// Extremes of the colour channels of one pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelStats {
    pub max: u8,
    pub min: u8,
}

impl ChannelStats {
    pub fn of(pixel: Rgba<u8>) -> Self {
        let [r, g, b, _] = pixel.0;
        Self {
            max: r.max(g).max(b),
            min: r.min(g).min(b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelClass {
    CherryPink,
    CherryOrange,
    CherryBorder,
    Leaf,
    Stem,
    Background,
    Other,
}

impl PixelClass {
    pub fn of(pixel: Rgba<u8>) -> Self {
        let [r, g, b, _] = pixel.0;
        let stats = ChannelStats::of(pixel);

        if r > 200 && g < 150 && b < 150 {
            PixelClass::CherryPink
        } else if r > 200 && g > 150 && b < 100 {
            PixelClass::CherryOrange
        } else if stats.max < 100 {
            PixelClass::CherryBorder
        } else if g > 100 && r < 150 && b < 100 {
            PixelClass::Leaf
        } else if stats.max < 80 {
            // never reached: max < 80 already matched CherryBorder
            PixelClass::Stem
        } else if is_warm(r, g) && stats.max > 180 {
            PixelClass::Background
        } else {
            PixelClass::Other
        }
    }

    pub fn is_foreground(&self) -> bool {
        matches!(
            self,
            PixelClass::CherryPink
                | PixelClass::CherryOrange
                | PixelClass::CherryBorder
                | PixelClass::Leaf
                | PixelClass::Stem
        )
    }
}

// pink, orange and yellow stretches of the gradient
fn is_warm(r: u8, g: u8) -> bool {
    (r > 200 && g > 150) || (r > 180 && g > 200) || (g > 200 && r > 150)
}

/// Background removal configuration
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct BackgroundConfig {}

impl BackgroundConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PixelEffect for BackgroundConfig {
    fn transform_pixel(&self, pixel: Rgba<u8>) -> Rgba<u8> {
        match PixelClass::of(pixel) {
            PixelClass::Background => {
                let [r, g, b, _] = pixel.0;
                Rgba([r, g, b, 0])
            }
            _ => pixel,
        }
    }
}
