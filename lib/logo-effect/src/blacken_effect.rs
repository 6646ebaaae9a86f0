use crate::{Error, PixelEffect, Result};
use derivative::Derivative;
use derive_setters::Setters;
use image::Rgba;

/// Unweighted mean of the red, green and blue channels
pub fn brightness(pixel: Rgba<u8>) -> f32 {
    channel_sum(pixel) as f32 / 3.0
}

fn channel_sum(pixel: Rgba<u8>) -> u32 {
    pixel[0] as u32 + pixel[1] as u32 + pixel[2] as u32
}

/// Border/stem blackening configuration
///
/// Visible pixels darker than `threshold` become black with their alpha kept,
/// fully transparent pixels are normalized to `(0, 0, 0, 0)`, and everything
/// else passes through untouched.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct BlackenConfig {
    #[derivative(Default(value = "100"))]
    threshold: u8,
}

impl BlackenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    fn is_dark(&self, pixel: Rgba<u8>) -> bool {
        // mean < threshold, without the division
        channel_sum(pixel) < 3 * self.threshold as u32
    }
}

impl PixelEffect for BlackenConfig {
    fn transform_pixel(&self, pixel: Rgba<u8>) -> Rgba<u8> {
        let alpha = pixel[3];

        if alpha == 0 {
            Rgba([0, 0, 0, 0])
        } else if self.is_dark(pixel) {
            Rgba([0, 0, 0, alpha])
        } else {
            pixel
        }
    }

    fn validate(&self) -> Result<()> {
        if self.threshold == 0 {
            return Err(Error::InvalidParameter(
                "blacken threshold must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Effect;
    use image::RgbaImage;

    #[test]
    fn test_transparent_pixels_become_transparent_black() {
        let config = BlackenConfig::new();
        for px in [[10, 10, 10, 0], [255, 255, 255, 0], [0, 0, 0, 0], [200, 30, 90, 0]] {
            assert_eq!(config.transform_pixel(Rgba(px)), Rgba([0, 0, 0, 0]));
        }
    }

    #[test]
    fn test_dark_pixels_keep_alpha() {
        let config = BlackenConfig::new();
        assert_eq!(
            config.transform_pixel(Rgba([50, 40, 30, 255])),
            Rgba([0, 0, 0, 255])
        );
        assert_eq!(
            config.transform_pixel(Rgba([99, 99, 99, 17])),
            Rgba([0, 0, 0, 17])
        );
        // 299 / 3 = 99.67, still below 100
        assert_eq!(
            config.transform_pixel(Rgba([100, 100, 99, 128])),
            Rgba([0, 0, 0, 128])
        );
    }

    #[test]
    fn test_bright_pixels_pass_through() {
        let config = BlackenConfig::new();
        for px in [[220, 220, 220, 255], [100, 100, 100, 255], [255, 45, 0, 3]] {
            assert_eq!(config.transform_pixel(Rgba(px)), Rgba(px));
        }
    }

    #[test]
    fn test_blacken_is_idempotent() {
        let config = BlackenConfig::new();
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for (b, a) in [(0u8, 0u8), (40, 1), (120, 200), (255, 255)] {
                    let once = config.transform_pixel(Rgba([r, g, b, a]));
                    assert_eq!(config.transform_pixel(once), once);
                }
            }
        }
    }

    #[test]
    fn test_custom_threshold() {
        let config = BlackenConfig::new().with_threshold(50);
        assert_eq!(config.threshold(), 50);
        assert_eq!(
            config.transform_pixel(Rgba([60, 60, 60, 255])),
            Rgba([60, 60, 60, 255])
        );
        assert_eq!(
            config.transform_pixel(Rgba([40, 40, 40, 255])),
            Rgba([0, 0, 0, 255])
        );
    }

    #[test]
    fn test_zero_threshold_is_rejected() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        let config = BlackenConfig::new().with_threshold(0);
        assert!(matches!(
            config.apply(&mut img),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_brightness() {
        assert_eq!(brightness(Rgba([50, 40, 30, 255])), 40.0);
        assert_eq!(brightness(Rgba([255, 255, 255, 0])), 255.0);
    }
}
