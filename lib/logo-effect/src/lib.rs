pub mod background_effect;
pub mod blacken_effect;
pub mod io;

pub use background_effect::{BackgroundConfig, ChannelStats, PixelClass};
pub use blacken_effect::BlackenConfig;
pub use io::{open_rgba, process_file, save_png};

use image::{Rgba, RgbaImage};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Pixel counts collected while applying one effect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectReport {
    pub total: u64,
    pub changed: u64,
}

impl EffectReport {
    pub fn unchanged(&self) -> u64 {
        self.total - self.changed
    }
}

pub trait Effect {
    fn apply(&self, image: &mut RgbaImage) -> Result<EffectReport>;
}

/// An effect that rewrites every pixel independently of its neighbours.
pub trait PixelEffect {
    fn transform_pixel(&self, pixel: Rgba<u8>) -> Rgba<u8>;

    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl<T: PixelEffect> Effect for T {
    fn apply(&self, image: &mut RgbaImage) -> Result<EffectReport> {
        self.validate()?;

        let mut report = EffectReport::default();
        for pixel in image.pixels_mut() {
            let out = self.transform_pixel(*pixel);
            if out != *pixel {
                *pixel = out;
                report.changed += 1;
            }
            report.total += 1;
        }

        Ok(report)
    }
}

#[derive(Debug, Clone)]
pub enum LogoEffect {
    BlackenBorders(BlackenConfig),
    RemoveBackground(BackgroundConfig),
}

impl LogoEffect {
    pub fn name(&self) -> &'static str {
        match self {
            LogoEffect::BlackenBorders(_) => "blacken-borders",
            LogoEffect::RemoveBackground(_) => "remove-background",
        }
    }
}

impl PixelEffect for LogoEffect {
    fn transform_pixel(&self, pixel: Rgba<u8>) -> Rgba<u8> {
        match self {
            LogoEffect::BlackenBorders(config) => config.transform_pixel(pixel),
            LogoEffect::RemoveBackground(config) => config.transform_pixel(pixel),
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            LogoEffect::BlackenBorders(config) => config.validate(),
            LogoEffect::RemoveBackground(config) => config.validate(),
        }
    }
}

/// Apply `effects` to `image` in order, returning one report per effect.
pub fn apply_all(effects: &[LogoEffect], image: &mut RgbaImage) -> Result<Vec<EffectReport>> {
    let mut reports = Vec::with_capacity(effects.len());

    for effect in effects {
        let report = effect.apply(image)?;
        log::debug!(
            "{}: changed {} of {} pixels",
            effect.name(),
            report.changed,
            report.total
        );
        reports.push(report);
    }

    Ok(reports)
}
