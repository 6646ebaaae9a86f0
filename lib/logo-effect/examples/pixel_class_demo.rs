/// Pixel class demo
/// Prints how the background remover would classify every pixel of an image

use logo_effect::{PixelClass, open_rgba};
use std::collections::BTreeMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let img_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/test.png".to_string());
    let img = open_rgba(&img_path)?;

    let mut counts = BTreeMap::new();
    for pixel in img.pixels() {
        *counts.entry(format!("{:?}", PixelClass::of(*pixel))).or_insert(0u64) += 1;
    }

    for (class, count) in counts {
        println!("{class:>12}: {count}");
    }

    Ok(())
}
