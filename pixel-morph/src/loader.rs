use std::path::Path;

use image::imageops::{self, FilterType};
use log::debug;

use crate::error::MorphError;
use crate::grid::{GridSize, PixelGrid};

/// Decodes the image at `path` and resamples it down to one RGB pixel per
/// grid cell.
pub fn load(path: &Path, size: GridSize) -> Result<PixelGrid, MorphError> {
    let img = image::open(path)?.to_rgb8();
    let resized = imageops::resize(
        &img,
        size.width as u32,
        size.height as u32,
        FilterType::Lanczos3,
    );

    debug!("loaded {} as a {} grid", path.display(), size);

    let colors = resized.pixels().map(|p| p.0).collect();

    Ok(PixelGrid::new(size, colors))
}
