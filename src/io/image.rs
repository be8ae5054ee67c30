//! Image files in and out of pixel grids
//!
//! Loaded pixels are packed as `0xRRGGBB`; alpha is discarded. Saving unpacks the
//! same layout, so any raster, including an assembly view over the source image,
//! can be written directly.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::io::error::{JigsawError, Result, invalid_dimensions};
use crate::spatial::grid::{PixelGrid, Raster, RasterMut, pack_rgb, unpack_rgb};

/// Read an image file into a grid of packed RGB intensities
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_grid(path: &Path) -> Result<PixelGrid> {
    let image = image::open(path)
        .map_err(|e| JigsawError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_rgb8();

    let mut grid = PixelGrid::new(image.width() as usize, image.height() as usize);
    for (x, y, Rgb([red, green, blue])) in image.enumerate_pixels() {
        grid.set_intensity(x as usize, y as usize, pack_rgb(*red, *green, *blue));
    }
    Ok(grid)
}

/// Write `raster` as an RGB image, the format chosen by the file extension
///
/// # Errors
///
/// Returns an error if:
/// - The raster is too large for the image format
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_grid<R: Raster + ?Sized>(raster: &R, path: &Path) -> Result<()> {
    let too_large = || invalid_dimensions(raster.width(), raster.height(), &"exceeds image limits");
    let width = u32::try_from(raster.width()).map_err(|_overflow| too_large())?;
    let height = u32::try_from(raster.height()).map_err(|_overflow| too_large())?;

    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb(unpack_rgb(raster.intensity(x as usize, y as usize)))
    });

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| JigsawError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| JigsawError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
