//! Loading, squaring and saving images as sample arrays.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};
use log::{debug, error};

use crate::array::{SampleArray, Shape};
use crate::error::{DctError, Result};

/// How pixels are read from an image file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// `rows x cols x 3` arrays
    #[default]
    Rgb,
    /// `rows x cols` arrays
    Luma,
}

impl ColorMode {
    /// Shape of a `height x width` image in this mode.
    pub fn shape(&self, height: usize, width: usize) -> Result<Shape> {
        match self {
            ColorMode::Rgb => Shape::d3(height, width, 3),
            ColorMode::Luma => Shape::d2(height, width),
        }
    }
}

/// Opens a PNG or JPEG file.
pub fn open(file: &Path) -> Result<DynamicImage> {
    let ext = file
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .ok_or(DctError::UnsupportedMedia)?;

    match ext.as_str() {
        "png" | "jpg" | "jpeg" => image::open(file).map_err(|e| {
            error!("Error opening image {file:?}: {e}");
            DctError::InvalidImageMedia
        }),
        _ => Err(DctError::UnsupportedMedia),
    }
}

/// Reads `file` into pixel samples in `0..=255`, optionally squared to `size`.
pub fn load(file: &Path, mode: ColorMode, size: Option<u32>) -> Result<SampleArray> {
    let img = open(file)?;
    let img = match size {
        Some(size) => square_resize(&img, size)?,
        None => img,
    };
    debug!("loaded {file:?} as {}x{}", img.width(), img.height());

    to_samples(&img, mode)
}

pub fn to_samples(img: &DynamicImage, mode: ColorMode) -> Result<SampleArray> {
    let (width, height) = (img.width() as usize, img.height() as usize);
    let raw = match mode {
        ColorMode::Rgb => img.to_rgb8().into_raw(),
        ColorMode::Luma => img.to_luma8().into_raw(),
    };

    SampleArray::from_vec(
        mode.shape(height, width)?,
        raw.into_iter().map(f64::from).collect(),
    )
}

/// Rounds and clamps samples into an 8 bit image.
///
/// Rank 2 arrays and single channel rank 3 arrays become grayscale images,
/// three channel arrays become RGB images.
pub fn to_image(pixels: &SampleArray) -> Result<DynamicImage> {
    let shape = pixels.shape();
    let (width, height) = (shape.cols() as u32, shape.rows() as u32);
    let bytes: Vec<u8> = pixels
        .as_slice()
        .iter()
        .map(|v| v.round().clamp(0.0, 255.0) as u8)
        .collect();

    let img = match (shape.rank(), shape.channels()) {
        (2, _) | (3, 1) => GrayImage::from_raw(width, height, bytes).map(DynamicImage::ImageLuma8),
        (3, 3) => RgbImage::from_raw(width, height, bytes).map(DynamicImage::ImageRgb8),
        _ => None,
    };

    img.ok_or_else(|| DctError::shape(format!("{shape} cannot be stored as an image")))
}

/// Saves pixel samples as PNG.
pub fn save(pixels: &SampleArray, file: &Path) -> Result<()> {
    let img = to_image(pixels)?;
    let f = File::create(file).map_err(|e| {
        error!("Error creating file {file:?}: {e}");
        DctError::WriteError { source: e }
    })?;

    img.write_to(&mut BufWriter::new(f), ImageFormat::Png)
        .map_err(|e| {
            error!("Error saving image: {e}");
            DctError::ImageEncodingError
        })
}

/// Crops the centered square and resizes it to `size x size` with Lanczos3.
pub fn square_resize(img: &DynamicImage, size: u32) -> Result<DynamicImage> {
    if size == 0 {
        return Err(DctError::ParameterError("image size must be positive".into()));
    }

    let (width, height) = (img.width(), img.height());
    let side = width.min(height);
    if side == 0 {
        return Err(DctError::InvalidImageMedia);
    }
    let square = img.crop_imm((width - side) / 2, (height - side) / 2, side, side);

    Ok(square.resize_exact(size, size, FilterType::Lanczos3))
}
