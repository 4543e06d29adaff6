use std::path::PathBuf;

use clap::Args;
use stegano_dct::{media, ColorMode};

use crate::CliResult;

/// Crops the centered square of an image and resizes it
#[derive(Args, Debug)]
pub struct ResizeArgs {
    /// Source image such as PNG or JPEG
    #[arg(short = 'i', long = "in", value_name = "image", required = true)]
    pub input: PathBuf,

    /// Squared image will be stored as PNG file
    #[arg(short = 'o', long = "out", value_name = "output image file", required = true)]
    pub output: PathBuf,

    /// Side of the resulting square
    #[arg(long, value_name = "pixels", required = true)]
    pub size: u32,
}

impl ResizeArgs {
    pub fn run(self) -> CliResult<()> {
        let img = media::square_resize(&media::open(&self.input)?, self.size)?;
        media::save(&media::to_samples(&img, ColorMode::Rgb)?, &self.output)
    }
}
