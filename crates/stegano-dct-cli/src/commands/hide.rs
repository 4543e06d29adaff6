use std::path::PathBuf;

use clap::Args;
use stegano_dct::Config;

use crate::CliResult;

/// Hides a secret image inside a cover image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Cover image such as PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "cover image", required = true)]
    pub cover: PathBuf,

    /// Image that will be hidden
    #[arg(short = 's', long = "secret", value_name = "secret image", required = true)]
    pub secret: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub output: PathBuf,

    /// Crop and resize the cover to a square of this side first
    #[arg(long, value_name = "pixels")]
    pub size: Option<u32>,

    /// Crop and resize the secret to a square of this side first
    #[arg(long = "secret-size", value_name = "pixels")]
    pub secret_size: Option<u32>,

    /// Work on grayscale instead of RGB pixels
    #[arg(long)]
    pub gray: bool,
}

impl HideArgs {
    pub fn run(self, config: &Config) -> CliResult<()> {
        stegano_dct::api::hide::prepare()
            .with_cover(self.cover)
            .with_secret(self.secret)
            .with_output(self.output)
            .with_params(config.params()?)
            .use_cipher(config.cipher()?)
            .with_color_mode(super::color_mode(self.gray))
            .use_cover_size(self.size)
            .use_secret_size(self.secret_size)
            .execute()
    }
}
