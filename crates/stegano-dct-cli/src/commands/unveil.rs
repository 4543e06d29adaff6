use std::path::PathBuf;

use clap::Args;
use stegano_dct::Config;

use crate::CliResult;

/// Recovers a hidden image from a stego image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Stego image that contains the secret
    #[arg(
        short = 'i',
        long = "in",
        value_name = "stego image",
        required = true
    )]
    pub stego: PathBuf,

    /// Recovered image will be stored as PNG file
    #[arg(short = 'o', long = "out", value_name = "output image file", required = true)]
    pub output: PathBuf,

    /// Height of the hidden image, also its width unless --secret-width is given
    #[arg(long = "secret-size", value_name = "pixels", required = true)]
    pub secret_size: usize,

    /// Width of the hidden image
    #[arg(long = "secret-width", value_name = "pixels")]
    pub secret_width: Option<usize>,

    /// Original cover for exact extraction, blind without it
    #[arg(long, value_name = "cover image")]
    pub cover: Option<PathBuf>,

    /// Square side the cover was resized to when hiding
    #[arg(long, value_name = "pixels")]
    pub size: Option<u32>,

    /// Work on grayscale instead of RGB pixels
    #[arg(long)]
    pub gray: bool,
}

impl UnveilArgs {
    pub fn run(self, config: &Config) -> CliResult<()> {
        let width = self.secret_width.unwrap_or(self.secret_size);

        stegano_dct::api::unveil::prepare()
            .from_stego(self.stego)
            .use_cover(self.cover)
            .use_cover_size(self.size)
            .with_secret_size(self.secret_size, width)
            .into_file(self.output)
            .with_params(config.params()?)
            .use_cipher(config.cipher()?)
            .with_color_mode(super::color_mode(self.gray))
            .execute()
    }
}
