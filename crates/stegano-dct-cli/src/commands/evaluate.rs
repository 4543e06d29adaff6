use std::path::PathBuf;

use clap::Args;
use stegano_dct::Config;

use crate::CliResult;

/// Hides and unveils in memory and reports how well the secret survives
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Cover image such as PNG or JPEG
    #[arg(short = 'i', long = "in", value_name = "cover image", required = true)]
    pub cover: PathBuf,

    /// Image that will be hidden
    #[arg(short = 's', long = "secret", value_name = "secret image", required = true)]
    pub secret: PathBuf,

    /// Crop and resize the cover to a square of this side first
    #[arg(long, value_name = "pixels")]
    pub size: Option<u32>,

    /// Crop and resize the secret to a square of this side first
    #[arg(long = "secret-size", value_name = "pixels")]
    pub secret_size: Option<u32>,

    /// Extract without the cover
    #[arg(long)]
    pub blind: bool,

    /// Round the stego pixels to 8 bit as a saved PNG would
    #[arg(long)]
    pub quantize: bool,

    /// Work on grayscale instead of RGB pixels
    #[arg(long)]
    pub gray: bool,
}

impl EvaluateArgs {
    pub fn run(self, config: &Config) -> CliResult<()> {
        let evaluation = stegano_dct::api::evaluate::prepare()
            .with_cover(self.cover)
            .with_secret(self.secret)
            .with_params(config.params()?)
            .use_cipher(config.cipher()?)
            .with_color_mode(super::color_mode(self.gray))
            .use_cover_size(self.size)
            .use_secret_size(self.secret_size)
            .blind(self.blind)
            .quantize(self.quantize)
            .execute()?;

        println!("Secret error:     {}", evaluation.secret);
        println!("Cover distortion: {}", evaluation.distortion);
        println!("Quality:          {}", evaluation.tier());

        Ok(())
    }
}
