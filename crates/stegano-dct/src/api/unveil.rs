use std::path::{Path, PathBuf};

use log::info;

use crate::cipher::PowerCipher;
use crate::media::{self, ColorMode};
use crate::params::EmbeddingParams;
use crate::pipeline;
use crate::{DctError, Result};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    stego: Option<PathBuf>,
    cover: Option<PathBuf>,
    output: Option<PathBuf>,
    secret_size: Option<(usize, usize)>,
    params: EmbeddingParams,
    cipher: Option<PowerCipher>,
    color_mode: ColorMode,
    cover_size: Option<u32>,
}

impl UnveilApi {
    /// The stego image that contains the secret
    pub fn from_stego(mut self, stego: impl AsRef<Path>) -> Self {
        self.stego = Some(stego.as_ref().to_path_buf());
        self
    }

    /// Height and width of the hidden image
    pub fn with_secret_size(mut self, height: usize, width: usize) -> Self {
        self.secret_size = Some((height, width));
        self
    }

    /// The untouched cover, enables exact non-blind extraction
    /// If `None` is passed, the extraction is blind
    pub fn use_cover<P: AsRef<Path>>(mut self, cover: Option<P>) -> Self {
        self.cover = cover.map(|c| c.as_ref().to_path_buf());
        self
    }

    /// Squares the cover to `size x size` the same way it was squared when hiding
    pub fn use_cover_size(mut self, size: Option<u32>) -> Self {
        self.cover_size = size;
        self
    }

    /// This is the file the recovered image will be saved to
    pub fn into_file(mut self, output: impl AsRef<Path>) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn with_params(mut self, params: EmbeddingParams) -> Self {
        self.params = params;
        self
    }

    pub fn use_cipher(mut self, cipher: Option<PowerCipher>) -> Self {
        self.cipher = cipher;
        self
    }

    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<()> {
        let Some(stego) = self.stego else {
            return Err(DctError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(DctError::TargetNotSet);
        };
        let Some((height, width)) = self.secret_size else {
            return Err(DctError::ParameterError("secret size is not set".into()));
        };

        let stego = media::load(&stego, self.color_mode, None)?;
        let cover = self
            .cover
            .map(|c| media::load(&c, self.color_mode, self.cover_size))
            .transpose()?;

        let secret_shape = self.color_mode.shape(height, width)?;
        let mut secret = pipeline::unveil(&stego, secret_shape, &self.params, cover.as_ref())?;
        if let Some(cipher) = &self.cipher {
            secret = cipher.decrypt(&secret)?;
        }

        media::save(&secret, &output)?;
        info!("unveiled a {secret_shape} secret into {output:?}");

        Ok(())
    }
}
