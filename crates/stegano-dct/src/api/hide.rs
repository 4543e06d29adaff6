use std::path::{Path, PathBuf};

use log::info;

use crate::cipher::PowerCipher;
use crate::media::{self, ColorMode};
use crate::params::EmbeddingParams;
use crate::pipeline;
use crate::{DctError, Result};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    cover: Option<PathBuf>,
    secret: Option<PathBuf>,
    output: Option<PathBuf>,
    params: EmbeddingParams,
    cipher: Option<PowerCipher>,
    color_mode: ColorMode,
    cover_size: Option<u32>,
    secret_size: Option<u32>,
}

impl HideApi {
    /// The image that carries the secret
    pub fn with_cover<A: AsRef<Path>>(mut self, cover: A) -> Self {
        self.cover = Some(cover.as_ref().to_path_buf());
        self
    }

    /// The image to hide
    pub fn with_secret<A: AsRef<Path>>(mut self, secret: A) -> Self {
        self.secret = Some(secret.as_ref().to_path_buf());
        self
    }

    /// Where the stego image is saved to, always PNG
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn with_params(mut self, params: EmbeddingParams) -> Self {
        self.params = params;
        self
    }

    /// If `None` is passed, secret pixels are embedded as they are
    pub fn use_cipher(mut self, cipher: Option<PowerCipher>) -> Self {
        self.cipher = cipher;
        self
    }

    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    /// Square the cover to `size x size` before embedding
    pub fn use_cover_size(mut self, size: Option<u32>) -> Self {
        self.cover_size = size;
        self
    }

    /// Square the secret to `size x size` before embedding
    pub fn use_secret_size(mut self, size: Option<u32>) -> Self {
        self.secret_size = size;
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(cover) = self.cover else {
            return Err(DctError::CarrierNotSet);
        };
        let Some(secret) = self.secret else {
            return Err(DctError::SecretNotSet);
        };
        let Some(output) = self.output else {
            return Err(DctError::TargetNotSet);
        };

        let cover = media::load(&cover, self.color_mode, self.cover_size)?;
        let mut secret = media::load(&secret, self.color_mode, self.secret_size)?;
        if let Some(cipher) = &self.cipher {
            secret = cipher.encrypt(&secret)?;
        }

        let stego = pipeline::hide(&cover, &secret, &self.params)?;
        media::save(&stego, &output)?;
        info!("hid a {} secret in {output:?}", secret.shape());

        Ok(())
    }
}
