use std::path::{Path, PathBuf};

use log::info;

use crate::cipher::PowerCipher;
use crate::media::{self, ColorMode};
use crate::metrics::{ErrorStats, QualityTier};
use crate::params::EmbeddingParams;
use crate::pipeline;
use crate::{DctError, Result, SampleArray};

pub fn prepare() -> EvaluateApi {
    EvaluateApi::default()
}

/// Outcome of a hide and unveil session that never touched the disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Recovered secret against the original secret
    pub secret: ErrorStats,
    /// Stego image against the cover
    pub distortion: ErrorStats,
}

impl Evaluation {
    pub fn tier(&self) -> QualityTier {
        self.secret.tier()
    }
}

#[derive(Default, Debug)]
pub struct EvaluateApi {
    cover: Option<PathBuf>,
    secret: Option<PathBuf>,
    params: EmbeddingParams,
    cipher: Option<PowerCipher>,
    color_mode: ColorMode,
    cover_size: Option<u32>,
    secret_size: Option<u32>,
    blind: bool,
    quantize: bool,
}

impl EvaluateApi {
    pub fn with_cover<A: AsRef<Path>>(mut self, cover: A) -> Self {
        self.cover = Some(cover.as_ref().to_path_buf());
        self
    }

    pub fn with_secret<A: AsRef<Path>>(mut self, secret: A) -> Self {
        self.secret = Some(secret.as_ref().to_path_buf());
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

    pub fn use_cover_size(mut self, size: Option<u32>) -> Self {
        self.cover_size = size;
        self
    }

    pub fn use_secret_size(mut self, size: Option<u32>) -> Self {
        self.secret_size = size;
        self
    }

    /// Extract without the cover
    pub fn blind(mut self, blind: bool) -> Self {
        self.blind = blind;
        self
    }

    /// Round and clamp the stego pixels as saving to PNG would
    pub fn quantize(mut self, quantize: bool) -> Self {
        self.quantize = quantize;
        self
    }

    pub fn execute(self) -> Result<Evaluation> {
        let Some(cover) = self.cover else {
            return Err(DctError::CarrierNotSet);
        };
        let Some(secret) = self.secret else {
            return Err(DctError::SecretNotSet);
        };

        let cover = media::load(&cover, self.color_mode, self.cover_size)?;
        let secret = media::load(&secret, self.color_mode, self.secret_size)?;

        let evaluation = evaluate(
            &cover,
            &secret,
            &self.params,
            self.cipher.as_ref(),
            self.blind,
            self.quantize,
        )?;
        info!(
            "secret error {}, cover distortion {}, quality {}",
            evaluation.secret,
            evaluation.distortion,
            evaluation.tier()
        );

        Ok(evaluation)
    }
}

/// Runs a full session on in-memory pixels and measures it.
pub fn evaluate(
    cover: &SampleArray,
    secret: &SampleArray,
    params: &EmbeddingParams,
    cipher: Option<&PowerCipher>,
    blind: bool,
    quantize: bool,
) -> Result<Evaluation> {
    let embedded = match cipher {
        Some(cipher) => cipher.encrypt(secret)?,
        None => secret.clone(),
    };

    let mut stego = pipeline::hide(cover, &embedded, params)?;
    if quantize {
        for v in stego.as_mut_slice() {
            *v = v.round().clamp(0.0, 255.0);
        }
    }

    let known_cover = if blind { None } else { Some(cover) };
    let mut recovered = pipeline::unveil(&stego, secret.shape(), params, known_cover)?;
    if let Some(cipher) = cipher {
        recovered = cipher.decrypt(&recovered)?;
    }

    Ok(Evaluation {
        secret: ErrorStats::between(secret, &recovered)?,
        distortion: ErrorStats::between(cover, &stego)?,
    })
}
