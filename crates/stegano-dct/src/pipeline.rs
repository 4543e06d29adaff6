//! Whole embedding sessions on pixel arrays.

use log::{debug, info};

use crate::array::{SampleArray, Shape};
use crate::embed::embed;
use crate::error::{DctError, Result};
use crate::extract::extract;
use crate::params::EmbeddingParams;
use crate::select::select;
use crate::transform::{dct, idct};

/// Hides `secret` pixels inside `cover` pixels and returns the stego pixels.
///
/// Both arrays are transformed, `secret.len()` cover coefficients are picked
/// by the configured strategy, blended and transformed back.
pub fn hide(
    cover: &SampleArray,
    secret: &SampleArray,
    params: &EmbeddingParams,
) -> Result<SampleArray> {
    let cover_coeffs = dct(cover)?;
    let secret_coeffs = dct(secret)?;
    debug!("transformed cover {} and secret {}", cover.shape(), secret.shape());

    let coords = select(
        cover.shape(),
        params.strategy(),
        secret.len(),
        params.p(),
        params.q(),
    )?;
    let stego_coeffs = embed(&cover_coeffs, &secret_coeffs, &coords, params.alpha())?;

    info!(
        "embedded {} coefficients with {} at alpha {}",
        coords.len(),
        params.strategy(),
        params.alpha()
    );

    idct(&stego_coeffs)
}

/// Recovers secret pixels of `secret_shape` from `stego` pixels.
///
/// Passing the original `cover` pixels gives the exact inverse of [`hide`];
/// without it the extraction is blind and only approximate.
pub fn unveil(
    stego: &SampleArray,
    secret_shape: Shape,
    params: &EmbeddingParams,
    cover: Option<&SampleArray>,
) -> Result<SampleArray> {
    if let Some(cover) = cover {
        if cover.shape() != stego.shape() {
            return Err(DctError::shape(format!(
                "cover {} does not match stego {}",
                cover.shape(),
                stego.shape()
            )));
        }
    }

    let stego_coeffs = dct(stego)?;
    let cover_coeffs = cover.map(dct).transpose()?;

    let coords = select(
        stego.shape(),
        params.strategy(),
        secret_shape.len(),
        params.p(),
        params.q(),
    )?;
    let recovered = extract(&stego_coeffs, &coords, params.alpha(), cover_coeffs.as_ref())?;

    info!(
        "extracted {} coefficients with {} ({})",
        coords.len(),
        params.strategy(),
        if cover.is_some() { "non-blind" } else { "blind" }
    );

    idct(&SampleArray::from_vec(secret_shape, recovered)?)
}
