//! # Stegano DCT
//!
//! Hides a small image inside a larger one in the frequency domain.
//! Both images are brought into DCT coefficients, a [`Strategy`] picks which
//! cover coefficients carry the secret, and the secret coefficients are
//! blended in at a strength `alpha`:
//!
//! - [`transform`] for the orthonormal DCT-II and its inverse in 1, 2 and 3 dimensions
//! - [`select`](mod@select) for the ordered coordinate sets of every strategy
//! - [`embed`](mod@embed) and [`extract`](mod@extract) for blending coefficients in
//!   and reading them back
//! - [`pipeline`] for the whole session on pixel arrays
//! - [`api`] for image files
//!
//! # Usage Examples
//!
//! ## Hide and recover pixels
//!
//! ```rust
//! use stegano_dct::strategy::ZigZag;
//! use stegano_dct::{pipeline, EmbeddingParams, SampleArray, Shape, Strategy};
//!
//! let cover = SampleArray::from_vec(
//!     Shape::d2(16, 16).unwrap(),
//!     (0..256).map(|i| (i % 200) as f64).collect(),
//! )
//! .unwrap();
//! let secret = SampleArray::from_rows(&[[10.0, 200.0], [90.0, 30.0]]).unwrap();
//!
//! let params = EmbeddingParams::new(Strategy::ZigZag(ZigZag), 0.1, 0, 0).unwrap();
//! let stego = pipeline::hide(&cover, &secret, &params).unwrap();
//! let recovered = pipeline::unveil(&stego, secret.shape(), &params, Some(&cover)).unwrap();
//!
//! assert!(recovered.max_abs_diff(&secret).unwrap() < 1e-6);
//! ```
//!
//! ## Hide an image file inside another one
//!
//! ```rust,no_run
//! stegano_dct::api::hide::prepare()
//!     .with_cover("cover.png")
//!     .with_secret("secret.png")
//!     .with_output("stego.png")
//!     .use_cover_size(Some(128))
//!     .use_secret_size(Some(16))
//!     .execute()
//!     .expect("Failed to hide image");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod array;
pub mod cipher;
pub mod config;
pub mod embed;
pub mod error;
pub mod extract;
pub mod media;
pub mod metrics;
pub mod params;
pub mod pipeline;
pub mod select;
pub mod strategy;
pub mod transform;

pub use array::{Coord, SampleArray, Shape};
pub use cipher::PowerCipher;
pub use config::Config;
pub use embed::embed;
pub use error::{DctError, Result};
pub use extract::extract;
pub use media::ColorMode;
pub use metrics::{ErrorStats, QualityTier};
pub use params::EmbeddingParams;
pub use select::{capacity, select, CoordinateSet};
pub use strategy::{PlaneOrder, Strategy};
pub use transform::{dct, dct_1d, dct_2d, dct_3d, idct, idct_1d, idct_2d, idct_3d, DctPlan};
