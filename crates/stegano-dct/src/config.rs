//! JSON session configuration.
//!
//! ```json
//! { "alpha": 0.1, "p": 3, "q": 5, "method": "center", "encrypt": false }
//! ```
//!
//! `p` and `q` feed both the selector strides and, with `encrypt` set, the
//! [`PowerCipher`] exponent and modulus. Missing keys fall back to the values above.

use std::fs;
use std::path::Path;

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::cipher::PowerCipher;
use crate::error::{DctError, Result};
use crate::params::{EmbeddingParams, DEFAULT_ALPHA};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub alpha: f64,
    pub p: usize,
    pub q: usize,
    pub method: String,
    pub encrypt: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            p: 3,
            q: 5,
            method: "center".to_string(),
            encrypt: false,
        }
    }
}

impl Config {
    pub fn load(file: &Path) -> Result<Self> {
        let json = fs::read_to_string(file).map_err(|e| {
            error!("Error reading config {file:?}: {e}");
            DctError::ReadError { source: e }
        })?;
        let config = Self::from_json(&json)?;
        debug!("loaded {config:?} from {file:?}");

        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn params(&self) -> Result<EmbeddingParams> {
        EmbeddingParams::new(self.method.parse()?, self.alpha, self.p, self.q)
    }

    pub fn cipher(&self) -> Result<Option<PowerCipher>> {
        if !self.encrypt {
            return Ok(None);
        }
        PowerCipher::new(self.p as u64, self.q as u64).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{HighFreq, Strategy, ZigZag};
    use tempfile::tempdir;

    #[test]
    fn missing_keys_take_defaults() {
        let config = Config::from_json(r#"{ "method": "zigzag" }"#).unwrap();
        assert_eq!(
            config,
            Config {
                method: "zigzag".into(),
                ..Config::default()
            }
        );

        let params = config.params().unwrap();
        assert_eq!(params.strategy(), Strategy::ZigZag(ZigZag));
        assert_eq!(params.alpha(), 0.1);
        assert_eq!((params.p(), params.q()), (3, 5));
        assert!(config.cipher().unwrap().is_none());
    }

    #[test]
    fn encrypt_builds_a_cipher() {
        let config = Config::from_json(r#"{ "p": 5, "q": 257, "encrypt": true }"#).unwrap();
        assert_eq!(config.cipher().unwrap().map(|c| c.modulus()), Some(257));
    }

    #[test]
    fn invalid_values_are_reported() {
        let unknown = Config::from_json(r#"{ "method": "diagonal" }"#).unwrap();
        assert!(matches!(unknown.params(), Err(DctError::UnknownStrategyError(_))));

        let strong = Config::from_json(r#"{ "alpha": 1.5 }"#).unwrap();
        assert!(matches!(strong.params(), Err(DctError::AlphaError(_))));

        assert!(matches!(
            Config::from_json("{ alpha: "),
            Err(DctError::ConfigError(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let file = dir.path().join("config.json");
        fs::write(&file, r#"{ "alpha": 0.05, "method": "high_freq" }"#).unwrap();

        let config = Config::load(&file).unwrap();
        assert_eq!(config.alpha, 0.05);
        assert_eq!(config.params().unwrap().strategy(), Strategy::HighFreq(HighFreq));

        assert!(matches!(
            Config::load(&dir.path().join("missing.json")),
            Err(DctError::ReadError { .. })
        ));
    }
}
