//! Error statistics between an original and a recovered image.

use std::fmt;

use crate::array::SampleArray;
use crate::error::{DctError, Result};

/// Min, max and mean of the absolute per element difference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl ErrorStats {
    pub fn between(original: &SampleArray, recovered: &SampleArray) -> Result<Self> {
        if original.shape() != recovered.shape() {
            return Err(DctError::shape(format!(
                "cannot compare {} with {}",
                original.shape(),
                recovered.shape()
            )));
        }

        let mut min = f64::INFINITY;
        let mut max = 0.0_f64;
        let mut sum = 0.0;
        for (a, b) in original.as_slice().iter().zip(recovered.as_slice()) {
            let e = (a - b).abs();
            min = min.min(e);
            max = max.max(e);
            sum += e;
        }

        Ok(Self {
            min,
            max,
            mean: sum / original.len() as f64,
        })
    }

    pub fn tier(&self) -> QualityTier {
        QualityTier::from_mean_error(self.mean)
    }
}

impl fmt::Display for ErrorStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min {:.2}, max {:.2}, mean {:.2}",
            self.min, self.max, self.mean
        )
    }
}

/// Quality of a recovered image by mean error on the 0-255 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum QualityTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QualityTier {
    pub fn from_mean_error(mean: f64) -> Self {
        match mean {
            m if m < 5.0 => QualityTier::Excellent,
            m if m < 15.0 => QualityTier::Good,
            m if m < 30.0 => QualityTier::Fair,
            _ => QualityTier::Poor,
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QualityTier::Excellent => "Excellent",
            QualityTier::Good => "Good",
            QualityTier::Fair => "Fair",
            QualityTier::Poor => "Poor",
        };
        f.write_str(name)
    }
}
