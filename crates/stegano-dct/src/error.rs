use thiserror::Error;

/// Result type alias for all operations of this crate.
pub type Result<T> = std::result::Result<T, DctError>;

#[derive(Error, Debug)]
pub enum DctError {
    /// Represents malformed array dimensions, for example ragged rows, a zero sized axis
    /// or an array of the wrong rank for the requested transform
    #[error("Shape Error: {0}")]
    ShapeError(String),

    /// Represents a selection that asks for more coefficients than a strategy can address
    #[error(
        "Capacity Error: {requested} coefficients requested but only {available} are available"
    )]
    CapacityError { requested: usize, available: usize },

    /// Represents a zero, negative, non finite or too large embedding strength
    #[error("Alpha Error: embedding strength {0} is not within (0, 1]")]
    AlphaError(f64),

    /// Represents a strategy identifier that is not one of the known strategies
    #[error("Unknown strategy: {0}")]
    UnknownStrategyError(String),

    /// Represents an unusable selector tuning parameter, for example a zero stride
    #[error("Parameter Error: {0}")]
    ParameterError(String),

    /// Represents invalid modular exponentiation cipher parameters or out of range values
    #[error("Cipher Error: {0}")]
    CipherError(String),

    /// Represents an unsupported carrier media. For example, a WAV file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a configuration file that could not be parsed
    #[error("Configuration is invalid")]
    ConfigError(#[from] serde_json::Error),

    #[error("No cover image set")]
    CarrierNotSet,

    #[error("No secret image set")]
    SecretNotSet,

    #[error("No target file set")]
    TargetNotSet,
}

impl DctError {
    pub(crate) fn shape(reason: impl Into<String>) -> Self {
        Self::ShapeError(reason.into())
    }
}
