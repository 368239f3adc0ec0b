use thiserror::Error;

#[derive(Error, Debug)]
pub enum AviaryError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    #[error("Weight count mismatch: topology needs {expected}, got {actual}")]
    WeightCount { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, AviaryError>;
