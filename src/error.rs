use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Fitness dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Genotype {0} has no fitness assigned")]
    MissingFitness(u64),

    #[error("Genotype {id} has links out of innovation order")]
    UnsortedLinks { id: u64 },

    #[error("Encoding mismatch: {0}")]
    EncodingMismatch(String),

    #[error("Malformed distribution: {0}")]
    MalformedDistribution(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config loader error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
