use std::path::PathBuf;

/// Errors raised while preparing a demo run.
///
/// The algorithms themselves never fail; only configuration does.
#[derive(Debug, thiserror::Error)]
pub enum ComplexityError {
    #[error("Sequence length must be at least 1 (got {0})")]
    InvalidSize(usize),
    #[error("Run count must be at least 1")]
    InvalidRuns,
    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type ComplexityResult<T> = Result<T, ComplexityError>;
