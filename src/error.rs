use thiserror::Error;

/// Library error type for carousel operations.
#[derive(Debug, Error)]
pub enum CarouselError {
    /// A carousel was given no items to cycle through.
    #[error("carousel needs at least one item")]
    EmptyItems,

    /// A flip was requested but no active card is bound to the carousel.
    #[error("no active card found")]
    MissingActiveCard,

    /// A flip was requested while another one is still running.
    #[error("a flip is already in flight")]
    FlipInFlight,

    /// Configuration values that parse but make no sense.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML/serde configuration error.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T, E = CarouselError> = std::result::Result<T, E>;
