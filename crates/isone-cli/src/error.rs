use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] isone_core::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Core(
                isone_core::Error::InvalidDateFormat { .. }
                | isone_core::Error::MissingCredentials,
            ) => 2,
            Self::Core(_) | Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
