use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("Invalid argument `{argument}` = {value}: {reason}")]
    InvalidArgument {
        argument: String,
        value: String,
        reason: String,
    },

    #[error("Expected a JSON array, found {found}")]
    NotAnArray { found: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HelperError>;
