use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Validation error: {field} - {reason}")]
    ValidationError { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, MenuError>;
