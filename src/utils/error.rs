use thiserror::Error;

#[derive(Error, Debug)]
pub enum GisError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Malformed response: {message}")]
    MalformedResponseError { message: String },

    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown CRS identifier: {code}")]
    UnknownCrsError { code: String },

    #[error("Attachment fetch cancelled before completion")]
    FetchCancelled,
}

pub type Result<T> = std::result::Result<T, GisError>;
