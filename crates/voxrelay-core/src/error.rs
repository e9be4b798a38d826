//! Error types for the relay service

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing or empty 'prompt' parameter")]
    EmptyPrompt,

    #[error("upstream returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
