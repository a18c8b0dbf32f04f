#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("Invalid HTTP verb: {0:?}")]
    InvalidVerb(String),
}

pub type Result<T> = std::result::Result<T, Error>;
