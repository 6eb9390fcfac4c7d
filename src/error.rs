use http::Method;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while talking to the Copy API.
///
/// The first five variants cover failures before any bytes are exchanged
/// (construction, URL building, verb dispatch). `Status` is a completed
/// round trip the server rejected; `Decode` is a completed round trip whose
/// body did not match the expected JSON shape.
#[derive(Error, Debug)]
pub enum Error {
    #[error("missing credential: {0} must not be empty")]
    Configuration(&'static str),
    #[error("unsupported request method: {0}")]
    UnsupportedMethod(Method),
    #[error("invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("url already carries a query string")]
    AmbiguousQuery,
    #[error("invalid upload path: {0:?}")]
    InvalidPath(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned status {code}")]
    Status { code: u16, body: String },
    #[error("response decoding failed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("could not read local file: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The numeric HTTP status for `Status` errors, `None` otherwise.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}
