use thiserror::Error;

// every variant is a transport failure: a condition that prevented completion
// of the HTTP exchange. Error status codes returned by the remote service are
// completed exchanges and surface as `Exchange`, not as errors.
#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("invalid endpoint url: {0}")]
    UrlParse(#[from] url::ParseError),
    #[error("Serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
}
