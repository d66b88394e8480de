use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0} not found")]
    NotFound(String),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("server returned error: {0}")]
    Payload(String),
}

impl From<Error> for lnreader_lib::error::Error {
    fn from(e: Error) -> Self {
        use lnreader_lib::error::Error as Kind;

        match e {
            Error::Request(e) if e.is_decode() => Kind::Parse(e.to_string()),
            Error::Request(e) => Kind::Network(e.to_string()),
            Error::Json(e) => Kind::Parse(e.to_string()),
            Error::NotFound(url) => Kind::NotFound(url),
            e @ (Error::Status { .. } | Error::Payload(_)) => Kind::Application(e.to_string()),
        }
    }
}
