use std::fmt;

use reqwest::{Response, StatusCode};
use serde_json::Value;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A listing endpoint answered with a non-success status.
    #[error("remote api responded with status {status}: {0}", status = .0.status)]
    Response(ErrorResponse),

    /// A creation endpoint answered with anything other than `201 Created`.
    #[error(transparent)]
    CreationRejected(ErrorResponse),

    /// An error from the underlying HTTP client.
    #[error(transparent)]
    HttpClient(#[from] reqwest::Error),

    /// A successful response whose body did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Json(#[from] serde_json::Error),

    /// An error from one of the middleware used.
    #[error(transparent)]
    HttpMiddleware(anyhow::Error),
}

impl Error {
    /// The HTTP status reported by the API, if the request reached it.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Response(e) | Error::CreationRejected(e) => Some(e.status),
            Error::HttpClient(e) => e.status().map(|s| s.as_u16()),
            Error::Json(_) | Error::HttpMiddleware(_) => None,
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Middleware(err) => Error::HttpMiddleware(err),
            reqwest_middleware::Error::Reqwest(err) => Error::HttpClient(err),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ErrorResponse {
    /// An HTTP status value, without the textual description.
    ///
    /// Example values include: `400` (Bad Request), `401` (Unauthorized), and `404` (Not Found).
    pub status: u16,

    /// The `error` field of the response body. Empty when the body has none.
    pub message: String,
}

impl ErrorResponse {
    pub(crate) fn new(status: StatusCode, body: &str) -> Self {
        Self {
            status: status.as_u16(),
            message: error_message(body),
        }
    }

    /// Consumes a failed response, keeping its status and whatever message the body carries.
    pub(crate) async fn read(response: Response) -> Self {
        let status = response.status();
        // an unreadable body still leaves the status to report.
        let body = response.text().await.unwrap_or_default();
        Self::new(status, &body)
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.message.fmt(f)
    }
}

impl std::error::Error for ErrorResponse {}

fn error_message(body: &str) -> String {
    let Ok(Value::Object(mut body)) = serde_json::from_str::<Value>(body) else {
        return String::new();
    };
    match body.remove("error") {
        Some(Value::String(message)) => message,
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
