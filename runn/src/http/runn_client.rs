use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Response, StatusCode};
use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::error::{Error, ErrorResponse};
use crate::http::Created;

pub const API_VERSION: &str = "v0";

#[derive(Debug, Clone)]
pub struct RunnClient {
    api_key: String,
    endpoint: String,
    http: Client,
    debug: bool,
}

impl RunnClient {
    pub(crate) fn new(api_key: &str, api_url: &str, http: Client, debug: bool) -> Self {
        Self {
            api_key: api_key.to_string(),
            endpoint: format!("{}/{API_VERSION}", api_url.trim_end_matches('/')),
            http,
            debug,
        }
    }

    pub(crate) fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(USER_AGENT, "runn-poc")
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, self.api_key.as_str())
    }

    /// Sends a read request. Any non-2xx status is an [`Error::Response`].
    pub async fn send<T>(&self, builder: RequestBuilder) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let request = self.with_headers(builder);
        let response = request.send().await?;
        let response = Self::check_response_status(response).await?;
        self.decode(response).await
    }

    /// Sends a creation request. Only `201 Created` counts as success, anything else is an
    /// [`Error::CreationRejected`] carrying the `error` field of the body.
    pub async fn send_create(&self, builder: RequestBuilder) -> Result<Created, Error> {
        let request = self.with_headers(builder);
        let response = request.send().await?;
        if response.status() != StatusCode::CREATED {
            let error = ErrorResponse::read(response).await;
            tracing::debug!(status = error.status, message = %error.message, "creation rejected");
            return Err(Error::CreationRejected(error));
        }
        self.decode(response).await
    }

    async fn decode<T>(&self, response: Response) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let text = response.text().await?;
        if self.debug {
            tracing::info!("{}", text);
        }
        Ok(serde_json::from_str(text.as_str())?)
    }

    /// Checks whether an HTTP response is successful and returns it, or returns an error.
    async fn check_response_status(response: Response) -> Result<Response, Error> {
        if response.status().is_success() {
            return Ok(response);
        }
        Err(Error::Response(ErrorResponse::read(response).await))
    }
}
