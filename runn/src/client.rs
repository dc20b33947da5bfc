use std::sync::Arc;

use reqwest_middleware::ClientWithMiddleware;

use crate::http::runn_client::RunnClient;
use crate::http::runn_clients_client::RunnClientsClient;
use crate::http::runn_project_client::RunnProjectClient;
use crate::http::runn_role_client::RunnRoleClient;

pub const API_KEY_ENV: &str = "RUNN_API_KEY";
pub const API_URL_ENV: &str = "RUNN_API_URL";
pub const DEFAULT_API_URL: &str = "https://api.runn.io";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
}

#[derive(Debug)]
pub struct ClientConfig {
    /// Sent verbatim as the `Authorization` header of every request.
    pub api_key: String,
    pub api_url: String,
    pub http: Option<ClientWithMiddleware>,
    /// Logs raw response bodies before decoding them.
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            http: None,
            debug: false,
        }
    }
}

impl ClientConfig {
    /// Reads the key from `RUNN_API_KEY` and the base url from `RUNN_API_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar(API_KEY_ENV))?;
        let api_url = match std::env::var(API_URL_ENV) {
            Ok(url) if !url.is_empty() => url,
            _ => {
                tracing::trace!("{API_URL_ENV} is not set, using {DEFAULT_API_URL}");
                DEFAULT_API_URL.to_string()
            }
        };
        Ok(Self {
            api_key,
            api_url,
            ..Default::default()
        })
    }

    pub fn with_http_client(mut self, http: ClientWithMiddleware) -> Self {
        self.http = Some(http);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

#[derive(Clone)]
pub struct Client {
    role_client: RunnRoleClient,
    project_client: RunnProjectClient,
    clients_client: RunnClientsClient,
    api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl Client {
    /// New client
    pub fn new(config: ClientConfig) -> Self {
        let http = config
            .http
            .unwrap_or_else(|| reqwest_middleware::ClientBuilder::new(reqwest::Client::default()).build());
        let client = Arc::new(RunnClient::new(&config.api_key, &config.api_url, http, config.debug));
        Self {
            role_client: RunnRoleClient::new(client.clone()),
            project_client: RunnProjectClient::new(client.clone()),
            clients_client: RunnClientsClient::new(client),
            api_url: config.api_url,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn roles(&self) -> &RunnRoleClient {
        &self.role_client
    }

    pub fn projects(&self) -> &RunnProjectClient {
        &self.project_client
    }

    pub fn clients(&self) -> &RunnClientsClient {
        &self.clients_client
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::AUTHORIZATION;
    use serial_test::serial;

    use crate::client::{Client, ClientConfig, ConfigError, API_KEY_ENV, API_URL_ENV, DEFAULT_API_URL};
    use crate::http::error::Error;
    use crate::http::roles::insert::CreateRoleRequest;
    use crate::http::runn_client::test::StubTransport;
    use crate::http::types::NumberMode;

    fn stubbed_client(stub: &StubTransport) -> Client {
        let http = reqwest_middleware::ClientBuilder::new(reqwest::Client::new())
            .with(stub.clone())
            .build();
        let config = ClientConfig {
            api_key: "secret".to_string(),
            api_url: "https://runn.test/".to_string(),
            ..Default::default()
        };
        Client::new(config.with_http_client(http))
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::remove_var(API_KEY_ENV);
        std::env::remove_var(API_URL_ENV);
        assert!(matches!(
            ClientConfig::from_env(),
            Err(ConfigError::MissingVar(API_KEY_ENV))
        ));

        std::env::set_var(API_KEY_ENV, "secret");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(!config.debug);

        std::env::set_var(API_URL_ENV, "http://localhost:3000");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_url, "http://localhost:3000");

        std::env::remove_var(API_KEY_ENV);
        std::env::remove_var(API_URL_ENV);
    }

    #[tokio::test]
    async fn test_role_submission_scenario() {
        let stub = StubTransport::respond(201, r#"{"id":"abc123"}"#);
        stub.then(400, r#"{"error":"name already exists"}"#);
        let client = stubbed_client(&stub);

        let mode = NumberMode::Integer;
        let request = CreateRoleRequest::new("Engineer", mode.parse("50").unwrap(), mode.parse("75").unwrap());
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"name":"Engineer","default_hour_cost":50,"standard_rate":75}"#
        );

        let created = client.roles().create(&request).await.unwrap();
        assert_eq!(created.id, "abc123");

        match client.roles().create(&request).await {
            Err(Error::CreationRejected(e)) => assert_eq!(e.to_string(), "name already exists"),
            other => unreachable!("{other:?}"),
        }

        let requests = stub.requests();
        assert_eq!(requests.len(), 2);
        for request in requests {
            assert_eq!(request.url, "https://runn.test/v0/roles");
            assert_eq!(request.headers[AUTHORIZATION], "secret");
        }
    }

    #[tokio::test]
    async fn test_sub_clients_share_one_transport() {
        let stub = StubTransport::respond(200, r#"[{"id":1,"name":"Acme"}]"#);
        stub.then(200, r#"[{"id":2,"name":"Engineer"}]"#);
        let client = stubbed_client(&stub);

        assert_eq!(client.api_url(), "https://runn.test/");
        let clients = client.clients().list().await.unwrap();
        let roles = client.roles().list().await.unwrap();
        assert_eq!(clients[0].name, "Acme");
        assert_eq!(roles[0].name, "Engineer");

        let urls: Vec<String> = stub.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec!["https://runn.test/v0/clients", "https://runn.test/v0/roles"]);
    }
}
