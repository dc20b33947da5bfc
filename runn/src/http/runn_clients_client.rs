use std::sync::Arc;

use crate::http::clients;
use crate::http::clients::Client;
use crate::http::error::Error;
use crate::http::runn_client::RunnClient;

/// Read-only access to the clients (customers) of the account.
#[derive(Clone)]
pub struct RunnClientsClient {
    inner: Arc<RunnClient>,
}

impl RunnClientsClient {
    pub fn new(inner: Arc<RunnClient>) -> Self {
        Self { inner }
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self) -> Result<Vec<Client>, Error> {
        let builder = clients::list::build(self.inner.endpoint(), self.inner.http());
        self.inner.send(builder).await
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use crate::http::error::Error;
    use crate::http::runn_client::test::{create_client, StubTransport};
    use crate::http::runn_client::RunnClient;
    use crate::http::runn_clients_client::RunnClientsClient;

    #[tokio::test]
    async fn test_list_clients() {
        let stub = StubTransport::respond(200, r#"[{"id":3,"name":"Acme","website":null},{"id":"c-4","name":"Globex"}]"#);
        let client = RunnClientsClient::new(Arc::new(create_client(&stub)));

        let clients = client.list().await.unwrap();
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].id, "3");
        assert_eq!(clients[0].name, "Acme");
        assert_eq!(clients[1].id, "c-4");
        assert_eq!(stub.requests()[0].url, "https://runn.test/v0/clients");
    }

    #[tokio::test]
    async fn test_list_clients_empty() {
        let stub = StubTransport::respond(200, "[]");
        let client = RunnClientsClient::new(Arc::new(create_client(&stub)));
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_clients_remote_error() {
        let stub = StubTransport::respond(401, r#"{"error":"Unauthorized"}"#);
        let client = RunnClientsClient::new(Arc::new(create_client(&stub)));
        match client.list().await {
            Err(Error::Response(e)) => {
                assert_eq!(e.status, 401);
                assert_eq!(e.message, "Unauthorized");
            }
            other => unreachable!("{other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_clients_middleware_failure() {
        // nothing stubbed, so the transport layer fails the call.
        let stub = StubTransport::default();
        let client = RunnClientsClient::new(Arc::new(create_client(&stub)));
        assert!(matches!(client.list().await, Err(Error::HttpMiddleware(_))));
    }

    #[tokio::test]
    async fn test_list_clients_transport_failure() {
        let http = reqwest_middleware::ClientBuilder::new(reqwest::Client::new()).build();
        let inner = RunnClient::new("key", "http://127.0.0.1:1", http, false);
        let client = RunnClientsClient::new(Arc::new(inner));
        let err = client.list().await.unwrap_err();
        assert!(matches!(err, Error::HttpClient(_)), "{err:?}");
        assert_eq!(err.status(), None);
    }
}
