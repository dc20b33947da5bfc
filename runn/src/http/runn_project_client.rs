use std::sync::Arc;

use crate::http::error::Error;
use crate::http::projects;
use crate::http::projects::insert::CreateProjectRequest;
use crate::http::runn_client::RunnClient;
use crate::http::Created;

#[derive(Clone)]
pub struct RunnProjectClient {
    inner: Arc<RunnClient>,
}

impl RunnProjectClient {
    pub fn new(inner: Arc<RunnClient>) -> Self {
        Self { inner }
    }

    /// Creates a project. Unknown client or role ids are reported by the API as a rejection.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create(&self, req: &CreateProjectRequest) -> Result<Created, Error> {
        tracing::trace!(name = %req.name, client_id = %req.client_id, "creating project");
        let builder = projects::insert::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send_create(builder).await
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use serde_json::json;

    use crate::http::error::Error;
    use crate::http::projects::insert::CreateProjectRequest;
    use crate::http::runn_client::test::{create_client, StubTransport};
    use crate::http::runn_project_client::RunnProjectClient;
    use crate::http::types::Amount;

    fn website() -> CreateProjectRequest {
        CreateProjectRequest::new("Website", "42", "7", Amount::Float(120.5), Amount::Float(10000.0))
    }

    #[tokio::test]
    async fn test_create_project() {
        let stub = StubTransport::respond(201, r#"{"id":99,"name":"Website"}"#);
        let client = RunnProjectClient::new(Arc::new(create_client(&stub)));

        let created = client.create(&website()).await.unwrap();
        assert_eq!(created.id, "99");

        let requests = stub.requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].url, "https://runn.test/v0/projects");
        assert_eq!(
            requests[0].body,
            Some(json!({
                "name": "Website",
                "client_id": "42",
                "role_id": "7",
                "project_rates": [{"role_id": "7", "rate_hourly": 120.5}],
                "budget": 10000.0
            }))
        );
    }

    #[tokio::test]
    async fn test_create_project_with_unknown_client() {
        let stub = StubTransport::respond(404, r#"{"error":"Client not found"}"#);
        let client = RunnProjectClient::new(Arc::new(create_client(&stub)));

        match client.create(&website()).await {
            Err(Error::CreationRejected(e)) => {
                assert_eq!(e.status, 404);
                assert_eq!(e.message, "Client not found");
            }
            other => unreachable!("{other:?}"),
        }
    }
}
