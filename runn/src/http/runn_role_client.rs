use std::sync::Arc;

use crate::http::error::Error;
use crate::http::roles;
use crate::http::roles::insert::CreateRoleRequest;
use crate::http::roles::Role;
use crate::http::runn_client::RunnClient;
use crate::http::Created;

#[derive(Clone)]
pub struct RunnRoleClient {
    inner: Arc<RunnClient>,
}

impl RunnRoleClient {
    pub fn new(inner: Arc<RunnClient>) -> Self {
        Self { inner }
    }

    /// Creates a role. Succeeds only on `201 Created`.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create(&self, req: &CreateRoleRequest) -> Result<Created, Error> {
        tracing::trace!(name = %req.name, "creating role");
        let builder = roles::insert::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send_create(builder).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self) -> Result<Vec<Role>, Error> {
        let builder = roles::list::build(self.inner.endpoint(), self.inner.http());
        self.inner.send(builder).await
    }
}
