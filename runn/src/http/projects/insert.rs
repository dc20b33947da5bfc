use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::projects::ProjectRate;
use crate::http::types::Amount;

/// Payload of `POST /v0/projects`.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug)]
pub struct CreateProjectRequest {
    pub name: String,
    /// Must reference a client listed by `GET /v0/clients`. Only the API checks it.
    pub client_id: String,
    /// Must reference a role listed by `GET /v0/roles`. Only the API checks it.
    pub role_id: String,
    pub project_rates: Vec<ProjectRate>,
    pub budget: Amount,
}

impl CreateProjectRequest {
    pub fn new(
        name: impl Into<String>,
        client_id: impl Into<String>,
        role_id: impl Into<String>,
        hourly_rate: Amount,
        budget: Amount,
    ) -> Self {
        let role_id = role_id.into();
        Self {
            name: name.into(),
            client_id: client_id.into(),
            project_rates: vec![ProjectRate {
                role_id: role_id.clone(),
                rate_hourly: hourly_rate,
            }],
            role_id,
            budget,
        }
    }
}

pub(crate) fn build(base_url: &str, client: &Client, req: &CreateProjectRequest) -> RequestBuilder {
    let url = format!("{base_url}/projects");
    client.post(url).json(req)
}
