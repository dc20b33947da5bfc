use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::types::Amount;

/// Payload of `POST /v0/roles`.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug)]
pub struct CreateRoleRequest {
    pub name: String,
    pub default_hour_cost: Amount,
    pub standard_rate: Amount,
}

impl CreateRoleRequest {
    /// Amounts are sent in the representation they were built with.
    pub fn new(name: impl Into<String>, default_hour_cost: Amount, standard_rate: Amount) -> Self {
        Self {
            name: name.into(),
            default_hour_cost,
            standard_rate,
        }
    }
}

pub(crate) fn build(base_url: &str, client: &Client, req: &CreateRoleRequest) -> RequestBuilder {
    let url = format!("{base_url}/roles");
    client.post(url).json(req)
}
