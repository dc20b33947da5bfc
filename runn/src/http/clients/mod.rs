pub(crate) mod list;

use crate::http::string_or_number;

/// A client (customer) as returned by `GET /v0/clients`. Read-only here.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug)]
pub struct Client {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
}
