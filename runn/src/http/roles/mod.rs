pub mod insert;
pub(crate) mod list;

use crate::http::string_or_number;
use crate::http::types::Amount;

/// A role as returned by `GET /v0/roles`.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug)]
pub struct Role {
    /// Opaque identifier of the role.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    /// Cost to the business of one hour of this role.
    #[serde(default)]
    pub default_hour_cost: Option<Amount>,
    /// Rate charged to clients for one hour of this role.
    #[serde(default)]
    pub standard_rate: Option<Amount>,
}
