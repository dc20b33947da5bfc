use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

pub mod clients;
pub mod error;
pub mod projects;
pub mod roles;
pub mod runn_client;
pub mod runn_clients_client;
pub mod runn_project_client;
pub mod runn_role_client;
pub mod types;

pub use error::{Error, ErrorResponse};

/// Deserializes an identifier the API may send either as a JSON string or as a JSON number.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(num) => Ok(num.to_string()),
        _ => Err(de::Error::custom("Incorrect type")),
    }
}

/// Response body of the creation endpoints.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug)]
pub struct Created {
    /// Identifier of the created resource.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
}
