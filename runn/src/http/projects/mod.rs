pub mod insert;

/// One role-rate pair of a project.
///
/// The API accepts several pairs per project; this client always sends exactly one.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug)]
pub struct ProjectRate {
    pub role_id: String,
    pub rate_hourly: crate::http::types::Amount,
}
