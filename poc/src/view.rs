use serde::Serialize;

use runn_client::http::clients::Client;
use runn_client::http::projects::insert::CreateProjectRequest;
use runn_client::http::roles::insert::CreateRoleRequest;
use runn_client::http::roles::Role;
use runn_client::http::types::Amount;
use runn_client::http::{Created, Error};

/// A resource the forms can create, as named in the messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Role,
    Project,
}

impl Resource {
    fn as_str(&self) -> &'static str {
        match self {
            Resource::Role => "role",
            Resource::Project => "project",
        }
    }
}

pub fn endpoint_banner(api_url: &str) -> String {
    format!("Using API endpoint: {api_url}")
}

/// Field names paired with the representation each is sent with.
pub trait Typed {
    fn field_types(&self) -> Vec<(&'static str, &'static str)>;
}

fn amount_type(amount: &Amount) -> &'static str {
    amount.mode().as_str()
}

impl Typed for CreateRoleRequest {
    fn field_types(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("name", "text"),
            ("default_hour_cost", amount_type(&self.default_hour_cost)),
            ("standard_rate", amount_type(&self.standard_rate)),
        ]
    }
}

impl Typed for CreateProjectRequest {
    fn field_types(&self) -> Vec<(&'static str, &'static str)> {
        let mut types = vec![("name", "text"), ("client_id", "id"), ("role_id", "id")];
        if let Some(rate) = self.project_rates.first() {
            types.push(("rate_hourly", amount_type(&rate.rate_hourly)));
        }
        types.push(("budget", amount_type(&self.budget)));
        types
    }
}

/// The panel shown before a create call: the JSON that will be sent and the type of each field.
pub fn payload_panel<T>(payload: &T) -> Result<String, serde_json::Error>
where
    T: Serialize + Typed,
{
    let mut panel = format!(
        "Data we're sending to the API:\n{}\nAnd their types:\n",
        serde_json::to_string_pretty(payload)?
    );
    for (field, tp) in payload.field_types() {
        panel.push_str(&format!("  {field}: {tp}\n"));
    }
    Ok(panel)
}

pub fn creation_outcome(resource: Resource, result: &Result<Created, Error>) -> String {
    let resource = resource.as_str();
    match result {
        Ok(created) => format!("Successfully created {resource} with id '{}'", created.id),
        Err(Error::CreationRejected(e)) => format!("Error creating {resource}: {}", e.message),
        Err(e) => format!("Error creating {resource}: {e}"),
    }
}

pub fn client_list(clients: &[Client]) -> String {
    rows(clients.iter().map(|c| (c.id.as_str(), c.name.as_str())), "No clients found")
}

pub fn role_list(roles: &[Role]) -> String {
    rows(roles.iter().map(|r| (r.id.as_str(), r.name.as_str())), "No roles found")
}

fn rows<'a>(items: impl Iterator<Item = (&'a str, &'a str)>, empty: &str) -> String {
    let items: Vec<(&str, &str)> = items.collect();
    if items.is_empty() {
        return empty.to_string();
    }
    let width = items.iter().map(|(id, _)| id.len()).max().unwrap_or_default().max(2);
    let mut out = format!("{:<width$}  NAME", "ID");
    for (id, name) in items {
        out.push_str(&format!("\n{id:<width$}  {name}"));
    }
    out
}
