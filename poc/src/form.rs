use clap::Args;

use runn_client::http::projects::insert::CreateProjectRequest;
use runn_client::http::roles::insert::CreateRoleRequest;
use runn_client::http::types::{NumberMode, ParseAmountError};

/// Input of the "Create a role" form.
#[derive(Args, Debug, Clone)]
pub struct RoleForm {
    #[arg(long)]
    pub name: String,
    #[arg(long, allow_hyphen_values = true)]
    pub default_hour_cost: String,
    #[arg(long, allow_hyphen_values = true)]
    pub standard_rate: String,
    /// Send the costs to the API as floats or as ints.
    #[arg(long, default_value_t = NumberMode::Float)]
    pub number_mode: NumberMode,
}

impl RoleForm {
    /// Both costs are parsed with the form's single number mode.
    pub fn submit(&self) -> Result<CreateRoleRequest, ParseAmountError> {
        let mode = self.number_mode;
        Ok(CreateRoleRequest::new(
            self.name.as_str(),
            mode.parse(&self.default_hour_cost)?,
            mode.parse(&self.standard_rate)?,
        ))
    }
}

/// Input of the "Create a project" form.
#[derive(Args, Debug, Clone)]
pub struct ProjectForm {
    #[arg(long)]
    pub name: String,
    /// Id of an existing client, see `list-clients`.
    #[arg(long)]
    pub client_id: String,
    /// Id of an existing role, see `list-roles`.
    #[arg(long)]
    pub role_id: String,
    #[arg(long, allow_hyphen_values = true)]
    pub hourly_rate: String,
    #[arg(long, allow_hyphen_values = true)]
    pub budget: String,
    /// Send the rate and budget to the API as floats or as ints.
    #[arg(long, default_value_t = NumberMode::Float)]
    pub number_mode: NumberMode,
}

impl ProjectForm {
    pub fn submit(&self) -> Result<CreateProjectRequest, ParseAmountError> {
        let mode = self.number_mode;
        Ok(CreateProjectRequest::new(
            self.name.as_str(),
            self.client_id.as_str(),
            self.role_id.as_str(),
            mode.parse(&self.hourly_rate)?,
            mode.parse(&self.budget)?,
        ))
    }
}
