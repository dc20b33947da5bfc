use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use runn_client::client::{Client, ClientConfig, API_KEY_ENV, API_URL_ENV, DEFAULT_API_URL};

use crate::form::{ProjectForm, RoleForm};
use crate::view::Resource;

mod form;
mod view;

#[derive(Parser, Debug)]
#[command(name = "runn-poc", version, about = "Create roles and projects through the Runn API")]
struct Cli {
    /// Key sent as the Authorization header.
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: String,

    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Log raw response bodies.
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a role
    CreateRole(RoleForm),
    /// Create a project for an existing client and role
    CreateProject(ProjectForm),
    /// List the clients projects can be created for
    ListClients,
    /// List the roles
    ListRoles,
}

impl Cli {
    fn config(&self) -> ClientConfig {
        ClientConfig {
            api_key: self.api_key.clone(),
            api_url: self.api_url.clone(),
            ..Default::default()
        }
        .with_debug(self.debug)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(if cli.debug { "runn_client=info" } else { "warn" }));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let client = Client::new(cli.config());
    run(&client, &cli.command).await
}

async fn run(client: &Client, command: &Command) -> Result<ExitCode> {
    match command {
        Command::CreateRole(form) => {
            let request = form.submit().context("invalid role form")?;
            println!("{}", view::endpoint_banner(client.api_url()));
            println!("{}", view::payload_panel(&request)?);
            let result = client.roles().create(&request).await;
            println!("{}", view::creation_outcome(Resource::Role, &result));
            Ok(exit_code(result.is_ok()))
        }
        Command::CreateProject(form) => {
            let request = form.submit().context("invalid project form")?;
            println!("{}", view::endpoint_banner(client.api_url()));
            println!("{}", view::payload_panel(&request)?);
            let result = client.projects().create(&request).await;
            println!("{}", view::creation_outcome(Resource::Project, &result));
            Ok(exit_code(result.is_ok()))
        }
        Command::ListClients => {
            let clients = client.clients().list().await.context("failed to fetch clients")?;
            println!("{}", view::client_list(&clients));
            Ok(ExitCode::SUCCESS)
        }
        Command::ListRoles => {
            let roles = client.roles().list().await.context("failed to fetch roles")?;
            println!("{}", view::role_list(&roles));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
