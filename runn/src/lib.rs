#![allow(clippy::result_large_err)]
//! # runn-client
//!
//! Client library for the Runn resource-planning REST API.
//!
//! ## Quick Start
//!
//! ### CreateClient
//!
//! `ClientConfig::from_env()` reads the API key from `RUNN_API_KEY` and the base url from `RUNN_API_URL`
//! (falling back to `https://api.runn.io`).
//!
//! ```rust
//! use runn_client::client::{Client, ClientConfig};
//!
//! fn run() {
//!     let config = ClientConfig::from_env().unwrap();
//!     let client = Client::new(config);
//! }
//! ```
//!
//! When the key comes from somewhere else, build the config yourself.
//!
//! ```rust
//! use runn_client::client::{Client, ClientConfig};
//!
//! fn run(api_key: String) {
//!     let config = ClientConfig {
//!         api_key,
//!         ..Default::default()
//!     };
//!     let client = Client::new(config);
//! }
//! ```
//!
//! ### Create a role
//!
//! Numeric fields are [`Amount`](http::types::Amount) values. Parse every field of one form with the same
//! [`NumberMode`](http::types::NumberMode) so the costs share one representation.
//!
//! ```rust
//! use runn_client::client::Client;
//! use runn_client::http::roles::insert::CreateRoleRequest;
//! use runn_client::http::types::NumberMode;
//! use runn_client::http::Error;
//!
//! async fn run(client: &Client) {
//!     let mode = NumberMode::Integer;
//!     let request = CreateRoleRequest::new(
//!         "Engineer",
//!         mode.parse("50").unwrap(),
//!         mode.parse("75").unwrap(),
//!     );
//!     match client.roles().create(&request).await {
//!         Ok(created) => println!("created {}", created.id),
//!         Err(Error::CreationRejected(e)) => println!("rejected: {}", e.message),
//!         Err(e) => println!("transport failure: {e}"),
//!     }
//! }
//! ```
//!
//! ### Create a project
//!
//! ```rust
//! use runn_client::client::Client;
//! use runn_client::http::projects::insert::CreateProjectRequest;
//! use runn_client::http::types::Amount;
//!
//! async fn run(client: &Client) {
//!     let clients = client.clients().list().await.unwrap();
//!     let roles = client.roles().list().await.unwrap();
//!     let request = CreateProjectRequest::new(
//!         "Website",
//!         &clients[0].id,
//!         &roles[0].id,
//!         Amount::Float(120.5),
//!         Amount::Float(10000.0),
//!     );
//!     let created = client.projects().create(&request).await.unwrap();
//! }
//! ```
pub mod client;
pub mod http;
