//! Developer Console API client.
//!
//! Provides typed request models and an asynchronous client for managing
//! organizations, projects, workspaces, credentials, integrations and App
//! Registry applications through the Developer Console REST API.
//!
//! ```no_run
//! # async fn run() -> aio_console::Result<()> {
//! let client = aio_console::init("access-token", "api-key", Some("stage"))?;
//! let orgs = client.get_organizations().await?;
//! println!("{}", orgs.data());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod app_registry;
pub mod client;
pub mod credentials;
pub mod integrations;
pub mod models;
pub mod operation;
pub mod organizations;
pub mod projects;
pub mod workspaces;

pub use aio_console_core::config::Environment;
pub use aio_console_core::request::{create_request_options, RequestOptions};
pub use aio_console_core::response::ConsoleResponse;
pub use aio_console_core::upload::FileUpload;
pub use aio_console_core::Error;
pub use client::{ConsoleClient, ConsoleClientBuilder};
pub use models::{
    AdobeIdIntegrationDetails, ApplicationPage, CredentialType, ProjectDetails, ProjectType,
    ServiceSubscription, WorkspaceDetails,
};
pub use operation::ConsoleOperation;

/// Convenient result alias that reuses the shared Console error type.
pub type Result<T> = aio_console_core::Result<T>;

/// Create a client for the given access token and API key.
///
/// `env` selects `prod` or `stage`; when `None` the environment is read from
/// `AIO_CLI_ENV` and defaults to prod.
///
/// # Errors
///
/// Returns [`Error::Initialization`] when the token or key is missing or the
/// environment name is unknown.
pub fn init(access_token: &str, api_key: &str, env: Option<&str>) -> Result<ConsoleClient> {
    let env = match env {
        Some(name) => name.parse::<Environment>()?,
        None => Environment::from_env()?,
    };
    ConsoleClient::builder(access_token, api_key).with_env(env).build()
}
