//! Request models for the Console API.
//!
//! Responses are returned as [`ConsoleResponse`](aio_console_core::response::ConsoleResponse)
//! envelopes; callers deserialize them with `ConsoleResponse::json`.

use aio_console_core::query::QueryParams;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use validator::Validate;

/// Kind of project created in an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Regular project
    #[default]
    Default,
    /// Project created from the Jaeger template
    Jaeger,
}

/// Project details sent when creating or editing a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProjectDetails {
    /// Name
    #[validate(length(min = 1))]
    pub name: String,
    /// Title
    #[validate(length(min = 1))]
    pub title: String,
    /// Creator name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub who_created: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Project type
    #[serde(rename = "type", default)]
    pub project_type: ProjectType,
}

impl ProjectDetails {
    /// Create details with the required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            who_created: None,
            description: None,
            project_type: ProjectType::Default,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the creator name.
    #[must_use]
    pub fn with_who_created(mut self, who_created: impl Into<String>) -> Self {
        self.who_created = Some(who_created.into());
        self
    }

    /// Set the project type.
    #[must_use]
    pub const fn with_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = project_type;
        self
    }
}

/// Workspace details sent when creating or editing a workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceDetails {
    /// Name
    #[validate(length(min = 1))]
    pub name: String,
    /// Title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Creator name
    #[serde(default, rename = "who_created", skip_serializing_if = "Option::is_none")]
    pub who_created: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Workspace type
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub workspace_type: Option<String>,
    /// Quota rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_rule: Option<String>,
}

impl WorkspaceDetails {
    /// Create details with the required name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Details of an AdobeID (or Analytics) credential or integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdobeIdIntegrationDetails {
    /// Name
    #[validate(length(min = 1))]
    pub name: String,
    /// Description
    #[validate(length(min = 1))]
    pub description: String,
    /// Platform, e.g. `WebApp`, `SinglePageApp` or `iOS`
    #[validate(length(min = 1))]
    pub platform: String,
    /// URL scheme for native apps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_scheme: Option<String>,
    /// Allowed redirect URI patterns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri_list: Option<Vec<String>>,
    /// Default redirect URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_redirect_uri: Option<String>,
    /// Domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Approval information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_info: Option<Value>,
}

impl AdobeIdIntegrationDetails {
    /// Create details with the required fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            platform: platform.into(),
            url_scheme: None,
            redirect_uri_list: None,
            default_redirect_uri: None,
            domain: None,
            approval_info: None,
        }
    }

    /// Set the redirect URIs; the first one becomes the default.
    #[must_use]
    pub fn with_redirect_uris<I, S>(mut self, uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let uris: Vec<String> = uris.into_iter().map(Into::into).collect();
        self.default_redirect_uri = uris.first().cloned();
        self.redirect_uri_list = Some(uris);
        self
    }

    /// Set the domain.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

/// Service subscription entry for credentials and integrations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSubscription {
    /// SDK code of the service
    #[validate(length(min = 1))]
    pub sdk_code: String,
    /// License configurations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_configs: Option<Vec<Value>>,
    /// Roles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Value>>,
    /// Atlas plan code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atlas_plan_code: Option<String>,
}

impl ServiceSubscription {
    /// Subscribe to the service with the given SDK code.
    #[must_use]
    pub fn new(sdk_code: impl Into<String>) -> Self {
        Self {
            sdk_code: sdk_code.into(),
            license_configs: None,
            roles: None,
            atlas_plan_code: None,
        }
    }

    /// Set the license configurations.
    #[must_use]
    pub fn with_license_configs(mut self, configs: Vec<Value>) -> Self {
        self.license_configs = Some(configs);
        self
    }

    /// Set the roles.
    #[must_use]
    pub fn with_roles(mut self, roles: Vec<Value>) -> Self {
        self.roles = Some(roles);
        self
    }
}

/// Credential flavour used in credential paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialType {
    /// AdobeID (OAuth) credential
    AdobeId,
    /// Analytics credential
    Analytics,
    /// Enterprise (service account) credential
    #[serde(rename = "entp")]
    Enterprise,
}

impl CredentialType {
    /// Path segment for this credential type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AdobeId => "adobeid",
            Self::Analytics => "analytics",
            Self::Enterprise => "entp",
        }
    }
}

impl fmt::Display for CredentialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paging window for App Registry listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationPage {
    /// Index of the first element
    pub offset: u32,
    /// Number of elements to return
    pub page_size: u32,
}

impl ApplicationPage {
    /// Create a page window.
    #[must_use]
    pub const fn new(offset: u32, page_size: u32) -> Self {
        Self { offset, page_size }
    }

    /// Query parameters for the window.
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("offset", self.offset);
        params.push("pageSize", self.page_size);
        params
    }
}

impl Default for ApplicationPage {
    fn default() -> Self {
        Self::new(0, 50)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubmitApplicationRequest<'a> {
    pub submitter_notes: &'a str,
}
