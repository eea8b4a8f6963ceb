//! Catalogue of Console operations.
//!
//! Each operation names its REST endpoint and the error code reported when
//! it fails.

use aio_console_core::endpoint::Endpoint;
use reqwest::Method;

macro_rules! operations {
    ($($(#[$meta:meta])* $name:ident => $code:literal, $method:ident $path:literal;)+) => {
        /// A Console API operation.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ConsoleOperation {
            $($(#[$meta])* $name,)+
        }

        impl ConsoleOperation {
            /// Every operation, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$name,)+];

            /// Error code reported when the operation fails.
            #[must_use]
            pub const fn code(self) -> &'static str {
                match self {
                    $(Self::$name => $code,)+
                }
            }

            /// The REST endpoint the operation calls.
            #[must_use]
            pub fn endpoint(self) -> Endpoint {
                match self {
                    $(Self::$name => Endpoint::new(Method::$method, $path),)+
                }
            }
        }
    };
}

operations! {
    /// List organizations
    GetOrganizations => "ERROR_GET_ORGANIZATIONS", GET "/console/organizations";
    /// Create an IMS organization
    CreateImsOrg => "ERROR_CREATE_IMS_ORG", POST "/console/organizations";
    /// List services available to an organization
    GetServicesForOrg => "ERROR_GET_SERVICES_FOR_ORG", GET "/console/organizations/{orgId}/services";

    /// List projects of an organization
    GetProjectsForOrg => "ERROR_GET_PROJECTS", GET "/console/organizations/{orgId}/projects";
    /// Create a project
    CreateProject => "ERROR_CREATE_PROJECT", POST "/console/organizations/{orgId}/projects";
    /// Create a project from the Firefly template
    CreateFireflyProject => "ERROR_CREATE_FIREFLY_PROJECT", POST "/console/organizations/{orgId}/projects/templates/firefly";
    /// Get a project
    GetProject => "ERROR_GET_PROJECT", GET "/console/organizations/{orgId}/projects/{projectId}";
    /// Edit a project
    EditProject => "ERROR_EDIT_PROJECT", PATCH "/console/organizations/{orgId}/projects/{projectId}";
    /// Delete a project
    DeleteProject => "ERROR_DELETE_PROJECT", DELETE "/console/organizations/{orgId}/projects/{projectId}";
    /// Get the project owning a workspace
    GetProjectForWorkspace => "ERROR_GET_PROJECT_FOR_WORKSPACE", GET "/console/organizations/{orgId}/workspaces/{workspaceId}/project";

    /// List workspaces of a project
    GetWorkspacesForProject => "ERROR_GET_WORKSPACES", GET "/console/organizations/{orgId}/projects/{projectId}/workspaces";
    /// Create a workspace
    CreateWorkspace => "ERROR_CREATE_WORKSPACE", POST "/console/organizations/{orgId}/projects/{projectId}/workspaces";
    /// Get a workspace
    GetWorkspace => "ERROR_GET_WORKSPACE", GET "/console/organizations/{orgId}/projects/{projectId}/workspaces/{workspaceId}";
    /// Edit a workspace
    EditWorkspace => "ERROR_EDIT_WORKSPACE", PATCH "/console/organizations/{orgId}/projects/{projectId}/workspaces/{workspaceId}";
    /// Delete a workspace
    DeleteWorkspace => "ERROR_DELETE_WORKSPACE", DELETE "/console/organizations/{orgId}/projects/{projectId}/workspaces/{workspaceId}";
    /// Download the workspace configuration file
    DownloadWorkspaceJson => "ERROR_DOWNLOAD_WORKSPACE_JSON", GET "/console/organizations/{orgId}/projects/{projectId}/workspaces/{workspaceId}/download";
    /// Create a Runtime namespace in a workspace
    CreateRuntimeNamespace => "ERROR_CREATE_RUNTIME_NAMESPACE", POST "/console/organizations/{orgId}/projects/{projectId}/workspaces/{workspaceId}/namespace";
    /// List plugins of a workspace
    GetPluginsForWorkspace => "ERROR_GET_PLUGINS_FOR_WORKSPACE", GET "/console/organizations/{orgId}/projects/{projectId}/workspaces/{workspaceId}/plugins";
    /// Get the workspace of a credential
    GetWorkspaceForCredential => "ERROR_GET_WORKSPACE_FOR_CREDENTIAL", GET "/console/organizations/{orgId}/credentials/{credentialId}/workspace";

    /// List credentials of a workspace
    GetCredentials => "ERROR_GET_CREDENTIALS", GET "/console/organizations/{orgId}/projects/{projectId}/workspaces/{workspaceId}/credentials";
    /// Create an enterprise credential
    CreateEnterpriseCredential => "ERROR_CREATE_ENTERPRISE_CREDENTIAL", POST "/console/organizations/{orgId}/projects/{projectId}/workspaces/{workspaceId}/credentials/entp";
    /// Create an AdobeID credential
    CreateAdobeIdCredential => "ERROR_CREATE_ADOBEID_CREDENTIAL", POST "/console/organizations/{orgId}/projects/{projectId}/workspaces/{workspaceId}/credentials/adobeid";
    /// Create an Analytics credential
    CreateAnalyticsCredential => "ERROR_CREATE_ANALYTICS_CREDENTIAL", POST "/console/organizations/{orgId}/projects/{projectId}/workspaces/{workspaceId}/credentials/analytics";
    /// Subscribe a credential to services
    SubscribeCredentialToServices => "ERROR_SUBSCRIBE_CREDENTIAL_TO_SERVICES", PUT "/console/organizations/{orgId}/projects/{projectId}/workspaces/{workspaceId}/credentials/{credentialType}/{credentialId}/services";
    /// Delete a credential
    DeleteCredential => "ERROR_DELETE_CREDENTIAL", DELETE "/console/organizations/{orgId}/projects/{projectId}/workspaces/{workspaceId}/credentials/{credentialType}/{credentialId}";

    /// List integrations of an organization
    GetIntegrationsForOrg => "ERROR_GET_INTEGRATIONS_FOR_ORG", GET "/console/organizations/{orgId}/integrations";
    /// Create an enterprise integration
    CreateEnterpriseIntegration => "ERROR_CREATE_ENTERPRISE_INTEGRATION", POST "/console/organizations/{orgId}/integrations/entp";
    /// Create an AdobeID integration
    CreateAdobeIdIntegration => "ERROR_CREATE_ADOBEID_INTEGRATION", POST "/console/organizations/{orgId}/integrations/adobeid";
    /// Update an AdobeID integration
    UpdateAdobeIdIntegration => "ERROR_UPDATE_ADOBEID_INTEGRATION", PUT "/console/organizations/{orgId}/integrations/adobeid/{intId}";
    /// Subscribe an AdobeID integration to services
    SubscribeAdobeIdIntegrationToServices => "ERROR_SUBSCRIBE_ADOBEID_INTEGRATION_TO_SERVICES", PUT "/console/organizations/{orgId}/integrations/adobeid/{intId}/services";
    /// Subscribe an enterprise integration to services
    SubscribeEnterpriseIntegrationToServices => "ERROR_SUBSCRIBE_ENTERPRISE_INTEGRATION_TO_SERVICES", PUT "/console/organizations/{orgId}/integrations/entp/{intId}/services";
    /// List certificate bindings of an integration
    GetBindingsForIntegration => "ERROR_GET_BINDINGS_FOR_INTEGRATION", GET "/console/organizations/{orgId}/integrations/{intId}/bindings";
    /// Upload a certificate and bind it to an integration
    UploadAndBindCertificate => "ERROR_UPLOAD_AND_BIND_CERTIFICATE", POST "/console/organizations/{orgId}/integrations/{intId}/bindings";
    /// Delete a certificate binding
    DeleteBinding => "ERROR_DELETE_BINDING", DELETE "/console/organizations/{orgId}/integrations/{intId}/bindings/{bindingId}";
    /// Get an integration
    GetIntegration => "ERROR_GET_INTEGRATION", GET "/console/organizations/{orgId}/integrations/{intId}";
    /// Get the secrets of an integration
    GetIntegrationSecrets => "ERROR_GET_INTEGRATION_SECRETS", GET "/console/organizations/{orgId}/integrations/{intId}/secrets";
    /// Delete an integration
    DeleteIntegration => "ERROR_DELETE_INTEGRATION", DELETE "/console/organizations/{orgId}/integrations/{intId}";
    /// Get the Atlas application policy of an integration
    GetAtlasApplicationPolicy => "ERROR_GET_ATLAS_APPLICATION_POLICY", GET "/console/organizations/{orgId}/integrations/{intId}/policy";
    /// Get the Atlas quota usage of an integration
    GetAtlasQuotaUsage => "ERROR_GET_ATLAS_QUOTA_USAGE", GET "/console/organizations/{orgId}/integrations/{intId}/quota";

    /// Validate an App Registry application name
    ValidateApplicationName => "ERROR_VALIDATE_APPLICATION_NAME", GET "/console/organizations/{orgId}/appRegistry/validate";
    /// Get an App Registry application
    GetApplicationById => "ERROR_GET_APPLICATION_BY_ID", GET "/console/organizations/{orgId}/appRegistry/{appId}";
    /// Patch an App Registry application
    UpdateApplication => "ERROR_UPDATE_APPLICATION", PATCH "/console/organizations/{orgId}/appRegistry/{appId}";
    /// Delete an App Registry application
    DeleteApplication => "ERROR_DELETE_APPLICATION", DELETE "/console/organizations/{orgId}/appRegistry/{appId}";
    /// Get an App Registry application by name
    GetApplicationByName => "ERROR_GET_APPLICATION_BY_NAME", GET "/console/organizations/{orgId}/appRegistry/name/{appName}";
    /// Submit an application for review
    SubmitApplication => "ERROR_SUBMIT_APPLICATION", POST "/console/organizations/{orgId}/appRegistry/{appId}/submit";
    /// List the user's App Registry applications
    GetAllApplicationsForUser => "ERROR_GET_ALL_APPLICATIONS_FOR_USER", GET "/console/organizations/{orgId}/appRegistry";
    /// Upload an application icon
    UploadApplicationIcon => "ERROR_UPLOAD_APPLICATION_ICON", PUT "/console/organizations/{orgId}/appRegistry/{appId}/icon";
    /// App Registry health check
    GetAppRegistryHealth => "ERROR_GET_APP_REGISTRY_HEALTH", GET "/console/organizations/{orgId}/appRegistry/health";
}
