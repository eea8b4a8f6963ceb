//! Workspace operations.

use crate::client::{validated, ConsoleClient};
use crate::models::WorkspaceDetails;
use crate::operation::ConsoleOperation;
use crate::Result;
use aio_console_core::response::ConsoleResponse;

impl ConsoleClient {
    /// Get all workspaces of a project.
    pub async fn get_workspaces_for_project(
        &self,
        organization_id: &str,
        project_id: &str,
    ) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::GetWorkspacesForProject,
            Ok(self.project_options(organization_id, project_id)),
        )
        .await
    }

    /// Create a new workspace.
    pub async fn create_workspace(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_details: &WorkspaceDetails,
    ) -> Result<ConsoleResponse> {
        let options = validated(workspace_details).and_then(|details| {
            self.project_options(organization_id, project_id)
                .with_json_body(details)
        });
        self.call(ConsoleOperation::CreateWorkspace, options).await
    }

    /// Get a workspace by ID.
    pub async fn get_workspace(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
    ) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::GetWorkspace,
            Ok(self.workspace_options(organization_id, project_id, workspace_id)),
        )
        .await
    }

    /// Edit a workspace.
    pub async fn edit_workspace(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
        workspace_details: &WorkspaceDetails,
    ) -> Result<ConsoleResponse> {
        let options = validated(workspace_details).and_then(|details| {
            self.workspace_options(organization_id, project_id, workspace_id)
                .with_json_body(details)
        });
        self.call(ConsoleOperation::EditWorkspace, options).await
    }

    /// Delete a workspace.
    pub async fn delete_workspace(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
    ) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::DeleteWorkspace,
            Ok(self.workspace_options(organization_id, project_id, workspace_id)),
        )
        .await
    }

    /// Download the workspace configuration file (JSON).
    pub async fn download_workspace_json(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
    ) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::DownloadWorkspaceJson,
            Ok(self.workspace_options(organization_id, project_id, workspace_id)),
        )
        .await
    }

    /// Create a Runtime namespace in a workspace.
    pub async fn create_runtime_namespace(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
    ) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::CreateRuntimeNamespace,
            Ok(self.workspace_options(organization_id, project_id, workspace_id)),
        )
        .await
    }

    /// Get the plugins of a workspace.
    pub async fn get_plugins_for_workspace(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
    ) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::GetPluginsForWorkspace,
            Ok(self.workspace_options(organization_id, project_id, workspace_id)),
        )
        .await
    }

    /// Get the workspace a credential belongs to.
    pub async fn get_workspace_for_credential(
        &self,
        organization_id: &str,
        credential_id: &str,
    ) -> Result<ConsoleResponse> {
        let options = self
            .org_options(organization_id)
            .with_parameter("credentialId", credential_id);
        self.call(ConsoleOperation::GetWorkspaceForCredential, Ok(options))
            .await
    }
}
