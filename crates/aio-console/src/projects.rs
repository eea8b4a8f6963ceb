//! Project operations.

use crate::client::{validated, ConsoleClient};
use crate::models::ProjectDetails;
use crate::operation::ConsoleOperation;
use crate::Result;
use aio_console_core::response::ConsoleResponse;

impl ConsoleClient {
    /// Get all projects in an organization.
    pub async fn get_projects_for_org(&self, organization_id: &str) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::GetProjectsForOrg,
            Ok(self.org_options(organization_id)),
        )
        .await
    }

    /// Create a new project in an organization.
    pub async fn create_project(
        &self,
        organization_id: &str,
        project_details: &ProjectDetails,
    ) -> Result<ConsoleResponse> {
        let options = validated(project_details)
            .and_then(|details| self.org_options(organization_id).with_json_body(details));
        self.call(ConsoleOperation::CreateProject, options).await
    }

    /// Create a new project from the Firefly template.
    pub async fn create_firefly_project(
        &self,
        organization_id: &str,
        project_details: &ProjectDetails,
    ) -> Result<ConsoleResponse> {
        let options = validated(project_details)
            .and_then(|details| self.org_options(organization_id).with_json_body(details));
        self.call(ConsoleOperation::CreateFireflyProject, options)
            .await
    }

    /// Get a project by ID.
    pub async fn get_project(
        &self,
        organization_id: &str,
        project_id: &str,
    ) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::GetProject,
            Ok(self.project_options(organization_id, project_id)),
        )
        .await
    }

    /// Edit a project.
    pub async fn edit_project(
        &self,
        organization_id: &str,
        project_id: &str,
        project_details: &ProjectDetails,
    ) -> Result<ConsoleResponse> {
        let options = validated(project_details).and_then(|details| {
            self.project_options(organization_id, project_id)
                .with_json_body(details)
        });
        self.call(ConsoleOperation::EditProject, options).await
    }

    /// Delete a project.
    pub async fn delete_project(
        &self,
        organization_id: &str,
        project_id: &str,
    ) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::DeleteProject,
            Ok(self.project_options(organization_id, project_id)),
        )
        .await
    }

    /// Get the project a workspace belongs to.
    pub async fn get_project_for_workspace(
        &self,
        organization_id: &str,
        workspace_id: &str,
    ) -> Result<ConsoleResponse> {
        let options = self
            .org_options(organization_id)
            .with_parameter("workspaceId", workspace_id);
        self.call(ConsoleOperation::GetProjectForWorkspace, Ok(options))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::*;
    use crate::models::{ProjectDetails, ProjectType};
    use crate::Error;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn get_projects_for_org() {
        let server = MockServer::start().await;
        expect_json(
            &server,
            "GET",
            "/console/organizations/42/projects",
            json!([{ "id": "p1", "name": "demo" }]),
        )
        .await;

        let client = test_client(&server);
        let res = client.get_projects_for_org("42").await.unwrap();
        assert_eq!(res.body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_project_sends_details() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/console/organizations/42/projects"))
            .and(body_json(json!({
                "name": "demo",
                "title": "Demo",
                "description": "a project",
                "type": "default"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "projectId": "p1",
                "workspaceId": "w1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let details = ProjectDetails::new("demo", "Demo").with_description("a project");
        let res = client.create_project("42", &details).await.unwrap();
        assert_eq!(res.status, 201);
        assert_eq!(res.body["projectId"], "p1");
    }

    #[tokio::test]
    async fn create_firefly_project_uses_template_endpoint() {
        let server = MockServer::start().await;
        expect_json(
            &server,
            "POST",
            "/console/organizations/42/projects/templates/firefly",
            json!({ "projectId": "p2" }),
        )
        .await;

        let client = test_client(&server);
        let details = ProjectDetails::new("ff", "Firefly app");
        let res = client.create_firefly_project("42", &details).await.unwrap();
        assert_eq!(res.body["projectId"], "p2");
    }

    #[tokio::test]
    async fn create_project_rejects_missing_name_locally() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .create_project("42", &ProjectDetails::new("", "Demo"))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "ERROR_CREATE_PROJECT");
        assert!(matches!(err.root_cause(), Error::ValidationError(_)));
    }

    #[tokio::test]
    async fn edit_project_patches() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/console/organizations/42/projects/p1"))
            .and(body_json(json!({ "name": "demo", "title": "New", "type": "jaeger" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "p1" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let details = ProjectDetails::new("demo", "New").with_type(ProjectType::Jaeger);
        client.edit_project("42", "p1", &details).await.unwrap();
    }

    #[tokio::test]
    async fn get_and_delete_project() {
        let server = MockServer::start().await;
        expect_json(
            &server,
            "GET",
            "/console/organizations/42/projects/p1",
            json!({ "id": "p1" }),
        )
        .await;
        Mock::given(method("DELETE"))
            .and(path("/console/organizations/42/projects/p1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        assert_eq!(client.get_project("42", "p1").await.unwrap().body["id"], "p1");

        let res = client.delete_project("42", "p1").await.unwrap();
        assert_eq!(res.status, 204);
        assert!(res.body.is_null());
    }

    #[tokio::test]
    async fn get_project_not_found_is_coded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/console/organizations/42/projects/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.get_project("42", "missing").await.unwrap_err();
        assert_eq!(err.error_code(), "ERROR_GET_PROJECT");
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn get_project_for_workspace() {
        let server = MockServer::start().await;
        expect_json(
            &server,
            "GET",
            "/console/organizations/42/workspaces/w1/project",
            json!({ "id": "p1" }),
        )
        .await;

        let client = test_client(&server);
        let res = client.get_project_for_workspace("42", "w1").await.unwrap();
        assert_eq!(res.body["id"], "p1");
    }
}
