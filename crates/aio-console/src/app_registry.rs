//! App Registry (Exchange) application operations.

use crate::client::ConsoleClient;
use crate::models::{ApplicationPage, SubmitApplicationRequest};
use crate::operation::ConsoleOperation;
use crate::Result;
use aio_console_core::request::RequestOptions;
use aio_console_core::response::ConsoleResponse;
use aio_console_core::upload::{FileUpload, MultipartForm};
use serde::Serialize;

impl ConsoleClient {
    fn application_options(&self, organization_id: &str, application_id: &str) -> RequestOptions {
        self.org_options(organization_id)
            .with_parameter("appId", application_id)
    }

    /// Validate an application name.
    pub async fn validate_application_name(
        &self,
        organization_id: &str,
        application_name: &str,
    ) -> Result<ConsoleResponse> {
        let options = self
            .org_options(organization_id)
            .with_parameter("appName", application_name);
        self.call(ConsoleOperation::ValidateApplicationName, Ok(options))
            .await
    }

    /// Get application details by ID.
    pub async fn get_application_by_id(
        &self,
        organization_id: &str,
        application_id: &str,
    ) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::GetApplicationById,
            Ok(self.application_options(organization_id, application_id)),
        )
        .await
    }

    /// Patch an application with the given details.
    pub async fn update_application<B>(
        &self,
        organization_id: &str,
        application_id: &str,
        application_details: &B,
    ) -> Result<ConsoleResponse>
    where
        B: Serialize + ?Sized,
    {
        let options = self
            .application_options(organization_id, application_id)
            .with_json_body(application_details);
        self.call(ConsoleOperation::UpdateApplication, options).await
    }

    /// Delete an application.
    pub async fn delete_application(
        &self,
        organization_id: &str,
        application_id: &str,
    ) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::DeleteApplication,
            Ok(self.application_options(organization_id, application_id)),
        )
        .await
    }

    /// Get application details by name.
    pub async fn get_application_by_name(
        &self,
        organization_id: &str,
        application_name: &str,
    ) -> Result<ConsoleResponse> {
        let options = self
            .org_options(organization_id)
            .with_parameter("appName", application_name);
        self.call(ConsoleOperation::GetApplicationByName, Ok(options))
            .await
    }

    /// Submit an application for review.
    pub async fn submit_application(
        &self,
        organization_id: &str,
        application_id: &str,
        submitter_notes: &str,
    ) -> Result<ConsoleResponse> {
        let options = self
            .application_options(organization_id, application_id)
            .with_json_body(&SubmitApplicationRequest { submitter_notes });
        self.call(ConsoleOperation::SubmitApplication, options).await
    }

    /// Get one page of the caller's applications.
    pub async fn get_all_applications_for_user(
        &self,
        organization_id: &str,
        page: ApplicationPage,
    ) -> Result<ConsoleResponse> {
        let options = self
            .org_options(organization_id)
            .with_parameters(page.to_params().into_pairs());
        self.call(ConsoleOperation::GetAllApplicationsForUser, Ok(options))
            .await
    }

    /// Upload the application icon (512x512 PNG or JPEG).
    pub async fn upload_application_icon(
        &self,
        organization_id: &str,
        application_id: &str,
        icon: FileUpload,
    ) -> Result<ConsoleResponse> {
        let options = self
            .application_options(organization_id, application_id)
            .with_multipart(MultipartForm::new().file("icon", icon));
        self.call(ConsoleOperation::UploadApplicationIcon, Ok(options))
            .await
    }

    /// Check App Registry health.
    pub async fn get_app_registry_health(&self, organization_id: &str) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::GetAppRegistryHealth,
            Ok(self.org_options(organization_id)),
        )
        .await
    }
}
