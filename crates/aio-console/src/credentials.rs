//! Workspace credential operations.

use crate::client::{validated, ConsoleClient};
use crate::models::{AdobeIdIntegrationDetails, CredentialType, ServiceSubscription};
use crate::operation::ConsoleOperation;
use crate::Result;
use aio_console_core::response::ConsoleResponse;
use aio_console_core::upload::{FileUpload, MultipartForm};
use validator::Validate;

impl ConsoleClient {
    /// Get all credentials of a workspace.
    pub async fn get_credentials(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
    ) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::GetCredentials,
            Ok(self.workspace_options(organization_id, project_id, workspace_id)),
        )
        .await
    }

    /// Create an enterprise credential from a public certificate.
    pub async fn create_enterprise_credential(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
        certificate: FileUpload,
        name: &str,
        description: &str,
    ) -> Result<ConsoleResponse> {
        let form = MultipartForm::new()
            .file("certificate", certificate)
            .text("name", name)
            .text("description", description);
        let options = self
            .workspace_options(organization_id, project_id, workspace_id)
            .with_multipart(form);
        self.call(ConsoleOperation::CreateEnterpriseCredential, Ok(options))
            .await
    }

    /// Create an AdobeID credential.
    pub async fn create_adobe_id_credential(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
        credential_details: &AdobeIdIntegrationDetails,
    ) -> Result<ConsoleResponse> {
        let options = validated(credential_details).and_then(|details| {
            self.workspace_options(organization_id, project_id, workspace_id)
                .with_json_body(details)
        });
        self.call(ConsoleOperation::CreateAdobeIdCredential, options)
            .await
    }

    /// Create an Analytics credential.
    pub async fn create_analytics_credential(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
        credential_details: &AdobeIdIntegrationDetails,
    ) -> Result<ConsoleResponse> {
        let options = validated(credential_details).and_then(|details| {
            self.workspace_options(organization_id, project_id, workspace_id)
                .with_json_body(details)
        });
        self.call(ConsoleOperation::CreateAnalyticsCredential, options)
            .await
    }

    /// Subscribe a workspace credential to services.
    pub async fn subscribe_credential_to_services(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
        credential_type: CredentialType,
        credential_id: &str,
        service_info: &[ServiceSubscription],
    ) -> Result<ConsoleResponse> {
        let options = validate_all(service_info).and_then(|()| {
            self.workspace_options(organization_id, project_id, workspace_id)
                .with_parameter("credentialType", credential_type)
                .with_parameter("credentialId", credential_id)
                .with_json_body(service_info)
        });
        self.call(ConsoleOperation::SubscribeCredentialToServices, options)
            .await
    }

    /// Delete a workspace credential.
    pub async fn delete_credential(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
        credential_type: CredentialType,
        credential_id: &str,
    ) -> Result<ConsoleResponse> {
        let options = self
            .workspace_options(organization_id, project_id, workspace_id)
            .with_parameter("credentialType", credential_type)
            .with_parameter("credentialId", credential_id);
        self.call(ConsoleOperation::DeleteCredential, Ok(options))
            .await
    }
}

pub(crate) fn validate_all(service_info: &[ServiceSubscription]) -> Result<()> {
    for subscription in service_info {
        subscription.validate()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::*;
    use crate::models::{AdobeIdIntegrationDetails, CredentialType, ServiceSubscription};
    use crate::Error;
    use aio_console_core::upload::FileUpload;
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const WORKSPACE_PATH: &str = "/console/organizations/42/projects/p1/workspaces/w1";

    #[tokio::test]
    async fn get_credentials() {
        let server = MockServer::start().await;
        expect_json(
            &server,
            "GET",
            &format!("{WORKSPACE_PATH}/credentials"),
            json!([{ "id_integration": "c1", "flow_type": "entp" }]),
        )
        .await;

        let client = test_client(&server);
        let res = client.get_credentials("42", "p1", "w1").await.unwrap();
        assert_eq!(res.body[0]["flow_type"], "entp");
    }

    #[tokio::test]
    async fn create_enterprise_credential_uploads_certificate() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("{WORKSPACE_PATH}/credentials/entp").as_str()))
            .and(body_string_contains("name=\"certificate\"; filename=\"cert.pem\""))
            .and(body_string_contains("-----BEGIN CERTIFICATE-----"))
            .and(body_string_contains("ci-credential"))
            .and(body_string_contains("used by CI"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "c1" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let certificate = FileUpload::new("cert.pem", "-----BEGIN CERTIFICATE-----\n");
        let res = client
            .create_enterprise_credential("42", "p1", "w1", certificate, "ci-credential", "used by CI")
            .await
            .unwrap();
        assert_eq!(res.body["id"], "c1");
    }

    #[tokio::test]
    async fn create_adobe_id_and_analytics_credentials() {
        let server = MockServer::start().await;
        let details = AdobeIdIntegrationDetails::new("web", "web app", "WebApp")
            .with_redirect_uris(["https://example.com/callback"])
            .with_domain("example.com");
        let expected = json!({
            "name": "web",
            "description": "web app",
            "platform": "WebApp",
            "redirectUriList": ["https://example.com/callback"],
            "defaultRedirectUri": "https://example.com/callback",
            "domain": "example.com"
        });

        for flavour in ["adobeid", "analytics"] {
            Mock::given(method("POST"))
                .and(path(format!("{WORKSPACE_PATH}/credentials/{flavour}").as_str()))
                .and(body_json(expected.clone()))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": flavour })))
                .expect(1)
                .mount(&server)
                .await;
        }

        let client = test_client(&server);
        let adobe_id = client
            .create_adobe_id_credential("42", "p1", "w1", &details)
            .await
            .unwrap();
        assert_eq!(adobe_id.body["id"], "adobeid");

        let analytics = client
            .create_analytics_credential("42", "p1", "w1", &details)
            .await
            .unwrap();
        assert_eq!(analytics.body["id"], "analytics");
    }

    #[tokio::test]
    async fn subscribe_credential_to_services_puts_service_info() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!("{WORKSPACE_PATH}/credentials/entp/c1/services").as_str()))
            .and(body_json(json!([{ "sdkCode": "AdobeIOManagementAPISDK", "roles": [] }])))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sdkList": ["AdobeIOManagementAPISDK"] })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let services = [ServiceSubscription::new("AdobeIOManagementAPISDK").with_roles(vec![])];
        let res = client
            .subscribe_credential_to_services("42", "p1", "w1", CredentialType::Enterprise, "c1", &services)
            .await
            .unwrap();
        assert_eq!(res.body["sdkList"][0], "AdobeIOManagementAPISDK");
    }

    #[tokio::test]
    async fn subscribe_rejects_empty_sdk_code() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        let err = client
            .subscribe_credential_to_services(
                "42",
                "p1",
                "w1",
                CredentialType::AdobeId,
                "c1",
                &[ServiceSubscription::new("")],
            )
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "ERROR_SUBSCRIBE_CREDENTIAL_TO_SERVICES");
        assert!(matches!(err.root_cause(), Error::ValidationError(_)));
    }

    #[tokio::test]
    async fn delete_credential_uses_type_segment() {
        let server = MockServer::start().await;
        expect_json(
            &server,
            "DELETE",
            &format!("{WORKSPACE_PATH}/credentials/analytics/c9"),
            json!({}),
        )
        .await;

        let client = test_client(&server);
        client
            .delete_credential("42", "p1", "w1", CredentialType::Analytics, "c9")
            .await
            .unwrap();
    }
}
