//! Organization integration operations.

use crate::client::{validated, ConsoleClient};
use crate::credentials::validate_all;
use crate::models::{AdobeIdIntegrationDetails, ServiceSubscription};
use crate::operation::ConsoleOperation;
use crate::Result;
use aio_console_core::request::RequestOptions;
use aio_console_core::response::ConsoleResponse;
use aio_console_core::upload::{FileUpload, MultipartForm};

impl ConsoleClient {
    fn integration_options(&self, organization_id: &str, integration_id: &str) -> RequestOptions {
        self.org_options(organization_id)
            .with_parameter("intId", integration_id)
    }

    /// Get all integrations of an organization.
    pub async fn get_integrations_for_org(&self, organization_id: &str) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::GetIntegrationsForOrg,
            Ok(self.org_options(organization_id)),
        )
        .await
    }

    /// Create an enterprise integration from a public certificate.
    pub async fn create_enterprise_integration(
        &self,
        organization_id: &str,
        certificate: FileUpload,
        name: &str,
        description: &str,
    ) -> Result<ConsoleResponse> {
        let form = MultipartForm::new()
            .file("certificate", certificate)
            .text("name", name)
            .text("description", description);
        let options = self.org_options(organization_id).with_multipart(form);
        self.call(ConsoleOperation::CreateEnterpriseIntegration, Ok(options))
            .await
    }

    /// Create an AdobeID integration.
    pub async fn create_adobe_id_integration(
        &self,
        organization_id: &str,
        integration_details: &AdobeIdIntegrationDetails,
    ) -> Result<ConsoleResponse> {
        let options = validated(integration_details)
            .and_then(|details| self.org_options(organization_id).with_json_body(details));
        self.call(ConsoleOperation::CreateAdobeIdIntegration, options)
            .await
    }

    /// Update an AdobeID integration.
    pub async fn update_adobe_id_integration(
        &self,
        organization_id: &str,
        integration_id: &str,
        integration_details: &AdobeIdIntegrationDetails,
    ) -> Result<ConsoleResponse> {
        let options = validated(integration_details).and_then(|details| {
            self.integration_options(organization_id, integration_id)
                .with_json_body(details)
        });
        self.call(ConsoleOperation::UpdateAdobeIdIntegration, options)
            .await
    }

    /// Subscribe an AdobeID integration to services.
    pub async fn subscribe_adobe_id_integration_to_services(
        &self,
        organization_id: &str,
        integration_id: &str,
        service_info: &[ServiceSubscription],
    ) -> Result<ConsoleResponse> {
        let options = validate_all(service_info).and_then(|()| {
            self.integration_options(organization_id, integration_id)
                .with_json_body(service_info)
        });
        self.call(ConsoleOperation::SubscribeAdobeIdIntegrationToServices, options)
            .await
    }

    /// Subscribe an enterprise integration to services.
    pub async fn subscribe_enterprise_integration_to_services(
        &self,
        organization_id: &str,
        integration_id: &str,
        service_info: &[ServiceSubscription],
    ) -> Result<ConsoleResponse> {
        let options = validate_all(service_info).and_then(|()| {
            self.integration_options(organization_id, integration_id)
                .with_json_body(service_info)
        });
        self.call(ConsoleOperation::SubscribeEnterpriseIntegrationToServices, options)
            .await
    }

    /// List the certificate bindings of an integration.
    pub async fn get_bindings_for_integration(
        &self,
        organization_id: &str,
        integration_id: &str,
    ) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::GetBindingsForIntegration,
            Ok(self.integration_options(organization_id, integration_id)),
        )
        .await
    }

    /// Upload a certificate and bind it to an integration.
    pub async fn upload_and_bind_certificate(
        &self,
        organization_id: &str,
        integration_id: &str,
        certificate: FileUpload,
    ) -> Result<ConsoleResponse> {
        let options = self
            .integration_options(organization_id, integration_id)
            .with_multipart(MultipartForm::new().file("certificate", certificate));
        self.call(ConsoleOperation::UploadAndBindCertificate, Ok(options))
            .await
    }

    /// Delete a certificate binding.
    pub async fn delete_binding(
        &self,
        organization_id: &str,
        integration_id: &str,
        binding_id: &str,
    ) -> Result<ConsoleResponse> {
        let options = self
            .integration_options(organization_id, integration_id)
            .with_parameter("bindingId", binding_id);
        self.call(ConsoleOperation::DeleteBinding, Ok(options)).await
    }

    /// Get integration details.
    pub async fn get_integration(
        &self,
        organization_id: &str,
        integration_id: &str,
    ) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::GetIntegration,
            Ok(self.integration_options(organization_id, integration_id)),
        )
        .await
    }

    /// Get integration secrets.
    pub async fn get_integration_secrets(
        &self,
        organization_id: &str,
        integration_id: &str,
    ) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::GetIntegrationSecrets,
            Ok(self.integration_options(organization_id, integration_id)),
        )
        .await
    }

    /// Delete an integration.
    pub async fn delete_integration(
        &self,
        organization_id: &str,
        integration_id: &str,
    ) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::DeleteIntegration,
            Ok(self.integration_options(organization_id, integration_id)),
        )
        .await
    }

    /// Get the Atlas application policy of an integration.
    pub async fn get_atlas_application_policy(
        &self,
        organization_id: &str,
        integration_id: &str,
    ) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::GetAtlasApplicationPolicy,
            Ok(self.integration_options(organization_id, integration_id)),
        )
        .await
    }

    /// Get the Atlas quota usage of an integration.
    pub async fn get_atlas_quota_usage(
        &self,
        organization_id: &str,
        integration_id: &str,
    ) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::GetAtlasQuotaUsage,
            Ok(self.integration_options(organization_id, integration_id)),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::*;
    use crate::models::{AdobeIdIntegrationDetails, ServiceSubscription};
    use aio_console_core::upload::FileUpload;
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const INTEGRATIONS: &str = "/console/organizations/42/integrations";

    #[tokio::test]
    async fn list_and_get_integration() {
        let server = MockServer::start().await;
        expect_json(&server, "GET", INTEGRATIONS, json!({ "content": [{ "id": "i1" }] })).await;
        expect_json(&server, "GET", &format!("{INTEGRATIONS}/i1"), json!({ "id": "i1" })).await;
        expect_json(
            &server,
            "GET",
            &format!("{INTEGRATIONS}/i1/secrets"),
            json!({ "client_id": "abc", "client_secrets": [] }),
        )
        .await;

        let client = test_client(&server);
        let listed = client.get_integrations_for_org("42").await.unwrap();
        assert_eq!(listed.body["content"][0]["id"], "i1");
        client.get_integration("42", "i1").await.unwrap();
        let secrets = client.get_integration_secrets("42", "i1").await.unwrap();
        assert_eq!(secrets.body["client_id"], "abc");
    }

    #[tokio::test]
    async fn create_enterprise_integration_uploads_form() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("{INTEGRATIONS}/entp").as_str()))
            .and(body_string_contains("name=\"description\""))
            .and(body_string_contains("service account"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "i2" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let res = client
            .create_enterprise_integration(
                "42",
                FileUpload::new("cert.pem", "-----BEGIN CERTIFICATE-----"),
                "svc",
                "service account",
            )
            .await
            .unwrap();
        assert_eq!(res.body["id"], "i2");
    }

    #[tokio::test]
    async fn create_and_update_adobe_id_integration() {
        let server = MockServer::start().await;
        let details = AdobeIdIntegrationDetails::new("spa", "single page", "SinglePageApp");
        let body = json!({ "name": "spa", "description": "single page", "platform": "SinglePageApp" });

        Mock::given(method("POST"))
            .and(path(format!("{INTEGRATIONS}/adobeid").as_str()))
            .and(body_json(body.clone()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "i3" })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path(format!("{INTEGRATIONS}/adobeid/i3").as_str()))
            .and(body_json(body))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "i3" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.create_adobe_id_integration("42", &details).await.unwrap();
        client
            .update_adobe_id_integration("42", "i3", &details)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn subscribe_integrations_to_services() {
        let server = MockServer::start().await;
        let services = [ServiceSubscription::new("AdobeAnalyticsSDK")
            .with_license_configs(vec![json!({ "id": "lc1", "op": "add" })])];
        let body = json!([{
            "sdkCode": "AdobeAnalyticsSDK",
            "licenseConfigs": [{ "id": "lc1", "op": "add" }]
        }]);

        for flavour in ["adobeid", "entp"] {
            Mock::given(method("PUT"))
                .and(path(format!("{INTEGRATIONS}/{flavour}/i1/services").as_str()))
                .and(body_json(body.clone()))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
                .expect(1)
                .mount(&server)
                .await;
        }

        let client = test_client(&server);
        client
            .subscribe_adobe_id_integration_to_services("42", "i1", &services)
            .await
            .unwrap();
        client
            .subscribe_enterprise_integration_to_services("42", "i1", &services)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn certificate_bindings() {
        let server = MockServer::start().await;
        expect_json(
            &server,
            "GET",
            &format!("{INTEGRATIONS}/i1/bindings"),
            json!([{ "certificateFingerprint": "ab:cd", "bindingId": "b1" }]),
        )
        .await;
        Mock::given(method("POST"))
            .and(path(format!("{INTEGRATIONS}/i1/bindings").as_str()))
            .and(body_string_contains("name=\"certificate\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "bindingId": "b2" })))
            .expect(1)
            .mount(&server)
            .await;
        expect_json(&server, "DELETE", &format!("{INTEGRATIONS}/i1/bindings/b1"), json!({})).await;

        let client = test_client(&server);
        let bindings = client.get_bindings_for_integration("42", "i1").await.unwrap();
        assert_eq!(bindings.body[0]["bindingId"], "b1");

        let bound = client
            .upload_and_bind_certificate("42", "i1", FileUpload::new("new.pem", "-----BEGIN"))
            .await
            .unwrap();
        assert_eq!(bound.body["bindingId"], "b2");

        client.delete_binding("42", "i1", "b1").await.unwrap();
    }

    #[tokio::test]
    async fn atlas_policy_and_quota() {
        let server = MockServer::start().await;
        expect_json(&server, "GET", &format!("{INTEGRATIONS}/i1/policy"), json!({ "policy": "gold" })).await;
        expect_json(&server, "GET", &format!("{INTEGRATIONS}/i1/quota"), json!({ "used": 10 })).await;

        let client = test_client(&server);
        let policy = client.get_atlas_application_policy("42", "i1").await.unwrap();
        assert_eq!(policy.body["policy"], "gold");
        let quota = client.get_atlas_quota_usage("42", "i1").await.unwrap();
        assert_eq!(quota.body["used"], 10);
    }

    #[tokio::test]
    async fn delete_integration_error_is_coded() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(format!("{INTEGRATIONS}/i1").as_str()))
            .respond_with(ResponseTemplate::new(409).set_body_string("has bindings"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.delete_integration("42", "i1").await.unwrap_err();
        assert_eq!(err.error_code(), "ERROR_DELETE_INTEGRATION");
        assert_eq!(err.status(), Some(409));
        assert!(err.to_string().contains("409 - Conflict (has bindings)"));
    }
}
