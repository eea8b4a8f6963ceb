//! Organization operations.

use crate::client::ConsoleClient;
use crate::operation::ConsoleOperation;
use crate::Result;
use aio_console_core::response::ConsoleResponse;

impl ConsoleClient {
    /// Get all organizations the caller belongs to.
    pub async fn get_organizations(&self) -> Result<ConsoleResponse> {
        self.call(ConsoleOperation::GetOrganizations, Ok(self.options()))
            .await
    }

    /// Create an IMS organization.
    pub async fn create_ims_org(&self) -> Result<ConsoleResponse> {
        self.call(ConsoleOperation::CreateImsOrg, Ok(self.options()))
            .await
    }

    /// Get all services available to an organization.
    pub async fn get_services_for_org(&self, organization_id: &str) -> Result<ConsoleResponse> {
        self.call(
            ConsoleOperation::GetServicesForOrg,
            Ok(self.org_options(organization_id)),
        )
        .await
    }
}
