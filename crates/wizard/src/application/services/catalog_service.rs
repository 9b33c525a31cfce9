//! Catalog Service - loads service types and add-ons for the services step

use std::sync::Arc;

use tracker_domain::ServiceCatalog;
use tracker_shared::{catalog_request_headers, ServiceCatalogResponse, SERVICE_TYPES_PATH};

use crate::application::ServiceError;
use crate::ports::outbound::RawApiPort;

#[derive(Clone)]
pub struct CatalogService {
    api: Arc<dyn RawApiPort>,
}

impl CatalogService {
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self { api }
    }

    /// Fetch the combined catalog. Every call goes to the network.
    pub async fn load(&self, csrf_token: Option<&str>) -> Result<ServiceCatalog, ServiceError> {
        let headers = catalog_request_headers(csrf_token);
        let value = self.api.get_json(SERVICE_TYPES_PATH, &headers).await?;
        let catalog = ServiceCatalogResponse::from_value(value)?.into_catalog();

        tracing::debug!(
            service_types = catalog.service_types.len(),
            service_addons = catalog.service_addons.len(),
            "Loaded service catalog"
        );
        Ok(catalog)
    }
}
