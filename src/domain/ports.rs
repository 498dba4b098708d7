use crate::domain::model::{Addon, Quote, QuoteRequest, Service};
use crate::utils::error::{PricingError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only access to the service and addon catalogs.
pub trait CatalogProvider: Send + Sync {
    fn services(&self) -> &[Service];
    fn addons(&self) -> &[Addon];
    fn default_currency(&self) -> &str;
    fn supported_currencies(&self) -> &[String];

    fn find_service(&self, name: &str) -> Result<&Service> {
        self.services()
            .iter()
            .find(|service| service.name == name)
            .ok_or_else(|| PricingError::ServiceNotFound {
                name: name.to_string(),
            })
    }

    fn find_addon(&self, key: &str) -> Result<&Addon> {
        self.addons()
            .iter()
            .find(|addon| addon.key == key)
            .ok_or_else(|| PricingError::AddonNotFound {
                key: key.to_string(),
            })
    }

    fn supports_currency(&self, currency: &str) -> bool {
        self.supported_currencies().iter().any(|c| c == currency)
    }
}

impl<T: CatalogProvider + ?Sized> CatalogProvider for Arc<T> {
    fn services(&self) -> &[Service] {
        (**self).services()
    }

    fn addons(&self) -> &[Addon] {
        (**self).addons()
    }

    fn default_currency(&self) -> &str {
        (**self).default_currency()
    }

    fn supported_currencies(&self) -> &[String] {
        (**self).supported_currencies()
    }
}

/// Persistence seam for quote records, implemented by the embedding system.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    async fn insert(&self, request: QuoteRequest) -> Result<Quote>;
    async fn get(&self, id: u64) -> Result<Option<Quote>>;
    async fn save(&self, quote: &Quote) -> Result<()>;
}
