use crate::core::calculator::{self, PriceQuery};
use crate::core::classifier::{self, ComplexityAssessment};
use crate::core::lifecycle::{self, LifecyclePolicy, StatusTransition};
use crate::domain::model::{ComplexityTier, PriceBreakdown, QuoteRequest, QuoteStatus, Service};
use crate::domain::ports::CatalogProvider;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub assessment: ComplexityAssessment,
    pub breakdown: PriceBreakdown,
}

/// Stateless pricing engine over an injected, immutable catalog.
#[derive(Debug, Clone)]
pub struct PricingEngine<C: CatalogProvider> {
    catalog: C,
}

impl<C: CatalogProvider> PricingEngine<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn list_services(&self) -> &[Service] {
        self.catalog.services()
    }

    pub fn get_service(&self, name: &str) -> Result<&Service> {
        self.catalog.find_service(name)
    }

    pub fn classify_complexity(&self, request: &QuoteRequest) -> Result<ComplexityTier> {
        Ok(self.assess(request)?.tier)
    }

    pub fn assess(&self, request: &QuoteRequest) -> Result<ComplexityAssessment> {
        let service = self.catalog.find_service(request.service_name())?;
        Ok(classifier::assess_complexity(request, service))
    }

    /// `currency` is upper-cased and falls back to the catalog default.
    pub fn calculate_price(
        &self,
        service_name: &str,
        tier: ComplexityTier,
        currency: Option<&str>,
        addon_keys: &[String],
    ) -> Result<PriceBreakdown> {
        let currency = match currency {
            Some(code) => code.trim().to_ascii_uppercase(),
            None => self.catalog.default_currency().to_string(),
        };
        calculator::calculate_price(&self.catalog, service_name, tier, &currency, addon_keys)
    }

    pub fn calculate(&self, query: &PriceQuery) -> Result<PriceBreakdown> {
        let tier = query.tier()?;
        self.calculate_price(&query.service, tier, query.currency.as_deref(), &query.addons)
    }

    /// Classify the request, then price it with its own addon selections.
    pub fn estimate(&self, request: &QuoteRequest) -> Result<Estimate> {
        let assessment = self.assess(request)?;
        let breakdown = self.calculate_price(
            request.service_name(),
            assessment.tier,
            Some(&request.currency),
            &request.requested_addons(),
        )?;
        Ok(Estimate {
            assessment,
            breakdown,
        })
    }

    pub fn transition_status(
        &self,
        current: QuoteStatus,
        target: &str,
        note: Option<&str>,
        policy: LifecyclePolicy,
    ) -> Result<StatusTransition> {
        lifecycle::transition_status(current, target, note, policy)
    }
}
