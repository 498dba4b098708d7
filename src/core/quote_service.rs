use crate::core::engine::PricingEngine;
use crate::core::lifecycle::LifecyclePolicy;
use crate::domain::model::{Quote, QuoteRequest};
use crate::domain::ports::{CatalogProvider, QuoteStore};
use crate::utils::error::{PricingError, Result};
use crate::utils::validation::validate_min_value;

/// Drives a quote from submission through pricing and status changes.
pub struct QuoteService<C: CatalogProvider, S: QuoteStore> {
    engine: PricingEngine<C>,
    store: S,
    policy: LifecyclePolicy,
}

impl<C: CatalogProvider, S: QuoteStore> QuoteService<C, S> {
    pub fn new(engine: PricingEngine<C>, store: S) -> Self {
        Self {
            engine,
            store,
            policy: LifecyclePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: LifecyclePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub async fn submit(&self, request: QuoteRequest) -> Result<Quote> {
        self.validate_request(&request)?;
        let quote = self.store.insert(request).await?;
        tracing::info!(
            quote_id = quote.id,
            service = quote.request.service_name(),
            "Quote request submitted"
        );
        Ok(quote)
    }

    pub async fn get(&self, id: u64) -> Result<Quote> {
        self.store
            .get(id)
            .await?
            .ok_or(PricingError::QuoteNotFound { id })
    }

    /// Estimate the stored request and move the quote to `quoted`.
    pub async fn price_quote(&self, id: u64, note: Option<&str>) -> Result<Quote> {
        let mut quote = self.get(id).await?;
        let estimate = self.engine.estimate(&quote.request)?;

        tracing::debug!(
            quote_id = id,
            score = estimate.assessment.score,
            tier = %estimate.assessment.tier,
            "Complexity assessed"
        );

        quote.apply_price(estimate.breakdown, note);
        self.store.save(&quote).await?;

        tracing::info!(
            quote_id = id,
            amount = quote.quoted_amount,
            currency = quote.quoted_currency.as_deref(),
            "Quote priced"
        );
        Ok(quote)
    }

    pub async fn change_status(&self, id: u64, target: &str, note: Option<&str>) -> Result<Quote> {
        let mut quote = self.get(id).await?;
        let transition = match self
            .engine
            .transition_status(quote.status, target, note, self.policy)
        {
            Ok(transition) => transition,
            Err(e) => {
                tracing::warn!(quote_id = id, requested = target, "Status change rejected: {}", e);
                return Err(e);
            }
        };

        let from = transition.from;
        quote.apply_transition(transition);
        self.store.save(&quote).await?;

        tracing::info!(quote_id = id, %from, to = %quote.status, "Quote status changed");
        Ok(quote)
    }

    fn validate_request(&self, request: &QuoteRequest) -> Result<()> {
        let catalog = self.engine.catalog();
        catalog.find_service(request.service_name())?;

        if !catalog.supports_currency(&request.currency.trim().to_ascii_uppercase()) {
            return Err(PricingError::ValidationError {
                message: format!(
                    "Currency '{}' is not in the supported set: {}",
                    request.currency,
                    catalog.supported_currencies().join(", ")
                ),
            });
        }
        validate_min_value("budget", request.budget, 0.0).map_err(|e| {
            PricingError::ValidationError {
                message: e.to_string(),
            }
        })?;
        Ok(())
    }
}
