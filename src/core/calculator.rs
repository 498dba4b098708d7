use crate::domain::model::{AppliedAddon, ComplexityTier, PriceBreakdown};
use crate::domain::ports::CatalogProvider;
use crate::utils::error::{PricingError, Result};
use serde::{Deserialize, Serialize};

/// String-typed pricing input, as received from API layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuery {
    pub service: String,
    #[serde(default)]
    pub complexity: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub addons: Vec<String>,
}

impl PriceQuery {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            ..Default::default()
        }
    }

    /// Missing tier means basic; an unknown label is rejected.
    pub fn tier(&self) -> Result<ComplexityTier> {
        match self.complexity.as_deref() {
            None => Ok(ComplexityTier::default()),
            Some(label) => label.parse(),
        }
    }
}

pub fn calculate_price<C: CatalogProvider + ?Sized>(
    catalog: &C,
    service_name: &str,
    tier: ComplexityTier,
    currency: &str,
    addon_keys: &[String],
) -> Result<PriceBreakdown> {
    let service = catalog.find_service(service_name)?;
    let base_price =
        service
            .base_price_for(currency)
            .ok_or_else(|| PricingError::UnsupportedCurrency {
                currency: currency.to_string(),
                item: service.name.clone(),
            })?;

    let multiplier = service.complexity.multiplier(tier);
    let service_price = round_half_up(base_price as f64 * multiplier);

    let mut addons: Vec<AppliedAddon> = Vec::new();
    for key in addon_keys {
        // 重複的 key 只計一次，addon 清單很短
        if addons.iter().any(|applied| &applied.key == key) {
            continue;
        }
        // 未知的 addon key 直接略過
        let Ok(addon) = catalog.find_addon(key) else {
            continue;
        };
        // 驗證過的目錄每個 addon 至少有一個 tier
        let Some(addon_tier) = addon.default_tier() else {
            continue;
        };
        let price = addon_tier
            .prices
            .get(currency)
            .copied()
            .ok_or_else(|| PricingError::UnsupportedCurrency {
                currency: currency.to_string(),
                item: addon.key.clone(),
            })?;

        addons.push(AppliedAddon {
            key: addon.key.clone(),
            name: addon.name.clone(),
            tier: addon_tier.name.clone(),
            price,
            currency: currency.to_string(),
            period: addon_tier.period.clone(),
        });
    }

    let addon_price: u64 = addons.iter().map(|addon| addon.price).sum();

    Ok(PriceBreakdown {
        service: service.name.clone(),
        complexity: tier,
        currency: currency.to_string(),
        base_price,
        multiplier,
        service_price,
        addons,
        addon_price,
        total: service_price + addon_price,
        price_range: service.price_range.get(currency).copied(),
        timeline: service.timeline.clone(),
    })
}

fn round_half_up(value: f64) -> u64 {
    (value.max(0.0) + 0.5).floor() as u64
}
