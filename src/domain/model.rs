use crate::utils::error::PricingError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const WEB_DEVELOPMENT: &str = "Web Development";
pub const MOBILE_APP_DESIGN: &str = "Mobile App Design";
pub const UI_UX_DESIGN: &str = "UI/UX Design";
pub const DIGITAL_MARKETING: &str = "Digital Marketing";

/// Whole currency units keyed by upper-case currency code.
pub type PriceTable = BTreeMap<String, u64>;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    #[default]
    Basic,
    Intermediate,
    Advanced,
}

impl ComplexityTier {
    pub const ALL: [ComplexityTier; 3] = [
        ComplexityTier::Basic,
        ComplexityTier::Intermediate,
        ComplexityTier::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityTier::Basic => "basic",
            ComplexityTier::Intermediate => "intermediate",
            ComplexityTier::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplexityTier {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(ComplexityTier::Basic),
            "intermediate" => Ok(ComplexityTier::Intermediate),
            "advanced" => Ok(ComplexityTier::Advanced),
            _ => Err(PricingError::InvalidComplexity {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityLevel {
    pub multiplier: f64,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityTable {
    pub basic: ComplexityLevel,
    pub intermediate: ComplexityLevel,
    pub advanced: ComplexityLevel,
}

impl ComplexityTable {
    pub fn level(&self, tier: ComplexityTier) -> &ComplexityLevel {
        match tier {
            ComplexityTier::Basic => &self.basic,
            ComplexityTier::Intermediate => &self.intermediate,
            ComplexityTier::Advanced => &self.advanced,
        }
    }

    pub fn multiplier(&self, tier: ComplexityTier) -> f64 {
        self.level(tier).multiplier
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub base_price: PriceTable,
    #[serde(default)]
    pub price_range: BTreeMap<String, PriceRange>,
    pub complexity: ComplexityTable,
    pub timeline: String,
}

impl Service {
    pub fn base_price_for(&self, currency: &str) -> Option<u64> {
        self.base_price.get(currency).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonTier {
    pub name: String,
    pub prices: PriceTable,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addon {
    pub key: String,
    pub name: String,
    pub tiers: Vec<AddonTier>,
}

impl Addon {
    /// "basic" when declared, otherwise the first declared tier.
    pub fn default_tier(&self) -> Option<&AddonTier> {
        self.tiers
            .iter()
            .find(|tier| tier.name == "basic")
            .or_else(|| self.tiers.first())
    }
}

/// Customer answer to the hosting / domain / maintenance questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "AddonPreferenceRaw")]
pub enum AddonPreference {
    Yes,
    #[default]
    No,
    Advice,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AddonPreferenceRaw {
    Flag(bool),
    Label(String),
    Null,
}

impl From<AddonPreferenceRaw> for AddonPreference {
    fn from(raw: AddonPreferenceRaw) -> Self {
        match raw {
            AddonPreferenceRaw::Flag(true) => AddonPreference::Yes,
            AddonPreferenceRaw::Flag(false) | AddonPreferenceRaw::Null => AddonPreference::No,
            AddonPreferenceRaw::Label(label) => match label.trim().to_ascii_lowercase().as_str() {
                "yes" | "true" => AddonPreference::Yes,
                "advice" => AddonPreference::Advice,
                _ => AddonPreference::No,
            },
        }
    }
}

/// Service-specific request attributes, keyed by the requested service.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceDetails {
    WebDevelopment {
        features: Vec<String>,
    },
    MobileAppDesign {
        features: Vec<String>,
    },
    UiUxDesign {
        design_types: Vec<String>,
        platforms: Vec<String>,
        pages: Option<u32>,
    },
    DigitalMarketing {
        channels: Vec<String>,
        campaign_duration: Option<String>,
    },
    Other(String),
}

impl ServiceDetails {
    pub fn service_name(&self) -> &str {
        match self {
            ServiceDetails::WebDevelopment { .. } => WEB_DEVELOPMENT,
            ServiceDetails::MobileAppDesign { .. } => MOBILE_APP_DESIGN,
            ServiceDetails::UiUxDesign { .. } => UI_UX_DESIGN,
            ServiceDetails::DigitalMarketing { .. } => DIGITAL_MARKETING,
            ServiceDetails::Other(name) => name,
        }
    }
}

/// Inbound quote request. Read-only input to classification and pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "QuoteRequestPayload", into = "QuoteRequestPayload")]
pub struct QuoteRequest {
    pub currency: String,
    pub budget: f64,
    pub timeline: String,
    pub description: Option<String>,
    pub hosting: AddonPreference,
    pub domain: AddonPreference,
    pub maintenance: AddonPreference,
    pub addons: Vec<String>,
    pub details: ServiceDetails,
}

impl QuoteRequest {
    pub fn new(details: ServiceDetails, currency: &str, budget: f64, timeline: &str) -> Self {
        Self {
            currency: currency.trim().to_ascii_uppercase(),
            budget,
            timeline: timeline.to_string(),
            description: None,
            hosting: AddonPreference::No,
            domain: AddonPreference::No,
            maintenance: AddonPreference::No,
            addons: Vec::new(),
            details,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn service_name(&self) -> &str {
        self.details.service_name()
    }

    /// Addon keys answered "Yes", then the explicit list, without duplicates.
    pub fn requested_addons(&self) -> Vec<String> {
        let flagged = [
            ("hosting", self.hosting),
            ("domain", self.domain),
            ("maintenance", self.maintenance),
        ];

        let mut keys: Vec<String> = Vec::new();
        let candidates = flagged
            .iter()
            .filter(|(_, pref)| *pref == AddonPreference::Yes)
            .map(|(key, _)| key.to_string())
            .chain(self.addons.iter().cloned());
        for key in candidates {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }
}

/// Flat wire shape of a quote request as submitted by clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestPayload {
    pub service: String,
    pub currency: String,
    pub budget: f64,
    #[serde(default)]
    pub timeline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub design_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marketing_channels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_duration: Option<String>,
    #[serde(default)]
    pub hosting: AddonPreference,
    #[serde(default)]
    pub domain: AddonPreference,
    #[serde(default)]
    pub maintenance: AddonPreference,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addons: Vec<String>,
}

impl From<QuoteRequestPayload> for QuoteRequest {
    fn from(payload: QuoteRequestPayload) -> Self {
        let details = match payload.service.as_str() {
            WEB_DEVELOPMENT => ServiceDetails::WebDevelopment {
                features: payload.features,
            },
            MOBILE_APP_DESIGN => ServiceDetails::MobileAppDesign {
                features: payload.features,
            },
            UI_UX_DESIGN => ServiceDetails::UiUxDesign {
                design_types: payload.design_types,
                platforms: payload.platforms,
                pages: payload.pages,
            },
            DIGITAL_MARKETING => ServiceDetails::DigitalMarketing {
                channels: payload.marketing_channels,
                campaign_duration: payload.campaign_duration,
            },
            _ => ServiceDetails::Other(payload.service),
        };

        Self {
            currency: payload.currency.trim().to_ascii_uppercase(),
            budget: payload.budget,
            timeline: payload.timeline,
            description: payload.description,
            hosting: payload.hosting,
            domain: payload.domain,
            maintenance: payload.maintenance,
            addons: payload.addons,
            details,
        }
    }
}

impl From<QuoteRequest> for QuoteRequestPayload {
    fn from(request: QuoteRequest) -> Self {
        let mut payload = QuoteRequestPayload {
            service: request.service_name().to_string(),
            currency: request.currency,
            budget: request.budget,
            timeline: request.timeline,
            description: request.description,
            hosting: request.hosting,
            domain: request.domain,
            maintenance: request.maintenance,
            addons: request.addons,
            ..Default::default()
        };

        match request.details {
            ServiceDetails::WebDevelopment { features }
            | ServiceDetails::MobileAppDesign { features } => payload.features = features,
            ServiceDetails::UiUxDesign {
                design_types,
                platforms,
                pages,
            } => {
                payload.design_types = design_types;
                payload.platforms = platforms;
                payload.pages = pages;
            }
            ServiceDetails::DigitalMarketing {
                channels,
                campaign_duration,
            } => {
                payload.marketing_channels = channels;
                payload.campaign_duration = campaign_duration;
            }
            ServiceDetails::Other(_) => {}
        }
        payload
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedAddon {
    pub key: String,
    pub name: String,
    pub tier: String,
    pub price: u64,
    pub currency: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub service: String,
    pub complexity: ComplexityTier,
    pub currency: String,
    pub base_price: u64,
    pub multiplier: f64,
    pub service_price: u64,
    pub addons: Vec<AppliedAddon>,
    pub addon_price: u64,
    pub total: u64,
    pub price_range: Option<PriceRange>,
    pub timeline: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    #[default]
    Pending,
    Reviewed,
    Quoted,
    Accepted,
    Rejected,
    Completed,
}

impl QuoteStatus {
    pub const ALL: [QuoteStatus; 6] = [
        QuoteStatus::Pending,
        QuoteStatus::Reviewed,
        QuoteStatus::Quoted,
        QuoteStatus::Accepted,
        QuoteStatus::Rejected,
        QuoteStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::Pending => "pending",
            QuoteStatus::Reviewed => "reviewed",
            QuoteStatus::Quoted => "quoted",
            QuoteStatus::Accepted => "accepted",
            QuoteStatus::Rejected => "rejected",
            QuoteStatus::Completed => "completed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, QuoteStatus::Rejected | QuoteStatus::Completed)
    }
}

impl fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuoteStatus {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_ascii_lowercase();
        QuoteStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == label)
            .ok_or_else(|| PricingError::InvalidStatus {
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub from: QuoteStatus,
    pub to: QuoteStatus,
    pub note: Option<String>,
    pub changed_at: DateTime<Utc>,
}

/// Persisted quote record. Storage belongs to the embedding system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: u64,
    pub request: QuoteRequest,
    pub status: QuoteStatus,
    pub note: Option<String>,
    pub quoted_amount: Option<u64>,
    pub quoted_currency: Option<String>,
    pub breakdown: Option<PriceBreakdown>,
    pub history: Vec<StatusChange>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quote {
    pub fn new(id: u64, request: QuoteRequest) -> Self {
        let now = Utc::now();
        Self {
            id,
            request,
            status: QuoteStatus::Pending,
            note: None,
            quoted_amount: None,
            quoted_currency: None,
            breakdown: None,
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
