use crate::core::lifecycle::LifecyclePolicy;
use crate::domain::model::{Addon, ComplexityTier, Service};
use crate::domain::ports::CatalogProvider;
use crate::utils::error::{PricingError, Result};
use crate::utils::validation::{
    validate_min_value, validate_non_empty_string, validate_ordered, validate_supported_currency,
    validate_unique, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../catalog/default.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub settings: CatalogSettings,
    pub services: Vec<Service>,
    #[serde(default)]
    pub addons: Vec<Addon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    pub default_currency: String,
    pub supported_currencies: Vec<String>,
    #[serde(default)]
    pub lifecycle_policy: LifecyclePolicy,
}

impl CatalogConfig {
    /// 從 TOML 檔案載入目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded catalog file: {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析目錄
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PricingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 內建的預設目錄
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// 替換環境變數 (例如 ${DEFAULT_CURRENCY})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PricingError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證後轉成不可變的目錄
    pub fn into_catalog(self) -> Result<Catalog> {
        self.validate()?;
        tracing::debug!(
            services = self.services.len(),
            addons = self.addons.len(),
            "Catalog validated"
        );
        Ok(Catalog {
            settings: self.settings,
            services: self.services,
            addons: self.addons,
        })
    }

    fn validate_service(&self, service: &Service) -> Result<()> {
        let supported = &self.settings.supported_currencies;
        let field = |suffix: &str| format!("services[{}].{}", service.name, suffix);

        validate_non_empty_string("services.name", &service.name)?;
        validate_non_empty_string(&field("category"), &service.category)?;

        for currency in service.base_price.keys() {
            validate_supported_currency(&field("base_price"), currency, supported)?;
        }
        if service
            .base_price_for(&self.settings.default_currency)
            .is_none()
        {
            return Err(PricingError::MissingConfigError {
                field: field(&format!("base_price.{}", self.settings.default_currency)),
            });
        }

        for (currency, range) in &service.price_range {
            validate_supported_currency(&field("price_range"), currency, supported)?;
            validate_ordered(&field("price_range"), range.min, range.max)?;
        }

        // 倍率必須 >= 1.0 且由 basic 到 advanced 不遞減
        let mut previous = 1.0;
        for tier in ComplexityTier::ALL {
            let multiplier = service.complexity.multiplier(tier);
            let tier_field = field(&format!("complexity.{}.multiplier", tier));
            validate_min_value(&tier_field, multiplier, previous)?;
            previous = multiplier;
        }

        Ok(())
    }

    fn validate_addon(&self, addon: &Addon) -> Result<()> {
        let field = |suffix: &str| format!("addons[{}].{}", addon.key, suffix);

        validate_non_empty_string("addons.key", &addon.key)?;
        validate_non_empty_string(&field("name"), &addon.name)?;

        if addon.tiers.is_empty() {
            return Err(PricingError::MissingConfigError {
                field: field("tiers"),
            });
        }
        validate_unique(&field("tiers"), addon.tiers.iter().map(|t| t.name.as_str()))?;

        for tier in &addon.tiers {
            for currency in tier.prices.keys() {
                validate_supported_currency(
                    &field(&format!("tiers[{}].prices", tier.name)),
                    currency,
                    &self.settings.supported_currencies,
                )?;
            }
        }
        Ok(())
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        let settings = &self.settings;
        if settings.supported_currencies.is_empty() {
            return Err(PricingError::MissingConfigError {
                field: "settings.supported_currencies".to_string(),
            });
        }
        validate_unique(
            "settings.supported_currencies",
            settings.supported_currencies.iter().map(String::as_str),
        )?;
        validate_supported_currency(
            "settings.default_currency",
            &settings.default_currency,
            &settings.supported_currencies,
        )?;

        if self.services.is_empty() {
            return Err(PricingError::MissingConfigError {
                field: "services".to_string(),
            });
        }
        validate_unique("services.name", self.services.iter().map(|s| s.name.as_str()))?;
        for service in &self.services {
            self.validate_service(service)?;
        }

        validate_unique("addons.key", self.addons.iter().map(|a| a.key.as_str()))?;
        for addon in &self.addons {
            self.validate_addon(addon)?;
        }

        Ok(())
    }
}

/// Validated, immutable service and addon catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    settings: CatalogSettings,
    services: Vec<Service>,
    addons: Vec<Addon>,
}

impl Catalog {
    pub fn builtin() -> Result<Self> {
        CatalogConfig::builtin()?.into_catalog()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        CatalogConfig::from_file(path)?.into_catalog()
    }

    pub fn lifecycle_policy(&self) -> LifecyclePolicy {
        self.settings.lifecycle_policy
    }
}

impl CatalogProvider for Catalog {
    fn services(&self) -> &[Service] {
        &self.services
    }

    fn addons(&self) -> &[Addon] {
        &self.addons
    }

    fn default_currency(&self) -> &str {
        &self.settings.default_currency
    }

    fn supported_currencies(&self) -> &[String] {
        &self.settings.supported_currencies
    }
}
