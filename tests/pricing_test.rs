use quote_pricer::core::calculator::calculate_price;
use quote_pricer::domain::model::{
    Addon, AddonTier, ComplexityLevel, ComplexityTable, ComplexityTier, PriceTable, Service,
};
use quote_pricer::domain::ports::CatalogProvider;
use quote_pricer::{Catalog, PriceQuery, PricingEngine, PricingError};
use std::collections::BTreeMap;

/// In-test catalog with its own pricing table
struct FixedCatalog {
    services: Vec<Service>,
    addons: Vec<Addon>,
    currencies: Vec<String>,
}

impl CatalogProvider for FixedCatalog {
    fn services(&self) -> &[Service] {
        &self.services
    }

    fn addons(&self) -> &[Addon] {
        &self.addons
    }

    fn default_currency(&self) -> &str {
        "USD"
    }

    fn supported_currencies(&self) -> &[String] {
        &self.currencies
    }
}

fn fixed_catalog() -> FixedCatalog {
    let level = |multiplier| ComplexityLevel {
        multiplier,
        features: vec![],
    };
    let usd = |amount| PriceTable::from([("USD".to_string(), amount)]);

    FixedCatalog {
        services: vec![Service {
            name: "Audit".to_string(),
            category: "Consulting".to_string(),
            features: vec![],
            base_price: usd(1001),
            price_range: BTreeMap::new(),
            complexity: ComplexityTable {
                basic: level(1.0),
                intermediate: level(1.5),
                advanced: level(2.25),
            },
            timeline: "1 week".to_string(),
        }],
        addons: vec![Addon {
            key: "support".to_string(),
            name: "Priority Support".to_string(),
            tiers: vec![
                AddonTier {
                    name: "gold".to_string(),
                    prices: usd(300),
                    period: "per month".to_string(),
                },
                AddonTier {
                    name: "platinum".to_string(),
                    prices: usd(900),
                    period: "per month".to_string(),
                },
            ],
        }],
        currencies: vec!["USD".to_string()],
    }
}

fn keys(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

#[test]
fn test_web_development_intermediate_with_hosting_and_domain() {
    let engine = PricingEngine::new(Catalog::builtin().unwrap());

    let breakdown = engine
        .calculate_price(
            "Web Development",
            ComplexityTier::Intermediate,
            Some("KES"),
            &keys(&["hosting", "domain"]),
        )
        .unwrap();

    assert_eq!(breakdown.base_price, 30000);
    assert_eq!(breakdown.multiplier, 1.8);
    assert_eq!(breakdown.service_price, 54000);
    assert_eq!(breakdown.addons.len(), 2);
    assert_eq!(breakdown.addons[0].price, 1300);
    assert_eq!(breakdown.addons[1].price, 1950);
    assert_eq!(breakdown.addon_price, 3250);
    assert_eq!(breakdown.total, 57250);
    assert_eq!(breakdown.timeline, "2-8 weeks");
    assert_eq!(breakdown.price_range.map(|r| r.min), Some(30000));
}

#[test]
fn test_domain_uses_first_declared_tier() {
    let engine = PricingEngine::new(Catalog::builtin().unwrap());

    let breakdown = engine
        .calculate_price("Web Development", ComplexityTier::Basic, Some("KES"), &keys(&["domain"]))
        .unwrap();

    assert_eq!(breakdown.addons[0].tier, ".com");
    assert_eq!(breakdown.addons[0].period, "per year");
    assert_eq!(breakdown.total, 30000 + 1950);
}

#[test]
fn test_calculation_is_deterministic() {
    let engine = PricingEngine::new(Catalog::builtin().unwrap());
    let addons = keys(&["maintenance", "ssl"]);

    let first = engine
        .calculate_price("Mobile App Design", ComplexityTier::Advanced, Some("EUR"), &addons)
        .unwrap();
    let second = engine
        .calculate_price("Mobile App Design", ComplexityTier::Advanced, Some("EUR"), &addons)
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_unknown_addons_are_ignored() {
    let engine = PricingEngine::new(Catalog::builtin().unwrap());

    let known = engine
        .calculate_price("UI/UX Design", ComplexityTier::Basic, Some("USD"), &keys(&["ssl"]))
        .unwrap();
    let with_unknown = engine
        .calculate_price(
            "UI/UX Design",
            ComplexityTier::Basic,
            Some("USD"),
            &keys(&["backup", "ssl", "ssl", "cdn"]),
        )
        .unwrap();

    assert_eq!(known.total, with_unknown.total);
    assert_eq!(with_unknown.addons.len(), 1);
}

#[test]
fn test_currency_defaults_to_catalog_default() {
    let engine = PricingEngine::new(Catalog::builtin().unwrap());

    let breakdown = engine
        .calculate_price("Graphic Design", ComplexityTier::Basic, None, &[])
        .unwrap();

    assert_eq!(breakdown.currency, "KES");
    assert_eq!(breakdown.total, 8000);
}

#[test]
fn test_unknown_service_is_not_found() {
    let engine = PricingEngine::new(Catalog::builtin().unwrap());

    let err = engine
        .calculate_price("Plumbing", ComplexityTier::Basic, Some("KES"), &[])
        .unwrap_err();
    assert!(matches!(err, PricingError::ServiceNotFound { .. }));

    assert!(matches!(
        engine.get_service("Plumbing"),
        Err(PricingError::ServiceNotFound { .. })
    ));
}

#[test]
fn test_missing_currency_is_unsupported() {
    let engine = PricingEngine::new(Catalog::builtin().unwrap());

    let err = engine
        .calculate_price("Web Development", ComplexityTier::Basic, Some("GBP"), &[])
        .unwrap_err();
    assert!(matches!(err, PricingError::UnsupportedCurrency { currency, .. } if currency == "GBP"));
}

#[test]
fn test_explicit_currency_is_normalized() {
    let engine = PricingEngine::new(Catalog::builtin().unwrap());

    let breakdown = engine
        .calculate_price("Web Development", ComplexityTier::Basic, Some(" kes "), &[])
        .unwrap();
    assert_eq!(breakdown.currency, "KES");
    assert_eq!(breakdown.total, 30000);

    let query = PriceQuery {
        service: "Web Development".to_string(),
        complexity: Some("basic".to_string()),
        currency: Some("kes".to_string()),
        addons: vec![],
    };
    assert_eq!(engine.calculate(&query).unwrap(), breakdown);
}

#[test]
fn test_price_query_entry_point() {
    let engine = PricingEngine::new(Catalog::builtin().unwrap());

    let query = PriceQuery {
        service: "Web Development".to_string(),
        complexity: Some("Intermediate".to_string()),
        currency: Some("kes".to_string()),
        addons: keys(&["hosting", "domain"]),
    };
    assert_eq!(engine.calculate(&query).unwrap().total, 57250);

    let query = PriceQuery {
        complexity: Some("enterprise".to_string()),
        ..query
    };
    assert!(matches!(
        engine.calculate(&query),
        Err(PricingError::InvalidComplexity { .. })
    ));
}

#[test]
fn test_price_query_from_json() {
    let engine = PricingEngine::new(Catalog::builtin().unwrap());

    let query: PriceQuery = serde_json::from_value(serde_json::json!({
        "service": "IT Consulting"
    }))
    .unwrap();
    let breakdown = engine.calculate(&query).unwrap();

    assert_eq!(breakdown.complexity, ComplexityTier::Basic);
    assert_eq!(breakdown.total, 10000);
}

#[test]
fn test_injected_catalog_rounds_half_up() {
    let catalog = fixed_catalog();

    let breakdown =
        calculate_price(&catalog, "Audit", ComplexityTier::Intermediate, "USD", &keys(&["support"]))
            .unwrap();

    // 1001 * 1.5 = 1501.5
    assert_eq!(breakdown.service_price, 1502);
    assert_eq!(breakdown.addons[0].tier, "gold");
    assert_eq!(breakdown.total, 1502 + 300);
}

#[test]
fn test_addon_without_requested_currency_is_unsupported() {
    let mut catalog = fixed_catalog();
    catalog.services[0]
        .base_price
        .insert("EUR".to_string(), 900);

    let err = calculate_price(&catalog, "Audit", ComplexityTier::Basic, "EUR", &keys(&["support"]))
        .unwrap_err();
    assert!(matches!(err, PricingError::UnsupportedCurrency { item, .. } if item == "support"));
}

#[test]
fn test_breakdown_serializes_camel_case() {
    let engine = PricingEngine::new(Catalog::builtin().unwrap());
    let breakdown = engine
        .calculate_price("Web Development", ComplexityTier::Advanced, Some("USD"), &[])
        .unwrap();

    let json = serde_json::to_value(&breakdown).unwrap();
    assert_eq!(json["servicePrice"], 750);
    assert_eq!(json["complexity"], "advanced");
    assert_eq!(json["priceRange"]["max"], 1200);
}
