use quote_pricer::core::classifier::classify_complexity;
use quote_pricer::domain::model::{ComplexityTier, QuoteRequest, ServiceDetails};
use quote_pricer::{Catalog, PricingEngine, PricingError};

fn engine() -> PricingEngine<Catalog> {
    PricingEngine::new(Catalog::builtin().unwrap())
}

#[test]
fn test_budget_and_features_make_intermediate() {
    let request: QuoteRequest = serde_json::from_value(serde_json::json!({
        "service": "Web Development",
        "currency": "KES",
        "budget": 50000,
        "timeline": "1-2 months",
        "features": ["Frontend", "Backend"],
        "description": "Company site with a blog"
    }))
    .unwrap();

    let assessment = engine().assess(&request).unwrap();
    assert_eq!(assessment.score, 2);
    assert_eq!(assessment.tier, ComplexityTier::Intermediate);
}

#[test]
fn test_large_mobile_project_is_advanced() {
    let request = QuoteRequest::new(
        ServiceDetails::MobileAppDesign {
            features: vec!["Authentication".into(), "API".into()],
        },
        "USD",
        1200.0,
        "6+ months",
    );

    // ratio 3.16 (+2), 6+ months (+2), two features (+1), Authentication (+1), API (+1)
    let assessment = engine().assess(&request).unwrap();
    assert_eq!(assessment.score, 7);
    assert_eq!(assessment.tier, ComplexityTier::Advanced);
}

#[test]
fn test_design_request_signals() {
    let request: QuoteRequest = serde_json::from_value(serde_json::json!({
        "service": "UI/UX Design",
        "currency": "KES",
        "budget": 10000,
        "timeline": "3-6 months",
        "designTypes": ["Web App", "Mobile App", "Dashboard"],
        "platforms": ["iOS", "Android", "Web"],
        "pages": 12
    }))
    .unwrap();

    // timeline (+1), three design types (+2), three platforms (+1)
    assert_eq!(engine().classify_complexity(&request).unwrap(), ComplexityTier::Advanced);
}

#[test]
fn test_marketing_with_two_channels_and_short_timeline() {
    let request: QuoteRequest = serde_json::from_value(serde_json::json!({
        "service": "Digital Marketing",
        "currency": "KES",
        "budget": 0,
        "timeline": "1-2 weeks",
        "marketingChannels": ["SEO", "Social Media"],
        "campaignDuration": "3 Months"
    }))
    .unwrap();

    let assessment = engine().assess(&request).unwrap();
    assert_eq!(assessment.score, 0);
    assert_eq!(assessment.tier, ComplexityTier::Basic);
}

#[test]
fn test_other_services_only_use_common_signals() {
    let request = QuoteRequest::new(
        ServiceDetails::Other("Graphic Design".into()),
        "KES",
        24000.0,
        "3-6 months",
    );

    // ratio 3.0 (+2), 3-6 months (+1)
    let assessment = engine().assess(&request).unwrap();
    assert_eq!(assessment.score, 3);
    assert_eq!(assessment.tier, ComplexityTier::Intermediate);
}

#[test]
fn test_unknown_service_cannot_be_classified() {
    let request = QuoteRequest::new(
        ServiceDetails::Other("Plumbing".into()),
        "KES",
        1000.0,
        "1-2 months",
    );

    assert!(matches!(
        engine().classify_complexity(&request),
        Err(PricingError::ServiceNotFound { .. })
    ));
}

#[test]
fn test_every_input_maps_to_a_known_tier() {
    let engine = engine();
    let service = engine.get_service("Web Development").unwrap();
    let timelines = ["1-2 weeks", "2-4 weeks", "1-2 months", "3-6 months", "6+ months", ""];
    let feature_sets: [&[&str]; 4] = [
        &[],
        &["Frontend"],
        &["Frontend", "API"],
        &["Frontend", "Backend", "Authentication", "API", "Payments"],
    ];

    for budget in [0.0, 30000.0, 45000.0, 90000.0, 1e9] {
        for timeline in timelines {
            for features in feature_sets {
                let request = QuoteRequest::new(
                    ServiceDetails::WebDevelopment {
                        features: features.iter().map(|f| f.to_string()).collect(),
                    },
                    "KES",
                    budget,
                    timeline,
                );
                let tier = classify_complexity(&request, service);
                assert!(ComplexityTier::ALL.contains(&tier));
            }
        }
    }
}

#[test]
fn test_budget_at_one_and_a_half_times_base_scores_one() {
    let request = QuoteRequest::new(
        ServiceDetails::WebDevelopment { features: vec![] },
        "KES",
        45000.0,
        "1-2 months",
    );

    let assessment = engine().assess(&request).unwrap();
    assert_eq!(assessment.score, 1);
    assert_eq!(assessment.tier, ComplexityTier::Basic);
}

#[test]
fn test_year_long_campaign_scores_one() {
    let request: QuoteRequest = serde_json::from_value(serde_json::json!({
        "service": "Digital Marketing",
        "currency": "KES",
        "budget": 0,
        "timeline": "1-2 months",
        "marketingChannels": ["SEO"],
        "campaignDuration": "12 Months"
    }))
    .unwrap();

    assert_eq!(engine().assess(&request).unwrap().score, 1);
}

#[test]
fn test_two_design_types_score_one() {
    let request: QuoteRequest = serde_json::from_value(serde_json::json!({
        "service": "UI/UX Design",
        "currency": "KES",
        "budget": 0,
        "timeline": "1-2 months",
        "designTypes": ["Web App", "Dashboard"],
        "platforms": ["Web"]
    }))
    .unwrap();

    assert_eq!(engine().assess(&request).unwrap().score, 1);
}
