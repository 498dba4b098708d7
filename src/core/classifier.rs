use crate::domain::model::{ComplexityTier, QuoteRequest, Service, ServiceDetails};
use serde::{Deserialize, Serialize};

const LONG_DESCRIPTION_CHARS: usize = 500;
const ADVANCED_SCORE: i32 = 4;
const INTERMEDIATE_SCORE: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityAssessment {
    pub score: i32,
    pub tier: ComplexityTier,
}

pub fn classify_complexity(request: &QuoteRequest, service: &Service) -> ComplexityTier {
    assess_complexity(request, service).tier
}

/// Additive heuristic score over budget, timeline, service signals and description.
pub fn assess_complexity(request: &QuoteRequest, service: &Service) -> ComplexityAssessment {
    let score = budget_score(request, service)
        + timeline_score(&request.timeline)
        + details_score(&request.details)
        + description_score(request.description.as_deref());

    ComplexityAssessment {
        score,
        tier: tier_for_score(score),
    }
}

pub fn tier_for_score(score: i32) -> ComplexityTier {
    if score >= ADVANCED_SCORE {
        ComplexityTier::Advanced
    } else if score >= INTERMEDIATE_SCORE {
        ComplexityTier::Intermediate
    } else {
        ComplexityTier::Basic
    }
}

fn budget_score(request: &QuoteRequest, service: &Service) -> i32 {
    // 沒有該幣別的底價就不計分
    let base = match service.base_price_for(&request.currency) {
        Some(base) if base > 0 => base as f64,
        _ => return 0,
    };

    let ratio = request.budget / base;
    if ratio >= 3.0 {
        2
    } else if ratio >= 1.5 {
        1
    } else {
        0
    }
}

fn timeline_score(timeline: &str) -> i32 {
    match timeline {
        "6+ months" => 2,
        "3-6 months" => 1,
        "1-2 weeks" => -1,
        _ => 0,
    }
}

fn details_score(details: &ServiceDetails) -> i32 {
    match details {
        ServiceDetails::WebDevelopment { features }
        | ServiceDetails::MobileAppDesign { features } => {
            let mut score = list_size_score(features.len(), 4);
            if features.iter().any(|f| f == "Authentication") {
                score += 1;
            }
            if features.iter().any(|f| f == "API") {
                score += 1;
            }
            score
        }
        ServiceDetails::UiUxDesign {
            design_types,
            platforms,
            ..
        } => {
            let mut score = list_size_score(design_types.len(), 3);
            if platforms.len() >= 3 {
                score += 1;
            }
            score
        }
        ServiceDetails::DigitalMarketing {
            channels,
            campaign_duration,
        } => {
            let mut score = list_size_score(channels.len(), 4);
            if matches!(campaign_duration.as_deref(), Some("12 Months") | Some("Ongoing")) {
                score += 1;
            }
            score
        }
        ServiceDetails::Other(_) => 0,
    }
}

/// +2 at `high` items or more, +1 from two items.
fn list_size_score(len: usize, high: usize) -> i32 {
    if len >= high {
        2
    } else if len >= 2 {
        1
    } else {
        0
    }
}

fn description_score(description: Option<&str>) -> i32 {
    match description {
        Some(text) if text.chars().count() > LONG_DESCRIPTION_CHARS => 1,
        _ => 0,
    }
}
