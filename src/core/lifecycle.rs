use crate::domain::model::{PriceBreakdown, Quote, QuoteStatus, StatusChange};
use crate::utils::error::{PricingError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecyclePolicy {
    /// Any known status may follow any other.
    #[default]
    Permissive,
    /// Forward-only workflow graph.
    Workflow,
}

impl LifecyclePolicy {
    pub fn allows(&self, from: QuoteStatus, to: QuoteStatus) -> bool {
        use QuoteStatus::*;

        match self {
            LifecyclePolicy::Permissive => true,
            LifecyclePolicy::Workflow => !from.is_terminal() && matches!(
                (from, to),
                (Pending, Reviewed | Quoted | Rejected)
                    | (Reviewed, Quoted | Rejected)
                    | (Quoted, Quoted | Accepted | Rejected)
                    | (Accepted, Completed | Rejected)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTransition {
    pub from: QuoteStatus,
    pub status: QuoteStatus,
    pub note: Option<String>,
}

/// Validate an operator-issued status change.
pub fn transition_status(
    current: QuoteStatus,
    target: &str,
    note: Option<&str>,
    policy: LifecyclePolicy,
) -> Result<StatusTransition> {
    let status: QuoteStatus = target.parse()?;

    if !policy.allows(current, status) {
        return Err(PricingError::IllegalTransition {
            from: current.to_string(),
            to: status.to_string(),
        });
    }

    Ok(StatusTransition {
        from: current,
        status,
        note: note.map(str::to_string),
    })
}

impl Quote {
    pub fn apply_transition(&mut self, transition: StatusTransition) {
        self.record_status(transition.status, transition.note);
    }

    /// Accept a computed price: sets amount and currency and forces `quoted`.
    pub fn apply_price(&mut self, breakdown: PriceBreakdown, note: Option<&str>) {
        self.quoted_amount = Some(breakdown.total);
        self.quoted_currency = Some(breakdown.currency.clone());
        self.breakdown = Some(breakdown);
        self.record_status(QuoteStatus::Quoted, note.map(str::to_string));
    }

    fn record_status(&mut self, status: QuoteStatus, note: Option<String>) {
        let now = Utc::now();
        self.history.push(StatusChange {
            from: self.status,
            to: status,
            note: note.clone(),
            changed_at: now,
        });
        self.status = status;
        self.note = note;
        self.updated_at = now;
    }
}
