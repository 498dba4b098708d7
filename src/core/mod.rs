pub mod calculator;
pub mod classifier;
pub mod engine;
pub mod lifecycle;
pub mod quote_service;

pub use crate::domain::model::{ComplexityTier, PriceBreakdown, Quote, QuoteRequest, QuoteStatus};
pub use crate::domain::ports::{CatalogProvider, QuoteStore};
pub use crate::utils::error::Result;
