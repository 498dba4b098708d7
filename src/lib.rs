pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::adapters::MemoryQuoteStore;
pub use crate::config::catalog_config::{Catalog, CatalogConfig};
pub use crate::core::{
    calculator::PriceQuery,
    engine::{Estimate, PricingEngine},
    lifecycle::LifecyclePolicy,
    quote_service::QuoteService,
};
pub use crate::utils::error::{PricingError, Result};
