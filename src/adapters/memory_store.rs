use crate::domain::model::{Quote, QuoteRequest};
use crate::domain::ports::QuoteStore;
use crate::utils::error::{PricingError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Process-local quote store. Last write wins.
#[derive(Debug, Default)]
pub struct MemoryQuoteStore {
    quotes: RwLock<BTreeMap<u64, Quote>>,
    next_id: AtomicU64,
}

impl MemoryQuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.quotes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.quotes.read().await.is_empty()
    }
}

#[async_trait]
impl QuoteStore for MemoryQuoteStore {
    async fn insert(&self, request: QuoteRequest) -> Result<Quote> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let quote = Quote::new(id, request);
        self.quotes.write().await.insert(id, quote.clone());
        Ok(quote)
    }

    async fn get(&self, id: u64) -> Result<Option<Quote>> {
        Ok(self.quotes.read().await.get(&id).cloned())
    }

    async fn save(&self, quote: &Quote) -> Result<()> {
        let mut quotes = self.quotes.write().await;
        match quotes.get_mut(&quote.id) {
            Some(existing) => {
                *existing = quote.clone();
                Ok(())
            }
            None => Err(PricingError::QuoteNotFound { id: quote.id }),
        }
    }
}
