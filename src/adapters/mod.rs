// Adapters layer: concrete implementations of the domain ports.

pub mod memory_store;

pub use memory_store::MemoryQuoteStore;
