//! Storage implementations for the catalog

pub mod in_memory;

pub use in_memory::InMemoryCatalogStore;
