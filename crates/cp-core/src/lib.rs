//! # cp-core
//!
//! Core domain models and business logic for the ClipPanel history runtime.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies: history records and their stable keys, list merging,
//! content classification, date sectioning, type filters, and the port
//! contracts implemented by the platform layer.

// Public module exports
pub mod blob;
pub mod classify;
pub mod history;
pub mod ports;

// Re-export commonly used types at the crate root
pub use classify::{classify, ClassifyOptions, ContentInfo, DerivedType, MetaEntry, RawContent};
pub use history::{item_key, merge_history, BaseType, HistoryRecord};
