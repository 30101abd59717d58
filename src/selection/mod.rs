//! Asset selection
//!
//! - `engine`: queries candidates, filters, classifies, dedups and sorts them
//! - `diagnostics`: optional record of skipped candidates

pub mod diagnostics;
pub mod engine;

pub use diagnostics::{DiagnosticSink, NoDiagnostics, SkipLog, SkipReason};
pub use engine::{Selection, SelectionConfig, SelectionEngine};
