//! Core library for financial statement processing.
//!
//! This crate provides:
//! - File name classification into invoices, orders and utility bills
//! - Relocation of documents into validated and invalid areas
//! - Amount extraction from the final line of each validated document
//! - Per-category turnover totals and the statistics report

pub mod classifier;
pub mod error;
pub mod extract;
pub mod models;
pub mod pipeline;
pub mod relocate;
pub mod session;
pub mod statistics;
pub mod walker;

pub use classifier::{classify, Classifier};
pub use error::{FinstatError, Result};
pub use models::config::FinstatConfig;
pub use models::document::{Category, Disposition, Document, DocumentRecord, ValidatedDocument, ValidationOutcome};
pub use pipeline::{Pipeline, RunSummary};
pub use session::Session;
pub use statistics::StatisticsTotals;
pub use walker::Walker;
