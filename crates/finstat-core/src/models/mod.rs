//! Data models for documents and configuration.

pub mod config;
pub mod document;

pub use config::FinstatConfig;
pub use document::{
    Category, Disposition, Document, DocumentRecord, Rejection, ValidatedDocument,
    ValidationOutcome,
};
