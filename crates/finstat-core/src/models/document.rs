//! Document descriptors and classification outcomes.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Closed set of document categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Invoice (`invoice` keyword).
    Invoice,
    /// Purchase order (`order` keyword).
    Order,
    /// Utility bill (`electric_bill` keyword).
    Check,
    /// Anything that failed classification.
    Unknown,
}

impl Category {
    /// Categories that carry a running total, in report order.
    pub const KNOWN: [Category; 3] = [Category::Invoice, Category::Order, Category::Check];

    /// Plural label used for statistics keys and the report.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Invoice => "invoices",
            Category::Order => "orders",
            Category::Check => "checks",
            Category::Unknown => "unknown",
        }
    }

    /// Whether documents of this category are routed to the validated area.
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Unknown)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Invoice => "invoice",
            Category::Order => "order",
            Category::Check => "check",
            Category::Unknown => "unknown",
        };
        f.pad(name)
    }
}

/// First classification rule a file name failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Wrong or missing document extension.
    Extension,
    /// Year tag absent.
    YearTag,
    /// None of the category keywords present.
    NoKeyword,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Extension => f.write_str("unsupported extension"),
            Rejection::YearTag => f.write_str("missing year tag"),
            Rejection::NoKeyword => f.write_str("no category keyword"),
        }
    }
}

/// Result of classifying a file name.
///
/// Validity is derived from the category, so an `Unknown` outcome can never
/// be valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Assigned category.
    pub category: Category,
    /// Reason for rejection, if the name was rejected.
    pub rejection: Option<Rejection>,
}

impl ValidationOutcome {
    /// Outcome for an accepted document.
    pub fn accepted(category: Category) -> Self {
        debug_assert!(category.is_known());
        Self {
            category,
            rejection: None,
        }
    }

    /// Outcome for a rejected document.
    pub fn rejected(reason: Rejection) -> Self {
        Self {
            category: Category::Unknown,
            rejection: Some(reason),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.category.is_known()
    }
}

/// A regular file found under the scanned root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Current location of the file.
    pub path: PathBuf,
    /// Base name of the file as found on disk.
    pub file_name: String,
}

impl Document {
    /// Build a descriptor from a file path.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = file_name_of(&path);
        Self { path, file_name }
    }
}

/// A document that now lives in the validated area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDocument {
    /// Path inside the validated area.
    pub path: PathBuf,
    /// Category assigned by the classifier.
    pub category: Category,
}

impl ValidatedDocument {
    pub fn new(path: impl Into<PathBuf>, category: Category) -> Self {
        Self {
            path: path.into(),
            category,
        }
    }

    pub fn file_name(&self) -> String {
        file_name_of(&self.path)
    }
}

/// Where a document ended up after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    /// Moved to the validated area.
    Valid,
    /// Moved to the invalid area.
    Invalid,
    /// The move failed; the file stayed in place.
    Failed,
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disposition::Valid => f.write_str("valid"),
            Disposition::Invalid => f.write_str("invalid"),
            Disposition::Failed => f.write_str("failed"),
        }
    }
}

/// Per-document record kept for the run summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentRecord {
    /// Where the file was found.
    pub source: PathBuf,
    /// Base name of the file.
    pub file_name: String,
    /// Assigned category.
    pub category: Category,
    /// Outcome of relocation.
    pub disposition: Disposition,
    /// New location, if the move succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<PathBuf>,
    /// Amount contributed to the totals (validated documents only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Error message for failed moves or extractions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_outcome_is_never_valid() {
        let outcome = ValidationOutcome::rejected(Rejection::NoKeyword);
        assert_eq!(outcome.category, Category::Unknown);
        assert!(!outcome.is_valid());

        let outcome = ValidationOutcome::accepted(Category::Check);
        assert!(outcome.is_valid());
        assert!(outcome.rejection.is_none());
    }

    #[test]
    fn test_document_from_path() {
        let doc = Document::from_path("/data/in/sub/Invoice_2024.TXT");
        assert_eq!(doc.file_name, "Invoice_2024.TXT");
        assert_eq!(doc.path, PathBuf::from("/data/in/sub/Invoice_2024.TXT"));
    }

    #[test]
    fn test_category_labels() {
        let labels: Vec<_> = Category::KNOWN.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["invoices", "orders", "checks"]);
        assert_eq!(Category::Check.to_string(), "check");
    }
}
