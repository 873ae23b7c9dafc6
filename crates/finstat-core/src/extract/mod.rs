//! Amount extraction from validated documents.
//!
//! Only the last non-empty line of a document is considered. Everything
//! above it is ignored, so fixtures must keep the total on the final line.

mod amounts;
pub mod patterns;

pub use amounts::{parse_order_total, parse_plain_amount, OrderTotal, PlainAmount};

use std::fs;

use tracing::{error, info};

use crate::error::ExtractionError;
use crate::models::document::{Category, ValidatedDocument};

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for category-specific amount rules.
pub trait AmountRule {
    /// Parse an amount out of a single line.
    fn parse(&self, line: &str) -> Option<f64>;
}

/// Rule used for a category, if the category carries amounts.
pub fn rule_for(category: Category) -> Option<&'static dyn AmountRule> {
    match category {
        Category::Invoice | Category::Check => Some(&PlainAmount),
        Category::Order => Some(&OrderTotal),
        Category::Unknown => None,
    }
}

/// Last line of `text` that is not blank.
pub fn last_content_line(text: &str) -> Option<&str> {
    text.lines().rev().find(|line| !line.trim().is_empty())
}

/// Parse the amount from the text of a validated document.
pub fn amount_from_text(text: &str, doc: &ValidatedDocument) -> Result<f64> {
    let category = doc.category;
    let rule = rule_for(category).ok_or_else(|| ExtractionError::UnknownCategory(doc.path.clone()))?;
    let line = last_content_line(text).ok_or_else(|| ExtractionError::Empty(doc.path.clone()))?;

    rule.parse(line).ok_or_else(|| ExtractionError::Parse {
        category,
        line: line.to_string(),
    })
}

/// Read a validated document and extract its amount.
pub fn try_extract(doc: &ValidatedDocument) -> Result<f64> {
    let text = fs::read_to_string(&doc.path).map_err(|source| ExtractionError::Read {
        path: doc.path.clone(),
        source,
    })?;

    amount_from_text(&text, doc)
}

/// Extract an amount and log the outcome.
///
/// Failures are logged here; callers count the document as 0.0.
pub fn extract(doc: &ValidatedDocument) -> Result<f64> {
    try_extract(doc)
        .inspect(|amount| info!("Extracted amount from {}: {:.2}", doc.file_name(), amount))
        .inspect_err(|e| error!("{}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(category: Category) -> ValidatedDocument {
        ValidatedDocument::new("/valid/doc_2024.txt", category)
    }

    #[test]
    fn test_last_content_line() {
        assert_eq!(last_content_line("a\nb\n"), Some("b"));
        assert_eq!(last_content_line("a\r\nb\r\n\r\n  \n"), Some("b"));
        assert_eq!(last_content_line(""), None);
        assert_eq!(last_content_line("\n \n"), None);
    }

    #[test]
    fn test_only_last_line_counts() {
        let text = "Total: 999,99\nThanks for your business";
        let err = amount_from_text(text, &doc(Category::Invoice)).unwrap_err();
        assert!(matches!(err, ExtractionError::Parse { .. }));
    }

    #[test]
    fn test_amount_per_category() {
        let invoice = "ACME Ltd\nTotal: 123,45\n";
        assert_eq!(
            amount_from_text(invoice, &doc(Category::Invoice)).unwrap(),
            123.45
        );

        let bill = "March\n45.00";
        assert_eq!(
            amount_from_text(bill, &doc(Category::Check)).unwrap(),
            45.0
        );

        let order = "Items: 3\nShipment complete. Order Total 1,234.50\n\n";
        assert_eq!(
            amount_from_text(order, &doc(Category::Order)).unwrap(),
            1234.5
        );
    }

    #[test]
    fn test_order_rule_is_not_plain() {
        // a plain number is not enough for orders
        let err = amount_from_text("45.00", &doc(Category::Order)).unwrap_err();
        assert!(matches!(err, ExtractionError::Parse { category: Category::Order, .. }));
    }

    #[test]
    fn test_empty_document() {
        let err = amount_from_text("\n\n", &doc(Category::Invoice)).unwrap_err();
        assert!(matches!(err, ExtractionError::Empty(_)));
    }

    #[test]
    fn test_unknown_category() {
        let err = amount_from_text("1.00", &doc(Category::Unknown)).unwrap_err();
        assert!(matches!(err, ExtractionError::UnknownCategory(_)));
    }

    #[test]
    fn test_extract_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invoice_2024_bad.txt");
        std::fs::write(&path, "Invoice\nN/A\n").unwrap();

        let document = ValidatedDocument::new(&path, Category::Invoice);
        assert!(matches!(
            extract(&document),
            Err(ExtractionError::Parse { category: Category::Invoice, .. })
        ));

        std::fs::write(&path, "Invoice\nTotal: 10,50\n").unwrap();
        assert_eq!(extract(&document).unwrap(), 10.5);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let document = ValidatedDocument::new("/definitely/not/here.txt", Category::Check);
        assert!(matches!(
            try_extract(&document),
            Err(ExtractionError::Read { .. })
        ));
        assert!(extract(&document).is_err());
    }
}
