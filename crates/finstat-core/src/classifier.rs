//! File name classification.
//!
//! Classification looks at the file name only. It never touches the
//! filesystem; moving the file is the relocator's job.

use crate::models::config::ClassificationRules;
use crate::models::document::{Category, Rejection, ValidationOutcome};

/// Category keywords in precedence order.
pub const CATEGORY_KEYWORDS: [(&str, Category); 3] = [
    ("invoice", Category::Invoice),
    ("order", Category::Order),
    ("electric_bill", Category::Check),
];

/// Classify a file name against the given rules.
///
/// The rules are checked in order: extension, year tag, keyword. The first
/// keyword found in [`CATEGORY_KEYWORDS`] order decides the category.
pub fn classify(file_name: &str, rules: &ClassificationRules) -> ValidationOutcome {
    let name = file_name.to_lowercase();

    if !name.ends_with(&rules.extension.to_lowercase()) {
        return ValidationOutcome::rejected(Rejection::Extension);
    }

    if !name.contains(&rules.year_tag) {
        return ValidationOutcome::rejected(Rejection::YearTag);
    }

    CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|(_, category)| ValidationOutcome::accepted(*category))
        .unwrap_or_else(|| ValidationOutcome::rejected(Rejection::NoKeyword))
}

/// Classifier bound to a set of rules.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    rules: ClassificationRules,
}

impl Classifier {
    pub fn new(rules: ClassificationRules) -> Self {
        Self { rules }
    }

    pub fn classify(&self, file_name: &str) -> ValidationOutcome {
        classify(file_name, &self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str) -> ValidationOutcome {
        Classifier::default().classify(name)
    }

    #[test]
    fn test_valid_names() {
        assert_eq!(outcome("invoice_2024_acme.txt").category, Category::Invoice);
        assert_eq!(outcome("order_2024_xyz.txt").category, Category::Order);
        assert_eq!(
            outcome("electric_bill_2024_march.txt").category,
            Category::Check
        );
    }

    #[test]
    fn test_case_insensitive() {
        let result = outcome("ACME_Invoice_2024.TXT");
        assert!(result.is_valid());
        assert_eq!(result.category, Category::Invoice);

        assert_eq!(
            outcome("Electric_Bill-2024.Txt").category,
            Category::Check
        );
    }

    #[test]
    fn test_keyword_precedence() {
        assert_eq!(outcome("order_for_invoice_2024.txt").category, Category::Invoice);
        assert_eq!(
            outcome("electric_bill_order_2024.txt").category,
            Category::Order
        );
    }

    #[test]
    fn test_substring_match_not_tokenized() {
        // "reorder" contains "order"
        assert_eq!(outcome("reorders2024.txt").category, Category::Order);
    }

    #[test]
    fn test_rejections() {
        assert_eq!(
            outcome("random_notes.txt").rejection,
            Some(Rejection::YearTag)
        );
        assert_eq!(
            outcome("invoice_2024.pdf").rejection,
            Some(Rejection::Extension)
        );
        assert_eq!(
            outcome("invoice_2024.txt.bak").rejection,
            Some(Rejection::Extension)
        );
        assert_eq!(
            outcome("receipt_2024.txt").rejection,
            Some(Rejection::NoKeyword)
        );
        assert_eq!(outcome("").rejection, Some(Rejection::Extension));
    }

    #[test]
    fn test_removing_any_criterion_invalidates() {
        let valid = "invoice_order_electric_bill_2024.txt";
        assert!(outcome(valid).is_valid());

        assert!(!outcome("invoice_order_electric_bill_.txt").is_valid());
        assert!(!outcome("invoice_order_electric_bill_2024").is_valid());
        assert!(!outcome("___2024.txt").is_valid());
    }

    #[test]
    fn test_custom_rules() {
        let classifier = Classifier::new(ClassificationRules {
            extension: ".TXT".to_string(),
            year_tag: "2025".to_string(),
        });

        assert!(classifier.classify("order_2025.txt").is_valid());
        assert!(!classifier.classify("order_2024.txt").is_valid());
    }
}
