//! Per-category turnover totals.

pub mod report;

pub use report::{format_amount, render, write_report};

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::models::document::Category;

/// Running totals for the known categories.
///
/// Seeded with every known category at zero. Totals only ever grow.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsTotals {
    totals: BTreeMap<Category, f64>,
}

impl StatisticsTotals {
    pub fn new() -> Self {
        let totals = Category::KNOWN.iter().map(|c| (*c, 0.0)).collect();
        Self { totals }
    }

    /// Add an amount to a category total.
    ///
    /// Returns `false` when the amount was ignored: unknown categories, and
    /// negative or non-finite amounts, which no parsing rule produces.
    pub fn add(&mut self, category: Category, amount: f64) -> bool {
        if !amount.is_finite() || amount < 0.0 {
            warn!("Ignoring amount {} for {}", amount, category);
            return false;
        }

        match self.totals.get_mut(&category) {
            Some(total) => {
                *total += amount;
                info!("Added to {}: {}", category.label(), amount);
                true
            }
            None => {
                warn!("Unknown category {}, amount {} ignored", category, amount);
                false
            }
        }
    }

    /// Current total for a category (zero for unknown categories).
    pub fn get(&self, category: Category) -> f64 {
        self.totals.get(&category).copied().unwrap_or(0.0)
    }

    /// Totals in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.totals.iter().map(|(c, t)| (*c, *t))
    }
}

impl Default for StatisticsTotals {
    fn default() -> Self {
        Self::new()
    }
}
