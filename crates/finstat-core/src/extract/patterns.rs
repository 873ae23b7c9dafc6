//! Regex patterns for amount extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Everything that cannot be part of a plain amount
    pub static ref NON_AMOUNT_CHARS: Regex = Regex::new(r"[^0-9,.]").unwrap();

    // "Order Total 1,234.50": comma thousands separators, one decimal point
    pub static ref ORDER_TOTAL: Regex = Regex::new(
        r"Order Total\s+(\d{1,3}(?:,\d{3})*\.\d+)"
    ).unwrap();
}
