//! Amount parsing rules for the final line of a document.

use super::patterns::{NON_AMOUNT_CHARS, ORDER_TOTAL};
use super::AmountRule;

/// Plain amount used by invoices and utility bills.
///
/// Keeps digits, commas and periods, reads a comma as the decimal separator.
pub struct PlainAmount;

impl AmountRule for PlainAmount {
    fn parse(&self, line: &str) -> Option<f64> {
        parse_plain_amount(line)
    }
}

/// Labelled order total (`Order Total 1,234.50`).
pub struct OrderTotal;

impl AmountRule for OrderTotal {
    fn parse(&self, line: &str) -> Option<f64> {
        parse_order_total(line)
    }
}

/// Parse an amount such as `Total: 123,45` or `45.00`.
pub fn parse_plain_amount(line: &str) -> Option<f64> {
    let cleaned = NON_AMOUNT_CHARS.replace_all(line, "");
    let normalized = cleaned.replace(',', ".");

    normalized.parse::<f64>().ok().filter(|amount| amount.is_finite())
}

/// Parse the number following the `Order Total` label.
pub fn parse_order_total(line: &str) -> Option<f64> {
    let caps = ORDER_TOTAL.captures(line)?;
    caps[1].replace(',', "").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_amount() {
        assert_eq!(parse_plain_amount("Total: 123,45"), Some(123.45));
        assert_eq!(parse_plain_amount("45.00"), Some(45.0));
        assert_eq!(parse_plain_amount("Amount due 7 EUR"), Some(7.0));
        assert_eq!(parse_plain_amount("Sum: 1200,5 BYN"), Some(1200.5));
    }

    #[test]
    fn test_parse_plain_amount_failures() {
        assert_eq!(parse_plain_amount("N/A"), None);
        assert_eq!(parse_plain_amount(""), None);
        // both separators end up as periods
        assert_eq!(parse_plain_amount("1,234.50"), None);
        assert_eq!(parse_plain_amount("1.234.567"), None);
    }

    #[test]
    fn test_parse_order_total() {
        assert_eq!(
            parse_order_total("Shipment complete. Order Total 1,234.50"),
            Some(1234.50)
        );
        assert_eq!(parse_order_total("Order Total 99.9"), Some(99.9));
        assert_eq!(
            parse_order_total("Order Total 12,345,678.01 USD"),
            Some(12_345_678.01)
        );
    }

    #[test]
    fn test_parse_order_total_failures() {
        assert_eq!(parse_order_total("Total 1,234.50"), None);
        assert_eq!(parse_order_total("Order Total 1234"), None);
        assert_eq!(parse_order_total("Order Total: 10.00"), None);
        assert_eq!(parse_order_total("order total 10.00"), None);
    }
}
