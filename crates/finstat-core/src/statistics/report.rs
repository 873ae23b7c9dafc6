//! Fixed-format statistics report.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::info;

use super::StatisticsTotals;
use crate::error::ReportError;

/// Render totals as the report text.
pub fn render(totals: &StatisticsTotals) -> String {
    let mut output = String::from("Statistics:\n");

    for (category, total) in totals.iter() {
        let _ = writeln!(
            output,
            "  - Total turnover for all {}: {}",
            category.label(),
            format_amount(total)
        );
    }

    output
}

/// Two-decimal rendering, rounding half up from the shortest decimal form.
///
/// `0.125` renders as `0.13`, where `{:.2}` would round the binary value
/// down to `0.12`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return format!("{:.2}", value);
    }

    let shortest = value.abs().to_string();
    let (whole, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let cents = fraction.get(..2).unwrap_or(fraction);

    let mut digits: Vec<u8> = format!("{}{:0<2}", whole, cents).into_bytes();
    let round_up = fraction.as_bytes().get(2).is_some_and(|d| *d >= b'5');

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let digits: String = digits.into_iter().map(char::from).collect();
    let (units, cents) = digits.split_at(digits.len() - 2);
    let sign = if value < 0.0 { "-" } else { "" };

    format!("{}{}.{}", sign, units, cents)
}

/// Write the report to `path`, replacing any previous content.
pub fn write_report(path: &Path, totals: &StatisticsTotals) -> Result<(), ReportError> {
    fs::write(path, render(totals)).map_err(|source| ReportError {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Statistics successfully written to file {}", path.display());
    Ok(())
}
