//! Human-readable rendering of polynomial coefficients.
//!
//! Coefficients come in ascending-power order (as produced by
//! [`Interpolator::coefficients`](crate::Interpolator::coefficients)) and are rendered from
//! the highest power down, e.g. `[1.0, -1.0]` becomes `P(x) = -x + 1`.

use log::warn;
use thiserror::Error;

/// Coefficients with a smaller magnitude are treated as exactly zero.
const ZERO_TOLERANCE: f64 = 1e-10;

/// Tolerance used when matching magnitudes against fractions and whole numbers.
const MATCH_TOLERANCE: f64 = 1e-10;

/// Rendered in place of a formula when the coefficient data cannot be used.
pub const INVALID_FORMAT: &str = "Invalid coefficients format";

/// Decimal approximations of common fractions, checked before the denominator scan.
const COMMON_FRACTIONS: [(f64, (u32, u32)); 13] = [
    (0.5, (1, 2)),
    (0.25, (1, 4)),
    (0.75, (3, 4)),
    (0.125, (1, 8)),
    (0.875, (7, 8)),
    (0.333333, (1, 3)),
    (0.666667, (2, 3)),
    (0.2, (1, 5)),
    (0.4, (2, 5)),
    (0.6, (3, 5)),
    (0.8, (4, 5)),
    (0.166667, (1, 6)),
    (0.833333, (5, 6)),
];

const MAX_DENOMINATOR: u32 = 8;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("coefficient {index} is not a finite number")]
    NonFinite { index: usize },

    #[error("coefficients are not a list of numbers: {0}")]
    Malformed(String),
}

/// Renders the polynomial, degrading to [`INVALID_FORMAT`] instead of failing.
pub fn format_formula(coefficients: &[f64]) -> String {
    try_format_formula(coefficients).unwrap_or_else(|err| {
        warn!("cannot format polynomial: {}", err);
        INVALID_FORMAT.to_string()
    })
}

/// Renders the polynomial stored as a JSON array of numbers.
pub fn format_formula_json(coefficients: &str) -> String {
    serde_json::from_str::<Vec<f64>>(coefficients)
        .map_err(|err| FormatError::Malformed(err.to_string()))
        .and_then(|coefficients| try_format_formula(&coefficients))
        .unwrap_or_else(|err| {
            warn!("cannot format polynomial: {}", err);
            INVALID_FORMAT.to_string()
        })
}

pub fn try_format_formula(coefficients: &[f64]) -> Result<String, FormatError> {
    if let Some(index) = coefficients.iter().position(|c| !c.is_finite()) {
        return Err(FormatError::NonFinite { index });
    }

    let mut formula = String::new();
    for (power, &coefficient) in coefficients.iter().enumerate().rev() {
        if coefficient.abs() < ZERO_TOLERANCE {
            continue;
        }

        let negative = coefficient < 0.0;
        if formula.is_empty() {
            if negative {
                formula.push('-');
            }
        } else if negative {
            formula.push_str(" - ");
        } else {
            formula.push_str(" + ");
        }

        let magnitude = coefficient.abs();
        if power == 0 || magnitude != 1.0 {
            formula.push_str(&format_magnitude(magnitude));
        }

        match power {
            0 => {}
            1 => formula.push('x'),
            2 => formula.push_str("x²"),
            _ => formula.push_str(&format!("x^{}", power)),
        }
    }

    if formula.is_empty() {
        Ok("P(x) = 0".to_string())
    } else {
        Ok(format!("P(x) = {}", formula))
    }
}

fn format_magnitude(magnitude: f64) -> String {
    match as_simple_fraction(magnitude) {
        Some((numerator, denominator)) => format!("({}/{})", numerator, denominator),
        None => format_decimal(magnitude),
    }
}

/// Matches `value` against the common-fraction table, then against every
/// `numerator / denominator` with `1 <= numerator < denominator <= 8`.
fn as_simple_fraction(value: f64) -> Option<(u32, u32)> {
    COMMON_FRACTIONS
        .iter()
        .find(|(decimal, _)| (value - decimal).abs() < MATCH_TOLERANCE)
        .map(|(_, fraction)| *fraction)
        .or_else(|| {
            (2..=MAX_DENOMINATOR)
                .flat_map(|denominator| {
                    (1..denominator).map(move |numerator| (numerator, denominator))
                })
                .find(|&(numerator, denominator)| {
                    (value - numerator as f64 / denominator as f64).abs() < MATCH_TOLERANCE
                })
        })
}

/// Whole numbers print without a decimal point; anything else is rounded to two
/// places with trailing zeros dropped.
fn format_decimal(value: f64) -> String {
    if (value - value.round()).abs() < MATCH_TOLERANCE {
        // f64 Display prints every digit, so magnitudes past i64 stay exact
        return format!("{}", value.round());
    }

    let formatted = format!("{:.2}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Numeric display rounding: whole numbers snap to the integer, others keep two decimals.
pub fn round_for_display(coefficient: f64) -> f64 {
    if (coefficient - coefficient.round()).abs() < MATCH_TOLERANCE {
        coefficient.round()
    } else {
        (coefficient * 100.0).round() / 100.0
    }
}
