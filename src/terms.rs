use crate::interpolation::Interpolator;
use serde::{Deserialize, Serialize};

/// Symbolic and numeric breakdown of one basis polynomial `L_j`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LagrangeTermDetail {
    /// `L_j(x) = (x - x_0) * ... / denominator_value`
    pub symbolic: String,
    /// `(x - x_i)` for every `i != j`
    pub factors: Vec<String>,
    /// `(x_j - x_i)` for every `i != j`
    pub denominator_calculation: Vec<String>,
    pub denominator_value: f64,
    /// Π (evaluation_point - x_i) over `i != j`
    pub numerator_at_eval: f64,
    /// `L_j(evaluation_point)`
    pub final_value: f64,
}

/// Per-term breakdown of the interpolant at a single demonstration point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermDetails {
    pub evaluation_point: f64,
    pub terms: Vec<LagrangeTermDetail>,
    pub polynomial_value: f64,
}

/// Renders a node the way the term strings show it: shortest round-trip digits, with
/// exponents written as a sign and at least two digits (`1e+16`, `1.5e-07`).
fn format_node(value: f64) -> String {
    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

impl Interpolator {
    /// Point at which [`Interpolator::term_details`] evaluates the basis.
    ///
    /// `0.0` whenever the node span contains zero, otherwise the midpoint of the span.
    pub fn term_evaluation_point(&self) -> f64 {
        let (x_min, x_max) = self.x_bounds();
        if x_min <= 0.0 && 0.0 <= x_max {
            0.0
        } else {
            (x_min + x_max) / 2.0
        }
    }

    pub fn term_details(&self) -> TermDetails {
        let test_x = self.term_evaluation_point();
        let xs = self.x_values();

        let terms = xs
            .iter()
            .enumerate()
            .map(|(j, &x_j)| {
                let others: Vec<f64> = xs
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != j)
                    .map(|(_, &x_i)| x_i)
                    .collect();

                let factors: Vec<String> = others
                    .iter()
                    .map(|&x_i| format!("(x - {})", format_node(x_i)))
                    .collect();
                let denominator_calculation = others
                    .iter()
                    .map(|&x_i| format!("({} - {})", format_node(x_j), format_node(x_i)))
                    .collect();
                let denominator_value = others.iter().fold(1.0, |acc, x_i| acc * (x_j - x_i));
                let numerator_at_eval =
                    others.iter().fold(1.0, |acc, x_i| acc * (test_x - x_i));

                LagrangeTermDetail {
                    symbolic: format!(
                        "L_{}(x) = {} / {}",
                        j,
                        factors.join(" * "),
                        format_node(denominator_value)
                    ),
                    factors,
                    denominator_calculation,
                    denominator_value,
                    numerator_at_eval,
                    final_value: self.basis(test_x, j),
                }
            })
            .collect();

        TermDetails {
            evaluation_point: test_x,
            terms,
            polynomial_value: self.evaluate(test_x),
        }
    }
}
