//! JSON-compatible request and report types wrapping the whole interpolation pipeline.

use crate::animation::AnimationStep;
use crate::config::Settings;
use crate::error::{InterpolationError, Result};
use crate::formula::{format_formula, round_for_display};
use crate::interpolation::{Interpolator, Point};
use crate::terms::TermDetails;
use log::debug;
use serde::{Deserialize, Serialize};

fn default_name() -> String {
    "Untitled Set".to_string()
}

/// Points to interpolate, each given as `[x, y]`, plus optional explicit evaluation points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpolationRequest {
    pub points: Vec<[f64; 2]>,
    #[serde(default)]
    pub x_values: Option<Vec<f64>>,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl InterpolationRequest {
    pub fn new(points: Vec<[f64; 2]>) -> Self {
        InterpolationRequest {
            points,
            x_values: None,
            name: default_name(),
            description: String::new(),
        }
    }

    pub fn with_x_values(mut self, x_values: Vec<f64>) -> Self {
        self.x_values = Some(x_values);
        self
    }

    /// Decodes a request; points that are not two-element numeric lists are rejected.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Everything the core computes for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpolationReport {
    pub coefficients: Vec<f64>,
    /// `coefficients` rounded the way the formula shows them.
    pub display_coefficients: Vec<f64>,
    pub evaluation_points: Vec<f64>,
    pub evaluation_results: Vec<f64>,
    pub animation_data: Vec<AnimationStep>,
    pub lagrange_terms_details: TermDetails,
    pub original_points: Vec<Point>,
    pub polynomial_degree: usize,
    pub formula: String,
}

impl InterpolationReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Runs the request through the interpolator.
///
/// Explicit `x_values` are evaluated as given when present and non-empty; otherwise the
/// node span padded by `settings.range_padding` is sampled at `settings.num_points`.
pub fn build_report(
    request: &InterpolationRequest,
    settings: &Settings,
) -> Result<InterpolationReport> {
    let interpolator = Interpolator::new(request.points.iter().copied())?;

    let (evaluation_points, evaluation_results) = match &request.x_values {
        Some(xs) if !xs.is_empty() => (xs.clone(), interpolator.evaluate_at(xs)),
        _ => {
            let (x_min, x_max) = interpolator.x_bounds();
            interpolator.evaluate_range(
                Some(x_min - settings.range_padding),
                Some(x_max + settings.range_padding),
                settings.num_points,
            )
        }
    };

    let coefficients = interpolator.coefficients()?;
    let formula = format_formula(&coefficients);
    debug!("report for '{}': {}", request.name, formula);

    Ok(InterpolationReport {
        formula,
        display_coefficients: coefficients.iter().copied().map(round_for_display).collect(),
        coefficients,
        evaluation_points,
        evaluation_results,
        animation_data: interpolator.animation_steps(settings.max_steps),
        lagrange_terms_details: interpolator.term_details(),
        // Input order, not the sorted order
        original_points: request.points.iter().copied().map(Point::from).collect(),
        polynomial_degree: interpolator.degree(),
    })
}

/// Serializes a numeric array into the text form used for stored results.
pub fn encode_blob(values: &[f64]) -> Result<String> {
    Ok(serde_json::to_string(values)?)
}

/// Inverse of [`encode_blob`].
pub fn decode_blob(blob: &str) -> Result<Vec<f64>> {
    serde_json::from_str(blob).map_err(|err| {
        InterpolationError::InvalidRequest(format!("malformed numeric blob: {}", err))
    })
}
