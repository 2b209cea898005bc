//! Lagrange interpolation over `f64` points.
//!
//! [`Interpolator`] evaluates the interpolating polynomial, solves for its coefficients,
//! and produces the step-by-step animation frames and per-term breakdowns used for
//! teaching displays. [`formula::format_formula`] renders coefficients as text and
//! [`report`] bundles everything into JSON-compatible values.

pub mod animation;
pub mod config;
pub mod error;
pub mod formula;
pub mod interpolation;
pub mod matrix_math;
pub mod report;
pub mod terms;

pub use animation::AnimationStep;
pub use config::Settings;
pub use error::{InterpolationError, Result};
pub use formula::{format_formula, FormatError};
pub use interpolation::{Interpolator, Point};
pub use report::{build_report, InterpolationReport, InterpolationRequest};
pub use terms::{LagrangeTermDetail, TermDetails};
