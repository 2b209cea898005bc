use crate::interpolation::{Interpolator, Point, DEFAULT_NUM_POINTS};
use log::trace;
use serde::{Deserialize, Serialize};

/// Default upper bound on the number of animation frames.
pub const DEFAULT_MAX_STEPS: usize = 50;

/// One frame of the build-up animation: the interpolant through the first `step + 1`
/// sorted points, sampled over the plotting range of the full point set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationStep {
    pub step: usize,
    pub points_used: Vec<Point>,
    pub x_values: Vec<f64>,
    pub y_values: Vec<f64>,
    pub polynomial_degree: usize,
}

impl Interpolator {
    /// Frames for `step = 1 ..= min(max_steps, n - 1)`; the first frame is the line
    /// through the two leftmost points.
    ///
    /// Each frame is solved from scratch over its own prefix of points.
    pub fn animation_steps(&self, max_steps: usize) -> Vec<AnimationStep> {
        let (x_min, x_max) = self.default_range();
        let last_step = max_steps.min(self.len() - 1);

        (1..=last_step)
            .map(|step| {
                let partial = self.prefix(step + 1);
                let (x_values, y_values) =
                    partial.evaluate_range(Some(x_min), Some(x_max), DEFAULT_NUM_POINTS);
                trace!("animation step {} over {} points", step, partial.len());

                AnimationStep {
                    step,
                    points_used: partial.points().to_vec(),
                    x_values,
                    y_values,
                    polynomial_degree: partial.degree(),
                }
            })
            .collect()
    }
}
