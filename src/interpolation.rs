use crate::error::{InterpolationError, Result};
use crate::matrix_math::{linspace, VandermondeMatrix};
use log::debug;
use serde::{Deserialize, Serialize};

/// Number of samples used when a range is evaluated without an explicit count.
pub const DEFAULT_NUM_POINTS: usize = 100;

/// Distance the default plotting range extends past the outermost nodes.
pub const DEFAULT_RANGE_PADDING: f64 = 1.0;

/// A single `(x, y)` sample. Serialized as the two-element list `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// # Lagrange Interpolator
///
/// Holds a point set sorted by ascending x with pairwise distinct x-coordinates and
/// evaluates the unique polynomial of degree `n - 1` passing through all of them:
///
/// P(x) = Σ_j y_j * L_j(x),   L_j(x) = Π_{i != j} (x - x_i) / (x_j - x_i)
///
/// The interpolator is immutable once built; every operation is a pure function of the
/// stored points.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolator {
    points: Vec<Point>,
    x_values: Vec<f64>,
    y_values: Vec<f64>,
}

impl Interpolator {
    /// Builds an interpolator from at least two points with distinct x-coordinates.
    ///
    /// Duplicates are detected with exact float equality, so `1.0` and `1.0000000001` are
    /// accepted as distinct nodes.
    pub fn new<I, P>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let mut points: Vec<Point> = points.into_iter().map(Into::into).collect();
        if points.len() < 2 {
            return Err(InterpolationError::InvalidInput {
                count: points.len(),
            });
        }

        let duplicates = find_duplicates(&points);
        if !duplicates.is_empty() {
            return Err(InterpolationError::DuplicateCoordinate { duplicates });
        }

        points.sort_by(|a, b| a.x.total_cmp(&b.x));
        debug!("built interpolator over {} points", points.len());

        Ok(Self::from_sorted(points))
    }

    /// Builds an interpolator from points that already satisfy the construction invariants.
    fn from_sorted(points: Vec<Point>) -> Self {
        let x_values = points.iter().map(|p| p.x).collect();
        let y_values = points.iter().map(|p| p.y).collect();
        Interpolator {
            points,
            x_values,
            y_values,
        }
    }

    /// Interpolator over the first `count` sorted points.
    pub(crate) fn prefix(&self, count: usize) -> Self {
        Self::from_sorted(self.points[..count].to_vec())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    pub fn y_values(&self) -> &[f64] {
        &self.y_values
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Construction guarantees at least two nodes.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Degree of the interpolating polynomial.
    pub fn degree(&self) -> usize {
        self.len() - 1
    }

    /// Smallest and largest x-coordinate.
    pub fn x_bounds(&self) -> (f64, f64) {
        (self.x_values[0], self.x_values[self.len() - 1])
    }

    /// Default plotting range: the node span padded by one unit on each side.
    pub fn default_range(&self) -> (f64, f64) {
        let (min, max) = self.x_bounds();
        (min - DEFAULT_RANGE_PADDING, max + DEFAULT_RANGE_PADDING)
    }

    /// Value of the `j`-th Lagrange basis polynomial at `x`.
    pub fn basis(&self, x: f64, j: usize) -> f64 {
        let x_j = self.x_values[j];
        self.x_values
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != j)
            .fold(1.0, |acc, (_, x_i)| acc * ((x - x_i) / (x_j - x_i)))
    }

    /// Value of the interpolating polynomial at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.y_values
            .iter()
            .enumerate()
            .map(|(j, y_j)| y_j * self.basis(x, j))
            .sum()
    }

    /// Samples the polynomial at `num_points` evenly spaced x-values over `[x_min, x_max]`.
    ///
    /// Missing bounds fall back to [`Interpolator::default_range`].
    pub fn evaluate_range(
        &self,
        x_min: Option<f64>,
        x_max: Option<f64>,
        num_points: usize,
    ) -> (Vec<f64>, Vec<f64>) {
        let (default_min, default_max) = self.default_range();
        let xs = linspace(
            x_min.unwrap_or(default_min),
            x_max.unwrap_or(default_max),
            num_points,
        );
        let ys = self.evaluate_at(&xs);
        (xs, ys)
    }

    /// [`Interpolator::evaluate_range`] over the default range with the default sample count.
    pub fn evaluate_default_range(&self) -> (Vec<f64>, Vec<f64>) {
        self.evaluate_range(None, None, DEFAULT_NUM_POINTS)
    }

    pub fn evaluate_at(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Coefficients of the interpolating polynomial, ascending power, one per node.
    pub fn coefficients(&self) -> Result<Vec<f64>> {
        VandermondeMatrix::new(self.x_values.clone()).solve(&self.y_values)
    }
}

/// Distinct x-values that occur more than once, sorted ascending.
fn find_duplicates(points: &[Point]) -> Vec<f64> {
    let mut xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    xs.sort_by(f64::total_cmp);

    let mut duplicates: Vec<f64> = Vec::new();
    for pair in xs.windows(2) {
        if pair[0] == pair[1] && duplicates.last() != Some(&pair[0]) {
            duplicates.push(pair[0]);
        }
    }
    duplicates
}
