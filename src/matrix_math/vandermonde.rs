use crate::error::{InterpolationError, Result};
use crate::matrix_math::Matrix;
use log::debug;
use nalgebra::linalg::SVD;
use nalgebra::{DMatrix, DVector};

/// Determinant magnitude below which the system is reported as singular.
pub const SINGULARITY_EPSILON: f64 = 1e-12;

/// Upper bound on SVD sweeps before the solve is reported as non-convergent.
const SVD_MAX_ITERATIONS: usize = 10_000;

/// ## Vandermonde Matrix
///
/// The `VandermondeMatrix` struct represents the square matrix of ascending powers of a set
/// of nodes. Row `i` holds `x_i^0, x_i^1, ..., x_i^(n-1)`, so solving `V * c = y` yields the
/// coefficients `c` of the interpolating polynomial in ascending-power order.
///
/// The matrix is stored by its nodes only and expanded on demand.
pub struct VandermondeMatrix {
    pub nodes: Vec<f64>,
}

impl VandermondeMatrix {
    /// Creates a new `VandermondeMatrix` from its nodes (the x-coordinates).
    pub fn new(nodes: Vec<f64>) -> Self {
        VandermondeMatrix { nodes }
    }

    fn to_dmatrix(&self) -> DMatrix<f64> {
        let n = self.nodes.len();
        DMatrix::from_row_slice(n, n, &self.get_matrix())
    }

    pub fn determinant(&self) -> f64 {
        self.to_dmatrix().determinant()
    }

    /// Solves `V * c = rhs` for `c` with an SVD least-squares solve.
    ///
    /// Singular values below `f64::EPSILON * n * s_max` are discarded, the same cutoff
    /// LAPACK-backed `lstsq` uses by default. The determinant is checked first so that
    /// nearly coincident nodes are reported as singular rather than silently solved.
    pub fn solve(&self, rhs: &[f64]) -> Result<Vec<f64>> {
        let n = self.get_len();
        if rhs.len() != n {
            return Err(InterpolationError::Numerical(format!(
                "right-hand side has length {}, expected {}",
                rhs.len(),
                n
            )));
        }

        let matrix = self.to_dmatrix();
        let determinant = matrix.determinant();
        if determinant.is_nan() {
            return Err(InterpolationError::Numerical(
                "determinant of the Vandermonde matrix is not a number".into(),
            ));
        }
        if determinant.abs() < SINGULARITY_EPSILON {
            return Err(InterpolationError::SingularMatrix { determinant });
        }

        let svd = SVD::try_new(matrix, true, true, f64::EPSILON, SVD_MAX_ITERATIONS)
            .ok_or_else(|| InterpolationError::Numerical("SVD did not converge".into()))?;

        let cutoff = f64::EPSILON * n as f64 * svd.singular_values.max();
        if !cutoff.is_finite() {
            return Err(InterpolationError::Numerical(
                "singular values of the Vandermonde matrix are not finite".into(),
            ));
        }

        let rank = svd.rank(cutoff);
        if rank < n {
            return Err(InterpolationError::RankDeficient { rank, expected: n });
        }

        let solution = svd
            .solve(&DVector::from_column_slice(rhs), cutoff)
            .map_err(|msg| InterpolationError::Numerical(msg.to_string()))?;

        debug!(
            "solved {}x{} Vandermonde system, determinant = {:e}",
            n, n, determinant
        );

        Ok(solution.iter().copied().collect())
    }
}

impl Matrix<f64> for VandermondeMatrix {
    /// Returns the matrix dimension - the number of nodes.
    fn get_len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns all the matrix elements row by row.
    fn get_matrix(&self) -> Vec<f64> {
        let n = self.nodes.len();
        let mut matrix = Vec::with_capacity(n * n);

        for &x in &self.nodes {
            let mut power = 1.0;
            for _ in 0..n {
                matrix.push(power);
                power *= x;
            }
        }

        matrix
    }
}
