use rand::Rng;

/// Evenly spaced samples over `[start, end]`, both endpoints included.
///
/// Zero samples yield an empty vector and a single sample yields `[start]`.
/// The last sample is pinned to `end` so that rounding never drifts past it.
pub fn linspace(start: f64, end: f64, num_points: usize) -> Vec<f64> {
    match num_points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num_points - 1) as f64;
            let mut samples: Vec<f64> = (0..num_points)
                .map(|i| start + i as f64 * step)
                .collect();
            samples[num_points - 1] = end;
            samples
        }
    }
}

/// Evaluates an ascending-power coefficient vector at `x` with Horner's scheme.
pub fn evaluate_coefficients(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, coefficient| acc * x + coefficient)
}

/// Checks that a row-major square matrix holds ascending powers of its second column.
pub fn is_vandermonde_matrix(matrix: &[f64]) -> bool {
    let n = (matrix.len() as f64).sqrt() as usize;
    if n * n != matrix.len() {
        return false;
    }

    for i in 0..n {
        let x = if n > 1 { matrix[i * n + 1] } else { 0.0 };
        let mut power = 1.0;
        for j in 0..n {
            if matrix[i * n + j] != power {
                return false;
            }
            power *= x;
        }
    }

    true
}

/// Generates `n` points with distinct integer x-coordinates in `[-n, n]`, shuffled,
/// and random y-coordinates in `[-10, 10)`.
pub fn generate_distinct_points<R: Rng>(rng: &mut R, n: usize) -> Vec<(f64, f64)> {
    let bound = n as i64;
    let mut xs: Vec<i64> = (-bound..=bound).collect();

    // Partial Fisher-Yates: the first `n` slots end up as a random sample.
    for i in 0..n.min(xs.len()) {
        let j = rng.gen_range(i..xs.len());
        xs.swap(i, j);
    }

    xs.into_iter()
        .take(n)
        .map(|x| (x as f64, rng.gen_range(-10.0..10.0)))
        .collect()
}
