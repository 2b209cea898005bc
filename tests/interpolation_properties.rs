use lagrange_exploration::matrix_math::evaluate_coefficients;
use lagrange_exploration::{InterpolationError, Interpolator};
use std::collections::HashSet;
use std::error::Error;

use proptest::collection;
use proptest::prelude::*;

fn check_passes_through_points(interpolator: &Interpolator) -> Result<(), Box<dyn Error>> {
    for point in interpolator.points() {
        let value = interpolator.evaluate(point.x);
        if (value - point.y).abs() > 1e-9 {
            return Err(format!(
                "P({}) = {}, expected {} for points {:?}",
                point.x,
                value,
                point.y,
                interpolator.points()
            )
            .into());
        }
    }
    Ok(())
}

fn check_coefficients_reproduce_points(interpolator: &Interpolator) -> Result<(), Box<dyn Error>> {
    let coefficients = interpolator.coefficients()?;
    if coefficients.len() != interpolator.len() {
        return Err(format!(
            "{} coefficients for {} points",
            coefficients.len(),
            interpolator.len()
        )
        .into());
    }

    for point in interpolator.points() {
        let value = evaluate_coefficients(&coefficients, point.x);
        // Coefficient reconstruction is less accurate than the Lagrange form
        if (value - point.y).abs() > 1e-6 * (1.0 + point.y.abs()) {
            return Err(format!(
                "coefficients {:?} give {} at x = {}, expected {}",
                coefficients, value, point.x, point.y
            )
            .into());
        }
    }
    Ok(())
}

#[derive(Debug)]
pub struct PointSetInput {
    // Distinct integer x-values keep the Vandermonde system well conditioned
    pub xs: Vec<i32>,
    pub ys: Vec<f64>,
}

impl Arbitrary for PointSetInput {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        collection::hash_set(-6i32..=6, 2..=7)
            .prop_flat_map(|xs: HashSet<i32>| {
                let size = xs.len();
                let xs: Vec<i32> = xs.into_iter().collect();
                collection::vec(-50.0f64..50.0, size)
                    .prop_map(move |ys| PointSetInput::new(xs.clone(), ys))
            })
            .boxed()
    }
}

impl PointSetInput {
    pub fn new(xs: Vec<i32>, ys: Vec<f64>) -> Self {
        PointSetInput { xs, ys }
    }

    pub fn get_points(&self) -> Vec<(f64, f64)> {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(x, y)| (*x as f64, *y))
            .collect()
    }

    pub fn get_interpolator(&self) -> Result<Interpolator, Box<dyn Error>> {
        Ok(Interpolator::new(self.get_points())?)
    }
}

proptest! {
    #[test]
    fn interpolation_passes_through_points(input in any::<PointSetInput>()) {
        let interpolator = input.get_interpolator().unwrap();

        check_passes_through_points(&interpolator).unwrap();
    }

    #[test]
    fn coefficients_reproduce_points(input in any::<PointSetInput>()) {
        let interpolator = input.get_interpolator().unwrap();

        check_coefficients_reproduce_points(&interpolator).unwrap();
    }

    #[test]
    fn animation_frames_use_sorted_prefixes(input in any::<PointSetInput>()) {
        let interpolator = input.get_interpolator().unwrap();
        let steps = interpolator.animation_steps(50);

        prop_assert_eq!(steps.len(), interpolator.len() - 1);
        for (i, frame) in steps.iter().enumerate() {
            prop_assert_eq!(frame.step, i + 1);
            prop_assert_eq!(frame.polynomial_degree, i + 1);
            prop_assert_eq!(&frame.points_used[..], &interpolator.points()[..i + 2]);
        }
    }

    #[test]
    fn input_order_does_not_matter(input in any::<PointSetInput>()) {
        let mut reversed = input.get_points();
        reversed.reverse();

        let interpolator = input.get_interpolator().unwrap();
        let reversed = Interpolator::new(reversed).unwrap();

        prop_assert_eq!(interpolator.points(), reversed.points());
    }

    #[test]
    fn repeated_x_is_always_reported(input in any::<PointSetInput>()) {
        let mut points = input.get_points();
        let repeated = points[0].0;
        points.push((repeated, 0.0));

        prop_assert_eq!(
            Interpolator::new(points).unwrap_err(),
            InterpolationError::DuplicateCoordinate { duplicates: vec![repeated] }
        );
    }
}

#[test]
fn test_parabola_end_to_end() {
    let interpolator = Interpolator::new(vec![(0.0, 1.0), (1.0, 3.0), (2.0, 7.0)]).unwrap();

    assert_eq!(interpolator.evaluate(0.0), 1.0);
    assert_eq!(interpolator.evaluate(1.0), 3.0);
    assert_eq!(interpolator.evaluate(2.0), 7.0);

    let coefficients = interpolator.coefficients().unwrap();
    for (actual, expected) in coefficients.iter().zip([1.0, 1.0, 1.0]) {
        assert!((actual - expected).abs() < 1e-9);
    }
}

#[test]
fn test_term_detail_evaluation_points() {
    let symmetric = Interpolator::new(vec![(-2.0, 4.0), (0.5, 1.0), (2.0, 4.0)]).unwrap();
    assert_eq!(symmetric.term_details().evaluation_point, 0.0);

    let shifted = Interpolator::new(vec![(3.0, 4.0), (6.0, 1.0), (7.0, 4.0)]).unwrap();
    assert_eq!(shifted.term_details().evaluation_point, 5.0);
}
