
/// This module contains the numerical helpers shared by the datafits and the
/// estimators.
pub mod helpers {
    use crate::Float;

    /// The logistic function `1 / (1 + exp(-z))`.
    ///
    /// No clamping is applied: in double precision the output rounds to
    /// exactly `1` for `z` above ~37 and underflows to `0` below ~-745.
    pub fn sigmoid<F: Float>(z: F) -> F {
        F::one() / (F::one() + F::exp(-z))
    }

    /// This function maps a sequence of abscissae through a predictor and
    /// returns the `(x, f(x))` pairs, ready to be drawn as a fitted curve.
    pub fn create_curve<F, P>(xs: &[F], predictor: P) -> Vec<(F, F)>
    where
        F: Float,
        P: Fn(F) -> F,
    {
        xs.iter().map(|&x| (x, predictor(x))).collect()
    }
}

/// This module contains helpers functions to efficiently write tests.
pub mod test_helpers {
    use crate::datafits::{Coefficients, Datafit};
    use crate::datasets::DatasetBase;
    use crate::Float;
    use approx::AbsDiffEq;
    use ndarray::Array1;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    pub fn assert_all_close<F>(x: F, y: F, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        if x.abs_diff_ne(&y, delta) {
            panic!("x: {}, y: {} ; with precision level {}", x, y, delta);
        }
    }

    pub fn assert_coefficients_all_close<F>(x: &Coefficients<F>, y: &Coefficients<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_all_close(x.intercept, y.intercept, delta);
        assert_all_close(x.slope, y.slope, delta);
    }

    /// Central finite differences of [`Datafit::value`] with respect to the
    /// intercept and the slope.
    pub fn finite_difference_gradient<F: Float, DF: Datafit<F>>(
        datafit: &DF,
        dataset: &DatasetBase<F>,
        coefficients: &Coefficients<F>,
        eps: F,
    ) -> Coefficients<F> {
        let two_eps = F::cast(2) * eps;
        let shifted = |d_intercept: F, d_slope: F| {
            datafit.value(
                dataset,
                &Coefficients::new(
                    coefficients.intercept + d_intercept,
                    coefficients.slope + d_slope,
                ),
            )
        };
        Coefficients::new(
            (shifted(eps, F::zero()) - shifted(-eps, F::zero())) / two_eps,
            (shifted(F::zero(), eps) - shifted(F::zero(), -eps)) / two_eps,
        )
    }

    pub fn fill_random_vector(capacity: usize, seed: u64) -> Vec<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0., 1.).unwrap();

        let mut data_x: Vec<f64> = Vec::with_capacity(capacity);
        for _ in 0..data_x.capacity() {
            data_x.push(normal.sample(&mut r));
        }
        data_x
    }

    /// Generates a noisy binary classification problem: `x` is standard normal
    /// and the label is `1` when `x + noise > 0`.
    pub fn generate_random_data(n_samples: usize) -> DatasetBase<f64> {
        let data_x = fill_random_vector(n_samples, 42);
        let data_e = fill_random_vector(n_samples, 7);
        let y = data_x
            .iter()
            .zip(&data_e)
            .map(|(&x, &e)| if x + 0.5 * e > 0. { 1. } else { 0. })
            .collect::<Vec<f64>>();
        DatasetBase::new(Array1::from(data_x), Array1::from(y)).unwrap()
    }
}
