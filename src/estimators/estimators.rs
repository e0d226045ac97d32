use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

use super::error::{EstimatorError, Result};
use super::hyperparams::{
    LinearRegressionParams, LinearRegressionValidParams, LogisticRegressionParams,
    LogisticRegressionValidParams,
};
use super::traits::Fit;

use crate::datafits::{Coefficients, Datafit, Logistic, Quadratic};
use crate::datasets::DatasetBase;
use crate::gd::{FitResult, IterationTrace};
use crate::helpers::helpers::create_curve;
use crate::solver::GDSolver;
use crate::Float;

/// The linear regression estimator
///
/// Ordinary least squares regression `y = v0 + v1 x` fitted by batch gradient
/// descent on the [`Quadratic`] datafit.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression<F: Float> {
    result: FitResult<F>,
}

impl<F: Float> LinearRegression<F> {
    /// This method instantiates a linear regression estimator with default
    /// parameters for the gradient descent solver.
    pub fn params() -> LinearRegressionParams<F> {
        LinearRegressionParams::new()
    }

    /// This method is a getter for the fitted coefficients.
    pub fn coefficients(&self) -> Coefficients<F> {
        self.result.coefficients()
    }

    /// This method is a getter for the recorded `(iteration, cost)` samples.
    pub fn trace(&self) -> &IterationTrace<F> {
        self.result.trace()
    }

    pub fn result(&self) -> &FitResult<F> {
        &self.result
    }

    pub fn into_result(self) -> FitResult<F> {
        self.result
    }

    /// Predicts the target of a single sample.
    pub fn predict(&self, x: F) -> F {
        Quadratic.predict(&self.result.coefficients(), x)
    }

    /// The fitted line evaluated at every abscissa in `xs`.
    pub fn curve(&self, xs: &[F]) -> Vec<(F, F)> {
        create_curve(xs, |x| self.predict(x))
    }
}

/// Seeds the linear regression coefficients from the first two samples:
/// `v1 = y0` and `v0 = (y1 - y0) / x1 - x0`.
///
/// Fails with [`EstimatorError::DegenerateSeed`] when `x1 == 0`.
pub fn linear_seed<F: Float>(dataset: &DatasetBase<F>) -> Result<Coefficients<F>> {
    if dataset.n_samples() < 2 {
        return Err(EstimatorError::NotEnoughSamples {
            required: 2,
            found: dataset.n_samples(),
        });
    }
    let x = dataset.features();
    let y = dataset.targets();
    let intercept = (y[1] - y[0]) / x[1] - x[0];
    if !intercept.is_finite() {
        return Err(EstimatorError::DegenerateSeed {
            intercept: intercept.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(Coefficients::new(intercept, y[0]))
}

/// This implements the batch gradient descent procedure for the linear
/// regression problem.
impl<F: Float> Fit<F, EstimatorError> for LinearRegressionValidParams<F> {
    /// If successful, the output of the gradient descent solver is an instance
    /// of [`LinearRegression`] wrapping the [`FitResult`].
    type Object = LinearRegression<F>;

    fn fit(&self, dataset: &DatasetBase<F>) -> Result<Self::Object> {
        let init = linear_seed(dataset)?;
        let result = self.solver().solve(dataset, &Quadratic, init)?;
        Ok(LinearRegression { result })
    }
}

/// The logistic regression estimator
///
/// Binary classifier `p = sigmoid(v0 + v1 x)` fitted by batch gradient descent
/// on the [`Logistic`] datafit, starting from random coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression<F: Float> {
    result: FitResult<F>,
}

impl<F: Float> LogisticRegression<F> {
    /// This method instantiates a logistic regression estimator with default
    /// parameters for the gradient descent solver.
    pub fn params() -> LogisticRegressionParams<F> {
        LogisticRegressionParams::new()
    }

    /// This method is a getter for the fitted coefficients.
    pub fn coefficients(&self) -> Coefficients<F> {
        self.result.coefficients()
    }

    /// This method is a getter for the recorded `(iteration, cost)` samples.
    pub fn trace(&self) -> &IterationTrace<F> {
        self.result.trace()
    }

    pub fn result(&self) -> &FitResult<F> {
        &self.result
    }

    pub fn into_result(self) -> FitResult<F> {
        self.result
    }

    /// The probability of the positive class for a single sample.
    pub fn predict_proba(&self, x: F) -> F {
        Logistic.predict(&self.result.coefficients(), x)
    }

    /// The predicted label (`0` or `1`), thresholding the probability at `0.5`.
    pub fn predict(&self, x: F) -> F {
        if self.predict_proba(x) >= F::cast(0.5) {
            F::one()
        } else {
            F::zero()
        }
    }

    /// The fitted probability curve evaluated at every abscissa in `xs`.
    pub fn curve(&self, xs: &[F]) -> Vec<(F, F)> {
        create_curve(xs, |x| self.predict_proba(x))
    }
}

/// Draws the intercept then the slope uniformly in `[0, 1)`.
pub fn logistic_seed<F: Float, R: Rng>(rng: &mut R) -> Coefficients<F> {
    let uniform = Uniform::new(F::zero(), F::one());
    let intercept = uniform.sample(rng);
    let slope = uniform.sample(rng);
    Coefficients::new(intercept, slope)
}

/// This implements the batch gradient descent procedure for the logistic
/// regression problem.
impl<F: Float> Fit<F, EstimatorError> for LogisticRegressionValidParams<F> {
    /// If successful, the output of the gradient descent solver is an instance
    /// of [`LogisticRegression`] wrapping the [`FitResult`].
    type Object = LogisticRegression<F>;

    fn fit(&self, dataset: &DatasetBase<F>) -> Result<Self::Object> {
        let mut rng = match self.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let init = logistic_seed(&mut rng);
        let result = self.solver().solve(dataset, &Logistic, init)?;
        Ok(LogisticRegression { result })
    }
}
