use super::error::{EstimatorError, Result};
use super::param_guard::ParamGuard;
use crate::solver::Solver;
use crate::Float;

/// Checks the hyperparameters every gradient descent estimator shares.
fn check_descent_params<F: Float>(
    learning_rate: F,
    tolerance: F,
    max_iterations: Option<usize>,
) -> Result<()> {
    if !learning_rate.is_finite() || learning_rate <= F::zero() {
        Err(EstimatorError::InvalidLearningRate(
            learning_rate.to_f32().unwrap_or(f32::NAN),
        ))
    } else if tolerance.is_nan() || tolerance <= F::zero() {
        Err(EstimatorError::InvalidTolerance(
            tolerance.to_f32().unwrap_or(f32::NAN),
        ))
    } else if max_iterations == Some(0) {
        Err(EstimatorError::InvalidMaxIterations(0))
    } else {
        Ok(())
    }
}

/// A verified hyperparameter set ready for the fitting of a linear regression
/// model
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressionValidParams<F> {
    learning_rate: F,
    tolerance: F,
    max_iterations: Option<usize>,
    verbose: bool,
}

impl<F: Float> LinearRegressionValidParams<F> {
    pub fn learning_rate(&self) -> F {
        self.learning_rate
    }

    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// The gradient descent solver configured by these hyperparameters.
    pub fn solver(&self) -> Solver<F> {
        Solver::new()
            .learning_rate(self.learning_rate)
            .tolerance(self.tolerance)
            .max_iterations(self.max_iterations)
            .verbose(self.verbose)
    }
}

/// A hyper-parameter set during construction
///
/// Configures and minimizes the following objective function by batch
/// gradient descent:
/// ```ignore
/// (1 / 2 * n_samples) * ||y - (v0 + v1 x)||^2_2
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressionParams<F>(LinearRegressionValidParams<F>);

impl<F: Float> Default for LinearRegressionParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit a linear regression model
impl<F: Float> LinearRegressionParams<F> {
    /// Create default linear regression hyper parameters
    pub fn new() -> LinearRegressionParams<F> {
        Self(LinearRegressionValidParams {
            learning_rate: F::cast(0.1),
            tolerance: F::cast(1e-8),
            max_iterations: None,
            verbose: true,
        })
    }

    /// Set the step size of the parameter updates.
    /// Defaults to `0.1` if not set.
    pub fn learning_rate(mut self, learning_rate: F) -> Self {
        self.0.learning_rate = learning_rate;
        self
    }

    /// Set the stopping criterion: the descent stops once the absolute cost
    /// difference between two iterations is at most `tolerance`.
    /// Defaults to `1e-8` if not set.
    pub fn tolerance(mut self, tolerance: F) -> Self {
        self.0.tolerance = tolerance;
        self
    }

    /// Set an optional cap on the number of iterations. Without a cap a
    /// descent whose cost oscillates without overflowing never returns.
    /// Defaults to `None` if not set.
    pub fn max_iterations(mut self, max_iterations: Option<usize>) -> Self {
        self.0.max_iterations = max_iterations;
        self
    }

    /// Sets the verbosity level of the solver.
    ///
    /// Defaults to `true` if not set.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.0.verbose = verbose;
        self
    }
}

impl<F: Float> ParamGuard for LinearRegressionParams<F> {
    type Checked = LinearRegressionValidParams<F>;
    type Error = EstimatorError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        check_descent_params(self.0.learning_rate, self.0.tolerance, self.0.max_iterations)?;
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// A verified hyperparameter set ready for the fitting of a logistic
/// regression model
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegressionValidParams<F> {
    learning_rate: F,
    tolerance: F,
    max_iterations: Option<usize>,
    seed: Option<u64>,
    verbose: bool,
}

impl<F: Float> LogisticRegressionValidParams<F> {
    pub fn learning_rate(&self) -> F {
        self.learning_rate
    }

    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// The gradient descent solver configured by these hyperparameters.
    pub fn solver(&self) -> Solver<F> {
        Solver::new()
            .learning_rate(self.learning_rate)
            .tolerance(self.tolerance)
            .max_iterations(self.max_iterations)
            .verbose(self.verbose)
    }
}

/// A hyper-parameter set during construction
///
/// Configures and minimizes the following objective function by batch
/// gradient descent:
/// ```ignore
/// 1 / n_samples * sum_i [ -t_i log(p_i) - (1 - t_i) log(1 - p_i) ]
///     with p_i = sigmoid(v0 + v1 x_i)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegressionParams<F>(LogisticRegressionValidParams<F>);

impl<F: Float> Default for LogisticRegressionParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit a logistic regression model
impl<F: Float> LogisticRegressionParams<F> {
    /// Create default logistic regression hyper parameters
    pub fn new() -> LogisticRegressionParams<F> {
        Self(LogisticRegressionValidParams {
            learning_rate: F::cast(0.1),
            tolerance: F::cast(1e-8),
            max_iterations: None,
            seed: None,
            verbose: true,
        })
    }

    /// Set the step size of the parameter updates.
    /// Defaults to `0.1` if not set.
    pub fn learning_rate(mut self, learning_rate: F) -> Self {
        self.0.learning_rate = learning_rate;
        self
    }

    /// Set the stopping criterion on the absolute cost difference.
    /// Defaults to `1e-8` if not set.
    pub fn tolerance(mut self, tolerance: F) -> Self {
        self.0.tolerance = tolerance;
        self
    }

    /// Set an optional cap on the number of iterations.
    /// Defaults to `None` if not set.
    pub fn max_iterations(mut self, max_iterations: Option<usize>) -> Self {
        self.0.max_iterations = max_iterations;
        self
    }

    /// Seed the random generator drawing the initial coefficients. Without a
    /// seed, the generator is seeded from the operating system and two fits
    /// start from different points.
    /// Defaults to `None` if not set.
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.0.seed = seed;
        self
    }

    /// Sets the verbosity level of the solver.
    ///
    /// Defaults to `true` if not set.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.0.verbose = verbose;
        self
    }
}

impl<F: Float> ParamGuard for LogisticRegressionParams<F> {
    type Checked = LogisticRegressionValidParams<F>;
    type Error = EstimatorError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        check_descent_params(self.0.learning_rate, self.0.tolerance, self.0.max_iterations)?;
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
