use super::{GDSolver, Solver};

use crate::datafits::{Coefficients, Datafit};
use crate::datasets::DatasetBase;
use crate::estimators::error::Result;
use crate::gd::{gradient_descent, FitResult};
use crate::Float;

impl<F: Float> Default for Solver<F> {
    fn default() -> Self {
        Solver {
            learning_rate: F::cast(0.1),
            tolerance: F::cast(1e-8),
            max_iterations: None,
            verbose: true,
        }
    }
}

impl<F: Float> Solver<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn learning_rate(mut self, learning_rate: F) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn tolerance(mut self, tolerance: F) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn max_iterations(mut self, max_iterations: Option<usize>) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl<F, DF> GDSolver<F, DF> for Solver<F>
where
    F: Float,
    DF: Datafit<F>,
{
    fn solve(
        &self,
        dataset: &DatasetBase<F>,
        datafit: &DF,
        coefficients: Coefficients<F>,
    ) -> Result<FitResult<F>> {
        gradient_descent(
            dataset,
            datafit,
            coefficients,
            self.learning_rate,
            self.tolerance,
            self.max_iterations,
            self.verbose,
        )
    }
}
