use crate::datafits::{Coefficients, Datafit};
use crate::datasets::DatasetBase;
use crate::estimators::error::Result;
use crate::gd::FitResult;
use crate::Float;

mod impl_solver;


/// The batch gradient descent solver and its hyperparameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Solver<F> {
    pub learning_rate: F,
    pub tolerance: F,
    pub max_iterations: Option<usize>,
    pub verbose: bool,
}

/// This trait provides a solver for any [`Datafit`]: starting from some
/// coefficients, it minimizes the datafit over the dataset.
pub trait GDSolver<F, DF>
where
    F: Float,
    DF: Datafit<F>,
{
    fn solve(
        &self,
        dataset: &DatasetBase<F>,
        datafit: &DF,
        coefficients: Coefficients<F>,
    ) -> Result<FitResult<F>>;
}
