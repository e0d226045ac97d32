use thiserror::Error;

/// Simplified `Result` using [`EstimatorError`](crate::estimators::error::EstimatorError) as error type
pub type Result<T> = std::result::Result<T, EstimatorError>;

/// Error variants from dataset construction, hyperparameter construction or
/// model estimation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    /// The features and the targets do not have the same number of samples
    #[error("shape mismatch: {n_features} features for {n_targets} targets")]
    ShapeMismatch { n_features: usize, n_targets: usize },
    /// The dataset has no sample
    #[error("empty dataset")]
    EmptyDataset,
    /// The input has not enough samples to seed the coefficients
    #[error("not enough samples: {required} required, found {found}")]
    NotEnoughSamples { required: usize, found: usize },
    /// The first two samples yield a non-finite intercept (`x1 == 0`)
    #[error("degenerate seed: intercept {intercept} computed from the first two samples")]
    DegenerateSeed { intercept: f64 },
    /// The iteration cap was reached before the cost stabilized
    #[error("no convergence after {n_iterations} iterations (last cost difference {cost_diff})")]
    NonConvergence { n_iterations: usize, cost_diff: f64 },
    /// The cost overflowed, no further iteration can make progress
    #[error("divergence after {n_iterations} iterations: the cost is no longer finite")]
    Divergence { n_iterations: usize },
    #[error("invalid learning rate {0}")]
    InvalidLearningRate(f32),
    #[error("invalid tolerance {0}")]
    InvalidTolerance(f32),
    #[error("invalid max iterations {0}")]
    InvalidMaxIterations(usize),
}
