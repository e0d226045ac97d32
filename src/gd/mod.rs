use log::{debug, info, warn};

use super::Float;
use crate::datafits::{Coefficients, Datafit};
use crate::datasets::DatasetBase;
use crate::estimators::error::{EstimatorError, Result};


/// A sample is recorded every `RECORD_EVERY` iterations, on top of the final
/// one.
pub const RECORD_EVERY: usize = 100;

/// The `(iteration, cost)` samples recorded during a fit, in strictly
/// increasing iteration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IterationTrace<F> {
    samples: Vec<(usize, F)>,
}

impl<F: Float> IterationTrace<F> {
    pub fn new() -> Self {
        IterationTrace {
            samples: Vec::new(),
        }
    }

    /// Appends a sample. Panics if `iteration` does not exceed the last
    /// recorded one.
    pub fn push(&mut self, iteration: usize, cost: F) {
        if let Some(&(last, _)) = self.samples.last() {
            assert!(
                iteration > last,
                "trace iterations must be strictly increasing ({} after {})",
                iteration,
                last
            );
        }
        self.samples.push((iteration, cost));
    }

    pub fn samples(&self) -> &[(usize, F)] {
        &self.samples
    }

    pub fn iterations(&self) -> Vec<usize> {
        self.samples.iter().map(|&(i, _)| i).collect()
    }

    pub fn costs(&self) -> Vec<F> {
        self.samples.iter().map(|&(_, c)| c).collect()
    }

    pub fn last(&self) -> Option<(usize, F)> {
        self.samples.last().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// The configuration a fit started from.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialState<F: Float> {
    pub dataset: DatasetBase<F>,
    pub coefficients: Coefficients<F>,
    pub learning_rate: F,
    pub tolerance: F,
}

/// Snapshot of a converged fit: the initial configuration and the output of
/// the descent.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult<F: Float> {
    initial: InitialState<F>,
    coefficients: Coefficients<F>,
    trace: IterationTrace<F>,
    n_iterations: usize,
    cost: F,
    cost_diff: F,
}

impl<F: Float> FitResult<F> {
    pub fn initial(&self) -> &InitialState<F> {
        &self.initial
    }

    /// The fitted coefficients.
    pub fn coefficients(&self) -> Coefficients<F> {
        self.coefficients
    }

    pub fn trace(&self) -> &IterationTrace<F> {
        &self.trace
    }

    /// Number of updates performed before the stopping criterion was met.
    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    /// The cost at the fitted coefficients.
    pub fn cost(&self) -> F {
        self.cost
    }

    /// The cost difference between the last two iterations.
    pub fn cost_diff(&self) -> F {
        self.cost_diff
    }
}

/// The state threaded through the descent, one [`step`] at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverState<F> {
    pub coefficients: Coefficients<F>,
    pub n_iterations: usize,
    pub last_cost: F,
    pub cost_diff: F,
    pub trace: IterationTrace<F>,
}

impl<F: Float> SolverState<F> {
    /// The state before the first update.
    pub fn init<DF: Datafit<F>>(
        dataset: &DatasetBase<F>,
        datafit: &DF,
        coefficients: Coefficients<F>,
    ) -> Self {
        SolverState {
            coefficients,
            n_iterations: 0,
            last_cost: datafit.value(dataset, &coefficients),
            cost_diff: F::one(),
            trace: IterationTrace::new(),
        }
    }

    pub fn has_converged(&self, tolerance: F) -> bool {
        self.cost_diff.abs() <= tolerance
    }
}

/// This function performs one iteration of batch gradient descent: it
/// computes the gradient at the current coefficients, updates both of them,
/// evaluates the new cost and records it if the iteration index is a multiple
/// of [`RECORD_EVERY`].
pub fn step<F, DF>(
    state: SolverState<F>,
    dataset: &DatasetBase<F>,
    datafit: &DF,
    learning_rate: F,
    verbose: bool,
) -> SolverState<F>
where
    F: Float,
    DF: Datafit<F>,
{
    let SolverState {
        coefficients,
        n_iterations,
        last_cost,
        mut trace,
        ..
    } = state;

    let gradient = datafit.gradient(dataset, &coefficients);
    let coefficients = coefficients.step(&gradient, learning_rate);

    let cost = datafit.value(dataset, &coefficients);
    let cost_diff = cost - last_cost;

    if n_iterations % RECORD_EVERY == 0 {
        if verbose {
            info!("iteration: {} :: cost: {}", n_iterations, cost);
        } else {
            debug!("iteration: {} :: cost: {}", n_iterations, cost);
        }
        trace.push(n_iterations, cost);
    }

    SolverState {
        coefficients,
        n_iterations: n_iterations + 1,
        last_cost: cost,
        cost_diff,
        trace,
    }
}

/// This function runs batch gradient descent from `coefficients` until the
/// absolute cost difference between two consecutive iterations falls to
/// `tolerance` or below.
///
/// At least one update is always performed. Once the cost overflows (e.g. a
/// too large learning rate) the cost difference is no longer finite and
/// [`EstimatorError::Divergence`] is returned. With `max_iterations = Some(n)`,
/// [`EstimatorError::NonConvergence`] is returned once `n` updates ran without
/// meeting the criterion.
pub fn gradient_descent<F, DF>(
    dataset: &DatasetBase<F>,
    datafit: &DF,
    coefficients: Coefficients<F>,
    learning_rate: F,
    tolerance: F,
    max_iterations: Option<usize>,
    verbose: bool,
) -> Result<FitResult<F>>
where
    F: Float,
    DF: Datafit<F>,
{
    let initial = InitialState {
        dataset: dataset.clone(),
        coefficients,
        learning_rate,
        tolerance,
    };

    info!(
        "gradient descent with learning rate {} till cost difference < {}",
        learning_rate, tolerance
    );

    let mut state = SolverState::init(dataset, datafit, coefficients);
    loop {
        state = step(state, dataset, datafit, learning_rate, verbose);

        if state.has_converged(tolerance) {
            break;
        }
        if !state.cost_diff.is_finite() {
            warn!(
                "cost is no longer finite after {} iterations",
                state.n_iterations
            );
            return Err(EstimatorError::Divergence {
                n_iterations: state.n_iterations,
            });
        }
        if let Some(max_iterations) = max_iterations {
            if state.n_iterations >= max_iterations {
                return Err(EstimatorError::NonConvergence {
                    n_iterations: state.n_iterations,
                    cost_diff: state.cost_diff.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
    }

    let SolverState {
        coefficients,
        n_iterations,
        last_cost,
        cost_diff,
        mut trace,
    } = state;
    trace.push(n_iterations, last_cost);

    info!(
        "converged after {} iterations :: cost: {} :: intercept: {} :: slope: {}",
        n_iterations, last_cost, coefficients.intercept, coefficients.slope
    );

    Ok(FitResult {
        initial,
        coefficients,
        trace,
        n_iterations,
        cost: last_cost,
        cost_diff,
    })
}
