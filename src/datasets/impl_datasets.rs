use ndarray::Array1;

use super::DatasetBase;
use crate::estimators::error::{EstimatorError, Result};
use crate::Float;

const HOURS_STUDIED: [f64; 20] = [
    0.5, 0.75, 1., 1.25, 1.5, 1.75, 1.75, 2., 2.25, 2.5, 2.75, 3., 3.25, 3.5, 4., 4.25, 4.5, 4.75,
    5., 5.5,
];

const FAIL_PASS: [f64; 20] = [
    0., 0., 0., 0., 0., 0., 1., 0., 1., 0., 1., 0., 1., 0., 1., 1., 1., 1., 1., 1.,
];

/// This implementation block provides the methods for the creation of datasets.
impl<F: Float> DatasetBase<F> {
    /// This method instantiates a new dataset from features and targets.
    ///
    /// Fails with [`EstimatorError::ShapeMismatch`] when the two arrays differ
    /// in length and with [`EstimatorError::EmptyDataset`] when they hold no
    /// sample.
    pub fn new(features: Array1<F>, targets: Array1<F>) -> Result<DatasetBase<F>> {
        if features.len() != targets.len() {
            return Err(EstimatorError::ShapeMismatch {
                n_features: features.len(),
                n_targets: targets.len(),
            });
        }
        if targets.is_empty() {
            return Err(EstimatorError::EmptyDataset);
        }
        Ok(DatasetBase { features, targets })
    }

    /// This method instantiates a new dataset from two slices.
    pub fn from_slices(features: &[F], targets: &[F]) -> Result<DatasetBase<F>> {
        Self::new(
            Array1::from(features.to_vec()),
            Array1::from(targets.to_vec()),
        )
    }
}

/// The reference dataset: hours studied against the exam outcome
/// (`1` pass, `0` fail).
pub fn hours_studied() -> DatasetBase<f64> {
    DatasetBase {
        features: Array1::from(HOURS_STUDIED.to_vec()),
        targets: Array1::from(FAIL_PASS.to_vec()),
    }
}
