use crate::datasets::DatasetBase;
use crate::Float;

/// Fit trait
///
/// The fittable trait allows an estimator to be fitted to a dataset (paired
/// features and targets). More formally, the model estimates the intercept and
/// the slope that minimize an empirical risk (loss function).
pub trait Fit<F: Float, E: std::error::Error> {
    type Object;

    fn fit(&self, dataset: &DatasetBase<F>) -> Result<Self::Object, E>;
}
