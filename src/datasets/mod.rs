use ndarray::{Array1, ArrayView1};

use crate::Float;

mod impl_datasets;


pub use impl_datasets::hours_studied;

/// A one-dimensional dataset made of paired features and targets.
///
/// Both arrays are guaranteed to be non-empty and of equal length: the only
/// public way to build a dataset is [`DatasetBase::new`] which checks it.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetBase<F: Float> {
    features: Array1<F>,
    targets: Array1<F>,
}

impl<F: Float> DatasetBase<F> {
    /// This method is a getter for the features (independent variable).
    pub fn features(&self) -> ArrayView1<F> {
        self.features.view()
    }

    /// This method is a getter for the targets.
    pub fn targets(&self) -> ArrayView1<F> {
        self.targets.view()
    }

    pub fn n_samples(&self) -> usize {
        self.targets.len()
    }

    /// Iterates over the `(x, y)` pairs in sample order.
    pub fn samples(&self) -> impl Iterator<Item = (F, F)> + '_ {
        self.features
            .iter()
            .zip(self.targets.iter())
            .map(|(&x, &y)| (x, y))
    }
}
