use super::traits::Fit;
use crate::datasets::DatasetBase;
use crate::Float;
use std::error::Error;

/// Hyperparameters that must be validated before fitting.
///
/// `check_ref` and `check` run the same validation, the former borrowing the
/// checked set and the latter moving it out.
pub trait ParamGuard {
    type Checked;
    type Error: Error;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error>;

    fn check(self) -> Result<Self::Checked, Self::Error>;
}

/// Unchecked hyperparameters fit by validating themselves first, then
/// delegating to the checked set.
impl<F: Float, E, P: ParamGuard> Fit<F, E> for P
where
    P::Checked: Fit<F, E>,
    E: Error + From<P::Error>,
{
    type Object = <<P as ParamGuard>::Checked as Fit<F, E>>::Object;

    fn fit(&self, dataset: &DatasetBase<F>) -> Result<Self::Object, E> {
        let checked = self.check_ref()?;
        checked.fit(dataset)
    }
}
