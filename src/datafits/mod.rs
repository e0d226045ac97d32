use crate::datasets::DatasetBase;
use crate::helpers::helpers::sigmoid;
use crate::Float;


/// The two parameters of a one-dimensional model: the intercept (bias, `v0`)
/// and the slope (weight, `v1`).
///
/// Gradients share this representation: the intercept component holds the
/// partial derivative with respect to `v0`, the slope component the one with
/// respect to `v1`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coefficients<F> {
    pub intercept: F,
    pub slope: F,
}

impl<F: Float> Coefficients<F> {
    pub fn new(intercept: F, slope: F) -> Self {
        Coefficients { intercept, slope }
    }

    /// The affine combination `v0 + v1 * x`.
    pub fn affine(&self, x: F) -> F {
        self.intercept + self.slope * x
    }

    /// One gradient descent update. Both components of the returned pair are
    /// computed from `self`, never from a half-updated state.
    pub fn step(&self, gradient: &Coefficients<F>, learning_rate: F) -> Self {
        Coefficients {
            intercept: self.intercept - learning_rate * gradient.intercept,
            slope: self.slope - learning_rate * gradient.slope,
        }
    }
}

/// This trait provides the three methods the gradient descent routine needs:
/// [`Datafit::predict`], [`Datafit::value`] and [`Datafit::gradient`].
pub trait Datafit<F: Float> {
    /// This method computes the model output for a single sample.
    fn predict(&self, coefficients: &Coefficients<F>, x: F) -> F;

    /// This method is called when evaluating the cost over the whole dataset.
    fn value(&self, dataset: &DatasetBase<F>, coefficients: &Coefficients<F>) -> F;

    /// This method computes the partial derivatives of the datafit with
    /// respect to the intercept and the slope.
    fn gradient(&self, dataset: &DatasetBase<F>, coefficients: &Coefficients<F>)
        -> Coefficients<F>;
}

/// Averages the residuals `predict(x_i) - y_i` and the residuals weighted by
/// `x_i`. Sums are accumulated in sample order.
fn mean_residuals<F: Float, DF: Datafit<F> + ?Sized>(
    datafit: &DF,
    dataset: &DatasetBase<F>,
    coefficients: &Coefficients<F>,
) -> Coefficients<F> {
    let n_samples = F::cast(dataset.n_samples());
    let (d_intercept, d_slope) = dataset.samples().fold(
        (F::zero(), F::zero()),
        |(d_intercept, d_slope), (x, y)| {
            let r = datafit.predict(coefficients, x) - y;
            (d_intercept + r, d_slope + x * r)
        },
    );
    Coefficients::new(d_intercept / n_samples, d_slope / n_samples)
}

/// Quadratic datafit
///
/// The squared residuals datafit of ordinary linear regression. Its value is
/// `(1 / 2 * n_samples) * ||y - (v0 + v1 x)||^2`: the sum is multiplied by
/// `n_samples / 2`, not divided. The gradient is the one of the half mean
/// squared error, `mean(r)` and `mean(x r)`, so the value is `n_samples^2`
/// times the objective whose derivative is returned. The minimizer is the
/// same.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quadratic;

impl<F: Float> Datafit<F> for Quadratic {
    fn predict(&self, coefficients: &Coefficients<F>, x: F) -> F {
        coefficients.affine(x)
    }

    fn value(&self, dataset: &DatasetBase<F>, coefficients: &Coefficients<F>) -> F {
        let n_samples = F::cast(dataset.n_samples());
        let scale = F::one() / F::cast(2) * n_samples;
        let rss = dataset
            .samples()
            .map(|(x, y)| (self.predict(coefficients, x) - y).powi(2))
            .sum::<F>();
        scale * rss
    }

    fn gradient(
        &self,
        dataset: &DatasetBase<F>,
        coefficients: &Coefficients<F>,
    ) -> Coefficients<F> {
        mean_residuals(self, dataset, coefficients)
    }
}

/// Logistic datafit
///
/// The average binary cross-entropy between the targets (`0` or `1`) and the
/// sigmoid of the affine model. No clipping is applied: a prediction of
/// exactly `0` or `1` yields an infinite value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Logistic;

impl<F: Float> Datafit<F> for Logistic {
    fn predict(&self, coefficients: &Coefficients<F>, x: F) -> F {
        sigmoid(coefficients.affine(x))
    }

    fn value(&self, dataset: &DatasetBase<F>, coefficients: &Coefficients<F>) -> F {
        let n_samples = F::cast(dataset.n_samples());
        let cross_entropy = dataset
            .samples()
            .map(|(x, t)| {
                let p = self.predict(coefficients, x);
                -t * p.ln() - (F::one() - t) * (F::one() - p).ln()
            })
            .sum::<F>();
        F::one() / n_samples * cross_entropy
    }

    /// Same shape as the quadratic gradient: the sigmoid and the
    /// cross-entropy derivatives cancel out.
    fn gradient(
        &self,
        dataset: &DatasetBase<F>,
        coefficients: &Coefficients<F>,
    ) -> Coefficients<F> {
        mean_residuals(self, dataset, coefficients)
    }
}
