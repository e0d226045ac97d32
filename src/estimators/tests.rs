use ndarray::array;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::datafits::{Coefficients, Datafit, Logistic, Quadratic};
use crate::datasets::{hours_studied, DatasetBase};
use crate::estimators::error::EstimatorError;
use crate::estimators::estimators::*;
use crate::estimators::param_guard::ParamGuard;
use crate::estimators::traits::Fit;
use crate::helpers::test_helpers::*;

const MAX_ITERATIONS: Option<usize> = Some(1_000_000);

#[test]
fn test_linear_seed() {
    let dataset = hours_studied();
    // v1 = y0 = 0 ; v0 = (0 - 0) / 0.75 - 0.5
    assert_eq!(linear_seed(&dataset).unwrap(), Coefficients::new(-0.5, 0.));

    let dataset = DatasetBase::new(array![1., 2., 3.], array![3., 7., 4.]).unwrap();
    // (7 - 3) / 2 - 1
    assert_eq!(linear_seed(&dataset).unwrap(), Coefficients::new(1., 3.));

    let dataset = DatasetBase::new(array![1.], array![3.]).unwrap();
    assert_eq!(
        linear_seed(&dataset).unwrap_err(),
        EstimatorError::NotEnoughSamples {
            required: 2,
            found: 1
        }
    );
}

#[test]
fn test_linear_seed_rejects_zero_second_feature() {
    // (1 - 0) / 0 - 1
    let dataset = DatasetBase::new(array![1., 0., 2.], array![0., 1., 1.]).unwrap();
    assert_eq!(
        linear_seed(&dataset).unwrap_err(),
        EstimatorError::DegenerateSeed {
            intercept: f64::INFINITY
        }
    );

    // (0 - 0) / 0 - 1
    let dataset = DatasetBase::new(array![1., 0., 2.], array![0., 0., 1.]).unwrap();
    let err = LinearRegression::params()
        .verbose(false)
        .fit(&dataset)
        .unwrap_err();
    match err {
        EstimatorError::DegenerateSeed { intercept } => assert!(intercept.is_nan()),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_logistic_seed() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..100 {
        let seed: Coefficients<f64> = logistic_seed(&mut rng);
        assert!(seed.intercept >= 0. && seed.intercept < 1.);
        assert!(seed.slope >= 0. && seed.slope < 1.);
    }

    for _ in 0..1000 {
        let seed: Coefficients<f32> = logistic_seed(&mut rng);
        assert!(seed.intercept >= 0. && seed.intercept < 1.);
        assert!(seed.slope >= 0. && seed.slope < 1.);
    }

    let first: Coefficients<f64> = logistic_seed(&mut StdRng::seed_from_u64(3));
    let second: Coefficients<f64> = logistic_seed(&mut StdRng::seed_from_u64(3));
    assert_eq!(first, second);
    assert_ne!(first.intercept, first.slope);
}

#[test]
fn test_linear_regression_converges() {
    let dataset = hours_studied();
    let model = LinearRegression::params()
        .max_iterations(MAX_ITERATIONS)
        .verbose(false)
        .fit(&dataset)
        .unwrap();
    let result = model.result();
    assert!(result.cost_diff().abs() <= 1e-8);
    assert_eq!(result.initial().coefficients, Coefficients::new(-0.5, 0.));
    assert_eq!(model.trace().last().unwrap().0, result.n_iterations());

    // The gradient vanishes at the least squares solution
    let grad = Quadratic.gradient(&dataset, &model.coefficients());
    assert!(grad.intercept.abs() < 1e-3);
    assert!(grad.slope.abs() < 1e-3);
    // The slope is positive: more hours, better outcome
    assert!(model.coefficients().slope > 0.);
}

#[test]
fn test_linear_regression_is_deterministic() {
    let dataset = hours_studied();
    let params = LinearRegression::params().verbose(false);
    let first = params.fit(&dataset).unwrap();
    let second = params.fit(&dataset).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.coefficients().slope.to_bits(),
        second.coefficients().slope.to_bits()
    );
    assert_eq!(first.trace(), second.trace());
}

#[test]
fn test_linear_regression_reference_fit() {
    let model = LinearRegression::params()
        .verbose(false)
        .fit(&hours_studied())
        .unwrap();
    let result = model.result();
    assert_eq!(result.n_iterations(), 402);
    assert_eq!(
        model.coefficients().intercept.to_bits(),
        (-0.15400822519798296f64).to_bits()
    );
    assert_eq!(
        model.coefficients().slope.to_bits(),
        0.23461651960850322f64.to_bits()
    );
    assert_eq!(result.cost(), 26.247194497180487);
    assert_eq!(
        model.trace().iterations(),
        vec![0, 100, 200, 300, 400, 402]
    );
}

#[test]
fn test_linear_regression_recovers_line() {
    let dataset = DatasetBase::new(array![0., 1., 2., 3.], array![1., 3., 5., 7.]).unwrap();
    let model = LinearRegression::params()
        .learning_rate(0.05)
        .tolerance(1e-12)
        .max_iterations(MAX_ITERATIONS)
        .verbose(false)
        .fit(&dataset)
        .unwrap();
    assert_coefficients_all_close(&model.coefficients(), &Coefficients::new(1., 2.), 1e-3);
    assert_all_close(model.predict(4.), 9., 1e-2);

    let curve = model.curve(&[0., 4.]);
    assert_eq!(curve.len(), 2);
    assert_eq!(curve[1].0, 4.);
    assert_eq!(curve[1].1, model.predict(4.));
}

#[test]
fn test_logistic_regression_converges() {
    let dataset = hours_studied();
    let model = LogisticRegression::params()
        .max_iterations(MAX_ITERATIONS)
        .verbose(false)
        .fit(&dataset)
        .unwrap();
    let result = model.result();
    assert!(result.cost_diff().abs() <= 1e-8);

    let iterations = result.trace().iterations();
    assert!(iterations.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(*iterations.last().unwrap(), result.n_iterations());

    let init = result.initial().coefficients;
    assert!(init.intercept >= 0. && init.intercept < 1.);
    assert!(init.slope >= 0. && init.slope < 1.);
    assert!(result.cost() < Logistic.value(&dataset, &init));
}

#[test]
fn test_logistic_regression_seeded() {
    let dataset = hours_studied();
    let params = LogisticRegression::params()
        .seed(Some(42))
        .max_iterations(MAX_ITERATIONS)
        .verbose(false);
    let first = params.fit(&dataset).unwrap();
    let second = params.fit(&dataset).unwrap();
    assert_eq!(first, second);

    // Close to the maximum likelihood estimate of the hours studied problem
    assert_coefficients_all_close(&first.coefficients(), &Coefficients::new(-4.08, 1.50), 0.2);

    assert_eq!(first.predict(1.), 0.);
    assert_eq!(first.predict(5.), 1.);
    assert!(first.predict_proba(2.) < first.predict_proba(4.));
    let curve = first.curve(&[0., 2.75, 6.]);
    assert!(curve.iter().all(|&(_, p)| p > 0. && p < 1.));
}

#[test]
fn test_fit_rejects_invalid_dataset() {
    let dataset = DatasetBase::new(array![1.], array![0.]).unwrap();
    let err = LinearRegression::params().fit(&dataset).unwrap_err();
    assert_eq!(
        err,
        EstimatorError::NotEnoughSamples {
            required: 2,
            found: 1
        }
    );
}

#[test]
fn test_non_convergence() {
    let dataset = hours_studied();
    let err = LinearRegression::params()
        .learning_rate(1.)
        .max_iterations(Some(100))
        .verbose(false)
        .fit(&dataset)
        .unwrap_err();
    assert!(matches!(
        err,
        EstimatorError::NonConvergence {
            n_iterations: 100,
            ..
        }
    ));
}

#[test]
fn test_divergence() {
    let err = LinearRegression::params()
        .learning_rate(5.)
        .verbose(false)
        .fit(&hours_studied())
        .unwrap_err();
    assert_eq!(err, EstimatorError::Divergence { n_iterations: 89 });
}

#[test]
fn test_invalid_params() {
    let params = LinearRegression::<f64>::params().learning_rate(-0.1);
    assert_eq!(
        params.check_ref().unwrap_err(),
        EstimatorError::InvalidLearningRate(-0.1)
    );

    let params = LogisticRegression::<f64>::params().learning_rate(f64::INFINITY);
    assert!(matches!(
        params.check(),
        Err(EstimatorError::InvalidLearningRate(_))
    ));

    let params = LogisticRegression::<f64>::params().tolerance(0.);
    assert_eq!(
        params.check().unwrap_err(),
        EstimatorError::InvalidTolerance(0.)
    );

    let params = LinearRegression::<f32>::params().max_iterations(Some(0));
    assert_eq!(
        params.check().unwrap_err(),
        EstimatorError::InvalidMaxIterations(0)
    );

    let dataset = hours_studied();
    let err = LinearRegression::params()
        .tolerance(-1.)
        .fit(&dataset)
        .unwrap_err();
    assert_eq!(err, EstimatorError::InvalidTolerance(-1.));
}

#[test]
fn test_default_params() {
    let params = LogisticRegression::<f64>::params().check().unwrap();
    assert_eq!(params.learning_rate(), 0.1);
    assert_eq!(params.tolerance(), 1e-8);
    assert_eq!(params.max_iterations(), None);
    assert_eq!(params.seed(), None);
    assert!(params.verbose());

    let params = LinearRegression::<f64>::params().check().unwrap();
    let solver = params.solver();
    assert_eq!(solver.learning_rate, 0.1);
    assert_eq!(solver.tolerance, 1e-8);
}
