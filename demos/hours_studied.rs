extern crate gdglm;

use gdglm::{
    datafits::{Logistic, Quadratic},
    datasets::hours_studied,
    estimators::{
        estimators::{linear_seed, LinearRegression, LogisticRegression},
        traits::Fit,
    },
    solver::{GDSolver, Solver},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let dataset = hours_studied();
    let xs = dataset.features().to_vec();

    // Datafit - Solver API
    let solver = Solver::default().verbose(false);
    let result = solver.solve(&dataset, &Quadratic, linear_seed(&dataset)?)?;

    // Estimator API
    let linear = LinearRegression::params().fit(&dataset)?;
    assert_eq!(result.coefficients(), linear.coefficients());

    println!("#### Simple linear regression");
    println!("coefficients: {:?}", linear.coefficients());
    println!("cost per iteration: {:?}", linear.trace().samples());
    println!("fitted line: {:?}", linear.curve(&xs));

    let logistic = LogisticRegression::params().fit(&dataset)?;
    println!("#### Logistic regression");
    println!("coefficients: {:?}", logistic.coefficients());
    println!("cost per iteration: {:?}", logistic.trace().samples());
    println!("fitted curve: {:?}", logistic.curve(&xs));

    // Restarting the descent from the fitted point converges at once
    let refit = solver.solve(&dataset, &Logistic, logistic.coefficients())?;
    println!("refit after {} iteration(s)", refit.n_iterations());

    Ok(())
}
