//! Fisher scoring, i.e. iteratively re-weighted least squares over the
//! natural parameters of an exponential family.
use crate::{
    error::{RegressionError, RegressionResult},
    family::ExponentialFamily,
    fit::options::FitOptions,
    model::Dataset,
    num::Float,
};
use ndarray::{Array1, Array2, ArrayView1, Axis};
use ndarray_linalg::SolveH;
use std::marker::PhantomData;

/// Iterate over updates of the coefficients by Fisher scoring until the
/// average negative log-likelihood stops decreasing by more than the
/// tolerance.
pub struct FisherScoring<'a, D, F>
where
    D: ExponentialFamily<F>,
    F: Float,
{
    family: PhantomData<D>,
    data: &'a Dataset<F>,
    /// The options for the fit
    options: &'a FitOptions<F>,
    /// The current (p x n) coefficients.
    theta: Array2<F>,
    /// The response distribution under the current coefficients.
    dist: D,
    /// The average negative log-likelihood under the current coefficients.
    nll: F,
    /// The average negative log-likelihood before the last step
    last_nll: F,
    /// The number of iterations taken so far
    pub n_iter: usize,
    /// Set once an error has been returned, so that iteration stops.
    done: bool,
}

impl<'a, D, F> FisherScoring<'a, D, F>
where
    D: ExponentialFamily<F>,
    F: Float,
{
    /// Start from the initial coefficients, which must have a row for each
    /// natural parameter of the family and a column for each feature.
    pub fn new(
        data: &'a Dataset<F>,
        initial: Array2<F>,
        options: &'a FitOptions<F>,
    ) -> RegressionResult<Self> {
        if initial.ncols() != data.x.ncols() {
            return Err(RegressionError::BadInput(format!(
                "{} coefficients given for {} features",
                initial.ncols(),
                data.x.ncols()
            )));
        }
        let dist: D = data.distribution(&initial)?;
        let nll = data.mean_nll(&dist)?;
        Ok(Self {
            family: PhantomData,
            data,
            options,
            theta: initial,
            dist,
            nll,
            last_nll: F::infinity(),
            n_iter: 0,
            done: false,
        })
    }

    /// The current coefficients.
    pub fn coefficients(&self) -> &Array2<F> {
        &self.theta
    }

    /// The average negative log-likelihood of the current coefficients.
    pub fn nll(&self) -> F {
        self.nll
    }

    /// Give up the current coefficients.
    pub fn into_coefficients(self) -> Array2<F> {
        self.theta
    }

    /// Take a single scoring step, updating the coefficients, distribution,
    /// and likelihood.
    fn step(&mut self) -> RegressionResult<ScoringStep<F>> {
        // The gradient with respect to the natural parameters, contracted over
        // observations into a (p x n) gradient with respect to the coefficients.
        let mut delta: Array2<F> = self.dist.gradient(self.data.y.view())?.dot(&self.data.x);
        let fisher: Array2<F> = self.dist.fisher_info();
        // Each natural parameter is updated independently, ignoring the
        // coupling between parameters in the Fisher information.
        for (i_par, (mut row, weights)) in delta
            .outer_iter_mut()
            .zip(fisher.outer_iter())
            .enumerate()
        {
            let step = weighted_step(&self.data.x, weights, row.view(), i_par)?;
            row.assign(&step);
        }
        self.theta.scaled_add(-self.options.learning_rate, &delta);
        self.dist = self.data.distribution(&self.theta)?;
        self.last_nll = self.nll;
        self.nll = self.data.mean_nll(&self.dist)?;
        self.n_iter += 1;
        Ok(ScoringStep {
            n_iter: self.n_iter,
            nll: self.nll,
        })
    }
}

/// Solves the normal equations of the least-squares problem whose design
/// matrix has each observation scaled by its weight:
/// (Xw^T Xw) s = gradient, with Xw = diag(w) X.
fn weighted_step<F: Float>(
    x: &Array2<F>,
    weights: ArrayView1<F>,
    gradient: ArrayView1<F>,
    i_par: usize,
) -> RegressionResult<Array1<F>> {
    // The weighted design has rank at most the number of observations with
    // non-zero weight.
    let n_weighted = weights.iter().filter(|&&w| w != F::zero()).count();
    if n_weighted < x.ncols() {
        return Err(RegressionError::Singular(i_par));
    }
    let x_weighted: Array2<F> = x * &weights.insert_axis(Axis(1));
    let lhs: Array2<F> = x_weighted.t().dot(&x_weighted);
    let step: Array1<F> = lhs
        .solveh_into(gradient.to_owned())
        .map_err(|_| RegressionError::Singular(i_par))?;
    if !step.iter().all(|s| s.is_finite()) {
        return Err(RegressionError::Singular(i_par));
    }
    Ok(step)
}

/// Represents a step of Fisher scoring.
#[derive(Clone, Copy, Debug)]
pub struct ScoringStep<F> {
    /// The number of steps taken so far, including this one.
    pub n_iter: usize,
    /// The average negative log-likelihood after this step.
    pub nll: F,
}

impl<'a, D, F> Iterator for FisherScoring<'a, D, F>
where
    D: ExponentialFamily<F>,
    F: Float,
{
    type Item = RegressionResult<ScoringStep<F>>;

    /// Take the next step if the last one decreased the likelihood by more
    /// than the tolerance. The first step is always taken.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        // Written so that a NaN likelihood also terminates.
        if !(self.last_nll - self.nll > self.options.tol) {
            return None;
        }
        if let Some(max_iter) = self.options.max_iter {
            if self.n_iter >= max_iter {
                self.done = true;
                return Some(Err(RegressionError::MaxIter(max_iter)));
            }
        }
        let step = self.step();
        if step.is_err() {
            self.done = true;
        }
        Some(step)
    }
}
