//! trait defining an exponential-family response distribution and providing
//! the quantities Fisher scoring needs.
//!
//! A distribution instance is parameterized by a (p x m) matrix of natural
//! parameters, one column per observation. From the sufficient statistics
//! T(y) and their moments the gradient of the negative log-likelihood with
//! respect to the natural parameters is E[T(Y)] - T(y), and the second moment
//! weights each observation in the least-squares step.

use crate::{error::RegressionResult, num::Float};
use ndarray::{Array1, Array2, ArrayView1};

/// Selects which moment of the sufficient statistics to compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Moment {
    /// The expectation E[T(Y)].
    First,
    /// The per-observation, per-parameter weight used as the Fisher
    /// information. This is the variance of T(Y) for the scalar families.
    Second,
}

pub trait ExponentialFamily<F: Float>: Sized {
    /// The dimension p of the natural parameters implied by the observations.
    /// This is evaluated once per fit, before any distribution is created.
    fn n_parameters(y: ArrayView1<F>) -> RegressionResult<usize>;

    /// Create the distribution from a (p x m) matrix of natural parameters by
    /// applying the canonical link. Fails if the number of rows is not valid
    /// for the family.
    fn from_natural(nat_par: Array2<F>) -> RegressionResult<Self>;

    /// The number of observations m described by this distribution.
    fn n_obs(&self) -> usize;

    /// The negative log-likelihood of each observation.
    fn nll(&self, y: ArrayView1<F>) -> RegressionResult<Array1<F>>;

    /// The (p x m) sufficient statistics of the observations.
    fn sufficient_stats(&self, y: ArrayView1<F>) -> RegressionResult<Array2<F>>;

    /// The (p x m) moment of the sufficient statistics under the current
    /// parameters.
    fn moment(&self, order: Moment) -> Array2<F>;

    /// The (p x m) expectation of the response.
    fn mean(&self) -> Array2<F>;

    /// The (p x m) variance of the response.
    fn variance(&self) -> Array2<F>;

    /// The gradient of the negative log-likelihood with respect to the
    /// natural parameters, E[T(Y)] - T(y), for each parameter and observation.
    fn gradient(&self, y: ArrayView1<F>) -> RegressionResult<Array2<F>> {
        Ok(self.moment(Moment::First) - self.sufficient_stats(y)?)
    }

    /// The Fisher information with respect to each natural parameter for each
    /// observation.
    fn fisher_info(&self) -> Array2<F> {
        self.moment(Moment::Second)
    }

    /// The log-likelihood (log mass or density) of each observation.
    fn log_prob(&self, y: ArrayView1<F>) -> RegressionResult<Array1<F>> {
        Ok(self.nll(y)?.mapv_into(|l| -l))
    }
}
