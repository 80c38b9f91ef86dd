//! Response distributions

use crate::{
    error::{RegressionError, RegressionResult},
    num::Float,
};
use ndarray::{Array2, ArrayView1, Axis};

pub mod bernoulli;
pub mod categorical;
pub mod gaussian;
pub mod poisson;

/// Describes the domain of the response variable for a family, e.g. bool for
/// Bernoulli, unsigned integers for Poisson and Categorical, floats for
/// Gaussian. Implementing this trait for a type Y shows how to convert to a
/// floating point type and allows that type to be used as a response
/// variable.
pub trait Response<D> {
    /// Converts the domain to a floating-point value, rejecting values outside
    /// the support of the distribution.
    fn into_float<F: Float>(self) -> RegressionResult<F>;
}

/// Ensure the observations line up with the columns of a distribution.
pub(crate) fn check_n_obs(n_obs: usize, n_y: usize) -> RegressionResult<()> {
    if n_obs != n_y {
        return Err(RegressionError::BadInput(format!(
            "{} observations given for a distribution over {}",
            n_y, n_obs
        )));
    }
    Ok(())
}

/// Ensure a scalar family was given exactly one row of natural parameters.
pub(crate) fn check_scalar<F: Float>(nat_par: &Array2<F>) -> RegressionResult<()> {
    if nat_par.nrows() != 1 {
        return Err(RegressionError::BadInput(format!(
            "expected 1 natural parameter, found {}",
            nat_par.nrows()
        )));
    }
    Ok(())
}

/// The sufficient statistic of a scalar family is the observation itself, as
/// a single row.
pub(crate) fn scalar_stats<F: Float>(y: ArrayView1<F>) -> Array2<F> {
    y.to_owned().insert_axis(Axis(0))
}
