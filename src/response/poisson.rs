//! Model for Poisson regression

use crate::{
    error::{RegressionError, RegressionResult},
    family::{ExponentialFamily, Moment},
    link::{Link, Log},
    math::log_factorial,
    num::Float,
    response::{check_n_obs, check_scalar, scalar_stats, Response},
};
use ndarray::{Array1, Array2, ArrayView1, Axis};
use num_traits::{ToPrimitive, Unsigned};

/// A Poisson distribution for each observation. The natural parameter is the
/// logarithm of the rate.
#[derive(Clone, Debug)]
pub struct Poisson<F: Float> {
    log_rates: Array1<F>,
    rates: Array1<F>,
}

impl<F: Float> Poisson<F> {
    /// The expected count of each observation.
    pub fn rates(&self) -> ArrayView1<F> {
        self.rates.view()
    }
}

/// Poisson variables can be any unsigned integer.
impl<U, F> Response<Poisson<F>> for U
where
    U: Unsigned + ToPrimitive + ToString + Copy,
    F: Float,
{
    fn into_float<G: Float>(self) -> RegressionResult<G> {
        G::from(self).ok_or_else(|| RegressionError::InvalidY(self.to_string()))
    }
}

impl<F: Float> ExponentialFamily<F> for Poisson<F> {
    fn n_parameters(_y: ArrayView1<F>) -> RegressionResult<usize> {
        Ok(1)
    }

    fn from_natural(nat_par: Array2<F>) -> RegressionResult<Self> {
        check_scalar(&nat_par)?;
        let log_rates: Array1<F> = nat_par.index_axis_move(Axis(0), 0);
        let rates: Array1<F> = log_rates.mapv(Log::func_inv);
        Ok(Self { log_rates, rates })
    }

    fn n_obs(&self) -> usize {
        self.rates.len()
    }

    /// -log P(y) = lambda - y * log(lambda) + log(y!). The natural parameter
    /// is used directly so that a vanishing rate with y = 0 stays finite.
    fn nll(&self, y: ArrayView1<F>) -> RegressionResult<Array1<F>> {
        check_n_obs(self.n_obs(), y.len())?;
        y.iter()
            .zip(self.rates.iter())
            .zip(self.log_rates.iter())
            .map(|((&y, &rate), &log_rate)| {
                let y_term = if y == F::zero() {
                    F::zero()
                } else {
                    y * log_rate
                };
                let log_fact = log_factorial(y).ok_or_else(|| {
                    RegressionError::InvalidY(format!("count {:?} is out of range", y.to_f64()))
                })?;
                Ok(rate - y_term + log_fact)
            })
            .collect()
    }

    fn sufficient_stats(&self, y: ArrayView1<F>) -> RegressionResult<Array2<F>> {
        check_n_obs(self.n_obs(), y.len())?;
        Ok(scalar_stats(y))
    }

    fn moment(&self, order: Moment) -> Array2<F> {
        match order {
            Moment::First => self.mean(),
            Moment::Second => self.variance(),
        }
    }

    fn mean(&self) -> Array2<F> {
        self.rates.clone().insert_axis(Axis(0))
    }

    /// The variance of a Poisson variable is equal to its mean.
    fn variance(&self) -> Array2<F> {
        self.mean()
    }
}
