//! Bernoulli response for binary classification

use crate::{
    error::{RegressionError, RegressionResult},
    family::{ExponentialFamily, Moment},
    link::{Link, Logit},
    num::Float,
    response::{check_n_obs, check_scalar, scalar_stats, Response},
};
use ndarray::{Array1, Array2, ArrayView1, Axis, Zip};

/// A Bernoulli distribution for each observation. The natural parameter is
/// the log-odds of the observation being true.
#[derive(Clone, Debug)]
pub struct Bernoulli<F: Float> {
    logits: Array1<F>,
    probs: Array1<F>,
}

impl<F: Float> Bernoulli<F> {
    /// The probability of each observation being true.
    pub fn probabilities(&self) -> ArrayView1<F> {
        self.probs.view()
    }
}

/// The Bernoulli response variable is naturally boolean.
impl<F: Float> Response<Bernoulli<F>> for bool {
    fn into_float<G: Float>(self) -> RegressionResult<G> {
        Ok(if self { G::one() } else { G::zero() })
    }
}
// Allow floats for the domain. We can't use num_traits::Float because of the
// possibility of conflicting implementations upstream, so manually implement
// for f32 and f64.
impl<F: Float> Response<Bernoulli<F>> for f32 {
    fn into_float<G: Float>(self) -> RegressionResult<G> {
        if !(0.0..=1.0).contains(&self) {
            return Err(RegressionError::InvalidY(self.to_string()));
        }
        G::from(self).ok_or_else(|| RegressionError::InvalidY(self.to_string()))
    }
}
impl<F: Float> Response<Bernoulli<F>> for f64 {
    fn into_float<G: Float>(self) -> RegressionResult<G> {
        if !(0.0..=1.0).contains(&self) {
            return Err(RegressionError::InvalidY(self.to_string()));
        }
        G::from(self).ok_or_else(|| RegressionError::InvalidY(self.to_string()))
    }
}

impl<F: Float> ExponentialFamily<F> for Bernoulli<F> {
    fn n_parameters(_y: ArrayView1<F>) -> RegressionResult<usize> {
        Ok(1)
    }

    fn from_natural(nat_par: Array2<F>) -> RegressionResult<Self> {
        check_scalar(&nat_par)?;
        let logits: Array1<F> = nat_par.index_axis_move(Axis(0), 0);
        let probs: Array1<F> = logits.mapv(Logit::func_inv);
        Ok(Self { logits, probs })
    }

    fn n_obs(&self) -> usize {
        self.probs.len()
    }

    /// Evaluated directly in terms of the log-odds to handle over/underflow
    /// issues when the probability saturates.
    fn nll(&self, y: ArrayView1<F>) -> RegressionResult<Array1<F>> {
        check_n_obs(self.n_obs(), y.len())?;
        Ok(Zip::from(&y).and(&self.logits).map_collect(|&y, &logit_p| {
            // Both of these expressions are mathematically identical.
            // The distinction is made to avoid under/overflow.
            let (yt, xt) = if logit_p < F::zero() {
                (y, logit_p)
            } else {
                (F::one() - y, -logit_p)
            };
            num_traits::Float::exp(xt).ln_1p() - yt * xt
        }))
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
        self.probs.clone().insert_axis(Axis(0))
    }

    /// var = p*(1-p)
    fn variance(&self) -> Array2<F> {
        self.probs
            .mapv(|p| p * (F::one() - p))
            .insert_axis(Axis(0))
    }
}
