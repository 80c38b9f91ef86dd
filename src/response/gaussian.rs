//! Gaussian response with unit variance, i.e. ordinary linear regression

use crate::{
    error::{RegressionError, RegressionResult},
    family::{ExponentialFamily, Moment},
    link::{Id, Link},
    num::Float,
    response::{check_n_obs, check_scalar, scalar_stats, Response},
};
use ndarray::{Array1, Array2, ArrayView1, Axis, Zip};

/// A unit-variance normal distribution for each observation. The natural
/// parameter is the mean itself.
#[derive(Clone, Debug)]
pub struct Gaussian<F: Float> {
    locs: Array1<F>,
}

impl<F: Float> Gaussian<F> {
    /// The mean of each observation.
    pub fn locations(&self) -> ArrayView1<F> {
        self.locs.view()
    }
}

impl<F: Float> Response<Gaussian<F>> for f32 {
    fn into_float<G: Float>(self) -> RegressionResult<G> {
        if !self.is_finite() {
            return Err(RegressionError::InvalidY(self.to_string()));
        }
        G::from(self).ok_or_else(|| RegressionError::InvalidY(self.to_string()))
    }
}
impl<F: Float> Response<Gaussian<F>> for f64 {
    fn into_float<G: Float>(self) -> RegressionResult<G> {
        if !self.is_finite() {
            return Err(RegressionError::InvalidY(self.to_string()));
        }
        G::from(self).ok_or_else(|| RegressionError::InvalidY(self.to_string()))
    }
}

impl<F: Float> ExponentialFamily<F> for Gaussian<F> {
    fn n_parameters(_y: ArrayView1<F>) -> RegressionResult<usize> {
        Ok(1)
    }

    fn from_natural(nat_par: Array2<F>) -> RegressionResult<Self> {
        check_scalar(&nat_par)?;
        let locs: Array1<F> = nat_par.index_axis_move(Axis(0), 0).mapv_into(Id::func_inv);
        Ok(Self { locs })
    }

    fn n_obs(&self) -> usize {
        self.locs.len()
    }

    /// -log p(y) = (y - mu)^2 / 2 + log(2 pi) / 2
    fn nll(&self, y: ArrayView1<F>) -> RegressionResult<Array1<F>> {
        check_n_obs(self.n_obs(), y.len())?;
        let half: F = (F::one() + F::one()).recip();
        let log_norm: F = half * num_traits::Float::ln(F::PI() + F::PI());
        Ok(Zip::from(&y)
            .and(&self.locs)
            .map_collect(|&y, &mu| half * (y - mu) * (y - mu) + log_norm))
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
        self.locs.clone().insert_axis(Axis(0))
    }

    /// The variance is fixed to one.
    fn variance(&self) -> Array2<F> {
        Array2::ones((1, self.n_obs()))
    }
}
