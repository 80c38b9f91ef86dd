//! Categorical response for multi-class classification
//!
//! With k classes there are k natural parameters per observation, one for
//! each class, and the class probabilities are their softmax. The sufficient
//! statistic is the one-hot encoding of the observed label.

use crate::{
    error::{RegressionError, RegressionResult},
    family::{ExponentialFamily, Moment},
    math::log_softmax_columns,
    num::Float,
    response::{check_n_obs, Response},
};
use itertools::Itertools;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use num_traits::{ToPrimitive, Unsigned};
use std::cmp::Ordering;

/// A categorical distribution over k classes for each observation.
#[derive(Clone, Debug)]
pub struct Categorical<F: Float> {
    /// (k x m) log-probabilities of each class
    log_probs: Array2<F>,
    /// (k x m) probabilities of each class
    probs: Array2<F>,
}

/// Class labels are unsigned integers 0, 1, ..., k-1.
impl<U, F> Response<Categorical<F>> for U
where
    U: Unsigned + ToPrimitive + ToString + Copy,
    F: Float,
{
    fn into_float<G: Float>(self) -> RegressionResult<G> {
        G::from(self).ok_or_else(|| RegressionError::InvalidY(self.to_string()))
    }
}

/// Recover the integer class label from its floating-point representation.
fn label<F: Float>(y: F) -> RegressionResult<usize> {
    if num_traits::Float::fract(y) != F::zero() {
        return Err(RegressionError::InvalidY(format!(
            "class label {:?} is not an integer",
            y.to_f64()
        )));
    }
    y.to_usize().ok_or_else(|| {
        RegressionError::InvalidY(format!("class label {:?} is not valid", y.to_f64()))
    })
}

impl<F: Float> Categorical<F> {
    /// The number of classes k.
    pub fn n_categories(&self) -> usize {
        self.probs.nrows()
    }

    /// The (k x m) probability of each class, with a column for each
    /// observation.
    pub fn probabilities(&self) -> ArrayView2<F> {
        self.probs.view()
    }

    /// The most probable class of each observation. Ties go to the lowest
    /// class label.
    pub fn most_likely(&self) -> Array1<usize> {
        self.probs
            .axis_iter(Axis(1))
            .map(|col| {
                // the first minimum under the reversed order is the first maximum
                col.iter()
                    .position_min_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal))
                    .unwrap_or(0)
            })
            .collect()
    }

    /// The class labels of the observations, checked against the number of
    /// categories.
    fn labels(&self, y: ArrayView1<F>) -> RegressionResult<Vec<usize>> {
        check_n_obs(self.n_obs(), y.len())?;
        y.iter()
            .map(|&y| {
                let k = label(y)?;
                if k >= self.n_categories() {
                    return Err(RegressionError::BadInput(format!(
                        "class label {} is outside of the {} categories",
                        k,
                        self.n_categories()
                    )));
                }
                Ok(k)
            })
            .collect()
    }

    /// The (k x m) one-hot encoding of the labels.
    fn one_hot(&self, y: ArrayView1<F>) -> RegressionResult<Array2<F>> {
        let labels = self.labels(y)?;
        let mut one_hot: Array2<F> = Array2::zeros((self.n_categories(), labels.len()));
        for (i_obs, &k) in labels.iter().enumerate() {
            one_hot[[k, i_obs]] = F::one();
        }
        Ok(one_hot)
    }
}

impl<F: Float> ExponentialFamily<F> for Categorical<F> {
    /// One more than the largest class label.
    fn n_parameters(y: ArrayView1<F>) -> RegressionResult<usize> {
        let max_label = y
            .iter()
            .map(|&y| label(y))
            .fold_ok(None, |max: Option<usize>, k| {
                Some(max.map_or(k, |m| m.max(k)))
            })?;
        max_label.map(|k| k + 1).ok_or_else(|| {
            RegressionError::BadInput("no observations to count categories from".to_string())
        })
    }

    fn from_natural(nat_par: Array2<F>) -> RegressionResult<Self> {
        if nat_par.nrows() == 0 {
            return Err(RegressionError::BadInput(
                "a categorical distribution needs at least one natural parameter".to_string(),
            ));
        }
        let log_probs: Array2<F> = log_softmax_columns(nat_par.view());
        let probs: Array2<F> = log_probs.mapv(num_traits::Float::exp);
        Ok(Self { log_probs, probs })
    }

    fn n_obs(&self) -> usize {
        self.probs.ncols()
    }

    /// The log-probability of the observed class, i.e. the one-hot encoding
    /// contracted with the log-probabilities.
    fn nll(&self, y: ArrayView1<F>) -> RegressionResult<Array1<F>> {
        let labels = self.labels(y)?;
        Ok(labels
            .iter()
            .enumerate()
            .map(|(i_obs, &k)| -self.log_probs[[k, i_obs]])
            .collect())
    }

    fn sufficient_stats(&self, y: ArrayView1<F>) -> RegressionResult<Array2<F>> {
        self.one_hot(y)
    }

    /// The second moment is the weight 1 / (p * (1 - p)) for each class. It
    /// is not the variance of the one-hot statistic; it is only used to
    /// weight the least-squares step of each class independently.
    fn moment(&self, order: Moment) -> Array2<F> {
        match order {
            Moment::First => self.probs.clone(),
            Moment::Second => self.probs.mapv(|p| (p * (F::one() - p)).recip()),
        }
    }

    fn mean(&self) -> Array2<F> {
        self.probs.clone()
    }

    /// The marginal variance p * (1 - p) of each one-hot component.
    fn variance(&self) -> Array2<F> {
        self.probs.mapv(|p| p * (F::one() - p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn mean_is_softmax() -> RegressionResult<()> {
        let eta = array![[0., 1.], [0., 2.], [0., 0.]];
        let dist = Categorical::from_natural(eta)?;
        let norm = 1. + f64::exp(1.) + f64::exp(2.);
        let expected = array![
            [1. / 3., f64::exp(1.) / norm],
            [1. / 3., f64::exp(2.) / norm],
            [1. / 3., 1. / norm]
        ];
        assert_abs_diff_eq!(dist.moment(Moment::First), expected, epsilon = 1e-14);
        assert_abs_diff_eq!(
            dist.mean().sum_axis(Axis(0)),
            array![1., 1.],
            epsilon = 1e-14
        );
        // ties go to the lowest class
        assert_eq!(dist.most_likely(), array![0, 1]);
        Ok(())
    }

    #[test]
    fn fisher_weight() -> RegressionResult<()> {
        let eta = array![[0., -1.], [0., 0.5]];
        let dist = Categorical::from_natural(eta)?;
        let probs = dist.probabilities().to_owned();
        let fisher = dist.fisher_info();
        assert_abs_diff_eq!(
            fisher,
            probs.mapv(|p| 1. / p / (1. - p)),
            epsilon = 1e-12
        );
        assert!(fisher.iter().all(|&f| f > 0.));
        // equal probabilities of 1/2 give a weight of 4
        assert_abs_diff_eq!(fisher[[0, 0]], 4., epsilon = 1e-12);
        assert_abs_diff_eq!(dist.variance()[[0, 0]], 0.25, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn one_hot_stats() -> RegressionResult<()> {
        let dist = Categorical::from_natural(Array2::<f64>::zeros((3, 4)))?;
        let stats = dist.sufficient_stats(array![2., 0., 1., 2.].view())?;
        let expected = array![[0., 1., 0., 0.], [0., 0., 1., 0.], [1., 0., 0., 1.]];
        assert_eq!(stats, expected);
        let grad = dist.gradient(array![2., 0., 1., 2.].view())?;
        assert_abs_diff_eq!(grad, Array2::from_elem((3, 4), 1. / 3.) - expected, epsilon = 1e-14);
        Ok(())
    }

    #[test]
    fn nll_is_class_log_prob() -> RegressionResult<()> {
        let dist = Categorical::from_natural(array![[0., 0.], [f64::ln(3.), 0.]])?;
        let nll = dist.nll(array![1., 0.].view())?;
        assert_abs_diff_eq!(nll, array![f64::ln(4. / 3.), f64::ln(2.)], epsilon = 1e-14);
        Ok(())
    }

    #[test]
    fn label_out_of_range() -> RegressionResult<()> {
        let dist = Categorical::from_natural(Array2::<f64>::zeros((2, 2)))?;
        assert!(matches!(
            dist.nll(array![0., 2.].view()),
            Err(RegressionError::BadInput(_))
        ));
        assert!(matches!(
            dist.sufficient_stats(array![0.5, 1.].view()),
            Err(RegressionError::InvalidY(_))
        ));
        Ok(())
    }

    #[test]
    fn count_categories() -> RegressionResult<()> {
        assert_eq!(Categorical::<f64>::n_parameters(array![0., 2., 1., 2.].view())?, 3);
        assert_eq!(Categorical::<f64>::n_parameters(array![0., 0.].view())?, 1);
        assert_eq!(Categorical::<f64>::n_parameters(array![4.].view())?, 5);
        assert!(Categorical::<f64>::n_parameters(Array1::<f64>::zeros(0).view()).is_err());
        Ok(())
    }

    #[test]
    fn reject_empty_parameters() {
        assert!(Categorical::from_natural(Array2::<f64>::zeros((0, 3))).is_err());
    }
}
