//! Mathematical helper functions
use crate::num::Float;
use ndarray::{Array2, ArrayView2, Axis};
use statrs::function::gamma::ln_gamma;

/// The logarithm of the factorial of a non-negative integer-valued float,
/// log(n!) = ln Gamma(n + 1). Returns None if the value can't be represented
/// in the float type.
pub fn log_factorial<F: Float>(n: F) -> Option<F> {
    let n: f64 = n.to_f64()?;
    F::from(ln_gamma(n + 1.))
}

/// Normalize each column of the input into log-probabilities, i.e. the
/// logarithm of the column-wise softmax. The maximum of each column is
/// subtracted before exponentiating to avoid overflow.
pub fn log_softmax_columns<F: Float>(x: ArrayView2<F>) -> Array2<F> {
    let mut log_probs: Array2<F> = x.to_owned();
    for mut col in log_probs.axis_iter_mut(Axis(1)) {
        let max: F = col.fold(F::neg_infinity(), |acc, &v| acc.max(v));
        let sum_exp: F = col.fold(F::zero(), |acc, &v| {
            acc + num_traits::Float::exp(v - max)
        });
        let log_norm: F = max + num_traits::Float::ln(sum_exp);
        col.mapv_inplace(|v| v - log_norm);
    }
    log_probs
}
