//! utility functions for preparing design matrices

use ndarray::{concatenate, Array2, ArrayView2, Axis};
use num_traits::identities::One;

/// Append a column of ones to the input. The fitter never adds an intercept
/// on its own, so this is the way to include a constant term in a regression.
pub fn append_ones<T>(data: ArrayView2<T>) -> Array2<T>
where
    T: Copy + One,
{
    let ones: Array2<T> = Array2::ones((data.nrows(), 1));
    // This should be guaranteed to succeed since we are manually specifying the dimension
    concatenate![Axis(1), data, ones]
}
