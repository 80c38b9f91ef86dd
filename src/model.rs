//! Collect and validate the data for a fit

use crate::{
    error::{RegressionError, RegressionResult},
    family::ExponentialFamily,
    num::Float,
    response::Response,
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Holds the data for a regression.
pub struct Dataset<F>
where
    F: Float,
{
    /// the observation of response data by event
    pub y: Array1<F>,
    /// the design matrix with events in rows and features in columns
    pub x: Array2<F>,
}

impl<F> Dataset<F>
where
    F: Float,
{
    /// Borrow the Y and X data where each row in the arrays is a new
    /// observation. The responses are checked and converted to floating point
    /// for the family D.
    pub fn new<D, Y>(data_x: ArrayView2<F>, data_y: ArrayView1<Y>) -> RegressionResult<Self>
    where
        Y: Response<D> + Copy,
    {
        let n_data = data_y.len();
        if n_data != data_x.nrows() {
            return Err(RegressionError::BadInput(format!(
                "y and x data must have same number of points, found {} and {}",
                n_data,
                data_x.nrows()
            )));
        }
        if n_data == 0 {
            return Err(RegressionError::BadInput(
                "at least one observation is required".to_string(),
            ));
        }
        if data_x.ncols() == 0 {
            return Err(RegressionError::BadInput(
                "at least one feature is required".to_string(),
            ));
        }
        // convert to floating-point
        let y: Array1<F> = data_y
            .iter()
            .map(|&y| y.into_float())
            .collect::<Result<_, _>>()?;
        Ok(Self {
            y,
            x: data_x.to_owned(),
        })
    }

    /// Returns the (p x m) natural parameters given the (p x n) coefficients,
    /// i.e. the transpose of X * theta^T.
    pub fn linear_predictor(&self, theta: &Array2<F>) -> Array2<F> {
        theta.dot(&self.x.t())
    }

    /// The distribution of the responses under the given coefficients.
    pub fn distribution<D>(&self, theta: &Array2<F>) -> RegressionResult<D>
    where
        D: ExponentialFamily<F>,
    {
        D::from_natural(self.linear_predictor(theta))
    }

    /// The negative log-likelihood of the responses averaged over the
    /// observations.
    pub fn mean_nll<D>(&self, dist: &D) -> RegressionResult<F>
    where
        D: ExponentialFamily<F>,
    {
        dist.nll(self.y.view())?
            .mean()
            .ok_or_else(|| RegressionError::BadInput("no observations".to_string()))
    }
}
