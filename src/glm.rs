//! The generalized linear model fitter. Models are fit such that the natural
//! parameters of the response distribution are linear in the features,
//! eta = theta * x, using Fisher scoring with a fixed learning rate.

use crate::{
    error::{RegressionError, RegressionResult},
    family::ExponentialFamily,
    fit::{
        options::{FitOptions, GlmBuilder},
        Fit,
    },
    irls::FisherScoring,
    model::Dataset,
    num::Float,
    response::Response,
};
use ndarray::{Array2, ArrayView1, ArrayView2};
use std::marker::PhantomData;
use tracing::{debug, info};

/// A generalized linear model over the response family D. It owns the
/// (p x n) coefficient matrix once fit.
#[derive(Clone, Debug)]
pub struct Glm<D, F>
where
    D: ExponentialFamily<F>,
    F: Float,
{
    family: PhantomData<D>,
    options: FitOptions<F>,
    theta: Option<Array2<F>>,
}

impl<D, F> Glm<D, F>
where
    D: ExponentialFamily<F>,
    F: Float,
{
    /// An unfit model with the default options.
    pub fn new() -> Self {
        Self::with_options(FitOptions::default())
    }

    /// An unfit model with the given options.
    pub fn with_options(options: FitOptions<F>) -> Self {
        Self {
            family: PhantomData,
            options,
            theta: None,
        }
    }

    /// Provides an interface to configure the fit options.
    pub fn builder() -> GlmBuilder<D, F> {
        GlmBuilder::new()
    }

    pub fn options(&self) -> &FitOptions<F> {
        &self.options
    }

    /// The (p x n) coefficients, if the model has been fit. Each row holds
    /// the coefficients of one natural parameter.
    pub fn coefficients(&self) -> Option<&Array2<F>> {
        self.theta.as_ref()
    }

    /// Fit the coefficients to the (m x n) design matrix and the m
    /// observations, starting from zero. Any intercept term must already be
    /// a column of the design matrix. On success the coefficients are stored
    /// and the returned summary holds the final average negative
    /// log-likelihood.
    pub fn fit<Y>(
        &mut self,
        data_x: ArrayView2<F>,
        data_y: ArrayView1<Y>,
    ) -> RegressionResult<Fit<F>>
    where
        Y: Response<D> + Copy,
    {
        let data: Dataset<F> = Dataset::new::<D, Y>(data_x, data_y)?;
        // The dimension of the natural parameters is fixed for the whole fit.
        let n_par: usize = D::n_parameters(data.y.view())?;
        debug!(
            n_obs = data.x.nrows(),
            n_features = data.x.ncols(),
            n_par,
            "starting Fisher scoring"
        );
        let initial: Array2<F> = Array2::zeros((n_par, data.x.ncols()));
        let mut scoring = FisherScoring::<D, F>::new(&data, initial, &self.options)?;
        let mut history: Vec<F> = vec![scoring.nll()];
        for step in &mut scoring {
            let step = step?;
            let nll = step.nll.to_f64().unwrap_or(f64::NAN);
            if self.options.verbose {
                info!(iteration = step.n_iter, nll, "Fisher scoring step");
            } else {
                debug!(iteration = step.n_iter, nll, "Fisher scoring step");
            }
            history.push(step.nll);
        }
        let n_iter = scoring.n_iter;
        let nll = scoring.nll();
        debug!(
            n_iter,
            nll = nll.to_f64().unwrap_or(f64::NAN),
            "Fisher scoring terminated"
        );
        self.theta = Some(scoring.into_coefficients());
        Ok(Fit {
            nll,
            n_iter,
            history,
        })
    }

    /// The (p x m) natural parameters of the observations in the design
    /// matrix under the fit coefficients.
    pub fn linear_predictor(&self, data_x: ArrayView2<F>) -> RegressionResult<Array2<F>> {
        let theta = self.theta.as_ref().ok_or(RegressionError::NotFitted)?;
        if data_x.ncols() != theta.ncols() {
            return Err(RegressionError::BadInput(format!(
                "model was fit with {} features but {} were given",
                theta.ncols(),
                data_x.ncols()
            )));
        }
        Ok(theta.dot(&data_x.t()))
    }

    /// The response distribution of each observation in the design matrix.
    /// Means, variances, and likelihoods of new observations are all
    /// available from it.
    pub fn predict(&self, data_x: ArrayView2<F>) -> RegressionResult<D> {
        D::from_natural(self.linear_predictor(data_x)?)
    }
}

impl<D, F> Default for Glm<D, F>
where
    D: ExponentialFamily<F>,
    F: Float,
{
    fn default() -> Self {
        Self::new()
    }
}
