//! Fit-specific configuration and fitter builder
use crate::{family::ExponentialFamily, glm::Glm, num::Float};
use std::marker::PhantomData;

/// A builder struct for a fitter's configuration
pub struct GlmBuilder<D, F>
where
    D: ExponentialFamily<F>,
    F: Float,
{
    family: PhantomData<D>,
    pub options: FitOptions<F>,
}

impl<D, F> GlmBuilder<D, F>
where
    D: ExponentialFamily<F>,
    F: Float,
{
    pub fn new() -> Self {
        Self {
            family: PhantomData,
            options: FitOptions::default(),
        }
    }

    /// Create the (unfit) model with this configuration
    pub fn build(self) -> Glm<D, F> {
        Glm::with_options(self.options)
    }

    /// Set the scale applied to each Newton step
    pub fn learning_rate(mut self, learning_rate: F) -> Self {
        self.options.learning_rate = learning_rate;
        self
    }

    /// Set the tolerance of iteration
    pub fn tol(mut self, tol: F) -> Self {
        self.options.tol = tol;
        self
    }

    /// Report each iteration at the info level instead of debug
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.options.verbose = verbose;
        self
    }

    /// Use a maximum number of iterations
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.options.max_iter = Some(max_iter);
        self
    }
}

impl<D, F> Default for GlmBuilder<D, F>
where
    D: ExponentialFamily<F>,
    F: Float,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Specifies the fitting options
#[derive(Clone, Debug)]
pub struct FitOptions<F>
where
    F: Float,
{
    /// The fixed scale of each Newton step. No line search is performed.
    pub learning_rate: F,
    /// Iteration continues while the average negative log-likelihood
    /// decreases by more than this amount.
    pub tol: F,
    /// Whether each step is reported at the info level
    pub verbose: bool,
    /// The maximum number of scoring steps. Unbounded if not set.
    pub max_iter: Option<usize>,
}

impl<F> Default for FitOptions<F>
where
    F: Float,
{
    fn default() -> Self {
        Self {
            learning_rate: F::from(0.1).unwrap(),
            tol: F::from(1e-3).unwrap(),
            verbose: false,
            max_iter: None,
        }
    }
}
