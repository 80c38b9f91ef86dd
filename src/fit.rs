//! struct holding the summary of a completed fit

pub mod options;

/// The result of a Fisher scoring fit. The coefficients themselves stay on
/// the fitter that produced this.
#[derive(Clone, Debug)]
pub struct Fit<F> {
    /// The average negative log-likelihood at the final coefficients.
    pub nll: F,
    /// The number of scoring steps taken.
    pub n_iter: usize,
    /// The average negative log-likelihood at the initial (zero)
    /// coefficients followed by its value after each step.
    pub history: Vec<F>,
}
