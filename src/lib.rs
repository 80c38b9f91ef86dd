//! A library for fitting generalized linear models over exponential-family
//! responses by Fisher scoring.
//!
//! Each response family exposes its sufficient statistics and their moments,
//! from which the gradient and Fisher information of the negative
//! log-likelihood with respect to the natural parameters follow. The fitter
//! only ever uses these quantities, so it is agnostic to the family.
//!
//! # Example
//!
//! ```no_run
//! use fisher_glm::{utility::append_ones, Bernoulli, Glm};
//! use ndarray::array;
//!
//! # fn main() -> fisher_glm::error::RegressionResult<()> {
//! let data_x = array![[0.1, 0.4], [1.2, -0.3], [-0.8, 0.2], [0.3, 0.9], [1.5, 1.1]];
//! // the intercept term is a column of ones supplied by the caller
//! let data_x = append_ones(data_x.view());
//! let data_y = array![false, true, false, true, true];
//! let mut glm = Glm::<Bernoulli<f64>, f64>::builder().tol(1e-4).build();
//! let fit = glm.fit(data_x.view(), data_y.view())?;
//! println!("average nll: {}", fit.nll);
//! let probs = glm.predict(data_x.view())?.probabilities().to_owned();
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod family;
pub mod fit;
pub mod glm;
pub mod irls;
pub mod link;
mod math;
pub mod model;
pub mod num;
pub mod response;
pub mod utility;

pub use error::{RegressionError, RegressionResult};
pub use family::{ExponentialFamily, Moment};
pub use fit::{options::FitOptions, Fit};
pub use glm::Glm;
pub use response::{
    bernoulli::Bernoulli, categorical::Categorical, gaussian::Gaussian, poisson::Poisson,
};
