//! Canonical link functions for the scalar response families

use crate::num::Float;

/// Maps between the mean of a response distribution and its natural
/// parameter. Only canonical links are used, so the natural parameter of each
/// observation is the linear predictor itself.
pub trait Link {
    /// Maps the expectation value of the response variable to the natural
    /// parameter.
    fn func<F: Float>(mean: F) -> F;
    /// Maps the natural parameter to the expectation value of the response.
    fn func_inv<F: Float>(nat_par: F) -> F;
}

/// The canonical link for a Bernoulli response, g(p) = log(p/(1-p)). Its
/// inverse is the logistic sigmoid.
pub struct Logit;
impl Link for Logit {
    fn func<F: Float>(mean: F) -> F {
        num_traits::Float::ln(mean / (F::one() - mean))
    }
    fn func_inv<F: Float>(nat_par: F) -> F {
        // Evaluate with a non-positive exponent so that large magnitudes
        // saturate to 0 or 1 instead of producing NaN.
        if nat_par < F::zero() {
            let e = num_traits::Float::exp(nat_par);
            e / (F::one() + e)
        } else {
            (F::one() + num_traits::Float::exp(-nat_par)).recip()
        }
    }
}

/// The canonical link of the Poisson response is the logarithm.
pub struct Log;
impl Link for Log {
    fn func<F: Float>(mean: F) -> F {
        num_traits::Float::ln(mean)
    }
    fn func_inv<F: Float>(nat_par: F) -> F {
        num_traits::Float::exp(nat_par)
    }
}

/// The identity link, canonical for a Gaussian response.
pub struct Id;
impl Link for Id {
    #[inline]
    fn func<F: Float>(mean: F) -> F {
        mean
    }
    #[inline]
    fn func_inv<F: Float>(nat_par: F) -> F {
        nat_par
    }
}
