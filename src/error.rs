//! define the error enum for the result of regressions

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegressionError {
    #[error("Inconsistent input: {0}")]
    BadInput(String),
    #[error("Invalid response data: {0}")]
    InvalidY(String),
    /// The normal equations of the weighted least-squares step for the given
    /// natural parameter could not be solved.
    #[error("Singular weighted design matrix for natural parameter {0}")]
    Singular(usize),
    #[error("Model must be fit before predicting")]
    NotFitted,
    #[error("Maximum iterations ({0}) reached")]
    MaxIter(usize),
}

pub type RegressionResult<T> = Result<T, RegressionError>;
