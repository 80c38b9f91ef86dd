//! numerical trait constraints
use ndarray::ScalarOperand;
use ndarray_linalg::Lapack;
use num_traits::{FloatConst, FromPrimitive};

/// The floating-point types a model can be fit with. The LAPACK bound is
/// required to solve the normal equations of each scoring step.
pub trait Float: Sized + num_traits::Float + FloatConst + FromPrimitive + Lapack + ScalarOperand {}

impl Float for f32 {}
impl Float for f64 {}
