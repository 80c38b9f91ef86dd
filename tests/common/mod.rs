//! Utility functions for testing: seeded synthetic data, splitting, and the
//! evaluation metrics used to judge a fit.
use fisher_glm::utility::append_ones;
use ndarray::{s, Array1, Array2, ArrayView1};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

/// A reproducible random number generator.
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Send log output to the test harness. Repeated calls are harmless.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// An (m x n) design matrix of independent standard normal features with a
/// column of ones appended for the intercept.
#[allow(dead_code)]
pub fn normal_design<R: Rng>(rng: &mut R, m: usize, n: usize) -> Array2<f64> {
    let x: Array2<f64> = Array2::from_shape_simple_fn((m, n), || rng.sample(StandardNormal));
    append_ones(x.view())
}

/// Hold out every row after the first n_train. The rows are generated
/// independently so no shuffling is needed.
#[allow(dead_code)]
pub fn split<Y: Clone>(
    x: &Array2<f64>,
    y: &Array1<Y>,
    n_train: usize,
) -> (Array2<f64>, Array1<Y>, Array2<f64>, Array1<Y>) {
    (
        x.slice(s![..n_train, ..]).to_owned(),
        y.slice(s![..n_train]).to_owned(),
        x.slice(s![n_train.., ..]).to_owned(),
        y.slice(s![n_train..]).to_owned(),
    )
}

/// The coefficient of determination of the predictions.
#[allow(dead_code)]
pub fn r2_score(y: ArrayView1<f64>, pred: ArrayView1<f64>) -> f64 {
    let mean = y.mean().unwrap_or(0.);
    let ss_res: f64 = y.iter().zip(pred.iter()).map(|(y, p)| (y - p).powi(2)).sum();
    let ss_tot: f64 = y.iter().map(|y| (y - mean).powi(2)).sum();
    1. - ss_res / ss_tot
}

/// The area under the ROC curve, computed as the fraction of
/// (positive, negative) pairs that the scores order correctly.
#[allow(dead_code)]
pub fn roc_auc(y: ArrayView1<bool>, score: ArrayView1<f64>) -> f64 {
    let pos: Vec<f64> = y
        .iter()
        .zip(score.iter())
        .filter(|(&y, _)| y)
        .map(|(_, &s)| s)
        .collect();
    let neg: Vec<f64> = y
        .iter()
        .zip(score.iter())
        .filter(|(&y, _)| !y)
        .map(|(_, &s)| s)
        .collect();
    let mut correct = 0.;
    for p in &pos {
        for n in &neg {
            if p > n {
                correct += 1.;
            } else if p == n {
                correct += 0.5;
            }
        }
    }
    correct / (pos.len() * neg.len()) as f64
}

/// The fraction of predicted labels that match.
#[allow(dead_code)]
pub fn accuracy(y: ArrayView1<usize>, pred: ArrayView1<usize>) -> f64 {
    let n_match = y.iter().zip(pred.iter()).filter(|(y, p)| y == p).count();
    n_match as f64 / y.len() as f64
}
