//! The expected score vanishes at the true parameters: sampling responses
//! from each family and averaging the gradient of the negative
//! log-likelihood over many observations should give nearly zero, while the
//! Fisher information stays positive.
use anyhow::Result;
use fisher_glm::{Bernoulli, Categorical, ExponentialFamily, Gaussian, Poisson};
use ndarray::{Array1, Array2, Axis};
use rand::distributions::WeightedIndex;
use rand::Rng;
use rand_distr::{Distribution, Normal};

mod common;

const N_OBS: usize = 20000;

/// Natural parameters evenly spaced over [lo, hi].
fn grid(lo: f64, hi: f64) -> Array2<f64> {
    Array1::linspace(lo, hi, N_OBS).insert_axis(Axis(0))
}

/// Check that each row of the gradient averages to zero within the
/// tolerance and that the Fisher information is positive everywhere.
fn check_score<D>(dist: &D, data_y: &Array1<f64>, tol: f64) -> Result<()>
where
    D: ExponentialFamily<f64>,
{
    let mean_grad = dist
        .gradient(data_y.view())?
        .mean_axis(Axis(1))
        .ok_or_else(|| anyhow::anyhow!("no observations"))?;
    for g in mean_grad.iter() {
        assert!(g.abs() < tol, "average score {} is not near zero", g);
    }
    assert!(dist.fisher_info().iter().all(|&w| w > 0.));
    Ok(())
}

#[test]
fn bernoulli_score() -> Result<()> {
    let mut rng = common::rng(1);
    let dist = Bernoulli::from_natural(grid(-2., 2.))?;
    let data_y: Array1<f64> = dist
        .probabilities()
        .mapv(|p| if rng.gen_bool(p) { 1. } else { 0. });
    check_score(&dist, &data_y, 0.02)
}

#[test]
fn poisson_score() -> Result<()> {
    let mut rng = common::rng(2);
    let dist = Poisson::from_natural(grid(-1., 1.))?;
    let mut data_y: Array1<f64> = Array1::zeros(N_OBS);
    for (y, &rate) in data_y.iter_mut().zip(dist.rates().iter()) {
        let count: f64 = rand_distr::Poisson::new(rate)?.sample(&mut rng);
        *y = count;
    }
    check_score(&dist, &data_y, 0.05)
}

#[test]
fn gaussian_score() -> Result<()> {
    let mut rng = common::rng(3);
    let noise = Normal::new(0., 1.)?;
    let dist = Gaussian::from_natural(grid(-3., 3.))?;
    let data_y: Array1<f64> = dist.locations().mapv(|mu| mu + noise.sample(&mut rng));
    check_score(&dist, &data_y, 0.05)
}

#[test]
fn categorical_score() -> Result<()> {
    let mut rng = common::rng(4);
    // three classes with natural parameters (0, a, -a)
    let a = Array1::linspace(-1., 1., N_OBS);
    let mut nat_par: Array2<f64> = Array2::zeros((3, N_OBS));
    nat_par.row_mut(1).assign(&a);
    nat_par.row_mut(2).assign(&a.mapv(|a| -a));
    let dist = Categorical::from_natural(nat_par)?;
    let mut data_y: Array1<f64> = Array1::zeros(N_OBS);
    for (y, probs) in data_y.iter_mut().zip(dist.probabilities().axis_iter(Axis(1))) {
        let class = WeightedIndex::new(probs.to_vec())?.sample(&mut rng);
        *y = class as f64;
    }
    check_score(&dist, &data_y, 0.02)
}
