use rand::{Rng, SeedableRng};
use rand_distr::{Normal, StandardNormal};
use rand_hc::Hc128Rng;

use crate::error::PricingError;

pub type Path = Vec<f64>;
pub type PathSlice = [f64];

/// One full path draw off the run's generator.
pub trait PathSampler {
    fn sample_path(&self, rn_generator: &mut Hc128Rng, nr_steps: usize) -> Path;
}

impl PathSampler for Normal<f64> {
    fn sample_path(&self, rn_generator: &mut Hc128Rng, nr_steps: usize) -> Path {
        rn_generator.sample_iter(*self).take(nr_steps).collect()
    }
}

impl PathSampler for StandardNormal {
    fn sample_path(&self, rn_generator: &mut Hc128Rng, nr_steps: usize) -> Path {
        rn_generator.sample_iter(*self).take(nr_steps).collect()
    }
}

#[derive(Debug)]
pub struct MonteCarloPathSimulator {
    pub nr_paths: usize,
    pub nr_steps: usize,
}

impl MonteCarloPathSimulator {
    pub fn new(nr_paths: usize, nr_steps: usize) -> Self {
        Self { nr_paths, nr_steps }
    }

    /// Every run owns its seeded generator, so the same seed reproduces
    /// the same paths.
    pub fn simulate_paths(&self, seed_nr: u64, sampler: impl PathSampler) -> Vec<Path> {
        let mut paths = Vec::with_capacity(self.nr_paths);
        let mut rn_generator = Hc128Rng::seed_from_u64(seed_nr);

        for _ in 0..self.nr_paths {
            let path = sampler.sample_path(&mut rn_generator, self.nr_steps);
            paths.push(path);
        }
        paths
    }

    pub fn simulate_paths_with(
        &self,
        seed_nr: u64,
        sampler: impl PathSampler,
        path_fn: impl Fn(&PathSlice) -> Path,
    ) -> Vec<Path> {
        let mut paths = Vec::with_capacity(self.nr_paths);
        let mut rn_generator = Hc128Rng::seed_from_u64(seed_nr);

        for _ in 0..self.nr_paths {
            let path = sampler.sample_path(&mut rn_generator, self.nr_steps);
            paths.push(path_fn(&path));
        }
        paths
    }

    pub fn simulate_paths_apply_in_place(
        &self,
        seed_nr: u64,
        sampler: impl PathSampler,
        path_fn: impl Fn(&mut PathSlice),
    ) -> Vec<Path> {
        let mut paths = Vec::with_capacity(self.nr_paths);
        let mut rn_generator = Hc128Rng::seed_from_u64(seed_nr);

        for _ in 0..self.nr_paths {
            let mut path = sampler.sample_path(&mut rn_generator, self.nr_steps);
            path_fn(&mut path);
            paths.push(path);
        }
        paths
    }
}

pub struct PathEvaluator<'a> {
    paths: &'a [Path],
}

impl<'a> PathEvaluator<'a> {
    pub fn new(paths: &'a [Path]) -> Self {
        Self { paths }
    }

    pub fn evaluate(&self, path_fn: impl Fn(&'a Path) -> Option<f64>) -> Vec<Option<f64>> {
        self.paths.iter().map(path_fn).collect()
    }

    /// Average of the path functional over all paths; paths where the
    /// functional yields nothing still count towards the denominator.
    /// An empty path set has no defined mean and is rejected.
    pub fn evaluate_average(
        &self,
        path_fn: impl Fn(&'a Path) -> Option<f64>,
    ) -> Result<f64, PricingError> {
        if self.paths.is_empty() {
            return Err(PricingError::EmptyInput);
        }
        let total = self.paths.iter().fold(None, |acc, path| {
            if let Some(path_value) = path_fn(path) {
                Some(acc.unwrap_or(0.0) + path_value)
            } else {
                acc
            }
        });
        match total {
            Some(total) => Ok(total / self.paths.len() as f64),
            None => Err(PricingError::EmptyInput),
        }
    }
}
