use rand::Rng;
use rand_distr::StandardNormal;
use rand_hc::Hc128Rng;

use crate::simulation::monte_carlo::PathSampler;

/// Model params for the SDE
/// '''math
/// dS_t / S_t = mu dt + sigma dW_t
/// ''', where $dW_t ~ N(0, sqrt(dt))$
/// https://en.wikipedia.org/wiki/Geometric_Brownian_motion
pub struct GeometricBrownianMotion {
    initial_value: f64,
    /// drift term
    mu: f64,
    /// volatility
    sigma: f64,
    /// change in time
    dt: f64,
}

impl GeometricBrownianMotion {
    pub fn new(initial_value: f64, drift: f64, vola: f64, dt: f64) -> Self {
        Self {
            initial_value,
            mu: drift,
            dt,
            sigma: vola,
        }
    }

    /// Euler step; each path carries its own running scalar price forward.
    pub fn step(&self, st: f64, z: f64) -> f64 {
        let d_st = st * (self.mu * self.dt + self.sigma * self.dt.sqrt() * z);
        st + d_st // d_St = S_t+1 - St
    }

    pub fn generate_path(&self, standard_normals: &[f64]) -> Vec<f64> {
        let mut path = Vec::with_capacity(standard_normals.len());

        let mut curr_p = self.initial_value;
        for z in standard_normals {
            curr_p = self.step(curr_p, *z);
            path.push(curr_p);
        }

        path
    }

    pub fn generate_in_place(&self, standard_normals: &mut [f64]) {
        let mut curr_p = self.initial_value;

        for z in standard_normals.iter_mut() {
            curr_p = self.step(curr_p, *z);
            *z = curr_p;
        }
    }
}

impl PathSampler for GeometricBrownianMotion {
    #[inline]
    fn sample_path(&self, rn_generator: &mut Hc128Rng, nr_steps: usize) -> Vec<f64> {
        let mut standard_normals: Vec<f64> = rn_generator
            .sample_iter(StandardNormal)
            .take(nr_steps)
            .collect();

        self.generate_in_place(&mut standard_normals);
        standard_normals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::SeedableRng;

    #[test]
    fn deterministic_step() {
        let gbm = GeometricBrownianMotion::new(100.0, 0.05, 0.2, 0.01);

        // without a shock only the drift moves the price
        assert_approx_eq!(gbm.step(100.0, 0.0), 100.0 * (1.0 + 0.05 * 0.01), 1e-12);

        let up = gbm.step(100.0, 1.0);
        let down = gbm.step(100.0, -1.0);
        assert_approx_eq!(up - down, 2.0 * 100.0 * 0.2 * 0.01_f64.sqrt(), 1e-12);
    }

    #[test]
    fn generate_path_matches_in_place() {
        let gbm = GeometricBrownianMotion::new(100.0, 0.05, 0.2, 0.01);
        let standard_normals = vec![0.3, -1.2, 0.7, 0.0, 2.1];

        let path = gbm.generate_path(&standard_normals);
        assert_eq!(path.len(), standard_normals.len());

        let mut in_place = standard_normals.clone();
        gbm.generate_in_place(&mut in_place);
        assert_eq!(path, in_place);
    }

    #[test]
    fn sampled_path_stays_positive() {
        let gbm = GeometricBrownianMotion::new(100.0, 0.05, 0.2, 0.01);
        let mut rn_generator = Hc128Rng::seed_from_u64(42);

        let path = gbm.sample_path(&mut rn_generator, 100);
        assert_eq!(path.len(), 100);
        assert!(path.iter().all(|price| *price > 0.0));
    }
}
