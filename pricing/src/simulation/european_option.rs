use crate::common::models::{OptionContract, OptionType};
use crate::error::PricingError;
use crate::simulation::gbm::GeometricBrownianMotion;
use crate::simulation::monte_carlo::{MonteCarloPathSimulator, Path, PathEvaluator, PathSlice};

/// Monte Carlo pricer for a European vanilla option: simulates risk-neutral
/// price paths of the underlying and discounts the expected terminal payoff.
#[derive(Debug)]
pub struct MonteCarloEuropeanOption {
    contract: OptionContract,
    mc_simulator: MonteCarloPathSimulator,
    seed_nr: u64,
}

impl MonteCarloEuropeanOption {
    /// `dt` is one discretization step in years; the step count per path is
    /// derived from the contract's time to expiration.
    pub fn new(
        nr_paths: usize,
        contract: OptionContract,
        dt: f64,
        seed_nr: u64,
    ) -> Result<Self, PricingError> {
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(PricingError::InvalidParameter {
                name: "dt",
                value: dt,
            });
        }
        let nr_steps = ((contract.time_to_expiration / dt).round() as usize).max(1);
        let mc_simulator = MonteCarloPathSimulator::new(nr_paths, nr_steps);
        Ok(Self {
            contract,
            mc_simulator,
            seed_nr,
        })
    }

    fn dt(&self) -> f64 {
        self.contract.time_to_expiration / self.mc_simulator.nr_steps as f64
    }

    fn discount_factor(&self) -> f64 {
        (-self.contract.rfr * self.contract.time_to_expiration).exp()
    }

    fn call_payoff(&self, path: &PathSlice) -> Option<f64> {
        path.last().map(|p| (p - self.contract.strike).max(0.0))
    }

    fn put_payoff(&self, path: &PathSlice) -> Option<f64> {
        path.last().map(|p| (self.contract.strike - p).max(0.0))
    }

    /// Simulated price paths of the underlying, one per requested path,
    /// each of the derived step count.
    pub fn simulate_paths(&self) -> Vec<Path> {
        let stock_gbm: GeometricBrownianMotion = self.into();
        self.mc_simulator.simulate_paths(self.seed_nr, stock_gbm)
    }

    /// Mean terminal payoff over the given paths, discounted to present value.
    pub fn discounted_expected_payoff(&self, paths: &[Path]) -> Result<f64, PricingError> {
        let path_evaluator = PathEvaluator::new(paths);
        let expected_payoff = match self.contract.option_type {
            OptionType::Call => path_evaluator.evaluate_average(|path| self.call_payoff(path)),
            OptionType::Put => path_evaluator.evaluate_average(|path| self.put_payoff(path)),
        }?;
        Ok(expected_payoff * self.discount_factor())
    }

    /// The Monte Carlo price estimate of the contract.
    pub fn price(&self) -> Result<f64, PricingError> {
        let paths = self.simulate_paths();
        self.discounted_expected_payoff(&paths)
    }
}

impl From<&MonteCarloEuropeanOption> for GeometricBrownianMotion {
    fn from(mc_option: &MonteCarloEuropeanOption) -> Self {
        // under the risk neutral measure we have mu = r
        let drift = mc_option.contract.rfr;
        GeometricBrownianMotion::new(
            mc_option.contract.asset_price,
            drift,
            mc_option.contract.vola,
            mc_option.dt(),
        )
    }
}
