pub mod european_option;
pub mod gbm;
pub mod monte_carlo;

pub use european_option::MonteCarloEuropeanOption;
pub use gbm::GeometricBrownianMotion;
