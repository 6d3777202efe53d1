use crate::common::models::{OptionContract, OptionType};
use crate::error::PricingError;
use probability::distribution::{Distribution, Gaussian};

pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

/// European put and call option prices for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl BlackScholesMerton {
    /// The present value of the contract, by its kind.
    /// A vanishing volatility or expiry would put a zero into the d1 denominator,
    /// so both are rejected up front instead of surfacing a NaN.
    pub fn price(contract: &OptionContract) -> Result<f64, PricingError> {
        if !(contract.vola > 0.0) {
            return Err(PricingError::InvalidParameter {
                name: "vola",
                value: contract.vola,
            });
        }
        if !(contract.time_to_expiration > 0.0) {
            return Err(PricingError::InvalidParameter {
                name: "time_to_expiration",
                value: contract.time_to_expiration,
            });
        }
        let value = match contract.option_type {
            OptionType::Call => Self::call(contract),
            OptionType::Put => Self::put(contract),
        };
        Ok(value)
    }

    fn call(contract: &OptionContract) -> f64 {
        let sigma_exp = contract.vola * contract.time_to_expiration.sqrt();
        let d1 = ((contract.asset_price / contract.strike).ln()
            + (contract.rfr + contract.vola.powi(2) / 2.0) * contract.time_to_expiration)
            / sigma_exp;
        let d2 = d1 - sigma_exp;
        cdf(d1) * contract.asset_price
            - cdf(d2) * contract.strike * (-contract.rfr * contract.time_to_expiration).exp()
    }

    fn put(contract: &OptionContract) -> f64 {
        let sigma_exp = contract.vola * contract.time_to_expiration.sqrt();
        let d1 = ((contract.asset_price / contract.strike).ln()
            + (contract.rfr + contract.vola.powi(2) / 2.0) * contract.time_to_expiration)
            / sigma_exp;
        let d2 = d1 - sigma_exp;
        cdf(-d2) * contract.strike * (-contract.rfr * contract.time_to_expiration).exp()
            - cdf(-d1) * contract.asset_price
    }
}
