use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;

/// Put or call, normalized at construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionType {
    Call,
    Put,
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind.to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidKind(kind.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct OptionContract {
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiration: f64,
    /// the asset's price at time t
    pub asset_price: f64,
    /// the annualized risk-free interest rate
    pub rfr: f64,
    /// the annualized standard deviation of the stock's returns
    pub vola: f64,
    pub option_type: OptionType,
}

impl OptionContract {
    /// The `kind` is matched case-insensitively against 'call' and 'put';
    /// all numeric parameters must be finite.
    pub fn new(
        strike: f64,
        time_to_expiration: f64,
        asset_price: f64,
        rfr: f64,
        vola: f64,
        kind: &str,
    ) -> Result<Self, PricingError> {
        let option_type = kind.parse()?;
        for (name, value) in [
            ("strike", strike),
            ("time_to_expiration", time_to_expiration),
            ("asset_price", asset_price),
            ("rfr", rfr),
            ("vola", vola),
        ] {
            if !value.is_finite() {
                return Err(PricingError::InvalidParameter { name, value });
            }
        }
        Ok(Self {
            strike,
            time_to_expiration,
            asset_price,
            rfr,
            vola,
            option_type,
        })
    }
}

impl fmt::Display for OptionContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Option: Strike=${:.2}, Spot=${:.2}, Expiry={:.2}y, Rate={:.2}%, Vol={:.2}%",
            self.option_type,
            self.strike,
            self.asset_price,
            self.time_to_expiration,
            self.rfr * 100.0,
            self.vola * 100.0
        )
    }
}
