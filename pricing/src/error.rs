use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PricingError {
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("unknown option kind '{0}', expected 'call' or 'put'")]
    InvalidKind(String),
    #[error("no simulated values to average")]
    EmptyInput,
}
