pub mod models;

pub use models::{OptionContract, OptionType};
