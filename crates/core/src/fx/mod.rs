//! FX module - the singleton exchange rate and currency normalization.

mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_traits;


pub use fx_errors::FxError;
pub use fx_model::ExchangeRate;
pub use fx_service::{parse_rate_input, CurrencyService};
pub use fx_traits::{CurrencyServiceTrait, RateRepositoryTrait};
