use super::fx_errors::FxError;
use super::fx_model::ExchangeRate;
use super::fx_traits::{CurrencyServiceTrait, RateRepositoryTrait};
use crate::constants::DEFAULT_EXCHANGE_RATE;
use crate::errors::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Owns every read and write of the singleton exchange rate and converts
/// amounts between the reference and display currencies.
///
/// The rate is read through the repository on each use rather than cached:
/// concurrent workers share one store and an administrative update must be
/// visible to all of them on their next read.
#[derive(Clone)]
pub struct CurrencyService {
    repository: Arc<dyn RateRepositoryTrait>,
}

impl CurrencyService {
    pub fn new(repository: Arc<dyn RateRepositoryTrait>) -> Self {
        Self { repository }
    }
}

/// Normalizes administrative rate input and parses it.
///
/// Operators paste values like `"12 000"` or `"12,000"`; thousands
/// separators are stripped before parsing. Non-positive and unparseable
/// values are rejected.
pub fn parse_rate_input(input: &str) -> std::result::Result<Decimal, FxError> {
    let cleaned: String = input
        .chars()
        .filter(|c| *c != ' ' && *c != ',')
        .collect();

    let value: Decimal = cleaned
        .parse()
        .map_err(|_| FxError::InvalidRate(input.to_string()))?;

    if value <= Decimal::ZERO {
        return Err(FxError::InvalidRate(input.to_string()));
    }

    Ok(value)
}

#[async_trait]
impl CurrencyServiceTrait for CurrencyService {
    async fn current_rate(&self) -> Result<Decimal> {
        match self.repository.get_rate()? {
            Some(record) => Ok(record.rate),
            None => {
                log::debug!(
                    "No exchange rate stored, seeding default {}",
                    DEFAULT_EXCHANGE_RATE
                );
                let record = self
                    .repository
                    .insert_rate_if_absent(DEFAULT_EXCHANGE_RATE)
                    .await?;
                Ok(record.rate)
            }
        }
    }

    async fn set_rate(&self, input: &str) -> Result<ExchangeRate> {
        let value = parse_rate_input(input)?;
        let record = self.repository.update_rate(value).await?;
        log::debug!("Exchange rate updated to {}", record.rate);
        Ok(record)
    }

    async fn to_display(&self, reference_price: Decimal) -> Result<Decimal> {
        let rate = self.current_rate().await?;
        Ok(reference_price * rate)
    }

    async fn to_reference(&self, display_price: Decimal) -> Result<Decimal> {
        let rate = self.current_rate().await?;
        // current_rate never hands out a non-positive value.
        debug_assert!(rate > Decimal::ZERO);
        Ok(display_price / rate)
    }
}
