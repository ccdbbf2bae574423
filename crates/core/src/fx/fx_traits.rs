use super::fx_model::ExchangeRate;
use crate::errors::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait defining the contract for exchange-rate storage operations.
///
/// The store holds at most one record (a single-row table or a fixed
/// primary key); these operations are the only way the rest of the system
/// touches it.
#[async_trait]
pub trait RateRepositoryTrait: Send + Sync {
    /// Reads the singleton record, if one exists.
    fn get_rate(&self) -> Result<Option<ExchangeRate>>;

    /// Inserts the singleton with `default` unless a record already exists,
    /// returning the surviving record.
    ///
    /// Implementations must make this race-safe: a concurrent duplicate
    /// insert is swallowed by re-reading, so exactly one record survives
    /// any number of racing callers.
    async fn insert_rate_if_absent(&self, default: Decimal) -> Result<ExchangeRate>;

    /// Atomically overwrites the singleton's value and timestamp in one
    /// update. Last writer wins.
    async fn update_rate(&self, value: Decimal) -> Result<ExchangeRate>;
}

/// Trait defining the contract for currency normalization.
#[async_trait]
pub trait CurrencyServiceTrait: Send + Sync {
    /// Current display-per-reference rate. Seeds the default record when
    /// none exists yet; never returns a non-positive value.
    async fn current_rate(&self) -> Result<Decimal>;

    /// Replaces the stored rate from administrative free-text input.
    async fn set_rate(&self, input: &str) -> Result<ExchangeRate>;

    /// Converts a stored reference-currency price to display currency.
    /// No rounding happens here; each presentation surface picks its own
    /// rounding policy.
    async fn to_display(&self, reference_price: Decimal) -> Result<Decimal>;

    /// Converts a user-entered display-currency amount (e.g. a price
    /// filter bound) back to the reference currency the store queries on.
    async fn to_reference(&self, display_price: Decimal) -> Result<Decimal>;
}
