use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The singleton exchange-rate record: units of display currency per one
/// reference-currency unit.
///
/// Exactly one record exists at any time and its rate is positive. The
/// record is created lazily with [`crate::constants::DEFAULT_EXCHANGE_RATE`]
/// on first read and mutated only through an administrative update; there is
/// no rate history, only the current value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub rate: Decimal,
    pub updated_at: NaiveDateTime,
}

impl ExchangeRate {
    pub fn new(rate: Decimal) -> Self {
        ExchangeRate {
            rate,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
