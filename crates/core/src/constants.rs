use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Currency in which catalog prices are persisted.
pub const REFERENCE_CURRENCY: &str = "USD";

/// Currency shown to end users.
pub const DISPLAY_CURRENCY: &str = "UZS";

/// Rate seeded the first time the singleton record is read and none exists
/// (1 USD in UZS).
pub const DEFAULT_EXCHANGE_RATE: Decimal = dec!(12000);

/// Search terms shorter than this return empty results.
pub const SEARCH_MIN_TERM_LEN: usize = 2;

/// Result caps for the global search surface.
pub const SEARCH_PRODUCT_LIMIT: usize = 10;
pub const SEARCH_CATEGORY_LIMIT: usize = 5;
pub const SEARCH_PORTFOLIO_LIMIT: usize = 5;
