use thiserror::Error;

#[derive(Error, Debug)]
pub enum FxError {
    /// Administrative rate input was non-positive or unparseable. The
    /// stored rate is left unchanged.
    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),
}
