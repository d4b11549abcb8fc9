use thiserror::Error;

/// Application error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AugurError {
    /// Not enough samples yet to compute indicators. This is the normal
    /// warm-up state for a freshly seen symbol.
    #[error("Insufficient data for {symbol}: {have} of {need} samples")]
    InsufficientData {
        symbol: String,
        have: usize,
        need: usize,
    },

    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),
}

impl AugurError {
    /// Whether this error only means the symbol is still warming up.
    pub fn is_warming_up(&self) -> bool {
        matches!(self, AugurError::InsufficientData { .. })
    }
}

pub type Result<T> = std::result::Result<T, AugurError>;
