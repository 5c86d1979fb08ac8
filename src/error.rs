use thiserror::Error;

/// Persistence errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode or decode stored data: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Bet amount for {team:?} is not a finite number: {amount}")]
    NonFiniteAmount { team: String, amount: f64 },
}

/// Calculator input errors
///
/// These never reach the user directly; each calculator maps them to its
/// fixed message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("Minutes played must be greater than 0, got {0}")]
    NonPositiveMinutes(f64),

    #[error("Prediction {0:?} matches neither team")]
    UnknownTeam(String),
}

/// Parse a free text field as a finite number
pub fn parse_number(field: &'static str, value: &str) -> Result<f64, InputError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| InputError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

pub fn validate_required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, InputError> {
    if value.is_empty() {
        return Err(InputError::Missing { field });
    }
    Ok(value)
}

pub fn validate_minutes_played(minutes: f64) -> Result<f64, InputError> {
    if minutes.is_nan() || minutes <= 0.0 {
        return Err(InputError::NonPositiveMinutes(minutes));
    }
    Ok(minutes)
}
