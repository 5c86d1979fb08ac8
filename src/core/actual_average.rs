//! Actual Average
//!
//! Scales a basketball per-48-minute rate to the minutes a player actually
//! plays: `stat_per_48 / 48 * minutes_played`.

use tracing::debug;

use crate::error::{parse_number, validate_minutes_played, InputError};

pub const INVALID_INPUT_MESSAGE: &str =
    "Please enter valid numbers (minutes played must be greater than 0).";

/// Minutes in a regulation game
pub const GAME_MINUTES: f64 = 48.0;

/// Per-game value of a per-48-minute stat
///
/// # Examples
/// ```
/// use sportsbet::core::actual_average::actual_average;
/// assert!((actual_average(24.0, 30.0) - 15.0).abs() < 1e-9);
/// ```
pub fn actual_average(stat_per_48: f64, minutes_played: f64) -> f64 {
    (stat_per_48 / GAME_MINUTES) * minutes_played
}

/// Text fields of the Basketball Tool screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActualAverageForm {
    pub minutes_played: String,
    pub stat_per_48: String,
}

impl ActualAverageForm {
    /// (minutes_played, stat_per_48)
    pub fn parse(&self) -> Result<(f64, f64), InputError> {
        let minutes = validate_minutes_played(parse_number("minutes played", &self.minutes_played)?)?;
        let stat = parse_number("stat per 48", &self.stat_per_48)?;
        Ok((minutes, stat))
    }

    pub fn calculate(&self) -> String {
        match self.parse() {
            Ok((minutes, stat)) => format!("Actual Average: {:.2}", actual_average(stat, minutes)),
            Err(e) => {
                debug!("Actual average input rejected: {}", e);
                INVALID_INPUT_MESSAGE.to_string()
            }
        }
    }
}
