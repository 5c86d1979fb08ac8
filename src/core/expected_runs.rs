//! Expected Runs
//!
//! Baseball scoring projection from team averages with a wind adjustment.
//!
//! ```text
//! base = (offense_home + defense_away + offense_away + defense_home) / 2
//! runs = base + wind_factor * wind_speed + gust_factor * wind_gust
//! ```
//!
//! The factors depend on whether the wind blows in, out, or across.

use tracing::debug;

use crate::error::{parse_number, validate_required, InputError};

pub const INVALID_INPUT_MESSAGE: &str = "Please fill in all fields with valid numbers.";

/// Wind direction relative to the outfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindDirection {
    In,
    Out,
    Cross,
}

impl WindDirection {
    /// Case-insensitive; anything other than "in" or "out" is a crosswind
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "in" => WindDirection::In,
            "out" => WindDirection::Out,
            _ => WindDirection::Cross,
        }
    }

    /// (wind_factor, gust_factor)
    pub fn factors(self) -> (f64, f64) {
        match self {
            WindDirection::In => (-0.03, -0.01),
            WindDirection::Out => (0.06, 0.03),
            WindDirection::Cross => (0.04, 0.02),
        }
    }
}

/// Parsed game conditions
#[derive(Debug, Clone, PartialEq)]
pub struct GameConditions {
    pub offense_home: f64,
    pub defense_home: f64,
    pub offense_away: f64,
    pub defense_away: f64,
    pub wind_speed: f64,
    pub wind_gust: f64,
    pub direction: WindDirection,
}

impl GameConditions {
    /// Runs before the wind adjustment
    pub fn base_runs(&self) -> f64 {
        (self.offense_home + self.defense_away + self.offense_away + self.defense_home) / 2.0
    }

    /// Projected total runs
    ///
    /// # Examples
    /// ```
    /// use sportsbet::core::expected_runs::{GameConditions, WindDirection};
    /// let game = GameConditions {
    ///     offense_home: 5.0,
    ///     defense_home: 4.0,
    ///     offense_away: 3.0,
    ///     defense_away: 4.0,
    ///     wind_speed: 10.0,
    ///     wind_gust: 5.0,
    ///     direction: WindDirection::Out,
    /// };
    /// assert!((game.expected_runs() - 8.75).abs() < 1e-9);
    /// ```
    pub fn expected_runs(&self) -> f64 {
        let (wind_factor, gust_factor) = self.direction.factors();
        self.base_runs() + wind_factor * self.wind_speed + gust_factor * self.wind_gust
    }
}

/// Text fields of the Expected Runs screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpectedRunsForm {
    pub offense_home: String,
    pub defense_home: String,
    pub offense_away: String,
    pub defense_away: String,
    pub wind_speed: String,
    pub wind_gust: String,
    pub wind_direction: String,
}

impl ExpectedRunsForm {
    pub fn parse(&self) -> Result<GameConditions, InputError> {
        Ok(GameConditions {
            offense_home: parse_number("home offense", &self.offense_home)?,
            defense_home: parse_number("home defense", &self.defense_home)?,
            offense_away: parse_number("away offense", &self.offense_away)?,
            defense_away: parse_number("away defense", &self.defense_away)?,
            wind_speed: parse_number("wind speed", &self.wind_speed)?,
            wind_gust: parse_number("wind gust", &self.wind_gust)?,
            direction: WindDirection::parse(validate_required(
                "wind direction",
                &self.wind_direction,
            )?),
        })
    }

    /// Result line shown to the user
    pub fn calculate(&self) -> String {
        match self.parse() {
            Ok(game) => format!("Expected runs: {:.2}", game.expected_runs()),
            Err(e) => {
                debug!("Expected runs input rejected: {}", e);
                INVALID_INPUT_MESSAGE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(direction: &str) -> ExpectedRunsForm {
        ExpectedRunsForm {
            offense_home: "5".to_string(),
            defense_home: "4".to_string(),
            offense_away: "3".to_string(),
            defense_away: "4".to_string(),
            wind_speed: "10".to_string(),
            wind_gust: "5".to_string(),
            wind_direction: direction.to_string(),
        }
    }

    #[test]
    fn test_wind_direction_parse() {
        assert_eq!(WindDirection::parse("in"), WindDirection::In);
        assert_eq!(WindDirection::parse("IN"), WindDirection::In);
        assert_eq!(WindDirection::parse("Out"), WindDirection::Out);
        assert_eq!(WindDirection::parse("cross"), WindDirection::Cross);
        assert_eq!(WindDirection::parse("left to right"), WindDirection::Cross);
        assert_eq!(WindDirection::parse(" in"), WindDirection::Cross);
    }

    #[test]
    fn test_base_runs() {
        let game = form("out").parse().unwrap();
        assert!((game.base_runs() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_wind_out() {
        assert_eq!(form("out").calculate(), "Expected runs: 8.75");
    }

    #[test]
    fn test_wind_in() {
        // 8 - 0.3 - 0.05
        assert_eq!(form("In").calculate(), "Expected runs: 7.65");
    }

    #[test]
    fn test_wind_cross() {
        // 8 + 0.4 + 0.1
        assert_eq!(form("cross").calculate(), "Expected runs: 8.50");
        assert_eq!(form("anything").calculate(), "Expected runs: 8.50");
    }

    #[test]
    fn test_invalid_number() {
        let mut f = form("out");
        f.wind_speed = "abc".to_string();
        assert_eq!(f.calculate(), INVALID_INPUT_MESSAGE);
        assert_eq!(
            f.parse(),
            Err(InputError::InvalidNumber {
                field: "wind speed",
                value: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_non_finite_number() {
        let mut f = form("out");
        f.wind_gust = "inf".to_string();
        assert_eq!(f.calculate(), INVALID_INPUT_MESSAGE);

        let mut f = form("in");
        f.offense_home = "NaN".to_string();
        assert_eq!(f.calculate(), INVALID_INPUT_MESSAGE);
    }

    #[test]
    fn test_missing_field() {
        let mut f = form("out");
        f.offense_away.clear();
        assert_eq!(f.calculate(), INVALID_INPUT_MESSAGE);
    }

    #[test]
    fn test_empty_direction() {
        assert_eq!(form("").calculate(), INVALID_INPUT_MESSAGE);
    }

    #[test]
    fn test_empty_form() {
        assert_eq!(ExpectedRunsForm::default().calculate(), INVALID_INPUT_MESSAGE);
    }
}
