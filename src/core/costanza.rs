//! Costanza Predictor
//!
//! Whatever team you pick, it picks the other one.

use tracing::debug;

use crate::error::InputError;

pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid team name from the two teams.";

/// The team opposite to `prediction` (case-insensitive)
///
/// # Examples
/// ```
/// use sportsbet::core::costanza::opposite_pick;
/// assert_eq!(opposite_pick("Yankees", "Mets", "yankees").unwrap(), "Mets");
/// assert!(opposite_pick("Yankees", "Mets", "Dodgers").is_err());
/// ```
pub fn opposite_pick<'a>(
    team_one: &'a str,
    team_two: &'a str,
    prediction: &str,
) -> Result<&'a str, InputError> {
    let prediction_lower = prediction.to_lowercase();

    if prediction_lower == team_one.to_lowercase() {
        Ok(team_two)
    } else if prediction_lower == team_two.to_lowercase() {
        Ok(team_one)
    } else {
        Err(InputError::UnknownTeam(prediction.to_string()))
    }
}

/// Text fields of the Costanza screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostanzaForm {
    pub team_one: String,
    pub team_two: String,
    pub prediction: String,
}

impl CostanzaForm {
    pub fn calculate(&self) -> String {
        match opposite_pick(&self.team_one, &self.team_two, &self.prediction) {
            Ok(team) => team.to_string(),
            Err(e) => {
                debug!("Costanza input rejected: {}", e);
                INVALID_INPUT_MESSAGE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(prediction: &str) -> CostanzaForm {
        CostanzaForm {
            team_one: "Yankees".to_string(),
            team_two: "Mets".to_string(),
            prediction: prediction.to_string(),
        }
    }

    #[test]
    fn test_pick_team_one_returns_team_two() {
        assert_eq!(form("yankees").calculate(), "Mets");
        assert_eq!(form("YANKEES").calculate(), "Mets");
    }

    #[test]
    fn test_pick_team_two_returns_team_one() {
        assert_eq!(form("Mets").calculate(), "Yankees");
        assert_eq!(form("mets").calculate(), "Yankees");
    }

    #[test]
    fn test_unknown_team() {
        assert_eq!(form("Dodgers").calculate(), INVALID_INPUT_MESSAGE);
        assert_eq!(
            opposite_pick("Yankees", "Mets", "Dodgers"),
            Err(InputError::UnknownTeam("Dodgers".to_string()))
        );
    }

    #[test]
    fn test_original_casing_kept() {
        assert_eq!(opposite_pick("new york", "BOSTON", "New York").unwrap(), "BOSTON");
    }

    #[test]
    fn test_same_name_picks_team_two() {
        assert_eq!(opposite_pick("Mets", "mets", "METS").unwrap(), "mets");
    }
}
