use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-entered bet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bet {
    pub id: Uuid,
    pub team_name: String,
    pub amount: f64,
    pub predicted_outcome: String,
}

impl Bet {
    /// Create a bet with a freshly generated id
    pub fn new(team_name: impl Into<String>, amount: f64, predicted_outcome: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_name: team_name.into(),
            amount,
            predicted_outcome: predicted_outcome.into(),
        }
    }
}

/// Summary shown on the profile screen
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    pub bet_count: usize,
    pub total_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bet_fields() {
        let bet = Bet::new("Yankees", 25.5, "Win by 3");
        assert_eq!(bet.team_name, "Yankees");
        assert!((bet.amount - 25.5).abs() < 1e-9);
        assert_eq!(bet.predicted_outcome, "Win by 3");
    }

    #[test]
    fn test_new_bet_ids_unique() {
        let a = Bet::new("A", 1.0, "x");
        let b = Bet::new("A", 1.0, "x");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_bet_json_fields() {
        let json = r#"{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "team_name": "Mets",
            "amount": 10.0,
            "predicted_outcome": "Lose"
        }"#;

        let bet: Bet = serde_json::from_str(json).unwrap();
        assert_eq!(bet.id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert_eq!(bet.team_name, "Mets");
        assert_eq!(bet.predicted_outcome, "Lose");
    }
}
