//! Bet entry form

use crate::models::Bet;
use crate::storage::KeyValueStore;
use crate::store::BetStore;

/// Text fields for a new bet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BetForm {
    pub team_name: String,
    pub amount_text: String,
    pub predicted_outcome: String,
}

impl BetForm {
    pub fn new(
        team_name: impl Into<String>,
        amount_text: impl Into<String>,
        predicted_outcome: impl Into<String>,
    ) -> Self {
        Self {
            team_name: team_name.into(),
            amount_text: amount_text.into(),
            predicted_outcome: predicted_outcome.into(),
        }
    }

    /// Amount field as a finite number, if it parses
    pub fn amount(&self) -> Option<f64> {
        self.amount_text.parse().ok().filter(|a: &f64| a.is_finite())
    }

    /// Add the bet to `store` and clear the fields
    ///
    /// Does nothing and returns `None` when the amount does not parse.
    pub fn submit<'a, S: KeyValueStore>(&mut self, store: &'a mut BetStore<S>) -> Option<&'a Bet> {
        let amount = self.amount()?;
        let form = std::mem::take(self);
        Some(store.add(form.team_name, amount, form.predicted_outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_submit_valid() {
        let mut store = BetStore::new(MemoryStore::new());
        let mut form = BetForm::new("Yankees", "25.50", "Win");

        let bet = form.submit(&mut store).cloned().unwrap();
        assert_eq!(bet.team_name, "Yankees");
        assert!((bet.amount - 25.5).abs() < 1e-9);
        assert_eq!(bet.predicted_outcome, "Win");

        assert_eq!(store.len(), 1);
        assert_eq!(form, BetForm::default());
    }

    #[test]
    fn test_submit_invalid_amount() {
        let mut store = BetStore::new(MemoryStore::new());
        let mut form = BetForm::new("Yankees", "twenty", "Win");

        assert!(form.submit(&mut store).is_none());
        assert!(store.is_empty());
        assert_eq!(form.team_name, "Yankees");
        assert_eq!(form.amount_text, "twenty");
    }

    #[test]
    fn test_submit_non_finite_amount() {
        let mut store = BetStore::new(MemoryStore::new());
        for text in ["inf", "-inf", "infinity", "NaN", "1e999"] {
            let mut form = BetForm::new("Dodgers", text, "Win");
            assert!(form.submit(&mut store).is_none(), "accepted {text:?}");
            assert_eq!(form.amount_text, text);
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_submit_empty_amount() {
        let mut store = BetStore::new(MemoryStore::new());
        let mut form = BetForm::default();
        assert!(form.submit(&mut store).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_submit_accepts_empty_text_fields() {
        let mut store = BetStore::new(MemoryStore::new());
        let mut form = BetForm::new("", "10", "");
        assert!(form.submit(&mut store).is_some());
        assert_eq!(store.bets()[0].team_name, "");
    }
}
