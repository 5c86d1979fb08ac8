//! Bet Store
//!
//! Holds the ordered list of bets and persists the whole list under a single
//! key of the injected storage. Every mutation ends with an explicit
//! [`BetStore::save`]; persistence failures never reach the caller.

use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::models::{Bet, ProfileSummary};
use crate::storage::KeyValueStore;

/// Storage key holding the serialized bet list
pub const SAVED_BETS_KEY: &str = "SavedBets";

/// Ordered bet list backed by key-value storage
#[derive(Debug)]
pub struct BetStore<S: KeyValueStore> {
    storage: S,
    key: String,
    bets: Vec<Bet>,
}

impl<S: KeyValueStore> BetStore<S> {
    /// Create a store over `storage` and load any saved bets
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, SAVED_BETS_KEY)
    }

    /// Create a store persisting under a custom key
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self {
            storage,
            key: key.into(),
            bets: Vec::new(),
        };
        store.load();
        store
    }

    /// Append a new bet and persist the list
    pub fn add(
        &mut self,
        team_name: impl Into<String>,
        amount: f64,
        predicted_outcome: impl Into<String>,
    ) -> &Bet {
        self.bets.push(Bet::new(team_name, amount, predicted_outcome));
        self.save();

        let last = self.bets.len() - 1;
        &self.bets[last]
    }

    /// Persist the whole list, logging and discarding any failure
    pub fn save(&mut self) {
        if let Err(e) = self.try_save() {
            warn!("Failed to save {} bets under {:?}: {}", self.bets.len(), self.key, e);
        }
    }

    /// Persist the whole list
    ///
    /// Fails without writing when an amount is not finite, since JSON would
    /// encode it as `null` and the saved list could no longer be decoded.
    pub fn try_save(&mut self) -> Result<(), StoreError> {
        if let Some(bet) = self.bets.iter().find(|b| !b.amount.is_finite()) {
            return Err(StoreError::NonFiniteAmount {
                team: bet.team_name.clone(),
                amount: bet.amount,
            });
        }

        let encoded = serde_json::to_string(&self.bets)?;
        self.storage.set(&self.key, encoded)?;
        debug!("Saved {} bets under {:?}", self.bets.len(), self.key);
        Ok(())
    }

    /// Replace the list with the saved one
    ///
    /// Leaves the current list untouched when nothing is saved or the saved
    /// data cannot be decoded.
    pub fn load(&mut self) {
        match self.try_load() {
            Ok(Some(bets)) => {
                info!("Loaded {} bets from {:?}", bets.len(), self.key);
                self.bets = bets;
            }
            Ok(None) => debug!("No saved bets under {:?}", self.key),
            Err(e) => warn!("Ignoring saved bets under {:?}: {}", self.key, e),
        }
    }

    /// Read and decode the saved list, `None` if nothing is saved
    pub fn try_load(&self) -> Result<Option<Vec<Bet>>, StoreError> {
        match self.storage.get(&self.key)? {
            Some(encoded) => Ok(Some(serde_json::from_str(&encoded)?)),
            None => Ok(None),
        }
    }

    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }

    pub fn len(&self) -> usize {
        self.bets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }

    /// Sum of all bet amounts
    pub fn total_amount(&self) -> f64 {
        self.bets.iter().map(|b| b.amount).sum()
    }

    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            bet_count: self.len(),
            total_amount: self.total_amount(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
