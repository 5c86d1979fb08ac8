//! SportsBet Assistant - bet tracker and sports calculators
//!
//! This library provides:
//! - A bet store persisted through pluggable key-value storage
//! - A bet entry form that validates the amount before adding
//! - Expected runs, actual average and Costanza calculators
//! - The destinations of the navigation menu
//!
//! # Example
//!
//! ```
//! use sportsbet::core::ExpectedRunsForm;
//! use sportsbet::storage::MemoryStore;
//! use sportsbet::BetStore;
//!
//! let mut store = BetStore::new(MemoryStore::new());
//! store.add("Yankees", 50.0, "Win by 2");
//! assert_eq!(store.len(), 1);
//!
//! let form = ExpectedRunsForm {
//!     offense_home: "5".into(),
//!     defense_home: "4".into(),
//!     offense_away: "3".into(),
//!     defense_away: "4".into(),
//!     wind_speed: "10".into(),
//!     wind_gust: "5".into(),
//!     wind_direction: "out".into(),
//! };
//! assert_eq!(form.calculate(), "Expected runs: 8.75");
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod form;
pub mod models;
pub mod shell;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{InputError, StoreError};
pub use form::BetForm;
pub use models::{Bet, ProfileSummary};
pub use shell::Destination;
pub use store::{BetStore, SAVED_BETS_KEY};
