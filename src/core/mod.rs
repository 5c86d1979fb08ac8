//! Calculators
//!
//! Stateless text-in, text-out tools. Each module exposes a numeric core and
//! a form type that parses the text fields and formats the result.

pub mod actual_average;
pub mod costanza;
pub mod expected_runs;

pub use actual_average::{actual_average, ActualAverageForm};
pub use costanza::{opposite_pick, CostanzaForm};
pub use expected_runs::{ExpectedRunsForm, GameConditions, WindDirection};
