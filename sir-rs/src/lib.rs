//! Discrete-time SIR epidemic model over a closed population.
//!
//! [`SirModel::simulate`] (or the scalar [`simulate`]) steps the susceptible,
//! infected and recovered compartments forward one day at a time. Recovered is
//! always the residual `N - (S + I)`, so every day sums to the population.
pub mod error;
pub mod model;
pub mod output;
pub mod parameters;

pub use error::SirError;
pub use model::{SirModel, simulate};
pub use output::{DayRecord, PhasePoint, SirOutput};
pub use parameters::Parameters;
