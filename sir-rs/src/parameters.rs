use serde::Deserialize;

/// Inputs to a single SIR run.
///
/// Missing fields take the values the original input form was pre-filled
/// with, so a partial run document is still a complete parameter set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Parameters {
    #[serde(alias = "s0")]
    pub initial_susceptible: f64,
    #[serde(alias = "i0")]
    pub initial_infected: f64,
    /// Accepted but never read by the model: recovered always starts at 0.
    #[serde(alias = "r0")]
    pub initial_recovered: f64,
    #[serde(alias = "beta")]
    pub transmission_rate: f64,
    #[serde(alias = "gamma")]
    pub recovery_rate: f64,
    #[serde(alias = "day_count")]
    pub days: usize,
}

impl Parameters {
    pub fn new(
        initial_susceptible: f64,
        initial_infected: f64,
        transmission_rate: f64,
        recovery_rate: f64,
        days: usize,
    ) -> Parameters {
        Parameters {
            initial_susceptible,
            initial_infected,
            initial_recovered: 0.0,
            transmission_rate,
            recovery_rate,
            days,
        }
    }

    /// Closed population size `N`, fixed for the whole run.
    pub fn population(&self) -> f64 {
        self.initial_susceptible + self.initial_infected
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            initial_susceptible: 990.0,
            initial_infected: 10.0,
            initial_recovered: 0.0,
            transmission_rate: 0.3,
            recovery_rate: 0.1,
            days: 160,
        }
    }
}
