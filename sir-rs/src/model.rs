use log::{debug, trace};

use crate::{error::SirError, output::SirOutput, parameters::Parameters};

pub struct SirModel {}

impl SirModel {
    pub fn simulate(parameters: &Parameters) -> Result<SirOutput, SirError> {
        Self::validate(parameters)?;

        let population = parameters.population();
        let beta = parameters.transmission_rate;
        let gamma = parameters.recovery_rate;
        debug!(
            "simulating {} days: N={population}, beta={beta}, gamma={gamma}",
            parameters.days
        );

        let mut output = SirOutput::new(parameters.days);
        output.susceptible[0] = parameters.initial_susceptible;
        output.infected[0] = parameters.initial_infected;
        // Recovered starts empty no matter what `initial_recovered` says
        output.recovered[0] = 0.;

        for day in 1..parameters.days {
            let susceptible = output.susceptible[day - 1];
            let infected = output.infected[day - 1];

            let new_infections = beta * susceptible * infected / population;
            let new_recoveries = gamma * infected;

            let mut next_susceptible = susceptible - new_infections;
            let mut next_infected = infected + new_infections - new_recoveries;
            if next_susceptible < 0. {
                debug!("day {day}: susceptible saturated at 0 (was {next_susceptible})");
                next_susceptible = 0.;
            }
            if next_infected < 0. {
                debug!("day {day}: infected saturated at 0 (was {next_infected})");
                next_infected = 0.;
            }

            output.susceptible[day] = next_susceptible;
            output.infected[day] = next_infected;
            // Residual, not a running sum of recoveries: absorbs any clamping above
            output.recovered[day] = population - (next_susceptible + next_infected);
            trace!(
                "day {day}: S={next_susceptible} I={next_infected} R={}",
                output.recovered[day]
            );
        }
        Ok(output)
    }

    fn validate(parameters: &Parameters) -> Result<(), SirError> {
        if parameters.days < 1 {
            return Err(SirError::invalid("day count must be at least 1"));
        }
        let scalars = [
            ("initial susceptible", parameters.initial_susceptible),
            ("initial infected", parameters.initial_infected),
            ("transmission rate", parameters.transmission_rate),
            ("recovery rate", parameters.recovery_rate),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(SirError::invalid(format!("{name} must be finite, got {value}")));
            }
        }
        for (name, value) in &scalars[..2] {
            if *value < 0. {
                return Err(SirError::invalid(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        let population = parameters.population();
        if !population.is_finite() {
            return Err(SirError::invalid(format!(
                "total population must be finite, got {population}"
            )));
        }
        if population <= 0. {
            return Err(SirError::invalid("total population must be positive"));
        }
        Ok(())
    }
}

/// Runs the model from the five scalar inputs.
pub fn simulate(
    initial_susceptible: f64,
    initial_infected: f64,
    transmission_rate: f64,
    recovery_rate: f64,
    days: usize,
) -> Result<SirOutput, SirError> {
    SirModel::simulate(&Parameters::new(
        initial_susceptible,
        initial_infected,
        transmission_rate,
        recovery_rate,
        days,
    ))
}
