use log::{info, warn};
use sir::{Parameters, SirModel, SirOutput};

use crate::{Environment, RunnerError};

pub const TIMESERIES_FILE: &str = "sir_timeseries.csv";
pub const PHASE_PLANE_FILE: &str = "sir_phase_plane.csv";

/// Simulates the environment's parameters and writes the output tables.
///
/// The time series always goes out. The phase plane is only written when
/// there is an output directory, so stdout stays a single CSV table.
pub fn run(env: &Environment<Parameters>) -> Result<SirOutput, RunnerError> {
    let parameters = env
        .input
        .as_ref()
        .ok_or("run document has no typed input")?;
    info!(
        "replicate {} (seed {}): S0={} I0={} beta={} gamma={} days={}",
        env.replicate,
        env.seed,
        parameters.initial_susceptible,
        parameters.initial_infected,
        parameters.transmission_rate,
        parameters.recovery_rate,
        parameters.days
    );
    if parameters.initial_recovered != 0. {
        warn!(
            "initial_recovered={} is ignored; recovered always starts at 0",
            parameters.initial_recovered
        );
    }
    for (name, rate) in [
        ("transmission_rate", parameters.transmission_rate),
        ("recovery_rate", parameters.recovery_rate),
    ] {
        if !(0. ..=1.).contains(&rate) {
            warn!("{name}={rate} is outside [0, 1]; compartments may saturate");
        }
    }

    let output = SirModel::simulate(parameters)?;

    env.write_records(TIMESERIES_FILE, output.records())?;
    if env.output_dir().is_some() {
        env.write_records(PHASE_PLANE_FILE, output.phase_plane())?;
    }

    summarize(&output);
    Ok(output)
}

fn summarize(output: &SirOutput) {
    if let Some((day, peak)) = output.peak_infected() {
        info!("population {}: infected peaks at {peak:.2} on day {day}", output.population());
    }
    if let Some(last) = output.day(output.len().saturating_sub(1)) {
        info!(
            "day {}: S={:.2} I={:.2} R={:.2}",
            last.day, last.susceptible, last.infected, last.recovered
        );
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use approx::assert_abs_diff_eq;
    use serde_json::json;

    use super::{PHASE_PLANE_FILE, TIMESERIES_FILE, run};
    use crate::{Environment, RunnerError};

    #[test]
    fn test_run_writes_both_tables() {
        let dir = tempfile::tempdir().unwrap();
        let env = Environment::from_json(json!({
            "input": {
                "initial_susceptible": 990,
                "initial_infected": 10,
                "initial_recovered": 0,
                "transmission_rate": 0.3,
                "recovery_rate": 0.1,
                "days": 5,
                "seed": 7
            },
            "output": { "spec": "filesystem", "dir": dir.path().to_str().unwrap() }
        }))
        .with_input_type::<sir::Parameters>()
        .unwrap();

        let output = run(&env).unwrap();
        assert_eq!(output.len(), 5);

        let mut reader = csv::Reader::from_path(dir.path().join(TIMESERIES_FILE)).unwrap();
        assert_eq!(
            reader.headers().unwrap().iter().collect::<Vec<_>>(),
            vec!["day", "susceptible", "infected", "recovered"]
        );
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][1], "990.0");
        let s1: f64 = rows[1][1].parse().unwrap();
        let r1: f64 = rows[1][3].parse().unwrap();
        assert_abs_diff_eq!(s1, 987.03, epsilon = 1e-9);
        assert_abs_diff_eq!(r1, 1.0, epsilon = 1e-9);

        let phase = fs::read_to_string(dir.path().join(PHASE_PLANE_FILE)).unwrap();
        let mut lines = phase.lines();
        assert_eq!(lines.next(), Some("day,susceptible,infected"));
        assert_eq!(lines.next(), Some("0,990.0,10.0"));
        assert_eq!(lines.count(), 4);
    }

    #[test]
    fn test_run_without_output_dir_skips_phase_plane() {
        let env = Environment::from_json(json!({
            "input": { "days": 3 },
            "output": { "spec": "stdout" }
        }))
        .with_input_type::<sir::Parameters>()
        .unwrap();
        assert_eq!(env.output_dir(), None);

        let output = run(&env).unwrap();
        assert_eq!(output.len(), 3);
        assert!(!std::path::Path::new(PHASE_PLANE_FILE).exists());
        assert!(!std::path::Path::new(TIMESERIES_FILE).exists());
    }

    #[test]
    fn test_run_propagates_invalid_parameters() {
        let dir = tempfile::tempdir().unwrap();
        let env = Environment::from_json(json!({
            "input": { "s0": 0, "i0": 0 },
            "output": { "spec": "filesystem", "dir": dir.path().to_str().unwrap() }
        }))
        .with_input_type::<sir::Parameters>()
        .unwrap();

        let result = run(&env);
        assert!(matches!(result, Err(RunnerError::SimulationError(_))));
        assert!(!dir.path().join(TIMESERIES_FILE).exists());
    }

    #[test]
    fn test_run_requires_typed_input() {
        let env: Environment<sir::Parameters> = Environment {
            input: None,
            ..Environment::from_json(json!({}))
                .with_input_type::<sir::Parameters>()
                .unwrap()
        };
        assert!(matches!(run(&env), Err(RunnerError::RunnerError(_))));
    }
}
