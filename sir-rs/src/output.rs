use serde::Serialize;

/// Compartment sizes for every simulated day, index-aligned by day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SirOutput {
    pub susceptible: Vec<f64>,
    pub infected: Vec<f64>,
    pub recovered: Vec<f64>,
}

/// One row of the compartment time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayRecord {
    pub day: usize,
    pub susceptible: f64,
    pub infected: f64,
    pub recovered: f64,
}

/// One point of the infected-vs-susceptible trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhasePoint {
    pub day: usize,
    pub susceptible: f64,
    pub infected: f64,
}

impl SirOutput {
    pub fn new(len: usize) -> SirOutput {
        SirOutput {
            susceptible: vec![0.; len],
            infected: vec![0.; len],
            recovered: vec![0.; len],
        }
    }

    pub fn len(&self) -> usize {
        self.susceptible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.susceptible.is_empty()
    }

    /// Total population, read back from day 0.
    pub fn population(&self) -> f64 {
        self.day(0)
            .map(|d| d.susceptible + d.infected + d.recovered)
            .unwrap_or(0.)
    }

    pub fn day(&self, day: usize) -> Option<DayRecord> {
        Some(DayRecord {
            day,
            susceptible: *self.susceptible.get(day)?,
            infected: *self.infected.get(day)?,
            recovered: *self.recovered.get(day)?,
        })
    }

    pub fn records(&self) -> impl Iterator<Item = DayRecord> + '_ {
        (0..self.len()).filter_map(|day| self.day(day))
    }

    pub fn phase_plane(&self) -> impl Iterator<Item = PhasePoint> + '_ {
        self.susceptible
            .iter()
            .zip(&self.infected)
            .enumerate()
            .map(|(day, (&susceptible, &infected))| PhasePoint {
                day,
                susceptible,
                infected,
            })
    }

    /// Day and size of the largest infected count. Ties go to the earliest day.
    pub fn peak_infected(&self) -> Option<(usize, f64)> {
        self.infected
            .iter()
            .copied()
            .enumerate()
            .fold(None, |peak, (day, infected)| match peak {
                Some((_, best)) if best >= infected => peak,
                _ => Some((day, infected)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::{DayRecord, SirOutput};

    fn sample() -> SirOutput {
        SirOutput {
            susceptible: vec![90., 80., 75., 74.],
            infected: vec![10., 15., 15., 6.],
            recovered: vec![0., 5., 10., 20.],
        }
    }

    #[test]
    fn test_day_lookup() {
        let output = sample();
        assert_eq!(
            output.day(1),
            Some(DayRecord {
                day: 1,
                susceptible: 80.,
                infected: 15.,
                recovered: 5.,
            })
        );
        assert_eq!(output.day(4), None);
        assert_eq!(output.records().count(), 4);
        assert_eq!(output.population(), 100.);
    }

    #[test]
    fn test_peak_prefers_earliest_day() {
        assert_eq!(sample().peak_infected(), Some((1, 15.)));
        assert_eq!(SirOutput::default().peak_infected(), None);
    }

    #[test]
    fn test_phase_plane_follows_days() {
        let points: Vec<(f64, f64)> = sample()
            .phase_plane()
            .map(|p| (p.susceptible, p.infected))
            .collect();
        assert_eq!(points, vec![(90., 10.), (80., 15.), (75., 15.), (74., 6.)]);
    }
}
