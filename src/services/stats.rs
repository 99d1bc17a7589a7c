use std::collections::BTreeSet;

use crate::{
    models::{Program, ProgramStats},
    services::scoring::round2,
};

/// Aggregates cost, duration and placement figures across programs
///
/// Returns `None` for an empty slice so callers can report "no data"
/// instead of dividing by zero.
pub fn compute_stats(programs: &[Program]) -> Option<ProgramStats> {
    if programs.is_empty() {
        return None;
    }

    let count = programs.len() as f64;
    let mean = |field: fn(&Program) -> f64| programs.iter().map(field).sum::<f64>() / count;

    Some(ProgramStats {
        total_programs: programs.len(),
        avg_cost: round2(mean(Program::cost)),
        avg_duration_months: round2(mean(Program::duration_months)),
        avg_placement_rate: round2(mean(Program::placement_rate) * 100.0),
        modes: programs.iter().map(|p| p.mode().to_string()).collect::<BTreeSet<_>>(),
        locations: programs.iter().map(|p| p.location().to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog_has_no_stats() {
        assert!(compute_stats(&[]).is_none());
    }

    #[test]
    fn test_averages_and_distinct_sets() {
        let programs = vec![
            Program::new("A", 100000.0, 6.0, 0.8, "online", "Pune"),
            Program::new("B", 200000.0, 12.0, 0.6, "offline", "Pune"),
            Program::new("C", 150000.0, 9.0, 0.7, "online", "Delhi"),
        ];

        let stats = compute_stats(&programs).unwrap();
        assert_eq!(stats.total_programs, 3);
        assert_eq!(stats.avg_cost, 150000.0);
        assert_eq!(stats.avg_duration_months, 9.0);
        assert_eq!(stats.avg_placement_rate, 70.0);
        assert_eq!(stats.modes.len(), 2);
        assert!(stats.modes.contains("online"));
        assert!(stats.modes.contains("offline"));
        assert_eq!(
            stats.locations,
            ["Delhi", "Pune"]
                .iter()
                .map(|s| s.to_string())
                .collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn test_averages_are_rounded() {
        let programs = vec![
            Program::new("A", 100.0, 1.0, 0.333, "online", "Goa"),
            Program::new("B", 100.0, 1.0, 0.333, "online", "Goa"),
            Program::new("C", 101.0, 2.0, 0.334, "online", "Goa"),
        ];

        let stats = compute_stats(&programs).unwrap();
        assert_eq!(stats.avg_cost, 100.33);
        assert_eq!(stats.avg_duration_months, 1.33);
        assert_eq!(stats.avg_placement_rate, 33.33);
    }

    #[test]
    fn test_location_set_is_case_sensitive() {
        let programs = vec![
            Program::new("A", 1.0, 1.0, 0.5, "online", "Mumbai"),
            Program::new("B", 1.0, 1.0, 0.5, "online", "mumbai"),
        ];

        let stats = compute_stats(&programs).unwrap();
        assert_eq!(stats.locations.len(), 2);
    }
}
