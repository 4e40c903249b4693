//! RPE-based one-rep-max estimation.
//!
//! The model scales a set's weight by an effort factor from a fixed RPE
//! chart and by a linear rep factor:
//!
//! ```text
//! e1RM   = round((weight / rpe_factor) * (1 + 0.0333 * reps), 1)
//! target = round((e1RM / (1 + 0.0333 * reps)) * rpe_factor, 1)
//! ```

use crate::Rpe;

/// Factor used for any RPE not present in the chart
pub const DEFAULT_FACTOR: f64 = 0.885;

/// Per-rep multiplier of the rep factor
pub const REPS_COEFFICIENT: f64 = 0.0333;

/// RPE chart: level to fraction of a true max
const RPE_CHART: [(f64, f64); 9] = [
    (10.0, 1.0),
    (9.5, 0.978),
    (9.0, 0.955),
    (8.5, 0.939),
    (8.0, 0.917),
    (7.5, 0.901),
    (7.0, 0.885),
    (6.5, 0.869),
    (6.0, 0.853),
];

/// Look up the chart factor for an RPE, falling back to [`DEFAULT_FACTOR`]
pub fn rpe_factor(rpe: Rpe) -> f64 {
    RPE_CHART
        .iter()
        .find(|(level, _)| *level == rpe.value())
        .map(|(_, factor)| *factor)
        .unwrap_or_else(|| {
            tracing::debug!("RPE {} not in chart, using default factor", rpe);
            DEFAULT_FACTOR
        })
}

/// Rep multiplier: `1 + 0.0333 * reps`
pub fn reps_factor(reps: u32) -> f64 {
    1.0 + REPS_COEFFICIENT * f64::from(reps)
}

/// Round to one decimal place
///
/// Works on the exact binary value (ties to even), so `124.94999999999999`
/// stays `124.9` where scaling by ten first would give `125.0`.
pub fn round_to_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Estimated one-rep max for a set
pub fn estimate_max(weight: f64, reps: u32, rpe: Rpe) -> f64 {
    round_to_tenth((weight / rpe_factor(rpe)) * reps_factor(reps))
}

/// Weight expected to produce `reps` at `rpe` for a lifter with the given e1RM
pub fn weight_for(estimated_max: f64, reps: u32, rpe: Rpe) -> f64 {
    round_to_tenth((estimated_max / reps_factor(reps)) * rpe_factor(rpe))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_levels_return_tabled_factor() {
        let expected = [0.853, 0.869, 0.885, 0.901, 0.917, 0.939, 0.955, 0.978, 1.0];
        for (level, factor) in Rpe::CHART_LEVELS.iter().zip(expected) {
            assert_eq!(rpe_factor(*level), factor, "RPE {}", level);
        }
    }

    #[test]
    fn test_unlisted_rpe_falls_back() {
        for value in [0.0, 5.0, 7.25, 11.0, -1.0] {
            assert_eq!(rpe_factor(Rpe(value)), DEFAULT_FACTOR);
        }
    }

    #[test]
    fn test_estimate_max_at_rpe_10() {
        assert_eq!(estimate_max(100.0, 5, Rpe(10.0)), 116.7);
    }

    #[test]
    fn test_estimate_max_known_values() {
        assert_eq!(estimate_max(100.0, 5, Rpe(8.0)), 127.2);
        assert_eq!(estimate_max(140.0, 3, Rpe(9.0)), 161.2);
        assert_eq!(estimate_max(60.0, 8, Rpe(7.0)), 85.9);
    }

    #[test]
    fn test_estimate_max_unlisted_rpe_uses_default() {
        assert_eq!(estimate_max(100.0, 5, Rpe(5.0)), 131.8);
    }

    #[test]
    fn test_weight_for_inverts_estimate() {
        for weight in [60.0, 100.0, 142.5, 180.0, 225.0] {
            for reps in [1, 3, 5, 8, 12] {
                for rpe in Rpe::CHART_LEVELS {
                    let e1rm = estimate_max(weight, reps, rpe);
                    let back = weight_for(e1rm, reps, rpe);
                    assert!(
                        (back - weight).abs() <= 0.1 + 1e-9,
                        "{}x{} @{} came back as {}",
                        weight,
                        reps,
                        rpe,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_weight_for_different_target() {
        assert_eq!(weight_for(127.2, 3, Rpe(9.0)), 110.4);
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(116.65000000000001), 116.7);
        assert_eq!(round_to_tenth(0.04), 0.0);
        assert_eq!(round_to_tenth(2.25), 2.2);
        assert_eq!(round_to_tenth(124.94999999999999), 124.9);
    }

    #[test]
    fn test_estimate_max_just_below_half() {
        assert_eq!(estimate_max(75.0, 20, Rpe(10.0)), 124.9);
        assert_eq!(estimate_max(37.5, 7, Rpe(7.0)), 52.2);
    }
}
