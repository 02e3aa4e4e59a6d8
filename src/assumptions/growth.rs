//! Month-over-month growth benchmarks by company stage
//!
//! The season flag is always passed in explicitly; nothing here reads the
//! system clock, so the lookup stays deterministic under test.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Company growth stage for benchmark lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthStage {
    Early,
    Growth,
    Mature,
}

/// Peak-season vs. off-season month-over-month growth fractions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthBenchmark {
    pub peak_mom_growth: f64,
    pub off_season_mom_growth: f64,
}

impl GrowthStage {
    /// Benchmark growth rates for this stage
    pub fn benchmark(self) -> GrowthBenchmark {
        match self {
            GrowthStage::Early => GrowthBenchmark {
                peak_mom_growth: 0.25,
                off_season_mom_growth: 0.15,
            },
            GrowthStage::Growth => GrowthBenchmark {
                peak_mom_growth: 0.15,
                off_season_mom_growth: 0.08,
            },
            GrowthStage::Mature => GrowthBenchmark {
                peak_mom_growth: 0.08,
                off_season_mom_growth: 0.03,
            },
        }
    }
}

/// Month-over-month growth fraction for a stage, given whether the current
/// period falls in the peak sports season
pub fn growth_rate(stage: GrowthStage, peak_season: bool) -> f64 {
    let benchmark = stage.benchmark();
    if peak_season {
        benchmark.peak_mom_growth
    } else {
        benchmark.off_season_mom_growth
    }
}

/// Whether a calendar month (1-12) falls in the peak sports season
/// (September through December)
pub fn is_peak_season(month: u32) -> bool {
    (9..=12).contains(&month)
}

/// Calendar convenience for callers holding a date
pub fn is_peak_season_on(date: NaiveDate) -> bool {
    is_peak_season(date.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_rate_follows_season_flag() {
        assert_eq!(growth_rate(GrowthStage::Early, true), 0.25);
        assert_eq!(growth_rate(GrowthStage::Early, false), 0.15);
        assert_eq!(growth_rate(GrowthStage::Growth, true), 0.15);
        assert_eq!(growth_rate(GrowthStage::Growth, false), 0.08);
        assert_eq!(growth_rate(GrowthStage::Mature, true), 0.08);
        assert_eq!(growth_rate(GrowthStage::Mature, false), 0.03);
    }

    #[test]
    fn test_peak_season_window() {
        assert!(!is_peak_season(1));
        assert!(!is_peak_season(8));
        assert!(is_peak_season(9));
        assert!(is_peak_season(12));

        let autumn = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
        let spring = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
        assert!(is_peak_season_on(autumn));
        assert!(!is_peak_season_on(spring));
    }
}
