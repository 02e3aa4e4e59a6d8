//! Business assumptions driving the projection: growth targets, pricing,
//! and externally supplied per-year figures

mod fixed_inputs;
mod growth;
pub mod loader;

pub use fixed_inputs::{B2bCustomers, CogsInputs, CostInputs, FixedInputs, OpexInputs};
pub use growth::{growth_rate, is_peak_season, is_peak_season_on, GrowthBenchmark, GrowthStage};
pub use loader::{LoadedModel, ModelError};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single named business parameter.
///
/// `min`/`max` are advisory slider bounds for input widgets; the projection
/// engine never enforces them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumption {
    pub value: f64,
    pub note: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Assumption {
    /// Create a bare assumption with no metadata
    pub fn new(value: f64) -> Self {
        Self {
            value,
            note: None,
            min: None,
            max: None,
        }
    }

    /// Create an assumption with a description and slider bounds
    pub fn with_bounds(value: f64, note: &str, min: f64, max: f64) -> Self {
        Self {
            value,
            note: Some(note.to_string()),
            min: Some(min),
            max: Some(max),
        }
    }

    /// Whether the current value sits inside the advisory bounds
    pub fn in_bounds(&self) -> bool {
        self.min.map_or(true, |lo| self.value >= lo) && self.max.map_or(true, |hi| self.value <= hi)
    }
}

/// Container for all scalar assumptions (fixed key set)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    // Growth & user metrics
    pub starting_mau: Assumption,
    pub year1_target_mau: Assumption,
    pub year2_target_mau: Assumption,
    pub year3_target_mau: Assumption,
    pub year4_target_mau: Assumption,
    pub year5_target_mau: Assumption,

    // B2C revenue
    pub premium_subscription_price: Assumption,
    /// Percentage of users on the premium subscription
    pub premium_adoption_rate: Assumption,
    /// Monthly ad revenue per user
    pub ad_revenue_per_user: Assumption,
    /// Percentage of premium revenue shared as affiliate commission
    pub affiliate_commission_rate: Assumption,

    // B2B revenue
    pub social_tier_price: Assumption,
    pub broadcast_tier_price: Assumption,
    pub broadcast_plus_tier_price: Assumption,
    /// Fee per second of licensed broadcast content
    pub usage_fee_per_second: Assumption,

    // Seeds for the formula-driven B2B model (used when no fixed inputs
    // are supplied; customer counts double each year from these)
    pub initial_social_tier_customers: Assumption,
    pub initial_broadcast_tier_customers: Assumption,
    pub initial_broadcast_plus_tier_customers: Assumption,
    /// Launch-year licensed content volume, in thousands of seconds
    pub initial_seconds_licensed_k: Assumption,
}

impl Assumptions {
    /// Create assumptions with the default pitch-model values
    pub fn default_pitch() -> Self {
        Self {
            starting_mau: Assumption::with_bounds(
                10_000.0,
                "Initial MAU at platform launch (Month 6)",
                5_000.0,
                20_000.0,
            ),
            year1_target_mau: Assumption::with_bounds(
                50_000.0,
                "Conservative target: 50K MAU (400% growth)",
                30_000.0,
                75_000.0,
            ),
            year2_target_mau: Assumption::with_bounds(
                150_000.0,
                "Conservative target: 150K MAU (200% growth)",
                100_000.0,
                250_000.0,
            ),
            year3_target_mau: Assumption::with_bounds(
                313_000.0,
                "Exit target: 313K MAU for £100M valuation",
                250_000.0,
                500_000.0,
            ),
            year4_target_mau: Assumption::with_bounds(
                500_000.0,
                "Growth target: 500K MAU for £160M+ valuation",
                400_000.0,
                1_000_000.0,
            ),
            year5_target_mau: Assumption::with_bounds(
                2_000_000.0,
                "Major platform target: 2M MAU for £638M valuation",
                1_000_000.0,
                5_000_000.0,
            ),
            premium_subscription_price: Assumption::with_bounds(
                7.99,
                "Monthly price for premium B2C subscription",
                4.99,
                19.99,
            ),
            premium_adoption_rate: Assumption::with_bounds(
                5.0,
                "Percentage of users who subscribe to premium",
                1.0,
                15.0,
            ),
            ad_revenue_per_user: Assumption::with_bounds(
                0.50,
                "Monthly ad revenue per user",
                0.25,
                2.00,
            ),
            affiliate_commission_rate: Assumption::with_bounds(
                20.0,
                "Percentage of revenue shared as affiliate commission",
                10.0,
                40.0,
            ),
            social_tier_price: Assumption::with_bounds(
                499.0,
                "Monthly price for B2B Social Tier",
                299.0,
                999.0,
            ),
            broadcast_tier_price: Assumption::with_bounds(
                1_999.0,
                "Monthly price for B2B Broadcast Tier",
                999.0,
                3_999.0,
            ),
            broadcast_plus_tier_price: Assumption::with_bounds(
                4_999.0,
                "Monthly price for B2B Broadcast+ Tier",
                2_999.0,
                9_999.0,
            ),
            usage_fee_per_second: Assumption::with_bounds(
                0.01,
                "Fee per second of licensed broadcast content (B2B)",
                0.005,
                0.05,
            ),
            initial_social_tier_customers: Assumption::with_bounds(
                5.0,
                "Social Tier customers at end of year 1 (formula model seed)",
                1.0,
                20.0,
            ),
            initial_broadcast_tier_customers: Assumption::with_bounds(
                2.0,
                "Broadcast Tier customers at end of year 1 (formula model seed)",
                0.0,
                10.0,
            ),
            initial_broadcast_plus_tier_customers: Assumption::with_bounds(
                1.0,
                "Broadcast+ Tier customers at end of year 1 (formula model seed)",
                0.0,
                5.0,
            ),
            initial_seconds_licensed_k: Assumption::with_bounds(
                100.0,
                "Year-1 licensed content volume in 000s of seconds",
                10.0,
                1_000.0,
            ),
        }
    }

    /// All-zero assumptions; produces a degenerate (flat-zero) projection
    pub fn zeroed() -> Self {
        let mut a = Self::default_pitch();
        for field in a.fields_mut() {
            field.value = 0.0;
        }
        a
    }

    /// Per-year MAU targets, years 1 through 5 in order
    pub fn mau_targets(&self) -> [f64; 5] {
        [
            self.year1_target_mau.value,
            self.year2_target_mau.value,
            self.year3_target_mau.value,
            self.year4_target_mau.value,
            self.year5_target_mau.value,
        ]
    }

    /// Mutable references to every assumption field, in declaration order
    pub fn fields_mut(&mut self) -> [&mut Assumption; 18] {
        [
            &mut self.starting_mau,
            &mut self.year1_target_mau,
            &mut self.year2_target_mau,
            &mut self.year3_target_mau,
            &mut self.year4_target_mau,
            &mut self.year5_target_mau,
            &mut self.premium_subscription_price,
            &mut self.premium_adoption_rate,
            &mut self.ad_revenue_per_user,
            &mut self.affiliate_commission_rate,
            &mut self.social_tier_price,
            &mut self.broadcast_tier_price,
            &mut self.broadcast_plus_tier_price,
            &mut self.usage_fee_per_second,
            &mut self.initial_social_tier_customers,
            &mut self.initial_broadcast_tier_customers,
            &mut self.initial_broadcast_plus_tier_customers,
            &mut self.initial_seconds_licensed_k,
        ]
    }

    /// Load assumptions from a spreadsheet CSV export, keeping only the
    /// assumptions half of the parsed model
    pub fn from_csv_path(path: &Path) -> Result<Self, ModelError> {
        Ok(LoadedModel::load_from(path)?.assumptions)
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_pitch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pitch_values() {
        let a = Assumptions::default_pitch();

        assert_eq!(a.starting_mau.value, 10_000.0);
        assert_eq!(
            a.mau_targets(),
            [50_000.0, 150_000.0, 313_000.0, 500_000.0, 2_000_000.0]
        );
        assert_eq!(a.premium_subscription_price.value, 7.99);
        assert_eq!(a.broadcast_plus_tier_price.value, 4_999.0);
    }

    #[test]
    fn test_bare_assumption_has_no_metadata() {
        let a = Assumption::new(42.0);
        assert_eq!(a.value, 42.0);
        assert!(a.note.is_none());
        assert!(a.in_bounds());
    }

    #[test]
    fn test_bounds_are_advisory() {
        let mut a = Assumptions::default_pitch();
        a.premium_adoption_rate.value = 50.0; // above the slider max

        assert!(!a.premium_adoption_rate.in_bounds());
        // Value sticks regardless; enforcement is the input widget's job
        assert_eq!(a.premium_adoption_rate.value, 50.0);
    }

    #[test]
    fn test_zeroed_is_all_zero() {
        let mut a = Assumptions::zeroed();
        assert!(a.fields_mut().iter().all(|f| f.value == 0.0));
    }
}
