//! Valuation model: strategic multipliers, exit multiples, and launch-stage
//! constants
//!
//! Years 1 and 2 are fixed launch-stage figures from the funding narrative.
//! Later years take the higher of an MAU-based valuation (market value per
//! MAU compounded by the strategic premiums) and a revenue-multiple
//! valuation.

/// Median market value per MAU
pub const BASE_MAU_VALUE: f64 = 76.0;
/// Sports content drives higher engagement
pub const SPORTS_CONTENT_PREMIUM: f64 = 1.5;
/// Unique licensing model creates defensible IP
pub const BROADCAST_INTEGRATION_PREMIUM: f64 = 2.0;
/// Diversified revenue streams reduce risk
pub const B2B_REVENUE_MODEL_PREMIUM: f64 = 1.2;
/// Average strategic premium for content synergies
pub const STRATEGIC_PREMIUM: f64 = 1.4;

/// Launch valuation: £9M
pub const LAUNCH_VALUATION: f64 = 9_000_000.0;
/// End of year 1: £15M
pub const END_OF_YEAR_ONE_VALUATION: f64 = 15_000_000.0;

/// Revenue multiple applied outside the exit window
pub const DEFAULT_REVENUE_MULTIPLE: f64 = 13.3;

/// Market value per MAU with all strategic premiums applied
pub fn value_per_mau() -> f64 {
    BASE_MAU_VALUE
        * SPORTS_CONTENT_PREMIUM
        * BROADCAST_INTEGRATION_PREMIUM
        * B2B_REVENUE_MODEL_PREMIUM
        * STRATEGIC_PREMIUM
}

/// Exit revenue multiple for a projection year
pub fn exit_multiple(year: u32) -> f64 {
    match year {
        3 => 15.0, // Primary exit window (313K MAU)
        4 => 10.0, // Secondary exit window (500K+ MAU)
        5 => 8.0,  // Extended growth scenario
        _ => DEFAULT_REVENUE_MULTIPLE,
    }
}

/// Estimated company valuation for a year, given its target MAU and total
/// revenue
pub fn valuation(target_mau: f64, total_revenue: f64, year: u32) -> f64 {
    if year == 1 {
        return LAUNCH_VALUATION;
    }
    if year == 2 {
        return END_OF_YEAR_ONE_VALUATION;
    }

    let mau_valuation = target_mau * value_per_mau();
    let revenue_valuation = total_revenue * exit_multiple(year);

    mau_valuation.max(revenue_valuation)
}
