//! Core projection engine for the five-year financial model

use crate::assumptions::{Assumptions, FixedInputs};
use super::series::{
    CostBreakdown, Profitability, ProjectionSeries, RevenueBreakdown, YearlyProjection,
};
use super::valuation;

/// Number of fiscal years in a projection
pub const PROJECTION_YEARS: u32 = 5;

/// How B2B revenue volumes are sourced
#[derive(Debug, Clone, PartialEq)]
pub enum B2bModel {
    /// Per-year customer counts and usage volumes from `FixedInputs`
    /// (typically a spreadsheet export)
    FixedCounts,
    /// Exponential fallback: customer counts seed from the initial-customer
    /// assumptions and double each year; usage volume grows 4x per year
    FormulaGrowth,
}

/// How yearly costs are derived
#[derive(Debug, Clone, PartialEq)]
pub enum CostModel {
    /// Sum the per-year COGS/OpEx line items from `FixedInputs`
    FixedLineItems,
    /// Scale costs with revenue using ratios fixed once from a baseline
    /// year-1 reference point (never re-derived per projected year)
    RevenueRatio {
        baseline_revenue: f64,
        baseline_cogs: f64,
        baseline_opex: f64,
    },
}

impl CostModel {
    /// Ratio model seeded from the launch-year cost sheet
    pub fn default_ratio() -> Self {
        CostModel::RevenueRatio {
            baseline_revenue: 450_000.0,
            baseline_cogs: 180_000.0,
            baseline_opex: 600_000.0,
        }
    }
}

/// Configuration for a projection run.
///
/// Each field encodes one of the model's policy variants; the defaults are
/// the canonical configuration documented in DESIGN.md.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// First year in which ad revenue contributes (1 = from launch)
    pub ad_revenue_start_year: u32,

    /// B2B revenue sourcing
    pub b2b_model: B2bModel,

    /// Cost derivation
    pub cost_model: CostModel,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            ad_revenue_start_year: 1,
            b2b_model: B2bModel::FixedCounts,
            cost_model: CostModel::FixedLineItems,
        }
    }
}

/// Main projection engine.
///
/// Pure over its inputs: no I/O, no clock, no mutation. Any finite
/// assumption set produces a well-formed five-year series; degenerate inputs
/// yield zero rows rather than errors, so a live-editable dashboard always
/// has something to render.
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self {
            assumptions,
            config,
        }
    }

    /// Run the five-year projection
    pub fn project(&self, fixed_inputs: Option<&FixedInputs>) -> ProjectionSeries {
        let mut series = ProjectionSeries::new();
        let targets = self.assumptions.mau_targets();
        let mut prior_mau = self.assumptions.starting_mau.value;

        for (i, &target_mau) in targets.iter().enumerate() {
            let year = i as u32 + 1;

            // Midpoint approximation of the in-year user base; downstream
            // consumers expect this exact averaging
            let average_mau = (prior_mau + target_mau) / 2.0;

            let revenue = self.revenue_breakdown(year, average_mau, fixed_inputs);
            let costs = self.costs(year, revenue.total, fixed_inputs);
            let profitability = profitability(revenue.total, &costs);
            let valuation = valuation::valuation(target_mau, revenue.total, year);

            series.add_year(YearlyProjection {
                year,
                mau: target_mau,
                revenue,
                costs,
                profitability,
                valuation,
            });

            prior_mau = target_mau;
        }

        series
    }

    /// Revenue components for one year
    fn revenue_breakdown(
        &self,
        year: u32,
        average_mau: f64,
        fixed_inputs: Option<&FixedInputs>,
    ) -> RevenueBreakdown {
        let a = &self.assumptions;

        // B2C
        let premium_subscriptions = average_mau
            * (a.premium_adoption_rate.value / 100.0)
            * a.premium_subscription_price.value
            * 12.0;

        let ad_revenue = if year >= self.config.ad_revenue_start_year {
            average_mau * a.ad_revenue_per_user.value * 12.0
        } else {
            0.0
        };

        let affiliate_revenue =
            premium_subscriptions * (a.affiliate_commission_rate.value / 100.0);

        let total_b2c = premium_subscriptions + ad_revenue + affiliate_revenue;

        // B2B
        let (social_customers, broadcast_customers, broadcast_plus_customers, seconds_k) =
            self.b2b_volumes(year, fixed_inputs);

        let social_tier = social_customers * a.social_tier_price.value * 12.0;
        let broadcast_tier = broadcast_customers * a.broadcast_tier_price.value * 12.0;
        let broadcast_plus_tier =
            broadcast_plus_customers * a.broadcast_plus_tier_price.value * 12.0;
        let usage_fees = seconds_k * 1_000.0 * a.usage_fee_per_second.value;

        let total_b2b = social_tier + broadcast_tier + broadcast_plus_tier + usage_fees;

        RevenueBreakdown {
            premium_subscriptions,
            ad_revenue,
            affiliate_revenue,
            total_b2c,
            social_tier,
            broadcast_tier,
            broadcast_plus_tier,
            usage_fees,
            total_b2b,
            total: total_b2c + total_b2b,
        }
    }

    /// B2B customer counts per tier and licensed seconds (000s) for a year.
    ///
    /// Falls back to the formula model when fixed inputs are not available.
    fn b2b_volumes(&self, year: u32, fixed_inputs: Option<&FixedInputs>) -> (f64, f64, f64, f64) {
        match (&self.config.b2b_model, fixed_inputs) {
            (B2bModel::FixedCounts, Some(inputs)) => (
                inputs.social_customers(year),
                inputs.broadcast_customers(year),
                inputs.broadcast_plus_customers(year),
                inputs.seconds_licensed_k(year),
            ),
            _ => {
                let a = &self.assumptions;
                let doubling = 2f64.powi(year as i32 - 1);
                let usage_growth = 4f64.powi(year as i32 - 1);
                (
                    a.initial_social_tier_customers.value * doubling,
                    a.initial_broadcast_tier_customers.value * doubling,
                    a.initial_broadcast_plus_tier_customers.value * doubling,
                    a.initial_seconds_licensed_k.value * usage_growth,
                )
            }
        }
    }

    /// Yearly costs per the configured cost model.
    ///
    /// Falls back to the baseline ratio model when fixed line items are not
    /// available.
    fn costs(&self, year: u32, total_revenue: f64, fixed_inputs: Option<&FixedInputs>) -> CostBreakdown {
        let ratio_model = match (&self.config.cost_model, fixed_inputs) {
            (CostModel::FixedLineItems, Some(inputs)) => {
                return CostBreakdown {
                    total_cogs: inputs.total_cogs(year),
                    total_opex: inputs.total_opex(year),
                };
            }
            (CostModel::FixedLineItems, None) => CostModel::default_ratio(),
            (ratio @ CostModel::RevenueRatio { .. }, _) => ratio.clone(),
        };

        match ratio_model {
            CostModel::RevenueRatio {
                baseline_revenue,
                baseline_cogs,
                baseline_opex,
            } if baseline_revenue > 0.0 => CostBreakdown {
                total_cogs: total_revenue * (baseline_cogs / baseline_revenue),
                total_opex: total_revenue * (baseline_opex / baseline_revenue),
            },
            _ => CostBreakdown::default(),
        }
    }
}

/// Profitability metrics with the zero-revenue guard
fn profitability(total_revenue: f64, costs: &CostBreakdown) -> Profitability {
    let gross_profit = total_revenue - costs.total_cogs;
    let ebitda = gross_profit - costs.total_opex;
    let gross_margin_pct = if total_revenue != 0.0 {
        gross_profit / total_revenue * 100.0
    } else {
        0.0
    };

    Profitability {
        gross_profit,
        ebitda,
        gross_margin_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn engine() -> ProjectionEngine {
        ProjectionEngine::new(Assumptions::default_pitch(), ProjectionConfig::default())
    }

    #[test]
    fn test_five_years_in_order() {
        let series = engine().project(Some(&FixedInputs::zeroed_five_years()));

        assert_eq!(series.yearly.len(), PROJECTION_YEARS as usize);
        for (i, y) in series.yearly.iter().enumerate() {
            assert_eq!(y.year, i as u32 + 1);
        }
    }

    #[test]
    fn test_average_mau_is_midpoint() {
        let a = Assumptions::default_pitch();
        let series = engine().project(Some(&FixedInputs::zeroed_five_years()));

        // Back out average MAU from premium subscription revenue
        let implied_average = |y: &crate::projection::YearlyProjection| {
            y.revenue.premium_subscriptions
                / ((a.premium_adoption_rate.value / 100.0)
                    * a.premium_subscription_price.value
                    * 12.0)
        };

        let year1 = &series.yearly[0];
        assert_relative_eq!(
            implied_average(year1),
            (10_000.0 + 50_000.0) / 2.0,
            max_relative = 1e-12
        );

        let year3 = &series.yearly[2];
        assert_relative_eq!(
            implied_average(year3),
            (150_000.0 + 313_000.0) / 2.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_launch_valuations_fixed_regardless_of_inputs() {
        let mut a = Assumptions::default_pitch();
        a.year1_target_mau.value = 9_999_999.0;
        a.premium_subscription_price.value = 99.0;
        let engine = ProjectionEngine::new(a, ProjectionConfig::default());

        let series = engine.project(None);
        assert_eq!(series.yearly[0].valuation, 9_000_000.0);
        assert_eq!(series.yearly[1].valuation, 15_000_000.0);
    }

    #[test]
    fn test_zero_revenue_gives_zero_margin_not_nan() {
        let engine = ProjectionEngine::new(Assumptions::zeroed(), ProjectionConfig::default());
        let series = engine.project(Some(&FixedInputs::zeroed_five_years()));

        for y in &series.yearly {
            assert_eq!(y.revenue.total, 0.0);
            assert_eq!(y.profitability.gross_margin_pct, 0.0);
            assert!(y.profitability.gross_margin_pct.is_finite());
        }
    }

    #[test]
    fn test_valuation_monotone_in_mau_and_revenue() {
        let inputs = FixedInputs::zeroed_five_years();

        let base = engine().project(Some(&inputs));

        // Raise year-5 MAU only
        let mut a = Assumptions::default_pitch();
        a.year5_target_mau.value *= 2.0;
        let more_mau = ProjectionEngine::new(a, ProjectionConfig::default()).project(Some(&inputs));
        assert!(more_mau.yearly[4].valuation >= base.yearly[4].valuation);

        // Raise revenue only (usage fees leave MAU untouched)
        let mut inputs_more_revenue = inputs.clone();
        inputs_more_revenue.seconds_licensed_k = vec![0.0, 0.0, 0.0, 0.0, 1_000_000.0];
        let more_revenue = engine().project(Some(&inputs_more_revenue));
        assert!(more_revenue.yearly[4].valuation >= base.yearly[4].valuation);
    }

    #[test]
    fn test_recomputation_is_bit_identical() {
        let e = engine();
        let inputs = FixedInputs::zeroed_five_years();

        let first = e.project(Some(&inputs));
        let second = e.project(Some(&inputs));

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_ad_revenue_gating() {
        let config = ProjectionConfig {
            ad_revenue_start_year: 3,
            ..Default::default()
        };
        let engine = ProjectionEngine::new(Assumptions::default_pitch(), config);
        let series = engine.project(Some(&FixedInputs::zeroed_five_years()));

        assert_eq!(series.yearly[0].revenue.ad_revenue, 0.0);
        assert_eq!(series.yearly[1].revenue.ad_revenue, 0.0);
        assert!(series.yearly[2].revenue.ad_revenue > 0.0);
        assert!(series.yearly[4].revenue.ad_revenue > 0.0);
    }

    #[test]
    fn test_formula_model_doubles_counts_and_quadruples_usage() {
        let config = ProjectionConfig {
            b2b_model: B2bModel::FormulaGrowth,
            ..Default::default()
        };
        let engine = ProjectionEngine::new(Assumptions::default_pitch(), config);
        let series = engine.project(None);

        let y1 = &series.yearly[0].revenue;
        let y2 = &series.yearly[1].revenue;
        let y3 = &series.yearly[2].revenue;

        assert_relative_eq!(y2.social_tier, y1.social_tier * 2.0, max_relative = 1e-12);
        assert_relative_eq!(y3.social_tier, y1.social_tier * 4.0, max_relative = 1e-12);
        assert_relative_eq!(y2.usage_fees, y1.usage_fees * 4.0, max_relative = 1e-12);
        assert_relative_eq!(y3.usage_fees, y1.usage_fees * 16.0, max_relative = 1e-12);

        // Year 1 seeds straight from the assumptions: 5 * 499 * 12
        assert_relative_eq!(y1.social_tier, 5.0 * 499.0 * 12.0, max_relative = 1e-12);
    }

    #[test]
    fn test_fixed_counts_use_supplied_volumes() {
        let mut inputs = FixedInputs::zeroed_five_years();
        inputs.b2b_customers.social_tier = vec![2.0, 5.0, 12.0, 25.0, 50.0];
        inputs.seconds_licensed_k = vec![100.0, 400.0, 1_600.0, 6_400.0, 25_600.0];

        let series = engine().project(Some(&inputs));
        let y2 = &series.yearly[1].revenue;

        assert_relative_eq!(y2.social_tier, 5.0 * 499.0 * 12.0, max_relative = 1e-12);
        // 400k seconds at £0.01/second
        assert_relative_eq!(y2.usage_fees, 400.0 * 1_000.0 * 0.01, max_relative = 1e-12);
        assert_eq!(y2.broadcast_tier, 0.0);
    }

    #[test]
    fn test_ratio_costs_scale_with_revenue() {
        let config = ProjectionConfig {
            cost_model: CostModel::default_ratio(),
            ..Default::default()
        };
        let engine = ProjectionEngine::new(Assumptions::default_pitch(), config);
        let series = engine.project(Some(&FixedInputs::zeroed_five_years()));

        for y in &series.yearly {
            assert_relative_eq!(
                y.costs.total_cogs,
                y.revenue.total * (180_000.0 / 450_000.0),
                max_relative = 1e-12
            );
            assert_relative_eq!(
                y.costs.total_opex,
                y.revenue.total * (600_000.0 / 450_000.0),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_fixed_line_items_without_inputs_fall_back_to_ratio() {
        let series = engine().project(None);
        let y3 = &series.yearly[2];

        assert_relative_eq!(
            y3.costs.total_cogs,
            y3.revenue.total * 0.4,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_ebitda_and_gross_profit() {
        let mut inputs = FixedInputs::zeroed_five_years();
        inputs.costs.cogs.content_creation[3] = 1_000_000.0;
        inputs.costs.opex.salaries[3] = 2_000_000.0;

        let series = engine().project(Some(&inputs));
        let y4 = &series.yearly[3];

        assert_relative_eq!(
            y4.profitability.gross_profit,
            y4.revenue.total - 1_000_000.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            y4.profitability.ebitda,
            y4.profitability.gross_profit - 2_000_000.0,
            max_relative = 1e-12
        );
    }
}
