//! Projection output structures

use serde::{Deserialize, Serialize};

/// Revenue breakdown for one projected year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    // B2C
    pub premium_subscriptions: f64,
    pub ad_revenue: f64,
    pub affiliate_revenue: f64,
    pub total_b2c: f64,

    // B2B
    pub social_tier: f64,
    pub broadcast_tier: f64,
    pub broadcast_plus_tier: f64,
    pub usage_fees: f64,
    pub total_b2b: f64,

    pub total: f64,
}

/// Cost breakdown for one projected year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub total_cogs: f64,
    pub total_opex: f64,
}

/// Profitability metrics for one projected year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profitability {
    pub gross_profit: f64,
    pub ebitda: f64,
    /// Gross profit as a percentage of revenue; 0 when revenue is 0
    pub gross_margin_pct: f64,
}

/// One fiscal year of projected results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyProjection {
    /// Fiscal year, 1 through 5
    pub year: u32,
    /// Target MAU at the end of the year
    pub mau: f64,
    pub revenue: RevenueBreakdown,
    pub costs: CostBreakdown,
    pub profitability: Profitability,
    /// Estimated company valuation at the end of the year
    pub valuation: f64,
}

/// Complete five-year projection, ordered by year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    pub yearly: Vec<YearlyProjection>,
}

impl ProjectionSeries {
    pub fn new() -> Self {
        Self { yearly: Vec::new() }
    }

    pub fn add_year(&mut self, projection: YearlyProjection) {
        self.yearly.push(projection);
    }

    /// Totals across the whole projection window
    pub fn summary(&self) -> ProjectionSummary {
        let total_revenue: f64 = self.yearly.iter().map(|y| y.revenue.total).sum();
        let total_b2c_revenue: f64 = self.yearly.iter().map(|y| y.revenue.total_b2c).sum();
        let total_b2b_revenue: f64 = self.yearly.iter().map(|y| y.revenue.total_b2b).sum();
        let total_cogs: f64 = self.yearly.iter().map(|y| y.costs.total_cogs).sum();
        let total_opex: f64 = self.yearly.iter().map(|y| y.costs.total_opex).sum();
        let total_ebitda: f64 = self.yearly.iter().map(|y| y.profitability.ebitda).sum();

        let final_mau = self.yearly.last().map(|y| y.mau).unwrap_or(0.0);
        let final_valuation = self.yearly.last().map(|y| y.valuation).unwrap_or(0.0);

        ProjectionSummary {
            years: self.yearly.len() as u32,
            total_revenue,
            total_b2c_revenue,
            total_b2b_revenue,
            total_cogs,
            total_opex,
            total_ebitda,
            final_mau,
            final_valuation,
        }
    }

    /// Headline dashboard metrics, taken from the Year-4 reference year.
    ///
    /// `None` when the series has no year-4 row (e.g. an empty series).
    pub fn kpis(&self) -> Option<DashboardKpis> {
        self.yearly.iter().find(|y| y.year == 4).map(|y| DashboardKpis {
            year: y.year,
            valuation: y.valuation,
            mau: y.mau,
            total_revenue: y.revenue.total,
            b2b_revenue: y.revenue.total_b2b,
            b2c_revenue: y.revenue.total_b2c,
            ebitda: y.profitability.ebitda,
            gross_margin_pct: y.profitability.gross_margin_pct,
        })
    }
}

impl Default for ProjectionSeries {
    fn default() -> Self {
        Self::new()
    }
}

/// Totals across the projection window
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u32,
    pub total_revenue: f64,
    pub total_b2c_revenue: f64,
    pub total_b2b_revenue: f64,
    pub total_cogs: f64,
    pub total_opex: f64,
    pub total_ebitda: f64,
    pub final_mau: f64,
    pub final_valuation: f64,
}

/// Year-4 headline metrics for KPI cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardKpis {
    pub year: u32,
    pub valuation: f64,
    pub mau: f64,
    pub total_revenue: f64,
    pub b2b_revenue: f64,
    pub b2c_revenue: f64,
    pub ebitda: f64,
    pub gross_margin_pct: f64,
}
