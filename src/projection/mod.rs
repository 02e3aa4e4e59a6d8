//! Five-year projection engine and output types

mod engine;
mod series;
pub mod valuation;

pub use engine::{B2bModel, CostModel, ProjectionConfig, ProjectionEngine, PROJECTION_YEARS};
pub use series::{
    CostBreakdown, DashboardKpis, Profitability, ProjectionSeries, ProjectionSummary,
    RevenueBreakdown, YearlyProjection,
};
