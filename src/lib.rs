//! Pitch Model - five-year financial projection engine for a startup pitch
//! dashboard
//!
//! This library provides:
//! - A typed assumptions store (growth targets, pricing, cost inputs)
//! - Ingestion of spreadsheet CSV exports into that store
//! - A pure, deterministic five-year projection engine (revenue, costs,
//!   profitability, valuation)
//! - Growth-rate benchmarks by company stage
//! - A scenario runner for config sweeps and sensitivity analysis

pub mod assumptions;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{Assumption, Assumptions, FixedInputs, GrowthStage, LoadedModel};
pub use projection::{ProjectionConfig, ProjectionEngine, ProjectionSeries, YearlyProjection};
pub use scenario::ScenarioRunner;
