//! Externally supplied per-year figures: B2B customer counts, licensed
//! content volumes, and cost-structure line items
//!
//! Populated once at load time (from a spreadsheet export or defaults) and
//! read-only for the duration of a projection run. Every accessor takes a
//! 1-indexed projection year and treats missing entries as zero.

use serde::{Deserialize, Serialize};

/// B2B customer counts per pricing tier, indexed by year (0 = year 1)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct B2bCustomers {
    pub social_tier: Vec<f64>,
    pub broadcast_tier: Vec<f64>,
    pub broadcast_plus_tier: Vec<f64>,
}

/// Cost of goods sold line items, indexed by year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CogsInputs {
    pub content_creation: Vec<f64>,
    pub platform_infrastructure: Vec<f64>,
}

/// Operating expense line items, indexed by year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpexInputs {
    pub salaries: Vec<f64>,
    pub marketing: Vec<f64>,
    pub operations: Vec<f64>,
    pub technology: Vec<f64>,
}

/// Cost structure split into COGS and OpEx
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostInputs {
    pub cogs: CogsInputs,
    pub opex: OpexInputs,
}

/// All pre-seeded per-year inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixedInputs {
    pub b2b_customers: B2bCustomers,
    /// Licensed content volume in thousands of seconds
    pub seconds_licensed_k: Vec<f64>,
    pub costs: CostInputs,
}

/// Look up a 1-indexed year in a per-year series, defaulting to zero
fn year_value(series: &[f64], year: u32) -> f64 {
    match year.checked_sub(1) {
        Some(idx) => series.get(idx as usize).copied().unwrap_or(0.0),
        None => 0.0,
    }
}

impl FixedInputs {
    /// Fixed inputs with every series zeroed out for five years
    pub fn zeroed_five_years() -> Self {
        let zeros = vec![0.0; 5];
        Self {
            b2b_customers: B2bCustomers {
                social_tier: zeros.clone(),
                broadcast_tier: zeros.clone(),
                broadcast_plus_tier: zeros.clone(),
            },
            seconds_licensed_k: zeros.clone(),
            costs: CostInputs {
                cogs: CogsInputs {
                    content_creation: zeros.clone(),
                    platform_infrastructure: zeros.clone(),
                },
                opex: OpexInputs {
                    salaries: zeros.clone(),
                    marketing: zeros.clone(),
                    operations: zeros.clone(),
                    technology: zeros,
                },
            },
        }
    }

    pub fn social_customers(&self, year: u32) -> f64 {
        year_value(&self.b2b_customers.social_tier, year)
    }

    pub fn broadcast_customers(&self, year: u32) -> f64 {
        year_value(&self.b2b_customers.broadcast_tier, year)
    }

    pub fn broadcast_plus_customers(&self, year: u32) -> f64 {
        year_value(&self.b2b_customers.broadcast_plus_tier, year)
    }

    /// Licensed seconds for the year, in thousands
    pub fn seconds_licensed_k(&self, year: u32) -> f64 {
        year_value(&self.seconds_licensed_k, year)
    }

    /// Total COGS for the year across all line items
    pub fn total_cogs(&self, year: u32) -> f64 {
        year_value(&self.costs.cogs.content_creation, year)
            + year_value(&self.costs.cogs.platform_infrastructure, year)
    }

    /// Total OpEx for the year across all line items
    pub fn total_opex(&self, year: u32) -> f64 {
        year_value(&self.costs.opex.salaries, year)
            + year_value(&self.costs.opex.marketing, year)
            + year_value(&self.costs.opex.operations, year)
            + year_value(&self.costs.opex.technology, year)
    }
}
