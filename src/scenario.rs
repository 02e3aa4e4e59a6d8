//! Scenario runner for batch projections
//!
//! Holds one loaded assumption set and re-projects it under many
//! configurations or assumption tweaks without re-reading the export.

use crate::assumptions::{Assumptions, FixedInputs, ModelError};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionSeries};

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv_path(Path::new("export.csv"))?;
///
/// for start_year in [1, 3] {
///     let config = ProjectionConfig { ad_revenue_start_year: start_year, ..Default::default() };
///     let series = runner.run(config);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_assumptions: Assumptions,
    fixed_inputs: Option<FixedInputs>,
}

impl ScenarioRunner {
    /// Create runner with the default pitch-model assumptions and no fixed
    /// inputs (engine falls back to the formula/ratio models)
    pub fn new() -> Self {
        Self {
            base_assumptions: Assumptions::default_pitch(),
            fixed_inputs: None,
        }
    }

    /// Create runner with pre-built inputs
    pub fn with_inputs(assumptions: Assumptions, fixed_inputs: Option<FixedInputs>) -> Self {
        Self {
            base_assumptions: assumptions,
            fixed_inputs,
        }
    }

    /// Create runner by loading a spreadsheet CSV export
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, ModelError> {
        let loaded = crate::assumptions::LoadedModel::load_from(path)?;
        Ok(Self {
            base_assumptions: loaded.assumptions,
            fixed_inputs: Some(loaded.fixed_inputs),
        })
    }

    /// Run a single projection with the given config
    pub fn run(&self, config: ProjectionConfig) -> ProjectionSeries {
        let engine = ProjectionEngine::new(self.base_assumptions.clone(), config);
        engine.project(self.fixed_inputs.as_ref())
    }

    /// Run multiple configurations against the same inputs
    pub fn run_scenarios(&self, configs: &[ProjectionConfig]) -> Vec<ProjectionSeries> {
        configs.iter().map(|c| self.run(c.clone())).collect()
    }

    /// Sensitivity sweep: re-project once per candidate value, applying it
    /// through the setter before each run
    pub fn sweep<F>(
        &self,
        set: F,
        values: &[f64],
        config: &ProjectionConfig,
    ) -> Vec<(f64, ProjectionSeries)>
    where
        F: Fn(&mut Assumptions, f64),
    {
        values
            .iter()
            .map(|&v| {
                let mut assumptions = self.base_assumptions.clone();
                set(&mut assumptions, v);
                let engine = ProjectionEngine::new(assumptions, config.clone());
                (v, engine.project(self.fixed_inputs.as_ref()))
            })
            .collect()
    }

    /// Get reference to base assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.base_assumptions
    }

    /// Get mutable reference to base assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.base_assumptions
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_scenarios() {
        let runner = ScenarioRunner::new();

        let configs = vec![
            ProjectionConfig::default(),
            ProjectionConfig {
                ad_revenue_start_year: 3,
                ..Default::default()
            },
        ];

        let results = runner.run_scenarios(&configs);
        assert_eq!(results.len(), 2);

        // Gating ads to year 3 can only lower early revenue
        assert!(
            results[1].yearly[0].revenue.total <= results[0].yearly[0].revenue.total
        );
        assert_eq!(
            results[1].yearly[4].revenue.total,
            results[0].yearly[4].revenue.total
        );
    }

    #[test]
    fn test_sweep_orders_results_by_input() {
        let runner = ScenarioRunner::new();
        let values = [1.0, 5.0, 10.0];

        let results = runner.sweep(
            |a, v| a.premium_adoption_rate.value = v,
            &values,
            &ProjectionConfig::default(),
        );

        assert_eq!(results.len(), 3);
        // Higher adoption means higher subscription revenue
        let subs: Vec<f64> = results
            .iter()
            .map(|(_, s)| s.yearly[2].revenue.premium_subscriptions)
            .collect();
        assert!(subs[0] < subs[1] && subs[1] < subs[2]);
    }
}
