//! Spreadsheet-export ingestion
//!
//! Parses the financial model's CSV export into populated `Assumptions` and
//! `FixedInputs` stores. The export is a label column followed by value
//! columns; section-header rows partition it into the assumptions region and
//! the yearly-series regions. Currency (`£`), thousands separators, and
//! percent symbols are stripped before numeric parsing.
//!
//! Cells that fail to parse are skipped with a warning rather than failing
//! the load: a half-populated store still produces a renderable projection.

use super::{Assumption, Assumptions, FixedInputs};
use log::warn;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Default path to the spreadsheet export
pub const DEFAULT_EXPORT_PATH: &str = "data/financial_model_export.csv";

/// Errors that make an export unreadable as a whole
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model export: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed model export: {0}")]
    Csv(#[from] csv::Error),
}

/// Parsed result of one export: scalar assumptions plus per-year inputs
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub assumptions: Assumptions,
    pub fixed_inputs: FixedInputs,
}

/// Which region of the export we are currently reading
enum Section {
    Skip,
    Assumptions,
    Yearly,
}

/// Strip formatting symbols and parse a cell as a number
fn clean_numeric(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '£' | ',' | '%'))
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Map an export row label to its assumption field
fn assumption_field<'a>(a: &'a mut Assumptions, label: &str) -> Option<&'a mut Assumption> {
    Some(match label {
        "Starting MAU" => &mut a.starting_mau,
        "Year 1 Target MAU" => &mut a.year1_target_mau,
        "Year 2 Target MAU" => &mut a.year2_target_mau,
        "Year 3 Target MAU" => &mut a.year3_target_mau,
        "Year 4 Target MAU" => &mut a.year4_target_mau,
        "Year 5 Target MAU" => &mut a.year5_target_mau,
        "Premium Subscription Price" => &mut a.premium_subscription_price,
        "Premium Adoption Rate" => &mut a.premium_adoption_rate,
        "Ad Revenue per User" => &mut a.ad_revenue_per_user,
        "Affiliate Commission Rate" => &mut a.affiliate_commission_rate,
        "Social Tier Price" => &mut a.social_tier_price,
        "Broadcast Tier Price" => &mut a.broadcast_tier_price,
        "Broadcast+ Tier Price" => &mut a.broadcast_plus_tier_price,
        "Usage Fee per Second" => &mut a.usage_fee_per_second,
        _ => return None,
    })
}

/// Map an export row label to its per-year series
fn yearly_series<'a>(f: &'a mut FixedInputs, label: &str) -> Option<&'a mut Vec<f64>> {
    Some(match label {
        "Social Tier Customers" => &mut f.b2b_customers.social_tier,
        "Broadcast Tier Customers" => &mut f.b2b_customers.broadcast_tier,
        "Broadcast+ Tier Customers" => &mut f.b2b_customers.broadcast_plus_tier,
        "Seconds Licensed (000s)" => &mut f.seconds_licensed_k,
        "Content Creation & Processing" => &mut f.costs.cogs.content_creation,
        "Platform Infrastructure" => &mut f.costs.cogs.platform_infrastructure,
        "Salaries & Benefits" => &mut f.costs.opex.salaries,
        "Marketing & Growth" => &mut f.costs.opex.marketing,
        "Operations & Legal" => &mut f.costs.opex.operations,
        "Technology & Infrastructure" => &mut f.costs.opex.technology,
        _ => return None,
    })
}

impl LoadedModel {
    /// Load from the default export location
    pub fn load_default() -> Result<Self, ModelError> {
        Self::load_from(Path::new(DEFAULT_EXPORT_PATH))
    }

    /// Load from a specific export file
    pub fn load_from(path: &Path) -> Result<Self, ModelError> {
        Self::from_reader(File::open(path)?)
    }

    /// Load from any reader (e.g. string buffer, HTTP body)
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ModelError> {
        let mut assumptions = Assumptions::default_pitch();
        let mut fixed_inputs = FixedInputs::default();
        let mut section = Section::Skip;

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        for result in csv_reader.records() {
            let record = result?;
            let label = match record.get(0) {
                Some(l) => l.trim(),
                None => continue,
            };
            if label.is_empty() {
                continue;
            }

            // Section headers act as mode switches
            if label.contains("1. KEY ASSUMPTIONS & INPUTS") {
                section = Section::Assumptions;
                continue;
            }
            if label.contains("2. REVENUE PROJECTIONS") || label.contains("3. COST STRUCTURE") {
                section = Section::Yearly;
                continue;
            }
            if label.contains("4. PROFIT & LOSS SUMMARY") {
                section = Section::Skip;
                continue;
            }

            match section {
                Section::Assumptions => {
                    if let Some(field) = assumption_field(&mut assumptions, label) {
                        let raw = record.get(1).unwrap_or("").trim();
                        if raw.is_empty() {
                            continue;
                        }
                        match clean_numeric(raw) {
                            Some(value) => {
                                field.value = value;
                                if let Some(note) = record.get(3) {
                                    let note = note.trim();
                                    if !note.is_empty() {
                                        field.note = Some(note.to_string());
                                    }
                                }
                            }
                            None => warn!("skipping non-numeric value {:?} for {:?}", raw, label),
                        }
                    }
                }
                Section::Yearly => {
                    if let Some(series) = yearly_series(&mut fixed_inputs, label) {
                        series.clear();
                        for i in 1..=5 {
                            let cell = record.get(i).unwrap_or("");
                            let value = clean_numeric(cell).unwrap_or_else(|| {
                                if !cell.trim().is_empty() {
                                    warn!("skipping non-numeric cell {:?} for {:?}", cell, label);
                                }
                                0.0
                            });
                            series.push(value);
                        }
                    }
                }
                Section::Skip => {}
            }
        }

        Ok(Self {
            assumptions,
            fixed_inputs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_EXPORT: &str = "\
1. KEY ASSUMPTIONS & INPUTS,,,
Starting MAU,\"10,000\",,Initial MAU at platform launch
Premium Subscription Price,£7.99,,Monthly price for premium B2C subscription
Premium Adoption Rate,5%,,Percentage of users who subscribe to premium
Usage Fee per Second,£0.01,,Fee per second of licensed content
2. REVENUE PROJECTIONS,,,,,
Social Tier Customers,2,5,12,25,50
Broadcast Tier Customers,1,2,5,10,20
Seconds Licensed (000s),100,400,\"1,600\",\"6,400\",\"25,600\"
3. COST STRUCTURE,,,,,
Content Creation & Processing,\"£120,000\",\"£240,000\",\"£480,000\",\"£960,000\",\"£1,920,000\"
Salaries & Benefits,\"£400,000\",\"£800,000\",\"£1,600,000\",\"£3,200,000\",\"£6,400,000\"
4. PROFIT & LOSS SUMMARY,,,,,
Starting MAU,999999,,should be ignored after the P&L header
";

    #[test]
    fn test_parses_assumptions_and_series() {
        let model = LoadedModel::from_reader(SAMPLE_EXPORT.as_bytes()).unwrap();

        // 10,000 from the assumptions region; the 999999 row after the P&L
        // header is outside every parsed region
        assert_eq!(model.assumptions.starting_mau.value, 10_000.0);
        assert_eq!(model.assumptions.premium_subscription_price.value, 7.99);
        assert_eq!(model.assumptions.premium_adoption_rate.value, 5.0);
        assert_eq!(model.assumptions.usage_fee_per_second.value, 0.01);

        assert_eq!(
            model.fixed_inputs.b2b_customers.social_tier,
            vec![2.0, 5.0, 12.0, 25.0, 50.0]
        );
        assert_eq!(model.fixed_inputs.seconds_licensed_k(3), 1_600.0);
        assert_eq!(model.fixed_inputs.total_cogs(1), 120_000.0);
        assert_eq!(model.fixed_inputs.total_opex(2), 800_000.0);
    }

    #[test]
    fn test_note_column_is_captured() {
        let model = LoadedModel::from_reader(SAMPLE_EXPORT.as_bytes()).unwrap();
        assert_eq!(
            model.assumptions.starting_mau.note.as_deref(),
            Some("Initial MAU at platform launch")
        );
    }

    #[test]
    fn test_malformed_cells_do_not_fail_the_load() {
        let export = "\
1. KEY ASSUMPTIONS & INPUTS,,,
Starting MAU,not-a-number,,bad cell
2. REVENUE PROJECTIONS,,,,,
Social Tier Customers,2,??,12,,50
";
        let model = LoadedModel::from_reader(export.as_bytes()).unwrap();

        // Unparseable assumption keeps its default
        assert_eq!(model.assumptions.starting_mau.value, 10_000.0);
        // Unparseable or empty yearly cells read as zero
        assert_eq!(
            model.fixed_inputs.b2b_customers.social_tier,
            vec![2.0, 0.0, 12.0, 0.0, 50.0]
        );
    }

    #[test]
    fn test_load_default_export() {
        let result = LoadedModel::load_default();
        assert!(result.is_ok(), "Failed to load export: {:?}", result.err());

        let model = result.unwrap();
        assert_eq!(model.assumptions.year3_target_mau.value, 313_000.0);
        assert_eq!(model.assumptions.broadcast_tier_price.value, 1_999.0);
        assert_eq!(model.fixed_inputs.broadcast_plus_customers(5), 10.0);
        assert_eq!(model.fixed_inputs.total_opex(1), 600_000.0);
        assert_eq!(model.fixed_inputs.total_cogs(5), 2_880_000.0);
    }

    #[test]
    fn test_unknown_labels_are_ignored() {
        let export = "\
1. KEY ASSUMPTIONS & INPUTS,,,
Completely Unknown Row,42,,
";
        let model = LoadedModel::from_reader(export.as_bytes()).unwrap();
        assert_eq!(model.assumptions, Assumptions::default_pitch());
    }
}
