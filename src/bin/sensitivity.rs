//! Sensitivity sweep over the key pitch assumptions
//!
//! Projects a grid of premium adoption rates against Year-3 MAU targets in
//! parallel and writes the outcome metrics to CSV for charting.

use pitch_model::{
    assumptions::Assumptions,
    projection::{ProjectionConfig, ProjectionEngine},
};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

/// Outcome metrics for one grid point
#[derive(Debug, Clone)]
struct GridRow {
    adoption_rate: f64,
    year3_mau: f64,
    year3_revenue: f64,
    year3_valuation: f64,
    year4_revenue: f64,
    year4_ebitda: f64,
}

fn main() {
    env_logger::init();

    let start = Instant::now();

    // 1%..15% adoption, 100k..500k Year-3 MAU
    let adoption_rates: Vec<f64> = (1..=15).map(|r| r as f64).collect();
    let year3_targets: Vec<f64> = (1..=9).map(|m| m as f64 * 50_000.0).collect();

    let grid: Vec<(f64, f64)> = adoption_rates
        .iter()
        .flat_map(|&rate| year3_targets.iter().map(move |&mau| (rate, mau)))
        .collect();

    println!("Sweeping {} scenarios...", grid.len());

    let rows: Vec<GridRow> = grid
        .par_iter()
        .map(|&(adoption_rate, year3_mau)| {
            let mut assumptions = Assumptions::default_pitch();
            assumptions.premium_adoption_rate.value = adoption_rate;
            assumptions.year3_target_mau.value = year3_mau;

            let engine = ProjectionEngine::new(assumptions, ProjectionConfig::default());
            let series = engine.project(None);

            let y3 = &series.yearly[2];
            let y4 = &series.yearly[3];
            GridRow {
                adoption_rate,
                year3_mau,
                year3_revenue: y3.revenue.total,
                year3_valuation: y3.valuation,
                year4_revenue: y4.revenue.total,
                year4_ebitda: y4.profitability.ebitda,
            }
        })
        .collect();

    println!("Sweep complete in {:?}", start.elapsed());

    let output_path = "sensitivity_output.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(
        file,
        "AdoptionRate,Year3MAU,Year3Revenue,Year3Valuation,Year4Revenue,Year4EBITDA"
    )
    .unwrap();
    for row in &rows {
        writeln!(
            file,
            "{:.1},{:.0},{:.2},{:.2},{:.2},{:.2}",
            row.adoption_rate,
            row.year3_mau,
            row.year3_revenue,
            row.year3_valuation,
            row.year4_revenue,
            row.year4_ebitda,
        )
        .unwrap();
    }

    println!("Output written to {}", output_path);

    // Headline extremes for a quick read
    if let (Some(min), Some(max)) = (
        rows.iter()
            .min_by(|a, b| a.year3_valuation.total_cmp(&b.year3_valuation)),
        rows.iter()
            .max_by(|a, b| a.year3_valuation.total_cmp(&b.year3_valuation)),
    ) {
        println!(
            "\nYear-3 valuation range: £{:.0} (adoption {:.0}%, MAU {:.0})",
            min.year3_valuation, min.adoption_rate, min.year3_mau
        );
        println!(
            "                     to £{:.0} (adoption {:.0}%, MAU {:.0})",
            max.year3_valuation, max.adoption_rate, max.year3_mau
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
}
