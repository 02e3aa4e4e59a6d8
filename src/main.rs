//! Pitch Model CLI
//!
//! Loads the financial model (spreadsheet CSV export or built-in defaults),
//! runs the five-year projection, prints the yearly table and KPI block, and
//! writes CSV/JSON exports for downstream dashboards.

use anyhow::Context;
use pitch_model::{
    assumptions::{Assumptions, LoadedModel},
    projection::{ProjectionConfig, ProjectionEngine},
};
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Pitch Model v0.1.0");
    println!("==================\n");

    // Optional first argument: path to a spreadsheet CSV export. A missing
    // or unreadable export must not abort the run; the dashboard contract is
    // to fall back to defaults and keep rendering.
    let export_path = std::env::args().nth(1);
    let (assumptions, fixed_inputs) = match &export_path {
        Some(path) => match LoadedModel::load_from(Path::new(path)) {
            Ok(loaded) => {
                println!("Loaded model from {}\n", path);
                (loaded.assumptions, Some(loaded.fixed_inputs))
            }
            Err(err) => {
                log::warn!("could not load {}: {}; using built-in defaults", path, err);
                (Assumptions::default_pitch(), None)
            }
        },
        None => (Assumptions::default_pitch(), None),
    };

    let config = ProjectionConfig::default();
    let engine = ProjectionEngine::new(assumptions, config);
    let series = engine.project(fixed_inputs.as_ref());

    // Print yearly table
    println!(
        "{:>4} {:>11} {:>14} {:>14} {:>14} {:>14} {:>9} {:>15}",
        "Year", "MAU", "B2C Rev", "B2B Rev", "Total Rev", "EBITDA", "Margin%", "Valuation"
    );
    println!("{}", "-".repeat(101));
    for y in &series.yearly {
        println!(
            "{:>4} {:>11.0} {:>14.0} {:>14.0} {:>14.0} {:>14.0} {:>9.1} {:>15.0}",
            y.year,
            y.mau,
            y.revenue.total_b2c,
            y.revenue.total_b2b,
            y.revenue.total,
            y.profitability.ebitda,
            y.profitability.gross_margin_pct,
            y.valuation,
        );
    }

    // Year-4 KPI block (the dashboard's headline cards)
    if let Some(kpis) = series.kpis() {
        println!("\nYear {} KPIs:", kpis.year);
        println!("  Valuation:      £{:.0}", kpis.valuation);
        println!("  MAU:            {:.0}", kpis.mau);
        println!("  Total Revenue:  £{:.0}", kpis.total_revenue);
        println!("  B2B Revenue:    £{:.0}", kpis.b2b_revenue);
        println!("  B2C Revenue:    £{:.0}", kpis.b2c_revenue);
        println!("  EBITDA:         £{:.0}", kpis.ebitda);
        println!("  Gross Margin:   {:.1}%", kpis.gross_margin_pct);
    }

    let summary = series.summary();
    println!("\nFive-year totals:");
    println!("  Revenue:        £{:.0}", summary.total_revenue);
    println!("  COGS:           £{:.0}", summary.total_cogs);
    println!("  OpEx:           £{:.0}", summary.total_opex);
    println!("  EBITDA:         £{:.0}", summary.total_ebitda);
    println!("  Final MAU:      {:.0}", summary.final_mau);
    println!("  Final Valuation: £{:.0}", summary.final_valuation);

    // CSV export
    let csv_path = "projection_output.csv";
    let mut file = File::create(csv_path).context("unable to create CSV output")?;
    writeln!(
        file,
        "Year,MAU,PremiumSubs,AdRevenue,Affiliate,TotalB2C,SocialTier,BroadcastTier,BroadcastPlusTier,UsageFees,TotalB2B,TotalRevenue,TotalCOGS,TotalOpEx,GrossProfit,EBITDA,GrossMarginPct,Valuation"
    )?;
    for y in &series.yearly {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.4},{:.2}",
            y.year,
            y.mau,
            y.revenue.premium_subscriptions,
            y.revenue.ad_revenue,
            y.revenue.affiliate_revenue,
            y.revenue.total_b2c,
            y.revenue.social_tier,
            y.revenue.broadcast_tier,
            y.revenue.broadcast_plus_tier,
            y.revenue.usage_fees,
            y.revenue.total_b2b,
            y.revenue.total,
            y.costs.total_cogs,
            y.costs.total_opex,
            y.profitability.gross_profit,
            y.profitability.ebitda,
            y.profitability.gross_margin_pct,
            y.valuation,
        )?;
    }
    println!("\nFull results written to: {}", csv_path);

    // JSON export for chart consumers
    let json_path = "projection_output.json";
    let json_file = File::create(json_path).context("unable to create JSON output")?;
    serde_json::to_writer_pretty(json_file, &series).context("unable to serialize projections")?;
    println!("JSON results written to: {}", json_path);

    Ok(())
}
