//! Offline analysis workflow for the Foster Income Survey.
//!
//! Fetches every stored submission, processes it into the derived table,
//! prints summary statistics, and exports the table to CSV.
//!
//! Usage: cargo run --bin exporter [output.csv]

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use foster_core::export::CsvExporter;
use foster_core::processing::SurveyProcessor;
use foster_core::reports::ReportService;
use foster_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "foster=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let db = foster_db::connect(&config.database)
        .await
        .context("Failed to connect to record store")?;
    info!("Connected to record store");

    let repo = foster_db::SurveyRepository::new(db);
    let raw = repo
        .find_all()
        .await
        .context("Failed to retrieve survey responses")?;
    info!(responses = raw.len(), "Retrieved survey responses");

    let processed = SurveyProcessor::process(&raw);

    match ReportService::summarize(&processed) {
        Some(stats) => {
            println!("Survey summary");
            println!("==============");
            println!("Total respondents:  {}", stats.total_respondents);
            println!(
                "Age:                mean {} (range {} - {})",
                stats.average_age.round_dp(1),
                stats.age_range.min,
                stats.age_range.max
            );
            println!(
                "Income:             mean {} (range {} - {})",
                stats.average_income.round_dp(2),
                stats.income_range.min,
                stats.income_range.max
            );
            println!(
                "Expenses:           mean {}",
                stats.average_total_expenses.round_dp(2)
            );
            println!(
                "Savings:            mean {}",
                stats.average_savings.round_dp(2)
            );
            let categories = &stats.expense_categories_avg;
            println!("Expense category means:");
            println!("  - utilities:     {}", categories.utilities.round_dp(2));
            println!("  - entertainment: {}", categories.entertainment.round_dp(2));
            println!("  - school_fees:   {}", categories.school_fees.round_dp(2));
            println!("  - shopping:      {}", categories.shopping.round_dp(2));
            println!("  - healthcare:    {}", categories.healthcare.round_dp(2));
            println!("Gender distribution:");
            for (gender, count) in &stats.gender_distribution {
                println!("  - {gender}: {count}");
            }
        }
        None => println!("No valid survey responses to summarize."),
    }

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| CsvExporter::default_filename(chrono::Utc::now()));
    let path = CsvExporter::export(&processed, std::path::Path::new(&output))
        .context("Failed to export CSV")?;
    println!("Exported {} records to {}", processed.len(), path.display());

    Ok(())
}
