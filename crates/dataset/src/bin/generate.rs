//! Generates the Ubuntu Organics dataset and bundles it as a zip archive.
//!
//! Run with:
//! ```
//! cargo run -p dataset --bin generate
//! ```
//!
//! `DATASET_SEED`, `DATASET_OUTPUT_DIR` and `DATASET_ARCHIVE` override the
//! seed and output locations.

use dataset::builders::DatasetBuilder;
use dataset::config::DatasetConfig;
use dataset::export::Exporter;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DatasetConfig::from_env()?;
    tracing::info!("Generating dataset with seed {}", config.seed);

    let mut rng = rand::rngs::StdRng::seed_from_u64(config.seed);
    let exporter = Exporter::from_config(&config);

    let (result, summary) = DatasetBuilder::from_config(&config)
        .with_metrics(true)
        .build(&exporter, &mut rng)?;

    // Summary output
    tracing::info!("Generation completed!");
    for table in &summary.tables {
        tracing::info!("  {}: {} rows", table.file_name, table.rows);
    }

    if let Some(metrics) = &result.metrics {
        let attribution = metrics.attributed_orders as f64 / metrics.order_count.max(1) as f64;
        tracing::info!("  Campaign attribution: {:.1}%", attribution * 100.0);
        tracing::info!("  Units sold: {}", metrics.units_sold);
        tracing::info!("  Gross revenue: R{:.2}", metrics.gross_revenue);
        tracing::info!(
            "  Took {}ms to generate, {}ms to export",
            metrics.generation_time_ms,
            metrics.export_time_ms
        );
    }

    tracing::info!(
        "Dataset generated and saved as '{}'",
        summary.archive_path.display()
    );

    Ok(())
}
