//! Example: Generate the dataset in memory and report on campaign performance.
//!
//! Nothing is written to disk. For each campaign this prints the orders it was
//! credited with, how many of those fell inside the campaign run, the revenue
//! from them, and the return-on-budget.
//!
//! Run with:
//! ```
//! cargo run --example campaign_report
//! ```

use std::collections::HashMap;

use dataset::builders::DatasetBuilder;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut rng = rand::rngs::StdRng::seed_from_u64(54321);
    let result = DatasetBuilder::ubuntu_organics().build_data(&mut rng)?;

    let campaigns: HashMap<_, _> = result.campaigns.iter().map(|c| (c.id, c)).collect();

    // campaign_id -> (orders, orders during the run, revenue)
    let mut revenue_by_campaign: HashMap<_, (usize, usize, f64)> = HashMap::new();
    for order in &result.orders {
        if let Some(campaign_id) = order.campaign_id {
            let entry = revenue_by_campaign.entry(campaign_id).or_default();
            entry.0 += 1;
            if campaigns[&campaign_id].is_running_on(order.order_date) {
                entry.1 += 1;
            }
            entry.2 += order.line_total();
        }
    }

    tracing::info!("Campaign report:");
    for campaign in &result.campaigns {
        let (orders, in_window, revenue) = revenue_by_campaign
            .get(&campaign.id)
            .copied()
            .unwrap_or_default();
        tracing::info!(
            "  {} {:<40} {:<10} {} -> {}  orders: {:>4} ({:>3} during run)  revenue: R{:>11.2}  ROI: {:.1}x",
            campaign.id,
            campaign.name,
            campaign.channel,
            campaign.start_date,
            campaign.end_date,
            orders,
            in_window,
            revenue,
            revenue / campaign.budget
        );
    }

    let unattributed = result.orders.len() - result.attributed_orders();
    tracing::info!("  Unattributed orders: {}", unattributed);

    // Return rate per category
    let categories: HashMap<_, _> = result.products.iter().map(|p| (p.id, p.category)).collect();
    let mut returns_by_category: HashMap<_, usize> = HashMap::new();
    for r in &result.returns {
        *returns_by_category.entry(categories[&r.product_id]).or_default() += 1;
    }

    tracing::info!("Returns by category:");
    for (category, count) in &returns_by_category {
        tracing::info!("  {:<14} {}", category.as_str(), count);
    }

    Ok(())
}
