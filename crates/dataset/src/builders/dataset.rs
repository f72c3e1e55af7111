//! Fluent builder for generating a complete dataset.

use std::ops::RangeInclusive;
use std::time::Instant;

use rand::Rng;
use thiserror::Error;
use tracing::info;

use crate::config::{ConfigError, DatasetConfig, DateWindow, return_count};
use crate::export::{ExportError, ExportSummary, Exporter};
use crate::generators::{
    GenerateError,
    campaign::{CampaignGenConfig, CampaignGenerator, GeneratedCampaign},
    customer::{CustomerGenConfig, CustomerGenerator, GeneratedCustomer},
    order::{GeneratedOrder, OrderGenConfig, OrderGenerator},
    product::{GeneratedProduct, ProductGenConfig, ProductGenerator},
    returns::{GeneratedReturn, ReturnGenConfig, ReturnGenerator},
};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Generation failed: {0}")]
    Generate(#[from] GenerateError),
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

/// All record sets produced by one run.
#[derive(Debug)]
pub struct DatasetResult {
    pub products: Vec<GeneratedProduct>,
    pub customers: Vec<GeneratedCustomer>,
    pub campaigns: Vec<GeneratedCampaign>,
    pub orders: Vec<GeneratedOrder>,
    pub returns: Vec<GeneratedReturn>,
    /// Metrics from generation (populated if metrics tracking enabled).
    pub metrics: Option<DatasetMetrics>,
}

impl DatasetResult {
    pub fn total_rows(&self) -> usize {
        self.products.len()
            + self.customers.len()
            + self.campaigns.len()
            + self.orders.len()
            + self.returns.len()
    }

    /// Orders credited to a campaign.
    pub fn attributed_orders(&self) -> usize {
        self.orders.iter().filter(|o| o.campaign_id.is_some()).count()
    }

    pub fn units_sold(&self) -> u64 {
        self.orders.iter().map(|o| u64::from(o.quantity)).sum()
    }

    pub fn gross_revenue(&self) -> f64 {
        self.orders.iter().map(GeneratedOrder::line_total).sum()
    }
}

/// Timing and volume metrics from dataset generation.
#[derive(Debug, Clone)]
pub struct DatasetMetrics {
    /// Time spent generating records (milliseconds).
    pub generation_time_ms: u64,
    /// Time spent writing files (milliseconds, 0 if build_data used).
    pub export_time_ms: u64,
    pub product_count: usize,
    pub customer_count: usize,
    pub campaign_count: usize,
    pub order_count: usize,
    pub return_count: usize,
    pub attributed_orders: usize,
    pub units_sold: u64,
    pub gross_revenue: f64,
}

/// Builder for generating a complete dataset.
///
/// # Example
///
/// ```rust,ignore
/// let mut rng = StdRng::seed_from_u64(42);
/// let (dataset, summary) = DatasetBuilder::new()
///     .with_orders(1000)
///     .with_return_rate(0.05)
///     .with_metrics(true)
///     .build(&Exporter::new("out/data"), &mut rng)?;
/// ```
pub struct DatasetBuilder {
    product_count: usize,
    customer_count: usize,
    campaign_count: usize,
    order_count: usize,

    product_config: ProductGenConfig,
    customer_config: CustomerGenConfig,
    campaign_config: CampaignGenConfig,
    order_config: OrderGenConfig,
    return_config: ReturnGenConfig,

    track_metrics: bool,
}

impl DatasetBuilder {
    /// Creates a builder with the standard Ubuntu Organics volumes.
    pub fn new() -> Self {
        Self::from_config(&DatasetConfig::default())
    }

    /// Creates a builder using the counts, window and return rate of `config`.
    pub fn from_config(config: &DatasetConfig) -> Self {
        Self {
            product_count: config.product_count,
            customer_count: config.customer_count,
            campaign_count: config.campaign_count,
            order_count: config.order_count,
            product_config: ProductGenConfig::default(),
            customer_config: CustomerGenConfig::default(),
            campaign_config: CampaignGenConfig::default(),
            order_config: OrderGenConfig::default(),
            return_config: ReturnGenConfig::default(),
            track_metrics: false,
        }
        .with_window(config.window)
        .with_return_rate(config.return_rate)
    }

    /// Sets the number of products to generate.
    pub fn with_products(mut self, count: usize) -> Self {
        self.product_count = count;
        self
    }

    /// Sets the number of customers to generate.
    pub fn with_customers(mut self, count: usize) -> Self {
        self.customer_count = count;
        self
    }

    /// Sets the number of campaigns to generate.
    pub fn with_campaigns(mut self, count: usize) -> Self {
        self.campaign_count = count;
        self
    }

    /// Sets the number of orders to generate.
    pub fn with_orders(mut self, count: usize) -> Self {
        self.order_count = count;
        self
    }

    /// Sets the fraction of orders that are returned.
    pub fn with_return_rate(mut self, rate: f64) -> Self {
        self.return_config.return_rate = rate;
        self
    }

    /// Sets the probability that an order is credited to a campaign.
    pub fn with_attribution_rate(mut self, rate: f64) -> Self {
        self.order_config.attribution_rate = rate;
        self
    }

    /// Sets the date window used by every generator.
    pub fn with_window(mut self, window: DateWindow) -> Self {
        self.product_config.launch_window = window;
        self.customer_config.signup_window = window;
        self.campaign_config.window = window;
        self.order_config.window = window;
        self
    }

    /// Sets the product generation configuration.
    pub fn with_product_config(mut self, config: ProductGenConfig) -> Self {
        self.product_config = config;
        self
    }

    /// Sets the customer generation configuration.
    pub fn with_customer_config(mut self, config: CustomerGenConfig) -> Self {
        self.customer_config = config;
        self
    }

    /// Sets the campaign generation configuration.
    pub fn with_campaign_config(mut self, config: CampaignGenConfig) -> Self {
        self.campaign_config = config;
        self
    }

    /// Sets the order generation configuration.
    pub fn with_order_config(mut self, config: OrderGenConfig) -> Self {
        self.order_config = config;
        self
    }

    /// Sets the return generation configuration.
    pub fn with_return_config(mut self, config: ReturnGenConfig) -> Self {
        self.return_config = config;
        self
    }

    /// Enables metrics tracking.
    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.track_metrics = enabled;
        self
    }

    /// Number of returns this builder will produce.
    pub fn return_count(&self) -> usize {
        return_count(self.order_count, self.return_config.return_rate)
    }

    /// Checks the configuration before anything is generated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for window in [
            self.product_config.launch_window,
            self.customer_config.signup_window,
            self.campaign_config.window,
            self.order_config.window,
        ] {
            if window.start > window.end {
                return Err(ConfigError::InvertedWindow {
                    start: window.start,
                    end: window.end,
                });
            }
        }

        let longest = *self.campaign_config.duration_days.end();
        if self.campaign_count > 0 && self.campaign_config.window.shrink_end(longest).is_none() {
            return Err(ConfigError::WindowTooShort {
                window_days: self.campaign_config.window.days(),
                required_days: longest,
            });
        }

        let returns = self.return_count();
        if returns > self.order_count {
            return Err(ConfigError::TooManyReturns {
                returns,
                orders: self.order_count,
            });
        }

        check_rate("return_rate", self.return_config.return_rate)?;
        check_rate("attribution_rate", self.order_config.attribution_rate)?;

        check_bounds("price_range", self.product_config.price_range)?;
        check_bounds("cost_ratio_range", self.product_config.cost_ratio_range)?;
        check_bounds("budget_range", self.campaign_config.budget_range)?;
        check_days("duration_days", &self.campaign_config.duration_days)?;
        check_days("delay_days", &self.return_config.delay_days)?;

        let quantity = &self.order_config.quantity_range;
        if quantity.is_empty() {
            return Err(ConfigError::InvertedRange {
                name: "quantity_range",
                min: f64::from(*quantity.start()),
                max: f64::from(*quantity.end()),
            });
        }
        if *quantity.start() == 0 {
            return Err(ConfigError::ZeroUnits("quantity_range"));
        }
        if self.return_config.max_units_returned == 0 {
            return Err(ConfigError::ZeroUnits("max_units_returned"));
        }

        if self.order_count > 0 {
            if self.product_count == 0 {
                return Err(ConfigError::MissingReferences {
                    orders: self.order_count,
                    missing: "products",
                });
            }
            if self.customer_count == 0 {
                return Err(ConfigError::MissingReferences {
                    orders: self.order_count,
                    missing: "customers",
                });
            }
        }

        Ok(())
    }

    /// Generates every record set in pipeline order without writing files.
    pub fn build_data(&self, rng: &mut impl Rng) -> Result<DatasetResult, DatasetError> {
        self.validate()?;

        let start_time = if self.track_metrics {
            Some(Instant::now())
        } else {
            None
        };

        let products = ProductGenerator::with_config(self.product_config.clone())
            .generate_batch(self.product_count, rng)?;
        info!("Generated {} products", products.len());

        let customers = CustomerGenerator::with_config(self.customer_config.clone())
            .generate_batch(self.customer_count, rng)?;
        info!("Generated {} customers", customers.len());

        let campaigns = CampaignGenerator::with_config(self.campaign_config.clone())
            .generate_batch(self.campaign_count, rng)?;
        info!("Generated {} campaigns", campaigns.len());

        let orders = OrderGenerator::with_config(self.order_config.clone()).generate_batch(
            self.order_count,
            &products,
            &customers,
            &campaigns,
            rng,
        )?;
        info!("Generated {} orders", orders.len());

        let returns =
            ReturnGenerator::with_config(self.return_config.clone()).generate_batch(&orders, rng)?;
        info!("Generated {} returns", returns.len());

        let mut result = DatasetResult {
            products,
            customers,
            campaigns,
            orders,
            returns,
            metrics: None,
        };

        result.metrics = start_time.map(|start| DatasetMetrics {
            generation_time_ms: start.elapsed().as_millis() as u64,
            export_time_ms: 0, // Set by build() once files are written
            product_count: result.products.len(),
            customer_count: result.customers.len(),
            campaign_count: result.campaigns.len(),
            order_count: result.orders.len(),
            return_count: result.returns.len(),
            attributed_orders: result.attributed_orders(),
            units_sold: result.units_sold(),
            gross_revenue: result.gross_revenue(),
        });

        Ok(result)
    }

    /// Generates the dataset and writes it through `exporter`.
    pub fn build(
        &self,
        exporter: &Exporter,
        rng: &mut impl Rng,
    ) -> Result<(DatasetResult, ExportSummary), DatasetError> {
        let mut result = self.build_data(rng)?;

        let export_start = Instant::now();
        let summary = exporter.export(&result)?;

        if let Some(metrics) = result.metrics.as_mut() {
            metrics.export_time_ms = export_start.elapsed().as_millis() as u64;
        }

        Ok((result, summary))
    }

    // ========================================================================
    // Preset Scenarios
    // ========================================================================

    /// The full Ubuntu Organics dataset: 30 products, 1200 customers,
    /// 8 campaigns, 8500 orders and a 3% return rate over 2025.
    pub fn ubuntu_organics() -> Self {
        Self::new().with_metrics(true)
    }

    /// A small dataset for quick checks.
    pub fn smoke_test() -> Self {
        Self::new()
            .with_products(10)
            .with_customers(50)
            .with_campaigns(3)
            .with_orders(200)
            .with_metrics(true)
    }
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}

fn check_bounds(name: &'static str, (min, max): (f64, f64)) -> Result<(), ConfigError> {
    if !(min.is_finite() && max.is_finite() && min >= 0.0) {
        return Err(ConfigError::InvalidBounds { name, min, max });
    }
    // Written so NaN bounds fail too
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange { name, min, max })
    }
}

fn check_days(name: &'static str, days: &RangeInclusive<i64>) -> Result<(), ConfigError> {
    if days.is_empty() || *days.start() < 0 {
        Err(ConfigError::InvertedRange {
            name,
            min: *days.start() as f64,
            max: *days.end() as f64,
        })
    } else {
        Ok(())
    }
}
