//! Product catalogue generation.

use fake::{Fake, faker::company::en::CatchPhrase};
use rand::Rng;
use serde::Serialize;
use time::Date;

use storefront::{Category, ProductId};

use super::{GenerateError, pick, round_cents, serialize_date};
use crate::config::{Calendar, DateWindow};

/// Generated product row.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedProduct {
    #[serde(rename = "product_id")]
    pub id: ProductId,
    #[serde(rename = "product_name")]
    pub name: String,
    pub category: Category,
    pub selling_price: f64,
    #[serde(rename = "product_cost")]
    pub cost: f64,
    #[serde(serialize_with = "serialize_date")]
    pub launch_date: Date,
}

/// Configuration for product generation.
#[derive(Debug, Clone)]
pub struct ProductGenConfig {
    pub categories: Vec<Category>,
    /// Selling price bounds in ZAR.
    pub price_range: (f64, f64),
    /// Cost as a fraction of the selling price.
    pub cost_ratio_range: (f64, f64),
    pub launch_window: DateWindow,
}

impl Default for ProductGenConfig {
    fn default() -> Self {
        Self {
            categories: Category::ALL.to_vec(),
            price_range: (100.0, 2000.0),
            cost_ratio_range: (0.5, 0.7),
            launch_window: Calendar::YEAR_2025,
        }
    }
}

/// Generates catalogue products.
pub struct ProductGenerator {
    config: ProductGenConfig,
}

impl ProductGenerator {
    /// Creates a new product generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: ProductGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: ProductGenConfig) -> Self {
        Self { config }
    }

    /// Generates the product at zero-based position `index`.
    pub fn generate(
        &self,
        index: usize,
        rng: &mut impl Rng,
    ) -> Result<GeneratedProduct, GenerateError> {
        let category = *pick(&self.config.categories, "categories", rng)?;

        let (min_price, max_price) = self.config.price_range;
        let selling_price = round_cents(rng.gen_range(min_price..=max_price));

        let (min_ratio, max_ratio) = self.config.cost_ratio_range;
        let cost = round_cents(selling_price * rng.gen_range(min_ratio..=max_ratio));

        let launch_date = self.config.launch_window.random_date(rng);

        Ok(GeneratedProduct {
            id: ProductId::from_index(index),
            name: CatchPhrase().fake_with_rng(rng),
            category,
            selling_price,
            cost,
            launch_date,
        })
    }

    /// Generates `count` products with sequential ids.
    pub fn generate_batch(
        &self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<GeneratedProduct>, GenerateError> {
        (0..count).map(|i| self.generate(i, rng)).collect()
    }
}

impl Default for ProductGenerator {
    fn default() -> Self {
        Self::new()
    }
}
