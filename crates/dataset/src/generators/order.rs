//! Order generation with campaign attribution.

use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use time::Date;

use storefront::{CampaignId, CustomerId, OrderId, ProductId};

use super::{
    GenerateError, GeneratedCampaign, GeneratedCustomer, GeneratedProduct, pick, serialize_date,
};
use crate::config::{Calendar, DateWindow};

/// Generated order row.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedOrder {
    #[serde(rename = "order_id")]
    pub id: OrderId,
    #[serde(serialize_with = "serialize_date")]
    pub order_date: Date,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub quantity: u32,
    /// Product selling price at the time of the order.
    pub unit_price: f64,
    pub campaign_id: Option<CampaignId>,
}

impl GeneratedOrder {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Configuration for order generation.
#[derive(Debug, Clone)]
pub struct OrderGenConfig {
    pub window: DateWindow,
    pub quantity_range: RangeInclusive<u32>,
    /// Probability that an order is credited to a campaign.
    pub attribution_rate: f64,
}

impl Default for OrderGenConfig {
    fn default() -> Self {
        Self {
            window: Calendar::YEAR_2025,
            quantity_range: 1..=5,
            attribution_rate: 0.6,
        }
    }
}

/// Generates orders against previously generated products, customers and campaigns.
pub struct OrderGenerator {
    config: OrderGenConfig,
}

impl OrderGenerator {
    /// Creates a new order generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: OrderGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: OrderGenConfig) -> Self {
        Self { config }
    }

    /// Generates the order at zero-based position `index`.
    ///
    /// Orders are attributed to a uniformly chosen campaign with the configured
    /// probability. With no campaigns, orders are never attributed and no
    /// attribution draw is made.
    pub fn generate(
        &self,
        index: usize,
        products: &[GeneratedProduct],
        customers: &[GeneratedCustomer],
        campaigns: &[GeneratedCampaign],
        rng: &mut impl Rng,
    ) -> Result<GeneratedOrder, GenerateError> {
        let order_date = self.config.window.random_date(rng);
        let product = pick(products, "products", rng)?;
        let customer = pick(customers, "customers", rng)?;
        let quantity = rng.gen_range(self.config.quantity_range.clone());

        let campaign_id = if !campaigns.is_empty()
            && rng.r#gen::<f64>() < self.config.attribution_rate
        {
            campaigns.choose(rng).map(|c| c.id)
        } else {
            None
        };

        Ok(GeneratedOrder {
            id: OrderId::from_index(index),
            order_date,
            customer_id: customer.id,
            product_id: product.id,
            quantity,
            unit_price: product.selling_price,
            campaign_id,
        })
    }

    /// Generates `count` orders with sequential ids.
    pub fn generate_batch(
        &self,
        count: usize,
        products: &[GeneratedProduct],
        customers: &[GeneratedCustomer],
        campaigns: &[GeneratedCampaign],
        rng: &mut impl Rng,
    ) -> Result<Vec<GeneratedOrder>, GenerateError> {
        (0..count)
            .map(|i| self.generate(i, products, customers, campaigns, rng))
            .collect()
    }
}

impl Default for OrderGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{CampaignGenerator, CustomerGenerator, ProductGenerator};
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    fn references(
        rng: &mut impl Rng,
    ) -> (
        Vec<GeneratedProduct>,
        Vec<GeneratedCustomer>,
        Vec<GeneratedCampaign>,
    ) {
        (
            ProductGenerator::new().generate_batch(30, rng).unwrap(),
            CustomerGenerator::new().generate_batch(100, rng).unwrap(),
            CampaignGenerator::new().generate_batch(8, rng).unwrap(),
        )
    }

    #[test]
    fn test_foreign_keys_resolve() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(12345);
        let (products, customers, campaigns) = references(&mut rng);

        let orders = OrderGenerator::new()
            .generate_batch(2000, &products, &customers, &campaigns, &mut rng)
            .unwrap();
        assert_eq!(orders.len(), 2000);

        let prices: HashMap<_, _> = products.iter().map(|p| (p.id, p.selling_price)).collect();
        let customer_ids: HashSet<_> = customers.iter().map(|c| c.id).collect();
        let campaign_ids: HashSet<_> = campaigns.iter().map(|c| c.id).collect();

        for order in &orders {
            assert_eq!(prices.get(&order.product_id), Some(&order.unit_price));
            assert!(customer_ids.contains(&order.customer_id));
            if let Some(campaign_id) = order.campaign_id {
                assert!(campaign_ids.contains(&campaign_id));
            }
            assert!((1..=5).contains(&order.quantity));
            assert!(Calendar::YEAR_2025.contains(order.order_date));
        }
    }

    #[test]
    fn test_attribution_rate() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(12345);
        let (products, customers, campaigns) = references(&mut rng);

        let orders = OrderGenerator::new()
            .generate_batch(5000, &products, &customers, &campaigns, &mut rng)
            .unwrap();

        let attributed = orders.iter().filter(|o| o.campaign_id.is_some()).count();
        let ratio = attributed as f64 / orders.len() as f64;
        assert!(
            ratio > 0.55 && ratio < 0.65,
            "Attribution ratio {ratio} should be around 0.6"
        );
    }

    #[test]
    fn test_no_campaigns_means_no_attribution() {
        let mut rng = rand::thread_rng();
        let (products, customers, _) = references(&mut rng);

        let orders = OrderGenerator::with_config(OrderGenConfig {
            attribution_rate: 1.0,
            ..Default::default()
        })
        .generate_batch(100, &products, &customers, &[], &mut rng)
        .unwrap();

        assert!(orders.iter().all(|o| o.campaign_id.is_none()));
    }

    #[test]
    fn test_no_campaigns_skips_attribution_draw() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(5);
        let (products, customers, _) = references(&mut rng);
        let config = OrderGenConfig::default();

        let mut generated = rand::rngs::StdRng::seed_from_u64(77);
        OrderGenerator::with_config(config.clone())
            .generate(0, &products, &customers, &[], &mut generated)
            .unwrap();

        // Same draws as the order fields, with nothing left over for attribution
        let mut expected = rand::rngs::StdRng::seed_from_u64(77);
        let _ = config.window.random_date(&mut expected);
        let _ = products.choose(&mut expected);
        let _ = customers.choose(&mut expected);
        let _: u32 = expected.gen_range(config.quantity_range.clone());

        assert_eq!(generated.r#gen::<u64>(), expected.r#gen::<u64>());
    }

    #[test]
    fn test_missing_products() {
        let mut rng = rand::thread_rng();
        let (_, customers, campaigns) = references(&mut rng);

        let result = OrderGenerator::new().generate_batch(1, &[], &customers, &campaigns, &mut rng);
        assert!(matches!(
            result,
            Err(GenerateError::EmptyReference("products"))
        ));
    }

    #[test]
    fn test_line_total() {
        let mut rng = rand::thread_rng();
        let (products, customers, campaigns) = references(&mut rng);
        let order = OrderGenerator::with_config(OrderGenConfig {
            quantity_range: 3..=3,
            ..Default::default()
        })
        .generate(0, &products, &customers, &campaigns, &mut rng)
        .unwrap();

        assert_eq!(order.quantity, 3);
        assert_eq!(order.line_total(), order.unit_price * 3.0);
    }
}
