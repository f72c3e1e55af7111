//! Return generation, sampled from distinct orders.

use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use time::{Date, Duration};

use storefront::{OrderId, ProductId, ReturnId, ReturnReason};

use super::{GenerateError, GeneratedOrder, pick, serialize_date};
use crate::config::return_count;

/// Generated return row.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedReturn {
    #[serde(rename = "return_id")]
    pub id: ReturnId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    #[serde(serialize_with = "serialize_date")]
    pub return_date: Date,
    pub quantity_returned: u32,
    pub reason: ReturnReason,
}

/// Configuration for return generation.
#[derive(Debug, Clone)]
pub struct ReturnGenConfig {
    /// Fraction of orders that are returned.
    pub return_rate: f64,
    /// Days between the order and its return.
    pub delay_days: RangeInclusive<i64>,
    /// Upper bound on units sent back, further capped by the order quantity.
    /// Must be at least 1.
    pub max_units_returned: u32,
    pub reasons: Vec<ReturnReason>,
}

impl Default for ReturnGenConfig {
    fn default() -> Self {
        Self {
            return_rate: 0.03,
            delay_days: 1..=14,
            max_units_returned: 2,
            reasons: ReturnReason::ALL.to_vec(),
        }
    }
}

/// Generates returns for a sample of orders.
pub struct ReturnGenerator {
    config: ReturnGenConfig,
}

impl ReturnGenerator {
    /// Creates a new return generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: ReturnGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: ReturnGenConfig) -> Self {
        Self { config }
    }

    /// Number of returns produced for `order_count` orders.
    pub fn count_for(&self, order_count: usize) -> usize {
        return_count(order_count, self.config.return_rate)
    }

    /// Generates a return for `order`, numbered at zero-based position `index`.
    pub fn generate(
        &self,
        index: usize,
        order: &GeneratedOrder,
        rng: &mut impl Rng,
    ) -> Result<GeneratedReturn, GenerateError> {
        let delay = rng.gen_range(self.config.delay_days.clone());
        let return_date = order.order_date + Duration::days(delay);
        let requested = rng.gen_range(1..=self.config.max_units_returned);
        let reason = *pick(&self.config.reasons, "return reasons", rng)?;

        Ok(GeneratedReturn {
            id: ReturnId::from_index(index),
            order_id: order.id,
            product_id: order.product_id,
            return_date,
            quantity_returned: requested.min(order.quantity),
            reason,
        })
    }

    /// Samples `floor(orders * return_rate)` distinct orders and generates a
    /// return for each.
    pub fn generate_batch(
        &self,
        orders: &[GeneratedOrder],
        rng: &mut impl Rng,
    ) -> Result<Vec<GeneratedReturn>, GenerateError> {
        let count = self.count_for(orders.len());
        if count > orders.len() {
            return Err(GenerateError::ReturnCountExceedsOrders {
                returns: count,
                orders: orders.len(),
            });
        }

        let sampled: Vec<&GeneratedOrder> = orders.choose_multiple(rng, count).collect();

        sampled
            .into_iter()
            .enumerate()
            .map(|(i, order)| self.generate(i, order, rng))
            .collect()
    }
}

impl Default for ReturnGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};
    use time::macros::date;

    fn orders(count: usize, rng: &mut impl Rng) -> Vec<GeneratedOrder> {
        (0..count)
            .map(|i| GeneratedOrder {
                id: OrderId::from_index(i),
                order_date: date!(2025 - 12 - 31) - Duration::days(rng.gen_range(0..365)),
                customer_id: storefront::CustomerId::new(1),
                product_id: ProductId::from_index(i % 30),
                quantity: rng.gen_range(1..=5),
                unit_price: 250.0,
                campaign_id: None,
            })
            .collect()
    }

    #[test]
    fn test_return_count_and_uniqueness() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(12345);
        let orders = orders(8500, &mut rng);
        let returns = ReturnGenerator::new().generate_batch(&orders, &mut rng).unwrap();

        assert_eq!(returns.len(), 255);

        let order_ids: HashSet<_> = returns.iter().map(|r| r.order_id).collect();
        assert_eq!(order_ids.len(), returns.len(), "Each order returned at most once");

        assert_eq!(returns[0].id.to_string(), "R0001");
        assert_eq!(returns[254].id.to_string(), "R0255");
    }

    #[test]
    fn test_returns_match_their_orders() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(99);
        let orders = orders(1000, &mut rng);
        let by_id: HashMap<_, _> = orders.iter().map(|o| (o.id, o)).collect();

        let returns = ReturnGenerator::new().generate_batch(&orders, &mut rng).unwrap();
        assert_eq!(returns.len(), 30);

        for r in &returns {
            let order = by_id[&r.order_id];
            assert_eq!(r.product_id, order.product_id);
            assert!(r.quantity_returned >= 1);
            assert!(r.quantity_returned <= order.quantity.min(2));

            let delay = (r.return_date - order.order_date).whole_days();
            assert!((1..=14).contains(&delay));
        }
    }

    #[test]
    fn test_single_unit_orders_return_one_unit() {
        let mut rng = rand::thread_rng();
        let mut orders = orders(200, &mut rng);
        for o in &mut orders {
            o.quantity = 1;
        }

        let returns = ReturnGenerator::with_config(ReturnGenConfig {
            return_rate: 0.5,
            ..Default::default()
        })
        .generate_batch(&orders, &mut rng)
        .unwrap();

        assert_eq!(returns.len(), 100);
        assert!(returns.iter().all(|r| r.quantity_returned == 1));
    }

    #[test]
    fn test_rate_above_one_is_rejected() {
        let mut rng = rand::thread_rng();
        let orders = orders(10, &mut rng);

        let result = ReturnGenerator::with_config(ReturnGenConfig {
            return_rate: 1.5,
            ..Default::default()
        })
        .generate_batch(&orders, &mut rng);

        assert!(matches!(
            result,
            Err(GenerateError::ReturnCountExceedsOrders {
                returns: 15,
                orders: 10
            })
        ));
    }

    #[test]
    fn test_no_orders_no_returns() {
        let mut rng = rand::thread_rng();
        let returns = ReturnGenerator::new().generate_batch(&[], &mut rng).unwrap();
        assert!(returns.is_empty());
    }
}
