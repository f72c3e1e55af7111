//! Customer generation.

use fake::{Fake, faker::name::en::Name};
use rand::Rng;
use serde::Serialize;
use time::Date;

use storefront::{Channel, CustomerId, Province};

use super::{GenerateError, pick, serialize_date};
use crate::config::{Calendar, DateWindow};

/// Generated customer row.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedCustomer {
    #[serde(rename = "customer_id")]
    pub id: CustomerId,
    pub name: String,
    #[serde(serialize_with = "serialize_date")]
    pub signup_date: Date,
    pub region: Province,
    pub acquisition_channel: Channel,
}

/// Configuration for customer generation.
#[derive(Debug, Clone)]
pub struct CustomerGenConfig {
    pub regions: Vec<Province>,
    pub channels: Vec<Channel>,
    pub signup_window: DateWindow,
}

impl Default for CustomerGenConfig {
    fn default() -> Self {
        Self {
            regions: Province::ALL.to_vec(),
            channels: Channel::ALL.to_vec(),
            signup_window: Calendar::YEAR_2025,
        }
    }
}

/// Generates customers.
pub struct CustomerGenerator {
    config: CustomerGenConfig,
}

impl CustomerGenerator {
    /// Creates a new customer generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: CustomerGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: CustomerGenConfig) -> Self {
        Self { config }
    }

    /// Generates the customer at zero-based position `index`.
    pub fn generate(
        &self,
        index: usize,
        rng: &mut impl Rng,
    ) -> Result<GeneratedCustomer, GenerateError> {
        let signup_date = self.config.signup_window.random_date(rng);
        let name: String = Name().fake_with_rng(rng);
        let region = *pick(&self.config.regions, "regions", rng)?;
        let acquisition_channel = *pick(&self.config.channels, "channels", rng)?;

        Ok(GeneratedCustomer {
            id: CustomerId::from_index(index),
            name,
            signup_date,
            region,
            acquisition_channel,
        })
    }

    /// Generates `count` customers with sequential ids.
    pub fn generate_batch(
        &self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<GeneratedCustomer>, GenerateError> {
        (0..count).map(|i| self.generate(i, rng)).collect()
    }
}

impl Default for CustomerGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_customer() {
        let customer_gen = CustomerGenerator::new();
        let mut rng = rand::thread_rng();
        let customer = customer_gen.generate(41, &mut rng).unwrap();

        assert_eq!(customer.id.to_string(), "C0042");
        assert!(!customer.name.is_empty());
        assert!(Calendar::YEAR_2025.contains(customer.signup_date));
    }

    #[test]
    fn test_generate_batch() {
        let customer_gen = CustomerGenerator::new();
        let mut rng = rand::thread_rng();
        let customers = customer_gen.generate_batch(1200, &mut rng).unwrap();

        assert_eq!(customers.len(), 1200);

        let ids: std::collections::HashSet<_> = customers.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 1200);

        // With 1200 draws every province shows up
        let regions: std::collections::HashSet<_> = customers.iter().map(|c| c.region).collect();
        assert_eq!(regions.len(), Province::ALL.len());
    }

    #[test]
    fn test_custom_signup_window() {
        let window = DateWindow::new(
            time::macros::date!(2025 - 02 - 01),
            time::macros::date!(2025 - 02 - 28),
        );
        let customer_gen = CustomerGenerator::with_config(CustomerGenConfig {
            signup_window: window,
            ..Default::default()
        });
        let mut rng = rand::thread_rng();

        for c in customer_gen.generate_batch(100, &mut rng).unwrap() {
            assert!(window.contains(c.signup_date));
        }
    }

    #[test]
    fn test_no_channels_is_an_error() {
        let customer_gen = CustomerGenerator::with_config(CustomerGenConfig {
            channels: Vec::new(),
            ..Default::default()
        });
        let mut rng = rand::thread_rng();

        assert!(matches!(
            customer_gen.generate(0, &mut rng),
            Err(GenerateError::EmptyReference("channels"))
        ));
    }
}
