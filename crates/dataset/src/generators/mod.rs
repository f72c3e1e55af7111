//! Entity generators for the dataset.
//!
//! Each stage of the pipeline has its own generator:
//! - [`ProductGenerator`]: Catalogue items with prices and launch dates
//! - [`CustomerGenerator`]: Customers with region and acquisition channel
//! - [`CampaignGenerator`]: Marketing campaigns with a bounded run
//! - [`OrderGenerator`]: Orders linking customers, products and campaigns
//! - [`ReturnGenerator`]: Returns sampled from distinct orders

pub mod campaign;
pub mod customer;
pub mod order;
pub mod product;
pub mod returns;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serializer;
use thiserror::Error;
use time::Date;

pub use campaign::{CampaignGenConfig, CampaignGenerator, GeneratedCampaign};
pub use customer::{CustomerGenConfig, CustomerGenerator, GeneratedCustomer};
pub use order::{GeneratedOrder, OrderGenConfig, OrderGenerator};
pub use product::{GeneratedProduct, ProductGenConfig, ProductGenerator};
pub use returns::{GeneratedReturn, ReturnGenConfig, ReturnGenerator};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("No {0} available to choose from")]
    EmptyReference(&'static str),
    #[error("Cannot sample {returns} returns from {orders} orders")]
    ReturnCountExceedsOrders { returns: usize, orders: usize },
    #[error("Date window is too short for a {0}-day campaign")]
    WindowTooShort(i64),
}

/// Picks one element uniformly, failing if the list is empty.
pub(crate) fn pick<'a, T>(
    items: &'a [T],
    what: &'static str,
    rng: &mut impl Rng,
) -> Result<&'a T, GenerateError> {
    items.choose(rng).ok_or(GenerateError::EmptyReference(what))
}

/// Rounds a currency amount to whole cents.
pub(crate) fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Writes dates as `YYYY-MM-DD`.
pub(crate) fn serialize_date<S: Serializer>(
    date: &Date,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(date)
}
