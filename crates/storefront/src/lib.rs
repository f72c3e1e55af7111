//! Domain vocabulary for the Ubuntu Organics store.
//!
//! Reference data (provinces, marketing channels, product categories, return
//! reasons) and the sequential identifiers used to link records together.

pub mod ids;
pub mod models;

pub use ids::{CampaignId, CustomerId, OrderId, ParseIdError, ProductId, ReturnId};
pub use models::{Category, Channel, Province, ReturnReason};
