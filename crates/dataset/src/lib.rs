//! Synthetic dataset generation for Ubuntu Organics.
//!
//! This crate generates a fake e-commerce dataset (products, customers,
//! marketing campaigns, orders and returns) with consistent foreign keys, and
//! exports it as CSV files bundled into a zip archive.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dataset::prelude::*;
//! use rand::SeedableRng;
//!
//! let config = DatasetConfig::default();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(config.seed);
//!
//! let (dataset, summary) = DatasetBuilder::from_config(&config)
//!     .with_metrics(true)
//!     .build(&Exporter::from_config(&config), &mut rng)?;
//! ```

pub mod builders;
pub mod config;
pub mod export;
pub mod generators;

pub use storefront::{
    CampaignId, Category, Channel, CustomerId, OrderId, ProductId, Province, ReturnId,
    ReturnReason,
};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{DatasetBuilder, DatasetError, DatasetMetrics, DatasetResult};
    pub use crate::config::{Calendar, ConfigError, DatasetConfig, DateWindow};
    pub use crate::export::{ExportError, ExportSummary, Exporter, Table};
    pub use crate::generators::{
        CampaignGenerator, CustomerGenerator, GenerateError, OrderGenerator, ProductGenerator,
        ReturnGenerator,
    };
    pub use crate::{Category, Channel, Province, ReturnReason};
}
