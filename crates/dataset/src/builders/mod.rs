//! Fluent builder API for datasets.
//!
//! The [`DatasetBuilder`] runs the generation pipeline in order (products,
//! customers, campaigns, orders, returns) and optionally exports the result.

mod dataset;

pub use dataset::{DatasetBuilder, DatasetError, DatasetMetrics, DatasetResult};
