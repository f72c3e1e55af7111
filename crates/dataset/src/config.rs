//! Configuration types for dataset generation.

use std::path::PathBuf;

use thiserror::Error;
use time::macros::date;
use time::{Date, Duration};

pub const SEED_ENV: &str = "DATASET_SEED";
pub const OUTPUT_DIR_ENV: &str = "DATASET_OUTPUT_DIR";
pub const ARCHIVE_ENV: &str = "DATASET_ARCHIVE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Date window starts on {start} but ends on {end}")]
    InvertedWindow { start: Date, end: Date },
    #[error("Date window of {window_days} days cannot hold a {required_days}-day campaign")]
    WindowTooShort { window_days: i64, required_days: i64 },
    #[error("{name} must be between 0 and 1, got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
    #[error("Invalid range for {name}: {min} > {max}")]
    InvertedRange { name: &'static str, min: f64, max: f64 },
    #[error("{name} must be finite and non-negative, got {min}..={max}")]
    InvalidBounds { name: &'static str, min: f64, max: f64 },
    #[error("{0} must allow at least one unit")]
    ZeroUnits(&'static str),
    #[error("Return count {returns} exceeds order count {orders}")]
    TooManyReturns { returns: usize, orders: usize },
    #[error("Cannot generate {orders} orders without any {missing}")]
    MissingReferences { orders: usize, missing: &'static str },
    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },
}

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Date,
    pub end: Date,
}

impl DateWindow {
    pub const fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Number of calendar days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end - self.start).whole_days() + 1
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns a uniformly chosen date within the window.
    pub fn random_date(&self, rng: &mut impl rand::Rng) -> Date {
        let span = (self.end - self.start).whole_days().max(0);
        self.start + Duration::days(rng.gen_range(0..=span))
    }

    /// Returns the window with `days` removed from its end, or `None` if
    /// nothing would be left.
    pub fn shrink_end(&self, days: i64) -> Option<DateWindow> {
        let end = self.end - Duration::days(days);
        (end >= self.start).then_some(DateWindow::new(self.start, end))
    }
}

/// Pre-defined date windows.
#[derive(Debug, Clone, Copy)]
pub struct Calendar;

impl Calendar {
    /// Trading year 2025.
    pub const YEAR_2025: DateWindow = DateWindow::new(date!(2025 - 01 - 01), date!(2025 - 12 - 31));
}

/// Top-level settings for a generation run.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub product_count: usize,
    pub customer_count: usize,
    pub campaign_count: usize,
    pub order_count: usize,
    /// Fraction of orders that come back.
    pub return_rate: f64,
    pub window: DateWindow,
    pub seed: u64,
    /// Directory the CSV files are written to.
    pub output_dir: PathBuf,
    pub archive_path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            product_count: 30,
            customer_count: 1200,
            campaign_count: 8,
            order_count: 8500,
            return_rate: 0.03,
            window: Calendar::YEAR_2025,
            seed: 42,
            output_dir: PathBuf::from("ubuntu_organics_data"),
            archive_path: PathBuf::from("ubuntu_organics_dataset.zip"),
        }
    }
}

impl DatasetConfig {
    /// Loads the defaults, overriding the seed and output locations from the
    /// environment when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_ENV) {
            config.seed = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: SEED_ENV,
                value: raw.clone(),
            })?;
        }
        if let Some(dir) = lookup(OUTPUT_DIR_ENV).filter(|v| !v.is_empty()) {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(archive) = lookup(ARCHIVE_ENV).filter(|v| !v.is_empty()) {
            config.archive_path = PathBuf::from(archive);
        }

        Ok(config)
    }

    pub fn return_count(&self) -> usize {
        return_count(self.order_count, self.return_rate)
    }
}

/// Number of returns for `order_count` orders: `floor(order_count * rate)`.
pub fn return_count(order_count: usize, rate: f64) -> usize {
    (order_count as f64 * rate).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_year_window() {
        let window = Calendar::YEAR_2025;
        assert_eq!(window.days(), 365);
        assert!(window.contains(date!(2025 - 06 - 15)));
        assert!(!window.contains(date!(2026 - 01 - 01)));
        assert!(!window.contains(date!(2024 - 12 - 31)));
    }

    #[test]
    fn test_random_date_stays_in_window() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let window = DateWindow::new(date!(2025 - 03 - 01), date!(2025 - 03 - 03));

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let d = window.random_date(&mut rng);
            assert!(window.contains(d));
            seen.insert(d);
        }
        // Both ends are reachable
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_single_day_window() {
        let mut rng = rand::thread_rng();
        let day = date!(2025 - 05 - 05);
        let window = DateWindow::new(day, day);
        assert_eq!(window.days(), 1);
        assert_eq!(window.random_date(&mut rng), day);
    }

    #[test]
    fn test_shrink_end() {
        let shrunk = Calendar::YEAR_2025.shrink_end(30).unwrap();
        assert_eq!(shrunk.end, date!(2025 - 12 - 01));
        assert_eq!(shrunk.start, Calendar::YEAR_2025.start);

        let short = DateWindow::new(date!(2025 - 01 - 01), date!(2025 - 01 - 10));
        assert!(short.shrink_end(10).is_none());
        assert!(short.shrink_end(9).is_some());
    }

    #[test]
    fn test_default_return_count() {
        let config = DatasetConfig::default();
        assert_eq!(config.return_count(), 255);
        assert_eq!(return_count(99, 0.03), 2);
        assert_eq!(return_count(0, 0.03), 0);
    }

    #[test]
    fn test_env_overrides() {
        let config = DatasetConfig::from_lookup(|var| match var {
            SEED_ENV => Some("1234".to_string()),
            OUTPUT_DIR_ENV => Some("/tmp/organics".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.seed, 1234);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/organics"));
        assert_eq!(
            config.archive_path,
            PathBuf::from("ubuntu_organics_dataset.zip")
        );
        assert_eq!(config.order_count, 8500);
    }

    #[test]
    fn test_invalid_seed_rejected() {
        let err = DatasetConfig::from_lookup(|var| {
            (var == SEED_ENV).then(|| "-5".to_string())
        })
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidEnv { var: SEED_ENV, .. }));
    }
}
