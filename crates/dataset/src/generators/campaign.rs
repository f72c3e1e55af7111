//! Marketing campaign generation.

use std::ops::RangeInclusive;

use fake::{Fake, faker::company::en::Bs};
use rand::Rng;
use serde::Serialize;
use time::{Date, Duration};

use storefront::{CampaignId, Channel};

use super::{GenerateError, pick, round_cents, serialize_date};
use crate::config::{Calendar, DateWindow};

/// Generated campaign row.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedCampaign {
    #[serde(rename = "campaign_id")]
    pub id: CampaignId,
    #[serde(rename = "campaign_name")]
    pub name: String,
    #[serde(serialize_with = "serialize_date")]
    pub start_date: Date,
    #[serde(serialize_with = "serialize_date")]
    pub end_date: Date,
    pub channel: Channel,
    pub budget: f64,
}

impl GeneratedCampaign {
    /// Whether `date` falls inside the campaign run, both ends included.
    pub fn is_running_on(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Configuration for campaign generation.
#[derive(Debug, Clone)]
pub struct CampaignGenConfig {
    /// Campaigns start and end inside this window.
    pub window: DateWindow,
    /// Campaign length in days, added to the start date.
    pub duration_days: RangeInclusive<i64>,
    pub budget_range: (f64, f64),
    pub channels: Vec<Channel>,
}

impl Default for CampaignGenConfig {
    fn default() -> Self {
        Self {
            window: Calendar::YEAR_2025,
            duration_days: 7..=30,
            budget_range: (5000.0, 50000.0),
            channels: Channel::ALL.to_vec(),
        }
    }
}

/// Generates marketing campaigns.
pub struct CampaignGenerator {
    config: CampaignGenConfig,
}

impl CampaignGenerator {
    /// Creates a new campaign generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: CampaignGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: CampaignGenConfig) -> Self {
        Self { config }
    }

    /// Generates the campaign at zero-based position `index`.
    ///
    /// The start date is drawn so that even the longest campaign ends
    /// inside the window.
    pub fn generate(
        &self,
        index: usize,
        rng: &mut impl Rng,
    ) -> Result<GeneratedCampaign, GenerateError> {
        let longest = *self.config.duration_days.end();
        let start_window = self
            .config
            .window
            .shrink_end(longest)
            .ok_or(GenerateError::WindowTooShort(longest))?;

        let start_date = start_window.random_date(rng);
        let duration = rng.gen_range(self.config.duration_days.clone());
        let end_date = start_date + Duration::days(duration);

        let bs: String = Bs().fake_with_rng(rng);
        let channel = *pick(&self.config.channels, "channels", rng)?;

        let (min_budget, max_budget) = self.config.budget_range;
        let budget = round_cents(rng.gen_range(min_budget..=max_budget));

        Ok(GeneratedCampaign {
            id: CampaignId::from_index(index),
            name: title_case(&bs),
            start_date,
            end_date,
            channel,
            budget,
        })
    }

    /// Generates `count` campaigns with sequential ids.
    pub fn generate_batch(
        &self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<GeneratedCampaign>, GenerateError> {
        (0..count).map(|i| self.generate(i, rng)).collect()
    }
}

impl Default for CampaignGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Upper-cases the first letter of every word and lower-cases the rest.
/// Any non-alphabetic character starts a new word.
fn title_case(phrase: &str) -> String {
    let mut titled = String::with_capacity(phrase.len());
    let mut at_word_start = true;

    for c in phrase.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                titled.extend(c.to_uppercase());
            } else {
                titled.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            titled.push(c);
            at_word_start = true;
        }
    }

    titled
}
