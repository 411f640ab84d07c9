use std::{collections::BTreeMap, str::FromStr};

use chrono::NaiveDate;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Error;

pub type Price = f64;

#[derive(Display, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(alias = "tokopedia")]
    Tokopedia,
    #[serde(alias = "shopee")]
    Shopee,
    #[serde(alias = "bukalapak")]
    Bukalapak,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Tokopedia, Platform::Shopee, Platform::Bukalapak];
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::MissingPlatform);
        }

        Platform::ALL
            .into_iter()
            .find(|p| p.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownPlatform(s.to_owned()))
    }
}

#[derive(
    Display, From, Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub u64);

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub date: NaiveDate,
    pub price: Price,
}

impl PriceObservation {
    pub fn new(date: NaiveDate, price: Price) -> Self {
        Self { date, price }
    }
}

/// Chronological price samples, one per date.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<PriceObservation>", into = "Vec<PriceObservation>")]
pub struct PriceHistory {
    observations: BTreeMap<NaiveDate, Price>,
}

impl PriceHistory {
    /// Records an observation. A second sample for the same date replaces the first.
    pub fn record(&mut self, observation: PriceObservation) {
        self.observations.insert(observation.date, observation.price);
    }

    pub fn latest(&self) -> Option<PriceObservation> {
        self.observations
            .last_key_value()
            .map(|(date, price)| PriceObservation::new(*date, *price))
    }

    /// The observation right before the latest one.
    pub fn previous(&self) -> Option<PriceObservation> {
        self.iter().rev().nth(1)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = PriceObservation> + '_ {
        self.observations
            .iter()
            .map(|(date, price)| PriceObservation::new(*date, *price))
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

impl FromIterator<PriceObservation> for PriceHistory {
    fn from_iter<T: IntoIterator<Item = PriceObservation>>(iter: T) -> Self {
        let mut history = PriceHistory::default();
        for observation in iter {
            history.record(observation);
        }
        history
    }
}

impl From<Vec<PriceObservation>> for PriceHistory {
    fn from(observations: Vec<PriceObservation>) -> Self {
        observations.into_iter().collect()
    }
}

impl From<PriceHistory> for Vec<PriceObservation> {
    fn from(history: PriceHistory) -> Self {
        history.iter().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ProductRecord")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub platform: Platform,
    pub current_price: Price,
    pub price_history: PriceHistory,
}

impl Product {
    /// `current_price` is taken from the latest observation when the history is
    /// not empty.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        platform: Platform,
        current_price: Price,
        price_history: PriceHistory,
    ) -> Self {
        let current_price = price_history
            .latest()
            .map_or(current_price, |latest| latest.price);

        Self {
            id: id.into(),
            name: name.into(),
            platform,
            current_price,
            price_history,
        }
    }

    /// Rejects a negative (or NaN) current price or history price.
    pub fn validate(&self) -> Result<(), Error> {
        ensure_non_negative("current_price", self.current_price)?;
        self.price_history
            .iter()
            .try_for_each(|o| ensure_non_negative("price_history", o.price))
    }

    pub fn record_price(&mut self, observation: PriceObservation) {
        self.price_history.record(observation);
        if let Some(latest) = self.price_history.latest() {
            self.current_price = latest.price;
        }
    }
}

pub(crate) fn ensure_non_negative(field: &'static str, value: Price) -> Result<(), Error> {
    // NaN fails this check too
    if value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidInput { field, value })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: ProductId,
    name: String,
    platform: Platform,
    current_price: Price,
    #[serde(default)]
    price_history: PriceHistory,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        if let Some(latest) = record.price_history.latest() {
            if latest.price != record.current_price {
                warn!(
                    id = %record.id,
                    current_price = record.current_price,
                    latest = latest.price,
                    "current price disagrees with price history, using latest observation"
                );
            }
        }

        Product::new(
            record.id,
            record.name,
            record.platform,
            record.current_price,
            record.price_history,
        )
    }
}
