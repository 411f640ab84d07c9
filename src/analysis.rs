use chrono::NaiveDate;
use derive_more::Display;
use itertools::Itertools;
use serde::Serialize;

use crate::{
    error::Result,
    model::{ensure_non_negative, Price, PriceHistory, Product},
};

#[derive(Display, Debug, Default, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Direction {
    #[display(fmt = "up")]
    Up,
    #[display(fmt = "down")]
    Down,
    #[default]
    #[display(fmt = "unchanged")]
    Unchanged,
}

/// Change between two price observations. A decrease is negative.
#[derive(Default, Debug, Copy, Clone, PartialEq, Serialize)]
pub struct PriceDeltaResult {
    pub change: Price,
    /// Percent of the previous price, rounded to one decimal.
    pub change_percent: f64,
    pub direction: Direction,
}

impl PriceDeltaResult {
    pub fn unchanged() -> Self {
        Self::default()
    }
}

/// Delta from `previous` to `current`.
///
/// An absent or zero `previous` has nothing to compare against and yields an
/// unchanged result. Negative prices are rejected.
pub fn compute(previous: Option<Price>, current: Price) -> Result<PriceDeltaResult> {
    ensure_non_negative("current", current)?;
    if let Some(previous) = previous {
        ensure_non_negative("previous", previous)?;
    }

    let previous = match previous {
        Some(p) if p > 0.0 => p,
        _ => return Ok(PriceDeltaResult::unchanged()),
    };

    let change = current - previous;
    let direction = if change < 0.0 {
        Direction::Down
    } else if change > 0.0 {
        Direction::Up
    } else {
        Direction::Unchanged
    };

    Ok(PriceDeltaResult {
        change,
        change_percent: round1(change / previous * 100.0),
        direction,
    })
}

fn round1(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    // avoid printing "-0.0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

impl Product {
    /// Delta of `current_price` against the observation before the latest one.
    pub fn price_delta(&self) -> Result<PriceDeltaResult> {
        compute(
            self.price_history.previous().map(|o| o.price),
            self.current_price,
        )
    }
}

/// Deltas of consecutive observations, keyed by the later date.
pub fn history_deltas(history: &PriceHistory) -> Result<Vec<(NaiveDate, PriceDeltaResult)>> {
    history
        .iter()
        .tuple_windows()
        .map(|(prev, next)| Ok((next.date, compute(Some(prev.price), next.price)?)))
        .collect()
}
