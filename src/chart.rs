use chrono::NaiveDate;
use moving_min_max::{MovingMax, MovingMin};
use serde::Serialize;

use crate::model::{Price, PriceHistory};

/// One point of the price-history chart.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub price: Price,
    pub rolling_low: Price,
    pub rolling_high: Price,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct HistorySummary {
    pub lowest: Price,
    pub highest: Price,
    pub average: Price,
    pub first: Price,
    pub last: Price,
}

/// Chart points with the low/high of the last `window` observations
/// (the current one included).
pub fn series(history: &PriceHistory, window: usize) -> Vec<ChartPoint> {
    let window = window.max(1);
    let mut lows = MovingMin::<Price>::new();
    let mut highs = MovingMax::<Price>::new();
    let mut points = Vec::with_capacity(history.len());

    for observation in history.iter() {
        lows.push(observation.price);
        highs.push(observation.price);

        if lows.len() > window {
            lows.pop();
            highs.pop();
        }

        points.push(ChartPoint {
            date: observation.date,
            price: observation.price,
            rolling_low: lows.min().copied().unwrap_or(observation.price),
            rolling_high: highs.max().copied().unwrap_or(observation.price),
        });
    }

    points
}

pub fn summary(history: &PriceHistory) -> Option<HistorySummary> {
    let first = history.iter().next()?;
    let last = history.latest()?;

    let (lowest, highest, total) = history.iter().fold(
        (first.price, first.price, 0.0),
        |(lowest, highest, total), o| (lowest.min(o.price), highest.max(o.price), total + o.price),
    );

    Some(HistorySummary {
        lowest,
        highest,
        average: total / history.len() as Price,
        first: first.price,
        last: last.price,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{series, summary};
    use crate::model::{PriceHistory, PriceObservation};

    fn history(prices: &[f64]) -> PriceHistory {
        prices
            .iter()
            .enumerate()
            .map(|(ix, price)| {
                let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(ix as u64);
                PriceObservation::new(date, *price)
            })
            .collect()
    }

    #[test]
    fn unittest_rolling_window() {
        let points = series(&history(&[100.0, 80.0, 120.0, 110.0, 130.0]), 2);

        let lows: Vec<_> = points.iter().map(|p| p.rolling_low).collect();
        let highs: Vec<_> = points.iter().map(|p| p.rolling_high).collect();
        assert_eq!(lows, [100.0, 80.0, 80.0, 110.0, 110.0]);
        assert_eq!(highs, [100.0, 100.0, 120.0, 120.0, 130.0]);
    }

    #[test]
    fn unittest_zero_window_tracks_price() {
        let points = series(&history(&[5.0, 3.0, 4.0]), 0);
        assert!(points
            .iter()
            .all(|p| p.rolling_low == p.price && p.rolling_high == p.price));
    }

    #[test]
    fn unittest_summary() {
        assert_eq!(summary(&PriceHistory::default()), None);

        let s = summary(&history(&[100.0, 80.0, 120.0])).unwrap();
        assert_eq!(s.lowest, 80.0);
        assert_eq!(s.highest, 120.0);
        assert_eq!(s.average, 100.0);
        assert_eq!(s.first, 100.0);
        assert_eq!(s.last, 120.0);
    }
}
