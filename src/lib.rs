//! Price-tracking dashboard core: price deltas, the filtered and sorted
//! product list, chart series and the "track new product" form.

pub mod analysis;
pub mod card;
pub mod chart;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod notify;
pub mod report;
pub mod tracking;
pub mod utils;
pub mod view;

pub use analysis::{compute, Direction, PriceDeltaResult};
pub use error::{Error, Result};
pub use model::{Platform, Price, PriceHistory, PriceObservation, Product, ProductId};
pub use view::{view, SortKey, ViewState};
