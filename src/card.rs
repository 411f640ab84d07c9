use std::fmt;

use crate::{
    analysis::{Direction, PriceDeltaResult},
    error::Result,
    model::{Platform, Price, Product, ProductId},
    utils::{format_currency, format_percent},
};

/// Display values of one listed product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub platform: Platform,
    pub current_price: Price,
    pub delta: PriceDeltaResult,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Result<Self> {
        Ok(Self {
            id: product.id,
            name: product.name.clone(),
            platform: product.platform,
            current_price: product.current_price,
            delta: product.price_delta()?,
        })
    }

    pub fn arrow(&self) -> &'static str {
        match self.delta.direction {
            Direction::Up => "▲",
            Direction::Down => "▼",
            Direction::Unchanged => "=",
        }
    }
}

impl fmt::Display for ProductCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<24} {:<10} {:>18}  {} {} ({})",
            self.name,
            self.platform.to_string(),
            format_currency(self.current_price),
            self.arrow(),
            format_currency(self.delta.change.abs()),
            format_percent(self.delta.change_percent),
        )
    }
}
