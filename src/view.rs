use std::cmp::Ordering;

use clap::ValueEnum;
use derive_more::Display;
use feruca::Collator;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::Product;

#[derive(Display, Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    #[display(fmt = "name")]
    Name,
    #[display(fmt = "price")]
    Price,
}

/// Filters products by a case-insensitive name substring and orders them by
/// `sort_key`. The sort is stable and the input is left untouched.
pub fn view<'a, I>(products: I, query: &str, sort_key: SortKey) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let needle = query.to_lowercase();
    let mut collator = Collator::default();

    let visible = products
        .into_iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .sorted_by(|a, b| compare(&mut collator, a, b, sort_key))
        .collect_vec();

    debug!(query, %sort_key, visible = visible.len(), "product view");

    visible
}

/// Names follow the Unicode collation order of the root locale: accents and
/// case only break ties between otherwise equal letters, lowercase first.
fn compare(collator: &mut Collator, a: &Product, b: &Product, sort_key: SortKey) -> Ordering {
    match sort_key {
        SortKey::Name => collator.collate(a.name.as_str(), b.name.as_str()),
        SortKey::Price => a.current_price.total_cmp(&b.current_price),
    }
}

/// Search and sort state owned by the dashboard shell.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewState {
    query: String,
    sort_key: SortKey,
}

impl ViewState {
    pub fn with_query(mut self, value: impl Into<String>) -> Self {
        self.query = value.into();
        self
    }

    pub fn with_sort_key(mut self, value: SortKey) -> Self {
        self.sort_key = value;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn apply<'a, I>(&self, products: I) -> Vec<&'a Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        view(products, &self.query, self.sort_key)
    }
}

#[cfg(test)]
mod tests {
    use super::{view, SortKey, ViewState};
    use crate::model::{Platform, PriceHistory, Product};

    fn product(id: u64, name: &str, price: f64) -> Product {
        Product::new(id, name, Platform::Tokopedia, price, PriceHistory::default())
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Smartphone X", 3_500_000.0),
            product(2, "Laptop Y", 7_640_000.0),
            product(3, "Sendal Jepit", 30_000.0),
        ]
    }

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn unittest_empty_input() {
        assert!(view(&Vec::<Product>::new(), "", SortKey::Name).is_empty());
    }

    #[test]
    fn unittest_sort_by_name() {
        let products = catalog();
        let r = view(&products, "", SortKey::Name);
        assert_eq!(names(&r), ["Laptop Y", "Sendal Jepit", "Smartphone X"]);
    }

    #[test]
    fn unittest_sort_by_price() {
        let products = catalog();
        let r = view(&products, "", SortKey::Price);
        assert_eq!(names(&r), ["Sendal Jepit", "Smartphone X", "Laptop Y"]);
    }

    #[test]
    fn unittest_query_is_case_insensitive() {
        let products = catalog();
        assert_eq!(names(&view(&products, "apt", SortKey::Name)), ["Laptop Y"]);
        assert_eq!(names(&view(&products, "APT", SortKey::Name)), ["Laptop Y"]);
        assert!(view(&products, "tablet", SortKey::Name).is_empty());
    }

    #[test]
    fn unittest_name_order_puts_lowercase_first() {
        let products = vec![product(1, "beta", 1.0), product(2, "Alpha", 2.0), product(3, "alpha", 3.0)];
        let r = view(&products, "", SortKey::Name);
        assert_eq!(names(&r), ["alpha", "Alpha", "beta"]);
    }

    #[test]
    fn unittest_name_order_places_accented_letters() {
        let products = vec![
            product(1, "Zebra Case", 1.0),
            product(2, "Éclair Mixer", 2.0),
            product(3, "Apple", 3.0),
            product(4, "eclair mixer", 4.0),
        ];
        let r = view(&products, "", SortKey::Name);
        assert_eq!(names(&r), ["Apple", "eclair mixer", "Éclair Mixer", "Zebra Case"]);
    }

    #[test]
    fn unittest_equal_names_keep_input_order() {
        let products = vec![product(1, "Kipas", 1.0), product(2, "Kipas", 2.0)];
        let ids: Vec<_> = view(&products, "", SortKey::Name).iter().map(|p| p.id.0).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn unittest_price_sort_is_stable() {
        let products = vec![product(1, "B", 10.0), product(2, "A", 5.0), product(3, "C", 10.0)];
        let ids: Vec<_> = view(&products, "", SortKey::Price).iter().map(|p| p.id.0).collect();
        assert_eq!(ids, [2, 1, 3]);
    }

    #[test]
    fn unittest_view_is_idempotent() {
        let products = catalog();
        for key in [SortKey::Name, SortKey::Price] {
            for query in ["", "a", "x"] {
                let once = view(&products, query, key);
                let twice = view(once.clone(), "", key);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn unittest_input_is_not_mutated() {
        let products = catalog();
        let before = products.clone();
        let _ = view(&products, "", SortKey::Price);
        assert_eq!(products, before);
    }

    #[test]
    fn unittest_view_state() {
        let products = catalog();
        let state = ViewState::default()
            .with_query("s")
            .with_sort_key(SortKey::Price);

        assert_eq!(state.query(), "s");
        assert_eq!(names(&state.apply(&products)), ["Sendal Jepit", "Smartphone X"]);
    }
}
