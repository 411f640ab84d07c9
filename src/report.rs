use crate::{
    analysis::history_deltas,
    card::ProductCard,
    chart,
    error::Result,
    model::Product,
    notify::ToastQueue,
    utils::{format_currency, format_percent},
    view::ViewState,
};

/// Lines of the product list: one card per visible product.
pub fn product_list(products: &[Product], state: &ViewState) -> Result<Vec<String>> {
    let visible = state.apply(products);
    if visible.is_empty() {
        return Ok(vec![format!("No products match '{}'.", state.query())]);
    }

    visible
        .into_iter()
        .map(|product| Ok(ProductCard::from_product(product)?.to_string()))
        .collect()
}

/// Header, one line per observation with its rolling low/high and change, and
/// a closing summary.
pub fn price_history(product: &Product, window: usize) -> Result<Vec<String>> {
    let mut lines = vec![format!("{} ({})", product.name, product.platform)];

    let Some(summary) = chart::summary(&product.price_history) else {
        lines.push("No price history yet.".to_owned());
        return Ok(lines);
    };

    let deltas = history_deltas(&product.price_history)?;
    for point in chart::series(&product.price_history, window) {
        let change = deltas
            .iter()
            .find(|(date, _)| *date == point.date)
            .map(|(_, delta)| format_percent(delta.change_percent))
            .unwrap_or_default();

        lines.push(
            format!(
                "{}  {:>18}  low {:>18}  high {:>18}  {change}",
                point.date,
                format_currency(point.price),
                format_currency(point.rolling_low),
                format_currency(point.rolling_high),
            )
            .trim_end()
            .to_owned(),
        );
    }

    lines.push(format!(
        "lowest {}  highest {}  average {}",
        format_currency(summary.lowest),
        format_currency(summary.highest),
        format_currency(summary.average),
    ));

    Ok(lines)
}

pub fn toasts(queue: &ToastQueue) -> Vec<String> {
    queue
        .active()
        .map(|(_, toast)| format!("[{}] {}", toast.title, toast.description))
        .collect()
}
