use itertools::Itertools;

use crate::model::Price;

/// Formats an amount as Indonesian Rupiah, `id-ID` style: `Rp 3.500.000,00`.
/// Any finite amount is printed in full; NaN and infinities render as `-`.
pub fn format_currency(amount: Price) -> String {
    if !amount.is_finite() {
        return "-".to_owned();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = whole
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| String::from_utf8_lossy(chunk))
        .join(".");

    // amounts that round to zero carry no sign
    let negative = amount < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if negative { "-" } else { "" };

    format!("{sign}Rp {grouped},{cents}")
}

/// Signed percentage with one decimal: `-5.4%`, `+10.0%`, `0.0%`.
pub fn format_percent(percent: f64) -> String {
    if percent == 0.0 {
        "0.0%".to_owned()
    } else {
        format!("{percent:+.1}%")
    }
}
