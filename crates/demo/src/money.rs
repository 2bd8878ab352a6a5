//! Money formatting for the cart view.

use rusty_money::iso::Currency;

/// Format a minor-unit amount into a currency string.
pub fn format_minor(minor_units: i64, currency: &Currency) -> String {
    let abs_minor = minor_units.unsigned_abs();
    let major_units = abs_minor / 100;
    let fractional = abs_minor % 100;
    let sign = if minor_units < 0 { "-" } else { "" };
    let symbol = match currency.iso_alpha_code {
        "GBP" => "£",
        "USD" => "$",
        "EUR" => "€",
        _ => "",
    };

    if symbol.is_empty() {
        format!("{sign}{major_units}.{fractional:02} {}", currency.iso_alpha_code)
    } else {
        format!("{sign}{symbol}{major_units}.{fractional:02}")
    }
}
