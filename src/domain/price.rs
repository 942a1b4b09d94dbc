//! Localized currency parsing.
//!
//! OLX renders prices the Portuguese way: `.` as the thousands separator,
//! `,` as the decimal mark, with a trailing euro sign. Parsed amounts keep
//! a fixed two-decimal scale.

use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Parse a localized euro amount into a non-negative [`Decimal`].
///
/// `"1.234,56€"` becomes `1234.56` and `"50€"` becomes `50.00`.
///
/// # Errors
/// Returns [`Error::Parse`] for unparseable or negative input.
pub fn parse_price(raw: &str) -> Result<Decimal> {
    let normalized: String = raw
        .trim()
        .trim_end_matches('€')
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    let price: Decimal = normalized
        .parse()
        .map_err(|_| Error::Parse(format!("invalid price: {raw:?}")))?;

    if price.is_sign_negative() {
        return Err(Error::Parse(format!("negative price: {raw:?}")));
    }

    let mut price = price.round_dp(2);
    price.rescale(2);
    Ok(price)
}
