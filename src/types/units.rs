//! Token unit conversion.
//!
//! ## Overview
//!
//! Token quantities are integers in the asset's smallest unit. A token with
//! `decimals = 18` represents "1.5" as `1_500_000_000_000_000_000`.
//! Conversion goes through `rust_decimal` so no floating point is involved.
//!
//! ## Examples
//!
//! ```
//! use order_swap::types::units::{parse_units, format_units};
//!
//! let one = parse_units("1", 18).unwrap();
//! assert_eq!(one, 1_000_000_000_000_000_000);
//!
//! assert_eq!(format_units(1_500_000_000_000_000_000, 18).unwrap(), "1.5");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::types::Amount;

/// Largest supported `decimals` value.
///
/// 10^18 is the conventional precision for fungible tokens and still fits a
/// `u64` scale factor.
pub const MAX_DECIMALS: u32 = 18;

/// Scale factor `10^decimals`, or `None` above [`MAX_DECIMALS`]
fn unit_scale(decimals: u32) -> Option<Decimal> {
    if decimals > MAX_DECIMALS {
        return None;
    }
    Some(Decimal::from(10u64.pow(decimals)))
}

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a human-readable decimal string to smallest units
///
/// # Returns
///
/// * `Some(Amount)` - the integer quantity
/// * `None` - if parsing fails, the value is negative, it carries more
///   fractional digits than `decimals`, or it overflows
///
/// # Example
///
/// ```
/// use order_swap::types::units::parse_units;
///
/// assert_eq!(parse_units("1", 6), Some(1_000_000));
/// assert_eq!(parse_units("0.000001", 6), Some(1));
/// assert_eq!(parse_units("0.0000001", 6), None);
/// ```
pub fn parse_units(s: &str, decimals: u32) -> Option<Amount> {
    let scale = unit_scale(decimals)?;
    let value = Decimal::from_str(s.trim()).ok()?;

    if value.is_sign_negative() && !value.is_zero() {
        return None;
    }
    if value.normalize().scale() > decimals {
        return None;
    }

    let scaled = value.checked_mul(scale)?.normalize();
    u128::try_from(scaled.mantissa()).ok()
}

/// Convert smallest units to a trimmed decimal string
///
/// Trailing zeros are dropped, so `10^18` with 18 decimals renders as `"1"`.
/// Returns `None` if `decimals` is unsupported or the amount exceeds the
/// decimal range (about 7.9 * 10^28 smallest units).
pub fn format_units(amount: Amount, decimals: u32) -> Option<String> {
    unit_scale(decimals)?;
    let mantissa = i128::try_from(amount).ok()?;
    let value = Decimal::try_from_i128_with_scale(mantissa, decimals).ok()?;
    Some(value.normalize().to_string())
}

// ============================================================================
// Unit Tests
// ============================================================================
