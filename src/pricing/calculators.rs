//! Core fare arithmetic.
//!
//! Pure functions over already-resolved inputs - no database access. The
//! fare logic:
//!
//! 1. Pickup charge: the origin city's voucher count for the chosen formula,
//!    charged for every trip regardless of direction. The driver's empty
//!    return leg is never billed.
//! 2. Kilometre surcharge: only when neither endpoint is the capital,
//!    `distance_km x surcharge_per_km_vouchers`.
//! 3. Conversion: `total_vouchers x voucher_value`, rounded half-up to the
//!    cent, exactly once.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::models::{CityRate, Formula, PriceQuote, PricingConfig, PricingError};
use super::normalize::is_capital;

const METERS_PER_KM: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Round a currency amount to whole minor units (cents) using round-half-up.
///
/// The single place the engine rounds; voucher counts are never rounded.
pub fn round_minor_units(amount: Decimal) -> i64 {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Validate a caller-supplied road distance and convert it to kilometres.
pub fn distance_km_from_meters(distance_meters: f64) -> Result<Decimal, PricingError> {
    if !distance_meters.is_finite() || distance_meters < 0.0 {
        return Err(PricingError::InvalidInput(format!(
            "distance must be a non-negative number of meters, got {distance_meters}"
        )));
    }
    let meters = Decimal::try_from(distance_meters).map_err(|_| {
        PricingError::InvalidInput(format!("distance out of range: {distance_meters}"))
    })?;
    Ok(meters / METERS_PER_KM)
}

/// Build a quote from resolved inputs.
///
/// `origin` is the resolved pickup rate row; `origin_key`/`destination_key`
/// are the normalized lookup keys driving the capital rule;
/// `destination_label` is the resolved display name, or the normalized input
/// when the destination is not in the grid (an unresolved destination is
/// priced as a generic suburb - see DESIGN.md).
pub fn build_quote(
    origin: &CityRate,
    origin_key: &str,
    destination_label: &str,
    destination_key: &str,
    distance_km: Decimal,
    formula: Formula,
    config: &PricingConfig,
) -> PriceQuote {
    let base_vouchers = origin.voucher_count(formula);

    let origin_is_capital = is_capital(origin_key);
    let destination_is_capital = is_capital(destination_key);
    let capital_in_route = origin_is_capital || destination_is_capital;

    let surcharge_applied = !capital_in_route;
    let surcharge_vouchers = if surcharge_applied {
        distance_km * config.surcharge_per_km_vouchers
    } else {
        Decimal::ZERO
    };

    let total_vouchers = Decimal::from(base_vouchers) + surcharge_vouchers;
    let total_amount_minor_units =
        round_minor_units(total_vouchers * Decimal::from(config.voucher_value_minor_units));

    let calculation_trace = render_trace(
        base_vouchers,
        surcharge_vouchers,
        config.voucher_value_euros(),
        total_amount_minor_units,
    );

    PriceQuote {
        origin_city: origin.city_name.clone(),
        destination_city: destination_label.to_string(),
        formula,
        base_vouchers,
        surcharge_vouchers,
        total_vouchers,
        total_amount_minor_units,
        distance_km,
        capital_in_route,
        surcharge_applied,
        calculation_trace,
    }
}

/// Human-readable arithmetic for audit/display, e.g.
/// `"11 + 2.1 vouchers × 5.50€ = 72.05€"`.
fn render_trace(
    base_vouchers: u32,
    surcharge_vouchers: Decimal,
    voucher_value_euros: Decimal,
    total_minor_units: i64,
) -> String {
    let total_euros = Decimal::new(total_minor_units, 2);
    if surcharge_vouchers.is_zero() {
        format!("{base_vouchers} vouchers × {voucher_value_euros}€ = {total_euros}€")
    } else {
        format!(
            "{base_vouchers} + {} vouchers × {voucher_value_euros}€ = {total_euros}€",
            surcharge_vouchers.normalize()
        )
    }
}
