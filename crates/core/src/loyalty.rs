//! Loyalty

/// Minor units per loyalty point: one point per whole currency unit spent.
const MINOR_UNITS_PER_POINT: i64 = 100;

/// Whole points earned for an order total given in minor units.
///
/// Fractional currency units never earn partial points, so a `375` total
/// earns `3` points. Totals at or below zero earn nothing.
pub fn points_earned(total_minor_units: i64) -> u64 {
    if total_minor_units <= 0 {
        return 0;
    }

    u64::try_from(total_minor_units / MINOR_UNITS_PER_POINT).unwrap_or(0)
}

/// The balance a customer would hold after earning `earned` points.
pub fn projected_balance(balance: u64, earned: u64) -> u64 {
    balance.saturating_add(earned)
}
