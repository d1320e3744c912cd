//! Discounts

/// Largest percentage a rule may grant.
pub const MAX_PERCENT: u8 = 100;

/// Calculate `floor(percent × amount / 100)` in minor units.
///
/// Percentages above 100 are treated as 100, so the result never exceeds `amount`.
pub fn percent_of(percent: u8, amount: u64) -> u64 {
    let percent = u128::from(percent.min(MAX_PERCENT));
    let applied = u128::from(amount) * percent / u128::from(MAX_PERCENT);

    u64::try_from(applied).unwrap_or(amount)
}
