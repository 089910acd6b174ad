/// Tolerance shared by every aspect-ratio comparison in the crate.
///
/// Two ratios closer than this are equal; exact floating point equality is
/// never used. A ratio below the tolerance counts as "unset".
pub const RATIO_TOLERANCE: f64 = 0.01;

/// True when `ratio` carries an actual constraint.
pub(crate) fn ratio_is_set(ratio: f64) -> bool {
    ratio >= RATIO_TOLERANCE
}

/// Tolerant ratio equality.
pub(crate) fn ratio_matches(a: f64, b: f64) -> bool {
    (a - b).abs() < RATIO_TOLERANCE
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
