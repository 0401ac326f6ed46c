/// Restricts `value` to the closed range `[lower, upper]`.
///
/// Computes `min(max(value, lower), upper)`. Unlike [`Ord::clamp`] this
/// works for any `PartialOrd` type, so floats need no wrapper.
///
/// `lower <= upper` is a caller obligation and is only checked in debug
/// builds. With the bounds reversed, release builds return `upper`.
#[must_use]
pub fn clamped<T: PartialOrd + Copy>(value: T, lower: T, upper: T) -> T {
    debug_assert!(lower <= upper, "clamped: lower bound exceeds upper bound");
    let raised = if value < lower { lower } else { value };
    if raised > upper {
        upper
    } else {
        raised
    }
}
