/// Numeric conversion helpers.
///
/// Conversions between `i64` and `f64` used by arithmetic promotion, and the
/// lenient prefix readers used when a string value is converted to a number
/// in place.
pub mod num;
