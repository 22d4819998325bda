/// Converts an `i64` to `f64`.
///
/// Integers beyond `2^53` round to the nearest representable float, which is
/// the promotion mixed integer/float arithmetic uses.
///
/// ## Example
/// ```
/// use linterp::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-12), -12.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an `f64` to `i64` by truncating toward zero.
///
/// Out-of-range values saturate at `i64::MIN`/`i64::MAX` and `NaN` becomes
/// `0`.
///
/// ## Example
/// ```
/// use linterp::util::num::f64_to_i64_truncating;
///
/// assert_eq!(f64_to_i64_truncating(3.99), 3);
/// assert_eq!(f64_to_i64_truncating(-3.99), -3);
/// assert_eq!(f64_to_i64_truncating(f64::NAN), 0);
/// assert_eq!(f64_to_i64_truncating(1e30), i64::MAX);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn f64_to_i64_truncating(value: f64) -> i64 {
    value as i64
}

/// Reads the leading decimal integer of a string.
///
/// Leading blanks are skipped and an optional sign is accepted. Reading stops
/// at the first non-digit. A string with no digits reads as `0`, and a value
/// that does not fit saturates.
///
/// ## Example
/// ```
/// use linterp::util::num::parse_int_prefix;
///
/// assert_eq!(parse_int_prefix("  42abc"), 42);
/// assert_eq!(parse_int_prefix("-7"), -7);
/// assert_eq!(parse_int_prefix("abc"), 0);
/// ```
#[must_use]
pub fn parse_int_prefix(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }
    value
}

/// Reads the longest leading floating-point number of a string.
///
/// Leading blanks are skipped. Accepts an optional sign, digits, an optional
/// fractional part and an optional exponent. A string that does not start with
/// a number reads as `0.0`.
///
/// ## Example
/// ```
/// use linterp::util::num::parse_float_prefix;
///
/// assert_eq!(parse_float_prefix("2.5kg"), 2.5);
/// assert_eq!(parse_float_prefix(" -1e2"), -100.0);
/// assert_eq!(parse_float_prefix("x1"), 0.0);
/// ```
#[must_use]
pub fn parse_float_prefix(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'-' | b'+') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().unwrap_or(0.0)
}
