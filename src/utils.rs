//! Small general-purpose helpers that sit alongside the memoizer: scalar
//! arithmetic, numeric coercion and string utilities. All are pure and
//! make handy memoization targets in demos and tests.

/// Largest integer exactly representable in an `f64` (2^53 − 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Adds two numbers.
///
/// # Examples
///
/// ```
/// use memolito::utils::add;
///
/// assert_eq!(add(2.0, 3.0), 5.0);
/// assert_eq!(add(5.0, -3.0), 2.0);
/// assert!((add(1.1, 2.2) - 3.3).abs() < 1e-9);
/// ```
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Divides `a` by `b` with IEEE semantics.
///
/// A zero divisor yields `NaN` (for `0.0 / 0.0`) or an infinity, never a
/// panic.
///
/// # Examples
///
/// ```
/// use memolito::utils::divide;
///
/// assert_eq!(divide(6.0, 3.0), 2.0);
/// assert!(divide(0.0, 0.0).is_nan());
/// assert!(divide(6.0, 0.0).is_infinite());
/// ```
pub fn divide(a: f64, b: f64) -> f64 {
    a / b
}

/// Rounds `n` up to `precision` decimal places.
///
/// A negative precision rounds up to tens, hundreds and so on.
///
/// # Examples
///
/// ```
/// use memolito::utils::ceil;
///
/// assert_eq!(ceil(4.006, 2), 4.01);
/// assert_eq!(ceil(6.004, 0), 7.0);
/// assert_eq!(ceil(6040.0, -2), 6100.0);
/// ```
pub fn ceil(n: f64, precision: i32) -> f64 {
    let factor = 10f64.powi(precision);
    (n * factor).ceil() / factor
}

/// Clamps `n` to the inclusive range `[lo, hi]`.
///
/// # Examples
///
/// ```
/// use memolito::utils::clamp;
///
/// assert_eq!(clamp(-10.0, -5.0, 5.0), -5.0);
/// assert_eq!(clamp(10.0, -5.0, 5.0), 5.0);
/// assert_eq!(clamp(3.0, -5.0, 5.0), 3.0);
/// ```
pub fn clamp(n: f64, lo: f64, hi: f64) -> f64 {
    n.max(lo).min(hi)
}

/// Uppercases the first character of `s` and lowercases the rest.
///
/// # Examples
///
/// ```
/// use memolito::utils::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize("WORLD"), "World");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Parses `s` as a number, yielding `NaN` when it is not one.
///
/// # Examples
///
/// ```
/// use memolito::utils::to_number;
///
/// assert_eq!(to_number("3.2"), 3.2);
/// assert_eq!(to_number("-7"), -7.0);
/// assert!(to_number("abc").is_nan());
/// ```
pub fn to_number(s: &str) -> f64 {
    s.trim().parse().unwrap_or(f64::NAN)
}

/// Coerces `n` to an integral value.
///
/// `NaN` becomes `0`, infinities are pinned to the largest finite
/// magnitude, everything else is truncated toward zero.
///
/// # Examples
///
/// ```
/// use memolito::utils::to_integer;
///
/// assert_eq!(to_integer(3.2), 3.0);
/// assert_eq!(to_integer(-3.8), -3.0);
/// assert_eq!(to_integer(f64::NAN), 0.0);
/// assert_eq!(to_integer(f64::INFINITY), f64::MAX);
/// assert_eq!(to_integer(f64::NEG_INFINITY), -f64::MAX);
/// ```
pub fn to_integer(n: f64) -> f64 {
    if n.is_nan() {
        0.0
    } else if n == f64::INFINITY {
        f64::MAX
    } else if n == f64::NEG_INFINITY {
        -f64::MAX
    } else {
        n.trunc()
    }
}

/// Returns `true` if `n` is a valid collection length: a non-negative
/// integer no larger than [`MAX_SAFE_INTEGER`].
///
/// # Examples
///
/// ```
/// use memolito::utils::{is_length, MAX_SAFE_INTEGER};
///
/// assert!(is_length(0.0));
/// assert!(is_length(3.0));
/// assert!(is_length(MAX_SAFE_INTEGER));
///
/// assert!(!is_length(-1.0));
/// assert!(!is_length(3.5));
/// assert!(!is_length(MAX_SAFE_INTEGER + 1.0));
/// assert!(!is_length(f64::INFINITY));
/// ```
pub fn is_length(n: f64) -> bool {
    n >= 0.0 && n <= MAX_SAFE_INTEGER && n.fract() == 0.0
}

/// Returns `true` if `s` contains no characters.
///
/// # Examples
///
/// ```
/// use memolito::utils::is_empty;
///
/// assert!(is_empty(""));
/// assert!(!is_empty("abc"));
/// ```
pub fn is_empty(s: &str) -> bool {
    s.is_empty()
}
