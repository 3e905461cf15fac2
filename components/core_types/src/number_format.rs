//! Canonical number-to-string conversion.
//!
//! Produces the same text as the host language's `Number.prototype.toString()`
//! with radix 10: shortest round-trip digits, plain decimal notation for
//! magnitudes in `[1e-6, 1e21)`, exponent notation (`1e+21`, `1.5e-7`)
//! outside it, and `"0"` for both zeros.

/// Format a number the way the host language prints it.
///
/// Non-finite values are rendered as `NaN`, `Infinity` and `-Infinity`;
/// callers that must never stringify them check `is_finite()` first.
///
/// # Examples
///
/// ```
/// use core_types::format_number;
///
/// assert_eq!(format_number(42.0), "42");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(0.1), "0.1");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1.5e-7), "1.5e-7");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let mut buffer = ryu::Buffer::new();
    let (digits, point) = decompose(buffer.format_finite(value.abs()));
    let k = digits.len() as i32;
    let n = point;

    let mut out = String::with_capacity(k as usize + 8);
    if value < 0.0 {
        out.push('-');
    }

    if k <= n && n <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat('0').take((n - k) as usize));
    } else if 0 < n && n <= 21 {
        out.push_str(&digits[..n as usize]);
        out.push('.');
        out.push_str(&digits[n as usize..]);
    } else if -6 < n && n <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-n) as usize));
        out.push_str(&digits);
    } else {
        let exponent = n - 1;
        out.push_str(&digits[..1]);
        if k > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push(if exponent >= 0 { '+' } else { '-' });
        out.push_str(&exponent.abs().to_string());
    }

    out
}

/// Split ryu output into significant digits and decimal point position.
///
/// The value equals `0.DIGITS × 10^point`. Digits carry no leading or
/// trailing zeros.
fn decompose(repr: &str) -> (String, i32) {
    let (mantissa, exponent) = match repr.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (repr, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut digits = String::with_capacity(int_part.len() + frac_part.len());
    digits.push_str(int_part);
    digits.push_str(frac_part);
    let mut point = int_part.len() as i32 + exponent;

    let leading = digits.len() - digits.trim_start_matches('0').len();
    digits.drain(..leading);
    point -= leading as i32;

    let significant = digits.trim_end_matches('0').len();
    digits.truncate(significant);

    (digits, point)
}
