//! Number formatting and operand parsing for the display.
//!
//! Display values are strings so that numbers under construction (`"12."`)
//! survive between key presses. These helpers convert between that text and
//! `f64` without introducing floating point noise on the way back out.

/// Default number of fractional digits kept when formatting results.
pub const DEFAULT_PRECISION: usize = 10;

/// Format a number for the display with [`DEFAULT_PRECISION`] digits.
///
/// # Example
///
/// ```rust
/// use calcstate::core::format_number;
///
/// assert_eq!(format_number(56.0), "56");
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
/// ```
pub fn format_number(value: f64) -> String {
    format_number_with_precision(value, DEFAULT_PRECISION)
}

/// Format a number keeping at most `precision` fractional digits.
///
/// Integers render without a decimal point. Other values are rounded to
/// `precision` digits and re-parsed, which drops trailing zeros and absorbs
/// representation noise.
pub fn format_number_with_precision(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return non_finite(value).to_string();
    }

    if value.fract() == 0.0 {
        return render(value);
    }

    let rounded = format!("{value:.precision$}");
    match rounded.parse::<f64>() {
        Ok(reparsed) => render(reparsed),
        Err(_) => rounded,
    }
}

/// Parse display text as an operand.
///
/// Reads the longest numeric prefix and ignores whatever follows it, so a
/// display such as `"Infinity.5"` (a decimal point typed after an overflow)
/// still parses as infinity. Text with no numeric prefix (`"Error"`, a lone
/// `"-"`) becomes NaN so that arithmetic on it proceeds the same way it
/// would on a host float.
///
/// # Example
///
/// ```rust
/// use calcstate::core::parse_operand;
///
/// assert_eq!(parse_operand("12."), 12.0);
/// assert_eq!(parse_operand("-0.5"), -0.5);
/// assert_eq!(parse_operand("Infinity.5"), f64::INFINITY);
/// assert!(parse_operand("Error").is_nan());
/// ```
pub fn parse_operand(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if unsigned.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let end = numeric_prefix_len(unsigned);
    match unsigned[..end].parse::<f64>() {
        Ok(value) => sign * value,
        Err(_) => f64::NAN,
    }
}

/// Byte length of the leading `digits[.digits][e[+-]digits]` run.
///
/// A trailing `.` with no fraction digits and an exponent marker with no
/// exponent digits are left out of the prefix.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes
            .get(start..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let int_digits = digits_from(0);
    let mut end = int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_digits = digits_from(exp_start);
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }
    end
}

fn render(value: f64) -> String {
    // -0 shows as 0
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

fn non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value.is_sign_positive() {
        "Infinity"
    } else {
        "-Infinity"
    }
}
