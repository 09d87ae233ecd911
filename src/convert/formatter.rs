use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Trailing fractional zeros, and the decimal point when nothing is left after it
    static ref TRAILING_ZEROS: Regex = Regex::new(r"\.?0+$").unwrap();
}

/// Values below this magnitude are shown in scientific notation
const SCIENTIFIC_THRESHOLD: f64 = 0.000001;

/// Values at or above this magnitude have no meaningful fixed digits left
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Format a converted value for display
///
/// - `0` is shown as `"0"`
/// - tiny magnitudes use scientific notation with 4 fractional digits (`1.0000e-7`)
/// - everything else uses up to 6 fractional digits with trailing zeros removed
///   and thousands separators in the integer part (`1,234,567.5`)
/// - magnitudes of 1e21 and above use the shortest exponent form (`1e+22`)
///
/// Non-finite values have no sensible display and render as `"-"`.
pub fn format_number(num: f64) -> String {
    if num == 0.0 {
        return "0".to_string();
    }

    if !num.is_finite() {
        return "-".to_string();
    }

    if num.abs() < SCIENTIFIC_THRESHOLD {
        return format!("{:.4e}", num);
    }

    if num.abs() >= EXPONENT_THRESHOLD {
        return format!("{:e}", num).replacen('e', "e+", 1);
    }

    let fixed = format!("{:.6}", num);
    let trimmed = TRAILING_ZEROS.replace(&fixed, "");

    match trimmed.split_once('.') {
        Some((integer, fraction)) => format!("{}.{}", group_thousands(integer), fraction),
        None => group_thousands(&trimmed),
    }
}

/// Insert a comma between every group of three integer digits
fn group_thousands(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push_str(sign);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
