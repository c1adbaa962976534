use std::cmp::Ordering;

/// Compact display for metric counters.
///
/// Values below 1000 print as-is; larger values print in thousands with
/// exactly one decimal (`21200` becomes `"21.2K"`).
pub fn format_number(n: u64) -> String {
    format_value(n as f64)
}

/// [`format_number`] over any float, including fractional values.
///
/// The thousands are rounded like `Number.prototype.toFixed(1)`: to the
/// tenth nearest the binary value of `value / 1000`, larger tenth on ties.
/// So `1150` (stored as 1.149999...) shows `"1.1K"` but `1250` shows `"1.3K"`.
pub fn format_value(value: f64) -> String {
    if !(value >= 1000.0) {
        return value.to_string();
    }
    let thousands = value / 1000.0;
    if thousands.is_infinite() {
        return "InfinityK".to_string();
    }
    match nearest_tenth(thousands) {
        Some(tenths) => format!("{}.{}K", tenths / 10, tenths % 10),
        None => format!("{:.1}K", thousands),
    }
}

/// Number of tenths closest to `x`, for `1 <= x < 1e15`.
fn nearest_tenth(x: f64) -> Option<u64> {
    if !(1.0..1e15).contains(&x) {
        return None;
    }
    // The float product can land one tenth off; settle it exactly.
    let mut tenths = (x * 10.0).floor() as u64;
    if compare_exact(x, tenths, 10) == Ordering::Less {
        tenths -= 1;
    } else if compare_exact(x, tenths + 1, 10) != Ordering::Less {
        tenths += 1;
    }
    if compare_exact(x, 2 * tenths + 1, 20) != Ordering::Less {
        tenths += 1;
    }
    Some(tenths)
}

/// Compares `x` with `numerator / denominator` without rounding.
fn compare_exact(x: f64, numerator: u64, denominator: u64) -> Ordering {
    let bits = x.to_bits();
    let mantissa = u128::from((bits & ((1 << 52) - 1)) | (1 << 52));
    let exponent = ((bits >> 52) & 0x7ff) as i32 - 1075;
    let scaled = mantissa * u128::from(denominator);
    let target = u128::from(numerator);
    if exponent >= 0 {
        (scaled << exponent).cmp(&target)
    } else {
        scaled.cmp(&(target << -exponent))
    }
}
