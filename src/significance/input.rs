/// Parses a raw form value into a visitor or conversion count.
///
/// Reads the leading integer the way a lenient form field does: leading
/// whitespace and an optional sign are accepted, parsing stops at the first
/// non-digit. No digits yields 0, negative values clamp to 0, and values
/// past `u64::MAX` saturate.
pub fn parse_count(raw: &str) -> u64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: u64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(u64::from(b - b'0'));
    }

    if !seen_digit || negative {
        return 0;
    }
    value
}
