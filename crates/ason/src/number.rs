/// Format a finite f64 as canonical literal text:
/// - no exponent notation (expanded to plain decimal digits)
/// - no trailing fractional zeros; the decimal point is dropped if the
///   fraction empties out
/// - -0 normalized to 0
///
/// The output is valid under the JSON number grammar, so a rendered number
/// always survives the primitive-pattern check in `escape`.
pub(crate) fn format_canonical_f64(value: f64) -> String {
    if !value.is_finite() {
        debug_assert!(false, "format_canonical_f64 called with non-finite value");
        return String::from("null");
    }
    if value == 0.0 {
        return String::from("0");
    }

    let negative = value < 0.0;
    let magnitude = value.abs();

    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(magnitude);
    let body = match raw.find(['e', 'E']) {
        Some(pos) => {
            let exp: i32 = raw[pos + 1..].parse().unwrap_or(0);
            expand_exponent(&raw[..pos], exp)
        }
        None => String::from(raw),
    };
    let trimmed = trim_fraction(body);
    if trimmed == "0" {
        return String::from("0");
    }
    if negative {
        format!("-{}", trimmed)
    } else {
        trimmed
    }
}

/// Rewrite `mantissa * 10^exp` without an exponent marker.
fn expand_exponent(mantissa: &str, exp: i32) -> String {
    let mut digits: Vec<u8> = Vec::with_capacity(mantissa.len());
    let mut point = None;
    for &b in mantissa.as_bytes() {
        if b == b'.' {
            point = Some(digits.len());
        } else {
            digits.push(b);
        }
    }
    let point = point.unwrap_or(digits.len()) as i32 + exp;

    let mut out = String::with_capacity(digits.len() + exp.unsigned_abs() as usize + 2);
    if point <= 0 {
        out.push_str("0.");
        for _ in 0..(-point) {
            out.push('0');
        }
        out.extend(digits.iter().map(|&d| d as char));
    } else if point as usize >= digits.len() {
        out.extend(digits.iter().map(|&d| d as char));
        for _ in 0..(point as usize - digits.len()) {
            out.push('0');
        }
    } else {
        for (i, &d) in digits.iter().enumerate() {
            if i == point as usize {
                out.push('.');
            }
            out.push(d as char);
        }
    }
    out
}

fn trim_fraction(mut s: String) -> String {
    if let Some(dot) = s.find('.') {
        let mut end = s.len();
        while end > dot + 1 && s.as_bytes()[end - 1] == b'0' {
            end -= 1;
        }
        if s.as_bytes()[end - 1] == b'.' {
            end -= 1;
        }
        s.truncate(end);
    }
    s
}
