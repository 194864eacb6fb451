// src/core/format.rs
//
// Display formatting for prices and percentages. Non-finite values print the
// way a browser would print them ("NaN", "Infinity"), so a bad cell stays
// visible instead of turning into a zero.

pub const CURRENCY: &str = "$";
pub const PLACEHOLDER: &str = "-";

/// Max fraction digits for grouped (summary) output.
const GROUPED_FRACTION_DIGITS: usize = 3;

fn non_finite(v: f64) -> Option<&'static str> {
    if v.is_nan() {
        Some("NaN")
    } else if v == f64::INFINITY {
        Some("Infinity")
    } else if v == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

/// Add one unit in the last place of a plain decimal string, carrying left:
/// `"0.12"` → `"0.13"`, `"9.99"` → `"10.00"`.
fn bump_last_digit(text: &mut String) {
    let mut bytes = std::mem::take(text).into_bytes();
    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                carry = false;
                break;
            }
        }
    }
    if carry {
        bytes.insert(0, b'1');
    }
    // only ASCII digits and '.' were touched
    *text = String::from_utf8_lossy(&bytes).into_owned();
}

/// `a` sits exactly halfway between two `digits`-place decimals. That holds
/// iff `a * 2^(digits + 1)` is an odd integer; scaling by a power of two is exact.
fn is_exact_tie(a: f64, digits: usize) -> bool {
    let scaled = a * 2f64.powi(digits as i32 + 1);
    scaled.fract() == 0.0 && scaled % 2.0 == 1.0
}

/// `a >= 0` to `digits` places from its exact binary value, ties away from zero.
fn fixed_abs(a: f64, digits: usize) -> String {
    if !is_exact_tie(a, digits) {
        return format!("{a:.digits$}");
    }
    // one more place is exact here and ends in '5'
    let mut text = format!("{:.*}", digits + 1, a);
    text.pop();
    if text.ends_with('.') {
        text.pop();
    }
    bump_last_digit(&mut text);
    text
}

/// `a >= 0` rounded to at most `digits` places from its shortest decimal form,
/// ties away from zero. Trailing zeros are kept as produced.
fn shortest_rounded(a: f64, digits: usize) -> String {
    let text = format!("{a}");
    let Some((int_part, frac_part)) = text.split_once('.') else {
        return text;
    };
    if frac_part.len() <= digits {
        return text;
    }

    let round_up = frac_part.as_bytes()[digits] >= b'5';
    let mut out = if digits == 0 {
        s!(int_part)
    } else {
        join!(int_part, ".", &frac_part[..digits])
    };
    if round_up {
        bump_last_digit(&mut out);
    }
    out
}

/// `45000.0` → `"45000.00"`, `0.125` → `"0.13"`.
pub fn fixed2(v: f64) -> String {
    if let Some(s) = non_finite(v) {
        return s!(s);
    }
    let body = fixed_abs(v.abs(), 2);
    if v < 0.0 { join!("-", &body) } else { body }
}

/// en-US style: thousands separators, up to three fraction digits,
/// trailing zeros dropped. `1234567.891` → `"1,234,567.891"`.
pub fn grouped(v: f64) -> String {
    if let Some(s) = non_finite(v) {
        return s!(s);
    }

    let text = shortest_rounded(v.abs(), GROUPED_FRACTION_DIGITS);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(text.len() + text.len() / 3 + 1);
    // "-0" is printed as "0"
    if v < 0.0 && (int_part != "0" || !frac.is_empty()) {
        out.push('-');
    }
    let digits = int_part.as_bytes();
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*d as char);
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Summary price: `"$45,000"`.
pub fn currency_grouped(v: f64) -> String {
    join!(CURRENCY, &grouped(v))
}

/// Table price: `"$45000.00"`.
pub fn currency_fixed(v: f64) -> String {
    join!(CURRENCY, &fixed2(v))
}

/// Table error: `"-1.11%"`.
pub fn percent_fixed(v: f64) -> String {
    join!(&fixed2(v), "%")
}

/// Apply `f` when present, else the placeholder dash.
pub fn or_placeholder(v: Option<f64>, f: fn(f64) -> String) -> String {
    v.map(f).unwrap_or_else(|| s!(PLACEHOLDER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(grouped(45000.0), "45,000");
        assert_eq!(grouped(999.0), "999");
        assert_eq!(grouped(1000.0), "1,000");
        assert_eq!(grouped(1234567.891), "1,234,567.891");
        assert_eq!(grouped(1234.5), "1,234.5");
        assert_eq!(grouped(0.12345), "0.123");
        assert_eq!(grouped(-98765.4), "-98,765.4");
        assert_eq!(grouped(-0.0001), "0");
        assert_eq!(grouped(f64::NAN), "NaN");
    }

    #[test]
    fn fixed_and_currency() {
        assert_eq!(currency_fixed(45000.0), "$45000.00");
        assert_eq!(currency_fixed(f64::NAN), "$NaN");
        assert_eq!(percent_fixed(-1.11), "-1.11%");
        assert_eq!(currency_grouped(45000.0), "$45,000");
        assert_eq!(fixed2(f64::INFINITY), "Infinity");
    }

    #[test]
    fn halfway_rounds_away_from_zero() {
        assert_eq!(currency_fixed(0.125), "$0.13");
        assert_eq!(currency_fixed(45000.125), "$45000.13");
        assert_eq!(percent_fixed(-1.125), "-1.13%");
        assert_eq!(fixed2(9.995), "9.99"); // binary value is below the tie
        assert_eq!(fixed2(99.875), "99.88");
        assert_eq!(fixed2(0.375), "0.38");
        assert_eq!(fixed2(9.999), "10.00");
        assert_eq!(currency_grouped(45000.0625), "$45,000.063");
        assert_eq!(grouped(999.9995), "1,000");
        assert_eq!(grouped(-2.0005), "-2.001");
    }

    #[test]
    fn negative_zero_prints_unsigned() {
        assert_eq!(fixed2(-0.0), "0.00");
        assert_eq!(fixed2(-0.001), "-0.00");
    }

    #[test]
    fn bump_carries() {
        let mut t = s!("9.99");
        bump_last_digit(&mut t);
        assert_eq!(t, "10.00");
        let mut t = s!("0.12");
        bump_last_digit(&mut t);
        assert_eq!(t, "0.13");
    }

    #[test]
    fn placeholder_when_absent() {
        assert_eq!(or_placeholder(None, currency_fixed), "-");
        assert_eq!(or_placeholder(Some(2.5), percent_fixed), "2.50%");
    }
}
