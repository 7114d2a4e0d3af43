//! Typed coercion of weakly-typed numeric document fields
//!
//! Booking documents store quantities and amounts as numbers, numeric
//! strings, or not at all. Every numeric field goes through one of the
//! functions here; a value that cannot be read becomes [`Coerced::Defaulted`]
//! and reads as zero.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Outcome of reading a numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coerced<T> {
    /// The field held a usable value
    Parsed(T),
    /// The field was missing or unusable
    Defaulted,
}

impl<T: Default + Copy> Coerced<T> {
    /// The parsed value, or the type's zero
    pub fn value(&self) -> T {
        match self {
            Coerced::Parsed(v) => *v,
            Coerced::Defaulted => T::default(),
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Coerced::Defaulted)
    }
}

/// Read a decimal amount (price, deposit, total cost)
///
/// Numbers are taken as-is. Strings are read like a lenient float parse: the
/// longest leading numeric prefix counts, so `"12.50 EUR"` reads as 12.50.
pub fn coerce_decimal(value: Option<&Value>) -> Coerced<Decimal> {
    let text = match value {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => numeric_prefix(s.trim_start()).to_string(),
        _ => String::new(),
    };
    let parsed = parse_decimal_text(&text).or_else(|| clamp_out_of_range(&text));
    match parsed {
        Some(d) => Coerced::Parsed(d),
        None => {
            log::trace!("Numeric field {:?} coerced to zero", value);
            Coerced::Defaulted
        }
    }
}

/// Read a booking quantity as a non-negative integer
pub fn coerce_quantity(value: Option<&Value>) -> Coerced<u32> {
    let parsed = match value {
        Some(Value::Number(n)) => {
            if let Some(u) = n.as_u64() {
                u32::try_from(u).ok()
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f <= u32::MAX as f64)
                    .map(|f| f as u32)
            }
        }
        Some(Value::String(s)) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    match parsed {
        Some(q) => Coerced::Parsed(q),
        None => {
            log::trace!("Quantity field {:?} coerced to zero", value);
            Coerced::Defaulted
        }
    }
}

fn parse_decimal_text(text: &str) -> Option<Decimal> {
    let text = text.strip_prefix('+').unwrap_or(text);
    if text.is_empty() {
        return None;
    }
    let text = if let Some(rest) = text.strip_prefix("-.") {
        format!("-0.{}", rest)
    } else if let Some(rest) = text.strip_prefix('.') {
        format!("0.{}", rest)
    } else {
        text.to_string()
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// Numbers beyond `Decimal`'s range saturate at its bounds; ones too small
/// for its scale read as zero
fn clamp_out_of_range(text: &str) -> Option<Decimal> {
    let f = text.parse::<f64>().ok().filter(|f| f.is_finite())?;
    let clamped = if f.abs() < 1.0 {
        Decimal::ZERO
    } else if f > 0.0 {
        Decimal::MAX
    } else {
        Decimal::MIN
    };
    log::debug!("Numeric field {} is outside the decimal range, read as {}", text, clamped);
    Some(clamped)
}

/// Longest prefix shaped like `[+-]digits[.digits][e[+-]digits]`
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
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
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return "";
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
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
    // "5." is a valid prefix for a float parse but not for Decimal
    s[..end].trim_end_matches('.')
}
