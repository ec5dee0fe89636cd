//! Change-time correction rules for `<input type="number">`.

use crate::attrs::AttrSource;
use tracing::debug;

/// Largest integer a JS number represents exactly.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Sign and digit run of the integer prefix of `raw`: leading whitespace,
/// optional sign, then digits. `None` when there are no digits.
fn int_prefix(raw: &str) -> Option<(bool, &str)> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    (digits_len > 0).then(|| (negative, &rest[..digits_len]))
}

/// Integer prefix of `raw`. Anything after the digits is ignored; a run too
/// long for `i64` saturates.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let (negative, digits) = int_prefix(raw)?;
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Inclusive bounds used by the min/max clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    pub fn clamp(&self, value: i64) -> i64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberRules {
    pub max_length: Option<usize>,
    pub bounds: Option<Bounds>,
}

fn parse_attr<T: std::str::FromStr>(attrs: &(impl AttrSource + ?Sized), name: &str) -> Option<T> {
    let raw = attrs.non_empty_attr(name)?;
    match parse_int_prefix(&raw).map(|v| v.to_string().parse::<T>()) {
        Some(Ok(v)) => Some(v),
        _ => {
            debug!(attr = name, value = %raw, "ignoring unparseable numeric attribute");
            None
        }
    }
}

impl NumberRules {
    pub fn from_attrs(attrs: &(impl AttrSource + ?Sized)) -> Self {
        let max_length = parse_attr::<usize>(attrs, "maxlength");

        let bounds = if attrs.has_attr("min") || attrs.has_attr("max") {
            Some(Bounds {
                min: parse_attr::<i64>(attrs, "min").unwrap_or(0),
                max: parse_attr::<i64>(attrs, "max").unwrap_or(MAX_SAFE_INTEGER),
            })
        } else {
            None
        };

        Self { max_length, bounds }
    }

    /// Nothing to enforce, so no listener is needed.
    pub fn is_empty(&self) -> bool {
        self.max_length.is_none() && self.bounds.is_none()
    }

    /// Corrected value to write back after a change. Values without an
    /// integer prefix come back empty, which is what a number input shows
    /// for an unparseable entry. `maxlength` cuts the typed digits before
    /// anything is parsed.
    pub fn apply(&self, raw: &str) -> String {
        let Some((negative, mut digits)) = int_prefix(raw) else {
            return String::new();
        };

        if let Some(limit) = self.max_length {
            if digits.len() > limit {
                digits = &digits[..limit];
            }
            if digits.is_empty() {
                return String::new();
            }
        }

        match (digits.parse::<i64>(), self.bounds) {
            (Ok(magnitude), bounds) => {
                let value = if negative { -magnitude } else { magnitude };
                bounds.map_or(value, |b| b.clamp(value)).to_string()
            }
            // wider than i64, so past any declared bound
            (Err(_), Some(bounds)) => {
                let nearest = if negative { bounds.min } else { bounds.max };
                nearest.to_string()
            }
            (Err(_), None) => {
                let trimmed = digits.trim_start_matches('0');
                if negative {
                    format!("-{trimmed}")
                } else {
                    trimmed.to_owned()
                }
            }
        }
    }
}
