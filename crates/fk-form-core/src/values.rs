//! Harvesting field values into a flat map.

use chrono::NaiveDate;
use fk_form_types::{FieldValue, FormValues};
use tracing::debug;

pub const DATE_DAY_FIELD: &str = "date-dd";
pub const DATE_MONTH_FIELD: &str = "date-mm";
pub const DATE_YEAR_FIELD: &str = "date-yyyy";
pub const DATE_MS_KEY: &str = "date-ms";
pub const DATE_DISPLAY_KEY: &str = "date-dd-mm-yyyy";

/// Epoch milliseconds of `year-month-day` at UTC midnight, or `None` if the
/// parts do not name a calendar day.
pub fn date_epoch_ms(day: &str, month: &str, year: &str) -> Option<i64> {
    let day: u32 = day.trim().parse().ok()?;
    let month: u32 = month.trim().parse().ok()?;
    let year: i32 = year.trim().parse().ok()?;
    let midnight = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)?;
    Some(midnight.and_utc().timestamp_millis())
}

/// Accumulates values by field name; `finish` yields them sorted by name.
#[derive(Debug, Default)]
pub struct ValuesBuilder {
    values: FormValues,
}

impl ValuesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write for a name wins.
    pub fn record(&mut self, name: &str, value: FieldValue) {
        self.values.insert(name.to_owned(), value);
    }

    /// Only the checked radio of a group writes its value; an unchecked
    /// radio only reserves the name.
    pub fn record_radio(&mut self, name: &str, checked: bool, value: &str) {
        if checked {
            self.record(name, FieldValue::Text(value.to_owned()));
        } else {
            self.values.entry(name.to_owned()).or_insert(FieldValue::Null);
        }
    }

    /// Adds `date-ms` and `date-dd-mm-yyyy` when all three parts are present
    /// and non-empty. Parts are passed through as entered for the display key.
    pub fn compose_date(&mut self, day: Option<&str>, month: Option<&str>, year: Option<&str>) {
        let (Some(day), Some(month), Some(year)) = (day, month, year) else {
            return;
        };
        if day.is_empty() || month.is_empty() || year.is_empty() {
            return;
        }

        let ms = match date_epoch_ms(day, month, year) {
            Some(ms) => FieldValue::Number(ms as f64),
            None => {
                debug!(day, month, year, "date parts do not form a valid date");
                FieldValue::Null
            }
        };
        self.record(DATE_MS_KEY, ms);
        self.record(DATE_DISPLAY_KEY, FieldValue::Text(format!("{day}-{month}-{year}")));
    }

    pub fn finish(self) -> FormValues {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_date_fields() {
        let mut b = ValuesBuilder::new();
        b.record(DATE_DAY_FIELD, "09".into());
        b.compose_date(Some("09"), Some("04"), Some("2024"));
        let values = b.finish();

        assert_eq!(
            values.get(DATE_DISPLAY_KEY),
            Some(&FieldValue::Text("09-04-2024".into()))
        );
        assert_eq!(
            values.get(DATE_MS_KEY),
            Some(&FieldValue::Number(1_712_620_800_000.0))
        );
    }

    #[test]
    fn incomplete_date_adds_nothing() {
        let mut b = ValuesBuilder::new();
        b.compose_date(Some("09"), Some(""), Some("2024"));
        b.compose_date(Some("09"), None, Some("2024"));
        assert!(b.finish().is_empty());
    }

    #[test]
    fn impossible_date_has_null_ms() {
        let mut b = ValuesBuilder::new();
        b.compose_date(Some("31"), Some("02"), Some("2024"));
        let values = b.finish();
        assert_eq!(values.get(DATE_MS_KEY), Some(&FieldValue::Null));
        assert_eq!(
            values.get(DATE_DISPLAY_KEY),
            Some(&FieldValue::Text("31-02-2024".into()))
        );
    }

    #[test]
    fn later_writes_win() {
        let mut b = ValuesBuilder::new();
        b.record("title", "first".into());
        b.record("title", "second".into());
        assert_eq!(b.finish().get("title"), Some(&FieldValue::Text("second".into())));
    }

    #[test]
    fn radio_group_keeps_checked_value() {
        let mut b = ValuesBuilder::new();
        b.record_radio("format", false, "paperback");
        b.record_radio("format", true, "hardcover");
        b.record_radio("format", false, "ebook");
        b.record_radio("shelf", false, "read");
        let values = b.finish();
        assert_eq!(values.get("format"), Some(&FieldValue::Text("hardcover".into())));
        assert_eq!(values.get("shelf"), Some(&FieldValue::Null));
    }

    #[test]
    fn epoch_is_utc_midnight() {
        assert_eq!(date_epoch_ms("1", "1", "1970"), Some(0));
        assert_eq!(date_epoch_ms("x", "1", "1970"), None);
    }
}
