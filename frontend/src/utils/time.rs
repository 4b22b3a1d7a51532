use chrono::{Local, Locale, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses the `YYYY-MM-DD` value produced by `<input type="date">`.
pub fn parse_form_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Long Spanish date, e.g. "5 de marzo de 2026".
pub fn format_long_date(date: NaiveDate) -> String {
    NaiveDateTime::from(date)
        .and_utc()
        .format_localized("%-d de %B de %Y", Locale::es_ES)
        .to_string()
}
