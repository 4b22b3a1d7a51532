//! Individual field rules. Each rule carries the message shown when it fails.

use chrono::NaiveDate;
use validator::ValidateEmail;

use super::{FormFields, ValidationContext, ValidationError};
use crate::utils::time::parse_form_date;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// `field` must equal `other` exactly.
    Matches {
        field: &'static str,
        other: &'static str,
        message: &'static str,
    },
    /// Trimmed value has at least `min` characters.
    MinChars {
        field: &'static str,
        min: usize,
        message: &'static str,
    },
    /// After removing `strip` (and whitespace when `ignore_whitespace`), the
    /// value is all ASCII digits with a length in `min..=max`.
    Digits {
        field: &'static str,
        strip: &'static [char],
        ignore_whitespace: bool,
        min: usize,
        max: Option<usize>,
        message: &'static str,
    },
    Required {
        field: &'static str,
        message: &'static str,
    },
    Email {
        field: &'static str,
        message: &'static str,
    },
    /// Value parses as a `YYYY-MM-DD` date.
    Date {
        field: &'static str,
        message: &'static str,
    },
    /// Date is today or later.
    DateNotPast {
        field: &'static str,
        message: &'static str,
    },
    /// Date is strictly after the date in `earlier`.
    DateAfter {
        field: &'static str,
        earlier: &'static str,
        message: &'static str,
    },
    IntRange {
        field: &'static str,
        min: i64,
        max: i64,
        message: &'static str,
    },
}

impl Rule {
    pub fn field(&self) -> &'static str {
        match self {
            Rule::Matches { field, .. }
            | Rule::MinChars { field, .. }
            | Rule::Digits { field, .. }
            | Rule::Required { field, .. }
            | Rule::Email { field, .. }
            | Rule::Date { field, .. }
            | Rule::DateNotPast { field, .. }
            | Rule::DateAfter { field, .. }
            | Rule::IntRange { field, .. } => field,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rule::Matches { message, .. }
            | Rule::MinChars { message, .. }
            | Rule::Digits { message, .. }
            | Rule::Required { message, .. }
            | Rule::Email { message, .. }
            | Rule::Date { message, .. }
            | Rule::DateNotPast { message, .. }
            | Rule::DateAfter { message, .. }
            | Rule::IntRange { message, .. } => message,
        }
    }

    pub fn check(&self, fields: &FormFields, ctx: &ValidationContext) -> Result<(), ValidationError> {
        if self.passes(fields, ctx) {
            Ok(())
        } else {
            Err(ValidationError {
                field: self.field(),
                message: self.message().to_string(),
            })
        }
    }

    fn passes(&self, fields: &FormFields, ctx: &ValidationContext) -> bool {
        match self {
            Rule::Matches { field, other, .. } => fields.get(field) == fields.get(other),
            Rule::MinChars { field, min, .. } => fields.get(field).trim().chars().count() >= *min,
            Rule::Digits {
                field,
                strip,
                ignore_whitespace,
                min,
                max,
                ..
            } => digits_only(fields.get(field), strip, *ignore_whitespace)
                .map(|digits| {
                    let len = digits.len();
                    len >= *min && max.map_or(true, |max| len <= max)
                })
                .unwrap_or(false),
            Rule::Required { field, .. } => !fields.get(field).trim().is_empty(),
            Rule::Email { field, .. } => is_email(fields.get(field)),
            Rule::Date { field, .. } => parse_form_date(fields.get(field)).is_some(),
            Rule::DateNotPast { field, .. } => {
                date_of(fields, field).map_or(false, |date| date >= ctx.today)
            }
            Rule::DateAfter { field, earlier, .. } => {
                match (date_of(fields, field), date_of(fields, earlier)) {
                    (Some(later), Some(earlier)) => later > earlier,
                    _ => false,
                }
            }
            Rule::IntRange { field, min, max, .. } => fields
                .get(field)
                .trim()
                .parse::<i64>()
                .map_or(false, |value| (*min..=*max).contains(&value)),
        }
    }
}

fn date_of(fields: &FormFields, field: &str) -> Option<NaiveDate> {
    parse_form_date(fields.get(field))
}

/// Removes separators and returns the remaining digits, or `None` when
/// anything else is left.
pub fn digits_only(raw: &str, strip: &[char], ignore_whitespace: bool) -> Option<String> {
    let kept: String = raw
        .chars()
        .filter(|c| !strip.contains(c) && !(ignore_whitespace && c.is_whitespace()))
        .collect();
    kept.chars().all(|c| c.is_ascii_digit()).then_some(kept)
}

// local@domain.tld: the domain needs a dot, as the admin form always required.
fn is_email(raw: &str) -> bool {
    let value = raw.trim();
    value.validate_email()
        && value
            .rsplit_once('@')
            .map_or(false, |(_, domain)| domain.contains('.') && !domain.ends_with('.'))
}
