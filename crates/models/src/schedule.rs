use lazy_static::lazy_static;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

/// Schedule limits the times during which an alert is active.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
#[schemars(example = Schedule::example())]
pub struct Schedule {
    /// # Weekly activation window of the alert.
    #[validate(nested)]
    pub active_on: ActiveOn,
}

impl Schedule {
    pub fn example() -> Self {
        Self {
            active_on: ActiveOn::example(),
        }
    }
}

/// ActiveOn is a recurring weekly window of activity.
/// Times are local to `utc_offset`, and the window may not wrap midnight.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct ActiveOn {
    /// # Days of the week on which the alert is active.
    /// Values are "Monday" through "Sunday".
    pub days_of_week: BTreeSet<String>,
    /// # Start of the daily window, as 24-hour "HH:MM".
    #[validate(regex(path = *TIME_OF_DAY_RE, message = "must be a 24-hour HH:MM time"))]
    pub start_time: String,
    /// # End of the daily window, as 24-hour "HH:MM".
    #[validate(regex(path = *TIME_OF_DAY_RE, message = "must be a 24-hour HH:MM time"))]
    pub end_time: String,
    /// # Offset from UTC of the start and end times, as "+HHMM" or "-HHMM".
    #[serde(default = "ActiveOn::default_utc_offset")]
    #[validate(regex(path = *UTC_OFFSET_RE, message = "must be a +HHMM or -HHMM offset"))]
    pub utc_offset: String,
}

impl ActiveOn {
    pub fn default_utc_offset() -> String {
        "+0000".to_string()
    }
    pub fn example() -> Self {
        Self {
            days_of_week: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            start_time: "08:30".to_string(),
            end_time: "18:00".to_string(),
            utc_offset: "+0200".to_string(),
        }
    }
}

lazy_static! {
    // TIME_OF_DAY_RE matches a zero-padded 24-hour time.
    pub static ref TIME_OF_DAY_RE: Regex = Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap();
    // UTC_OFFSET_RE matches a signed, zero-padded hours and minutes offset.
    pub static ref UTC_OFFSET_RE: Regex = Regex::new(r"^[+-](0[0-9]|1[0-4])[0-5][0-9]$").unwrap();
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_regexes() {
        for (case, expect) in [
            ("00:00", true),
            ("09:05", true),
            ("23:59", true),
            ("24:00", false),
            ("9:05", false),
            ("12:60", false),
            ("12:00:00", false),
        ] {
            assert_eq!(TIME_OF_DAY_RE.is_match(case), expect, "{case}");
        }
        for (case, expect) in [
            ("+0000", true),
            ("-0530", true),
            ("+1400", true),
            ("+1500", false),
            ("0200", false),
            ("+02:00", false),
        ] {
            assert_eq!(UTC_OFFSET_RE.is_match(case), expect, "{case}");
        }
    }

    #[test]
    fn test_validation_reports_bad_times() {
        let mut schedule = Schedule::example();
        schedule.active_on.start_time = "7:00".to_string();
        schedule.active_on.utc_offset = "UTC".to_string();

        let errors = schedule.active_on.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("start_time"));
        assert!(fields.contains_key("utc_offset"));
        assert!(!fields.contains_key("end_time"));
    }

    #[test]
    fn test_offset_defaults_to_utc() {
        let active_on: ActiveOn = serde_json::from_value(serde_json::json!({
            "days_of_week": ["Sunday"],
            "start_time": "10:00",
            "end_time": "11:00",
        }))
        .unwrap();

        assert_eq!(active_on.utc_offset, "+0000");
    }
}
