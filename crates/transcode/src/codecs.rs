use super::{Diagnostics, Error, Scope};
use proto_alerts::alerts as proto;

/// Codec is a closed, bidirectional mapping between configuration strings
/// and the wire codes of a protobuf enumeration.
///
/// Entries are ordered as they're presented to users,
/// and every string and every code appears at most once.
pub struct Codec<E: 'static> {
    name: &'static str,
    entries: &'static [(&'static str, E)],
}

impl<E> Codec<E> {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, E)]) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<E> Codec<E>
where
    E: Copy + PartialEq + Into<i32>,
{
    /// Map a configuration string into its wire value.
    pub fn to_wire(&self, value: &str) -> Option<E> {
        self.entries
            .iter()
            .find(|(key, _)| *key == value)
            .map(|(_, wire)| *wire)
    }

    /// Map a wire value into its configuration string.
    pub fn to_config(&self, wire: E) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, w)| *w == wire)
            .map(|(key, _)| *key)
    }

    /// Map a raw wire code into its configuration string.
    pub fn from_code(&self, code: i32) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, w)| (*w).into() == code)
            .map(|(key, _)| *key)
    }

    /// Ordered configuration strings accepted by this Codec.
    pub fn valid_values(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(key, _)| *key).collect()
    }

    /// Expand a configuration string into its wire code,
    /// pushing an UnknownValue error if it's not part of this Codec.
    pub fn expand(&self, value: &str, scope: Scope, diagnostics: &mut Diagnostics) -> i32 {
        match self.to_wire(value) {
            Some(wire) => wire.into(),
            None => {
                self.unknown(value).push(scope, diagnostics);
                0
            }
        }
    }

    /// Flatten a wire code into its configuration string,
    /// pushing an UnknownCode error if it's not part of this Codec.
    pub fn flatten(&self, code: i32, scope: Scope, diagnostics: &mut Diagnostics) -> String {
        match self.from_code(code) {
            Some(key) => key.to_string(),
            None => {
                Error::UnknownCode {
                    table: self.name,
                    code,
                }
                .push(scope, diagnostics);
                String::new()
            }
        }
    }

    /// Expand the members of a set into their wire codes.
    ///
    /// Set members have no stable position in the document, so members which
    /// aren't part of this Codec are reported together at the set's `scope`.
    pub fn expand_set<'v>(
        &self,
        values: impl IntoIterator<Item = &'v str>,
        scope: Scope,
        diagnostics: &mut Diagnostics,
    ) -> Vec<i32> {
        let mut unknown: Vec<String> = Vec::new();

        let codes = values
            .into_iter()
            .map(|value| match self.to_wire(value) {
                Some(wire) => wire.into(),
                None => {
                    if !unknown.iter().any(|u| u == value) {
                        unknown.push(value.to_string());
                    }
                    0
                }
            })
            .collect();

        match unknown.len() {
            0 => {}
            1 => self.unknown(&unknown[0]).push(scope, diagnostics),
            _ => Error::UnknownSetValues {
                table: self.name,
                values: unknown,
                expected: self.valid_values(),
            }
            .push(scope, diagnostics),
        }
        codes
    }

    pub fn unknown(&self, value: &str) -> Error {
        Error::UnknownValue {
            table: self.name,
            value: value.to_string(),
            expected: self.valid_values(),
        }
    }

    /// Verify that this Codec is a bijection over its entries.
    pub fn check_bijective(&self) -> Result<(), String> {
        for (index, (key, wire)) in self.entries.iter().enumerate() {
            for (other_key, other_wire) in &self.entries[index + 1..] {
                if key == other_key {
                    return Err(format!("{}: string {key:?} is repeated", self.name));
                }
                if wire == other_wire {
                    return Err(format!(
                        "{}: strings {key:?} and {other_key:?} share wire code {}",
                        self.name,
                        (*wire).into()
                    ));
                }
            }
            if self.to_config(*wire) != Some(*key) || self.to_wire(key) != Some(*wire) {
                return Err(format!("{}: {key:?} does not round-trip", self.name));
            }
        }
        Ok(())
    }
}

lazy_static::lazy_static! {
    /// Arbitrary durations accepted by metric time windows, such as "1h30m".
    pub static ref METRIC_DURATION_RE: regex::Regex = regex::Regex::new(METRIC_DURATION_PATTERN).unwrap();
}

pub const METRIC_DURATION_PATTERN: &str =
    r"^(0|([0-9]+y)?([0-9]+w)?([0-9]+d)?([0-9]+h)?([0-9]+m)?([0-9]+s)?([0-9]+ms)?)$";

/// Expand a metric time window, which is either a fixed window of
/// METRIC_TIME_WINDOW or an arbitrary duration matching METRIC_DURATION_RE.
pub fn expand_metric_time_window(
    value: &str,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::MetricTimeWindow {
    use proto::metric_time_window::Type;

    let r#type = if let Some(wire) = METRIC_TIME_WINDOW.to_wire(value) {
        Type::MetricTimeWindowSpecificValue(wire.into())
    } else if !value.is_empty() && METRIC_DURATION_RE.is_match(value) {
        Type::MetricTimeWindowDynamicDuration(value.to_string())
    } else {
        Error::Pattern {
            what: "metric time window or duration",
            value: value.to_string(),
            pattern: METRIC_DURATION_PATTERN,
        }
        .push(scope, diagnostics);
        Type::MetricTimeWindowSpecificValue(0)
    };

    proto::MetricTimeWindow {
        r#type: Some(r#type),
    }
}

pub fn flatten_metric_time_window(
    wire: Option<&proto::MetricTimeWindow>,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> String {
    use proto::metric_time_window::Type;

    match wire.and_then(|w| w.r#type.as_ref()) {
        Some(Type::MetricTimeWindowSpecificValue(code)) => {
            METRIC_TIME_WINDOW.flatten(*code, scope, diagnostics)
        }
        Some(Type::MetricTimeWindowDynamicDuration(duration)) => duration.clone(),
        None => {
            Error::MissingField {
                field: "of_the_last",
            }
            .push(scope, diagnostics);
            String::new()
        }
    }
}

pub static PRIORITY: Codec<proto::AlertDefPriority> = Codec::new(
    "priority",
    &[
        ("P1", proto::AlertDefPriority::P1),
        ("P2", proto::AlertDefPriority::P2),
        ("P3", proto::AlertDefPriority::P3),
        ("P4", proto::AlertDefPriority::P4),
        ("P5", proto::AlertDefPriority::P5OrUnspecified),
    ],
);

pub static NOTIFY_ON: Codec<proto::NotifyOn> = Codec::new(
    "notify on",
    &[
        ("Triggered Only", proto::NotifyOn::TriggeredOnlyUnspecified),
        ("Triggered and Resolved", proto::NotifyOn::TriggeredAndResolved),
    ],
);

pub static DAY_OF_WEEK: Codec<proto::DayOfWeek> = Codec::new(
    "day of week",
    &[
        ("Monday", proto::DayOfWeek::MondayOrUnspecified),
        ("Tuesday", proto::DayOfWeek::Tuesday),
        ("Wednesday", proto::DayOfWeek::Wednesday),
        ("Thursday", proto::DayOfWeek::Thursday),
        ("Friday", proto::DayOfWeek::Friday),
        ("Saturday", proto::DayOfWeek::Saturday),
        ("Sunday", proto::DayOfWeek::Sunday),
    ],
);

pub static LOGS_TIME_WINDOW: Codec<proto::LogsTimeWindowValue> = Codec::new(
    "logs time window",
    &[
        ("5_MINUTES", proto::LogsTimeWindowValue::Minutes5OrUnspecified),
        ("10_MINUTES", proto::LogsTimeWindowValue::Minutes10),
        ("15_MINUTES", proto::LogsTimeWindowValue::Minutes15),
        ("30_MINUTES", proto::LogsTimeWindowValue::Minutes30),
        ("1_HOUR", proto::LogsTimeWindowValue::Hour1),
        ("2_HOURS", proto::LogsTimeWindowValue::Hours2),
        ("6_HOURS", proto::LogsTimeWindowValue::Hours6),
        ("12_HOURS", proto::LogsTimeWindowValue::Hours12),
        ("24_HOURS", proto::LogsTimeWindowValue::Hours24),
        ("36_HOURS", proto::LogsTimeWindowValue::Hours36),
    ],
);

pub static LOGS_RATIO_TIME_WINDOW: Codec<proto::LogsRatioTimeWindowValue> = Codec::new(
    "logs ratio time window",
    &[
        ("5_MINUTES", proto::LogsRatioTimeWindowValue::Minutes5OrUnspecified),
        ("10_MINUTES", proto::LogsRatioTimeWindowValue::Minutes10),
        ("15_MINUTES", proto::LogsRatioTimeWindowValue::Minutes15),
        ("30_MINUTES", proto::LogsRatioTimeWindowValue::Minutes30),
        ("1_HOUR", proto::LogsRatioTimeWindowValue::Hour1),
        ("2_HOURS", proto::LogsRatioTimeWindowValue::Hours2),
        ("4_HOURS", proto::LogsRatioTimeWindowValue::Hours4),
        ("6_HOURS", proto::LogsRatioTimeWindowValue::Hours6),
        ("12_HOURS", proto::LogsRatioTimeWindowValue::Hours12),
        ("24_HOURS", proto::LogsRatioTimeWindowValue::Hours24),
        ("36_HOURS", proto::LogsRatioTimeWindowValue::Hours36),
    ],
);

pub static LOGS_NEW_VALUE_TIME_WINDOW: Codec<proto::LogsNewValueTimeWindowValue> = Codec::new(
    "new value time window",
    &[
        ("12_HOURS", proto::LogsNewValueTimeWindowValue::Hours12OrUnspecified),
        ("24_HOURS", proto::LogsNewValueTimeWindowValue::Hours24),
        ("48_HOURS", proto::LogsNewValueTimeWindowValue::Hours48),
        ("72_HOURS", proto::LogsNewValueTimeWindowValue::Hours72),
        ("1_WEEK", proto::LogsNewValueTimeWindowValue::Week1),
        ("1_MONTH", proto::LogsNewValueTimeWindowValue::Month1),
        ("2_MONTHS", proto::LogsNewValueTimeWindowValue::Months2),
        ("3_MONTHS", proto::LogsNewValueTimeWindowValue::Months3),
    ],
);

pub static LOGS_UNIQUE_VALUE_TIME_WINDOW: Codec<proto::LogsUniqueValueTimeWindowValue> =
    Codec::new(
        "unique value time window",
        &[
            ("1_MINUTE", proto::LogsUniqueValueTimeWindowValue::Minute1OrUnspecified),
            ("5_MINUTES", proto::LogsUniqueValueTimeWindowValue::Minutes5),
            ("10_MINUTES", proto::LogsUniqueValueTimeWindowValue::Minutes10),
            ("15_MINUTES", proto::LogsUniqueValueTimeWindowValue::Minutes15),
            ("20_MINUTES", proto::LogsUniqueValueTimeWindowValue::Minutes20),
            ("30_MINUTES", proto::LogsUniqueValueTimeWindowValue::Minutes30),
            ("1_HOUR", proto::LogsUniqueValueTimeWindowValue::Hour1),
            ("2_HOURS", proto::LogsUniqueValueTimeWindowValue::Hours2),
            ("4_HOURS", proto::LogsUniqueValueTimeWindowValue::Hours4),
            ("6_HOURS", proto::LogsUniqueValueTimeWindowValue::Hours6),
            ("12_HOURS", proto::LogsUniqueValueTimeWindowValue::Hours12),
            ("24_HOURS", proto::LogsUniqueValueTimeWindowValue::Hours24),
            ("36_HOURS", proto::LogsUniqueValueTimeWindowValue::Hours36),
        ],
    );

pub static METRIC_TIME_WINDOW: Codec<proto::MetricTimeWindowValue> = Codec::new(
    "metric time window",
    &[
        ("1_MINUTE", proto::MetricTimeWindowValue::Minutes1OrUnspecified),
        ("5_MINUTES", proto::MetricTimeWindowValue::Minutes5),
        ("10_MINUTES", proto::MetricTimeWindowValue::Minutes10),
        ("15_MINUTES", proto::MetricTimeWindowValue::Minutes15),
        ("20_MINUTES", proto::MetricTimeWindowValue::Minutes20),
        ("30_MINUTES", proto::MetricTimeWindowValue::Minutes30),
        ("1_HOUR", proto::MetricTimeWindowValue::Hour1),
        ("2_HOURS", proto::MetricTimeWindowValue::Hours2),
        ("4_HOURS", proto::MetricTimeWindowValue::Hours4),
        ("6_HOURS", proto::MetricTimeWindowValue::Hours6),
        ("12_HOURS", proto::MetricTimeWindowValue::Hours12),
        ("24_HOURS", proto::MetricTimeWindowValue::Hours24),
        ("36_HOURS", proto::MetricTimeWindowValue::Hours36),
    ],
);

pub static TRACING_TIME_WINDOW: Codec<proto::TracingTimeWindowValue> = Codec::new(
    "tracing time window",
    &[
        ("5_MINUTES", proto::TracingTimeWindowValue::Minutes5OrUnspecified),
        ("10_MINUTES", proto::TracingTimeWindowValue::Minutes10),
        ("15_MINUTES", proto::TracingTimeWindowValue::Minutes15),
        ("20_MINUTES", proto::TracingTimeWindowValue::Minutes20),
        ("30_MINUTES", proto::TracingTimeWindowValue::Minutes30),
        ("1_HOUR", proto::TracingTimeWindowValue::Hour1),
        ("2_HOURS", proto::TracingTimeWindowValue::Hours2),
        ("4_HOURS", proto::TracingTimeWindowValue::Hours4),
        ("6_HOURS", proto::TracingTimeWindowValue::Hours6),
        ("12_HOURS", proto::TracingTimeWindowValue::Hours12),
        ("24_HOURS", proto::TracingTimeWindowValue::Hours24),
        ("36_HOURS", proto::TracingTimeWindowValue::Hours36),
    ],
);

pub static LOGS_THRESHOLD_CONDITION: Codec<proto::LogsThresholdConditionType> = Codec::new(
    "logs threshold condition type",
    &[
        ("MORE_THAN", proto::LogsThresholdConditionType::MoreThanOrUnspecified),
        ("LESS_THAN", proto::LogsThresholdConditionType::LessThan),
    ],
);

pub static LOGS_ANOMALY_CONDITION: Codec<proto::LogsAnomalyConditionType> = Codec::new(
    "logs anomaly condition type",
    &[(
        "MORE_THAN_USUAL",
        proto::LogsAnomalyConditionType::MoreThanUsualOrUnspecified,
    )],
);

pub static LOGS_RATIO_CONDITION: Codec<proto::LogsRatioConditionType> = Codec::new(
    "logs ratio condition type",
    &[
        ("MORE_THAN", proto::LogsRatioConditionType::MoreThanOrUnspecified),
        ("LESS_THAN", proto::LogsRatioConditionType::LessThan),
    ],
);

pub static LOGS_TIME_RELATIVE_CONDITION: Codec<proto::LogsTimeRelativeConditionType> =
    Codec::new(
        "logs time relative condition type",
        &[
            ("MORE_THAN", proto::LogsTimeRelativeConditionType::MoreThanOrUnspecified),
            ("LESS_THAN", proto::LogsTimeRelativeConditionType::LessThan),
        ],
    );

pub static METRIC_THRESHOLD_CONDITION: Codec<proto::MetricThresholdConditionType> = Codec::new(
    "metric threshold condition type",
    &[
        ("MORE_THAN", proto::MetricThresholdConditionType::MoreThanOrUnspecified),
        ("LESS_THAN", proto::MetricThresholdConditionType::LessThan),
        ("MORE_THAN_OR_EQUALS", proto::MetricThresholdConditionType::MoreThanOrEquals),
        ("LESS_THAN_OR_EQUALS", proto::MetricThresholdConditionType::LessThanOrEquals),
    ],
);

pub static METRIC_ANOMALY_CONDITION: Codec<proto::MetricAnomalyConditionType> = Codec::new(
    "metric anomaly condition type",
    &[
        ("MORE_THAN_USUAL", proto::MetricAnomalyConditionType::MoreThanUsualOrUnspecified),
        ("LESS_THAN_USUAL", proto::MetricAnomalyConditionType::LessThanUsual),
    ],
);

pub static TRACING_THRESHOLD_CONDITION: Codec<proto::TracingThresholdConditionType> =
    Codec::new(
        "tracing threshold condition type",
        &[("MORE_THAN", proto::TracingThresholdConditionType::MoreThanOrUnspecified)],
    );

pub static LOG_SEVERITY: Codec<proto::LogSeverity> = Codec::new(
    "log severity",
    &[
        ("Verbose", proto::LogSeverity::VerboseUnspecified),
        ("Debug", proto::LogSeverity::Debug),
        ("Info", proto::LogSeverity::Info),
        ("Warning", proto::LogSeverity::Warning),
        ("Error", proto::LogSeverity::Error),
        ("Critical", proto::LogSeverity::Critical),
    ],
);

pub static LOG_FILTER_OPERATION: Codec<proto::LogFilterOperationType> = Codec::new(
    "log filter operation",
    &[
        ("IS", proto::LogFilterOperationType::IsOrUnspecified),
        ("INCLUDES", proto::LogFilterOperationType::Includes),
        ("ENDS_WITH", proto::LogFilterOperationType::EndsWith),
        ("STARTS_WITH", proto::LogFilterOperationType::StartsWith),
    ],
);

pub static TRACING_FILTER_OPERATION: Codec<proto::TracingFilterOperationType> = Codec::new(
    "tracing filter operation",
    &[
        ("IS", proto::TracingFilterOperationType::IsOrUnspecified),
        ("IS_NOT", proto::TracingFilterOperationType::IsNot),
        ("INCLUDES", proto::TracingFilterOperationType::Includes),
        ("ENDS_WITH", proto::TracingFilterOperationType::EndsWith),
        ("STARTS_WITH", proto::TracingFilterOperationType::StartsWith),
    ],
);

pub static DURATION_UNIT: Codec<proto::DurationUnit> =
    Codec::new("duration unit", &[("HOURS", proto::DurationUnit::Hours)]);

pub static LOGS_RATIO_GROUP_BY_FOR: Codec<proto::LogsRatioGroupByFor> = Codec::new(
    "logs ratio group by for",
    &[
        ("Both", proto::LogsRatioGroupByFor::BothOrUnspecified),
        ("Numerator Only", proto::LogsRatioGroupByFor::NumeratorOnly),
        ("Denominator Only", proto::LogsRatioGroupByFor::DenumeratorOnly),
    ],
);

pub static AUTO_RETIRE_TIMEFRAME: Codec<proto::AutoRetireTimeframe> = Codec::new(
    "auto retire timeframe",
    &[
        ("Never", proto::AutoRetireTimeframe::NeverOrUnspecified),
        ("5_Minutes", proto::AutoRetireTimeframe::Minutes5),
        ("10_Minutes", proto::AutoRetireTimeframe::Minutes10),
        ("1_Hour", proto::AutoRetireTimeframe::Hour1),
        ("2_Hours", proto::AutoRetireTimeframe::Hours2),
        ("6_Hours", proto::AutoRetireTimeframe::Hours6),
        ("12_Hours", proto::AutoRetireTimeframe::Hours12),
        ("24_Hours", proto::AutoRetireTimeframe::Hours24),
    ],
);

pub static LOGS_TIME_RELATIVE_COMPARED_TO: Codec<proto::LogsTimeRelativeComparedTo> =
    Codec::new(
        "logs time relative compared to",
        &[
            ("Previous_hour", proto::LogsTimeRelativeComparedTo::PreviousHourOrUnspecified),
            ("Same_hour_yesterday", proto::LogsTimeRelativeComparedTo::SameHourYesterday),
            ("Same_hour_last_week", proto::LogsTimeRelativeComparedTo::SameHourLastWeek),
            ("Yesterday", proto::LogsTimeRelativeComparedTo::Yesterday),
            ("Same_day_last_week", proto::LogsTimeRelativeComparedTo::SameDayLastWeek),
            ("Same_day_last_month", proto::LogsTimeRelativeComparedTo::SameDayLastMonth),
        ],
    );

pub static FLOW_NEXT_OP: Codec<proto::NextOp> = Codec::new(
    "flow next operator",
    &[
        ("AND", proto::NextOp::AndOrUnspecified),
        ("OR", proto::NextOp::Or),
    ],
);

pub static FLOW_ALERTS_OP: Codec<proto::AlertsOp> = Codec::new(
    "flow alerts operator",
    &[
        ("AND", proto::AlertsOp::AndOrUnspecified),
        ("OR", proto::AlertsOp::Or),
    ],
);

pub static FLOW_TIMEFRAME_TYPE: Codec<proto::TimeframeType> = Codec::new(
    "flow timeframe type",
    &[
        ("Unspecified", proto::TimeframeType::Unspecified),
        ("Up To", proto::TimeframeType::UpTo),
    ],
);

/// Alert types, keyed on their `models::VariantKind::name()`.
pub static ALERT_TYPE: Codec<proto::AlertDefType> = Codec::new(
    "alert type",
    &[
        ("logs_immediate", proto::AlertDefType::LogsImmediateOrUnspecified),
        ("logs_threshold", proto::AlertDefType::LogsThreshold),
        ("logs_anomaly", proto::AlertDefType::LogsAnomaly),
        ("logs_ratio_threshold", proto::AlertDefType::LogsRatioThreshold),
        ("logs_new_value", proto::AlertDefType::LogsNewValue),
        ("logs_unique_count", proto::AlertDefType::LogsUniqueCount),
        ("logs_time_relative_threshold", proto::AlertDefType::LogsTimeRelativeThreshold),
        ("metric_threshold", proto::AlertDefType::MetricThreshold),
        ("metric_anomaly", proto::AlertDefType::MetricAnomaly),
        ("tracing_immediate", proto::AlertDefType::TracingImmediate),
        ("tracing_threshold", proto::AlertDefType::TracingThreshold),
        ("flow", proto::AlertDefType::Flow),
        ("slo_threshold", proto::AlertDefType::SloThreshold),
    ],
);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_every_codec_is_bijective() {
        let checks = [
            PRIORITY.check_bijective(),
            NOTIFY_ON.check_bijective(),
            DAY_OF_WEEK.check_bijective(),
            LOGS_TIME_WINDOW.check_bijective(),
            LOGS_RATIO_TIME_WINDOW.check_bijective(),
            LOGS_NEW_VALUE_TIME_WINDOW.check_bijective(),
            LOGS_UNIQUE_VALUE_TIME_WINDOW.check_bijective(),
            METRIC_TIME_WINDOW.check_bijective(),
            TRACING_TIME_WINDOW.check_bijective(),
            LOGS_THRESHOLD_CONDITION.check_bijective(),
            LOGS_ANOMALY_CONDITION.check_bijective(),
            LOGS_RATIO_CONDITION.check_bijective(),
            LOGS_TIME_RELATIVE_CONDITION.check_bijective(),
            METRIC_THRESHOLD_CONDITION.check_bijective(),
            METRIC_ANOMALY_CONDITION.check_bijective(),
            TRACING_THRESHOLD_CONDITION.check_bijective(),
            LOG_SEVERITY.check_bijective(),
            LOG_FILTER_OPERATION.check_bijective(),
            TRACING_FILTER_OPERATION.check_bijective(),
            DURATION_UNIT.check_bijective(),
            LOGS_RATIO_GROUP_BY_FOR.check_bijective(),
            AUTO_RETIRE_TIMEFRAME.check_bijective(),
            LOGS_TIME_RELATIVE_COMPARED_TO.check_bijective(),
            FLOW_NEXT_OP.check_bijective(),
            FLOW_ALERTS_OP.check_bijective(),
            FLOW_TIMEFRAME_TYPE.check_bijective(),
            ALERT_TYPE.check_bijective(),
        ];

        for check in checks {
            assert_eq!(check, Ok(()));
        }
    }

    #[test]
    fn test_alert_types_follow_variant_kinds() {
        let kinds: Vec<_> = models::VariantKind::all().iter().map(|k| k.name()).collect();
        assert_eq!(ALERT_TYPE.valid_values(), kinds);
    }

    #[test]
    fn test_unknown_values_list_valid_values() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        assert_eq!(PRIORITY.expand("P0", root.push_prop("priority"), &mut diagnostics), 0);
        assert_eq!(PRIORITY.expand("P1", root.push_prop("priority"), &mut diagnostics), 4);

        insta::assert_snapshot!(diagnostics.to_string(), @r#"error: /priority: "P0" is not a valid priority (expected one of "P1", "P2", "P3", "P4", "P5")"#);
    }

    #[test]
    fn test_unknown_codes() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        assert_eq!(DAY_OF_WEEK.flatten(6, root, &mut diagnostics), "Sunday");
        assert_eq!(DAY_OF_WEEK.flatten(7, root, &mut diagnostics), "");
        // DURATION_UNIT doesn't map the unspecified code.
        assert_eq!(DURATION_UNIT.from_code(0), None);

        assert_eq!(
            diagnostics.into_inner()[0].error,
            Error::UnknownCode {
                table: "day of week",
                code: 7
            }
        );
    }

    #[test]
    fn test_metric_time_window_is_fixed_or_duration() {
        use proto::metric_time_window::Type;

        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        let cases = [
            ("10_MINUTES", Some(Type::MetricTimeWindowSpecificValue(2))),
            ("1h30m", Some(Type::MetricTimeWindowDynamicDuration("1h30m".to_string()))),
            ("0", Some(Type::MetricTimeWindowDynamicDuration("0".to_string()))),
            ("2d12h500ms", Some(Type::MetricTimeWindowDynamicDuration("2d12h500ms".to_string()))),
        ];
        for (value, expect) in cases {
            let wire = expand_metric_time_window(value, root, &mut diagnostics);
            assert_eq!(wire.r#type, expect);
            assert_eq!(flatten_metric_time_window(Some(&wire), root, &mut diagnostics), value);
        }
        assert!(diagnostics.is_empty());

        // Units must appear in descending order.
        expand_metric_time_window("30m1h", root.push_prop("of_the_last"), &mut diagnostics);
        expand_metric_time_window("ten minutes", root.push_prop("other"), &mut diagnostics);
        expand_metric_time_window("", root.push_prop("empty"), &mut diagnostics);
        assert_eq!(diagnostics.errors().count(), 3);
    }
}
