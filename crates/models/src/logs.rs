use super::{AlertOverride, LogsFilter};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

/// LogsImmediate alerts fire as soon as a matching log entry is seen.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct LogsImmediate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs_filter: Option<LogsFilter>,
    /// # Log fields included in notification payloads.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub notification_payload_filter: BTreeSet<String>,
}

/// LogsThreshold alerts fire when the count of matching log entries
/// crosses a threshold within a time window.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
#[schemars(example = LogsThreshold::example())]
pub struct LogsThreshold {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs_filter: Option<LogsFilter>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub notification_payload_filter: BTreeSet<String>,
    /// # Rules of the alert, evaluated in order.
    #[validate(length(min = 1, message = "at least one rule is required"))]
    pub rules: Vec<LogsThresholdRule>,
    /// # Handling of groups which stop reporting values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undetected_values_management: Option<UndetectedValuesManagement>,
    /// # Delay before evaluating the alert, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_evaluation_delay: Option<i32>,
}

impl LogsThreshold {
    pub fn example() -> Self {
        Self {
            logs_filter: Some(LogsFilter::example()),
            notification_payload_filter: ["status".to_string()].into(),
            rules: vec![LogsThresholdRule {
                condition: LogsThresholdCondition {
                    threshold: 100.0,
                    time_window: "10_MINUTES".to_string(),
                    condition_type: "MORE_THAN".to_string(),
                },
                r#override: Some(AlertOverride::with_priority("P2")),
            }],
            undetected_values_management: None,
            custom_evaluation_delay: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LogsThresholdRule {
    pub condition: LogsThresholdCondition,
    #[serde(rename = "override", default, skip_serializing_if = "Option::is_none")]
    pub r#override: Option<AlertOverride>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LogsThresholdCondition {
    /// # Count of log entries compared against.
    pub threshold: f64,
    /// # Window over which log entries are counted, such as "10_MINUTES".
    pub time_window: String,
    /// # Comparison, either "MORE_THAN" or "LESS_THAN".
    pub condition_type: String,
}

/// UndetectedValuesManagement controls alerting on groups which stop reporting.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UndetectedValuesManagement {
    /// # Trigger the alert when a group stops reporting values.
    #[serde(default)]
    pub trigger_undetected_values: bool,
    /// # Period after which a silent group is retired, such as "1_Hour" or "Never".
    #[serde(default = "UndetectedValuesManagement::default_auto_retire")]
    pub auto_retire_timeframe: String,
}

impl UndetectedValuesManagement {
    fn default_auto_retire() -> String {
        "Never".to_string()
    }
}

/// LogsAnomaly alerts fire when log counts deviate from their learned baseline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct LogsAnomaly {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs_filter: Option<LogsFilter>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub notification_payload_filter: BTreeSet<String>,
    #[validate(length(min = 1, message = "at least one rule is required"))]
    pub rules: Vec<LogsAnomalyRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_evaluation_delay: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LogsAnomalyRule {
    pub condition: LogsAnomalyCondition,
    #[serde(rename = "override", default, skip_serializing_if = "Option::is_none")]
    pub r#override: Option<AlertOverride>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LogsAnomalyCondition {
    /// # Minimum count of log entries before deviations are considered.
    pub minimum_threshold: f64,
    pub time_window: String,
    /// # Comparison, "MORE_THAN_USUAL".
    pub condition_type: String,
}

/// LogsRatioThreshold alerts compare the ratio of two log queries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct LogsRatioThreshold {
    /// # Logs counted as the ratio's numerator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numerator: Option<LogsFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numerator_alias: Option<String>,
    /// # Logs counted as the ratio's denominator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denominator: Option<LogsFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denominator_alias: Option<String>,
    #[validate(length(min = 1, message = "at least one rule is required"))]
    pub rules: Vec<LogsRatioRule>,
    /// # Which side of the ratio group-by keys apply to.
    /// One of "Both", "Numerator Only" or "Denominator Only".
    #[serde(default = "LogsRatioThreshold::default_group_by_for")]
    pub group_by_for: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub notification_payload_filter: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_evaluation_delay: Option<i32>,
}

impl LogsRatioThreshold {
    fn default_group_by_for() -> String {
        "Both".to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LogsRatioRule {
    pub condition: LogsRatioCondition,
    #[serde(rename = "override", default, skip_serializing_if = "Option::is_none")]
    pub r#override: Option<AlertOverride>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LogsRatioCondition {
    pub threshold: f64,
    pub time_window: String,
    pub condition_type: String,
}

/// LogsNewValue alerts fire when a previously unseen value appears at a keypath.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct LogsNewValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs_filter: Option<LogsFilter>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub notification_payload_filter: BTreeSet<String>,
    #[validate(length(min = 1, message = "at least one rule is required"))]
    pub rules: Vec<LogsNewValueRule>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LogsNewValueRule {
    pub condition: LogsNewValueCondition,
    #[serde(rename = "override", default, skip_serializing_if = "Option::is_none")]
    pub r#override: Option<AlertOverride>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LogsNewValueCondition {
    /// # Keypath whose values are tracked.
    pub keypath_to_track: String,
    /// # Window over which values are remembered, such as "24_HOURS" or "1_WEEK".
    pub time_window: String,
}

/// LogsUniqueCount alerts fire when a keypath has too many distinct values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct LogsUniqueCount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs_filter: Option<LogsFilter>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub notification_payload_filter: BTreeSet<String>,
    /// # Keypath whose distinct values are counted.
    pub unique_count_keypath: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_unique_count_per_group_by_key: Option<i64>,
    #[validate(length(min = 1, message = "at least one rule is required"))]
    pub rules: Vec<LogsUniqueCountRule>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LogsUniqueCountRule {
    pub condition: LogsUniqueCountCondition,
    #[serde(rename = "override", default, skip_serializing_if = "Option::is_none")]
    pub r#override: Option<AlertOverride>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LogsUniqueCountCondition {
    pub max_unique_count: i64,
    pub time_window: String,
}

/// LogsTimeRelativeThreshold alerts compare log counts to an earlier period.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct LogsTimeRelativeThreshold {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs_filter: Option<LogsFilter>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub notification_payload_filter: BTreeSet<String>,
    #[validate(length(min = 1, message = "at least one rule is required"))]
    pub rules: Vec<LogsTimeRelativeRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undetected_values_management: Option<UndetectedValuesManagement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_evaluation_delay: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LogsTimeRelativeRule {
    pub condition: LogsTimeRelativeCondition,
    #[serde(rename = "override", default, skip_serializing_if = "Option::is_none")]
    pub r#override: Option<AlertOverride>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LogsTimeRelativeCondition {
    /// # Ratio of current to earlier log counts.
    pub threshold: f64,
    /// # Earlier period compared against, such as "Same_hour_yesterday".
    pub compared_to: String,
    /// # Ignore an infinite ratio, when the earlier period had no logs.
    #[serde(default)]
    pub ignore_infinity: bool,
    pub condition_type: String,
}
