use super::{AlertOverride, MetricFilter, UndetectedValuesManagement};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// MetricThreshold alerts fire when a PromQL series crosses a threshold.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
#[schemars(example = MetricThreshold::example())]
pub struct MetricThreshold {
    pub metric_filter: MetricFilter,
    #[validate(length(min = 1, message = "at least one rule is required"))]
    pub rules: Vec<MetricThresholdRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undetected_values_management: Option<UndetectedValuesManagement>,
    /// # Handling of missing data points.
    pub missing_values: MissingValues,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_evaluation_delay: Option<i32>,
}

impl MetricThreshold {
    pub fn example() -> Self {
        Self {
            metric_filter: MetricFilter::new("sum(rate(http_errors_total[1m])) by (service)"),
            rules: vec![MetricThresholdRule {
                condition: MetricThresholdCondition {
                    threshold: 5.0,
                    for_over_pct: 80,
                    of_the_last: "10_MINUTES".to_string(),
                    condition_type: "MORE_THAN".to_string(),
                },
                r#override: None,
            }],
            undetected_values_management: None,
            missing_values: MissingValues {
                replace_with_zero: Some(true),
                min_non_null_values_pct: None,
            },
            custom_evaluation_delay: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MetricThresholdRule {
    pub condition: MetricThresholdCondition,
    #[serde(rename = "override", default, skip_serializing_if = "Option::is_none")]
    pub r#override: Option<AlertOverride>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MetricThresholdCondition {
    pub threshold: f64,
    /// # Percentage of the window which must cross the threshold.
    pub for_over_pct: u32,
    /// # Evaluated window.
    /// Either a fixed window such as "10_MINUTES", or a duration like "1h30m".
    pub of_the_last: String,
    /// # One of "MORE_THAN", "LESS_THAN", "MORE_THAN_OR_EQUALS" or "LESS_THAN_OR_EQUALS".
    pub condition_type: String,
}

/// MissingValues sets exactly one of its fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MissingValues {
    /// # Treat missing data points as zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_with_zero: Option<bool>,
    /// # Minimum percentage of non-null data points required to evaluate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_non_null_values_pct: Option<u32>,
}

/// MetricAnomaly alerts fire when a PromQL series deviates from its baseline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct MetricAnomaly {
    pub metric_filter: MetricFilter,
    #[validate(length(min = 1, message = "at least one rule is required"))]
    pub rules: Vec<MetricAnomalyRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_evaluation_delay: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MetricAnomalyRule {
    pub condition: MetricAnomalyCondition,
    #[serde(rename = "override", default, skip_serializing_if = "Option::is_none")]
    pub r#override: Option<AlertOverride>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MetricAnomalyCondition {
    pub threshold: f64,
    pub for_over_pct: u32,
    pub of_the_last: String,
    pub min_non_null_values_pct: u32,
    /// # Either "MORE_THAN_USUAL" or "LESS_THAN_USUAL".
    pub condition_type: String,
}
