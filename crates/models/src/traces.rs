use super::{AlertOverride, TracingFilter};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

/// TracingImmediate alerts fire as soon as a matching span is seen.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct TracingImmediate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracing_filter: Option<TracingFilter>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub notification_payload_filter: BTreeSet<String>,
}

/// TracingThreshold alerts fire when the count of matching spans crosses a threshold.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct TracingThreshold {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracing_filter: Option<TracingFilter>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub notification_payload_filter: BTreeSet<String>,
    #[validate(length(min = 1, message = "at least one rule is required"))]
    pub rules: Vec<TracingThresholdRule>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TracingThresholdRule {
    pub condition: TracingThresholdCondition,
    #[serde(rename = "override", default, skip_serializing_if = "Option::is_none")]
    pub r#override: Option<AlertOverride>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TracingThresholdCondition {
    /// # Count of spans compared against.
    pub span_amount: f64,
    pub time_window: String,
    /// # Comparison, "MORE_THAN".
    pub condition_type: String,
}
