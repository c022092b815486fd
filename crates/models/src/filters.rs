use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// LogsFilter selects the log entries an alert evaluates.
/// An absent filter matches all logs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, JsonSchema)]
#[serde(deny_unknown_fields)]
#[schemars(example = LogsFilter::example())]
pub struct LogsFilter {
    /// # Lucene query and label filters of the logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple_filter: Option<SimpleFilter>,
}

impl LogsFilter {
    pub fn example() -> Self {
        Self {
            simple_filter: Some(SimpleFilter {
                lucene_query: Some("status:5*".to_string()),
                label_filters: Some(LabelFilters::example()),
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SimpleFilter {
    /// # Lucene query matched against log entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lucene_query: Option<String>,
    /// # Filters over the labels of log entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_filters: Option<LabelFilters>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LabelFilters {
    /// # Filters over application names.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub application_name: BTreeSet<LabelFilter>,
    /// # Filters over subsystem names.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub subsystem_name: BTreeSet<LabelFilter>,
    /// # Severities of matched log entries.
    /// Values are "Verbose", "Debug", "Info", "Warning", "Error" or "Critical".
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub severities: BTreeSet<String>,
}

impl LabelFilters {
    pub fn example() -> Self {
        Self {
            application_name: [LabelFilter::new("checkout", "IS")].into(),
            subsystem_name: [LabelFilter::new("api-", "STARTS_WITH")].into(),
            severities: ["Error".to_string(), "Critical".to_string()].into(),
        }
    }
}

/// LabelFilter matches a label value using an operation.
#[derive(
    Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema,
)]
#[serde(deny_unknown_fields)]
pub struct LabelFilter {
    /// # Value to match.
    pub value: String,
    /// # Matching operation.
    /// One of "IS", "INCLUDES", "ENDS_WITH" or "STARTS_WITH".
    #[serde(default = "super::default_filter_operation")]
    pub operation: String,
}

impl LabelFilter {
    pub fn new(value: &str, operation: &str) -> Self {
        Self {
            value: value.to_string(),
            operation: operation.to_string(),
        }
    }
}

/// MetricFilter selects the metric series an alert evaluates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MetricFilter {
    /// # PromQL query of the metric.
    pub promql: String,
}

impl MetricFilter {
    pub fn new(promql: &str) -> Self {
        Self {
            promql: promql.to_string(),
        }
    }
}

/// TracingFilter selects the spans an alert evaluates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, JsonSchema)]
#[serde(deny_unknown_fields)]
#[schemars(example = TracingFilter::example())]
pub struct TracingFilter {
    /// # Minimum latency of matched spans, in milliseconds.
    /// Must be a non-negative whole number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_threshold_ms: Option<f64>,
    /// # Filters over the labels and fields of spans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracing_label_filters: Option<TracingLabelFilters>,
}

impl TracingFilter {
    pub fn example() -> Self {
        Self {
            latency_threshold_ms: Some(250.0),
            tracing_label_filters: Some(TracingLabelFilters {
                application_name: [TracingFilterType::new(&["checkout"], "IS")].into(),
                service_name: [TracingFilterType::new(&["payments", "cart"], "IS")].into(),
                span_fields: [TracingSpanFieldFilter {
                    key: "http.method".to_string(),
                    filter_type: TracingFilterType::new(&["GET"], "IS_NOT"),
                }]
                .into(),
                ..Default::default()
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TracingLabelFilters {
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub application_name: BTreeSet<TracingFilterType>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub subsystem_name: BTreeSet<TracingFilterType>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub service_name: BTreeSet<TracingFilterType>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub operation_name: BTreeSet<TracingFilterType>,
    /// # Filters over span fields, keyed by field name.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub span_fields: BTreeSet<TracingSpanFieldFilter>,
}

/// TracingFilterType matches any of a set of values using an operation.
#[derive(
    Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema,
)]
#[serde(deny_unknown_fields)]
pub struct TracingFilterType {
    /// # Values to match.
    pub values: BTreeSet<String>,
    /// # Matching operation.
    /// One of "IS", "IS_NOT", "INCLUDES", "ENDS_WITH" or "STARTS_WITH".
    #[serde(default = "super::default_filter_operation")]
    pub operation: String,
}

impl TracingFilterType {
    pub fn new(values: &[&str], operation: &str) -> Self {
        Self {
            values: values.iter().map(|v| v.to_string()).collect(),
            operation: operation.to_string(),
        }
    }
}

#[derive(
    Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema,
)]
#[serde(deny_unknown_fields)]
pub struct TracingSpanFieldFilter {
    /// # Span field name.
    pub key: String,
    pub filter_type: TracingFilterType,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_defaults_to_is() {
        let filters: LabelFilters = serde_json::from_value(json!({
            "application_name": [{"value": "a"}, {"value": "b", "operation": "INCLUDES"}],
            "severities": ["Error", "Error", "Info"],
        }))
        .unwrap();

        assert_eq!(
            filters.application_name,
            [LabelFilter::new("a", "IS"), LabelFilter::new("b", "INCLUDES")].into()
        );
        // Duplicate severities collapse, as a set.
        assert_eq!(filters.severities.len(), 2);
    }
}
