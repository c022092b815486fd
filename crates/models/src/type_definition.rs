use super::{
    Flow, LogsAnomaly, LogsImmediate, LogsNewValue, LogsRatioThreshold, LogsThreshold,
    LogsTimeRelativeThreshold, LogsUniqueCount, MetricAnomaly, MetricThreshold, SloThreshold,
    TracingImmediate, TracingThreshold,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// TypeDefinition holds the parameters of exactly one alert type.
///
/// Unused alert types are explicitly null, rather than omitted,
/// when a TypeDefinition is serialized.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
#[schemars(example = TypeDefinition::example())]
pub struct TypeDefinition {
    #[serde(default)]
    #[validate(nested)]
    pub logs_immediate: Option<LogsImmediate>,
    #[serde(default)]
    #[validate(nested)]
    pub logs_threshold: Option<LogsThreshold>,
    #[serde(default)]
    #[validate(nested)]
    pub logs_anomaly: Option<LogsAnomaly>,
    #[serde(default)]
    #[validate(nested)]
    pub logs_ratio_threshold: Option<LogsRatioThreshold>,
    #[serde(default)]
    #[validate(nested)]
    pub logs_new_value: Option<LogsNewValue>,
    #[serde(default)]
    #[validate(nested)]
    pub logs_unique_count: Option<LogsUniqueCount>,
    #[serde(default)]
    #[validate(nested)]
    pub logs_time_relative_threshold: Option<LogsTimeRelativeThreshold>,
    #[serde(default)]
    #[validate(nested)]
    pub metric_threshold: Option<MetricThreshold>,
    #[serde(default)]
    #[validate(nested)]
    pub metric_anomaly: Option<MetricAnomaly>,
    #[serde(default)]
    #[validate(nested)]
    pub tracing_immediate: Option<TracingImmediate>,
    #[serde(default)]
    #[validate(nested)]
    pub tracing_threshold: Option<TracingThreshold>,
    #[serde(default)]
    #[validate(nested)]
    pub flow: Option<Flow>,
    #[serde(default)]
    #[validate(nested)]
    pub slo_threshold: Option<SloThreshold>,
}

impl TypeDefinition {
    pub fn example() -> Self {
        Self {
            logs_threshold: Some(LogsThreshold::example()),
            ..Default::default()
        }
    }

    /// Kinds of all populated alert types, in the fixed order of VariantKind::all().
    pub fn populated(&self) -> Vec<VariantKind> {
        let Self {
            logs_immediate,
            logs_threshold,
            logs_anomaly,
            logs_ratio_threshold,
            logs_new_value,
            logs_unique_count,
            logs_time_relative_threshold,
            metric_threshold,
            metric_anomaly,
            tracing_immediate,
            tracing_threshold,
            flow,
            slo_threshold,
        } = self;

        [
            (logs_immediate.is_some(), VariantKind::LogsImmediate),
            (logs_threshold.is_some(), VariantKind::LogsThreshold),
            (logs_anomaly.is_some(), VariantKind::LogsAnomaly),
            (logs_ratio_threshold.is_some(), VariantKind::LogsRatioThreshold),
            (logs_new_value.is_some(), VariantKind::LogsNewValue),
            (logs_unique_count.is_some(), VariantKind::LogsUniqueCount),
            (
                logs_time_relative_threshold.is_some(),
                VariantKind::LogsTimeRelativeThreshold,
            ),
            (metric_threshold.is_some(), VariantKind::MetricThreshold),
            (metric_anomaly.is_some(), VariantKind::MetricAnomaly),
            (tracing_immediate.is_some(), VariantKind::TracingImmediate),
            (tracing_threshold.is_some(), VariantKind::TracingThreshold),
            (flow.is_some(), VariantKind::Flow),
            (slo_threshold.is_some(), VariantKind::SloThreshold),
        ]
        .into_iter()
        .filter_map(|(set, kind)| set.then_some(kind))
        .collect()
    }

    /// The single populated alert type, or None if zero or several are set.
    pub fn kind(&self) -> Option<VariantKind> {
        match self.populated().as_slice() {
            [kind] => Some(*kind),
            _ => None,
        }
    }
}

/// VariantKind enumerates the alert types of a TypeDefinition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariantKind {
    LogsImmediate,
    LogsThreshold,
    LogsAnomaly,
    LogsRatioThreshold,
    LogsNewValue,
    LogsUniqueCount,
    LogsTimeRelativeThreshold,
    MetricThreshold,
    MetricAnomaly,
    TracingImmediate,
    TracingThreshold,
    Flow,
    SloThreshold,
}

impl std::fmt::Display for VariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl VariantKind {
    /// Field name of this alert type within a TypeDefinition.
    pub fn name(&self) -> &'static str {
        match self {
            VariantKind::LogsImmediate => "logs_immediate",
            VariantKind::LogsThreshold => "logs_threshold",
            VariantKind::LogsAnomaly => "logs_anomaly",
            VariantKind::LogsRatioThreshold => "logs_ratio_threshold",
            VariantKind::LogsNewValue => "logs_new_value",
            VariantKind::LogsUniqueCount => "logs_unique_count",
            VariantKind::LogsTimeRelativeThreshold => "logs_time_relative_threshold",
            VariantKind::MetricThreshold => "metric_threshold",
            VariantKind::MetricAnomaly => "metric_anomaly",
            VariantKind::TracingImmediate => "tracing_immediate",
            VariantKind::TracingThreshold => "tracing_threshold",
            VariantKind::Flow => "flow",
            VariantKind::SloThreshold => "slo_threshold",
        }
    }

    pub fn all() -> &'static [VariantKind] {
        &[
            VariantKind::LogsImmediate,
            VariantKind::LogsThreshold,
            VariantKind::LogsAnomaly,
            VariantKind::LogsRatioThreshold,
            VariantKind::LogsNewValue,
            VariantKind::LogsUniqueCount,
            VariantKind::LogsTimeRelativeThreshold,
            VariantKind::MetricThreshold,
            VariantKind::MetricAnomaly,
            VariantKind::TracingImmediate,
            VariantKind::TracingThreshold,
            VariantKind::Flow,
            VariantKind::SloThreshold,
        ]
    }

    pub fn from_name(name: &str) -> Option<VariantKind> {
        VariantKind::all()
            .iter()
            .find(|kind| kind.name() == name)
            .copied()
    }

    /// Alert types for which the service, rather than the user, owns grouping keys.
    pub fn forbids_group_by(&self) -> bool {
        matches!(
            self,
            VariantKind::LogsImmediate | VariantKind::LogsNewValue | VariantKind::TracingImmediate
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unused_types_serialize_as_null() {
        let doc = serde_json::to_value(TypeDefinition {
            logs_immediate: Some(LogsImmediate::default()),
            ..Default::default()
        })
        .unwrap();

        let obj = doc.as_object().unwrap();
        assert_eq!(obj.len(), 13);
        assert_eq!(obj["logs_immediate"], json!({}));
        assert_eq!(obj["flow"], json!(null));
        assert_eq!(obj["slo_threshold"], json!(null));
    }

    #[test]
    fn test_populated_kinds() {
        let mut def = TypeDefinition::default();
        assert_eq!(def.populated(), vec![]);
        assert_eq!(def.kind(), None);

        def.flow = Some(Flow::example());
        assert_eq!(def.kind(), Some(VariantKind::Flow));

        def.logs_immediate = Some(LogsImmediate::default());
        assert_eq!(
            def.populated(),
            vec![VariantKind::LogsImmediate, VariantKind::Flow]
        );
        assert_eq!(def.kind(), None);
    }

    #[test]
    fn test_kind_names_are_field_names() {
        let doc = serde_json::to_value(TypeDefinition::default()).unwrap();
        let obj = doc.as_object().unwrap();

        for kind in VariantKind::all() {
            assert!(obj.contains_key(kind.name()));
            assert_eq!(VariantKind::from_name(kind.name()), Some(*kind));
        }
        assert_eq!(VariantKind::from_name("logs_sometimes"), None);
    }
}
