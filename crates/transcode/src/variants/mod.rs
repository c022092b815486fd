use super::{Diagnostics, Error, Scope};
use models::{TypeDefinition, VariantKind};
use proto_alerts::alerts as proto;
use proto_alerts::alerts::alert_def_properties::TypeDefinition as Wire;

mod flow;
mod logs;
mod metrics;
mod slo;
mod traces;

/// Expand a type definition into its wire union.
///
/// Exactly one variant must be populated. Every populated variant is expanded,
/// so that problems within each are reported alongside a
/// MultipleVariantsSelected error.
pub fn expand_type_definition(
    definition: &TypeDefinition,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> Option<(Wire, VariantKind)> {
    let TypeDefinition {
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
    } = definition;

    let mut expanded = Vec::new();

    if let Some(v) = logs_immediate {
        let scope = scope.push_prop(VariantKind::LogsImmediate.name());
        expanded.push(Wire::LogsImmediate(logs::expand_logs_immediate(v, scope, diagnostics)));
    }
    if let Some(v) = logs_threshold {
        let scope = scope.push_prop(VariantKind::LogsThreshold.name());
        expanded.push(Wire::LogsThreshold(logs::expand_logs_threshold(v, scope, diagnostics)));
    }
    if let Some(v) = logs_anomaly {
        let scope = scope.push_prop(VariantKind::LogsAnomaly.name());
        expanded.push(Wire::LogsAnomaly(logs::expand_logs_anomaly(v, scope, diagnostics)));
    }
    if let Some(v) = logs_ratio_threshold {
        let scope = scope.push_prop(VariantKind::LogsRatioThreshold.name());
        expanded.push(Wire::LogsRatioThreshold(logs::expand_logs_ratio_threshold(
            v,
            scope,
            diagnostics,
        )));
    }
    if let Some(v) = logs_new_value {
        let scope = scope.push_prop(VariantKind::LogsNewValue.name());
        expanded.push(Wire::LogsNewValue(logs::expand_logs_new_value(v, scope, diagnostics)));
    }
    if let Some(v) = logs_unique_count {
        let scope = scope.push_prop(VariantKind::LogsUniqueCount.name());
        expanded.push(Wire::LogsUniqueCount(logs::expand_logs_unique_count(
            v,
            scope,
            diagnostics,
        )));
    }
    if let Some(v) = logs_time_relative_threshold {
        let scope = scope.push_prop(VariantKind::LogsTimeRelativeThreshold.name());
        expanded.push(Wire::LogsTimeRelativeThreshold(
            logs::expand_logs_time_relative_threshold(v, scope, diagnostics),
        ));
    }
    if let Some(v) = metric_threshold {
        let scope = scope.push_prop(VariantKind::MetricThreshold.name());
        expanded.push(Wire::MetricThreshold(metrics::expand_metric_threshold(
            v,
            scope,
            diagnostics,
        )));
    }
    if let Some(v) = metric_anomaly {
        let scope = scope.push_prop(VariantKind::MetricAnomaly.name());
        expanded.push(Wire::MetricAnomaly(metrics::expand_metric_anomaly(v, scope, diagnostics)));
    }
    if let Some(v) = tracing_immediate {
        let scope = scope.push_prop(VariantKind::TracingImmediate.name());
        expanded.push(Wire::TracingImmediate(traces::expand_tracing_immediate(
            v,
            scope,
            diagnostics,
        )));
    }
    if let Some(v) = tracing_threshold {
        let scope = scope.push_prop(VariantKind::TracingThreshold.name());
        expanded.push(Wire::TracingThreshold(traces::expand_tracing_threshold(
            v,
            scope,
            diagnostics,
        )));
    }
    if let Some(v) = flow {
        let scope = scope.push_prop(VariantKind::Flow.name());
        expanded.push(Wire::Flow(flow::expand_flow(v, scope, diagnostics)));
    }
    if let Some(v) = slo_threshold {
        let scope = scope.push_prop(VariantKind::SloThreshold.name());
        expanded.push(Wire::SloThreshold(slo::expand_slo_threshold(v, scope, diagnostics)));
    }

    match expanded.len() {
        0 => {
            Error::NoVariantSelected.push(scope, diagnostics);
            None
        }
        1 => expanded.pop().map(|wire| {
            let kind = wire_kind(&wire);
            (wire, kind)
        }),
        _ => {
            Error::MultipleVariantsSelected {
                variants: expanded.iter().map(|w| wire_kind(w).name()).collect(),
            }
            .push(scope, diagnostics);
            None
        }
    }
}

/// Flatten a wire union into a type definition, where exactly the
/// corresponding variant is populated and all others are explicitly None.
pub fn flatten_type_definition(
    wire: Option<&Wire>,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> Option<(TypeDefinition, VariantKind)> {
    let Some(wire) = wire else {
        Error::UnrecognizedVariant.push(scope, diagnostics);
        return None;
    };
    let kind = wire_kind(wire);
    let scope = scope.push_prop(kind.name());
    let mut out = TypeDefinition::default();

    match wire {
        Wire::LogsImmediate(v) => {
            out.logs_immediate = Some(logs::flatten_logs_immediate(v, scope, diagnostics))
        }
        Wire::LogsThreshold(v) => {
            out.logs_threshold = Some(logs::flatten_logs_threshold(v, scope, diagnostics))
        }
        Wire::LogsAnomaly(v) => {
            out.logs_anomaly = Some(logs::flatten_logs_anomaly(v, scope, diagnostics))
        }
        Wire::LogsRatioThreshold(v) => {
            out.logs_ratio_threshold =
                Some(logs::flatten_logs_ratio_threshold(v, scope, diagnostics))
        }
        Wire::LogsNewValue(v) => {
            out.logs_new_value = Some(logs::flatten_logs_new_value(v, scope, diagnostics))
        }
        Wire::LogsUniqueCount(v) => {
            out.logs_unique_count = Some(logs::flatten_logs_unique_count(v, scope, diagnostics))
        }
        Wire::LogsTimeRelativeThreshold(v) => {
            out.logs_time_relative_threshold =
                Some(logs::flatten_logs_time_relative_threshold(v, scope, diagnostics))
        }
        Wire::MetricThreshold(v) => {
            out.metric_threshold = Some(metrics::flatten_metric_threshold(v, scope, diagnostics))
        }
        Wire::MetricAnomaly(v) => {
            out.metric_anomaly = Some(metrics::flatten_metric_anomaly(v, scope, diagnostics))
        }
        Wire::TracingImmediate(v) => {
            out.tracing_immediate = Some(traces::flatten_tracing_immediate(v, scope, diagnostics))
        }
        Wire::TracingThreshold(v) => {
            out.tracing_threshold = Some(traces::flatten_tracing_threshold(v, scope, diagnostics))
        }
        Wire::Flow(v) => out.flow = Some(flow::flatten_flow(v, scope, diagnostics)),
        Wire::SloThreshold(v) => {
            out.slo_threshold = Some(slo::flatten_slo_threshold(v, scope, diagnostics))
        }
    }

    Some((out, kind))
}

/// Kind of a wire union.
pub fn wire_kind(wire: &Wire) -> VariantKind {
    match wire {
        Wire::LogsImmediate(_) => VariantKind::LogsImmediate,
        Wire::LogsThreshold(_) => VariantKind::LogsThreshold,
        Wire::LogsAnomaly(_) => VariantKind::LogsAnomaly,
        Wire::LogsRatioThreshold(_) => VariantKind::LogsRatioThreshold,
        Wire::LogsNewValue(_) => VariantKind::LogsNewValue,
        Wire::LogsUniqueCount(_) => VariantKind::LogsUniqueCount,
        Wire::LogsTimeRelativeThreshold(_) => VariantKind::LogsTimeRelativeThreshold,
        Wire::MetricThreshold(_) => VariantKind::MetricThreshold,
        Wire::MetricAnomaly(_) => VariantKind::MetricAnomaly,
        Wire::TracingImmediate(_) => VariantKind::TracingImmediate,
        Wire::TracingThreshold(_) => VariantKind::TracingThreshold,
        Wire::Flow(_) => VariantKind::Flow,
        Wire::SloThreshold(_) => VariantKind::SloThreshold,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_flatten_sets_exactly_one_variant() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        let wire = Wire::TracingImmediate(proto::TracingImmediateType::default());
        let (definition, kind) = flatten_type_definition(Some(&wire), root, &mut diagnostics).unwrap();

        assert_eq!(kind, VariantKind::TracingImmediate);
        assert_eq!(definition.populated(), vec![VariantKind::TracingImmediate]);
        assert!(diagnostics.is_empty());

        // Unset slots serialize as explicit nulls.
        let doc = serde_json::to_value(&definition).unwrap();
        assert_eq!(doc["logs_threshold"], serde_json::Value::Null);
        assert_eq!(doc.as_object().unwrap().len(), VariantKind::all().len());
    }

    #[test]
    fn test_unrecognized_variant() {
        let mut diagnostics = Diagnostics::new();
        assert!(flatten_type_definition(None, Scope::Root, &mut diagnostics).is_none());
        assert_eq!(
            diagnostics.into_inner()[0].error,
            Error::UnrecognizedVariant
        );
    }

    #[test]
    fn test_zero_or_many_variants_are_rejected() {
        let root = Scope::Root;
        let type_definition = root.push_prop("type_definition");

        let mut diagnostics = Diagnostics::new();
        let empty = TypeDefinition::default();
        assert!(expand_type_definition(&empty, type_definition, &mut diagnostics).is_none());

        let mut many = TypeDefinition::example();
        many.logs_immediate = Some(Default::default());
        many.flow = Some(models::Flow::example());

        let mut more = Diagnostics::new();
        assert!(expand_type_definition(&many, type_definition, &mut more).is_none());

        insta::assert_snapshot!(format!("{diagnostics}{more}"), @r"
        error: /type_definition: type_definition must set one alert type, but none is set
        error: /type_definition: type_definition must set exactly one alert type, but logs_immediate, logs_threshold, flow are set
        ");
    }

    #[test]
    fn test_every_variant_round_trips() {
        let root = Scope::Root;

        for definition in fixtures() {
            let mut diagnostics = Diagnostics::new();

            let (wire, kind) =
                expand_type_definition(&definition, root, &mut diagnostics).unwrap();
            assert_eq!(Some(kind), definition.kind());

            let (back, back_kind) =
                flatten_type_definition(Some(&wire), root, &mut diagnostics).unwrap();
            assert_eq!(back_kind, kind);
            assert_eq!(back, definition, "{kind}");
            assert!(diagnostics.is_empty(), "{kind}: {diagnostics}");
        }
    }

    fn fixtures() -> Vec<TypeDefinition> {
        let fixture = serde_json::json!([
            {"logs_immediate": {
                "logs_filter": {"simple_filter": {"lucene_query": "level:error"}},
                "notification_payload_filter": ["message", "host"],
            }},
            {"logs_threshold": {
                "logs_filter": {"simple_filter": {"label_filters": {"severities": ["Error"]}}},
                "rules": [
                    {"condition": {"threshold": 10.0, "time_window": "10_MINUTES", "condition_type": "MORE_THAN"},
                     "override": {"priority": "P2"}},
                    {"condition": {"threshold": 1.0, "time_window": "1_HOUR", "condition_type": "LESS_THAN"}},
                ],
                "undetected_values_management": {"trigger_undetected_values": true, "auto_retire_timeframe": "6_Hours"},
                "custom_evaluation_delay": 60000,
            }},
            {"logs_anomaly": {
                "rules": [{"condition": {"minimum_threshold": 5.0, "time_window": "24_HOURS", "condition_type": "MORE_THAN_USUAL"}}],
            }},
            {"logs_ratio_threshold": {
                "numerator": {"simple_filter": {"lucene_query": "status:5*"}},
                "numerator_alias": "errors",
                "denominator_alias": "all",
                "rules": [{"condition": {"threshold": 0.2, "time_window": "4_HOURS", "condition_type": "MORE_THAN"}}],
                "group_by_for": "Numerator Only",
            }},
            {"logs_new_value": {
                "rules": [{"condition": {"keypath_to_track": "user.id", "time_window": "1_MONTH"}}],
            }},
            {"logs_unique_count": {
                "unique_count_keypath": "client.ip",
                "max_unique_count_per_group_by_key": 50,
                "rules": [{"condition": {"max_unique_count": 1000, "time_window": "20_MINUTES"}}],
            }},
            {"logs_time_relative_threshold": {
                "rules": [{"condition": {"threshold": 2.0, "compared_to": "Same_day_last_week", "ignore_infinity": true, "condition_type": "MORE_THAN"}}],
            }},
            {"metric_threshold": {
                "metric_filter": {"promql": "sum(rate(errors[5m]))"},
                "missing_values": {"min_non_null_values_pct": 40},
                "rules": [{"condition": {"threshold": 3.5, "for_over_pct": 50, "of_the_last": "2h30m", "condition_type": "MORE_THAN_OR_EQUALS"}}],
            }},
            {"metric_anomaly": {
                "metric_filter": {"promql": "avg(latency)"},
                "rules": [{"condition": {"threshold": 1.0, "for_over_pct": 10, "of_the_last": "12_HOURS", "min_non_null_values_pct": 80, "condition_type": "LESS_THAN_USUAL"}}],
            }},
            {"tracing_immediate": {
                "tracing_filter": {"latency_threshold_ms": 1500.0},
            }},
            {"tracing_threshold": {
                "tracing_filter": {"tracing_label_filters": {"operation_name": [{"values": ["GET /cart"], "operation": "STARTS_WITH"}]}},
                "rules": [{"condition": {"span_amount": 100.0, "time_window": "20_MINUTES", "condition_type": "MORE_THAN"}}],
            }},
            {"flow": models::Flow::example()},
            {"slo_threshold": {
                "slo_definition": {"slo_id": "slo-1"},
                "error_budget": {"rules": [{"condition": {"threshold": 80.0}, "override": {"priority": "P3"}}]},
            }},
        ]);

        serde_json::from_value(fixture).unwrap()
    }
}
