use super::codecs;
use models::{AlertDefinition, AlertOverride, Computed, TypeDefinition, VariantKind};

/// Reconcile a desired alert definition against the previously recorded one,
/// returning the definition which should actually be applied.
///
/// * Every rule gets an explicit override priority. Unset priorities fall back
///   to the top-level priority if it's valid, or to `models::DEFAULT_PRIORITY`.
/// * For metric and new-value alerts, an unspecified group-by is carried
///   from `prior` when the alert's query is unchanged. If the query changed
///   the group-by is left Unresolved, for the service to derive.
///
/// With no `prior`, group-by is left as written.
pub fn reconcile(desired: &AlertDefinition, prior: Option<&AlertDefinition>) -> AlertDefinition {
    let mut out = desired.clone();

    // An invalid top-level priority is reported at /priority alone,
    // and isn't repeated into every rule.
    let fallback = desired
        .priority
        .as_deref()
        .filter(|priority| codecs::PRIORITY.to_wire(priority).is_some())
        .unwrap_or(models::DEFAULT_PRIORITY);

    for r#override in rule_overrides(&mut out.type_definition) {
        r#override
            .get_or_insert_with(AlertOverride::default)
            .priority
            .get_or_insert_with(|| fallback.to_string());
    }

    out.group_by = reconcile_group_by(desired, prior);
    out
}

fn reconcile_group_by(
    desired: &AlertDefinition,
    prior: Option<&AlertDefinition>,
) -> Computed<Vec<String>> {
    let (Computed::Unspecified, Some(prior)) = (&desired.group_by, prior) else {
        return desired.group_by.clone();
    };
    let Some(kind) = desired.type_definition.kind() else {
        return desired.group_by.clone();
    };
    if !matches!(
        kind,
        VariantKind::MetricThreshold | VariantKind::MetricAnomaly | VariantKind::LogsNewValue
    ) {
        return desired.group_by.clone();
    }

    if prior.type_definition.kind() == Some(kind)
        && same_signal(&desired.type_definition, &prior.type_definition)
    {
        tracing::debug!(%kind, "query is unchanged; carrying prior group_by");
        prior.group_by.clone()
    } else {
        tracing::debug!(%kind, "query changed; group_by is left for the service to derive");
        Computed::Unresolved
    }
}

// Whether the fields from which the service derives group-by keys are equal.
// Rule overrides don't take part.
fn same_signal(desired: &TypeDefinition, prior: &TypeDefinition) -> bool {
    match (desired, prior) {
        (
            TypeDefinition {
                metric_threshold: Some(desired),
                ..
            },
            TypeDefinition {
                metric_threshold: Some(prior),
                ..
            },
        ) => desired.metric_filter.promql == prior.metric_filter.promql,
        (
            TypeDefinition {
                metric_anomaly: Some(desired),
                ..
            },
            TypeDefinition {
                metric_anomaly: Some(prior),
                ..
            },
        ) => desired.metric_filter.promql == prior.metric_filter.promql,
        (
            TypeDefinition {
                logs_new_value: Some(desired),
                ..
            },
            TypeDefinition {
                logs_new_value: Some(prior),
                ..
            },
        ) => desired
            .rules
            .iter()
            .map(|r| &r.condition)
            .eq(prior.rules.iter().map(|r| &r.condition)),
        _ => false,
    }
}

// Mutable overrides of every rule of the type definition, in document order.
fn rule_overrides(definition: &mut TypeDefinition) -> Vec<&mut Option<AlertOverride>> {
    let TypeDefinition {
        logs_immediate: _,
        logs_threshold,
        logs_anomaly,
        logs_ratio_threshold,
        logs_new_value,
        logs_unique_count,
        logs_time_relative_threshold,
        metric_threshold,
        metric_anomaly,
        tracing_immediate: _,
        tracing_threshold,
        flow: _,
        slo_threshold,
    } = definition;

    let mut out = Vec::new();

    if let Some(v) = logs_threshold {
        out.extend(v.rules.iter_mut().map(|r| &mut r.r#override));
    }
    if let Some(v) = logs_anomaly {
        out.extend(v.rules.iter_mut().map(|r| &mut r.r#override));
    }
    if let Some(v) = logs_ratio_threshold {
        out.extend(v.rules.iter_mut().map(|r| &mut r.r#override));
    }
    if let Some(v) = logs_new_value {
        out.extend(v.rules.iter_mut().map(|r| &mut r.r#override));
    }
    if let Some(v) = logs_unique_count {
        out.extend(v.rules.iter_mut().map(|r| &mut r.r#override));
    }
    if let Some(v) = logs_time_relative_threshold {
        out.extend(v.rules.iter_mut().map(|r| &mut r.r#override));
    }
    if let Some(v) = metric_threshold {
        out.extend(v.rules.iter_mut().map(|r| &mut r.r#override));
    }
    if let Some(v) = metric_anomaly {
        out.extend(v.rules.iter_mut().map(|r| &mut r.r#override));
    }
    if let Some(v) = tracing_threshold {
        out.extend(v.rules.iter_mut().map(|r| &mut r.r#override));
    }
    if let Some(v) = slo_threshold {
        if let Some(budget) = &mut v.error_budget {
            out.extend(budget.rules.iter_mut().map(|r| &mut r.r#override));
        }
        if let Some(burn_rate) = &mut v.burn_rate {
            out.extend(burn_rate.rules.iter_mut().map(|r| &mut r.r#override));
        }
    }

    out
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn metric_alert(promql: &str, group_by: Option<Vec<&str>>) -> AlertDefinition {
        serde_json::from_value(json!({
            "name": "errors",
            "group_by": group_by,
            "type_definition": {"metric_threshold": {
                "metric_filter": {"promql": promql},
                "missing_values": {"replace_with_zero": true},
                "rules": [{"condition": {
                    "threshold": 1.0,
                    "for_over_pct": 100,
                    "of_the_last": "5_MINUTES",
                    "condition_type": "MORE_THAN",
                }}],
            }},
        }))
        .unwrap()
    }

    fn priorities(alert: &AlertDefinition) -> Vec<Option<String>> {
        alert
            .type_definition
            .metric_threshold
            .as_ref()
            .unwrap()
            .rules
            .iter()
            .map(|r| r.r#override.as_ref().and_then(|o| o.priority.clone()))
            .collect()
    }

    #[test]
    fn test_priority_fallback() {
        let mut desired = metric_alert("sum(x)", None);
        let rules = &mut desired.type_definition.metric_threshold.as_mut().unwrap().rules;
        rules.push(rules[0].clone());
        rules[1].r#override = Some(AlertOverride::with_priority("P1"));

        assert_eq!(
            priorities(&reconcile(&desired, None)),
            vec![Some("P5".to_string()), Some("P1".to_string())]
        );

        desired.priority = Some("P3".to_string());
        assert_eq!(
            priorities(&reconcile(&desired, None)),
            vec![Some("P3".to_string()), Some("P1".to_string())]
        );

        // An override without a priority also falls back.
        desired.type_definition.metric_threshold.as_mut().unwrap().rules[0].r#override =
            Some(AlertOverride::default());
        assert_eq!(
            priorities(&reconcile(&desired, None)),
            vec![Some("P3".to_string()), Some("P1".to_string())]
        );

        // An invalid top-level priority is not copied into rules.
        desired.priority = Some("P9".to_string());
        assert_eq!(
            priorities(&reconcile(&desired, None)),
            vec![Some("P5".to_string()), Some("P1".to_string())]
        );
    }

    #[test]
    fn test_group_by_cases() {
        let service = Computed::Known(vec!["service".to_string()]);
        let prior = metric_alert("sum(x)", Some(vec!["service"]));

        // No prior state: nothing to compare against.
        let desired = metric_alert("sum(x)", None);
        assert_eq!(reconcile(&desired, None).group_by, Computed::Unspecified);

        // Unchanged query carries the prior group-by.
        assert_eq!(reconcile(&desired, Some(&prior)).group_by, service);

        // Changed query leaves it for the service.
        let desired = metric_alert("sum(y)", None);
        assert_eq!(reconcile(&desired, Some(&prior)).group_by, Computed::Unresolved);

        // An explicit group-by always wins.
        let desired = metric_alert("sum(y)", Some(vec!["host"]));
        assert_eq!(
            reconcile(&desired, Some(&prior)).group_by,
            Computed::Known(vec!["host".to_string()])
        );
    }

    #[test]
    fn test_group_by_of_other_kinds_is_untouched() {
        let mut prior = AlertDefinition::example();
        prior.group_by = Computed::Known(vec!["service".to_string()]);

        let mut desired = AlertDefinition::example();
        desired.group_by = Computed::Unspecified;

        assert_eq!(reconcile(&desired, Some(&prior)).group_by, Computed::Unspecified);
    }

    #[test]
    fn test_new_value_signal_is_its_rule_conditions() {
        let alert = |keypath: &str| -> AlertDefinition {
            serde_json::from_value(json!({
                "name": "new users",
                "type_definition": {"logs_new_value": {
                    "rules": [{"condition": {"keypath_to_track": keypath, "time_window": "24_HOURS"}}],
                }},
            }))
            .unwrap()
        };
        let mut prior = alert("user.id");
        prior.group_by = Computed::Known(vec!["user.id".to_string()]);

        assert_eq!(
            reconcile(&alert("user.id"), Some(&prior)).group_by,
            prior.group_by
        );
        assert_eq!(
            reconcile(&alert("user.email"), Some(&prior)).group_by,
            Computed::Unresolved
        );
    }
}
