use super::logs::{expand_undetected_values, flatten_undetected_values};
use crate::{filters, rules, Diagnostics, Error, Scope};
use proto_alerts::alerts as proto;

pub fn expand_metric_threshold(
    variant: &models::MetricThreshold,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::MetricThresholdType {
    let models::MetricThreshold {
        metric_filter,
        rules,
        undetected_values_management,
        missing_values,
        custom_evaluation_delay,
    } = variant;

    proto::MetricThresholdType {
        metric_filter: Some(filters::expand_metric_filter(metric_filter)),
        rules: rules::expand_rules(rules, scope, diagnostics, rules::expand_metric_threshold_rule),
        undetected_values_management: undetected_values_management.as_ref().map(|u| {
            expand_undetected_values(u, scope.push_prop("undetected_values_management"), diagnostics)
        }),
        missing_values: expand_missing_values(
            missing_values,
            scope.push_prop("missing_values"),
            diagnostics,
        ),
        evaluation_delay_ms: *custom_evaluation_delay,
    }
}

pub fn flatten_metric_threshold(
    variant: &proto::MetricThresholdType,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::MetricThreshold {
    let proto::MetricThresholdType {
        metric_filter,
        rules,
        undetected_values_management,
        missing_values,
        evaluation_delay_ms,
    } = variant;

    models::MetricThreshold {
        metric_filter: filters::flatten_metric_filter(
            metric_filter.as_ref(),
            scope.push_prop("metric_filter"),
            diagnostics,
        ),
        rules: rules::flatten_rules(
            rules,
            scope,
            diagnostics,
            rules::flatten_metric_threshold_rule,
        ),
        undetected_values_management: undetected_values_management.as_ref().map(|u| {
            flatten_undetected_values(u, scope.push_prop("undetected_values_management"), diagnostics)
        }),
        missing_values: flatten_missing_values(
            missing_values.as_ref(),
            scope.push_prop("missing_values"),
            diagnostics,
        ),
        custom_evaluation_delay: *evaluation_delay_ms,
    }
}

fn expand_missing_values(
    missing_values: &models::MissingValues,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> Option<proto::MetricMissingValues> {
    use proto::metric_missing_values::MissingValues;

    let missing_values = match missing_values {
        models::MissingValues {
            replace_with_zero: Some(replace),
            min_non_null_values_pct: None,
        } => MissingValues::ReplaceWithZero(*replace),
        models::MissingValues {
            replace_with_zero: None,
            min_non_null_values_pct: Some(pct),
        } => {
            rules::check_pct("min_non_null_values_pct", *pct, scope, diagnostics);
            MissingValues::MinNonNullValuesPct(*pct)
        }
        _ => {
            Error::ExactlyOneOf {
                fields: &["replace_with_zero", "min_non_null_values_pct"],
            }
            .push(scope, diagnostics);
            return None;
        }
    };

    Some(proto::MetricMissingValues {
        missing_values: Some(missing_values),
    })
}

fn flatten_missing_values(
    missing_values: Option<&proto::MetricMissingValues>,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::MissingValues {
    use proto::metric_missing_values::MissingValues;

    match missing_values.and_then(|m| m.missing_values.as_ref()) {
        Some(MissingValues::ReplaceWithZero(replace)) => models::MissingValues {
            replace_with_zero: Some(*replace),
            min_non_null_values_pct: None,
        },
        Some(MissingValues::MinNonNullValuesPct(pct)) => models::MissingValues {
            replace_with_zero: None,
            min_non_null_values_pct: Some(*pct),
        },
        None => {
            Error::MissingField {
                field: "missing_values",
            }
            .push(scope, diagnostics);
            models::MissingValues::default()
        }
    }
}

pub fn expand_metric_anomaly(
    variant: &models::MetricAnomaly,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::MetricAnomalyType {
    let models::MetricAnomaly {
        metric_filter,
        rules,
        custom_evaluation_delay,
    } = variant;

    proto::MetricAnomalyType {
        metric_filter: Some(filters::expand_metric_filter(metric_filter)),
        rules: rules::expand_rules(rules, scope, diagnostics, rules::expand_metric_anomaly_rule),
        evaluation_delay_ms: *custom_evaluation_delay,
    }
}

pub fn flatten_metric_anomaly(
    variant: &proto::MetricAnomalyType,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::MetricAnomaly {
    let proto::MetricAnomalyType {
        metric_filter,
        rules,
        evaluation_delay_ms,
    } = variant;

    models::MetricAnomaly {
        metric_filter: filters::flatten_metric_filter(
            metric_filter.as_ref(),
            scope.push_prop("metric_filter"),
            diagnostics,
        ),
        rules: rules::flatten_rules(rules, scope, diagnostics, rules::flatten_metric_anomaly_rule),
        custom_evaluation_delay: *evaluation_delay_ms,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_missing_values_are_exclusive() {
        let root = Scope::Root;

        for (replace_with_zero, min_non_null_values_pct, ok) in [
            (Some(true), None, true),
            (Some(false), None, true),
            (None, Some(30), true),
            (None, None, false),
            (Some(true), Some(30), false),
        ] {
            let mut diagnostics = Diagnostics::new();
            let missing = models::MissingValues {
                replace_with_zero,
                min_non_null_values_pct,
            };
            let wire = expand_missing_values(&missing, root, &mut diagnostics);
            assert_eq!(wire.is_some(), ok);
            assert_eq!(diagnostics.is_empty(), ok);

            if let Some(wire) = wire {
                assert_eq!(
                    flatten_missing_values(Some(&wire), root, &mut diagnostics),
                    missing
                );
            }
        }
    }

    #[test]
    fn test_min_non_null_pct_range() {
        let mut diagnostics = Diagnostics::new();
        let missing = models::MissingValues {
            replace_with_zero: None,
            min_non_null_values_pct: Some(120),
        };
        expand_missing_values(&missing, Scope::Root, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics.into_inner()[0].path,
            "/min_non_null_values_pct".to_string()
        );
    }
}
