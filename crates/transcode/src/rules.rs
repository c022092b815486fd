use super::{codecs, Diagnostics, Error, Scope};
use proto_alerts::alerts as proto;

/// Expand each of `rules` through `expand`, preserving order.
/// A failed rule doesn't stop the pass: every rule is expanded,
/// and all errors are collected into `diagnostics`.
pub fn expand_rules<R, W>(
    rules: &[R],
    scope: Scope,
    diagnostics: &mut Diagnostics,
    mut expand: impl FnMut(&R, Scope, &mut Diagnostics) -> W,
) -> Vec<W> {
    let scope = scope.push_prop("rules");
    rules
        .iter()
        .enumerate()
        .map(|(index, rule)| expand(rule, scope.push_item(index), diagnostics))
        .collect()
}

/// Flatten each of wire `rules` through `flatten`, preserving order.
/// Like expand_rules, every rule is visited.
pub fn flatten_rules<W, R>(
    rules: &[W],
    scope: Scope,
    diagnostics: &mut Diagnostics,
    mut flatten: impl FnMut(&W, Scope, &mut Diagnostics) -> R,
) -> Vec<R> {
    let scope = scope.push_prop("rules");
    rules
        .iter()
        .enumerate()
        .map(|(index, rule)| flatten(rule, scope.push_item(index), diagnostics))
        .collect()
}

pub fn expand_override(
    r#override: Option<&models::AlertOverride>,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> Option<proto::AlertDefOverride> {
    let models::AlertOverride { priority } = r#override?;
    let scope = scope.push_prop("override");

    let priority = match priority {
        Some(priority) => {
            codecs::PRIORITY.expand(priority, scope.push_prop("priority"), diagnostics)
        }
        None => proto::AlertDefPriority::P5OrUnspecified as i32,
    };
    Some(proto::AlertDefOverride { priority })
}

pub fn flatten_override(
    r#override: Option<&proto::AlertDefOverride>,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> Option<models::AlertOverride> {
    let proto::AlertDefOverride { priority } = r#override?;
    let scope = scope.push_prop("override");

    Some(models::AlertOverride {
        priority: Some(codecs::PRIORITY.flatten(
            *priority,
            scope.push_prop("priority"),
            diagnostics,
        )),
    })
}

/// Unwrap a field which the service must return,
/// pushing a MissingField error if it didn't.
pub fn required<T: Clone + Default>(
    value: Option<&T>,
    field: &'static str,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> T {
    match value {
        Some(value) => value.clone(),
        None => {
            Error::MissingField { field }.push(scope.push_prop(field), diagnostics);
            T::default()
        }
    }
}

/// Verify a percentage is within 0 to 100.
pub fn check_pct(field: &'static str, value: u32, scope: Scope, diagnostics: &mut Diagnostics) {
    if value > 100 {
        Error::OutOfRange {
            field,
            value,
            min: 0,
            max: 100,
        }
        .push(scope.push_prop(field), diagnostics);
    }
}

/// Unwrap a condition message which the service must return.
fn condition<'w, C>(
    condition: Option<&'w C>,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> Option<&'w C> {
    if condition.is_none() {
        Error::MissingField { field: "condition" }
            .push(scope.push_prop("condition"), diagnostics);
    }
    condition
}

fn missing_window(scope: Scope, diagnostics: &mut Diagnostics) -> String {
    Error::MissingField {
        field: "time_window",
    }
    .push(scope, diagnostics);
    String::new()
}

pub fn expand_logs_threshold_rule(
    rule: &models::LogsThresholdRule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::LogsThresholdRule {
    let models::LogsThresholdRule {
        condition:
            models::LogsThresholdCondition {
                threshold,
                time_window,
                condition_type,
            },
        r#override,
    } = rule;
    let c_scope = scope.push_prop("condition");

    let time_window = proto::LogsTimeWindow {
        r#type: Some(proto::logs_time_window::Type::LogsTimeWindowSpecificValue(
            codecs::LOGS_TIME_WINDOW.expand(
                time_window,
                c_scope.push_prop("time_window"),
                diagnostics,
            ),
        )),
    };

    proto::LogsThresholdRule {
        condition: Some(proto::LogsThresholdCondition {
            threshold: Some(*threshold),
            time_window: Some(time_window),
            condition_type: codecs::LOGS_THRESHOLD_CONDITION.expand(
                condition_type,
                c_scope.push_prop("condition_type"),
                diagnostics,
            ),
        }),
        r#override: expand_override(r#override.as_ref(), scope, diagnostics),
    }
}

pub fn flatten_logs_threshold_rule(
    rule: &proto::LogsThresholdRule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::LogsThresholdRule {
    let c_scope = scope.push_prop("condition");
    let condition = condition(rule.condition.as_ref(), scope, diagnostics)
        .cloned()
        .unwrap_or_default();

    let time_window = match condition.time_window.and_then(|w| w.r#type) {
        Some(proto::logs_time_window::Type::LogsTimeWindowSpecificValue(code)) => {
            codecs::LOGS_TIME_WINDOW.flatten(code, c_scope.push_prop("time_window"), diagnostics)
        }
        None => missing_window(c_scope.push_prop("time_window"), diagnostics),
    };

    models::LogsThresholdRule {
        condition: models::LogsThresholdCondition {
            threshold: required(condition.threshold.as_ref(), "threshold", c_scope, diagnostics),
            time_window,
            condition_type: codecs::LOGS_THRESHOLD_CONDITION.flatten(
                condition.condition_type,
                c_scope.push_prop("condition_type"),
                diagnostics,
            ),
        },
        r#override: flatten_override(rule.r#override.as_ref(), scope, diagnostics),
    }
}

pub fn expand_logs_anomaly_rule(
    rule: &models::LogsAnomalyRule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::LogsAnomalyRule {
    let models::LogsAnomalyRule {
        condition:
            models::LogsAnomalyCondition {
                minimum_threshold,
                time_window,
                condition_type,
            },
        r#override,
    } = rule;
    let c_scope = scope.push_prop("condition");

    let time_window = proto::LogsTimeWindow {
        r#type: Some(proto::logs_time_window::Type::LogsTimeWindowSpecificValue(
            codecs::LOGS_TIME_WINDOW.expand(
                time_window,
                c_scope.push_prop("time_window"),
                diagnostics,
            ),
        )),
    };

    proto::LogsAnomalyRule {
        condition: Some(proto::LogsAnomalyCondition {
            minimum_threshold: Some(*minimum_threshold),
            time_window: Some(time_window),
            condition_type: codecs::LOGS_ANOMALY_CONDITION.expand(
                condition_type,
                c_scope.push_prop("condition_type"),
                diagnostics,
            ),
        }),
        r#override: expand_override(r#override.as_ref(), scope, diagnostics),
    }
}

pub fn flatten_logs_anomaly_rule(
    rule: &proto::LogsAnomalyRule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::LogsAnomalyRule {
    let c_scope = scope.push_prop("condition");
    let condition = condition(rule.condition.as_ref(), scope, diagnostics)
        .cloned()
        .unwrap_or_default();

    let time_window = match condition.time_window.and_then(|w| w.r#type) {
        Some(proto::logs_time_window::Type::LogsTimeWindowSpecificValue(code)) => {
            codecs::LOGS_TIME_WINDOW.flatten(code, c_scope.push_prop("time_window"), diagnostics)
        }
        None => missing_window(c_scope.push_prop("time_window"), diagnostics),
    };

    models::LogsAnomalyRule {
        condition: models::LogsAnomalyCondition {
            minimum_threshold: required(
                condition.minimum_threshold.as_ref(),
                "minimum_threshold",
                c_scope,
                diagnostics,
            ),
            time_window,
            condition_type: codecs::LOGS_ANOMALY_CONDITION.flatten(
                condition.condition_type,
                c_scope.push_prop("condition_type"),
                diagnostics,
            ),
        },
        r#override: flatten_override(rule.r#override.as_ref(), scope, diagnostics),
    }
}

pub fn expand_logs_ratio_rule(
    rule: &models::LogsRatioRule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::LogsRatioRule {
    let models::LogsRatioRule {
        condition:
            models::LogsRatioCondition {
                threshold,
                time_window,
                condition_type,
            },
        r#override,
    } = rule;
    let c_scope = scope.push_prop("condition");

    let time_window = proto::LogsRatioTimeWindow {
        r#type: Some(
            proto::logs_ratio_time_window::Type::LogsRatioTimeWindowSpecificValue(
                codecs::LOGS_RATIO_TIME_WINDOW.expand(
                    time_window,
                    c_scope.push_prop("time_window"),
                    diagnostics,
                ),
            ),
        ),
    };

    proto::LogsRatioRule {
        condition: Some(proto::LogsRatioCondition {
            threshold: Some(*threshold),
            time_window: Some(time_window),
            condition_type: codecs::LOGS_RATIO_CONDITION.expand(
                condition_type,
                c_scope.push_prop("condition_type"),
                diagnostics,
            ),
        }),
        r#override: expand_override(r#override.as_ref(), scope, diagnostics),
    }
}

pub fn flatten_logs_ratio_rule(
    rule: &proto::LogsRatioRule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::LogsRatioRule {
    let c_scope = scope.push_prop("condition");
    let condition = condition(rule.condition.as_ref(), scope, diagnostics)
        .cloned()
        .unwrap_or_default();

    let time_window = match condition.time_window.and_then(|w| w.r#type) {
        Some(proto::logs_ratio_time_window::Type::LogsRatioTimeWindowSpecificValue(code)) => {
            codecs::LOGS_RATIO_TIME_WINDOW.flatten(
                code,
                c_scope.push_prop("time_window"),
                diagnostics,
            )
        }
        None => missing_window(c_scope.push_prop("time_window"), diagnostics),
    };

    models::LogsRatioRule {
        condition: models::LogsRatioCondition {
            threshold: required(condition.threshold.as_ref(), "threshold", c_scope, diagnostics),
            time_window,
            condition_type: codecs::LOGS_RATIO_CONDITION.flatten(
                condition.condition_type,
                c_scope.push_prop("condition_type"),
                diagnostics,
            ),
        },
        r#override: flatten_override(rule.r#override.as_ref(), scope, diagnostics),
    }
}

pub fn expand_logs_new_value_rule(
    rule: &models::LogsNewValueRule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::LogsNewValueRule {
    let models::LogsNewValueRule {
        condition:
            models::LogsNewValueCondition {
                keypath_to_track,
                time_window,
            },
        r#override,
    } = rule;
    let c_scope = scope.push_prop("condition");

    let time_window = proto::LogsNewValueTimeWindow {
        r#type: Some(
            proto::logs_new_value_time_window::Type::LogsNewValueTimeWindowSpecificValue(
                codecs::LOGS_NEW_VALUE_TIME_WINDOW.expand(
                    time_window,
                    c_scope.push_prop("time_window"),
                    diagnostics,
                ),
            ),
        ),
    };

    proto::LogsNewValueRule {
        condition: Some(proto::LogsNewValueCondition {
            keypath_to_track: Some(keypath_to_track.clone()),
            time_window: Some(time_window),
        }),
        r#override: expand_override(r#override.as_ref(), scope, diagnostics),
    }
}

pub fn flatten_logs_new_value_rule(
    rule: &proto::LogsNewValueRule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::LogsNewValueRule {
    let c_scope = scope.push_prop("condition");
    let condition = condition(rule.condition.as_ref(), scope, diagnostics)
        .cloned()
        .unwrap_or_default();

    let time_window = match condition.time_window.and_then(|w| w.r#type) {
        Some(proto::logs_new_value_time_window::Type::LogsNewValueTimeWindowSpecificValue(
            code,
        )) => codecs::LOGS_NEW_VALUE_TIME_WINDOW.flatten(
            code,
            c_scope.push_prop("time_window"),
            diagnostics,
        ),
        None => missing_window(c_scope.push_prop("time_window"), diagnostics),
    };

    models::LogsNewValueRule {
        condition: models::LogsNewValueCondition {
            keypath_to_track: required(
                condition.keypath_to_track.as_ref(),
                "keypath_to_track",
                c_scope,
                diagnostics,
            ),
            time_window,
        },
        r#override: flatten_override(rule.r#override.as_ref(), scope, diagnostics),
    }
}

pub fn expand_logs_unique_count_rule(
    rule: &models::LogsUniqueCountRule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::LogsUniqueCountRule {
    let models::LogsUniqueCountRule {
        condition:
            models::LogsUniqueCountCondition {
                max_unique_count,
                time_window,
            },
        r#override,
    } = rule;
    let c_scope = scope.push_prop("condition");

    let time_window = proto::LogsUniqueValueTimeWindow {
        r#type: Some(
            proto::logs_unique_value_time_window::Type::LogsUniqueValueTimeWindowSpecificValue(
                codecs::LOGS_UNIQUE_VALUE_TIME_WINDOW.expand(
                    time_window,
                    c_scope.push_prop("time_window"),
                    diagnostics,
                ),
            ),
        ),
    };

    proto::LogsUniqueCountRule {
        condition: Some(proto::LogsUniqueCountCondition {
            max_unique_count: Some(*max_unique_count),
            time_window: Some(time_window),
        }),
        r#override: expand_override(r#override.as_ref(), scope, diagnostics),
    }
}

pub fn flatten_logs_unique_count_rule(
    rule: &proto::LogsUniqueCountRule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::LogsUniqueCountRule {
    use proto::logs_unique_value_time_window::Type;

    let c_scope = scope.push_prop("condition");
    let condition = condition(rule.condition.as_ref(), scope, diagnostics)
        .cloned()
        .unwrap_or_default();

    let time_window = match condition.time_window.and_then(|w| w.r#type) {
        Some(Type::LogsUniqueValueTimeWindowSpecificValue(code)) => codecs::LOGS_UNIQUE_VALUE_TIME_WINDOW
            .flatten(code, c_scope.push_prop("time_window"), diagnostics),
        None => missing_window(c_scope.push_prop("time_window"), diagnostics),
    };

    models::LogsUniqueCountRule {
        condition: models::LogsUniqueCountCondition {
            max_unique_count: required(
                condition.max_unique_count.as_ref(),
                "max_unique_count",
                c_scope,
                diagnostics,
            ),
            time_window,
        },
        r#override: flatten_override(rule.r#override.as_ref(), scope, diagnostics),
    }
}

pub fn expand_logs_time_relative_rule(
    rule: &models::LogsTimeRelativeRule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::LogsTimeRelativeRule {
    let models::LogsTimeRelativeRule {
        condition:
            models::LogsTimeRelativeCondition {
                threshold,
                compared_to,
                ignore_infinity,
                condition_type,
            },
        r#override,
    } = rule;
    let c_scope = scope.push_prop("condition");

    proto::LogsTimeRelativeRule {
        condition: Some(proto::LogsTimeRelativeCondition {
            threshold: Some(*threshold),
            compared_to: codecs::LOGS_TIME_RELATIVE_COMPARED_TO.expand(
                compared_to,
                c_scope.push_prop("compared_to"),
                diagnostics,
            ),
            ignore_infinity: Some(*ignore_infinity),
            condition_type: codecs::LOGS_TIME_RELATIVE_CONDITION.expand(
                condition_type,
                c_scope.push_prop("condition_type"),
                diagnostics,
            ),
        }),
        r#override: expand_override(r#override.as_ref(), scope, diagnostics),
    }
}

pub fn flatten_logs_time_relative_rule(
    rule: &proto::LogsTimeRelativeRule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::LogsTimeRelativeRule {
    let c_scope = scope.push_prop("condition");
    let condition = condition(rule.condition.as_ref(), scope, diagnostics)
        .cloned()
        .unwrap_or_default();

    models::LogsTimeRelativeRule {
        condition: models::LogsTimeRelativeCondition {
            threshold: required(condition.threshold.as_ref(), "threshold", c_scope, diagnostics),
            compared_to: codecs::LOGS_TIME_RELATIVE_COMPARED_TO.flatten(
                condition.compared_to,
                c_scope.push_prop("compared_to"),
                diagnostics,
            ),
            ignore_infinity: condition.ignore_infinity.unwrap_or_default(),
            condition_type: codecs::LOGS_TIME_RELATIVE_CONDITION.flatten(
                condition.condition_type,
                c_scope.push_prop("condition_type"),
                diagnostics,
            ),
        },
        r#override: flatten_override(rule.r#override.as_ref(), scope, diagnostics),
    }
}

pub fn expand_metric_threshold_rule(
    rule: &models::MetricThresholdRule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::MetricThresholdRule {
    let models::MetricThresholdRule {
        condition:
            models::MetricThresholdCondition {
                threshold,
                for_over_pct,
                of_the_last,
                condition_type,
            },
        r#override,
    } = rule;
    let c_scope = scope.push_prop("condition");

    check_pct("for_over_pct", *for_over_pct, c_scope, diagnostics);

    proto::MetricThresholdRule {
        condition: Some(proto::MetricThresholdCondition {
            threshold: Some(*threshold),
            for_over_pct: Some(*for_over_pct),
            of_the_last: Some(codecs::expand_metric_time_window(
                of_the_last,
                c_scope.push_prop("of_the_last"),
                diagnostics,
            )),
            condition_type: codecs::METRIC_THRESHOLD_CONDITION.expand(
                condition_type,
                c_scope.push_prop("condition_type"),
                diagnostics,
            ),
        }),
        r#override: expand_override(r#override.as_ref(), scope, diagnostics),
    }
}

pub fn flatten_metric_threshold_rule(
    rule: &proto::MetricThresholdRule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::MetricThresholdRule {
    let c_scope = scope.push_prop("condition");
    let condition = condition(rule.condition.as_ref(), scope, diagnostics)
        .cloned()
        .unwrap_or_default();

    models::MetricThresholdRule {
        condition: models::MetricThresholdCondition {
            threshold: required(condition.threshold.as_ref(), "threshold", c_scope, diagnostics),
            for_over_pct: condition.for_over_pct.unwrap_or_default(),
            of_the_last: codecs::flatten_metric_time_window(
                condition.of_the_last.as_ref(),
                c_scope.push_prop("of_the_last"),
                diagnostics,
            ),
            condition_type: codecs::METRIC_THRESHOLD_CONDITION.flatten(
                condition.condition_type,
                c_scope.push_prop("condition_type"),
                diagnostics,
            ),
        },
        r#override: flatten_override(rule.r#override.as_ref(), scope, diagnostics),
    }
}

pub fn expand_metric_anomaly_rule(
    rule: &models::MetricAnomalyRule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::MetricAnomalyRule {
    let models::MetricAnomalyRule {
        condition:
            models::MetricAnomalyCondition {
                threshold,
                for_over_pct,
                of_the_last,
                min_non_null_values_pct,
                condition_type,
            },
        r#override,
    } = rule;
    let c_scope = scope.push_prop("condition");

    check_pct("for_over_pct", *for_over_pct, c_scope, diagnostics);
    check_pct(
        "min_non_null_values_pct",
        *min_non_null_values_pct,
        c_scope,
        diagnostics,
    );

    proto::MetricAnomalyRule {
        condition: Some(proto::MetricAnomalyCondition {
            threshold: Some(*threshold),
            for_over_pct: Some(*for_over_pct),
            of_the_last: Some(codecs::expand_metric_time_window(
                of_the_last,
                c_scope.push_prop("of_the_last"),
                diagnostics,
            )),
            min_non_null_values_pct: Some(*min_non_null_values_pct),
            condition_type: codecs::METRIC_ANOMALY_CONDITION.expand(
                condition_type,
                c_scope.push_prop("condition_type"),
                diagnostics,
            ),
        }),
        r#override: expand_override(r#override.as_ref(), scope, diagnostics),
    }
}

pub fn flatten_metric_anomaly_rule(
    rule: &proto::MetricAnomalyRule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::MetricAnomalyRule {
    let c_scope = scope.push_prop("condition");
    let condition = condition(rule.condition.as_ref(), scope, diagnostics)
        .cloned()
        .unwrap_or_default();

    models::MetricAnomalyRule {
        condition: models::MetricAnomalyCondition {
            threshold: required(condition.threshold.as_ref(), "threshold", c_scope, diagnostics),
            for_over_pct: condition.for_over_pct.unwrap_or_default(),
            of_the_last: codecs::flatten_metric_time_window(
                condition.of_the_last.as_ref(),
                c_scope.push_prop("of_the_last"),
                diagnostics,
            ),
            min_non_null_values_pct: condition.min_non_null_values_pct.unwrap_or_default(),
            condition_type: codecs::METRIC_ANOMALY_CONDITION.flatten(
                condition.condition_type,
                c_scope.push_prop("condition_type"),
                diagnostics,
            ),
        },
        r#override: flatten_override(rule.r#override.as_ref(), scope, diagnostics),
    }
}

pub fn expand_tracing_threshold_rule(
    rule: &models::TracingThresholdRule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::TracingThresholdRule {
    let models::TracingThresholdRule {
        condition:
            models::TracingThresholdCondition {
                span_amount,
                time_window,
                condition_type,
            },
        r#override,
    } = rule;
    let c_scope = scope.push_prop("condition");

    let time_window = proto::TracingTimeWindow {
        r#type: Some(proto::tracing_time_window::Type::TracingTimeWindowValue(
            codecs::TRACING_TIME_WINDOW.expand(
                time_window,
                c_scope.push_prop("time_window"),
                diagnostics,
            ),
        )),
    };

    proto::TracingThresholdRule {
        condition: Some(proto::TracingThresholdCondition {
            span_amount: Some(*span_amount),
            time_window: Some(time_window),
            condition_type: codecs::TRACING_THRESHOLD_CONDITION.expand(
                condition_type,
                c_scope.push_prop("condition_type"),
                diagnostics,
            ),
        }),
        r#override: expand_override(r#override.as_ref(), scope, diagnostics),
    }
}

pub fn flatten_tracing_threshold_rule(
    rule: &proto::TracingThresholdRule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::TracingThresholdRule {
    let c_scope = scope.push_prop("condition");
    let condition = condition(rule.condition.as_ref(), scope, diagnostics)
        .cloned()
        .unwrap_or_default();

    let time_window = match condition.time_window.and_then(|w| w.r#type) {
        Some(proto::tracing_time_window::Type::TracingTimeWindowValue(code)) => {
            codecs::TRACING_TIME_WINDOW.flatten(code, c_scope.push_prop("time_window"), diagnostics)
        }
        None => missing_window(c_scope.push_prop("time_window"), diagnostics),
    };

    models::TracingThresholdRule {
        condition: models::TracingThresholdCondition {
            span_amount: required(
                condition.span_amount.as_ref(),
                "span_amount",
                c_scope,
                diagnostics,
            ),
            time_window,
            condition_type: codecs::TRACING_THRESHOLD_CONDITION.flatten(
                condition.condition_type,
                c_scope.push_prop("condition_type"),
                diagnostics,
            ),
        },
        r#override: flatten_override(rule.r#override.as_ref(), scope, diagnostics),
    }
}

pub fn expand_slo_rule(
    rule: &models::SloRule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::SloThresholdRule {
    let models::SloRule {
        condition: models::SloCondition { threshold },
        r#override,
    } = rule;

    proto::SloThresholdRule {
        condition: Some(proto::SloThresholdCondition {
            threshold: Some(*threshold),
        }),
        r#override: expand_override(r#override.as_ref(), scope, diagnostics),
    }
}

pub fn flatten_slo_rule(
    rule: &proto::SloThresholdRule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::SloRule {
    let c_scope = scope.push_prop("condition");
    let condition = condition(rule.condition.as_ref(), scope, diagnostics)
        .cloned()
        .unwrap_or_default();

    models::SloRule {
        condition: models::SloCondition {
            threshold: required(condition.threshold.as_ref(), "threshold", c_scope, diagnostics),
        },
        r#override: flatten_override(rule.r#override.as_ref(), scope, diagnostics),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn threshold_rule(window: &str, condition_type: &str) -> models::LogsThresholdRule {
        models::LogsThresholdRule {
            condition: models::LogsThresholdCondition {
                threshold: 10.0,
                time_window: window.to_string(),
                condition_type: condition_type.to_string(),
            },
            r#override: Some(models::AlertOverride::with_priority("P2")),
        }
    }

    #[test]
    fn test_rule_order_is_preserved() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        let rules = vec![
            threshold_rule("1_HOUR", "MORE_THAN"),
            threshold_rule("5_MINUTES", "LESS_THAN"),
            threshold_rule("36_HOURS", "MORE_THAN"),
        ];
        let wire = expand_rules(&rules, root, &mut diagnostics, expand_logs_threshold_rule);
        let back = flatten_rules(&wire, root, &mut diagnostics, flatten_logs_threshold_rule);

        assert_eq!(back, rules);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_every_rule_error_is_collected() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        let mut rules = vec![
            threshold_rule("1_DAY", "MORE_THAN"),
            threshold_rule("1_HOUR", "MORE_THAN"),
            threshold_rule("1_HOUR", "ABOVE"),
        ];
        rules[1].r#override = Some(models::AlertOverride::with_priority("P9"));

        let wire = expand_rules(&rules, root, &mut diagnostics, expand_logs_threshold_rule);
        assert_eq!(wire.len(), 3);

        let paths: Vec<_> = diagnostics.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/rules/0/condition/time_window",
                "/rules/1/override/priority",
                "/rules/2/condition/condition_type",
            ]
        );
    }

    #[test]
    fn test_missing_condition_fields() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        let wire = vec![
            proto::LogsThresholdRule::default(),
            proto::LogsThresholdRule {
                condition: Some(proto::LogsThresholdCondition::default()),
                r#override: None,
            },
        ];
        flatten_rules(&wire, root, &mut diagnostics, flatten_logs_threshold_rule);

        insta::assert_snapshot!(diagnostics.to_string(), @r"
        error: /rules/0/condition: alerts service response is missing required field condition
        error: /rules/0/condition/time_window: alerts service response is missing required field time_window
        error: /rules/0/condition/threshold: alerts service response is missing required field threshold
        error: /rules/1/condition/time_window: alerts service response is missing required field time_window
        error: /rules/1/condition/threshold: alerts service response is missing required field threshold
        ");
    }

    #[test]
    fn test_metric_percentages_are_checked() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        let rule = models::MetricAnomalyRule {
            condition: models::MetricAnomalyCondition {
                threshold: 1.0,
                for_over_pct: 101,
                of_the_last: "1h".to_string(),
                min_non_null_values_pct: 100,
                condition_type: "LESS_THAN_USUAL".to_string(),
            },
            r#override: None,
        };
        let wire = expand_metric_anomaly_rule(&rule, root, &mut diagnostics);

        assert_eq!(
            diagnostics.iter().map(|d| d.error.clone()).collect::<Vec<_>>(),
            vec![Error::OutOfRange {
                field: "for_over_pct",
                value: 101,
                min: 0,
                max: 100
            }]
        );
        let back = flatten_metric_anomaly_rule(&wire, root, &mut Diagnostics::new());
        assert_eq!(back, rule);
    }

    #[test]
    fn test_override_priority() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        let wire = expand_override(
            Some(&models::AlertOverride::with_priority("P1")),
            root,
            &mut diagnostics,
        );
        assert_eq!(wire, Some(proto::AlertDefOverride { priority: 4 }));
        assert_eq!(
            flatten_override(wire.as_ref(), root, &mut diagnostics),
            Some(models::AlertOverride::with_priority("P1"))
        );
        assert_eq!(expand_override(None, root, &mut diagnostics), None);
    }
}
