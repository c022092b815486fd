use super::{codecs, Diagnostics, Error, Scope};
use proto_alerts::alerts as proto;
use std::collections::BTreeSet;

pub fn expand_logs_filter(
    filter: Option<&models::LogsFilter>,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> Option<proto::LogsFilter> {
    let models::LogsFilter { simple_filter } = filter?;

    let filter_type = simple_filter.as_ref().map(|simple| {
        let scope = scope.push_prop("simple_filter");
        let models::SimpleFilter {
            lucene_query,
            label_filters,
        } = simple;

        proto::logs_filter::FilterType::SimpleFilter(proto::LogsSimpleFilter {
            lucene_query: lucene_query.clone(),
            label_filters: label_filters.as_ref().map(|l| {
                expand_label_filters(l, scope.push_prop("label_filters"), diagnostics)
            }),
        })
    });

    Some(proto::LogsFilter { filter_type })
}

fn expand_label_filters(
    filters: &models::LabelFilters,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::LabelFilters {
    let models::LabelFilters {
        application_name,
        subsystem_name,
        severities,
    } = filters;

    let severities = codecs::LOG_SEVERITY.expand_set(
        severities.iter().map(String::as_str),
        scope.push_prop("severities"),
        diagnostics,
    );

    proto::LabelFilters {
        application_name: expand_label_filter_set(
            application_name,
            scope.push_prop("application_name"),
            diagnostics,
        ),
        subsystem_name: expand_label_filter_set(
            subsystem_name,
            scope.push_prop("subsystem_name"),
            diagnostics,
        ),
        severities,
    }
}

fn expand_label_filter_set(
    filters: &BTreeSet<models::LabelFilter>,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> Vec<proto::LabelFilterType> {
    let operations = codecs::LOG_FILTER_OPERATION.expand_set(
        filters.iter().map(|f| f.operation.as_str()),
        scope,
        diagnostics,
    );

    filters
        .iter()
        .zip(operations)
        .map(|(models::LabelFilter { value, .. }, operation)| proto::LabelFilterType {
            value: Some(value.clone()),
            operation,
        })
        .collect()
}

pub fn flatten_logs_filter(
    filter: Option<&proto::LogsFilter>,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> Option<models::LogsFilter> {
    let proto::LogsFilter { filter_type } = filter?;

    let simple_filter = filter_type.as_ref().map(|filter_type| {
        let scope = scope.push_prop("simple_filter");
        let proto::logs_filter::FilterType::SimpleFilter(proto::LogsSimpleFilter {
            lucene_query,
            label_filters,
        }) = filter_type;

        models::SimpleFilter {
            lucene_query: lucene_query.clone(),
            label_filters: label_filters.as_ref().map(|l| {
                flatten_label_filters(l, scope.push_prop("label_filters"), diagnostics)
            }),
        }
    });

    Some(models::LogsFilter { simple_filter })
}

fn flatten_label_filters(
    filters: &proto::LabelFilters,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::LabelFilters {
    let proto::LabelFilters {
        application_name,
        subsystem_name,
        severities,
    } = filters;

    let severities = {
        let scope = scope.push_prop("severities");
        severities
            .iter()
            .enumerate()
            .map(|(index, code)| {
                codecs::LOG_SEVERITY.flatten(*code, scope.push_item(index), diagnostics)
            })
            .collect()
    };

    models::LabelFilters {
        application_name: flatten_label_filter_set(
            application_name,
            scope.push_prop("application_name"),
            diagnostics,
        ),
        subsystem_name: flatten_label_filter_set(
            subsystem_name,
            scope.push_prop("subsystem_name"),
            diagnostics,
        ),
        severities,
    }
}

fn flatten_label_filter_set(
    filters: &[proto::LabelFilterType],
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> BTreeSet<models::LabelFilter> {
    filters
        .iter()
        .enumerate()
        .map(|(index, proto::LabelFilterType { value, operation })| {
            let scope = scope.push_item(index);

            let value = value.clone().unwrap_or_else(|| {
                Error::MissingField { field: "value" }.push(scope.push_prop("value"), diagnostics);
                String::new()
            });
            models::LabelFilter {
                value,
                operation: codecs::LOG_FILTER_OPERATION.flatten(
                    *operation,
                    scope.push_prop("operation"),
                    diagnostics,
                ),
            }
        })
        .collect()
}

pub fn expand_metric_filter(filter: &models::MetricFilter) -> proto::MetricFilter {
    proto::MetricFilter {
        r#type: Some(proto::metric_filter::Type::Promql(filter.promql.clone())),
    }
}

pub fn flatten_metric_filter(
    filter: Option<&proto::MetricFilter>,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::MetricFilter {
    match filter.and_then(|f| f.r#type.as_ref()) {
        Some(proto::metric_filter::Type::Promql(promql)) => models::MetricFilter {
            promql: promql.clone(),
        },
        None => {
            Error::MissingField {
                field: "metric_filter",
            }
            .push(scope, diagnostics);
            models::MetricFilter {
                promql: String::new(),
            }
        }
    }
}

pub fn expand_tracing_filter(
    filter: Option<&models::TracingFilter>,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> Option<proto::TracingFilter> {
    let models::TracingFilter {
        latency_threshold_ms,
        tracing_label_filters,
    } = filter?;

    let latency_threshold_ms = latency_threshold_ms.and_then(|latency| {
        let latency_ms = latency_to_wire(latency);
        if latency_ms.is_none() {
            Error::InvalidLatency { value: latency }
                .push(scope.push_prop("latency_threshold_ms"), diagnostics);
        }
        latency_ms
    });

    let tracing_label_filters = tracing_label_filters.as_ref().map(|filters| {
        let scope = scope.push_prop("tracing_label_filters");
        let models::TracingLabelFilters {
            application_name,
            subsystem_name,
            service_name,
            operation_name,
            span_fields,
        } = filters;

        let span_fields = {
            let operations = codecs::TRACING_FILTER_OPERATION.expand_set(
                span_fields.iter().map(|f| f.filter_type.operation.as_str()),
                scope.push_prop("span_fields"),
                diagnostics,
            );
            span_fields
                .iter()
                .zip(operations)
                .map(|(models::TracingSpanFieldFilter { key, filter_type }, operation)| {
                    proto::TracingSpanFieldsFilterType {
                        key: Some(key.clone()),
                        filter_type: Some(proto::TracingFilterType {
                            values: filter_type.values.iter().cloned().collect(),
                            operation,
                        }),
                    }
                })
                .collect()
        };

        proto::TracingLabelFilters {
            application_name: expand_tracing_filter_set(
                application_name,
                scope.push_prop("application_name"),
                diagnostics,
            ),
            subsystem_name: expand_tracing_filter_set(
                subsystem_name,
                scope.push_prop("subsystem_name"),
                diagnostics,
            ),
            service_name: expand_tracing_filter_set(
                service_name,
                scope.push_prop("service_name"),
                diagnostics,
            ),
            operation_name: expand_tracing_filter_set(
                operation_name,
                scope.push_prop("operation_name"),
                diagnostics,
            ),
            span_fields,
        }
    });

    Some(proto::TracingFilter {
        filter_type: Some(proto::tracing_filter::FilterType::SimpleFilter(
            proto::TracingSimpleFilter {
                tracing_label_filters,
                latency_threshold_ms,
            },
        )),
    })
}

/// Map a latency into whole, non-negative milliseconds.
fn latency_to_wire(latency: f64) -> Option<u64> {
    // u64::MAX rounds up to 2^64 as an f64, which is out of range.
    if latency.is_finite() && latency >= 0.0 && latency.fract() == 0.0 && latency < u64::MAX as f64
    {
        Some(latency as u64)
    } else {
        None
    }
}

fn expand_tracing_filter_set(
    filters: &BTreeSet<models::TracingFilterType>,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> Vec<proto::TracingFilterType> {
    let operations = codecs::TRACING_FILTER_OPERATION.expand_set(
        filters.iter().map(|f| f.operation.as_str()),
        scope,
        diagnostics,
    );

    filters
        .iter()
        .zip(operations)
        .map(|(filter, operation)| proto::TracingFilterType {
            values: filter.values.iter().cloned().collect(),
            operation,
        })
        .collect()
}

pub fn flatten_tracing_filter(
    filter: Option<&proto::TracingFilter>,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> Option<models::TracingFilter> {
    let proto::TracingFilter { filter_type } = filter?;

    let Some(proto::tracing_filter::FilterType::SimpleFilter(proto::TracingSimpleFilter {
        tracing_label_filters,
        latency_threshold_ms,
    })) = filter_type
    else {
        return Some(models::TracingFilter::default());
    };

    let tracing_label_filters = tracing_label_filters.as_ref().map(|filters| {
        let scope = scope.push_prop("tracing_label_filters");
        let proto::TracingLabelFilters {
            application_name,
            subsystem_name,
            service_name,
            operation_name,
            span_fields,
        } = filters;

        let span_fields = {
            let scope = scope.push_prop("span_fields");
            span_fields
                .iter()
                .enumerate()
                .map(|(index, proto::TracingSpanFieldsFilterType { key, filter_type })| {
                    let scope = scope.push_item(index);

                    let key = key.clone().unwrap_or_else(|| {
                        Error::MissingField { field: "key" }
                            .push(scope.push_prop("key"), diagnostics);
                        String::new()
                    });
                    let filter_type = match filter_type {
                        Some(filter_type) => flatten_tracing_filter_type(
                            filter_type,
                            scope.push_prop("filter_type"),
                            diagnostics,
                        ),
                        None => {
                            Error::MissingField {
                                field: "filter_type",
                            }
                            .push(scope.push_prop("filter_type"), diagnostics);
                            models::TracingFilterType::new(&[], "IS")
                        }
                    };
                    models::TracingSpanFieldFilter { key, filter_type }
                })
                .collect()
        };

        models::TracingLabelFilters {
            application_name: flatten_tracing_filter_set(
                application_name,
                scope.push_prop("application_name"),
                diagnostics,
            ),
            subsystem_name: flatten_tracing_filter_set(
                subsystem_name,
                scope.push_prop("subsystem_name"),
                diagnostics,
            ),
            service_name: flatten_tracing_filter_set(
                service_name,
                scope.push_prop("service_name"),
                diagnostics,
            ),
            operation_name: flatten_tracing_filter_set(
                operation_name,
                scope.push_prop("operation_name"),
                diagnostics,
            ),
            span_fields,
        }
    });

    Some(models::TracingFilter {
        latency_threshold_ms: latency_threshold_ms.map(|ms| ms as f64),
        tracing_label_filters,
    })
}

fn flatten_tracing_filter_set(
    filters: &[proto::TracingFilterType],
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> BTreeSet<models::TracingFilterType> {
    filters
        .iter()
        .enumerate()
        .map(|(index, filter)| {
            flatten_tracing_filter_type(filter, scope.push_item(index), diagnostics)
        })
        .collect()
}

fn flatten_tracing_filter_type(
    filter: &proto::TracingFilterType,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::TracingFilterType {
    models::TracingFilterType {
        values: filter.values.iter().cloned().collect(),
        operation: codecs::TRACING_FILTER_OPERATION.flatten(
            filter.operation,
            scope.push_prop("operation"),
            diagnostics,
        ),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_absent_filters_are_absent_on_the_wire() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        assert_eq!(expand_logs_filter(None, root, &mut diagnostics), None);
        assert_eq!(expand_tracing_filter(None, root, &mut diagnostics), None);
        assert_eq!(flatten_logs_filter(None, root, &mut diagnostics), None);
        assert_eq!(flatten_tracing_filter(None, root, &mut diagnostics), None);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_logs_filter_round_trip() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();
        let filter = models::LogsFilter::example();

        let wire = expand_logs_filter(Some(&filter), root, &mut diagnostics).unwrap();

        let Some(proto::logs_filter::FilterType::SimpleFilter(simple)) = &wire.filter_type else {
            panic!("expected a simple filter");
        };
        let labels = simple.label_filters.as_ref().unwrap();
        // Severities are a set, and are sent in set order.
        assert_eq!(
            labels.severities,
            vec![proto::LogSeverity::Critical as i32, proto::LogSeverity::Error as i32]
        );
        assert_eq!(
            labels.subsystem_name[0].operation,
            proto::LogFilterOperationType::StartsWith as i32
        );

        let back = flatten_logs_filter(Some(&wire), root, &mut diagnostics);
        assert_eq!(back, Some(filter));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_logs_filter_errors_are_collected() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        let filter = models::LogsFilter {
            simple_filter: Some(models::SimpleFilter {
                lucene_query: None,
                label_filters: Some(models::LabelFilters {
                    application_name: [
                        models::LabelFilter::new("a", "IS"),
                        models::LabelFilter::new("b", "LIKE"),
                    ]
                    .into(),
                    subsystem_name: Default::default(),
                    severities: ["Info".to_string(), "Fatal".to_string()].into(),
                }),
            }),
        };
        expand_logs_filter(Some(&filter), root.push_prop("logs_filter"), &mut diagnostics);

        // Set members are reported at the set itself, by value.
        insta::assert_snapshot!(diagnostics.to_string(), @r#"
        error: /logs_filter/simple_filter/label_filters/severities: "Fatal" is not a valid log severity (expected one of "Verbose", "Debug", "Info", "Warning", "Error", "Critical")
        error: /logs_filter/simple_filter/label_filters/application_name: "LIKE" is not a valid log filter operation (expected one of "IS", "INCLUDES", "ENDS_WITH", "STARTS_WITH")
        "#);
    }

    #[test]
    fn test_every_unknown_set_member_is_named() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        let filter = models::TracingFilter {
            latency_threshold_ms: None,
            tracing_label_filters: Some(models::TracingLabelFilters {
                service_name: [
                    models::TracingFilterType::new(&["checkout"], "IS"),
                    models::TracingFilterType::new(&["cart"], "LIKE"),
                    models::TracingFilterType::new(&["search"], "MATCHES"),
                    models::TracingFilterType::new(&["users"], "LIKE"),
                ]
                .into(),
                ..Default::default()
            }),
        };
        let wire = expand_tracing_filter(Some(&filter), root, &mut diagnostics).unwrap();

        insta::assert_snapshot!(diagnostics.to_string(), @r#"error: /tracing_label_filters/service_name: "LIKE", "MATCHES" are not valid tracing filter operation values (expected one of "IS", "IS_NOT", "INCLUDES", "ENDS_WITH", "STARTS_WITH")"#);

        // Members are still sent, pairing each with its own operation.
        let Some(proto::tracing_filter::FilterType::SimpleFilter(simple)) = &wire.filter_type else {
            panic!("expected a simple filter");
        };
        let sent: Vec<(String, i32)> = simple
            .tracing_label_filters
            .as_ref()
            .unwrap()
            .service_name
            .iter()
            .map(|f| (f.values[0].clone(), f.operation))
            .collect();
        let is = proto::TracingFilterOperationType::IsOrUnspecified as i32;
        assert!(sent.contains(&("checkout".to_string(), is)));
        assert!(sent.contains(&("cart".to_string(), 0)));
        assert_eq!(sent.len(), 4);
    }

    #[test]
    fn test_tracing_filter_round_trip() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();
        let filter = models::TracingFilter::example();

        let wire = expand_tracing_filter(Some(&filter), root, &mut diagnostics).unwrap();
        let back = flatten_tracing_filter(Some(&wire), root, &mut diagnostics);

        assert_eq!(back, Some(filter));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_latency_conversion() {
        for (latency, expect) in [
            (0.0, Some(0)),
            (250.0, Some(250)),
            (12.5, None),
            (-1.0, None),
            (f64::NAN, None),
            (f64::INFINITY, None),
            (9007199254740992.0, Some(9007199254740992)),
            // u64::MAX is not representable, and rounds up to 2^64.
            (18446744073709551616.0, None),
        ] {
            assert_eq!(latency_to_wire(latency), expect, "{latency}");
        }

        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();
        let filter = models::TracingFilter {
            latency_threshold_ms: Some(-3.0),
            tracing_label_filters: None,
        };
        expand_tracing_filter(Some(&filter), root, &mut diagnostics);

        assert_eq!(
            diagnostics.into_inner()[0].path,
            "/latency_threshold_ms".to_string()
        );
    }

    #[test]
    fn test_metric_filter() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();
        let filter = models::MetricFilter::new("sum(x)");

        let wire = expand_metric_filter(&filter);
        assert_eq!(flatten_metric_filter(Some(&wire), root, &mut diagnostics), filter);

        flatten_metric_filter(None, root.push_prop("metric_filter"), &mut diagnostics);
        assert_eq!(
            diagnostics.into_inner()[0].error,
            Error::MissingField {
                field: "metric_filter"
            }
        );
    }
}
