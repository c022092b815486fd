use super::logs::payload_filter;
use crate::{filters, rules, Diagnostics, Scope};
use proto_alerts::alerts as proto;

pub fn expand_tracing_immediate(
    variant: &models::TracingImmediate,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::TracingImmediateType {
    let models::TracingImmediate {
        tracing_filter,
        notification_payload_filter,
    } = variant;

    proto::TracingImmediateType {
        tracing_filter: filters::expand_tracing_filter(
            tracing_filter.as_ref(),
            scope.push_prop("tracing_filter"),
            diagnostics,
        ),
        notification_payload_filter: payload_filter(notification_payload_filter),
    }
}

pub fn flatten_tracing_immediate(
    variant: &proto::TracingImmediateType,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::TracingImmediate {
    let proto::TracingImmediateType {
        tracing_filter,
        notification_payload_filter,
    } = variant;

    models::TracingImmediate {
        tracing_filter: filters::flatten_tracing_filter(
            tracing_filter.as_ref(),
            scope.push_prop("tracing_filter"),
            diagnostics,
        ),
        notification_payload_filter: notification_payload_filter.iter().cloned().collect(),
    }
}

pub fn expand_tracing_threshold(
    variant: &models::TracingThreshold,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::TracingThresholdType {
    let models::TracingThreshold {
        tracing_filter,
        notification_payload_filter,
        rules,
    } = variant;

    proto::TracingThresholdType {
        tracing_filter: filters::expand_tracing_filter(
            tracing_filter.as_ref(),
            scope.push_prop("tracing_filter"),
            diagnostics,
        ),
        rules: rules::expand_rules(
            rules,
            scope,
            diagnostics,
            rules::expand_tracing_threshold_rule,
        ),
        notification_payload_filter: payload_filter(notification_payload_filter),
    }
}

pub fn flatten_tracing_threshold(
    variant: &proto::TracingThresholdType,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::TracingThreshold {
    let proto::TracingThresholdType {
        tracing_filter,
        rules,
        notification_payload_filter,
    } = variant;

    models::TracingThreshold {
        tracing_filter: filters::flatten_tracing_filter(
            tracing_filter.as_ref(),
            scope.push_prop("tracing_filter"),
            diagnostics,
        ),
        notification_payload_filter: notification_payload_filter.iter().cloned().collect(),
        rules: rules::flatten_rules(
            rules,
            scope,
            diagnostics,
            rules::flatten_tracing_threshold_rule,
        ),
    }
}
