use crate::{codecs, filters, rules, Diagnostics, Scope};
use proto_alerts::alerts as proto;
use std::collections::BTreeSet;

pub fn expand_logs_immediate(
    variant: &models::LogsImmediate,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::LogsImmediateType {
    let models::LogsImmediate {
        logs_filter,
        notification_payload_filter,
    } = variant;

    proto::LogsImmediateType {
        logs_filter: filters::expand_logs_filter(
            logs_filter.as_ref(),
            scope.push_prop("logs_filter"),
            diagnostics,
        ),
        notification_payload_filter: payload_filter(notification_payload_filter),
    }
}

pub fn flatten_logs_immediate(
    variant: &proto::LogsImmediateType,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::LogsImmediate {
    let proto::LogsImmediateType {
        logs_filter,
        notification_payload_filter,
    } = variant;

    models::LogsImmediate {
        logs_filter: filters::flatten_logs_filter(
            logs_filter.as_ref(),
            scope.push_prop("logs_filter"),
            diagnostics,
        ),
        notification_payload_filter: notification_payload_filter.iter().cloned().collect(),
    }
}

pub fn expand_logs_threshold(
    variant: &models::LogsThreshold,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::LogsThresholdType {
    let models::LogsThreshold {
        logs_filter,
        notification_payload_filter,
        rules,
        undetected_values_management,
        custom_evaluation_delay,
    } = variant;

    proto::LogsThresholdType {
        logs_filter: filters::expand_logs_filter(
            logs_filter.as_ref(),
            scope.push_prop("logs_filter"),
            diagnostics,
        ),
        undetected_values_management: undetected_values_management.as_ref().map(|u| {
            expand_undetected_values(u, scope.push_prop("undetected_values_management"), diagnostics)
        }),
        rules: rules::expand_rules(rules, scope, diagnostics, rules::expand_logs_threshold_rule),
        notification_payload_filter: payload_filter(notification_payload_filter),
        evaluation_delay_ms: *custom_evaluation_delay,
    }
}

pub fn flatten_logs_threshold(
    variant: &proto::LogsThresholdType,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::LogsThreshold {
    let proto::LogsThresholdType {
        logs_filter,
        undetected_values_management,
        rules,
        notification_payload_filter,
        evaluation_delay_ms,
    } = variant;

    models::LogsThreshold {
        logs_filter: filters::flatten_logs_filter(
            logs_filter.as_ref(),
            scope.push_prop("logs_filter"),
            diagnostics,
        ),
        notification_payload_filter: notification_payload_filter.iter().cloned().collect(),
        rules: rules::flatten_rules(rules, scope, diagnostics, rules::flatten_logs_threshold_rule),
        undetected_values_management: undetected_values_management.as_ref().map(|u| {
            flatten_undetected_values(u, scope.push_prop("undetected_values_management"), diagnostics)
        }),
        custom_evaluation_delay: *evaluation_delay_ms,
    }
}

pub fn expand_logs_anomaly(
    variant: &models::LogsAnomaly,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::LogsAnomalyType {
    let models::LogsAnomaly {
        logs_filter,
        notification_payload_filter,
        rules,
        custom_evaluation_delay,
    } = variant;

    proto::LogsAnomalyType {
        logs_filter: filters::expand_logs_filter(
            logs_filter.as_ref(),
            scope.push_prop("logs_filter"),
            diagnostics,
        ),
        rules: rules::expand_rules(rules, scope, diagnostics, rules::expand_logs_anomaly_rule),
        notification_payload_filter: payload_filter(notification_payload_filter),
        evaluation_delay_ms: *custom_evaluation_delay,
    }
}

pub fn flatten_logs_anomaly(
    variant: &proto::LogsAnomalyType,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::LogsAnomaly {
    let proto::LogsAnomalyType {
        logs_filter,
        rules,
        notification_payload_filter,
        evaluation_delay_ms,
    } = variant;

    models::LogsAnomaly {
        logs_filter: filters::flatten_logs_filter(
            logs_filter.as_ref(),
            scope.push_prop("logs_filter"),
            diagnostics,
        ),
        notification_payload_filter: notification_payload_filter.iter().cloned().collect(),
        rules: rules::flatten_rules(rules, scope, diagnostics, rules::flatten_logs_anomaly_rule),
        custom_evaluation_delay: *evaluation_delay_ms,
    }
}

pub fn expand_logs_ratio_threshold(
    variant: &models::LogsRatioThreshold,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::LogsRatioThresholdType {
    let models::LogsRatioThreshold {
        numerator,
        numerator_alias,
        denominator,
        denominator_alias,
        rules,
        group_by_for,
        notification_payload_filter,
        custom_evaluation_delay,
    } = variant;

    proto::LogsRatioThresholdType {
        numerator: filters::expand_logs_filter(
            numerator.as_ref(),
            scope.push_prop("numerator"),
            diagnostics,
        ),
        numerator_alias: numerator_alias.clone(),
        denominator: filters::expand_logs_filter(
            denominator.as_ref(),
            scope.push_prop("denominator"),
            diagnostics,
        ),
        denominator_alias: denominator_alias.clone(),
        rules: rules::expand_rules(rules, scope, diagnostics, rules::expand_logs_ratio_rule),
        notification_payload_filter: payload_filter(notification_payload_filter),
        group_by_for: codecs::LOGS_RATIO_GROUP_BY_FOR.expand(
            group_by_for,
            scope.push_prop("group_by_for"),
            diagnostics,
        ),
        evaluation_delay_ms: *custom_evaluation_delay,
    }
}

pub fn flatten_logs_ratio_threshold(
    variant: &proto::LogsRatioThresholdType,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::LogsRatioThreshold {
    let proto::LogsRatioThresholdType {
        numerator,
        numerator_alias,
        denominator,
        denominator_alias,
        rules,
        notification_payload_filter,
        group_by_for,
        evaluation_delay_ms,
    } = variant;

    models::LogsRatioThreshold {
        numerator: filters::flatten_logs_filter(
            numerator.as_ref(),
            scope.push_prop("numerator"),
            diagnostics,
        ),
        numerator_alias: numerator_alias.clone(),
        denominator: filters::flatten_logs_filter(
            denominator.as_ref(),
            scope.push_prop("denominator"),
            diagnostics,
        ),
        denominator_alias: denominator_alias.clone(),
        rules: rules::flatten_rules(rules, scope, diagnostics, rules::flatten_logs_ratio_rule),
        group_by_for: codecs::LOGS_RATIO_GROUP_BY_FOR.flatten(
            *group_by_for,
            scope.push_prop("group_by_for"),
            diagnostics,
        ),
        notification_payload_filter: notification_payload_filter.iter().cloned().collect(),
        custom_evaluation_delay: *evaluation_delay_ms,
    }
}

pub fn expand_logs_new_value(
    variant: &models::LogsNewValue,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::LogsNewValueType {
    let models::LogsNewValue {
        logs_filter,
        notification_payload_filter,
        rules,
    } = variant;

    proto::LogsNewValueType {
        logs_filter: filters::expand_logs_filter(
            logs_filter.as_ref(),
            scope.push_prop("logs_filter"),
            diagnostics,
        ),
        rules: rules::expand_rules(rules, scope, diagnostics, rules::expand_logs_new_value_rule),
        notification_payload_filter: payload_filter(notification_payload_filter),
    }
}

pub fn flatten_logs_new_value(
    variant: &proto::LogsNewValueType,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::LogsNewValue {
    let proto::LogsNewValueType {
        logs_filter,
        rules,
        notification_payload_filter,
    } = variant;

    models::LogsNewValue {
        logs_filter: filters::flatten_logs_filter(
            logs_filter.as_ref(),
            scope.push_prop("logs_filter"),
            diagnostics,
        ),
        notification_payload_filter: notification_payload_filter.iter().cloned().collect(),
        rules: rules::flatten_rules(rules, scope, diagnostics, rules::flatten_logs_new_value_rule),
    }
}

pub fn expand_logs_unique_count(
    variant: &models::LogsUniqueCount,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::LogsUniqueCountType {
    let models::LogsUniqueCount {
        logs_filter,
        notification_payload_filter,
        unique_count_keypath,
        max_unique_count_per_group_by_key,
        rules,
    } = variant;

    proto::LogsUniqueCountType {
        logs_filter: filters::expand_logs_filter(
            logs_filter.as_ref(),
            scope.push_prop("logs_filter"),
            diagnostics,
        ),
        rules: rules::expand_rules(rules, scope, diagnostics, rules::expand_logs_unique_count_rule),
        notification_payload_filter: payload_filter(notification_payload_filter),
        max_unique_count_per_group_by_key: *max_unique_count_per_group_by_key,
        unique_count_keypath: Some(unique_count_keypath.clone()),
    }
}

pub fn flatten_logs_unique_count(
    variant: &proto::LogsUniqueCountType,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::LogsUniqueCount {
    let proto::LogsUniqueCountType {
        logs_filter,
        rules,
        notification_payload_filter,
        max_unique_count_per_group_by_key,
        unique_count_keypath,
    } = variant;

    models::LogsUniqueCount {
        logs_filter: filters::flatten_logs_filter(
            logs_filter.as_ref(),
            scope.push_prop("logs_filter"),
            diagnostics,
        ),
        notification_payload_filter: notification_payload_filter.iter().cloned().collect(),
        unique_count_keypath: rules::required(
            unique_count_keypath.as_ref(),
            "unique_count_keypath",
            scope,
            diagnostics,
        ),
        max_unique_count_per_group_by_key: *max_unique_count_per_group_by_key,
        rules: rules::flatten_rules(
            rules,
            scope,
            diagnostics,
            rules::flatten_logs_unique_count_rule,
        ),
    }
}

pub fn expand_logs_time_relative_threshold(
    variant: &models::LogsTimeRelativeThreshold,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::LogsTimeRelativeThresholdType {
    let models::LogsTimeRelativeThreshold {
        logs_filter,
        notification_payload_filter,
        rules,
        undetected_values_management,
        custom_evaluation_delay,
    } = variant;

    proto::LogsTimeRelativeThresholdType {
        logs_filter: filters::expand_logs_filter(
            logs_filter.as_ref(),
            scope.push_prop("logs_filter"),
            diagnostics,
        ),
        rules: rules::expand_rules(
            rules,
            scope,
            diagnostics,
            rules::expand_logs_time_relative_rule,
        ),
        notification_payload_filter: payload_filter(notification_payload_filter),
        undetected_values_management: undetected_values_management.as_ref().map(|u| {
            expand_undetected_values(u, scope.push_prop("undetected_values_management"), diagnostics)
        }),
        evaluation_delay_ms: *custom_evaluation_delay,
    }
}

pub fn flatten_logs_time_relative_threshold(
    variant: &proto::LogsTimeRelativeThresholdType,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::LogsTimeRelativeThreshold {
    let proto::LogsTimeRelativeThresholdType {
        logs_filter,
        rules,
        notification_payload_filter,
        undetected_values_management,
        evaluation_delay_ms,
    } = variant;

    models::LogsTimeRelativeThreshold {
        logs_filter: filters::flatten_logs_filter(
            logs_filter.as_ref(),
            scope.push_prop("logs_filter"),
            diagnostics,
        ),
        notification_payload_filter: notification_payload_filter.iter().cloned().collect(),
        rules: rules::flatten_rules(
            rules,
            scope,
            diagnostics,
            rules::flatten_logs_time_relative_rule,
        ),
        undetected_values_management: undetected_values_management.as_ref().map(|u| {
            flatten_undetected_values(u, scope.push_prop("undetected_values_management"), diagnostics)
        }),
        custom_evaluation_delay: *evaluation_delay_ms,
    }
}

pub fn expand_undetected_values(
    management: &models::UndetectedValuesManagement,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::UndetectedValuesManagement {
    let models::UndetectedValuesManagement {
        trigger_undetected_values,
        auto_retire_timeframe,
    } = management;

    proto::UndetectedValuesManagement {
        trigger_undetected_values: Some(*trigger_undetected_values),
        auto_retire_timeframe: codecs::AUTO_RETIRE_TIMEFRAME.expand(
            auto_retire_timeframe,
            scope.push_prop("auto_retire_timeframe"),
            diagnostics,
        ),
    }
}

pub fn flatten_undetected_values(
    management: &proto::UndetectedValuesManagement,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::UndetectedValuesManagement {
    let proto::UndetectedValuesManagement {
        trigger_undetected_values,
        auto_retire_timeframe,
    } = management;

    models::UndetectedValuesManagement {
        trigger_undetected_values: trigger_undetected_values.unwrap_or_default(),
        auto_retire_timeframe: codecs::AUTO_RETIRE_TIMEFRAME.flatten(
            *auto_retire_timeframe,
            scope.push_prop("auto_retire_timeframe"),
            diagnostics,
        ),
    }
}

pub(super) fn payload_filter(filter: &BTreeSet<String>) -> Vec<String> {
    filter.iter().cloned().collect()
}
