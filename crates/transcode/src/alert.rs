use super::{codecs, notifications, schedule, variants, Diagnostics, Error, Scope};
use models::{AlertDefinition, Computed, VariantKind};
use proto_alerts::alerts as proto;

/// Expand an alert definition into its wire document.
///
/// The service-owned `deleted` flag is never sent, and group-by keys are
/// sent empty for alert types which the service groups itself.
pub fn expand_alert(
    alert: &AlertDefinition,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::AlertDef {
    let AlertDefinition {
        id,
        name,
        description,
        enabled,
        priority,
        schedule,
        type_definition,
        phantom_mode,
        deleted: _,
        group_by,
        incidents_settings,
        notification_group,
        labels,
    } = alert;

    let priority = match priority {
        Some(priority) => {
            let scope = scope.push_prop("priority");
            Error::Deprecated {
                field: "priority",
                instead: "set override.priority of each rule",
            }
            .push_warning(scope, diagnostics);
            codecs::PRIORITY.expand(priority, scope, diagnostics)
        }
        None => proto::AlertDefPriority::P5OrUnspecified as i32,
    };

    let expanded = variants::expand_type_definition(
        type_definition,
        scope.push_prop("type_definition"),
        diagnostics,
    );
    let (type_definition, r#type, group_by_keys) = match expanded {
        Some((wire, kind)) => {
            let group_by_keys = match group_by {
                Computed::Known(keys) if !kind.forbids_group_by() => keys.clone(),
                _ => Vec::new(),
            };
            (
                Some(wire),
                codecs::ALERT_TYPE.expand(kind.name(), scope.push_prop("type"), diagnostics),
                group_by_keys,
            )
        }
        None => (None, 0, Vec::new()),
    };

    let properties = proto::AlertDefProperties {
        name: Some(name.clone()),
        description: description.clone(),
        enabled: Some(*enabled),
        priority,
        active_on: schedule
            .as_ref()
            .map(|s| schedule::expand_schedule(s, scope.push_prop("schedule"), diagnostics)),
        r#type,
        group_by_keys,
        incidents_settings: incidents_settings.as_ref().map(|s| {
            notifications::expand_incidents_settings(
                s,
                scope.push_prop("incidents_settings"),
                diagnostics,
            )
        }),
        notification_group: notification_group.as_ref().map(|g| {
            notifications::expand_notification_group(
                g,
                scope.push_prop("notification_group"),
                diagnostics,
            )
        }),
        entity_labels: labels.clone(),
        phantom_mode: Some(*phantom_mode),
        deleted: None,
        type_definition,
    };

    proto::AlertDef {
        id: id.clone(),
        alert_def_properties: Some(properties),
    }
}

/// Flatten a wire document returned by the service into an alert definition.
///
/// `prior_schedule` is the schedule of the previously recorded definition,
/// if any: its UTC offset is used to present schedule times.
pub fn flatten_alert(
    wire: &proto::AlertDef,
    prior_schedule: Option<&models::Schedule>,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> AlertDefinition {
    let proto::AlertDef {
        id,
        alert_def_properties,
    } = wire;

    let Some(properties) = alert_def_properties else {
        Error::MissingField {
            field: "alert_def_properties",
        }
        .push(scope, diagnostics);

        return AlertDefinition {
            id: id.clone(),
            name: String::new(),
            description: None,
            enabled: true,
            priority: None,
            schedule: None,
            type_definition: Default::default(),
            phantom_mode: false,
            deleted: None,
            group_by: Computed::Unspecified,
            incidents_settings: None,
            notification_group: None,
            labels: Default::default(),
        };
    };

    let proto::AlertDefProperties {
        name,
        description,
        enabled,
        priority,
        active_on,
        r#type,
        group_by_keys,
        incidents_settings,
        notification_group,
        entity_labels,
        phantom_mode,
        deleted,
        type_definition,
    } = properties;

    let name = match name {
        Some(name) => name.clone(),
        None => {
            Error::MissingField { field: "name" }.push(scope.push_prop("name"), diagnostics);
            String::new()
        }
    };

    let priority = match *priority {
        0 => None,
        code => Some(codecs::PRIORITY.flatten(code, scope.push_prop("priority"), diagnostics)),
    };

    let type_definition = {
        let td_scope = scope.push_prop("type_definition");
        match variants::flatten_type_definition(type_definition.as_ref(), td_scope, diagnostics) {
            Some((type_definition, kind)) => {
                check_declared_type(*r#type, kind, scope.push_prop("type"), diagnostics);
                type_definition
            }
            None => Default::default(),
        }
    };

    let group_by = if group_by_keys.is_empty() {
        Computed::Unspecified
    } else {
        Computed::Known(group_by_keys.clone())
    };

    AlertDefinition {
        id: id.clone(),
        name,
        description: description.clone(),
        enabled: enabled.unwrap_or(true),
        priority,
        schedule: active_on.as_ref().map(|s| {
            schedule::flatten_schedule(s, prior_schedule, scope.push_prop("schedule"), diagnostics)
        }),
        type_definition,
        phantom_mode: phantom_mode.unwrap_or_default(),
        deleted: *deleted,
        group_by,
        incidents_settings: incidents_settings.as_ref().map(|s| {
            notifications::flatten_incidents_settings(
                s,
                scope.push_prop("incidents_settings"),
                diagnostics,
            )
        }),
        notification_group: notification_group.as_ref().map(|g| {
            notifications::flatten_notification_group(
                g,
                scope.push_prop("notification_group"),
                diagnostics,
            )
        }),
        labels: entity_labels.clone(),
    }
}

// The declared alert type must agree with the populated type definition.
fn check_declared_type(code: i32, kind: VariantKind, scope: Scope, diagnostics: &mut Diagnostics) {
    let declared = codecs::ALERT_TYPE.flatten(code, scope, diagnostics);

    if !declared.is_empty() && declared != kind.name() {
        Error::TypeMismatch {
            declared,
            populated: kind.name().to_string(),
        }
        .push(scope, diagnostics);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_example_round_trip() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        let mut alert = AlertDefinition::example();
        alert.priority = None;

        let wire = expand_alert(&alert, root, &mut diagnostics);
        let properties = wire.alert_def_properties.as_ref().unwrap();

        assert_eq!(properties.r#type, proto::AlertDefType::LogsThreshold as i32);
        assert_eq!(properties.deleted, None);
        assert_eq!(properties.active_on.as_ref().unwrap().start_time.as_ref().unwrap().hours, 6);

        let back = flatten_alert(&wire, alert.schedule.as_ref(), root, &mut diagnostics);
        assert_eq!(back, alert);
        assert!(diagnostics.is_empty(), "{diagnostics}");
    }

    #[test]
    fn test_top_level_priority_is_deprecated() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();
        let alert = AlertDefinition::example();

        let wire = expand_alert(&alert, root, &mut diagnostics);
        assert_eq!(
            wire.alert_def_properties.unwrap().priority,
            proto::AlertDefPriority::P2 as i32
        );
        assert!(!diagnostics.has_errors());
        assert_eq!(diagnostics.warnings().count(), 1);
    }

    #[test]
    fn test_server_owned_group_by_is_not_sent() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        let mut alert = AlertDefinition::example();
        alert.type_definition = models::TypeDefinition {
            tracing_immediate: Some(Default::default()),
            ..Default::default()
        };
        let wire = expand_alert(&alert, root, &mut diagnostics);
        let properties = wire.alert_def_properties.unwrap();

        assert!(properties.group_by_keys.is_empty());
        assert_eq!(properties.r#type, proto::AlertDefType::TracingImmediate as i32);
    }

    #[test]
    fn test_flatten_conversion_errors() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        let mut wire = expand_alert(&AlertDefinition::example(), root, &mut Diagnostics::new());
        let properties = wire.alert_def_properties.as_mut().unwrap();
        properties.name = None;
        properties.r#type = proto::AlertDefType::Flow as i32;
        properties.priority = 42;

        let alert = flatten_alert(&wire, None, root, &mut diagnostics);
        assert!(alert.type_definition.logs_threshold.is_some());

        insta::assert_snapshot!(diagnostics.to_string(), @r"
        error: /name: alerts service response is missing required field name
        error: /priority: alerts service returned priority code 42, which this client does not recognize
        error: /type: alerts service declared type flow, but populated type definition logs_threshold
        ");
        assert!(diagnostics.iter().all(|d| d.error.is_conversion()));
    }

    #[test]
    fn test_unrecognized_type_definition() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        let mut wire = expand_alert(&AlertDefinition::example(), root, &mut Diagnostics::new());
        wire.alert_def_properties.as_mut().unwrap().type_definition = None;
        flatten_alert(&wire, None, root, &mut diagnostics);

        insta::assert_snapshot!(diagnostics.to_string(), @r"error: /type_definition: alerts service returned a type definition which this client does not recognize");
    }
}
