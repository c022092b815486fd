use super::{Diagnostics, Error, Scope};
use models::{AlertDefinition, Computed};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Validate the structural constraints of an alert definition,
/// and that it doesn't set group-by keys of an alert type which
/// the service groups itself.
pub fn validate_alert(alert: &AlertDefinition, scope: Scope, diagnostics: &mut Diagnostics) {
    if let Err(errors) = alert.validate() {
        walk_errors(&errors, scope, diagnostics);
    }
    check_group_by(alert, scope, diagnostics);
}

fn walk_errors(errors: &ValidationErrors, scope: Scope, diagnostics: &mut Diagnostics) {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|(l, _), (r, _)| l.cmp(r));

    for (field, kind) in fields {
        let scope = scope.push_prop(field.as_ref());

        match kind {
            ValidationErrorsKind::Field(errors) => {
                for error in errors {
                    let message = match &error.message {
                        Some(message) => message.to_string(),
                        None => format!("failed {} validation", error.code),
                    };
                    Error::Invalid { message }.push(scope, diagnostics);
                }
            }
            ValidationErrorsKind::Struct(errors) => walk_errors(errors, scope, diagnostics),
            ValidationErrorsKind::List(items) => {
                for (index, errors) in items {
                    walk_errors(errors, scope.push_item(*index), diagnostics);
                }
            }
        }
    }
}

/// Reject group-by keys for alert types which are grouped by the service.
pub fn check_group_by(alert: &AlertDefinition, scope: Scope, diagnostics: &mut Diagnostics) {
    let Some(kind) = alert.type_definition.kind() else {
        return;
    };
    if !kind.forbids_group_by() {
        return;
    }
    if let Computed::Known(keys) = &alert.group_by {
        if !keys.is_empty() {
            Error::GroupByNotAllowed {
                variant: kind.name(),
            }
            .push(scope.push_prop("group_by"), diagnostics);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structural_errors_are_located() {
        let alert: AlertDefinition = serde_json::from_value(json!({
            "name": "",
            "schedule": {"active_on": {
                "days_of_week": ["Monday"],
                "start_time": "8:00",
                "end_time": "18:00",
                "utc_offset": "+2",
            }},
            "type_definition": {"flow": {
                "stages": [{"flow_stages_groups": [], "timeframe_ms": 1000}],
            }},
        }))
        .unwrap();

        let mut diagnostics = Diagnostics::new();
        validate_alert(&alert, Scope::Root, &mut diagnostics);

        insta::assert_snapshot!(diagnostics.to_string(), @r"
        error: /name: name cannot be empty
        error: /schedule/active_on/start_time: must be a 24-hour HH:MM time
        error: /schedule/active_on/utc_offset: must be a +HHMM or -HHMM offset
        error: /type_definition/flow/stages/0/flow_stages_groups: at least one group is required
        ");
    }

    #[test]
    fn test_group_by_of_server_grouped_alerts() {
        let root = Scope::Root;
        let mut alert: AlertDefinition = serde_json::from_value(json!({
            "name": "errors",
            "group_by": ["service"],
            "type_definition": {"logs_immediate": {}},
        }))
        .unwrap();

        let mut diagnostics = Diagnostics::new();
        check_group_by(&alert, root, &mut diagnostics);

        insta::assert_snapshot!(diagnostics.to_string(), @r"error: /group_by: group_by cannot be set for logs_immediate alerts, which are grouped by the service");

        for group_by in [Computed::Known(Vec::new()), Computed::Unspecified] {
            alert.group_by = group_by;
            let mut diagnostics = Diagnostics::new();
            check_group_by(&alert, root, &mut diagnostics);
            assert!(diagnostics.is_empty());
        }
    }
}
