use super::{Computed, NotificationGroup, Schedule, TypeDefinition};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// An AlertDefinition declares a monitoring alert which is kept in sync
/// with the remote alerting service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
#[schemars(example = AlertDefinition::example())]
pub struct AlertDefinition {
    /// # Identifier of the alert definition.
    /// Assigned by the service on creation, and never written by users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// # Name of the alert.
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    /// # Description of the alert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// # Whether the alert is evaluated.
    #[serde(default = "super::default_true")]
    pub enabled: bool,
    /// # Default priority of the alert's rules.
    /// One of "P1" (highest) through "P5" (lowest).
    /// Deprecated: prefer `override.priority` of individual rules, which
    /// falls back to this value when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// # Weekly schedule during which the alert is active.
    /// If not set, the alert is always active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub schedule: Option<Schedule>,
    /// # Type of the alert and its type-specific parameters.
    /// Exactly one alert type must be set.
    #[validate(nested)]
    pub type_definition: TypeDefinition,
    /// # Evaluate the alert without ever sending notifications.
    #[serde(default, skip_serializing_if = "super::is_false")]
    pub phantom_mode: bool,
    /// # Whether the service has marked the alert as deleted.
    /// Owned by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    /// # Keys by which alert evaluations are grouped.
    /// For metric and new-value alerts the service derives grouping keys
    /// from the alert's query when this is left unset.
    #[serde(default, skip_serializing_if = "Computed::is_unknown")]
    #[schemars(with = "Option<Vec<String>>")]
    pub group_by: Computed<Vec<String>>,
    /// # Incident settings of the alert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incidents_settings: Option<IncidentsSettings>,
    /// # Routing of the alert's notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_group: Option<NotificationGroup>,
    /// # Free-form labels of the alert.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl AlertDefinition {
    pub fn example() -> Self {
        Self {
            id: None,
            name: "checkout errors".to_string(),
            description: Some("Too many errors from the checkout service".to_string()),
            enabled: true,
            priority: Some("P2".to_string()),
            schedule: Some(Schedule::example()),
            type_definition: TypeDefinition::example(),
            phantom_mode: false,
            deleted: None,
            group_by: Computed::Known(vec!["coralogix.metadata.subsystemName".to_string()]),
            incidents_settings: Some(IncidentsSettings::example()),
            notification_group: Some(NotificationGroup::example()),
            labels: [("team".to_string(), "payments".to_string())].into(),
        }
    }

    /// JSON schema of alert definition documents.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(AlertDefinition)
    }
}

/// IncidentsSettings control how often a firing alert re-opens incidents.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
#[schemars(example = IncidentsSettings::example())]
pub struct IncidentsSettings {
    /// # When incidents are notified.
    /// One of "Triggered Only" or "Triggered and Resolved".
    #[serde(default = "super::default_notify_on")]
    pub notify_on: String,
    /// # Minimum period between re-triggered incidents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retriggering_period: Option<RetriggeringPeriod>,
}

impl IncidentsSettings {
    pub fn example() -> Self {
        Self {
            notify_on: "Triggered and Resolved".to_string(),
            retriggering_period: Some(RetriggeringPeriod { minutes: 10 }),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RetriggeringPeriod {
    /// # Period in minutes.
    pub minutes: u32,
}

/// AlertOverride replaces alert-wide settings for a single rule.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AlertOverride {
    /// # Priority of the rule.
    /// If not set, the alert's top-level priority is used, or "P5"
    /// if that's also unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl AlertOverride {
    pub fn with_priority(priority: &str) -> Self {
        Self {
            priority: Some(priority.to_string()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use validator::Validate;

    #[test]
    fn test_yaml_document_with_defaults() {
        let fixture = r#"
name: ingest stalled
type_definition:
  metric_threshold:
    metric_filter:
      promql: sum(rate(ingest_bytes[5m])) by (service)
    missing_values:
      replace_with_zero: true
    rules:
      - condition:
          threshold: 0.0
          for_over_pct: 100
          of_the_last: 10_MINUTES
          condition_type: LESS_THAN_OR_EQUALS
"#;
        let alert: AlertDefinition = serde_yaml::from_str(fixture).unwrap();

        assert!(alert.enabled);
        assert!(!alert.phantom_mode);
        assert_eq!(alert.group_by, Computed::Unspecified);
        assert!(alert.type_definition.metric_threshold.is_some());
        assert!(alert.validate().is_ok());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let err = serde_json::from_value::<AlertDefinition>(json!({
            "name": "a",
            "type_definition": {},
            "severity": "high",
        }))
        .unwrap_err();

        assert!(err.to_string().contains("unknown field `severity`"));
    }

    #[test]
    fn test_example_round_trips_and_validates() {
        let example = AlertDefinition::example();
        assert!(example.validate().is_ok());

        let doc = serde_json::to_value(&example).unwrap();
        let parsed: AlertDefinition = serde_json::from_value(doc).unwrap();
        assert_eq!(parsed, example);
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let mut alert = AlertDefinition::example();
        alert.name = String::new();

        let errors = alert.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_json_schema_covers_every_alert_type() {
        let schema = serde_json::to_value(AlertDefinition::json_schema()).unwrap();
        let schema = schema.to_string();

        for kind in crate::VariantKind::all() {
            assert!(schema.contains(kind.name()), "missing {}", kind.name());
        }
    }
}
