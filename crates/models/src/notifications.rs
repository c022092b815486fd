use super::RetriggeringPeriod;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

/// NotificationGroup routes the notifications of an alert to webhooks
/// and notification-center destinations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
#[schemars(example = NotificationGroup::example())]
pub struct NotificationGroup {
    /// # Keys by which notifications are grouped.
    /// Must be a subset of the alert's group-by keys.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_by_keys: Vec<String>,
    /// # Webhooks and email recipients notified by the alert.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub webhooks_settings: Vec<WebhookSettings>,
    /// # Notification-center destinations of the alert.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub destinations: Vec<NotificationDestination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub router: Option<NotificationRouter>,
}

impl NotificationGroup {
    pub fn example() -> Self {
        Self {
            group_by_keys: vec!["coralogix.metadata.subsystemName".to_string()],
            webhooks_settings: vec![
                WebhookSettings {
                    notify_on: "Triggered and Resolved".to_string(),
                    retriggering_period: Some(RetriggeringPeriod { minutes: 60 }),
                    integration_id: Some("17".to_string()),
                    recipients: BTreeSet::new(),
                },
                WebhookSettings {
                    notify_on: super::default_notify_on(),
                    retriggering_period: None,
                    integration_id: None,
                    recipients: ["oncall@example.com".to_string()].into(),
                },
            ],
            destinations: vec![NotificationDestination {
                connector_id: "slack-payments".to_string(),
                preset_id: Some("default-preset".to_string()),
                notify_on: super::default_notify_on(),
                triggered_routing_overrides: Some(RoutingOverrides {
                    connector_overrides: vec![FieldOverride {
                        field_name: "channel".to_string(),
                        template: "#payments-alerts".to_string(),
                    }],
                    preset_overrides: Vec::new(),
                    payload_type: Some("slack_raw".to_string()),
                }),
                resolved_routing_overrides: None,
            }],
            router: None,
        }
    }
}

/// WebhookSettings notify either a configured integration
/// or a set of email recipients, never both.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct WebhookSettings {
    /// # When notifications are sent.
    /// One of "Triggered Only" or "Triggered and Resolved".
    #[serde(default = "super::default_notify_on")]
    pub notify_on: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retriggering_period: Option<RetriggeringPeriod>,
    /// # Id of the notified integration, in decimal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_id: Option<String>,
    /// # Email addresses notified by the alert.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub recipients: BTreeSet<String>,
}

/// NotificationDestination sends notifications through a notification-center connector.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NotificationDestination {
    pub connector_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset_id: Option<String>,
    #[serde(default = "super::default_notify_on")]
    pub notify_on: String,
    /// # Overrides applied to notifications of triggered alerts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggered_routing_overrides: Option<RoutingOverrides>,
    /// # Overrides applied to notifications of resolved alerts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_routing_overrides: Option<RoutingOverrides>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RoutingOverrides {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connector_overrides: Vec<FieldOverride>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preset_overrides: Vec<FieldOverride>,
    /// # Output schema of the rendered notification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_type: Option<String>,
}

/// FieldOverride renders a connector or preset field from a template.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FieldOverride {
    pub field_name: String,
    pub template: String,
}

/// NotificationRouter hands notifications to the service's routing rules.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NotificationRouter {
    #[serde(default = "super::default_notify_on")]
    pub notify_on: String,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_webhook_defaults() {
        let settings: WebhookSettings = serde_json::from_value(json!({
            "recipients": ["b@example.com", "a@example.com", "b@example.com"],
        }))
        .unwrap();

        assert_eq!(settings.notify_on, "Triggered Only");
        assert_eq!(settings.integration_id, None);
        assert_eq!(
            settings.recipients.into_iter().collect::<Vec<_>>(),
            vec!["a@example.com", "b@example.com"]
        );
    }

    #[test]
    fn test_example_round_trip() {
        let example = NotificationGroup::example();
        let doc = serde_json::to_value(&example).unwrap();

        insta::assert_json_snapshot!(doc["destinations"][0], @r##"
        {
          "connector_id": "slack-payments",
          "notify_on": "Triggered Only",
          "preset_id": "default-preset",
          "triggered_routing_overrides": {
            "connector_overrides": [
              {
                "field_name": "channel",
                "template": "#payments-alerts"
              }
            ],
            "payload_type": "slack_raw"
          }
        }
        "##);

        assert_eq!(
            serde_json::from_value::<NotificationGroup>(doc).unwrap(),
            example
        );
    }
}
