use super::{codecs, Diagnostics, Error, Scope};
use proto_alerts::alerts as proto;

pub fn expand_notification_group(
    group: &models::NotificationGroup,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::AlertDefNotificationGroup {
    let models::NotificationGroup {
        group_by_keys,
        webhooks_settings,
        destinations,
        router,
    } = group;

    let webhooks = {
        let scope = scope.push_prop("webhooks_settings");
        webhooks_settings
            .iter()
            .enumerate()
            .map(|(index, webhook)| expand_webhook(webhook, scope.push_item(index), diagnostics))
            .collect()
    };
    let destinations = {
        let scope = scope.push_prop("destinations");
        destinations
            .iter()
            .enumerate()
            .map(|(index, destination)| {
                expand_destination(destination, scope.push_item(index), diagnostics)
            })
            .collect()
    };
    let router = router.as_ref().map(|models::NotificationRouter { notify_on }| {
        let scope = scope.push_prop("router");
        proto::NotificationRouter {
            notify_on: codecs::NOTIFY_ON.expand(notify_on, scope.push_prop("notify_on"), diagnostics),
        }
    });

    proto::AlertDefNotificationGroup {
        group_by_keys: group_by_keys.clone(),
        webhooks,
        destinations,
        router,
    }
}

fn expand_webhook(
    webhook: &models::WebhookSettings,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::AlertDefWebhooksSettings {
    use proto::integration_type::IntegrationType;

    let models::WebhookSettings {
        notify_on,
        retriggering_period,
        integration_id,
        recipients,
    } = webhook;

    let integration_type = match (integration_id, recipients.is_empty()) {
        (Some(id), true) => match parse_integration_id(id) {
            Some(id) => Some(IntegrationType::IntegrationId(id)),
            None => {
                Error::InvalidIntegrationId { value: id.clone() }
                    .push(scope.push_prop("integration_id"), diagnostics);
                None
            }
        },
        (None, false) => Some(IntegrationType::Recipients(proto::Recipients {
            emails: recipients.iter().cloned().collect(),
        })),
        _ => {
            Error::ExactlyOneOf {
                fields: &["integration_id", "recipients"],
            }
            .push(scope, diagnostics);
            None
        }
    };

    proto::AlertDefWebhooksSettings {
        notify_on: codecs::NOTIFY_ON.expand(notify_on, scope.push_prop("notify_on"), diagnostics),
        integration: Some(proto::IntegrationType { integration_type }),
        minutes: retriggering_period.as_ref().map(|p| p.minutes),
    }
}

/// Parse an integration id, accepting only the form in which it reads back.
fn parse_integration_id(id: &str) -> Option<u32> {
    id.parse::<u32>()
        .ok()
        .filter(|parsed| parsed.to_string() == id)
}

fn expand_destination(
    destination: &models::NotificationDestination,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::NotificationDestination {
    let models::NotificationDestination {
        connector_id,
        preset_id,
        notify_on,
        triggered_routing_overrides,
        resolved_routing_overrides,
    } = destination;

    proto::NotificationDestination {
        connector_id: connector_id.clone(),
        preset_id: preset_id.clone(),
        notify_on: codecs::NOTIFY_ON.expand(notify_on, scope.push_prop("notify_on"), diagnostics),
        triggered_routing_overrides: triggered_routing_overrides.as_ref().map(expand_routing),
        resolved_routing_overrides: resolved_routing_overrides.as_ref().map(expand_routing),
    }
}

fn expand_routing(overrides: &models::RoutingOverrides) -> proto::NotificationRouting {
    let models::RoutingOverrides {
        connector_overrides,
        preset_overrides,
        payload_type,
    } = overrides;

    let fields = |overrides: &Vec<models::FieldOverride>| -> Vec<proto::ConfigField> {
        overrides
            .iter()
            .map(|models::FieldOverride { field_name, template }| proto::ConfigField {
                field_name: field_name.clone(),
                template: template.clone(),
            })
            .collect()
    };

    proto::NotificationRouting {
        config_overrides: Some(proto::SourceOverrides {
            output_schema_id: payload_type.clone(),
            message_config_fields: fields(preset_overrides),
            connector_config_fields: fields(connector_overrides),
        }),
    }
}

pub fn flatten_notification_group(
    group: &proto::AlertDefNotificationGroup,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::NotificationGroup {
    let proto::AlertDefNotificationGroup {
        group_by_keys,
        webhooks,
        destinations,
        router,
    } = group;

    let webhooks_settings = {
        let scope = scope.push_prop("webhooks_settings");
        webhooks
            .iter()
            .enumerate()
            .map(|(index, webhook)| flatten_webhook(webhook, scope.push_item(index), diagnostics))
            .collect()
    };
    let destinations = {
        let scope = scope.push_prop("destinations");
        destinations
            .iter()
            .enumerate()
            .map(|(index, destination)| {
                flatten_destination(destination, scope.push_item(index), diagnostics)
            })
            .collect()
    };
    let router = router.as_ref().map(|proto::NotificationRouter { notify_on }| {
        let scope = scope.push_prop("router");
        models::NotificationRouter {
            notify_on: codecs::NOTIFY_ON.flatten(*notify_on, scope.push_prop("notify_on"), diagnostics),
        }
    });

    models::NotificationGroup {
        group_by_keys: group_by_keys.clone(),
        webhooks_settings,
        destinations,
        router,
    }
}

fn flatten_webhook(
    webhook: &proto::AlertDefWebhooksSettings,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::WebhookSettings {
    use proto::integration_type::IntegrationType;

    let proto::AlertDefWebhooksSettings {
        notify_on,
        integration,
        minutes,
    } = webhook;

    let (integration_id, recipients) =
        match integration.as_ref().and_then(|i| i.integration_type.as_ref()) {
            Some(IntegrationType::IntegrationId(id)) => (Some(id.to_string()), Default::default()),
            Some(IntegrationType::Recipients(proto::Recipients { emails })) => {
                (None, emails.iter().cloned().collect())
            }
            None => {
                Error::MissingField {
                    field: "integration",
                }
                .push(scope, diagnostics);
                (None, Default::default())
            }
        };

    models::WebhookSettings {
        notify_on: codecs::NOTIFY_ON.flatten(*notify_on, scope.push_prop("notify_on"), diagnostics),
        retriggering_period: minutes.map(|minutes| models::RetriggeringPeriod { minutes }),
        integration_id,
        recipients,
    }
}

fn flatten_destination(
    destination: &proto::NotificationDestination,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::NotificationDestination {
    let proto::NotificationDestination {
        connector_id,
        preset_id,
        notify_on,
        triggered_routing_overrides,
        resolved_routing_overrides,
    } = destination;

    models::NotificationDestination {
        connector_id: connector_id.clone(),
        preset_id: preset_id.clone(),
        notify_on: codecs::NOTIFY_ON.flatten(*notify_on, scope.push_prop("notify_on"), diagnostics),
        triggered_routing_overrides: triggered_routing_overrides.as_ref().map(flatten_routing),
        resolved_routing_overrides: resolved_routing_overrides.as_ref().map(flatten_routing),
    }
}

fn flatten_routing(routing: &proto::NotificationRouting) -> models::RoutingOverrides {
    let Some(proto::SourceOverrides {
        output_schema_id,
        message_config_fields,
        connector_config_fields,
    }) = &routing.config_overrides
    else {
        return models::RoutingOverrides::default();
    };

    let fields = |fields: &Vec<proto::ConfigField>| -> Vec<models::FieldOverride> {
        fields
            .iter()
            .map(|proto::ConfigField { field_name, template }| models::FieldOverride {
                field_name: field_name.clone(),
                template: template.clone(),
            })
            .collect()
    };

    models::RoutingOverrides {
        connector_overrides: fields(connector_config_fields),
        preset_overrides: fields(message_config_fields),
        payload_type: output_schema_id.clone(),
    }
}

pub fn expand_incidents_settings(
    settings: &models::IncidentsSettings,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::AlertDefIncidentSettings {
    let models::IncidentsSettings {
        notify_on,
        retriggering_period,
    } = settings;

    proto::AlertDefIncidentSettings {
        minutes: retriggering_period.as_ref().map(|p| p.minutes),
        notify_on: codecs::NOTIFY_ON.expand(notify_on, scope.push_prop("notify_on"), diagnostics),
    }
}

pub fn flatten_incidents_settings(
    settings: &proto::AlertDefIncidentSettings,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::IncidentsSettings {
    let proto::AlertDefIncidentSettings { minutes, notify_on } = settings;

    models::IncidentsSettings {
        notify_on: codecs::NOTIFY_ON.flatten(*notify_on, scope.push_prop("notify_on"), diagnostics),
        retriggering_period: minutes.map(|minutes| models::RetriggeringPeriod { minutes }),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_notification_group_round_trip() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();
        let group = models::NotificationGroup::example();

        let wire = expand_notification_group(&group, root, &mut diagnostics);
        assert_eq!(
            wire.webhooks[0].integration,
            Some(proto::IntegrationType {
                integration_type: Some(proto::integration_type::IntegrationType::IntegrationId(17))
            })
        );
        let routing = wire.destinations[0].triggered_routing_overrides.as_ref().unwrap();
        let overrides = routing.config_overrides.as_ref().unwrap();
        assert_eq!(overrides.output_schema_id.as_deref(), Some("slack_raw"));
        assert_eq!(overrides.connector_config_fields[0].field_name, "channel");
        assert!(overrides.message_config_fields.is_empty());

        let back = flatten_notification_group(&wire, root, &mut diagnostics);
        assert_eq!(back, group);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_webhook_targets_are_exclusive() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        let mut group = models::NotificationGroup::example();
        // Both an integration and recipients.
        group.webhooks_settings[0].recipients = ["a@example.com".to_string()].into();
        // Neither.
        group.webhooks_settings[1].recipients.clear();
        group.webhooks_settings.push(models::WebhookSettings {
            notify_on: "Triggered Only".to_string(),
            retriggering_period: None,
            integration_id: Some("-1".to_string()),
            recipients: Default::default(),
        });

        expand_notification_group(&group, root.push_prop("notification_group"), &mut diagnostics);

        insta::assert_snapshot!(diagnostics.to_string(), @r#"
        error: /notification_group/webhooks_settings/0: exactly one of integration_id, recipients must be set
        error: /notification_group/webhooks_settings/1: exactly one of integration_id, recipients must be set
        error: /notification_group/webhooks_settings/2/integration_id: integration id "-1" must be an unsigned 32-bit integer, without a sign or leading zeros
        "#);
    }

    #[test]
    fn test_integration_ids_read_back_as_written() {
        for (id, expect) in [
            ("17", Some(17)),
            ("0", Some(0)),
            ("4294967295", Some(u32::MAX)),
            ("007", None),
            ("+5", None),
            (" 5", None),
            ("4294967296", None),
            ("", None),
        ] {
            assert_eq!(parse_integration_id(id), expect, "{id:?}");
        }

        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();
        let mut group = models::NotificationGroup::example();
        group.webhooks_settings[0].integration_id = Some("+17".to_string());

        expand_notification_group(&group, root, &mut diagnostics);
        assert_eq!(
            diagnostics.into_inner()[0].path,
            "/webhooks_settings/0/integration_id".to_string()
        );
    }

    #[test]
    fn test_incidents_settings() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();
        let settings = models::IncidentsSettings::example();

        let wire = expand_incidents_settings(&settings, root, &mut diagnostics);
        assert_eq!(
            wire,
            proto::AlertDefIncidentSettings {
                minutes: Some(10),
                notify_on: proto::NotifyOn::TriggeredAndResolved as i32,
            }
        );
        assert_eq!(flatten_incidents_settings(&wire, root, &mut diagnostics), settings);

        let mut bad = settings.clone();
        bad.notify_on = "Always".to_string();
        expand_incidents_settings(&bad, root, &mut diagnostics);
        assert_eq!(diagnostics.len(), 1);
    }
}
