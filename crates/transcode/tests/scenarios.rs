use models::{AlertDefinition, Computed};
use proto_alerts::alerts as proto;
use proto_alerts::alerts::alert_def_properties::TypeDefinition as WireType;

fn parse(fixture: &str) -> AlertDefinition {
    serde_yaml::from_str(fixture).unwrap()
}

fn properties(wire: &proto::AlertDef) -> &proto::AlertDefProperties {
    wire.alert_def_properties.as_ref().unwrap()
}

const LOGS_THRESHOLD: &str = r#"
name: checkout errors
type_definition:
  logs_threshold:
    logs_filter:
      simple_filter:
        lucene_query: "service:checkout AND level:error"
        label_filters:
          application_name:
            - value: shop
          severities: [Error, Critical]
    rules:
      - condition:
          threshold: 50
          time_window: 10_MINUTES
          condition_type: MORE_THAN
      - condition:
          threshold: 500
          time_window: 1_HOUR
          condition_type: MORE_THAN
        override:
          priority: P1
"#;

const METRIC_THRESHOLD: &str = r#"
name: ingest stalled
type_definition:
  metric_threshold:
    metric_filter:
      promql: sum(x)
    missing_values:
      replace_with_zero: true
    rules:
      - condition:
          threshold: 0
          for_over_pct: 100
          of_the_last: 1h30m
          condition_type: LESS_THAN_OR_EQUALS
"#;

fn wire_priorities(wire: &proto::AlertDef) -> Vec<i32> {
    let Some(WireType::LogsThreshold(logs)) = &properties(wire).type_definition else {
        panic!("expected a logs_threshold alert");
    };
    logs.rules
        .iter()
        .map(|rule| rule.r#override.as_ref().unwrap().priority)
        .collect()
}

#[test]
fn test_round_trip_of_reconciled_documents() {
    let fixtures = [
        LOGS_THRESHOLD,
        METRIC_THRESHOLD,
        r#"
name: slow checkout
description: Checkout spans are slow
enabled: false
phantom_mode: true
labels: {team: payments}
schedule:
  active_on:
    days_of_week: [Saturday, Sunday]
    start_time: "09:15"
    end_time: "17:45"
    utc_offset: "-0530"
incidents_settings:
  notify_on: Triggered and Resolved
  retriggering_period: {minutes: 30}
type_definition:
  tracing_immediate:
    tracing_filter:
      latency_threshold_ms: 2500
      tracing_label_filters:
        service_name:
          - values: [checkout]
            operation: IS
    notification_payload_filter: [duration]
"#,
        r#"
name: checkout flow
type_definition:
  flow:
    enforce_suppression: true
    stages:
      - timeframe_ms: 60000
        timeframe_type: Up To
        flow_stages_groups:
          - next_op: OR
            alerts_op: AND
            alert_defs:
              - {id: alert-a}
              - {id: alert-b, not: true}
"#,
    ];

    for fixture in fixtures {
        let desired = parse(fixture);
        let (wire, diagnostics) = transcode::to_wire(&desired, None);
        assert!(diagnostics.is_empty(), "{}: {diagnostics}", desired.name);

        let (actual, diagnostics) = transcode::from_wire(&wire, desired.schedule.as_ref());
        assert!(diagnostics.is_empty(), "{}: {diagnostics}", desired.name);

        assert_eq!(actual, transcode::reconcile(&desired, None));
    }
}

#[test]
fn test_rule_priority_fallback() {
    let mut desired = parse(LOGS_THRESHOLD);
    let (p5, p3, p1) = (
        proto::AlertDefPriority::P5OrUnspecified as i32,
        proto::AlertDefPriority::P3 as i32,
        proto::AlertDefPriority::P1 as i32,
    );

    let (wire, _) = transcode::to_wire(&desired, None);
    assert_eq!(wire_priorities(&wire), vec![p5, p1]);

    desired.priority = Some("P3".to_string());
    let (wire, diagnostics) = transcode::to_wire(&desired, None);
    assert_eq!(wire_priorities(&wire), vec![p3, p1]);

    // The top-level priority is still sent, with a deprecation warning.
    assert_eq!(properties(&wire).priority, p3);
    insta::assert_snapshot!(diagnostics.to_string(), @r"warning: /priority: priority is deprecated: set override.priority of each rule");

    // An invalid top-level priority is reported once, where it's written.
    desired.priority = Some("P9".to_string());
    let (wire, diagnostics) = transcode::to_wire(&desired, None);
    assert_eq!(wire_priorities(&wire), vec![p5, p1]);

    insta::assert_snapshot!(diagnostics.to_string(), @r#"
    warning: /priority: priority is deprecated: set override.priority of each rule
    error: /priority: "P9" is not a valid priority (expected one of "P1", "P2", "P3", "P4", "P5")
    "#);
}

#[test]
fn test_group_by_carries_over_unchanged_queries() {
    let mut prior = parse(METRIC_THRESHOLD);
    prior.group_by = Computed::Known(vec!["service".to_string()]);

    let desired = parse(METRIC_THRESHOLD);
    let (wire, diagnostics) = transcode::to_wire(&desired, Some(&prior));
    assert!(diagnostics.is_empty());
    assert_eq!(properties(&wire).group_by_keys, vec!["service".to_string()]);

    let mut desired = parse(METRIC_THRESHOLD);
    desired
        .type_definition
        .metric_threshold
        .as_mut()
        .unwrap()
        .metric_filter
        .promql = "sum(y)".to_string();

    assert_eq!(
        transcode::reconcile(&desired, Some(&prior)).group_by,
        Computed::Unresolved
    );
    // Unresolved group-by keys are sent empty, for the service to derive.
    let (wire, _) = transcode::to_wire(&desired, Some(&prior));
    assert!(properties(&wire).group_by_keys.is_empty());
}

#[test]
fn test_group_by_is_rejected_for_server_grouped_alerts() {
    let fixture = r#"
name: any error
group_by: [service]
type_definition:
  logs_immediate:
    logs_filter:
      simple_filter:
        lucene_query: "level:error"
"#;
    let (_, diagnostics) = transcode::to_wire(&parse(fixture), None);
    insta::assert_snapshot!(diagnostics.to_string(), @r"error: /group_by: group_by cannot be set for logs_immediate alerts, which are grouped by the service");

    let mut desired = parse(fixture);
    desired.group_by = Computed::Known(Vec::new());
    let (_, diagnostics) = transcode::to_wire(&desired, None);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_overnight_schedule_is_rejected() {
    let mut desired = parse(METRIC_THRESHOLD);
    desired.schedule = Some(
        serde_json::from_value(serde_json::json!({"active_on": {
            "days_of_week": ["Monday"],
            "start_time": "23:00",
            "end_time": "01:00",
            "utc_offset": "+0000",
        }}))
        .unwrap(),
    );

    let (_, diagnostics) = transcode::to_wire(&desired, None);
    insta::assert_snapshot!(diagnostics.to_string(), @r"error: /schedule/active_on/end_time: schedule end time 01:00 precedes its start time 23:00");
}

#[test]
fn test_type_definition_must_select_one_alert_type() {
    let mut desired = parse(METRIC_THRESHOLD);
    desired.type_definition = Default::default();

    let (wire, diagnostics) = transcode::to_wire(&desired, None);
    assert_eq!(properties(&wire).type_definition, None);

    let mut many = parse(METRIC_THRESHOLD);
    many.type_definition.logs_immediate = Some(Default::default());
    let (_, more) = transcode::to_wire(&many, None);

    insta::assert_snapshot!(format!("{diagnostics}{more}"), @r"
    error: /type_definition: type_definition must set one alert type, but none is set
    error: /type_definition: type_definition must set exactly one alert type, but logs_immediate, metric_threshold are set
    ");
}

#[test]
fn test_every_problem_is_reported_in_one_pass() {
    let fixture = r#"
name: ""
type_definition:
  logs_threshold:
    logs_filter:
      simple_filter:
        label_filters:
          severities: [Fatal]
    rules:
      - condition:
          threshold: 1
          time_window: 3_MINUTES
          condition_type: MORE_THAN
      - condition:
          threshold: 1
          time_window: 5_MINUTES
          condition_type: AT_LEAST
        override:
          priority: P0
notification_group:
  webhooks_settings:
    - integration_id: "seventeen"
"#;
    let (_, diagnostics) = transcode::to_wire(&parse(fixture), None);

    insta::assert_snapshot!(diagnostics.to_string(), @r#"
    error: /name: name cannot be empty
    error: /type_definition/logs_threshold/logs_filter/simple_filter/label_filters/severities: "Fatal" is not a valid log severity (expected one of "Verbose", "Debug", "Info", "Warning", "Error", "Critical")
    error: /type_definition/logs_threshold/rules/0/condition/time_window: "3_MINUTES" is not a valid logs time window (expected one of "5_MINUTES", "10_MINUTES", "15_MINUTES", "30_MINUTES", "1_HOUR", "2_HOURS", "6_HOURS", "12_HOURS", "24_HOURS", "36_HOURS")
    error: /type_definition/logs_threshold/rules/1/condition/condition_type: "AT_LEAST" is not a valid logs threshold condition type (expected one of "MORE_THAN", "LESS_THAN")
    error: /type_definition/logs_threshold/rules/1/override/priority: "P0" is not a valid priority (expected one of "P1", "P2", "P3", "P4", "P5")
    error: /notification_group/webhooks_settings/0/integration_id: integration id "seventeen" must be an unsigned 32-bit integer, without a sign or leading zeros
    "#);
}

#[test]
fn test_conversion_errors_from_newer_services() {
    let desired = parse(LOGS_THRESHOLD);
    let (mut wire, _) = transcode::to_wire(&desired, None);

    let Some(WireType::LogsThreshold(logs)) =
        &mut wire.alert_def_properties.as_mut().unwrap().type_definition
    else {
        unreachable!()
    };
    logs.rules[1].r#override.as_mut().unwrap().priority = 9;

    let (_, diagnostics) = transcode::from_wire(&wire, None);
    assert!(diagnostics.iter().all(|d| d.error.is_conversion()));
    insta::assert_snapshot!(diagnostics.to_string(), @r"error: /type_definition/logs_threshold/rules/1/override/priority: alerts service returned priority code 9, which this client does not recognize");
}
