use lifecycle::{AlertsService, Error, MemoryAlerts};
use models::{AlertDefinition, Computed};

const FIXTURE: &str = r#"
name: checkout latency
priority: P2
schedule:
  active_on:
    days_of_week: [Monday, Tuesday]
    start_time: "07:00"
    end_time: "19:30"
    utc_offset: "+0100"
type_definition:
  metric_threshold:
    metric_filter:
      promql: histogram_quantile(0.99, sum(rate(latency_bucket[5m])) by (le, service))
    missing_values:
      min_non_null_values_pct: 50
    rules:
      - condition:
          threshold: 2.5
          for_over_pct: 80
          of_the_last: 10_MINUTES
          condition_type: MORE_THAN
"#;

fn desired() -> AlertDefinition {
    serde_yaml::from_str(FIXTURE).unwrap()
}

#[tokio::test]
async fn test_create_read_update_delete() {
    let _ = tracing_subscriber::fmt().try_init();
    let service = MemoryAlerts::new();
    let desired = desired();

    let created = lifecycle::create(&service, &desired).await.unwrap();
    let state = created.state;

    assert_eq!(state.id.as_deref(), Some("alert-0001"));
    assert_eq!(state.deleted, Some(false));
    assert_eq!(state.schedule, desired.schedule);
    // The deprecated top-level priority is reported, and resolves rule priorities.
    assert_eq!(created.warnings.len(), 1);
    assert_eq!(
        state.type_definition.metric_threshold.as_ref().unwrap().rules[0]
            .r#override
            .as_ref()
            .unwrap()
            .priority
            .as_deref(),
        Some("P2")
    );

    let read = lifecycle::read(&service, &state).await.unwrap().unwrap();
    assert_eq!(read.state, state);
    assert!(read.warnings.is_empty());

    // Update with an unchanged query carries the recorded group-by.
    let mut recorded = state.clone();
    recorded.group_by = Computed::Known(vec!["service".to_string()]);

    let mut next = desired.clone();
    next.priority = None;
    next.description = Some("p99 latency of checkout".to_string());

    let updated = lifecycle::update(&service, &next, &recorded).await.unwrap();
    assert_eq!(updated.state.id, state.id);
    assert_eq!(updated.state.description, next.description);
    assert_eq!(updated.state.group_by, recorded.group_by);
    assert!(updated.warnings.is_empty());

    lifecycle::delete(&service, &updated.state).await.unwrap();
    assert!(service.snapshot().await.is_empty());
}

#[tokio::test]
async fn test_drift_is_a_warning() {
    let _ = tracing_subscriber::fmt().try_init();
    let service = MemoryAlerts::new();
    let state = lifecycle::create(&service, &desired()).await.unwrap().state;

    let id = state.id.clone().unwrap();
    assert!(service.remove(&id).await.is_some());

    // A read of a removed alert drops the record.
    assert!(lifecycle::read(&service, &state).await.unwrap().is_none());
    // A delete of a removed alert succeeds.
    lifecycle::delete(&service, &state).await.unwrap();
}

#[tokio::test]
async fn test_invalid_alerts_are_never_sent() {
    let service = MemoryAlerts::new();

    let mut desired = desired();
    desired.name = String::new();
    desired.type_definition.logs_immediate = Some(Default::default());

    let err = lifecycle::create(&service, &desired).await.unwrap_err();
    insta::assert_snapshot!(err.to_string(), @r#"
    alert definition "" is invalid:
    error: /name: name cannot be empty
    warning: /priority: priority is deprecated: set override.priority of each rule
    error: /type_definition: type_definition must set exactly one alert type, but logs_immediate, metric_threshold are set
    "#);

    assert!(service.snapshot().await.is_empty());
}

#[tokio::test]
async fn test_transport_errors_name_their_operation() {
    let service = MemoryAlerts::new();
    let state = lifecycle::create(&service, &desired()).await.unwrap().state;

    service.fail_next("connection reset").await;
    let err = lifecycle::read(&service, &state).await.unwrap_err();

    let Error::Transport {
        operation,
        request,
        source,
    } = err
    else {
        panic!("expected a transport error");
    };
    assert_eq!(operation, "get");
    assert_eq!(request, "alert-0001");
    assert_eq!(source.to_string(), "connection reset");

    // Uncreated alerts have no id to read.
    let err = lifecycle::read(&service, &desired()).await.unwrap_err();
    assert!(matches!(err, Error::MissingId { .. }));
}

#[tokio::test]
async fn test_unreadable_responses_are_conversion_errors() {
    let service = MemoryAlerts::new();
    let state = lifecycle::create(&service, &desired()).await.unwrap().state;

    let id = state.id.clone().unwrap();
    let mut wire = service.remove(&id).await.unwrap();
    wire.alert_def_properties.as_mut().unwrap().r#type = 99;
    service.create(wire).await.unwrap();

    let mut recorded = state.clone();
    recorded.id = Some("alert-0002".to_string());

    let err = lifecycle::read(&service, &recorded).await.unwrap_err();
    insta::assert_snapshot!(err.to_string(), @r"
    alerts service returned an alert definition which could not be read:
    error: /type: alerts service returned alert type code 99, which this client does not recognize
    ");
}
