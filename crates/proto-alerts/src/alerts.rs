/// AlertDef is an alert definition as stored by the alerting service.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AlertDef {
    /// Identifier assigned by the service on creation.
    #[prost(string, optional, tag="1")]
    pub id: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag="2")]
    pub alert_def_properties: ::core::option::Option<AlertDefProperties>,
}
/// AlertDefProperties are the user-controlled properties of an AlertDef.
///
/// Next tag: 13, and 114 within `type_definition`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AlertDefProperties {
    #[prost(string, optional, tag="1")]
    pub name: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag="2")]
    pub description: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(bool, optional, tag="3")]
    pub enabled: ::core::option::Option<bool>,
    #[prost(enumeration="AlertDefPriority", tag="4")]
    pub priority: i32,
    /// Weekly activity schedule. Times are in UTC.
    #[prost(message, optional, tag="5")]
    pub active_on: ::core::option::Option<ActivitySchedule>,
    /// Kind of the alert, which must agree with the populated `type_definition`.
    #[prost(enumeration="AlertDefType", tag="6")]
    pub r#type: i32,
    #[prost(string, repeated, tag="7")]
    pub group_by_keys: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag="8")]
    pub incidents_settings: ::core::option::Option<AlertDefIncidentSettings>,
    #[prost(message, optional, tag="9")]
    pub notification_group: ::core::option::Option<AlertDefNotificationGroup>,
    #[prost(btree_map="string, string", tag="10")]
    pub entity_labels: ::prost::alloc::collections::BTreeMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
    #[prost(bool, optional, tag="11")]
    pub phantom_mode: ::core::option::Option<bool>,
    /// Set by the service when the alert has been deleted.
    #[prost(bool, optional, tag="12")]
    pub deleted: ::core::option::Option<bool>,
    #[prost(oneof="alert_def_properties::TypeDefinition", tags="101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113")]
    pub type_definition: ::core::option::Option<alert_def_properties::TypeDefinition>,
}
/// Nested message and enum types in `AlertDefProperties`.
pub mod alert_def_properties {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum TypeDefinition {
        #[prost(message, tag="101")]
        LogsImmediate(super::LogsImmediateType),
        #[prost(message, tag="102")]
        LogsThreshold(super::LogsThresholdType),
        #[prost(message, tag="103")]
        LogsAnomaly(super::LogsAnomalyType),
        #[prost(message, tag="104")]
        LogsRatioThreshold(super::LogsRatioThresholdType),
        #[prost(message, tag="105")]
        LogsNewValue(super::LogsNewValueType),
        #[prost(message, tag="106")]
        LogsUniqueCount(super::LogsUniqueCountType),
        #[prost(message, tag="107")]
        LogsTimeRelativeThreshold(super::LogsTimeRelativeThresholdType),
        #[prost(message, tag="108")]
        MetricThreshold(super::MetricThresholdType),
        #[prost(message, tag="109")]
        MetricAnomaly(super::MetricAnomalyType),
        #[prost(message, tag="110")]
        TracingImmediate(super::TracingImmediateType),
        #[prost(message, tag="111")]
        TracingThreshold(super::TracingThresholdType),
        #[prost(message, tag="112")]
        Flow(super::FlowType),
        #[prost(message, tag="113")]
        SloThreshold(super::SloThresholdType),
    }
}
/// ActivitySchedule is the weekly window in which an alert is active.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActivitySchedule {
    #[prost(enumeration="DayOfWeek", repeated, tag="1")]
    pub day_of_week: ::prost::alloc::vec::Vec<i32>,
    #[prost(message, optional, tag="2")]
    pub start_time: ::core::option::Option<TimeOfDay>,
    #[prost(message, optional, tag="3")]
    pub end_time: ::core::option::Option<TimeOfDay>,
}
/// TimeOfDay is a UTC wall-clock time.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TimeOfDay {
    #[prost(int32, tag="1")]
    pub hours: i32,
    #[prost(int32, tag="2")]
    pub minutes: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AlertDefIncidentSettings {
    /// Minimum minutes between re-triggered incidents.
    #[prost(uint32, optional, tag="1")]
    pub minutes: ::core::option::Option<u32>,
    #[prost(enumeration="NotifyOn", tag="2")]
    pub notify_on: i32,
}
/// AlertDefOverride overrides alert-wide settings for a single rule.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AlertDefOverride {
    #[prost(enumeration="AlertDefPriority", tag="1")]
    pub priority: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AlertDefNotificationGroup {
    #[prost(string, repeated, tag="1")]
    pub group_by_keys: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, repeated, tag="2")]
    pub webhooks: ::prost::alloc::vec::Vec<AlertDefWebhooksSettings>,
    #[prost(message, repeated, tag="3")]
    pub destinations: ::prost::alloc::vec::Vec<NotificationDestination>,
    #[prost(message, optional, tag="4")]
    pub router: ::core::option::Option<NotificationRouter>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AlertDefWebhooksSettings {
    #[prost(enumeration="NotifyOn", tag="1")]
    pub notify_on: i32,
    #[prost(message, optional, tag="2")]
    pub integration: ::core::option::Option<IntegrationType>,
    /// Minimum minutes between repeated notifications.
    #[prost(uint32, optional, tag="3")]
    pub minutes: ::core::option::Option<u32>,
}
/// IntegrationType is the target of a webhook notification.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IntegrationType {
    #[prost(oneof="integration_type::IntegrationType", tags="1, 2")]
    pub integration_type: ::core::option::Option<integration_type::IntegrationType>,
}
/// Nested message and enum types in `IntegrationType`.
pub mod integration_type {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum IntegrationType {
        #[prost(uint32, tag="1")]
        IntegrationId(u32),
        #[prost(message, tag="2")]
        Recipients(super::Recipients),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Recipients {
    #[prost(string, repeated, tag="1")]
    pub emails: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
/// NotificationDestination is a notification-center connector and preset.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NotificationDestination {
    #[prost(string, tag="1")]
    pub connector_id: ::prost::alloc::string::String,
    #[prost(string, optional, tag="2")]
    pub preset_id: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(enumeration="NotifyOn", tag="3")]
    pub notify_on: i32,
    #[prost(message, optional, tag="4")]
    pub triggered_routing_overrides: ::core::option::Option<NotificationRouting>,
    #[prost(message, optional, tag="5")]
    pub resolved_routing_overrides: ::core::option::Option<NotificationRouting>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NotificationRouting {
    #[prost(message, optional, tag="1")]
    pub config_overrides: ::core::option::Option<SourceOverrides>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SourceOverrides {
    #[prost(string, optional, tag="1")]
    pub output_schema_id: ::core::option::Option<::prost::alloc::string::String>,
    /// Overrides of preset message fields.
    #[prost(message, repeated, tag="2")]
    pub message_config_fields: ::prost::alloc::vec::Vec<ConfigField>,
    /// Overrides of connector fields.
    #[prost(message, repeated, tag="3")]
    pub connector_config_fields: ::prost::alloc::vec::Vec<ConfigField>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConfigField {
    #[prost(string, tag="1")]
    pub field_name: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub template: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NotificationRouter {
    #[prost(enumeration="NotifyOn", tag="1")]
    pub notify_on: i32,
}
/// LogsFilter selects log entries. An unset `filter_type` matches all logs.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsFilter {
    #[prost(oneof="logs_filter::FilterType", tags="1")]
    pub filter_type: ::core::option::Option<logs_filter::FilterType>,
}
/// Nested message and enum types in `LogsFilter`.
pub mod logs_filter {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum FilterType {
        #[prost(message, tag="1")]
        SimpleFilter(super::LogsSimpleFilter),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsSimpleFilter {
    #[prost(string, optional, tag="1")]
    pub lucene_query: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag="2")]
    pub label_filters: ::core::option::Option<LabelFilters>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LabelFilters {
    #[prost(message, repeated, tag="1")]
    pub application_name: ::prost::alloc::vec::Vec<LabelFilterType>,
    #[prost(message, repeated, tag="2")]
    pub subsystem_name: ::prost::alloc::vec::Vec<LabelFilterType>,
    #[prost(enumeration="LogSeverity", repeated, tag="3")]
    pub severities: ::prost::alloc::vec::Vec<i32>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LabelFilterType {
    #[prost(string, optional, tag="1")]
    pub value: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(enumeration="LogFilterOperationType", tag="2")]
    pub operation: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetricFilter {
    #[prost(oneof="metric_filter::Type", tags="1")]
    pub r#type: ::core::option::Option<metric_filter::Type>,
}
/// Nested message and enum types in `MetricFilter`.
pub mod metric_filter {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Type {
        #[prost(string, tag="1")]
        Promql(::prost::alloc::string::String),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TracingFilter {
    #[prost(oneof="tracing_filter::FilterType", tags="1")]
    pub filter_type: ::core::option::Option<tracing_filter::FilterType>,
}
/// Nested message and enum types in `TracingFilter`.
pub mod tracing_filter {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum FilterType {
        #[prost(message, tag="1")]
        SimpleFilter(super::TracingSimpleFilter),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TracingSimpleFilter {
    #[prost(message, optional, tag="1")]
    pub tracing_label_filters: ::core::option::Option<TracingLabelFilters>,
    #[prost(uint64, optional, tag="2")]
    pub latency_threshold_ms: ::core::option::Option<u64>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TracingLabelFilters {
    #[prost(message, repeated, tag="1")]
    pub application_name: ::prost::alloc::vec::Vec<TracingFilterType>,
    #[prost(message, repeated, tag="2")]
    pub subsystem_name: ::prost::alloc::vec::Vec<TracingFilterType>,
    #[prost(message, repeated, tag="3")]
    pub service_name: ::prost::alloc::vec::Vec<TracingFilterType>,
    #[prost(message, repeated, tag="4")]
    pub operation_name: ::prost::alloc::vec::Vec<TracingFilterType>,
    #[prost(message, repeated, tag="5")]
    pub span_fields: ::prost::alloc::vec::Vec<TracingSpanFieldsFilterType>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TracingFilterType {
    #[prost(string, repeated, tag="1")]
    pub values: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(enumeration="TracingFilterOperationType", tag="2")]
    pub operation: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TracingSpanFieldsFilterType {
    #[prost(string, optional, tag="1")]
    pub key: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag="2")]
    pub filter_type: ::core::option::Option<TracingFilterType>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsTimeWindow {
    #[prost(oneof="logs_time_window::Type", tags="1")]
    pub r#type: ::core::option::Option<logs_time_window::Type>,
}
/// Nested message and enum types in `LogsTimeWindow`.
pub mod logs_time_window {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Type {
        #[prost(enumeration="super::LogsTimeWindowValue", tag="1")]
        LogsTimeWindowSpecificValue(i32),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsRatioTimeWindow {
    #[prost(oneof="logs_ratio_time_window::Type", tags="1")]
    pub r#type: ::core::option::Option<logs_ratio_time_window::Type>,
}
/// Nested message and enum types in `LogsRatioTimeWindow`.
pub mod logs_ratio_time_window {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Type {
        #[prost(enumeration="super::LogsRatioTimeWindowValue", tag="1")]
        LogsRatioTimeWindowSpecificValue(i32),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsNewValueTimeWindow {
    #[prost(oneof="logs_new_value_time_window::Type", tags="1")]
    pub r#type: ::core::option::Option<logs_new_value_time_window::Type>,
}
/// Nested message and enum types in `LogsNewValueTimeWindow`.
pub mod logs_new_value_time_window {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Type {
        #[prost(enumeration="super::LogsNewValueTimeWindowValue", tag="1")]
        LogsNewValueTimeWindowSpecificValue(i32),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsUniqueValueTimeWindow {
    #[prost(oneof="logs_unique_value_time_window::Type", tags="1")]
    pub r#type: ::core::option::Option<logs_unique_value_time_window::Type>,
}
/// Nested message and enum types in `LogsUniqueValueTimeWindow`.
pub mod logs_unique_value_time_window {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Type {
        #[prost(enumeration="super::LogsUniqueValueTimeWindowValue", tag="1")]
        LogsUniqueValueTimeWindowSpecificValue(i32),
    }
}
/// MetricTimeWindow is either a fixed window or an arbitrary duration
/// such as "1h30m".
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetricTimeWindow {
    #[prost(oneof="metric_time_window::Type", tags="1, 2")]
    pub r#type: ::core::option::Option<metric_time_window::Type>,
}
/// Nested message and enum types in `MetricTimeWindow`.
pub mod metric_time_window {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Type {
        #[prost(enumeration="super::MetricTimeWindowValue", tag="1")]
        MetricTimeWindowSpecificValue(i32),
        #[prost(string, tag="2")]
        MetricTimeWindowDynamicDuration(::prost::alloc::string::String),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TracingTimeWindow {
    #[prost(oneof="tracing_time_window::Type", tags="1")]
    pub r#type: ::core::option::Option<tracing_time_window::Type>,
}
/// Nested message and enum types in `TracingTimeWindow`.
pub mod tracing_time_window {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Type {
        #[prost(enumeration="super::TracingTimeWindowValue", tag="1")]
        TracingTimeWindowValue(i32),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UndetectedValuesManagement {
    #[prost(bool, optional, tag="1")]
    pub trigger_undetected_values: ::core::option::Option<bool>,
    #[prost(enumeration="AutoRetireTimeframe", tag="2")]
    pub auto_retire_timeframe: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsImmediateType {
    #[prost(message, optional, tag="1")]
    pub logs_filter: ::core::option::Option<LogsFilter>,
    #[prost(string, repeated, tag="2")]
    pub notification_payload_filter: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsThresholdType {
    #[prost(message, optional, tag="1")]
    pub logs_filter: ::core::option::Option<LogsFilter>,
    #[prost(message, optional, tag="2")]
    pub undetected_values_management: ::core::option::Option<UndetectedValuesManagement>,
    #[prost(message, repeated, tag="3")]
    pub rules: ::prost::alloc::vec::Vec<LogsThresholdRule>,
    #[prost(string, repeated, tag="4")]
    pub notification_payload_filter: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int32, optional, tag="5")]
    pub evaluation_delay_ms: ::core::option::Option<i32>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsThresholdRule {
    #[prost(message, optional, tag="1")]
    pub condition: ::core::option::Option<LogsThresholdCondition>,
    #[prost(message, optional, tag="2")]
    pub r#override: ::core::option::Option<AlertDefOverride>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsThresholdCondition {
    #[prost(double, optional, tag="1")]
    pub threshold: ::core::option::Option<f64>,
    #[prost(message, optional, tag="2")]
    pub time_window: ::core::option::Option<LogsTimeWindow>,
    #[prost(enumeration="LogsThresholdConditionType", tag="3")]
    pub condition_type: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsAnomalyType {
    #[prost(message, optional, tag="1")]
    pub logs_filter: ::core::option::Option<LogsFilter>,
    #[prost(message, repeated, tag="2")]
    pub rules: ::prost::alloc::vec::Vec<LogsAnomalyRule>,
    #[prost(string, repeated, tag="3")]
    pub notification_payload_filter: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int32, optional, tag="4")]
    pub evaluation_delay_ms: ::core::option::Option<i32>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsAnomalyRule {
    #[prost(message, optional, tag="1")]
    pub condition: ::core::option::Option<LogsAnomalyCondition>,
    #[prost(message, optional, tag="2")]
    pub r#override: ::core::option::Option<AlertDefOverride>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsAnomalyCondition {
    #[prost(double, optional, tag="1")]
    pub minimum_threshold: ::core::option::Option<f64>,
    #[prost(message, optional, tag="2")]
    pub time_window: ::core::option::Option<LogsTimeWindow>,
    #[prost(enumeration="LogsAnomalyConditionType", tag="3")]
    pub condition_type: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsRatioThresholdType {
    #[prost(message, optional, tag="1")]
    pub numerator: ::core::option::Option<LogsFilter>,
    #[prost(string, optional, tag="2")]
    pub numerator_alias: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag="3")]
    pub denominator: ::core::option::Option<LogsFilter>,
    #[prost(string, optional, tag="4")]
    pub denominator_alias: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, repeated, tag="5")]
    pub rules: ::prost::alloc::vec::Vec<LogsRatioRule>,
    #[prost(string, repeated, tag="6")]
    pub notification_payload_filter: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(enumeration="LogsRatioGroupByFor", tag="7")]
    pub group_by_for: i32,
    #[prost(int32, optional, tag="8")]
    pub evaluation_delay_ms: ::core::option::Option<i32>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsRatioRule {
    #[prost(message, optional, tag="1")]
    pub condition: ::core::option::Option<LogsRatioCondition>,
    #[prost(message, optional, tag="2")]
    pub r#override: ::core::option::Option<AlertDefOverride>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsRatioCondition {
    #[prost(double, optional, tag="1")]
    pub threshold: ::core::option::Option<f64>,
    #[prost(message, optional, tag="2")]
    pub time_window: ::core::option::Option<LogsRatioTimeWindow>,
    #[prost(enumeration="LogsRatioConditionType", tag="3")]
    pub condition_type: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsNewValueType {
    #[prost(message, optional, tag="1")]
    pub logs_filter: ::core::option::Option<LogsFilter>,
    #[prost(message, repeated, tag="2")]
    pub rules: ::prost::alloc::vec::Vec<LogsNewValueRule>,
    #[prost(string, repeated, tag="3")]
    pub notification_payload_filter: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsNewValueRule {
    #[prost(message, optional, tag="1")]
    pub condition: ::core::option::Option<LogsNewValueCondition>,
    #[prost(message, optional, tag="2")]
    pub r#override: ::core::option::Option<AlertDefOverride>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsNewValueCondition {
    #[prost(string, optional, tag="1")]
    pub keypath_to_track: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag="2")]
    pub time_window: ::core::option::Option<LogsNewValueTimeWindow>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsUniqueCountType {
    #[prost(message, optional, tag="1")]
    pub logs_filter: ::core::option::Option<LogsFilter>,
    #[prost(message, repeated, tag="2")]
    pub rules: ::prost::alloc::vec::Vec<LogsUniqueCountRule>,
    #[prost(string, repeated, tag="3")]
    pub notification_payload_filter: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int64, optional, tag="4")]
    pub max_unique_count_per_group_by_key: ::core::option::Option<i64>,
    #[prost(string, optional, tag="5")]
    pub unique_count_keypath: ::core::option::Option<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsUniqueCountRule {
    #[prost(message, optional, tag="1")]
    pub condition: ::core::option::Option<LogsUniqueCountCondition>,
    #[prost(message, optional, tag="2")]
    pub r#override: ::core::option::Option<AlertDefOverride>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsUniqueCountCondition {
    #[prost(int64, optional, tag="1")]
    pub max_unique_count: ::core::option::Option<i64>,
    #[prost(message, optional, tag="2")]
    pub time_window: ::core::option::Option<LogsUniqueValueTimeWindow>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsTimeRelativeThresholdType {
    #[prost(message, optional, tag="1")]
    pub logs_filter: ::core::option::Option<LogsFilter>,
    #[prost(message, repeated, tag="2")]
    pub rules: ::prost::alloc::vec::Vec<LogsTimeRelativeRule>,
    #[prost(string, repeated, tag="3")]
    pub notification_payload_filter: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag="4")]
    pub undetected_values_management: ::core::option::Option<UndetectedValuesManagement>,
    #[prost(int32, optional, tag="5")]
    pub evaluation_delay_ms: ::core::option::Option<i32>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsTimeRelativeRule {
    #[prost(message, optional, tag="1")]
    pub condition: ::core::option::Option<LogsTimeRelativeCondition>,
    #[prost(message, optional, tag="2")]
    pub r#override: ::core::option::Option<AlertDefOverride>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogsTimeRelativeCondition {
    #[prost(double, optional, tag="1")]
    pub threshold: ::core::option::Option<f64>,
    #[prost(enumeration="LogsTimeRelativeComparedTo", tag="2")]
    pub compared_to: i32,
    #[prost(bool, optional, tag="3")]
    pub ignore_infinity: ::core::option::Option<bool>,
    #[prost(enumeration="LogsTimeRelativeConditionType", tag="4")]
    pub condition_type: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetricThresholdType {
    #[prost(message, optional, tag="1")]
    pub metric_filter: ::core::option::Option<MetricFilter>,
    #[prost(message, repeated, tag="2")]
    pub rules: ::prost::alloc::vec::Vec<MetricThresholdRule>,
    #[prost(message, optional, tag="3")]
    pub undetected_values_management: ::core::option::Option<UndetectedValuesManagement>,
    #[prost(message, optional, tag="4")]
    pub missing_values: ::core::option::Option<MetricMissingValues>,
    #[prost(int32, optional, tag="5")]
    pub evaluation_delay_ms: ::core::option::Option<i32>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetricThresholdRule {
    #[prost(message, optional, tag="1")]
    pub condition: ::core::option::Option<MetricThresholdCondition>,
    #[prost(message, optional, tag="2")]
    pub r#override: ::core::option::Option<AlertDefOverride>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetricThresholdCondition {
    #[prost(double, optional, tag="1")]
    pub threshold: ::core::option::Option<f64>,
    #[prost(uint32, optional, tag="2")]
    pub for_over_pct: ::core::option::Option<u32>,
    #[prost(message, optional, tag="3")]
    pub of_the_last: ::core::option::Option<MetricTimeWindow>,
    #[prost(enumeration="MetricThresholdConditionType", tag="4")]
    pub condition_type: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetricMissingValues {
    #[prost(oneof="metric_missing_values::MissingValues", tags="1, 2")]
    pub missing_values: ::core::option::Option<metric_missing_values::MissingValues>,
}
/// Nested message and enum types in `MetricMissingValues`.
pub mod metric_missing_values {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum MissingValues {
        #[prost(bool, tag="1")]
        ReplaceWithZero(bool),
        #[prost(uint32, tag="2")]
        MinNonNullValuesPct(u32),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetricAnomalyType {
    #[prost(message, optional, tag="1")]
    pub metric_filter: ::core::option::Option<MetricFilter>,
    #[prost(message, repeated, tag="2")]
    pub rules: ::prost::alloc::vec::Vec<MetricAnomalyRule>,
    #[prost(int32, optional, tag="3")]
    pub evaluation_delay_ms: ::core::option::Option<i32>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetricAnomalyRule {
    #[prost(message, optional, tag="1")]
    pub condition: ::core::option::Option<MetricAnomalyCondition>,
    #[prost(message, optional, tag="2")]
    pub r#override: ::core::option::Option<AlertDefOverride>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetricAnomalyCondition {
    #[prost(double, optional, tag="1")]
    pub threshold: ::core::option::Option<f64>,
    #[prost(uint32, optional, tag="2")]
    pub for_over_pct: ::core::option::Option<u32>,
    #[prost(message, optional, tag="3")]
    pub of_the_last: ::core::option::Option<MetricTimeWindow>,
    #[prost(uint32, optional, tag="4")]
    pub min_non_null_values_pct: ::core::option::Option<u32>,
    #[prost(enumeration="MetricAnomalyConditionType", tag="5")]
    pub condition_type: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TracingImmediateType {
    #[prost(message, optional, tag="1")]
    pub tracing_filter: ::core::option::Option<TracingFilter>,
    #[prost(string, repeated, tag="2")]
    pub notification_payload_filter: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TracingThresholdType {
    #[prost(message, optional, tag="1")]
    pub tracing_filter: ::core::option::Option<TracingFilter>,
    #[prost(message, repeated, tag="2")]
    pub rules: ::prost::alloc::vec::Vec<TracingThresholdRule>,
    #[prost(string, repeated, tag="3")]
    pub notification_payload_filter: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TracingThresholdRule {
    #[prost(message, optional, tag="1")]
    pub condition: ::core::option::Option<TracingThresholdCondition>,
    #[prost(message, optional, tag="2")]
    pub r#override: ::core::option::Option<AlertDefOverride>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TracingThresholdCondition {
    #[prost(double, optional, tag="1")]
    pub span_amount: ::core::option::Option<f64>,
    #[prost(message, optional, tag="2")]
    pub time_window: ::core::option::Option<TracingTimeWindow>,
    #[prost(enumeration="TracingThresholdConditionType", tag="3")]
    pub condition_type: i32,
}
/// FlowType fires when referenced alerts fire in a sequence of stages.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FlowType {
    #[prost(message, repeated, tag="1")]
    pub stages: ::prost::alloc::vec::Vec<FlowStages>,
    #[prost(bool, optional, tag="2")]
    pub enforce_suppression: ::core::option::Option<bool>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FlowStages {
    #[prost(int64, optional, tag="1")]
    pub timeframe_ms: ::core::option::Option<i64>,
    #[prost(enumeration="TimeframeType", tag="2")]
    pub timeframe_type: i32,
    #[prost(oneof="flow_stages::FlowStages", tags="10")]
    pub flow_stages: ::core::option::Option<flow_stages::FlowStages>,
}
/// Nested message and enum types in `FlowStages`.
pub mod flow_stages {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum FlowStages {
        #[prost(message, tag="10")]
        FlowStagesGroups(super::FlowStagesGroups),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FlowStagesGroups {
    #[prost(message, repeated, tag="1")]
    pub groups: ::prost::alloc::vec::Vec<FlowStagesGroup>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FlowStagesGroup {
    #[prost(message, repeated, tag="1")]
    pub alert_defs: ::prost::alloc::vec::Vec<FlowStagesGroupsAlertDefs>,
    #[prost(enumeration="NextOp", tag="2")]
    pub next_op: i32,
    #[prost(enumeration="AlertsOp", tag="3")]
    pub alerts_op: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FlowStagesGroupsAlertDefs {
    #[prost(string, optional, tag="1")]
    pub id: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(bool, optional, tag="2")]
    pub not: ::core::option::Option<bool>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SloThresholdType {
    #[prost(message, optional, tag="1")]
    pub slo_definition: ::core::option::Option<SloDefinition>,
    #[prost(oneof="slo_threshold_type::Threshold", tags="2, 3")]
    pub threshold: ::core::option::Option<slo_threshold_type::Threshold>,
}
/// Nested message and enum types in `SloThresholdType`.
pub mod slo_threshold_type {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Threshold {
        #[prost(message, tag="2")]
        ErrorBudget(super::ErrorBudgetThreshold),
        #[prost(message, tag="3")]
        BurnRate(super::BurnRateThreshold),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SloDefinition {
    #[prost(string, optional, tag="1")]
    pub slo_id: ::core::option::Option<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ErrorBudgetThreshold {
    #[prost(message, repeated, tag="1")]
    pub rules: ::prost::alloc::vec::Vec<SloThresholdRule>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BurnRateThreshold {
    #[prost(message, repeated, tag="1")]
    pub rules: ::prost::alloc::vec::Vec<SloThresholdRule>,
    #[prost(oneof="burn_rate_threshold::Type", tags="2, 3")]
    pub r#type: ::core::option::Option<burn_rate_threshold::Type>,
}
/// Nested message and enum types in `BurnRateThreshold`.
pub mod burn_rate_threshold {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Type {
        #[prost(message, tag="2")]
        Dual(super::BurnRateTypeDual),
        #[prost(message, tag="3")]
        Single(super::BurnRateTypeSingle),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BurnRateTypeDual {
    #[prost(message, optional, tag="1")]
    pub time_duration: ::core::option::Option<TimeDuration>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BurnRateTypeSingle {
    #[prost(message, optional, tag="1")]
    pub time_duration: ::core::option::Option<TimeDuration>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TimeDuration {
    #[prost(uint64, optional, tag="1")]
    pub duration: ::core::option::Option<u64>,
    #[prost(enumeration="DurationUnit", tag="2")]
    pub unit: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SloThresholdRule {
    #[prost(message, optional, tag="1")]
    pub condition: ::core::option::Option<SloThresholdCondition>,
    #[prost(message, optional, tag="2")]
    pub r#override: ::core::option::Option<AlertDefOverride>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SloThresholdCondition {
    #[prost(double, optional, tag="1")]
    pub threshold: ::core::option::Option<f64>,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AlertDefPriority {
    P5OrUnspecified = 0,
    P4 = 1,
    P3 = 2,
    P2 = 3,
    P1 = 4,
}
impl AlertDefPriority {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            AlertDefPriority::P5OrUnspecified => "ALERT_DEF_PRIORITY_P5_OR_UNSPECIFIED",
            AlertDefPriority::P4 => "ALERT_DEF_PRIORITY_P4",
            AlertDefPriority::P3 => "ALERT_DEF_PRIORITY_P3",
            AlertDefPriority::P2 => "ALERT_DEF_PRIORITY_P2",
            AlertDefPriority::P1 => "ALERT_DEF_PRIORITY_P1",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "ALERT_DEF_PRIORITY_P5_OR_UNSPECIFIED" => Some(Self::P5OrUnspecified),
            "ALERT_DEF_PRIORITY_P4" => Some(Self::P4),
            "ALERT_DEF_PRIORITY_P3" => Some(Self::P3),
            "ALERT_DEF_PRIORITY_P2" => Some(Self::P2),
            "ALERT_DEF_PRIORITY_P1" => Some(Self::P1),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AlertDefType {
    LogsImmediateOrUnspecified = 0,
    LogsThreshold = 1,
    LogsAnomaly = 2,
    LogsRatioThreshold = 3,
    LogsNewValue = 4,
    LogsUniqueCount = 5,
    LogsTimeRelativeThreshold = 6,
    MetricThreshold = 7,
    MetricAnomaly = 8,
    TracingImmediate = 9,
    TracingThreshold = 10,
    Flow = 11,
    SloThreshold = 12,
}
impl AlertDefType {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            AlertDefType::LogsImmediateOrUnspecified => "ALERT_DEF_TYPE_LOGS_IMMEDIATE_OR_UNSPECIFIED",
            AlertDefType::LogsThreshold => "ALERT_DEF_TYPE_LOGS_THRESHOLD",
            AlertDefType::LogsAnomaly => "ALERT_DEF_TYPE_LOGS_ANOMALY",
            AlertDefType::LogsRatioThreshold => "ALERT_DEF_TYPE_LOGS_RATIO_THRESHOLD",
            AlertDefType::LogsNewValue => "ALERT_DEF_TYPE_LOGS_NEW_VALUE",
            AlertDefType::LogsUniqueCount => "ALERT_DEF_TYPE_LOGS_UNIQUE_COUNT",
            AlertDefType::LogsTimeRelativeThreshold => "ALERT_DEF_TYPE_LOGS_TIME_RELATIVE_THRESHOLD",
            AlertDefType::MetricThreshold => "ALERT_DEF_TYPE_METRIC_THRESHOLD",
            AlertDefType::MetricAnomaly => "ALERT_DEF_TYPE_METRIC_ANOMALY",
            AlertDefType::TracingImmediate => "ALERT_DEF_TYPE_TRACING_IMMEDIATE",
            AlertDefType::TracingThreshold => "ALERT_DEF_TYPE_TRACING_THRESHOLD",
            AlertDefType::Flow => "ALERT_DEF_TYPE_FLOW",
            AlertDefType::SloThreshold => "ALERT_DEF_TYPE_SLO_THRESHOLD",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "ALERT_DEF_TYPE_LOGS_IMMEDIATE_OR_UNSPECIFIED" => Some(Self::LogsImmediateOrUnspecified),
            "ALERT_DEF_TYPE_LOGS_THRESHOLD" => Some(Self::LogsThreshold),
            "ALERT_DEF_TYPE_LOGS_ANOMALY" => Some(Self::LogsAnomaly),
            "ALERT_DEF_TYPE_LOGS_RATIO_THRESHOLD" => Some(Self::LogsRatioThreshold),
            "ALERT_DEF_TYPE_LOGS_NEW_VALUE" => Some(Self::LogsNewValue),
            "ALERT_DEF_TYPE_LOGS_UNIQUE_COUNT" => Some(Self::LogsUniqueCount),
            "ALERT_DEF_TYPE_LOGS_TIME_RELATIVE_THRESHOLD" => Some(Self::LogsTimeRelativeThreshold),
            "ALERT_DEF_TYPE_METRIC_THRESHOLD" => Some(Self::MetricThreshold),
            "ALERT_DEF_TYPE_METRIC_ANOMALY" => Some(Self::MetricAnomaly),
            "ALERT_DEF_TYPE_TRACING_IMMEDIATE" => Some(Self::TracingImmediate),
            "ALERT_DEF_TYPE_TRACING_THRESHOLD" => Some(Self::TracingThreshold),
            "ALERT_DEF_TYPE_FLOW" => Some(Self::Flow),
            "ALERT_DEF_TYPE_SLO_THRESHOLD" => Some(Self::SloThreshold),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum NotifyOn {
    TriggeredOnlyUnspecified = 0,
    TriggeredAndResolved = 1,
}
impl NotifyOn {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            NotifyOn::TriggeredOnlyUnspecified => "NOTIFY_ON_TRIGGERED_ONLY_UNSPECIFIED",
            NotifyOn::TriggeredAndResolved => "NOTIFY_ON_TRIGGERED_AND_RESOLVED",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "NOTIFY_ON_TRIGGERED_ONLY_UNSPECIFIED" => Some(Self::TriggeredOnlyUnspecified),
            "NOTIFY_ON_TRIGGERED_AND_RESOLVED" => Some(Self::TriggeredAndResolved),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DayOfWeek {
    MondayOrUnspecified = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}
impl DayOfWeek {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            DayOfWeek::MondayOrUnspecified => "DAY_OF_WEEK_MONDAY_OR_UNSPECIFIED",
            DayOfWeek::Tuesday => "DAY_OF_WEEK_TUESDAY",
            DayOfWeek::Wednesday => "DAY_OF_WEEK_WEDNESDAY",
            DayOfWeek::Thursday => "DAY_OF_WEEK_THURSDAY",
            DayOfWeek::Friday => "DAY_OF_WEEK_FRIDAY",
            DayOfWeek::Saturday => "DAY_OF_WEEK_SATURDAY",
            DayOfWeek::Sunday => "DAY_OF_WEEK_SUNDAY",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "DAY_OF_WEEK_MONDAY_OR_UNSPECIFIED" => Some(Self::MondayOrUnspecified),
            "DAY_OF_WEEK_TUESDAY" => Some(Self::Tuesday),
            "DAY_OF_WEEK_WEDNESDAY" => Some(Self::Wednesday),
            "DAY_OF_WEEK_THURSDAY" => Some(Self::Thursday),
            "DAY_OF_WEEK_FRIDAY" => Some(Self::Friday),
            "DAY_OF_WEEK_SATURDAY" => Some(Self::Saturday),
            "DAY_OF_WEEK_SUNDAY" => Some(Self::Sunday),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LogsTimeWindowValue {
    Minutes5OrUnspecified = 0,
    Minutes10 = 1,
    Minutes15 = 2,
    Minutes30 = 3,
    Hour1 = 4,
    Hours2 = 5,
    Hours6 = 6,
    Hours12 = 7,
    Hours24 = 8,
    Hours36 = 9,
}
impl LogsTimeWindowValue {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            LogsTimeWindowValue::Minutes5OrUnspecified => "LOGS_TIME_WINDOW_VALUE_MINUTES_5_OR_UNSPECIFIED",
            LogsTimeWindowValue::Minutes10 => "LOGS_TIME_WINDOW_VALUE_MINUTES_10",
            LogsTimeWindowValue::Minutes15 => "LOGS_TIME_WINDOW_VALUE_MINUTES_15",
            LogsTimeWindowValue::Minutes30 => "LOGS_TIME_WINDOW_VALUE_MINUTES_30",
            LogsTimeWindowValue::Hour1 => "LOGS_TIME_WINDOW_VALUE_HOUR_1",
            LogsTimeWindowValue::Hours2 => "LOGS_TIME_WINDOW_VALUE_HOURS_2",
            LogsTimeWindowValue::Hours6 => "LOGS_TIME_WINDOW_VALUE_HOURS_6",
            LogsTimeWindowValue::Hours12 => "LOGS_TIME_WINDOW_VALUE_HOURS_12",
            LogsTimeWindowValue::Hours24 => "LOGS_TIME_WINDOW_VALUE_HOURS_24",
            LogsTimeWindowValue::Hours36 => "LOGS_TIME_WINDOW_VALUE_HOURS_36",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "LOGS_TIME_WINDOW_VALUE_MINUTES_5_OR_UNSPECIFIED" => Some(Self::Minutes5OrUnspecified),
            "LOGS_TIME_WINDOW_VALUE_MINUTES_10" => Some(Self::Minutes10),
            "LOGS_TIME_WINDOW_VALUE_MINUTES_15" => Some(Self::Minutes15),
            "LOGS_TIME_WINDOW_VALUE_MINUTES_30" => Some(Self::Minutes30),
            "LOGS_TIME_WINDOW_VALUE_HOUR_1" => Some(Self::Hour1),
            "LOGS_TIME_WINDOW_VALUE_HOURS_2" => Some(Self::Hours2),
            "LOGS_TIME_WINDOW_VALUE_HOURS_6" => Some(Self::Hours6),
            "LOGS_TIME_WINDOW_VALUE_HOURS_12" => Some(Self::Hours12),
            "LOGS_TIME_WINDOW_VALUE_HOURS_24" => Some(Self::Hours24),
            "LOGS_TIME_WINDOW_VALUE_HOURS_36" => Some(Self::Hours36),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LogsRatioTimeWindowValue {
    Minutes5OrUnspecified = 0,
    Minutes10 = 1,
    Minutes15 = 2,
    Minutes30 = 3,
    Hour1 = 4,
    Hours2 = 5,
    Hours4 = 6,
    Hours6 = 7,
    Hours12 = 8,
    Hours24 = 9,
    Hours36 = 10,
}
impl LogsRatioTimeWindowValue {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            LogsRatioTimeWindowValue::Minutes5OrUnspecified => "LOGS_RATIO_TIME_WINDOW_VALUE_MINUTES_5_OR_UNSPECIFIED",
            LogsRatioTimeWindowValue::Minutes10 => "LOGS_RATIO_TIME_WINDOW_VALUE_MINUTES_10",
            LogsRatioTimeWindowValue::Minutes15 => "LOGS_RATIO_TIME_WINDOW_VALUE_MINUTES_15",
            LogsRatioTimeWindowValue::Minutes30 => "LOGS_RATIO_TIME_WINDOW_VALUE_MINUTES_30",
            LogsRatioTimeWindowValue::Hour1 => "LOGS_RATIO_TIME_WINDOW_VALUE_HOUR_1",
            LogsRatioTimeWindowValue::Hours2 => "LOGS_RATIO_TIME_WINDOW_VALUE_HOURS_2",
            LogsRatioTimeWindowValue::Hours4 => "LOGS_RATIO_TIME_WINDOW_VALUE_HOURS_4",
            LogsRatioTimeWindowValue::Hours6 => "LOGS_RATIO_TIME_WINDOW_VALUE_HOURS_6",
            LogsRatioTimeWindowValue::Hours12 => "LOGS_RATIO_TIME_WINDOW_VALUE_HOURS_12",
            LogsRatioTimeWindowValue::Hours24 => "LOGS_RATIO_TIME_WINDOW_VALUE_HOURS_24",
            LogsRatioTimeWindowValue::Hours36 => "LOGS_RATIO_TIME_WINDOW_VALUE_HOURS_36",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "LOGS_RATIO_TIME_WINDOW_VALUE_MINUTES_5_OR_UNSPECIFIED" => Some(Self::Minutes5OrUnspecified),
            "LOGS_RATIO_TIME_WINDOW_VALUE_MINUTES_10" => Some(Self::Minutes10),
            "LOGS_RATIO_TIME_WINDOW_VALUE_MINUTES_15" => Some(Self::Minutes15),
            "LOGS_RATIO_TIME_WINDOW_VALUE_MINUTES_30" => Some(Self::Minutes30),
            "LOGS_RATIO_TIME_WINDOW_VALUE_HOUR_1" => Some(Self::Hour1),
            "LOGS_RATIO_TIME_WINDOW_VALUE_HOURS_2" => Some(Self::Hours2),
            "LOGS_RATIO_TIME_WINDOW_VALUE_HOURS_4" => Some(Self::Hours4),
            "LOGS_RATIO_TIME_WINDOW_VALUE_HOURS_6" => Some(Self::Hours6),
            "LOGS_RATIO_TIME_WINDOW_VALUE_HOURS_12" => Some(Self::Hours12),
            "LOGS_RATIO_TIME_WINDOW_VALUE_HOURS_24" => Some(Self::Hours24),
            "LOGS_RATIO_TIME_WINDOW_VALUE_HOURS_36" => Some(Self::Hours36),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LogsNewValueTimeWindowValue {
    Hours12OrUnspecified = 0,
    Hours24 = 1,
    Hours48 = 2,
    Hours72 = 3,
    Week1 = 4,
    Month1 = 5,
    Months2 = 6,
    Months3 = 7,
}
impl LogsNewValueTimeWindowValue {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            LogsNewValueTimeWindowValue::Hours12OrUnspecified => "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_HOURS_12_OR_UNSPECIFIED",
            LogsNewValueTimeWindowValue::Hours24 => "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_HOURS_24",
            LogsNewValueTimeWindowValue::Hours48 => "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_HOURS_48",
            LogsNewValueTimeWindowValue::Hours72 => "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_HOURS_72",
            LogsNewValueTimeWindowValue::Week1 => "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_WEEK_1",
            LogsNewValueTimeWindowValue::Month1 => "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_MONTH_1",
            LogsNewValueTimeWindowValue::Months2 => "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_MONTHS_2",
            LogsNewValueTimeWindowValue::Months3 => "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_MONTHS_3",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_HOURS_12_OR_UNSPECIFIED" => Some(Self::Hours12OrUnspecified),
            "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_HOURS_24" => Some(Self::Hours24),
            "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_HOURS_48" => Some(Self::Hours48),
            "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_HOURS_72" => Some(Self::Hours72),
            "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_WEEK_1" => Some(Self::Week1),
            "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_MONTH_1" => Some(Self::Month1),
            "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_MONTHS_2" => Some(Self::Months2),
            "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_MONTHS_3" => Some(Self::Months3),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LogsUniqueValueTimeWindowValue {
    Minute1OrUnspecified = 0,
    Minutes5 = 1,
    Minutes10 = 2,
    Minutes15 = 3,
    Minutes20 = 4,
    Minutes30 = 5,
    Hour1 = 6,
    Hours2 = 7,
    Hours4 = 8,
    Hours6 = 9,
    Hours12 = 10,
    Hours24 = 11,
    Hours36 = 12,
}
impl LogsUniqueValueTimeWindowValue {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            LogsUniqueValueTimeWindowValue::Minute1OrUnspecified => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_MINUTE_1_OR_UNSPECIFIED",
            LogsUniqueValueTimeWindowValue::Minutes5 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_MINUTES_5",
            LogsUniqueValueTimeWindowValue::Minutes10 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_MINUTES_10",
            LogsUniqueValueTimeWindowValue::Minutes15 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_MINUTES_15",
            LogsUniqueValueTimeWindowValue::Minutes20 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_MINUTES_20",
            LogsUniqueValueTimeWindowValue::Minutes30 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_MINUTES_30",
            LogsUniqueValueTimeWindowValue::Hour1 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOUR_1",
            LogsUniqueValueTimeWindowValue::Hours2 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOURS_2",
            LogsUniqueValueTimeWindowValue::Hours4 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOURS_4",
            LogsUniqueValueTimeWindowValue::Hours6 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOURS_6",
            LogsUniqueValueTimeWindowValue::Hours12 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOURS_12",
            LogsUniqueValueTimeWindowValue::Hours24 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOURS_24",
            LogsUniqueValueTimeWindowValue::Hours36 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOURS_36",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_MINUTE_1_OR_UNSPECIFIED" => Some(Self::Minute1OrUnspecified),
            "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_MINUTES_5" => Some(Self::Minutes5),
            "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_MINUTES_10" => Some(Self::Minutes10),
            "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_MINUTES_15" => Some(Self::Minutes15),
            "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_MINUTES_20" => Some(Self::Minutes20),
            "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_MINUTES_30" => Some(Self::Minutes30),
            "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOUR_1" => Some(Self::Hour1),
            "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOURS_2" => Some(Self::Hours2),
            "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOURS_4" => Some(Self::Hours4),
            "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOURS_6" => Some(Self::Hours6),
            "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOURS_12" => Some(Self::Hours12),
            "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOURS_24" => Some(Self::Hours24),
            "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOURS_36" => Some(Self::Hours36),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum MetricTimeWindowValue {
    Minutes1OrUnspecified = 0,
    Minutes5 = 1,
    Minutes10 = 2,
    Minutes15 = 3,
    Minutes20 = 4,
    Minutes30 = 5,
    Hour1 = 6,
    Hours2 = 7,
    Hours4 = 8,
    Hours6 = 9,
    Hours12 = 10,
    Hours24 = 11,
    Hours36 = 12,
}
impl MetricTimeWindowValue {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            MetricTimeWindowValue::Minutes1OrUnspecified => "METRIC_TIME_WINDOW_VALUE_MINUTES_1_OR_UNSPECIFIED",
            MetricTimeWindowValue::Minutes5 => "METRIC_TIME_WINDOW_VALUE_MINUTES_5",
            MetricTimeWindowValue::Minutes10 => "METRIC_TIME_WINDOW_VALUE_MINUTES_10",
            MetricTimeWindowValue::Minutes15 => "METRIC_TIME_WINDOW_VALUE_MINUTES_15",
            MetricTimeWindowValue::Minutes20 => "METRIC_TIME_WINDOW_VALUE_MINUTES_20",
            MetricTimeWindowValue::Minutes30 => "METRIC_TIME_WINDOW_VALUE_MINUTES_30",
            MetricTimeWindowValue::Hour1 => "METRIC_TIME_WINDOW_VALUE_HOUR_1",
            MetricTimeWindowValue::Hours2 => "METRIC_TIME_WINDOW_VALUE_HOURS_2",
            MetricTimeWindowValue::Hours4 => "METRIC_TIME_WINDOW_VALUE_HOURS_4",
            MetricTimeWindowValue::Hours6 => "METRIC_TIME_WINDOW_VALUE_HOURS_6",
            MetricTimeWindowValue::Hours12 => "METRIC_TIME_WINDOW_VALUE_HOURS_12",
            MetricTimeWindowValue::Hours24 => "METRIC_TIME_WINDOW_VALUE_HOURS_24",
            MetricTimeWindowValue::Hours36 => "METRIC_TIME_WINDOW_VALUE_HOURS_36",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "METRIC_TIME_WINDOW_VALUE_MINUTES_1_OR_UNSPECIFIED" => Some(Self::Minutes1OrUnspecified),
            "METRIC_TIME_WINDOW_VALUE_MINUTES_5" => Some(Self::Minutes5),
            "METRIC_TIME_WINDOW_VALUE_MINUTES_10" => Some(Self::Minutes10),
            "METRIC_TIME_WINDOW_VALUE_MINUTES_15" => Some(Self::Minutes15),
            "METRIC_TIME_WINDOW_VALUE_MINUTES_20" => Some(Self::Minutes20),
            "METRIC_TIME_WINDOW_VALUE_MINUTES_30" => Some(Self::Minutes30),
            "METRIC_TIME_WINDOW_VALUE_HOUR_1" => Some(Self::Hour1),
            "METRIC_TIME_WINDOW_VALUE_HOURS_2" => Some(Self::Hours2),
            "METRIC_TIME_WINDOW_VALUE_HOURS_4" => Some(Self::Hours4),
            "METRIC_TIME_WINDOW_VALUE_HOURS_6" => Some(Self::Hours6),
            "METRIC_TIME_WINDOW_VALUE_HOURS_12" => Some(Self::Hours12),
            "METRIC_TIME_WINDOW_VALUE_HOURS_24" => Some(Self::Hours24),
            "METRIC_TIME_WINDOW_VALUE_HOURS_36" => Some(Self::Hours36),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TracingTimeWindowValue {
    Minutes5OrUnspecified = 0,
    Minutes10 = 1,
    Minutes15 = 2,
    Minutes20 = 3,
    Minutes30 = 4,
    Hour1 = 5,
    Hours2 = 6,
    Hours4 = 7,
    Hours6 = 8,
    Hours12 = 9,
    Hours24 = 10,
    Hours36 = 11,
}
impl TracingTimeWindowValue {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            TracingTimeWindowValue::Minutes5OrUnspecified => "TRACING_TIME_WINDOW_VALUE_MINUTES_5_OR_UNSPECIFIED",
            TracingTimeWindowValue::Minutes10 => "TRACING_TIME_WINDOW_VALUE_MINUTES_10",
            TracingTimeWindowValue::Minutes15 => "TRACING_TIME_WINDOW_VALUE_MINUTES_15",
            TracingTimeWindowValue::Minutes20 => "TRACING_TIME_WINDOW_VALUE_MINUTES_20",
            TracingTimeWindowValue::Minutes30 => "TRACING_TIME_WINDOW_VALUE_MINUTES_30",
            TracingTimeWindowValue::Hour1 => "TRACING_TIME_WINDOW_VALUE_HOUR_1",
            TracingTimeWindowValue::Hours2 => "TRACING_TIME_WINDOW_VALUE_HOURS_2",
            TracingTimeWindowValue::Hours4 => "TRACING_TIME_WINDOW_VALUE_HOURS_4",
            TracingTimeWindowValue::Hours6 => "TRACING_TIME_WINDOW_VALUE_HOURS_6",
            TracingTimeWindowValue::Hours12 => "TRACING_TIME_WINDOW_VALUE_HOURS_12",
            TracingTimeWindowValue::Hours24 => "TRACING_TIME_WINDOW_VALUE_HOURS_24",
            TracingTimeWindowValue::Hours36 => "TRACING_TIME_WINDOW_VALUE_HOURS_36",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "TRACING_TIME_WINDOW_VALUE_MINUTES_5_OR_UNSPECIFIED" => Some(Self::Minutes5OrUnspecified),
            "TRACING_TIME_WINDOW_VALUE_MINUTES_10" => Some(Self::Minutes10),
            "TRACING_TIME_WINDOW_VALUE_MINUTES_15" => Some(Self::Minutes15),
            "TRACING_TIME_WINDOW_VALUE_MINUTES_20" => Some(Self::Minutes20),
            "TRACING_TIME_WINDOW_VALUE_MINUTES_30" => Some(Self::Minutes30),
            "TRACING_TIME_WINDOW_VALUE_HOUR_1" => Some(Self::Hour1),
            "TRACING_TIME_WINDOW_VALUE_HOURS_2" => Some(Self::Hours2),
            "TRACING_TIME_WINDOW_VALUE_HOURS_4" => Some(Self::Hours4),
            "TRACING_TIME_WINDOW_VALUE_HOURS_6" => Some(Self::Hours6),
            "TRACING_TIME_WINDOW_VALUE_HOURS_12" => Some(Self::Hours12),
            "TRACING_TIME_WINDOW_VALUE_HOURS_24" => Some(Self::Hours24),
            "TRACING_TIME_WINDOW_VALUE_HOURS_36" => Some(Self::Hours36),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LogsThresholdConditionType {
    MoreThanOrUnspecified = 0,
    LessThan = 1,
}
impl LogsThresholdConditionType {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            LogsThresholdConditionType::MoreThanOrUnspecified => "LOGS_THRESHOLD_CONDITION_TYPE_MORE_THAN_OR_UNSPECIFIED",
            LogsThresholdConditionType::LessThan => "LOGS_THRESHOLD_CONDITION_TYPE_LESS_THAN",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "LOGS_THRESHOLD_CONDITION_TYPE_MORE_THAN_OR_UNSPECIFIED" => Some(Self::MoreThanOrUnspecified),
            "LOGS_THRESHOLD_CONDITION_TYPE_LESS_THAN" => Some(Self::LessThan),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LogsAnomalyConditionType {
    MoreThanUsualOrUnspecified = 0,
}
impl LogsAnomalyConditionType {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            LogsAnomalyConditionType::MoreThanUsualOrUnspecified => "LOGS_ANOMALY_CONDITION_TYPE_MORE_THAN_USUAL_OR_UNSPECIFIED",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "LOGS_ANOMALY_CONDITION_TYPE_MORE_THAN_USUAL_OR_UNSPECIFIED" => Some(Self::MoreThanUsualOrUnspecified),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LogsRatioConditionType {
    MoreThanOrUnspecified = 0,
    LessThan = 1,
}
impl LogsRatioConditionType {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            LogsRatioConditionType::MoreThanOrUnspecified => "LOGS_RATIO_CONDITION_TYPE_MORE_THAN_OR_UNSPECIFIED",
            LogsRatioConditionType::LessThan => "LOGS_RATIO_CONDITION_TYPE_LESS_THAN",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "LOGS_RATIO_CONDITION_TYPE_MORE_THAN_OR_UNSPECIFIED" => Some(Self::MoreThanOrUnspecified),
            "LOGS_RATIO_CONDITION_TYPE_LESS_THAN" => Some(Self::LessThan),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LogsTimeRelativeConditionType {
    MoreThanOrUnspecified = 0,
    LessThan = 1,
}
impl LogsTimeRelativeConditionType {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            LogsTimeRelativeConditionType::MoreThanOrUnspecified => "LOGS_TIME_RELATIVE_CONDITION_TYPE_MORE_THAN_OR_UNSPECIFIED",
            LogsTimeRelativeConditionType::LessThan => "LOGS_TIME_RELATIVE_CONDITION_TYPE_LESS_THAN",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "LOGS_TIME_RELATIVE_CONDITION_TYPE_MORE_THAN_OR_UNSPECIFIED" => Some(Self::MoreThanOrUnspecified),
            "LOGS_TIME_RELATIVE_CONDITION_TYPE_LESS_THAN" => Some(Self::LessThan),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum MetricThresholdConditionType {
    MoreThanOrUnspecified = 0,
    LessThan = 1,
    MoreThanOrEquals = 2,
    LessThanOrEquals = 3,
}
impl MetricThresholdConditionType {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            MetricThresholdConditionType::MoreThanOrUnspecified => "METRIC_THRESHOLD_CONDITION_TYPE_MORE_THAN_OR_UNSPECIFIED",
            MetricThresholdConditionType::LessThan => "METRIC_THRESHOLD_CONDITION_TYPE_LESS_THAN",
            MetricThresholdConditionType::MoreThanOrEquals => "METRIC_THRESHOLD_CONDITION_TYPE_MORE_THAN_OR_EQUALS",
            MetricThresholdConditionType::LessThanOrEquals => "METRIC_THRESHOLD_CONDITION_TYPE_LESS_THAN_OR_EQUALS",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "METRIC_THRESHOLD_CONDITION_TYPE_MORE_THAN_OR_UNSPECIFIED" => Some(Self::MoreThanOrUnspecified),
            "METRIC_THRESHOLD_CONDITION_TYPE_LESS_THAN" => Some(Self::LessThan),
            "METRIC_THRESHOLD_CONDITION_TYPE_MORE_THAN_OR_EQUALS" => Some(Self::MoreThanOrEquals),
            "METRIC_THRESHOLD_CONDITION_TYPE_LESS_THAN_OR_EQUALS" => Some(Self::LessThanOrEquals),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum MetricAnomalyConditionType {
    MoreThanUsualOrUnspecified = 0,
    LessThanUsual = 1,
}
impl MetricAnomalyConditionType {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            MetricAnomalyConditionType::MoreThanUsualOrUnspecified => "METRIC_ANOMALY_CONDITION_TYPE_MORE_THAN_USUAL_OR_UNSPECIFIED",
            MetricAnomalyConditionType::LessThanUsual => "METRIC_ANOMALY_CONDITION_TYPE_LESS_THAN_USUAL",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "METRIC_ANOMALY_CONDITION_TYPE_MORE_THAN_USUAL_OR_UNSPECIFIED" => Some(Self::MoreThanUsualOrUnspecified),
            "METRIC_ANOMALY_CONDITION_TYPE_LESS_THAN_USUAL" => Some(Self::LessThanUsual),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TracingThresholdConditionType {
    MoreThanOrUnspecified = 0,
}
impl TracingThresholdConditionType {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            TracingThresholdConditionType::MoreThanOrUnspecified => "TRACING_THRESHOLD_CONDITION_TYPE_MORE_THAN_OR_UNSPECIFIED",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "TRACING_THRESHOLD_CONDITION_TYPE_MORE_THAN_OR_UNSPECIFIED" => Some(Self::MoreThanOrUnspecified),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LogSeverity {
    VerboseUnspecified = 0,
    Debug = 1,
    Info = 2,
    Warning = 3,
    Error = 4,
    Critical = 5,
}
impl LogSeverity {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            LogSeverity::VerboseUnspecified => "LOG_SEVERITY_VERBOSE_UNSPECIFIED",
            LogSeverity::Debug => "LOG_SEVERITY_DEBUG",
            LogSeverity::Info => "LOG_SEVERITY_INFO",
            LogSeverity::Warning => "LOG_SEVERITY_WARNING",
            LogSeverity::Error => "LOG_SEVERITY_ERROR",
            LogSeverity::Critical => "LOG_SEVERITY_CRITICAL",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "LOG_SEVERITY_VERBOSE_UNSPECIFIED" => Some(Self::VerboseUnspecified),
            "LOG_SEVERITY_DEBUG" => Some(Self::Debug),
            "LOG_SEVERITY_INFO" => Some(Self::Info),
            "LOG_SEVERITY_WARNING" => Some(Self::Warning),
            "LOG_SEVERITY_ERROR" => Some(Self::Error),
            "LOG_SEVERITY_CRITICAL" => Some(Self::Critical),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LogFilterOperationType {
    IsOrUnspecified = 0,
    Includes = 1,
    EndsWith = 2,
    StartsWith = 3,
}
impl LogFilterOperationType {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            LogFilterOperationType::IsOrUnspecified => "LOG_FILTER_OPERATION_TYPE_IS_OR_UNSPECIFIED",
            LogFilterOperationType::Includes => "LOG_FILTER_OPERATION_TYPE_INCLUDES",
            LogFilterOperationType::EndsWith => "LOG_FILTER_OPERATION_TYPE_ENDS_WITH",
            LogFilterOperationType::StartsWith => "LOG_FILTER_OPERATION_TYPE_STARTS_WITH",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "LOG_FILTER_OPERATION_TYPE_IS_OR_UNSPECIFIED" => Some(Self::IsOrUnspecified),
            "LOG_FILTER_OPERATION_TYPE_INCLUDES" => Some(Self::Includes),
            "LOG_FILTER_OPERATION_TYPE_ENDS_WITH" => Some(Self::EndsWith),
            "LOG_FILTER_OPERATION_TYPE_STARTS_WITH" => Some(Self::StartsWith),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TracingFilterOperationType {
    IsOrUnspecified = 0,
    Includes = 1,
    EndsWith = 2,
    StartsWith = 3,
    IsNot = 4,
}
impl TracingFilterOperationType {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            TracingFilterOperationType::IsOrUnspecified => "TRACING_FILTER_OPERATION_TYPE_IS_OR_UNSPECIFIED",
            TracingFilterOperationType::Includes => "TRACING_FILTER_OPERATION_TYPE_INCLUDES",
            TracingFilterOperationType::EndsWith => "TRACING_FILTER_OPERATION_TYPE_ENDS_WITH",
            TracingFilterOperationType::StartsWith => "TRACING_FILTER_OPERATION_TYPE_STARTS_WITH",
            TracingFilterOperationType::IsNot => "TRACING_FILTER_OPERATION_TYPE_IS_NOT",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "TRACING_FILTER_OPERATION_TYPE_IS_OR_UNSPECIFIED" => Some(Self::IsOrUnspecified),
            "TRACING_FILTER_OPERATION_TYPE_INCLUDES" => Some(Self::Includes),
            "TRACING_FILTER_OPERATION_TYPE_ENDS_WITH" => Some(Self::EndsWith),
            "TRACING_FILTER_OPERATION_TYPE_STARTS_WITH" => Some(Self::StartsWith),
            "TRACING_FILTER_OPERATION_TYPE_IS_NOT" => Some(Self::IsNot),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DurationUnit {
    Unspecified = 0,
    Hours = 1,
}
impl DurationUnit {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            DurationUnit::Unspecified => "DURATION_UNIT_UNSPECIFIED",
            DurationUnit::Hours => "DURATION_UNIT_HOURS",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "DURATION_UNIT_UNSPECIFIED" => Some(Self::Unspecified),
            "DURATION_UNIT_HOURS" => Some(Self::Hours),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LogsRatioGroupByFor {
    BothOrUnspecified = 0,
    NumeratorOnly = 1,
    DenumeratorOnly = 2,
}
impl LogsRatioGroupByFor {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            LogsRatioGroupByFor::BothOrUnspecified => "LOGS_RATIO_GROUP_BY_FOR_BOTH_OR_UNSPECIFIED",
            LogsRatioGroupByFor::NumeratorOnly => "LOGS_RATIO_GROUP_BY_FOR_NUMERATOR_ONLY",
            LogsRatioGroupByFor::DenumeratorOnly => "LOGS_RATIO_GROUP_BY_FOR_DENUMERATOR_ONLY",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "LOGS_RATIO_GROUP_BY_FOR_BOTH_OR_UNSPECIFIED" => Some(Self::BothOrUnspecified),
            "LOGS_RATIO_GROUP_BY_FOR_NUMERATOR_ONLY" => Some(Self::NumeratorOnly),
            "LOGS_RATIO_GROUP_BY_FOR_DENUMERATOR_ONLY" => Some(Self::DenumeratorOnly),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AutoRetireTimeframe {
    NeverOrUnspecified = 0,
    Minutes5 = 1,
    Minutes10 = 2,
    Hour1 = 3,
    Hours2 = 4,
    Hours6 = 5,
    Hours12 = 6,
    Hours24 = 7,
}
impl AutoRetireTimeframe {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            AutoRetireTimeframe::NeverOrUnspecified => "AUTO_RETIRE_TIMEFRAME_NEVER_OR_UNSPECIFIED",
            AutoRetireTimeframe::Minutes5 => "AUTO_RETIRE_TIMEFRAME_MINUTES_5",
            AutoRetireTimeframe::Minutes10 => "AUTO_RETIRE_TIMEFRAME_MINUTES_10",
            AutoRetireTimeframe::Hour1 => "AUTO_RETIRE_TIMEFRAME_HOUR_1",
            AutoRetireTimeframe::Hours2 => "AUTO_RETIRE_TIMEFRAME_HOURS_2",
            AutoRetireTimeframe::Hours6 => "AUTO_RETIRE_TIMEFRAME_HOURS_6",
            AutoRetireTimeframe::Hours12 => "AUTO_RETIRE_TIMEFRAME_HOURS_12",
            AutoRetireTimeframe::Hours24 => "AUTO_RETIRE_TIMEFRAME_HOURS_24",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "AUTO_RETIRE_TIMEFRAME_NEVER_OR_UNSPECIFIED" => Some(Self::NeverOrUnspecified),
            "AUTO_RETIRE_TIMEFRAME_MINUTES_5" => Some(Self::Minutes5),
            "AUTO_RETIRE_TIMEFRAME_MINUTES_10" => Some(Self::Minutes10),
            "AUTO_RETIRE_TIMEFRAME_HOUR_1" => Some(Self::Hour1),
            "AUTO_RETIRE_TIMEFRAME_HOURS_2" => Some(Self::Hours2),
            "AUTO_RETIRE_TIMEFRAME_HOURS_6" => Some(Self::Hours6),
            "AUTO_RETIRE_TIMEFRAME_HOURS_12" => Some(Self::Hours12),
            "AUTO_RETIRE_TIMEFRAME_HOURS_24" => Some(Self::Hours24),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LogsTimeRelativeComparedTo {
    PreviousHourOrUnspecified = 0,
    SameHourYesterday = 1,
    SameHourLastWeek = 2,
    Yesterday = 3,
    SameDayLastWeek = 4,
    SameDayLastMonth = 5,
}
impl LogsTimeRelativeComparedTo {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            LogsTimeRelativeComparedTo::PreviousHourOrUnspecified => "LOGS_TIME_RELATIVE_COMPARED_TO_PREVIOUS_HOUR_OR_UNSPECIFIED",
            LogsTimeRelativeComparedTo::SameHourYesterday => "LOGS_TIME_RELATIVE_COMPARED_TO_SAME_HOUR_YESTERDAY",
            LogsTimeRelativeComparedTo::SameHourLastWeek => "LOGS_TIME_RELATIVE_COMPARED_TO_SAME_HOUR_LAST_WEEK",
            LogsTimeRelativeComparedTo::Yesterday => "LOGS_TIME_RELATIVE_COMPARED_TO_YESTERDAY",
            LogsTimeRelativeComparedTo::SameDayLastWeek => "LOGS_TIME_RELATIVE_COMPARED_TO_SAME_DAY_LAST_WEEK",
            LogsTimeRelativeComparedTo::SameDayLastMonth => "LOGS_TIME_RELATIVE_COMPARED_TO_SAME_DAY_LAST_MONTH",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "LOGS_TIME_RELATIVE_COMPARED_TO_PREVIOUS_HOUR_OR_UNSPECIFIED" => Some(Self::PreviousHourOrUnspecified),
            "LOGS_TIME_RELATIVE_COMPARED_TO_SAME_HOUR_YESTERDAY" => Some(Self::SameHourYesterday),
            "LOGS_TIME_RELATIVE_COMPARED_TO_SAME_HOUR_LAST_WEEK" => Some(Self::SameHourLastWeek),
            "LOGS_TIME_RELATIVE_COMPARED_TO_YESTERDAY" => Some(Self::Yesterday),
            "LOGS_TIME_RELATIVE_COMPARED_TO_SAME_DAY_LAST_WEEK" => Some(Self::SameDayLastWeek),
            "LOGS_TIME_RELATIVE_COMPARED_TO_SAME_DAY_LAST_MONTH" => Some(Self::SameDayLastMonth),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum NextOp {
    AndOrUnspecified = 0,
    Or = 1,
}
impl NextOp {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            NextOp::AndOrUnspecified => "NEXT_OP_AND_OR_UNSPECIFIED",
            NextOp::Or => "NEXT_OP_OR",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "NEXT_OP_AND_OR_UNSPECIFIED" => Some(Self::AndOrUnspecified),
            "NEXT_OP_OR" => Some(Self::Or),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AlertsOp {
    AndOrUnspecified = 0,
    Or = 1,
}
impl AlertsOp {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            AlertsOp::AndOrUnspecified => "ALERTS_OP_AND_OR_UNSPECIFIED",
            AlertsOp::Or => "ALERTS_OP_OR",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "ALERTS_OP_AND_OR_UNSPECIFIED" => Some(Self::AndOrUnspecified),
            "ALERTS_OP_OR" => Some(Self::Or),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TimeframeType {
    Unspecified = 0,
    UpTo = 1,
}
impl TimeframeType {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            TimeframeType::Unspecified => "TIMEFRAME_TYPE_UNSPECIFIED",
            TimeframeType::UpTo => "TIMEFRAME_TYPE_UP_TO",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "TIMEFRAME_TYPE_UNSPECIFIED" => Some(Self::Unspecified),
            "TIMEFRAME_TYPE_UP_TO" => Some(Self::UpTo),
            _ => None,
        }
    }
}
