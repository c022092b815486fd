mod alerts;
mod computed;
mod filters;
mod flow;
mod logs;
mod metrics;
mod notifications;
mod schedule;
mod slo;
mod traces;
mod type_definition;

pub use alerts::{AlertDefinition, AlertOverride, IncidentsSettings, RetriggeringPeriod};
pub use computed::Computed;
pub use filters::{
    LabelFilter, LabelFilters, LogsFilter, MetricFilter, SimpleFilter, TracingFilter,
    TracingFilterType, TracingLabelFilters, TracingSpanFieldFilter,
};
pub use flow::{Flow, FlowAlertRef, FlowStage, FlowStagesGroup};
pub use logs::{
    LogsAnomaly, LogsAnomalyCondition, LogsAnomalyRule, LogsImmediate, LogsNewValue,
    LogsNewValueCondition, LogsNewValueRule, LogsRatioCondition, LogsRatioRule,
    LogsRatioThreshold, LogsThreshold, LogsThresholdCondition, LogsThresholdRule,
    LogsTimeRelativeCondition, LogsTimeRelativeRule, LogsTimeRelativeThreshold, LogsUniqueCount,
    LogsUniqueCountCondition, LogsUniqueCountRule, UndetectedValuesManagement,
};
pub use metrics::{
    MetricAnomaly, MetricAnomalyCondition, MetricAnomalyRule, MetricThreshold,
    MetricThresholdCondition, MetricThresholdRule, MissingValues,
};
pub use notifications::{
    FieldOverride, NotificationDestination, NotificationGroup, NotificationRouter,
    RoutingOverrides, WebhookSettings,
};
pub use schedule::{ActiveOn, Schedule, TIME_OF_DAY_RE, UTC_OFFSET_RE};
pub use slo::{
    SloBurnRate, SloCondition, SloDefinition, SloErrorBudget, SloRule, SloThreshold,
    SloTimeDuration, SloTimeWindow,
};
pub use traces::{
    TracingImmediate, TracingThreshold, TracingThresholdCondition, TracingThresholdRule,
};
pub use type_definition::{TypeDefinition, VariantKind};

/// Priority assigned to rules which set neither their own override
/// nor inherit a top-level alert priority.
pub const DEFAULT_PRIORITY: &str = "P5";

fn is_false(b: &bool) -> bool {
    !*b
}

fn default_true() -> bool {
    true
}

fn default_notify_on() -> String {
    "Triggered Only".to_string()
}

fn default_filter_operation() -> String {
    "IS".to_string()
}
