pub mod alerts;

impl alerts::AlertDef {
    /// Kind of this alert, as determined by its populated type definition.
    pub fn populated_type(&self) -> Option<alerts::AlertDefType> {
        use alerts::alert_def_properties::TypeDefinition as T;
        use alerts::AlertDefType as K;

        let kind = match self.alert_def_properties.as_ref()?.type_definition.as_ref()? {
            T::LogsImmediate(_) => K::LogsImmediateOrUnspecified,
            T::LogsThreshold(_) => K::LogsThreshold,
            T::LogsAnomaly(_) => K::LogsAnomaly,
            T::LogsRatioThreshold(_) => K::LogsRatioThreshold,
            T::LogsNewValue(_) => K::LogsNewValue,
            T::LogsUniqueCount(_) => K::LogsUniqueCount,
            T::LogsTimeRelativeThreshold(_) => K::LogsTimeRelativeThreshold,
            T::MetricThreshold(_) => K::MetricThreshold,
            T::MetricAnomaly(_) => K::MetricAnomaly,
            T::TracingImmediate(_) => K::TracingImmediate,
            T::TracingThreshold(_) => K::TracingThreshold,
            T::Flow(_) => K::Flow,
            T::SloThreshold(_) => K::SloThreshold,
        };
        Some(kind)
    }
}

#[cfg(test)]
mod test {
    use super::alerts::*;
    use prost::Message;

    fn fixture() -> AlertDef {
        AlertDef {
            id: Some("alert-1".to_string()),
            alert_def_properties: Some(AlertDefProperties {
                name: Some("too many errors".to_string()),
                priority: AlertDefPriority::P2 as i32,
                r#type: AlertDefType::MetricThreshold as i32,
                group_by_keys: vec!["service".to_string()],
                entity_labels: [("team".to_string(), "payments".to_string())].into(),
                type_definition: Some(alert_def_properties::TypeDefinition::MetricThreshold(
                    MetricThresholdType {
                        metric_filter: Some(MetricFilter {
                            r#type: Some(metric_filter::Type::Promql("sum(x)".to_string())),
                        }),
                        rules: vec![MetricThresholdRule {
                            condition: Some(MetricThresholdCondition {
                                threshold: Some(1.5),
                                for_over_pct: Some(50),
                                of_the_last: Some(MetricTimeWindow {
                                    r#type: Some(
                                        metric_time_window::Type::MetricTimeWindowDynamicDuration(
                                            "1h30m".to_string(),
                                        ),
                                    ),
                                }),
                                condition_type: MetricThresholdConditionType::LessThan as i32,
                            }),
                            r#override: None,
                        }],
                        missing_values: Some(MetricMissingValues {
                            missing_values: Some(
                                metric_missing_values::MissingValues::MinNonNullValuesPct(20),
                            ),
                        }),
                        ..Default::default()
                    },
                )),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_encoding_round_trip() {
        let alert = fixture();
        let decoded = AlertDef::decode(alert.encode_to_vec().as_slice()).unwrap();

        assert_eq!(decoded, alert);
        assert_eq!(decoded.populated_type(), Some(AlertDefType::MetricThreshold));
    }

    #[test]
    fn test_unset_type_definition() {
        let mut alert = fixture();
        alert.alert_def_properties.as_mut().unwrap().type_definition = None;
        assert_eq!(alert.populated_type(), None);

        alert.alert_def_properties = None;
        assert_eq!(alert.populated_type(), None);
    }

    #[test]
    fn test_enum_names() {
        assert_eq!(
            AlertDefPriority::from_str_name(AlertDefPriority::P1.as_str_name()),
            Some(AlertDefPriority::P1)
        );
        assert_eq!(
            DayOfWeek::Sunday.as_str_name(),
            "DAY_OF_WEEK_SUNDAY"
        );
        assert_eq!(TracingFilterOperationType::try_from(4), Ok(TracingFilterOperationType::IsNot));
        assert!(LogSeverity::try_from(42).is_err());
    }
}
