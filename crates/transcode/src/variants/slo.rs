use crate::{codecs, rules, Diagnostics, Error, Scope};
use proto_alerts::alerts as proto;

pub fn expand_slo_threshold(
    variant: &models::SloThreshold,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::SloThresholdType {
    use proto::slo_threshold_type::Threshold;

    let models::SloThreshold {
        slo_definition: models::SloDefinition { slo_id },
        error_budget,
        burn_rate,
    } = variant;

    let threshold = match (error_budget, burn_rate) {
        (Some(models::SloErrorBudget { rules }), None) => {
            let scope = scope.push_prop("error_budget");
            Some(Threshold::ErrorBudget(proto::ErrorBudgetThreshold {
                rules: rules::expand_rules(rules, scope, diagnostics, rules::expand_slo_rule),
            }))
        }
        (None, Some(burn_rate)) => Some(Threshold::BurnRate(expand_burn_rate(
            burn_rate,
            scope.push_prop("burn_rate"),
            diagnostics,
        ))),
        _ => {
            Error::ExactlyOneOf {
                fields: &["error_budget", "burn_rate"],
            }
            .push(scope, diagnostics);
            None
        }
    };

    proto::SloThresholdType {
        slo_definition: Some(proto::SloDefinition {
            slo_id: Some(slo_id.clone()),
        }),
        threshold,
    }
}

fn expand_burn_rate(
    burn_rate: &models::SloBurnRate,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::BurnRateThreshold {
    use proto::burn_rate_threshold::Type;

    let models::SloBurnRate {
        rules,
        dual,
        single,
    } = burn_rate;

    let r#type = match (dual, single) {
        (Some(dual), None) => Some(Type::Dual(proto::BurnRateTypeDual {
            time_duration: Some(expand_duration(dual, scope.push_prop("dual"), diagnostics)),
        })),
        (None, Some(single)) => Some(Type::Single(proto::BurnRateTypeSingle {
            time_duration: Some(expand_duration(single, scope.push_prop("single"), diagnostics)),
        })),
        _ => {
            Error::ExactlyOneOf {
                fields: &["dual", "single"],
            }
            .push(scope, diagnostics);
            None
        }
    };

    proto::BurnRateThreshold {
        rules: rules::expand_rules(rules, scope, diagnostics, rules::expand_slo_rule),
        r#type,
    }
}

fn expand_duration(
    window: &models::SloTimeWindow,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::TimeDuration {
    let models::SloTimeDuration { duration, unit } = &window.time_duration;
    let scope = scope.push_prop("time_duration");

    proto::TimeDuration {
        duration: Some(*duration),
        unit: codecs::DURATION_UNIT.expand(unit, scope.push_prop("unit"), diagnostics),
    }
}

pub fn flatten_slo_threshold(
    variant: &proto::SloThresholdType,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::SloThreshold {
    use proto::burn_rate_threshold::Type;
    use proto::slo_threshold_type::Threshold;

    let proto::SloThresholdType {
        slo_definition,
        threshold,
    } = variant;

    let slo_id = match slo_definition.as_ref().and_then(|d| d.slo_id.as_ref()) {
        Some(slo_id) => slo_id.clone(),
        None => {
            Error::MissingField { field: "slo_id" }
                .push(scope.push_prop("slo_definition"), diagnostics);
            String::new()
        }
    };

    let (error_budget, burn_rate) = match threshold {
        Some(Threshold::ErrorBudget(proto::ErrorBudgetThreshold { rules })) => {
            let scope = scope.push_prop("error_budget");
            let rules = rules::flatten_rules(rules, scope, diagnostics, rules::flatten_slo_rule);
            (Some(models::SloErrorBudget { rules }), None)
        }
        Some(Threshold::BurnRate(proto::BurnRateThreshold { rules, r#type })) => {
            let scope = scope.push_prop("burn_rate");

            let (dual, single) = match r#type {
                Some(Type::Dual(proto::BurnRateTypeDual { time_duration })) => (
                    Some(flatten_duration(time_duration.as_ref(), scope.push_prop("dual"), diagnostics)),
                    None,
                ),
                Some(Type::Single(proto::BurnRateTypeSingle { time_duration })) => (
                    None,
                    Some(flatten_duration(time_duration.as_ref(), scope.push_prop("single"), diagnostics)),
                ),
                None => {
                    Error::MissingField { field: "type" }.push(scope, diagnostics);
                    (None, None)
                }
            };
            let rules = rules::flatten_rules(rules, scope, diagnostics, rules::flatten_slo_rule);

            (None, Some(models::SloBurnRate { rules, dual, single }))
        }
        None => {
            Error::MissingField { field: "threshold" }.push(scope, diagnostics);
            (None, None)
        }
    };

    models::SloThreshold {
        slo_definition: models::SloDefinition { slo_id },
        error_budget,
        burn_rate,
    }
}

fn flatten_duration(
    duration: Option<&proto::TimeDuration>,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::SloTimeWindow {
    let proto::TimeDuration { duration, unit } =
        rules::required(duration, "time_duration", scope, diagnostics);
    let scope = scope.push_prop("time_duration");

    models::SloTimeWindow {
        time_duration: models::SloTimeDuration {
            duration: duration.unwrap_or_default(),
            unit: codecs::DURATION_UNIT.flatten(unit, scope.push_prop("unit"), diagnostics),
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_slo_round_trip() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();
        let slo = models::SloThreshold::example();

        let wire = expand_slo_threshold(&slo, root, &mut diagnostics);
        assert!(matches!(
            wire.threshold,
            Some(proto::slo_threshold_type::Threshold::BurnRate(_))
        ));
        assert_eq!(flatten_slo_threshold(&wire, root, &mut diagnostics), slo);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_slo_thresholds_are_exclusive() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        let mut slo = models::SloThreshold::example();
        slo.error_budget = Some(models::SloErrorBudget {
            rules: slo.burn_rate.as_ref().unwrap().rules.clone(),
        });
        expand_slo_threshold(&slo, root, &mut diagnostics);

        let mut burn_rate = slo.burn_rate.take().unwrap();
        burn_rate.single = burn_rate.dual.clone();
        slo.error_budget = None;
        slo.burn_rate = Some(burn_rate);
        expand_slo_threshold(&slo, root.push_prop("slo_threshold"), &mut diagnostics);

        insta::assert_snapshot!(diagnostics.to_string(), @r"
        error: exactly one of error_budget, burn_rate must be set
        error: /slo_threshold/burn_rate: exactly one of dual, single must be set
        ");
    }
}
