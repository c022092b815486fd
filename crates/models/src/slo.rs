use super::AlertOverride;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// SloThreshold alerts fire on the error budget or burn rate of an SLO.
/// Exactly one of `error_budget` or `burn_rate` must be set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
#[schemars(example = SloThreshold::example())]
pub struct SloThreshold {
    pub slo_definition: SloDefinition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub error_budget: Option<SloErrorBudget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub burn_rate: Option<SloBurnRate>,
}

impl SloThreshold {
    pub fn example() -> Self {
        Self {
            slo_definition: SloDefinition {
                slo_id: "slo-checkout-availability".to_string(),
            },
            error_budget: None,
            burn_rate: Some(SloBurnRate {
                rules: vec![SloRule {
                    condition: SloCondition { threshold: 2.0 },
                    r#override: Some(AlertOverride::with_priority("P1")),
                }],
                dual: Some(SloTimeWindow {
                    time_duration: SloTimeDuration {
                        duration: 1,
                        unit: "HOURS".to_string(),
                    },
                }),
                single: None,
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SloDefinition {
    /// # Id of the referenced SLO.
    pub slo_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct SloErrorBudget {
    #[validate(length(min = 1, message = "at least one rule is required"))]
    pub rules: Vec<SloRule>,
}

/// SloBurnRate sets exactly one of `dual` or `single`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct SloBurnRate {
    #[validate(length(min = 1, message = "at least one rule is required"))]
    pub rules: Vec<SloRule>,
    /// # Evaluate over a long and a short window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dual: Option<SloTimeWindow>,
    /// # Evaluate over a single window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single: Option<SloTimeWindow>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SloRule {
    pub condition: SloCondition,
    #[serde(rename = "override", default, skip_serializing_if = "Option::is_none")]
    pub r#override: Option<AlertOverride>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SloCondition {
    pub threshold: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SloTimeWindow {
    pub time_duration: SloTimeDuration,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SloTimeDuration {
    pub duration: u64,
    /// # Unit of the duration, "HOURS".
    pub unit: String,
}
