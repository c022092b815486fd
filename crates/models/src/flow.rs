use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Flow alerts fire when other alerts fire in a sequence of stages.
///
/// Stages reference other alert definitions by id. A flow may reference
/// another flow: the service owns detection of reference cycles.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
#[schemars(example = Flow::example())]
pub struct Flow {
    /// # Stages of the flow, in order.
    #[validate(length(min = 1, message = "at least one stage is required"), nested)]
    pub stages: Vec<FlowStage>,
    /// # Suppress notifications of the referenced alerts while the flow fires.
    #[serde(default)]
    pub enforce_suppression: bool,
}

impl Flow {
    pub fn example() -> Self {
        Self {
            stages: vec![FlowStage {
                flow_stages_groups: vec![FlowStagesGroup {
                    alert_defs: vec![
                        FlowAlertRef {
                            id: "a1b2c3".to_string(),
                            not: false,
                        },
                        FlowAlertRef {
                            id: "d4e5f6".to_string(),
                            not: true,
                        },
                    ],
                    next_op: "AND".to_string(),
                    alerts_op: "OR".to_string(),
                }],
                timeframe_ms: Some(600_000),
                timeframe_type: "Up To".to_string(),
            }],
            enforce_suppression: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct FlowStage {
    /// # Groups of alerts making up the stage.
    #[validate(length(min = 1, message = "at least one group is required"), nested)]
    pub flow_stages_groups: Vec<FlowStagesGroup>,
    /// # Window within which the stage must be satisfied, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe_ms: Option<i64>,
    /// # Interpretation of the window, "Unspecified" or "Up To".
    #[serde(default = "FlowStage::default_timeframe_type")]
    pub timeframe_type: String,
}

impl FlowStage {
    fn default_timeframe_type() -> String {
        "Unspecified".to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct FlowStagesGroup {
    /// # Alerts of the group.
    #[validate(length(min = 1, message = "at least one alert is required"))]
    pub alert_defs: Vec<FlowAlertRef>,
    /// # Operator joining this group with the next, "AND" or "OR".
    pub next_op: String,
    /// # Operator joining the alerts of this group, "AND" or "OR".
    pub alerts_op: String,
}

/// FlowAlertRef references another alert definition.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FlowAlertRef {
    /// # Id of the referenced alert definition.
    pub id: String,
    /// # Negate the referenced alert.
    #[serde(default)]
    pub not: bool,
}
