use crate::{codecs, rules, Diagnostics, Scope};
use proto_alerts::alerts as proto;

pub fn expand_flow(
    flow: &models::Flow,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::FlowType {
    let models::Flow {
        stages,
        enforce_suppression,
    } = flow;
    let s_scope = scope.push_prop("stages");

    let stages = stages
        .iter()
        .enumerate()
        .map(|(index, stage)| expand_stage(stage, s_scope.push_item(index), diagnostics))
        .collect();

    proto::FlowType {
        stages,
        enforce_suppression: Some(*enforce_suppression),
    }
}

fn expand_stage(
    stage: &models::FlowStage,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::FlowStages {
    let models::FlowStage {
        flow_stages_groups,
        timeframe_ms,
        timeframe_type,
    } = stage;
    let g_scope = scope.push_prop("flow_stages_groups");

    let groups = flow_stages_groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let scope = g_scope.push_item(index);
            let models::FlowStagesGroup {
                alert_defs,
                next_op,
                alerts_op,
            } = group;

            proto::FlowStagesGroup {
                alert_defs: alert_defs
                    .iter()
                    .map(|models::FlowAlertRef { id, not }| proto::FlowStagesGroupsAlertDefs {
                        id: Some(id.clone()),
                        not: Some(*not),
                    })
                    .collect(),
                next_op: codecs::FLOW_NEXT_OP.expand(
                    next_op,
                    scope.push_prop("next_op"),
                    diagnostics,
                ),
                alerts_op: codecs::FLOW_ALERTS_OP.expand(
                    alerts_op,
                    scope.push_prop("alerts_op"),
                    diagnostics,
                ),
            }
        })
        .collect();

    proto::FlowStages {
        timeframe_ms: *timeframe_ms,
        timeframe_type: codecs::FLOW_TIMEFRAME_TYPE.expand(
            timeframe_type,
            scope.push_prop("timeframe_type"),
            diagnostics,
        ),
        flow_stages: Some(proto::flow_stages::FlowStages::FlowStagesGroups(
            proto::FlowStagesGroups { groups },
        )),
    }
}

pub fn flatten_flow(
    flow: &proto::FlowType,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::Flow {
    let proto::FlowType {
        stages,
        enforce_suppression,
    } = flow;
    let s_scope = scope.push_prop("stages");

    let stages = stages
        .iter()
        .enumerate()
        .map(|(index, stage)| flatten_stage(stage, s_scope.push_item(index), diagnostics))
        .collect();

    models::Flow {
        stages,
        enforce_suppression: enforce_suppression.unwrap_or_default(),
    }
}

fn flatten_stage(
    stage: &proto::FlowStages,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::FlowStage {
    let proto::FlowStages {
        timeframe_ms,
        timeframe_type,
        flow_stages,
    } = stage;
    let g_scope = scope.push_prop("flow_stages_groups");

    let groups: &[proto::FlowStagesGroup] = match flow_stages {
        Some(proto::flow_stages::FlowStages::FlowStagesGroups(groups)) => groups.groups.as_slice(),
        None => &[],
    };

    let flow_stages_groups = groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let scope = g_scope.push_item(index);
            let a_scope = scope.push_prop("alert_defs");
            let proto::FlowStagesGroup {
                alert_defs,
                next_op,
                alerts_op,
            } = group;

            models::FlowStagesGroup {
                alert_defs: alert_defs
                    .iter()
                    .enumerate()
                    .map(|(index, proto::FlowStagesGroupsAlertDefs { id, not })| {
                        models::FlowAlertRef {
                            id: rules::required(
                                id.as_ref(),
                                "id",
                                a_scope.push_item(index),
                                diagnostics,
                            ),
                            not: not.unwrap_or_default(),
                        }
                    })
                    .collect(),
                next_op: codecs::FLOW_NEXT_OP.flatten(
                    *next_op,
                    scope.push_prop("next_op"),
                    diagnostics,
                ),
                alerts_op: codecs::FLOW_ALERTS_OP.flatten(
                    *alerts_op,
                    scope.push_prop("alerts_op"),
                    diagnostics,
                ),
            }
        })
        .collect();

    models::FlowStage {
        flow_stages_groups,
        timeframe_ms: *timeframe_ms,
        timeframe_type: codecs::FLOW_TIMEFRAME_TYPE.flatten(
            *timeframe_type,
            scope.push_prop("timeframe_type"),
            diagnostics,
        ),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_flow_round_trip() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();
        let flow = models::Flow::example();

        let wire = expand_flow(&flow, root, &mut diagnostics);
        assert_eq!(flatten_flow(&wire, root, &mut diagnostics), flow);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_flow_operator_errors() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        let mut flow = models::Flow::example();
        flow.stages[0].flow_stages_groups[0].alerts_op = "XOR".to_string();
        flow.stages[0].timeframe_type = "Within".to_string();
        expand_flow(&flow, root, &mut diagnostics);

        let paths: Vec<_> = diagnostics.iter().map(|d| d.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                "/stages/0/flow_stages_groups/0/alerts_op",
                "/stages/0/timeframe_type",
            ]
        );
    }
}
