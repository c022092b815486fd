//! Create, read, update and delete of alert definitions against an
//! [`AlertsService`], transcoding between configuration and wire documents.

mod memory;
mod service;

pub use memory::MemoryAlerts;
pub use service::{AlertsService, RpcError};

use models::AlertDefinition;
use proto_alerts::alerts as proto;
use transcode::{Diagnostic, Diagnostics};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("alert definition {name:?} is invalid:\n{diagnostics}")]
    Invalid {
        name: String,
        diagnostics: Diagnostics,
    },
    #[error("alerts service returned an alert definition which could not be read:\n{0}")]
    Conversion(Diagnostics),
    #[error("alert definition {name:?} has no id, and was never created")]
    MissingId { name: String },
    #[error("alerts service {operation} failed (request: {request})")]
    Transport {
        operation: &'static str,
        request: String,
        #[source]
        source: RpcError,
    },
}

/// Applied is the state of an alert definition as recorded by the service.
#[derive(Debug)]
pub struct Applied {
    /// Alert definition re-derived from the service's response.
    pub state: AlertDefinition,
    /// Warnings of mapping the definition to and from the service.
    pub warnings: Vec<Diagnostic>,
}

/// Create the desired alert definition.
pub async fn create<S: AlertsService>(
    service: &S,
    desired: &AlertDefinition,
) -> Result<Applied, Error> {
    let (wire, mut warnings) = to_wire(desired, None)?;

    let request = format!("{wire:?}");
    let response = service
        .create(wire)
        .await
        .map_err(|source| Error::Transport {
            operation: "create",
            request,
            source,
        })?;

    let state = from_wire(&response, desired.schedule.as_ref(), &mut warnings)?;
    tracing::info!(id = ?state.id, name = %state.name, "created alert definition");

    Ok(Applied { state, warnings })
}

/// Read the current state of a recorded alert definition.
///
/// If the service no longer has the alert definition, a warning is logged and
/// None is returned: the record should be dropped, and will be re-created
/// by the next apply.
pub async fn read<S: AlertsService>(
    service: &S,
    recorded: &AlertDefinition,
) -> Result<Option<Applied>, Error> {
    let id = recorded_id(recorded)?;

    let response = match service.get(id.clone()).await {
        Ok(response) => response,
        Err(RpcError::NotFound(_)) => {
            tracing::warn!(%id, name = %recorded.name, "alert definition no longer exists; dropping it");
            return Ok(None);
        }
        Err(source) => {
            return Err(Error::Transport {
                operation: "get",
                request: id,
                source,
            })
        }
    };

    let mut warnings = Vec::new();
    let state = from_wire(&response, recorded.schedule.as_ref(), &mut warnings)?;
    tracing::debug!(%id, deleted = ?state.deleted, "read alert definition");

    Ok(Some(Applied { state, warnings }))
}

/// Replace the whole of a recorded alert definition with the desired one.
pub async fn update<S: AlertsService>(
    service: &S,
    desired: &AlertDefinition,
    recorded: &AlertDefinition,
) -> Result<Applied, Error> {
    let id = recorded_id(recorded)?;
    let (mut wire, mut warnings) = to_wire(desired, Some(recorded))?;
    wire.id = Some(id.clone());

    let request = format!("{wire:?}");
    let response = service
        .replace(id.clone(), wire)
        .await
        .map_err(|source| Error::Transport {
            operation: "replace",
            request,
            source,
        })?;

    let state = from_wire(&response, desired.schedule.as_ref(), &mut warnings)?;
    tracing::info!(%id, name = %state.name, "updated alert definition");

    Ok(Applied { state, warnings })
}

/// Delete a recorded alert definition.
/// An alert definition which no longer exists is already deleted.
pub async fn delete<S: AlertsService>(service: &S, recorded: &AlertDefinition) -> Result<(), Error> {
    let id = recorded_id(recorded)?;

    match service.delete(id.clone()).await {
        Ok(()) => {
            tracing::info!(%id, "deleted alert definition");
            Ok(())
        }
        Err(RpcError::NotFound(_)) => {
            tracing::warn!(%id, "alert definition was already deleted");
            Ok(())
        }
        Err(source) => Err(Error::Transport {
            operation: "delete",
            request: id,
            source,
        }),
    }
}

fn recorded_id(recorded: &AlertDefinition) -> Result<String, Error> {
    recorded.id.clone().ok_or_else(|| Error::MissingId {
        name: recorded.name.clone(),
    })
}

fn to_wire(
    desired: &AlertDefinition,
    prior: Option<&AlertDefinition>,
) -> Result<(proto::AlertDef, Vec<Diagnostic>), Error> {
    let (wire, diagnostics) = transcode::to_wire(desired, prior);

    let wire = diagnostics
        .clone()
        .ok_or_errors(wire)
        .map_err(|diagnostics| Error::Invalid {
            name: desired.name.clone(),
            diagnostics,
        })?;

    Ok((wire, diagnostics.into_inner()))
}

fn from_wire(
    wire: &proto::AlertDef,
    prior_schedule: Option<&models::Schedule>,
    warnings: &mut Vec<Diagnostic>,
) -> Result<AlertDefinition, Error> {
    let (state, diagnostics) = transcode::from_wire(wire, prior_schedule);

    if diagnostics.has_errors() {
        return Err(Error::Conversion(diagnostics));
    }
    warnings.extend(diagnostics.into_inner());
    Ok(state)
}
