//! Transcoding of alert definitions between their configuration documents
//! and the wire documents of the alerting service.
//!
//! Problems are never returned one at a time. Every mapper pushes into a
//! [`Diagnostics`] accumulator at the JSON pointer of the offending location,
//! and callers inspect the accumulated diagnostics once a pass is complete.

mod alert;
pub mod codecs;
mod diagnostics;
mod errors;
pub mod filters;
pub mod notifications;
mod reconcile;
pub mod rules;
pub mod schedule;
mod scope;
mod validate;
pub mod variants;

pub use alert::{expand_alert, flatten_alert};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use errors::Error;
pub use reconcile::reconcile;
pub use scope::Scope;
pub use validate::{check_group_by, validate_alert};

use models::AlertDefinition;
use proto_alerts::alerts as proto;

/// Map a desired alert definition into the wire document to send.
///
/// `prior` is the previously recorded definition when updating an alert.
/// The returned document is meaningful only if the diagnostics hold no errors.
pub fn to_wire(
    desired: &AlertDefinition,
    prior: Option<&AlertDefinition>,
) -> (proto::AlertDef, Diagnostics) {
    let root = Scope::Root;
    let mut diagnostics = Diagnostics::new();

    validate_alert(desired, root, &mut diagnostics);
    let reconciled = reconcile(desired, prior);
    let wire = expand_alert(&reconciled, root, &mut diagnostics);

    tracing::debug!(
        name = %desired.name,
        has_prior = prior.is_some(),
        errors = diagnostics.errors().count(),
        "mapped alert definition to wire",
    );
    (wire, diagnostics)
}

/// Map a wire document returned by the service into an alert definition.
///
/// `prior_schedule` is the schedule of the previously recorded definition,
/// whose UTC offset is used to present schedule times.
/// The returned definition is meaningful only if the diagnostics hold no errors.
pub fn from_wire(
    wire: &proto::AlertDef,
    prior_schedule: Option<&models::Schedule>,
) -> (AlertDefinition, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let alert = flatten_alert(wire, prior_schedule, Scope::Root, &mut diagnostics);

    tracing::debug!(
        id = ?wire.id,
        errors = diagnostics.errors().count(),
        "mapped wire alert definition",
    );
    (alert, diagnostics)
}
