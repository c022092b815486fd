use proto_alerts::alerts as proto;
use std::future::Future;

/// RpcError is a failed call of the alerts service.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("alert definition {0} was not found")]
    NotFound(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// AlertsService is the remote service which stores alert definitions.
///
/// Implementations own transport concerns such as authentication and retries.
pub trait AlertsService: Send + Sync {
    /// Create an alert definition, returning it as stored with its assigned id.
    fn create<'s>(
        &'s self,
        alert: proto::AlertDef,
    ) -> impl Future<Output = Result<proto::AlertDef, RpcError>> + Send + 's;

    /// Replace the whole of the identified alert definition.
    fn replace<'s>(
        &'s self,
        id: String,
        alert: proto::AlertDef,
    ) -> impl Future<Output = Result<proto::AlertDef, RpcError>> + Send + 's;

    fn get<'s>(
        &'s self,
        id: String,
    ) -> impl Future<Output = Result<proto::AlertDef, RpcError>> + Send + 's;

    fn delete<'s>(&'s self, id: String) -> impl Future<Output = Result<(), RpcError>> + Send + 's;
}
