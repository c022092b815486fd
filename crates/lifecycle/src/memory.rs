use super::{AlertsService, RpcError};
use proto_alerts::alerts as proto;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// MemoryAlerts is an AlertsService which holds alert definitions in memory.
///
/// Like the remote service, it assigns ids on creation, marks stored
/// definitions as not deleted, and fails calls for unknown ids with NotFound.
#[derive(Debug, Clone, Default)]
pub struct MemoryAlerts(Arc<Mutex<MemoryInner>>);

#[derive(Debug, Default)]
struct MemoryInner {
    next_id: u64,
    alerts: BTreeMap<String, proto::AlertDef>,
    fail_next: Option<String>,
}

impl MemoryAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next call with an error having `message`.
    pub async fn fail_next(&self, message: &str) {
        self.0.lock().await.fail_next = Some(message.to_string());
    }

    /// Remove an alert definition, as if deleted out-of-band.
    pub async fn remove(&self, id: &str) -> Option<proto::AlertDef> {
        self.0.lock().await.alerts.remove(id)
    }

    /// Stored alert definitions, ordered by id.
    pub async fn snapshot(&self) -> Vec<proto::AlertDef> {
        self.0.lock().await.alerts.values().cloned().collect()
    }
}

impl MemoryInner {
    fn check_failure(&mut self) -> Result<(), RpcError> {
        match self.fail_next.take() {
            Some(message) => Err(RpcError::Other(anyhow::anyhow!(message))),
            None => Ok(()),
        }
    }

    fn store(&mut self, id: String, mut alert: proto::AlertDef) -> proto::AlertDef {
        alert.id = Some(id.clone());
        if let Some(properties) = &mut alert.alert_def_properties {
            properties.deleted = Some(false);
        }
        self.alerts.insert(id, alert.clone());
        alert
    }
}

impl AlertsService for MemoryAlerts {
    async fn create<'s>(&'s self, alert: proto::AlertDef) -> Result<proto::AlertDef, RpcError> {
        let mut inner = self.0.lock().await;
        inner.check_failure()?;

        inner.next_id += 1;
        let id = format!("alert-{:04}", inner.next_id);
        Ok(inner.store(id, alert))
    }

    async fn replace<'s>(
        &'s self,
        id: String,
        alert: proto::AlertDef,
    ) -> Result<proto::AlertDef, RpcError> {
        let mut inner = self.0.lock().await;
        inner.check_failure()?;

        if !inner.alerts.contains_key(&id) {
            return Err(RpcError::NotFound(id));
        }
        Ok(inner.store(id, alert))
    }

    async fn get<'s>(&'s self, id: String) -> Result<proto::AlertDef, RpcError> {
        let mut inner = self.0.lock().await;
        inner.check_failure()?;

        inner.alerts.get(&id).cloned().ok_or(RpcError::NotFound(id))
    }

    async fn delete<'s>(&'s self, id: String) -> Result<(), RpcError> {
        let mut inner = self.0.lock().await;
        inner.check_failure()?;

        match inner.alerts.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RpcError::NotFound(id)),
        }
    }
}
