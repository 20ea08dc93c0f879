use std::collections::HashMap;

use async_trait::async_trait;
use shipbridge_core::{ShipmentRecord, ShipmentRepository, StoreError};
use tokio::sync::RwLock;

/// Process-local record store. Safe for concurrent writers; contents are lost on exit.
#[derive(Default)]
pub struct InMemoryShipmentRepository {
    records: RwLock<HashMap<String, ShipmentRecord>>,
}

impl InMemoryShipmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ShipmentRepository for InMemoryShipmentRepository {
    async fn save(&self, record: &ShipmentRecord) -> Result<(), StoreError> {
        self.records
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ShipmentRecord>, StoreError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn find_by_provider(
        &self,
        provider: &str,
        limit: i64,
    ) -> Result<Vec<ShipmentRecord>, StoreError> {
        let records = self.records.read().await;
        let mut matching: Vec<ShipmentRecord> = records
            .values()
            .filter(|r| r.provider == provider)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching.truncate(limit.max(0) as usize);
        Ok(matching)
    }
}
