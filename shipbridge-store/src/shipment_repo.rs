use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use shipbridge_core::{ShipmentRecord, ShipmentRepository, StoreError};
use sqlx::PgPool;

pub struct PostgresShipmentRepository {
    pool: PgPool,
}

impl PostgresShipmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ShipmentRecordRow {
    id: String,
    provider: String,
    generic_payload: Value,
    transformed_payload: Value,
    provider_response: Value,
    success: bool,
    created_at: DateTime<Utc>,
}

impl From<ShipmentRecordRow> for ShipmentRecord {
    fn from(row: ShipmentRecordRow) -> Self {
        Self {
            id: row.id,
            provider: row.provider,
            generic_payload: row.generic_payload,
            transformed_payload: row.transformed_payload,
            provider_response: row.provider_response,
            success: row.success,
            created_at: row.created_at,
        }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, provider, generic_payload, transformed_payload,
           provider_response, success, created_at
    FROM shipment_records
"#;

#[async_trait]
impl ShipmentRepository for PostgresShipmentRepository {
    async fn save(&self, record: &ShipmentRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO shipment_records (
                id, provider, generic_payload, transformed_payload,
                provider_response, success, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&record.id)
        .bind(&record.provider)
        .bind(&record.generic_payload)
        .bind(&record.transformed_payload)
        .bind(&record.provider_response)
        .bind(record.success)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ShipmentRecord>, StoreError> {
        let sql = format!("{} WHERE id = $1", SELECT_COLUMNS);
        let row = sqlx::query_as::<_, ShipmentRecordRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::backend)?;

        Ok(row.map(ShipmentRecord::from))
    }

    async fn find_by_provider(
        &self,
        provider: &str,
        limit: i64,
    ) -> Result<Vec<ShipmentRecord>, StoreError> {
        let rows = sqlx::query_as::<_, ShipmentRecordRow>(&format!(
            "{} WHERE provider = $1 ORDER BY created_at DESC LIMIT $2",
            SELECT_COLUMNS
        ))
        .bind(provider)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        Ok(rows.into_iter().map(ShipmentRecord::from).collect())
    }
}
