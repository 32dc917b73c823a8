use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::info;
use warden_dns_application::ports::DevicePolicyPort;
use warden_dns_domain::DomainError;

/// Device policy backed by the auth store's SQLite database.
///
/// The auth collaborator owns accounts and sessions; this adapter reads and
/// maintains only the device→list association table.
pub struct SqliteDevicePolicy {
    pool: SqlitePool,
}

impl SqliteDevicePolicy {
    pub async fn new(pool: SqlitePool) -> Result<Self, DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS device_lists (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                device_id TEXT NOT NULL,
                list_name TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                UNIQUE(device_id, list_name)
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| DomainError::PolicyStore(e.to_string()))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_device_lists_device ON device_lists(device_id)",
        )
        .execute(&pool)
        .await
        .map_err(|e| DomainError::PolicyStore(e.to_string()))?;

        info!("Device policy store ready");
        Ok(Self { pool })
    }
}

#[async_trait]
impl DevicePolicyPort for SqliteDevicePolicy {
    async fn enabled_lists(&self, device_id: &str) -> Result<Vec<String>, DomainError> {
        sqlx::query_scalar::<_, String>(
            "SELECT list_name FROM device_lists WHERE device_id = ? ORDER BY list_name",
        )
        .bind(device_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::PolicyStore(e.to_string()))
    }

    async fn enable_list(&self, device_id: &str, list: &str) -> Result<(), DomainError> {
        sqlx::query("INSERT OR IGNORE INTO device_lists (device_id, list_name) VALUES (?, ?)")
            .bind(device_id)
            .bind(list)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::PolicyStore(e.to_string()))?;
        Ok(())
    }

    async fn disable_list(&self, device_id: &str, list: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM device_lists WHERE device_id = ? AND list_name = ?")
            .bind(device_id)
            .bind(list)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::PolicyStore(e.to_string()))?;
        Ok(())
    }
}

/// Policy for single-user deployments: no device ever has lists of its own,
/// so filtering is governed entirely by the unknown-device policy.
pub struct StaticDevicePolicy;

#[async_trait]
impl DevicePolicyPort for StaticDevicePolicy {
    async fn enabled_lists(&self, _device_id: &str) -> Result<Vec<String>, DomainError> {
        Ok(Vec::new())
    }

    async fn enable_list(&self, _device_id: &str, _list: &str) -> Result<(), DomainError> {
        Ok(())
    }

    async fn disable_list(&self, _device_id: &str, _list: &str) -> Result<(), DomainError> {
        Ok(())
    }
}
