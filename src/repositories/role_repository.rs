use async_trait::async_trait;
use log::info;
use sqlx::mysql::MySqlPool;

use crate::constants::{DEFAULT_ROLES, POINT_DEADLINE};
use crate::models::Role;
use crate::repositories::{with_deadline, RepoError, RoleRepository};

/// Repository for the `roles` table.
#[derive(Clone)]
pub struct MySqlRoleRepository {
    pool: MySqlPool,
}

impl MySqlRoleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for MySqlRoleRepository {
    async fn get_by_name(&self, name: &str) -> Result<Option<Role>, RepoError> {
        with_deadline(POINT_DEADLINE, async {
            Ok(
                sqlx::query_as::<_, Role>("SELECT id, name FROM roles WHERE name = ?")
                    .bind(name)
                    .fetch_optional(&self.pool)
                    .await?,
            )
        })
        .await
    }

    async fn list(&self) -> Result<Vec<Role>, RepoError> {
        with_deadline(POINT_DEADLINE, async {
            Ok(
                sqlx::query_as::<_, Role>("SELECT id, name FROM roles ORDER BY name")
                    .fetch_all(&self.pool)
                    .await?,
            )
        })
        .await
    }

    async fn ensure_defaults(&self) -> Result<(), RepoError> {
        with_deadline(POINT_DEADLINE, async {
            for name in DEFAULT_ROLES {
                let result = sqlx::query("INSERT IGNORE INTO roles (name) VALUES (?)")
                    .bind(name)
                    .execute(&self.pool)
                    .await?;
                if result.rows_affected() > 0 {
                    info!("Seeded role {}", name);
                }
            }
            Ok(())
        })
        .await
    }
}
