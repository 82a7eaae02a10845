//! User repository for all MySQL operations on `users` and `user_roles`.
//!
//! Every read path loads the user's roles, so a `User` never leaves this
//! module without them.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use log::{debug, info};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use sqlx::{Executor, FromRow, MySql};

use crate::constants::{POINT_DEADLINE, SCAN_DEADLINE};
use crate::models::{NewUser, Role, User};
use crate::repositories::{with_deadline, RepoError, UserRepository};
use crate::utils::mask_username;

const SELECT_USER_BY_ID: &str = "SELECT id, username, email, password_hash, first_name, last_name, \
     created_at, updated_at FROM users WHERE id = ?";
const SELECT_USER_BY_USERNAME: &str = "SELECT id, username, email, password_hash, first_name, \
     last_name, created_at, updated_at FROM users WHERE username = ?";
const SELECT_USER_BY_EMAIL: &str = "SELECT id, username, email, password_hash, first_name, \
     last_name, created_at, updated_at FROM users WHERE email = ?";
const SELECT_ALL_USERS: &str = "SELECT id, username, email, password_hash, first_name, last_name, \
     created_at, updated_at FROM users ORDER BY created_at DESC, id DESC";

const SELECT_ROLES_FOR_USER: &str = "SELECT r.id, r.name FROM roles r \
     INNER JOIN user_roles ur ON r.id = ur.role_id WHERE ur.user_id = ? ORDER BY r.name";
const SELECT_ALL_GRANTS: &str = "SELECT ur.user_id, r.id, r.name FROM user_roles ur \
     INNER JOIN roles r ON r.id = ur.role_id ORDER BY r.name";

/// Open the connection pool shared by the user and role repositories.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<MySqlPool, RepoError> {
    info!("Connecting to MySQL...");
    let pool = MySqlPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(POINT_DEADLINE)
        .connect(database_url)
        .await?;
    info!("Connected to MySQL successfully!");
    Ok(pool)
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    first_name: Option<String>,
    last_name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self, roles: Vec<Role>) -> User {
        User {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
            roles,
        }
    }
}

#[derive(Debug, FromRow)]
struct GrantRow {
    user_id: i64,
    id: i64,
    name: String,
}

enum Lookup<'a> {
    Id(i64),
    Username(&'a str),
    Email(&'a str),
}

/// MySQL stores microseconds; trimming here keeps returned values equal to re-read ones.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

async fn load_roles<'e, E>(executor: E, user_id: i64) -> Result<Vec<Role>, RepoError>
where
    E: Executor<'e, Database = MySql>,
{
    Ok(sqlx::query_as::<_, Role>(SELECT_ROLES_FOR_USER)
        .bind(user_id)
        .fetch_all(executor)
        .await?)
}

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, lookup: Lookup<'_>) -> Result<Option<User>, RepoError> {
        let query = match lookup {
            Lookup::Id(id) => sqlx::query_as::<_, UserRow>(SELECT_USER_BY_ID).bind(id),
            Lookup::Username(username) => {
                sqlx::query_as::<_, UserRow>(SELECT_USER_BY_USERNAME).bind(username)
            }
            Lookup::Email(email) => sqlx::query_as::<_, UserRow>(SELECT_USER_BY_EMAIL).bind(email),
        };

        with_deadline(POINT_DEADLINE, async {
            match query.fetch_optional(&self.pool).await? {
                Some(row) => {
                    let roles = load_roles(&self.pool, row.id).await?;
                    Ok(Some(row.into_user(roles)))
                }
                None => Ok(None),
            }
        })
        .await
    }

    async fn exists(&self, sql: &'static str, value: &str) -> Result<bool, RepoError> {
        with_deadline(POINT_DEADLINE, async {
            let count: i64 = sqlx::query_scalar(sql)
                .bind(value)
                .fetch_one(&self.pool)
                .await?;
            Ok(count > 0)
        })
        .await
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, user: NewUser, roles: &[&str]) -> Result<User, RepoError> {
        debug!("Repository: Creating user {}", mask_username(&user.username));
        with_deadline(POINT_DEADLINE, async {
            let created_at = now();
            // Rolled back on drop unless committed below.
            let mut tx = self.pool.begin().await?;

            let result = sqlx::query(
                "INSERT INTO users (username, email, password_hash, first_name, last_name, \
                 created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(created_at)
            .bind(created_at)
            .execute(&mut *tx)
            .await?;
            let id = result.last_insert_id() as i64;

            for role in roles {
                let granted = sqlx::query(
                    "INSERT INTO user_roles (user_id, role_id) SELECT ?, id FROM roles WHERE name = ?",
                )
                .bind(id)
                .bind(*role)
                .execute(&mut *tx)
                .await?;
                if granted.rows_affected() == 0 {
                    return Err(RepoError::Query(format!("role {} does not exist", role)));
                }
            }

            let granted_roles = load_roles(&mut *tx, id).await?;
            tx.commit().await?;

            Ok(User {
                id,
                username: user.username,
                email: user.email,
                password_hash: user.password_hash,
                first_name: user.first_name,
                last_name: user.last_name,
                created_at,
                updated_at: created_at,
                roles: granted_roles,
            })
        })
        .await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<User>, RepoError> {
        debug!("Repository: Finding user by ID: {}", id);
        self.find_one(Lookup::Id(id)).await
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        self.find_one(Lookup::Username(username)).await
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        self.find_one(Lookup::Email(email)).await
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, RepoError> {
        self.exists("SELECT COUNT(*) FROM users WHERE username = ?", username)
            .await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepoError> {
        self.exists("SELECT COUNT(*) FROM users WHERE email = ?", email)
            .await
    }

    async fn list(&self) -> Result<Vec<User>, RepoError> {
        with_deadline(SCAN_DEADLINE, async {
            let rows = sqlx::query_as::<_, UserRow>(SELECT_ALL_USERS)
                .fetch_all(&self.pool)
                .await?;
            let grants = sqlx::query_as::<_, GrantRow>(SELECT_ALL_GRANTS)
                .fetch_all(&self.pool)
                .await?;

            let mut roles_by_user: HashMap<i64, Vec<Role>> = HashMap::new();
            for grant in grants {
                roles_by_user.entry(grant.user_id).or_default().push(Role {
                    id: grant.id,
                    name: grant.name,
                });
            }

            Ok(rows
                .into_iter()
                .map(|row| {
                    let roles = roles_by_user.remove(&row.id).unwrap_or_default();
                    row.into_user(roles)
                })
                .collect())
        })
        .await
    }

    async fn update(&self, user: &User) -> Result<User, RepoError> {
        debug!("Repository: Updating user {}", user.id);
        with_deadline(POINT_DEADLINE, async {
            let updated_at = now();
            // updated_at always changes, so affected rows equals matched rows here.
            let result = sqlx::query(
                "UPDATE users SET username = ?, email = ?, password_hash = ?, first_name = ?, \
                 last_name = ?, updated_at = ? WHERE id = ?",
            )
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(updated_at)
            .bind(user.id)
            .execute(&self.pool)
            .await?;

            if result.rows_affected() == 0 {
                return Err(RepoError::NotFound);
            }

            Ok(User {
                updated_at,
                ..user.clone()
            })
        })
        .await
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        debug!("Repository: Deleting user {}", id);
        with_deadline(POINT_DEADLINE, async {
            // user_roles rows go with the user through ON DELETE CASCADE
            let result = sqlx::query("DELETE FROM users WHERE id = ?")
                .bind(id)
                .execute(&self.pool)
                .await?;

            if result.rows_affected() == 0 {
                return Err(RepoError::NotFound);
            }
            Ok(())
        })
        .await
    }

    async fn grant_role(&self, user_id: i64, role: &str) -> Result<(), RepoError> {
        debug!("Repository: Granting {} to user {}", role, user_id);
        with_deadline(POINT_DEADLINE, async {
            let mut tx = self.pool.begin().await?;

            let role_id: Option<i64> = sqlx::query_scalar("SELECT id FROM roles WHERE name = ?")
                .bind(role)
                .fetch_optional(&mut *tx)
                .await?;
            let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
                .bind(user_id)
                .fetch_one(&mut *tx)
                .await?;

            let role_id = match role_id {
                Some(role_id) if user_count > 0 => role_id,
                _ => return Err(RepoError::NotFound),
            };

            sqlx::query("INSERT IGNORE INTO user_roles (user_id, role_id) VALUES (?, ?)")
                .bind(user_id)
                .bind(role_id)
                .execute(&mut *tx)
                .await?;

            tx.commit().await?;
            Ok(())
        })
        .await
    }
}
