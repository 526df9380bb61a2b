use std::time::Duration;

use serde_json::Value;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use super::{Condition, Gateway, Record, Scalar, Select, Session, check_identifier, into_record};
use crate::common::GatewayError;
use crate::models::Collection;
use crate::services::PasswordManager;

/// Gateway backed by the hosted Postgres database.
pub struct PgGateway {
    pub pool: PgPool,
}

impl PgGateway {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, GatewayError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the admin account, or resets its password when it exists.
    pub async fn upsert_admin(&self, email: &str, password: &str) -> Result<(), GatewayError> {
        let hash = PasswordManager::hash_password(password)
            .map_err(|e| GatewayError::PasswordHash(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO admin_users (email, password_hash) VALUES ($1, $2)
            ON CONFLICT (email) DO UPDATE SET password_hash = EXCLUDED.password_hash
            "#,
        )
        .bind(email)
        .bind(hash)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn push_condition(qb: &mut QueryBuilder<'_, Postgres>, condition: &Condition) {
    qb.push(&condition.field).push(condition.op.as_sql());

    match &condition.value {
        Scalar::Bool(v) => qb.push_bind(*v),
        Scalar::Int(v) => qb.push_bind(*v),
        Scalar::Text(v) => qb.push_bind(v.clone()),
        Scalar::Time(v) => qb.push_bind(*v),
    };
}

fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, query: &Select) {
    let mut keyword = " WHERE ";

    for condition in &query.conditions {
        qb.push(keyword);
        push_condition(qb, condition);
        keyword = " AND ";
    }

    if !query.any_of.is_empty() {
        qb.push(keyword).push("(");
        for (i, condition) in query.any_of.iter().enumerate() {
            if i > 0 {
                qb.push(" OR ");
            }
            push_condition(qb, condition);
        }
        qb.push(")");
    }
}

impl Gateway for PgGateway {
    async fn select(&self, query: &Select) -> Result<Vec<Record>, GatewayError> {
        query.validate()?;

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT to_jsonb(t) AS row FROM ");
        qb.push(query.collection.as_str()).push(" t");
        push_filters(&mut qb, query);

        if let Some(order) = &query.order_by {
            let direction = if order.ascending { " ASC" } else { " DESC" };
            qb.push(format!(" ORDER BY {}{} NULLS LAST", order.field, direction));
        }

        if let Some(limit) = query.limit {
            qb.push(" LIMIT ").push_bind(limit);
        }

        let rows = qb
            .build_query_as::<(Value,)>()
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|(row,)| into_record(row, query.collection))
            .collect()
    }

    async fn count(&self, query: &Select) -> Result<u64, GatewayError> {
        query.validate()?;

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM ");
        qb.push(query.collection.as_str()).push(" t");
        push_filters(&mut qb, query);

        let (count,): (i64,) = qb.build_query_as().fetch_one(&self.pool).await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn insert(&self, collection: Collection, record: Record) -> Result<(), GatewayError> {
        if record.is_empty() {
            return Err(GatewayError::EmptyRecord(collection));
        }

        let columns: Vec<String> = record.keys().cloned().collect();
        for column in &columns {
            check_identifier(column)?;
        }
        let column_list = columns.join(", ");

        // Only the supplied columns are written so table defaults still apply.
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("INSERT INTO ");
        qb.push(collection.as_str())
            .push(format!(" ({column_list}) SELECT {column_list} FROM jsonb_populate_record(NULL::"))
            .push(collection.as_str())
            .push(", ")
            .push_bind(Value::Object(record))
            .push(")");

        qb.build().execute(&self.pool).await?;

        Ok(())
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, GatewayError> {
        let account = sqlx::query_as::<_, (Uuid, String)>(
            r#"SELECT id, password_hash FROM admin_users WHERE email = $1"#,
        )
        .bind(email.trim())
        .fetch_optional(&self.pool)
        .await?;

        // Verify against a dummy hash for unknown emails so both paths cost the same.
        let (user_id, stored_hash) = match account {
            Some((id, hash)) => (Some(id), hash),
            None => (None, PasswordManager::dummy_hash().to_string()),
        };

        let password_valid =
            PasswordManager::verify_password(password, &stored_hash).unwrap_or(false);

        let Some(user_id) = user_id.filter(|_| password_valid) else {
            return Err(GatewayError::InvalidCredentials);
        };

        let session = sqlx::query_as::<_, Session>(
            r#"
            WITH created AS (
                INSERT INTO admin_sessions (token, user_id, expires_at)
                VALUES ($1, $2, now() + interval '12 hours')
                RETURNING token, user_id, expires_at
            )
            SELECT c.token, u.email, c.expires_at
            FROM created c
            JOIN admin_users u ON u.id = c.user_id
            "#,
        )
        .bind(Uuid::new_v4().simple().to_string())
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(session)
    }

    async fn sign_out(&self, token: &str) -> Result<(), GatewayError> {
        sqlx::query(r#"DELETE FROM admin_sessions WHERE token = $1"#)
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn get_session(&self, token: &str) -> Result<Option<Session>, GatewayError> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            SELECT s.token, u.email, s.expires_at
            FROM admin_sessions s
            JOIN admin_users u ON u.id = s.user_id
            WHERE s.token = $1 AND s.expires_at > now()
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(session)
    }
}
