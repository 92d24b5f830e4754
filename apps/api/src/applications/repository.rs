//! Persistence for job applications.
//!
//! Every operation is a single parameterized statement inside its own
//! transaction. No retries, no optimistic locking: concurrent writers to the
//! same row are last-write-wins.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::models::application::{ApplicationStatus, JobApplication, NewApplication};

/// The store seam. `AppState` carries it as `Arc<dyn ApplicationStore>`.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn insert(&self, application: &NewApplication) -> Result<JobApplication, AppError>;

    /// All applications, newest `applied_date` first (ties: newest id first).
    async fn list_all(&self) -> Result<Vec<JobApplication>, AppError>;

    /// Returns `false` when no row has this id.
    async fn update_status(&self, id: i32, status: ApplicationStatus) -> Result<bool, AppError>;

    /// Returns `false` when no row has this id.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL
// ────────────────────────────────────────────────────────────────────────────

pub struct PgApplicationStore {
    pool: PgPool,
}

impl PgApplicationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationStore for PgApplicationStore {
    async fn insert(&self, application: &NewApplication) -> Result<JobApplication, AppError> {
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, JobApplication>(
            r#"
            INSERT INTO job_applications
                (company_name, job_role, applied_date, website, status, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, company_name, job_role, applied_date, website, status, notes
            "#,
        )
        .bind(&application.company_name)
        .bind(&application.job_role)
        .bind(application.applied_date)
        .bind(&application.website)
        .bind(application.status.as_str())
        .bind(&application.notes)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        debug!("Inserted job application {}", row.id);
        Ok(row)
    }

    async fn list_all(&self) -> Result<Vec<JobApplication>, AppError> {
        let rows = sqlx::query_as::<_, JobApplication>(
            "SELECT id, company_name, job_role, applied_date, website, status, notes
             FROM job_applications ORDER BY applied_date DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn update_status(&self, id: i32, status: ApplicationStatus) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("UPDATE job_applications SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM job_applications WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory store for handler tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
pub use memory::InMemoryStore;
