use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const CREATE_JOB_APPLICATIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS job_applications (
        id           SERIAL PRIMARY KEY,
        company_name TEXT NOT NULL,
        job_role     TEXT NOT NULL,
        applied_date DATE NOT NULL,
        website      TEXT NOT NULL,
        status       TEXT NOT NULL,
        notes        TEXT
    )
"#;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Makes sure the `job_applications` table exists. Idempotent.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_JOB_APPLICATIONS).execute(pool).await?;
    info!("job_applications table ready");
    Ok(())
}
