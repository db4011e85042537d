use anyhow::{Context, Result};
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Executor, SqlitePool};
use std::{fs, path::Path, str::FromStr};

use crate::config::Settings;

pub mod chat;
pub mod users;

const SCHEMA_DIRS: [&str; 2] = ["src/databases/users", "src/databases/chat"];

const REQUIRED_TABLES: [&str; 2] = ["users", "messages"];

fn load_all_schemas(schema_dirs: &[&str]) -> Result<String> {
    let mut combined_sql = String::new();

    for dir in schema_dirs {
        let schema_path = Path::new(env!("CARGO_MANIFEST_DIR")).join(dir).join("schema.sql");
        let sql = fs::read_to_string(&schema_path)
            .with_context(|| format!("Failed to read schema file: {:?}", schema_path))?;
        combined_sql.push_str(&sql);
        combined_sql.push('\n');
    }

    Ok(combined_sql)
}

async fn check_tables_exist(pool: &SqlitePool, tables: &[&str]) -> Result<bool> {
    for &table in tables {
        let found: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        )
        .bind(table)
        .fetch_one(pool)
        .await?;

        if found == 0 {
            info!("Table '{}' does NOT exist.", table);
            return Ok(false);
        }
    }
    Ok(true)
}

/// Creates any missing tables from the `schema.sql` files.
pub async fn prepare_schema(pool: &SqlitePool) -> Result<()> {
    if check_tables_exist(pool, &REQUIRED_TABLES).await? {
        info!("All required tables exist.");
        return Ok(());
    }

    info!("Some tables missing. Running schema SQL to create tables...");
    let combined_schema_sql = load_all_schemas(&SCHEMA_DIRS)?;

    for statement in combined_schema_sql.split(';') {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }
        pool.execute(statement)
            .await
            .with_context(|| format!("Failed to execute schema statement: {}", statement))?;
    }

    info!("Schema SQL executed successfully.");
    Ok(())
}

pub async fn setup_backend(settings: &Settings) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&settings.database_url)
        .with_context(|| format!("Invalid DATABASE_URL: {}", settings.database_url))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    prepare_schema(&pool).await?;
    Ok(pool)
}
