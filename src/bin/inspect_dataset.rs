//! Print the layout of a SQLite weather dataset: tables, columns, row counts
//! and the measurement date range.
//!
//! Usage: inspect_dataset [PATH]   (defaults to Resources/hawaii.sqlite)

use anyhow::{bail, Context};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use sqlx::Row;
use std::path::PathBuf;

use surfsup::config::DEFAULT_DATABASE_PATH;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH));

    if !path.exists() {
        bail!("dataset not found: {}", path.display());
    }

    println!("Inspecting dataset: {}", path.display());

    let options = SqliteConnectOptions::new().filename(&path).read_only(true);
    let pool = SqlitePool::connect_with(options)
        .await
        .with_context(|| format!("failed to open {}", path.display()))?;

    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .fetch_all(&pool)
            .await?;

    println!("\n=== TABLES ===");
    for table in &tables {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM \"{}\"", table))
            .fetch_one(&pool)
            .await?;
        println!("\n{} ({} rows)", table, count);

        let columns = sqlx::query(&format!("PRAGMA table_info(\"{}\")", table))
            .fetch_all(&pool)
            .await?;
        for column in columns {
            let name: String = column.try_get("name")?;
            let decl: String = column.try_get("type")?;
            let notnull: i64 = column.try_get("notnull")?;
            println!(
                "  {} {}{}",
                name,
                decl,
                if notnull != 0 { " NOT NULL" } else { "" }
            );
        }
    }

    if tables.iter().any(|t| t == "measurement") {
        let (first, last): (Option<String>, Option<String>) =
            sqlx::query_as("SELECT MIN(date), MAX(date) FROM measurement")
                .fetch_one(&pool)
                .await?;
        println!("\n=== MEASUREMENT DATES ===");
        println!("  first: {}", first.as_deref().unwrap_or("-"));
        println!("  last:  {}", last.as_deref().unwrap_or("-"));
    }

    pool.close().await;
    Ok(())
}
