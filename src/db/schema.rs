use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

const SCHEMA_SQL: &str = include_str!("../../migrations/001_initial_schema.sql");

/// Apply the embedded schema at startup.
///
/// Every statement is `IF NOT EXISTS`, so this is an idempotent bootstrap,
/// not a migration framework.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    info!("Ensuring database schema...");

    for (i, statement) in split_sql_statements(SCHEMA_SQL).iter().enumerate() {
        sqlx::query(statement)
            .execute(pool)
            .await
            .with_context(|| {
                format!(
                    "Failed to execute schema statement {}: {}",
                    i + 1,
                    &statement[..statement.len().min(100)]
                )
            })?;
    }

    info!("Database schema is up to date");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();

    for line in sql.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("--") {
            continue;
        }

        current.push_str(line);
        current.push('\n');

        if trimmed.ends_with(';') {
            statements.push(current.trim().to_string());
            current.clear();
        }
    }

    if !current.trim().is_empty() {
        statements.push(current.trim().to_string());
    }

    statements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_sql_creates_both_tables() {
        assert!(SCHEMA_SQL.contains("CREATE TABLE IF NOT EXISTS companies"));
        assert!(SCHEMA_SQL.contains("CREATE TABLE IF NOT EXISTS invoices"));
        assert!(SCHEMA_SQL.contains("ON DELETE CASCADE"));
    }

    #[test]
    fn test_split_sql_statements() {
        let statements = split_sql_statements(SCHEMA_SQL);
        assert_eq!(statements.len(), 3);
        assert!(statements.iter().all(|s| s.ends_with(';')));
        assert!(statements.iter().all(|s| !s.contains("--")));
    }
}
