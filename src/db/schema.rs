use sqlx::PgPool;

/// Creates the users table if it does not exist yet. Safe to run on every
/// startup; the process must not serve requests if this fails.
pub async fn init(pool: &PgPool) -> Result<(), sqlx::Error> {
  sqlx::query(
    r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            deleted_at TIMESTAMPTZ NULL
        )
        "#,
  )
  .execute(pool)
  .await?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[sqlx::test]
  async fn init_is_idempotent(pool: PgPool) -> Result<(), sqlx::Error> {
    init(&pool).await?;
    init(&pool).await?;

    sqlx::query("INSERT INTO users (name) VALUES ($1)")
      .bind("after double init")
      .execute(&pool)
      .await?;

    Ok(())
  }
}
