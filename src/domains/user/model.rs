use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

/// Wire shape of a user record. The id column is integral, but clients see
/// it as a string.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
  pub id: String,
  pub name: String,
}

/// Create body. Bound loosely: a missing field (or an unparseable body)
/// degrades to an empty name instead of a rejection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateUserRequest {
  #[serde(rename = "Name", default)]
  pub name: String,
}

/// Update body. Malformed JSON is rejected; an absent name field binds to an
/// empty string like every other unvalidated name.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdateUserRequest {
  #[serde(default)]
  pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessageResponse {
  pub message: String,
}

/// Path ids arrive as raw strings and are never rejected client-side; a
/// non-numeric id behaves like an id with no matching row.
fn parse_id(id: &str) -> Option<i64> {
  id.parse::<i64>().ok()
}

impl User {
  pub async fn insert<'e, E>(executor: E, name: &str) -> Result<User, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    let (id,): (i64,) = sqlx::query_as("INSERT INTO users (name) VALUES ($1) RETURNING id")
      .bind(name)
      .fetch_one(executor)
      .await?;

    Ok(User {
      id: id.to_string(),
      name: name.to_string(),
    })
  }

  pub async fn find_by_id<'e, E>(executor: E, id: &str) -> Result<Option<User>, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    let Some(id) = parse_id(id) else {
      return Ok(None);
    };

    let row: Option<(i64, String)> = sqlx::query_as("SELECT id, name FROM users WHERE id = $1")
      .bind(id)
      .fetch_optional(executor)
      .await?;

    Ok(row.map(|(id, name)| User {
      id: id.to_string(),
      name,
    }))
  }

  pub async fn list<'e, E>(executor: E) -> Result<Vec<User>, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    let rows: Vec<(i64, String)> = sqlx::query_as("SELECT id, name FROM users")
      .fetch_all(executor)
      .await?;

    Ok(
      rows
        .into_iter()
        .map(|(id, name)| User {
          id: id.to_string(),
          name,
        })
        .collect(),
    )
  }

  /// Rows-affected is not inspected: updating an absent id is a no-op that
  /// still reports success to the caller. No code path ever sets deleted_at,
  /// so the filter currently excludes nothing.
  pub async fn update_name<'e, E>(executor: E, id: &str, name: &str) -> Result<(), sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    let Some(id) = parse_id(id) else {
      return Ok(());
    };

    sqlx::query("UPDATE users SET name = $1, updated_at = now() WHERE id = $2 AND deleted_at IS NULL")
      .bind(name)
      .bind(id)
      .execute(executor)
      .await?;

    Ok(())
  }

  /// Hard delete, no deleted_at filter. Deleting an absent id succeeds.
  pub async fn delete<'e, E>(executor: E, id: &str) -> Result<(), sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    let Some(id) = parse_id(id) else {
      return Ok(());
    };

    sqlx::query("DELETE FROM users WHERE id = $1")
      .bind(id)
      .execute(executor)
      .await?;

    Ok(())
  }
}
