use async_trait::async_trait;
use std::error::Error;

use super::{model::User, repository::UserRepository};

#[derive(Debug)]
pub enum UserServiceError {
  UserNotFound(String),
  InternalServerError(String),
}

impl Error for UserServiceError {}

impl std::fmt::Display for UserServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      UserServiceError::UserNotFound(msg) => write!(f, "User Not Found: {}", msg),
      UserServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
    }
  }
}

// Driver error text is kept as-is; it goes to the client unredacted.
impl From<sqlx::Error> for UserServiceError {
  fn from(err: sqlx::Error) -> Self {
    UserServiceError::InternalServerError(err.to_string())
  }
}

#[async_trait]
pub trait UserService: Send + Sync {
  async fn create_user(&self, name: String) -> Result<User, UserServiceError>;
  async fn get_user(&self, id: &str) -> Result<User, UserServiceError>;
  async fn list_users(&self) -> Result<Vec<User>, UserServiceError>;
  async fn update_user(&self, id: &str, name: String) -> Result<(), UserServiceError>;
  async fn delete_user(&self, id: &str) -> Result<(), UserServiceError>;
}

pub struct UserServiceImpl<U> {
  user_repository: U,
}

impl<U> UserServiceImpl<U>
where
  U: UserRepository,
{
  pub fn new(user_repository: U) -> Self {
    Self { user_repository }
  }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
  U: UserRepository,
{
  async fn create_user(&self, name: String) -> Result<User, UserServiceError> {
    let user = self.user_repository.insert(&name).await?;

    Ok(user)
  }

  async fn get_user(&self, id: &str) -> Result<User, UserServiceError> {
    let user = self
      .user_repository
      .find_by_id(id)
      .await?
      .ok_or_else(|| UserServiceError::UserNotFound("User not found".to_string()))?;

    Ok(user)
  }

  async fn list_users(&self) -> Result<Vec<User>, UserServiceError> {
    let users = self.user_repository.list().await?;

    Ok(users)
  }

  async fn update_user(&self, id: &str, name: String) -> Result<(), UserServiceError> {
    self.user_repository.update_name(id, &name).await?;

    Ok(())
  }

  async fn delete_user(&self, id: &str) -> Result<(), UserServiceError> {
    self.user_repository.delete(id).await?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{db::schema, domains::user::repository::SqlxUserRepository};
  use sqlx::PgPool;

  #[sqlx::test]
  async fn create_then_get_round_trips(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
    schema::init(&pool).await?;

    let service = UserServiceImpl::new(SqlxUserRepository::new(pool));

    let created = service.create_user("Alice".to_string()).await?;
    assert_eq!(created.name, "Alice");
    assert!(created.id.parse::<i64>().is_ok());

    let fetched = service.get_user(&created.id).await?;
    assert_eq!(fetched.name, "Alice");
    assert_eq!(fetched.id, created.id);

    Ok(())
  }

  #[sqlx::test]
  async fn get_missing_user_is_not_found(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
    schema::init(&pool).await?;

    let service = UserServiceImpl::new(SqlxUserRepository::new(pool));

    let result = service.get_user("9999").await;
    assert!(matches!(result, Err(UserServiceError::UserNotFound(_))));

    Ok(())
  }

  #[sqlx::test]
  async fn non_numeric_id_behaves_like_missing_row(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
    schema::init(&pool).await?;

    let service = UserServiceImpl::new(SqlxUserRepository::new(pool));

    let result = service.get_user("not-a-number").await;
    assert!(matches!(result, Err(UserServiceError::UserNotFound(_))));

    service.update_user("not-a-number", "x".to_string()).await?;
    service.delete_user("not-a-number").await?;

    Ok(())
  }

  #[sqlx::test]
  async fn update_of_absent_id_succeeds(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
    schema::init(&pool).await?;

    let service = UserServiceImpl::new(SqlxUserRepository::new(pool));

    service.update_user("12345", "Nobody".to_string()).await?;

    Ok(())
  }

  #[sqlx::test]
  async fn delete_is_idempotent(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
    schema::init(&pool).await?;

    let service = UserServiceImpl::new(SqlxUserRepository::new(pool));

    let created = service.create_user("Bob".to_string()).await?;

    service.delete_user(&created.id).await?;
    service.delete_user(&created.id).await?;

    let result = service.get_user(&created.id).await;
    assert!(matches!(result, Err(UserServiceError::UserNotFound(_))));

    Ok(())
  }

  #[sqlx::test]
  async fn empty_name_is_accepted(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
    schema::init(&pool).await?;

    let service = UserServiceImpl::new(SqlxUserRepository::new(pool));

    let created = service.create_user(String::new()).await?;
    assert_eq!(created.name, "");

    let fetched = service.get_user(&created.id).await?;
    assert_eq!(fetched.name, "");

    Ok(())
  }
}
