use async_trait::async_trait;
use sqlx::PgPool;

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
  async fn insert(&self, name: &str) -> Result<User, sqlx::Error>;
  async fn find_by_id(&self, id: &str) -> Result<Option<User>, sqlx::Error>;
  async fn list(&self) -> Result<Vec<User>, sqlx::Error>;
  async fn update_name(&self, id: &str, name: &str) -> Result<(), sqlx::Error>;
  async fn delete(&self, id: &str) -> Result<(), sqlx::Error>;
}

pub struct SqlxUserRepository {
  pub pool: PgPool,
}

impl SqlxUserRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
  async fn insert(&self, name: &str) -> Result<User, sqlx::Error> {
    User::insert(&self.pool, name).await
  }

  async fn find_by_id(&self, id: &str) -> Result<Option<User>, sqlx::Error> {
    User::find_by_id(&self.pool, id).await
  }

  async fn list(&self) -> Result<Vec<User>, sqlx::Error> {
    User::list(&self.pool).await
  }

  async fn update_name(&self, id: &str, name: &str) -> Result<(), sqlx::Error> {
    User::update_name(&self.pool, id, name).await
  }

  async fn delete(&self, id: &str) -> Result<(), sqlx::Error> {
    User::delete(&self.pool, id).await
  }
}
