use std::sync::Arc;

use sqlx::PgPool;

use crate::domains::user::{
  model::User,
  repository::SqlxUserRepository,
  service::{UserService, UserServiceError, UserServiceImpl},
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn create_user(&self, name: String) -> impl std::future::Future<Output = Result<User, UserServiceError>> + Send;
  fn get_user(&self, id: &str) -> impl std::future::Future<Output = Result<User, UserServiceError>> + Send;
  fn list_users(&self) -> impl std::future::Future<Output = Result<Vec<User>, UserServiceError>> + Send;
  fn update_user(
    &self,
    id: &str,
    name: String,
  ) -> impl std::future::Future<Output = Result<(), UserServiceError>> + Send;
  fn delete_user(&self, id: &str) -> impl std::future::Future<Output = Result<(), UserServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub user_service: Arc<UserServiceImpl<SqlxUserRepository>>,
}

impl SharedAppState {
  pub async fn new(pool: PgPool) -> Self {
    let user_repository = SqlxUserRepository::new(pool);
    let user_service = Arc::new(UserServiceImpl::new(user_repository));

    Self { user_service }
  }
}

impl AppState for SharedAppState {
  async fn create_user(&self, name: String) -> Result<User, UserServiceError> {
    self.user_service.create_user(name).await
  }

  async fn get_user(&self, id: &str) -> Result<User, UserServiceError> {
    self.user_service.get_user(id).await
  }

  async fn list_users(&self) -> Result<Vec<User>, UserServiceError> {
    self.user_service.list_users().await
  }

  async fn update_user(&self, id: &str, name: String) -> Result<(), UserServiceError> {
    self.user_service.update_user(id, name).await
  }

  async fn delete_user(&self, id: &str) -> Result<(), UserServiceError> {
    self.user_service.delete_user(id).await
  }
}
