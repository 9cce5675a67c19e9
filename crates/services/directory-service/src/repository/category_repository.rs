//! Category repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::entities::category::{self, ActiveModel, Entity as CategoryEntity};
use super::entities::contact::{self, Entity as ContactEntity};
use common::{AppError, AppResult, OptionExt};
use domain::{Category, MSG_CATEGORY_NOT_FOUND};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Category repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Count all categories
    async fn count(&self) -> AppResult<u64>;

    /// Fetch a window of categories in id order
    async fn page(&self, offset: u64, limit: u64) -> AppResult<Vec<Category>>;

    /// Find category by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Category>>;

    /// Find category by exact name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Category>>;

    /// Create a new category
    async fn create(&self, name: String) -> AppResult<Category>;

    /// Rename a category
    async fn update(&self, id: i32, name: String) -> AppResult<Category>;

    /// Delete category by ID
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Count contacts referencing the category
    async fn count_contacts(&self, id: i32) -> AppResult<u64>;
}

/// Concrete implementation of CategoryRepository
pub struct CategoryStore {
    db: DatabaseConnection,
}

impl CategoryStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for CategoryStore {
    async fn count(&self) -> AppResult<u64> {
        CategoryEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn page(&self, offset: u64, limit: u64) -> AppResult<Vec<Category>> {
        let models = CategoryEntity::find()
            .order_by_asc(category::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Category>> {
        let result = CategoryEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Category::from))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Category>> {
        let result = CategoryEntity::find()
            .filter(category::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Category::from))
    }

    async fn create(&self, name: String) -> AppResult<Category> {
        let active_model = ActiveModel {
            name: Set(name),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Category::from(model))
    }

    async fn update(&self, id: i32, name: String) -> AppResult<Category> {
        let category = CategoryEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found(MSG_CATEGORY_NOT_FOUND)?;

        let mut active: ActiveModel = category.into();
        active.name = Set(name);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Category::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = CategoryEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(MSG_CATEGORY_NOT_FOUND));
        }

        Ok(())
    }

    async fn count_contacts(&self, id: i32) -> AppResult<u64> {
        ContactEntity::find()
            .filter(contact::Column::CategoryId.eq(id))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
