//! Subcategory repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::entities::contact::{self, Entity as ContactEntity};
use super::entities::subcategory::{self, ActiveModel, Entity as SubcategoryEntity};
use common::{AppError, AppResult, OptionExt};
use domain::{NewSubcategory, Subcategory, MSG_SUBCATEGORY_NOT_FOUND};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Subcategory repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SubcategoryRepository: Send + Sync {
    /// Count all subcategories
    async fn count(&self) -> AppResult<u64>;

    /// Fetch a window of subcategories in id order
    async fn page(&self, offset: u64, limit: u64) -> AppResult<Vec<Subcategory>>;

    /// Find subcategory by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Subcategory>>;

    /// Find subcategory by exact name, regardless of its category
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Subcategory>>;

    /// Create a new subcategory
    async fn create(&self, record: NewSubcategory) -> AppResult<Subcategory>;

    /// Overwrite name and category of a subcategory
    async fn update(&self, id: i32, record: NewSubcategory) -> AppResult<Subcategory>;

    /// Delete subcategory by ID
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Count contacts referencing the subcategory
    async fn count_contacts(&self, id: i32) -> AppResult<u64>;
}

/// Concrete implementation of SubcategoryRepository
pub struct SubcategoryStore {
    db: DatabaseConnection,
}

impl SubcategoryStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubcategoryRepository for SubcategoryStore {
    async fn count(&self) -> AppResult<u64> {
        SubcategoryEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn page(&self, offset: u64, limit: u64) -> AppResult<Vec<Subcategory>> {
        let models = SubcategoryEntity::find()
            .order_by_asc(subcategory::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Subcategory::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Subcategory>> {
        let result = SubcategoryEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Subcategory::from))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Subcategory>> {
        let result = SubcategoryEntity::find()
            .filter(subcategory::Column::Name.eq(name))
            .order_by_asc(subcategory::Column::Id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Subcategory::from))
    }

    async fn create(&self, record: NewSubcategory) -> AppResult<Subcategory> {
        let model = new_subcategory_model(record)
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Subcategory::from(model))
    }

    async fn update(&self, id: i32, record: NewSubcategory) -> AppResult<Subcategory> {
        let subcategory = SubcategoryEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found(MSG_SUBCATEGORY_NOT_FOUND)?;

        let mut active: ActiveModel = subcategory.into();
        active.name = Set(record.name);
        active.category_id = Set(record.category_id);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Subcategory::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = SubcategoryEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(MSG_SUBCATEGORY_NOT_FOUND));
        }

        Ok(())
    }

    async fn count_contacts(&self, id: i32) -> AppResult<u64> {
        ContactEntity::find()
            .filter(contact::Column::SubcategoryId.eq(id))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}

/// Active model for inserting a subcategory.
pub(crate) fn new_subcategory_model(record: NewSubcategory) -> ActiveModel {
    ActiveModel {
        name: Set(record.name),
        category_id: Set(record.category_id),
        ..Default::default()
    }
}
