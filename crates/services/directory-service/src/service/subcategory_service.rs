//! Subcategory service - lifecycle, deletion safety and category linkage.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use common::{AppError, AppResult, OptionExt};
use domain::{
    NewSubcategory, PageQuery, PageWindow, Paginated, Subcategory, SubcategoryRequest,
    MSG_INVALID_CATEGORY_ID, MSG_SUBCATEGORY_IN_USE, MSG_SUBCATEGORY_NAME_TAKEN,
    MSG_SUBCATEGORY_NOT_FOUND,
};

use crate::repository::{CategoryRepository, SubcategoryRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Subcategory service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SubcategoryService: Send + Sync {
    /// List one page of subcategories
    async fn list(&self, query: PageQuery) -> AppResult<Paginated<Subcategory>>;

    /// Get subcategory by ID
    async fn get(&self, id: i32) -> AppResult<Subcategory>;

    /// Look up a subcategory by name in any category; absence is not an error
    async fn get_by_name(&self, name: &str) -> AppResult<Option<Subcategory>>;

    /// Create a subcategory under an existing category
    async fn create(&self, request: SubcategoryRequest) -> AppResult<Subcategory>;

    /// Rename or move an existing subcategory
    async fn update(&self, id: i32, request: SubcategoryRequest) -> AppResult<Subcategory>;

    /// Delete a subcategory no contact refers to
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Vet a subcategory built in code: structural rules and category existence
    async fn check_record(&self, record: &NewSubcategory) -> AppResult<()>;

    /// Vet and store a subcategory built in code
    async fn create_from_record(&self, record: NewSubcategory) -> AppResult<Subcategory>;
}

/// Concrete implementation of SubcategoryService.
pub struct SubcategoryManager {
    repo: Arc<dyn SubcategoryRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl SubcategoryManager {
    /// Create new subcategory service; `categories` is used for linkage checks
    pub fn new(
        repo: Arc<dyn SubcategoryRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self { repo, categories }
    }

    async fn ensure_category_exists(&self, category_id: i32) -> AppResult<()> {
        if self.categories.find_by_id(category_id).await?.is_none() {
            tracing::warn!(category_id, "Subcategory references unknown category");
            return Err(AppError::invalid_reference(MSG_INVALID_CATEGORY_ID));
        }
        Ok(())
    }

    async fn ensure_unique_name(&self, name: &str, current: Option<i32>) -> AppResult<()> {
        match self.repo.find_by_name(name).await? {
            Some(existing) if Some(existing.id) != current => {
                Err(AppError::validation(MSG_SUBCATEGORY_NAME_TAKEN))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl SubcategoryService for SubcategoryManager {
    async fn list(&self, query: PageQuery) -> AppResult<Paginated<Subcategory>> {
        let window = PageWindow::new(self.repo.count().await?, query);

        let items = match window.fetch_range() {
            Some((offset, limit)) => self.repo.page(offset, limit).await?,
            None => Vec::new(),
        };

        Ok(window.into_page(items))
    }

    async fn get(&self, id: i32) -> AppResult<Subcategory> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(MSG_SUBCATEGORY_NOT_FOUND)
    }

    async fn get_by_name(&self, name: &str) -> AppResult<Option<Subcategory>> {
        self.repo.find_by_name(name).await
    }

    async fn create(&self, request: SubcategoryRequest) -> AppResult<Subcategory> {
        request.validate()?;
        self.ensure_category_exists(request.category_id).await?;
        self.ensure_unique_name(&request.name, None).await?;

        let subcategory = self.repo.create(NewSubcategory::from(request)).await?;
        tracing::info!(
            subcategory_id = subcategory.id,
            category_id = subcategory.category_id,
            "Subcategory created"
        );
        Ok(subcategory)
    }

    async fn update(&self, id: i32, request: SubcategoryRequest) -> AppResult<Subcategory> {
        request.validate()?;
        self.get(id).await?;
        self.ensure_category_exists(request.category_id).await?;
        self.ensure_unique_name(&request.name, Some(id)).await?;

        self.repo.update(id, NewSubcategory::from(request)).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.get(id).await?;

        let dependents = self.repo.count_contacts(id).await?;
        if dependents > 0 {
            tracing::warn!(subcategory_id = id, dependents, "Subcategory delete blocked");
            return Err(AppError::conflict(MSG_SUBCATEGORY_IN_USE));
        }

        self.repo.delete(id).await?;
        tracing::info!(subcategory_id = id, "Subcategory deleted");
        Ok(())
    }

    async fn check_record(&self, record: &NewSubcategory) -> AppResult<()> {
        record.validate()?;
        self.ensure_category_exists(record.category_id).await
    }

    async fn create_from_record(&self, record: NewSubcategory) -> AppResult<Subcategory> {
        self.check_record(&record).await?;
        self.repo.create(record).await
    }
}
